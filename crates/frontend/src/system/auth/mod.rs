pub mod context;
pub mod storage;
