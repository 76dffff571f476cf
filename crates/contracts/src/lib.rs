pub mod enums;
pub mod system;
