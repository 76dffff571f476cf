use leptos::prelude::*;

pub fn icon(name: &str) -> AnyView {
    match name {
        "learn" => view! {
            <svg width="32" height="32" viewBox="0 0 32 32" fill="none" aria-hidden="true">
                <path d="M4 14 16 4l12 10v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2z" fill="#FFC800"/>
                <rect x="12" y="19" width="8" height="11" rx="1" fill="#E5A000"/>
            </svg>
        }.into_any(),
        "profile" => view! {
            <svg width="32" height="32" viewBox="0 0 32 32" fill="none" aria-hidden="true">
                <circle cx="16" cy="11" r="6" fill="#CE82FF"/>
                <path d="M5 28a11 11 0 0 1 22 0z" fill="#CE82FF"/>
            </svg>
        }.into_any(),
        "leaderboards" => view! {
            <svg width="32" height="32" viewBox="0 0 32 32" fill="none" aria-hidden="true">
                <path d="M9 4h14v8a7 7 0 0 1-14 0z" fill="#FFC800"/>
                <path d="M9 7H4a5 5 0 0 0 5 5M23 7h5a5 5 0 0 1-5 5" stroke="#E5A000" stroke-width="2"/>
                <rect x="14" y="19" width="4" height="6" fill="#E5A000"/>
                <rect x="9" y="25" width="14" height="4" rx="1" fill="#FFC800"/>
            </svg>
        }.into_any(),
        "shop" => view! {
            <svg width="32" height="32" viewBox="0 0 32 32" fill="none" aria-hidden="true">
                <path d="M6 10h20l-2 18H8z" fill="#FF4B4B"/>
                <path d="M11 10V8a5 5 0 0 1 10 0v2" stroke="#EA2B2B" stroke-width="2"/>
            </svg>
        }.into_any(),
        "translator" => view! {
            <svg width="46" height="46" viewBox="0 0 46 46" fill="none" aria-hidden="true">
                <circle cx="23" cy="23" r="19" fill="#58CC02" stroke="#58CC02" stroke-width="2"/>
                <text x="23" y="27" text-anchor="middle" font-size="10" fill="white">"T"</text>
            </svg>
        }.into_any(),
        "more" => view! {
            <svg width="46" height="46" viewBox="0 0 46 46" fill="none" aria-hidden="true">
                <circle cx="23" cy="23" r="19" fill="#CE82FF" stroke="#CE82FF" stroke-width="2"/>
                <circle cx="15" cy="23" r="2" fill="white"/>
                <circle cx="23" cy="23" r="2" fill="white"/>
                <circle cx="31" cy="23" r="2" fill="white"/>
            </svg>
        }.into_any(),
        "x" => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M18 6 6 18"/>
                <path d="m6 6 12 12"/>
            </svg>
        }.into_any(),
        _ => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="12" cy="12" r="10"/>
                <path d="M12 8v4l3 3"/>
            </svg>
        }.into_any(),
    }
}
