use leptos::prelude::*;

/// Stroke paths (24x24 viewBox) of each icon.
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "plus" => &["M12 5v14", "M5 12h14"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "edit" => &["M12 20h9", "M16.5 3.5a2.1 2.1 0 0 1 3 3L7 19l-4 1 1-4Z"],
        "delete" => &["M3 6h18", "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6", "M10 11v6", "M14 11v6", "M9 6V4h6v2"],
        "eye" => &["M2 12s3.5-7 10-7 10 7 10 7-3.5 7-10 7S2 12 2 12Z", "M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6Z"],
        "refresh" => &["M21 12a9 9 0 1 1-2.64-6.36", "M21 3v6h-6"],
        "search" => &["M11 4a7 7 0 1 0 0 14 7 7 0 0 0 0-14Z", "M21 21l-4.35-4.35"],
        "users" => &["M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2", "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8Z", "M23 21v-2a4 4 0 0 0-3-3.87", "M16 3.13a4 4 0 0 1 0 7.75"],
        "gem" => &["M6 3h12l4 6-10 12L2 9Z", "M2 9h20", "M12 21 8 9l4-6 4 6-4 12"],
        "tag" => &["M20.6 13.4 13.4 20.6a2 2 0 0 1-2.8 0L2 12V2h10l8.6 8.6a2 2 0 0 1 0 2.8Z", "M7 7h.01"],
        "layers" => &["M12 2 2 7l10 5 10-5Z", "M2 17l10 5 10-5", "M2 12l10 5 10-5"],
        "box" => &["M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z", "M3.27 6.96 12 12l8.73-5.04", "M12 22V12"],
        "file-text" => &["M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8Z", "M14 2v6h6", "M16 13H8", "M16 17H8"],
        "shopping-cart" => &["M1 1h4l2.7 13.4a2 2 0 0 0 2 1.6h9.7a2 2 0 0 0 2-1.6L23 6H6", "M9 21h.01", "M20 21h.01"],
        "bar-chart" => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        "calculator" => &["M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2Z", "M8 6h8", "M8 14h.01", "M12 14h.01", "M16 14h.01", "M8 18h.01", "M12 18h.01", "M16 18h.01"],
        "percent" => &["M19 5 5 19", "M6.5 4a2.5 2.5 0 1 0 0 5 2.5 2.5 0 0 0 0-5Z", "M17.5 15a2.5 2.5 0 1 0 0 5 2.5 2.5 0 0 0 0-5Z"],
        "trending-up" => &["M23 6l-9.5 9.5-5-5L1 18", "M17 6h6v6"],
        "log-out" => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5", "M21 12H9"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "chevron-down" => &["M6 9l6 6 6-6"],
        "menu" => &["M3 12h18", "M3 6h18", "M3 18h18"],
        "arrow-left" => &["M19 12H5", "M12 19l-7-7 7-7"],
        "save" => &["M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2Z", "M17 21v-8H7v8", "M7 3v5h8"],
        _ => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Z", "M12 8v4l3 3"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let size = if name.starts_with("chevron") { "16" } else { "18" };
    let paths = icon_paths(name);

    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
