use leptos::prelude::*;

#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error" or "neutral" (default).
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        format!(
            "badge badge--{}",
            variant.get().unwrap_or_else(|| "neutral".to_string())
        )
    };

    view! { <span class=class>{children()}</span> }
}

/// Badge variant for stock and order status codes.
pub fn status_variant(code: &str) -> &'static str {
    match code {
        "AVAILABLE" | "COMPLETED" => "success",
        "RESERVED" | "PENDING" | "IN_PROGRESS" => "warning",
        "SOLD" | "CONFIRMED" => "primary",
        "CANCELLED" => "error",
        _ => "neutral",
    }
}

/// Status code rendered as a colored badge.
#[component]
pub fn StatusBadge(#[prop(into)] code: String, #[prop(into)] label: String) -> impl IntoView {
    view! { <Badge variant=status_variant(&code).to_string()>{label}</Badge> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_variants() {
        assert_eq!(status_variant("AVAILABLE"), "success");
        assert_eq!(status_variant("IN_PROGRESS"), "warning");
        assert_eq!(status_variant("CANCELLED"), "error");
        assert_eq!(status_variant("whatever"), "neutral");
    }
}
