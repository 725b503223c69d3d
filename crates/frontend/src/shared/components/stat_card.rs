use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Card;

/// Summary tile: label, preformatted value and an optional note.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)] value: Signal<String>,
    /// Optional note below the value
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <Card class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
        </Card>
    }
}
