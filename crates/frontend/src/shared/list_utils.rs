//! Client-side list filtering and the search box that drives it.

use contracts::domain::common::Record;
use leptos::prelude::*;
use serde_json::Value;

/// Types that can be matched against a search query.
pub trait Searchable {
    /// `query` is already lowercased and non-empty.
    fn matches_filter(&self, query: &str) -> bool;
}

impl Searchable for Record {
    /// Case-insensitive substring match against every string-typed value.
    fn matches_filter(&self, query: &str) -> bool {
        self.values().any(|value| match value {
            Value::String(s) => s.to_lowercase().contains(query),
            _ => false,
        })
    }
}

/// Items matching `filter`. A blank filter keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let query = filter.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&query))
        .cloned()
        .collect()
}

/// Search box with a clear button. Reports every keystroke.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let placeholder = move || placeholder.get().unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="search-input">
            <input
                type="text"
                class="form__input search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_case_insensitively() {
        let records = vec![
            Record::new().with("name", "Acme"),
            Record::new().with("name", "Beta"),
        ];
        assert_eq!(filter_list(&records, "ac"), vec![Record::new().with("name", "Acme")]);
        assert_eq!(filter_list(&records, "BET").len(), 1);
    }

    #[test]
    fn blank_query_keeps_everything() {
        let records = vec![Record::new().with("name", "Acme")];
        assert_eq!(filter_list(&records, "   "), records);
    }

    #[test]
    fn only_string_values_are_searched() {
        let records = vec![Record::new().with("pieces", 42).with("name", "Ring")];
        assert!(filter_list(&records, "42").is_empty());
        assert_eq!(filter_list(&records, "rin").len(), 1);
    }
}
