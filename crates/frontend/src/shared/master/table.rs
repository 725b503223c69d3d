use contracts::domain::common::Record;
use leptos::prelude::*;

use super::schema::ColumnSchema;
use crate::shared::components::ui::Button;

pub const EMPTY_TABLE_TEXT: &str = "No data available";

/// Row identity: the record id, or its position for unsaved rows.
fn row_identity(index: usize, row: &Record) -> String {
    row.id().unwrap_or_else(|| format!("#{}", index))
}

/// Render key. Includes the content so an edited row is redrawn.
fn row_key(index: usize, row: &Record) -> (String, String) {
    (
        row_identity(index, row),
        serde_json::to_string(row).unwrap_or_default(),
    )
}

/// The action column shows only when enabled and something can be done
/// with a row.
fn has_actions(
    show_actions: bool,
    on_view: bool,
    on_edit: bool,
    on_delete: bool,
) -> bool {
    show_actions && (on_view || on_edit || on_delete)
}

/// Width of the table in cells; the empty-state row spans all of them.
fn column_count(columns: usize, has_actions: bool) -> usize {
    columns + usize::from(has_actions)
}

/// Tabular view of `rows` with optional view/edit/delete actions.
#[component]
pub fn MasterTable(
    #[prop(into)] columns: Signal<Vec<ColumnSchema>>,
    #[prop(into)] rows: Signal<Vec<Record>>,
    #[prop(optional)] on_view: Option<Callback<Record>>,
    #[prop(optional)] on_edit: Option<Callback<Record>>,
    #[prop(optional)] on_delete: Option<Callback<Record>>,
    #[prop(default = true)] show_actions: bool,
) -> impl IntoView {
    let has_actions = has_actions(
        show_actions,
        on_view.is_some(),
        on_edit.is_some(),
        on_delete.is_some(),
    );
    let colspan = move || column_count(columns.with(|c| c.len()), has_actions);

    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead class="table__head">
                    <tr>
                        <For
                            each=move || columns.get()
                            key=|column| column.key.clone()
                            children=|column| view! { <th class="table__header-cell">{column.header}</th> }
                        />
                        {has_actions.then(|| view! { <th class="table__header-cell table__header-cell--actions">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || rows.with(|r| !r.is_empty())
                        fallback=move || view! {
                            <tr>
                                <td class="table__cell table__cell--empty" colspan=colspan>
                                    {EMPTY_TABLE_TEXT}
                                </td>
                            </tr>
                        }
                    >
                        <For
                            each=move || rows.get().into_iter().enumerate()
                            key=|(index, row)| row_key(*index, row)
                            children=move |(_, row)| {
                                let cells = columns
                                    .get_untracked()
                                    .into_iter()
                                    .map(|column| view! { <td class="table__cell">{column.cell_text(&row)}</td> })
                                    .collect_view();
                                view! {
                                    <tr class="table__row">
                                        {cells}
                                        {has_actions.then(|| view! {
                                            <RowActions row=row.clone() on_view=on_view on_edit=on_edit on_delete=on_delete />
                                        })}
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn RowActions(
    row: Record,
    on_view: Option<Callback<Record>>,
    on_edit: Option<Callback<Record>>,
    on_delete: Option<Callback<Record>>,
) -> impl IntoView {
    let action = move |handler: Option<Callback<Record>>, icon_name: &'static str, title: &'static str, variant: &'static str| {
        let row = row.clone();
        handler.map(|handler| view! {
            <Button
                variant=variant
                icon_name=icon_name
                title=title
                on_click=Callback::new(move |_| handler.run(row.clone()))
            />
        })
    };

    view! {
        <td class="table__cell table__cell--actions">
            {action(on_view, "eye", "View", "ghost")}
            {action(on_edit, "edit", "Edit", "ghost")}
            {action(on_delete, "delete", "Delete", "danger")}
        </td>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_without_id_are_keyed_by_position() {
        assert_eq!(row_identity(3, &Record::new().with("id", "a1")), "a1");
        assert_eq!(row_identity(3, &Record::new()), "#3");
    }

    #[test]
    fn edited_rows_get_a_new_key() {
        let before = Record::new().with("id", "1").with("name", "A");
        let after = Record::new().with("id", "1").with("name", "B");
        assert_ne!(row_key(0, &before), row_key(0, &after));
    }

    #[test]
    fn hidden_actions_win_over_callbacks() {
        assert!(!has_actions(false, true, true, true));
        assert!(has_actions(true, false, false, true));
        assert!(!has_actions(true, false, false, false));
    }

    #[test]
    fn empty_row_spans_every_column() {
        let shown = has_actions(true, true, true, false);
        assert_eq!(column_count(4, shown), 5);
        let hidden = has_actions(false, true, true, false);
        assert_eq!(column_count(4, hidden), 4);
        assert_eq!(column_count(0, false), 0);
    }
}
