use std::sync::Arc;

use contracts::domain::common::Record;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use serde_json::Value;

use super::form::SchemaForm;
use super::schema::{ColumnSchema, FieldSchema};
use super::state::FormMode;
use super::table::MasterTable;
use super::view_model::MasterViewModel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::Modal;

fn form_title(mode: Option<&FormMode>, title: &str) -> String {
    match mode {
        Some(FormMode::Edit(_)) => format!("Edit {}", title),
        Some(FormMode::View(_)) => title.to_string(),
        _ => format!("Add {}", title),
    }
}

/// Generic master-data screen: toolbar, searchable table and the schema
/// form in a modal. Fetches through the view model on mount.
#[component]
pub fn MasterContainer(
    #[prop(into)] title: String,
    #[prop(into)] columns: Signal<Vec<ColumnSchema>>,
    #[prop(into)] fields: Signal<Vec<FieldSchema>>,
    vm: MasterViewModel,
    /// Hides the header with its search box and add button.
    #[prop(optional)]
    hide_toolbar: bool,
    #[prop(default = true)] show_actions: bool,
    #[prop(optional, into)] add_label: MaybeProp<String>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    let state = vm.state;
    vm.load_command();

    let add_text = move || add_label.get().unwrap_or_else(|| "Add New".to_string());
    let modal_title = {
        let title = title.clone();
        Signal::derive(move || state.with(|s| form_title(s.form.as_ref(), &title)))
    };
    let read_only = move || state.with(|s| matches!(s.form, Some(FormMode::View(_))));

    let on_add = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.add())
    };
    let on_search = {
        let vm = vm.clone();
        Callback::new(move |query: String| vm.set_search(query))
    };
    let on_view = {
        let vm = vm.clone();
        Callback::new(move |record: Record| vm.view(record))
    };
    let on_edit = {
        let vm = vm.clone();
        Callback::new(move |record: Record| vm.edit(record))
    };
    let on_delete = {
        let vm = vm.clone();
        Callback::new(move |record: Record| vm.delete_command(&record))
    };
    let on_field = {
        let vm = vm.clone();
        Callback::new(move |(name, value): (String, Value)| vm.set_field(&name, value))
    };
    let on_close = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.cancel())
    };
    let on_save = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.save_command())
    };
    let on_dismiss = {
        let vm = vm.clone();
        move |_: MouseEvent| vm.dismiss_error()
    };

    let footer = move || -> ChildrenFn {
        Arc::new(move || {
            view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>"Cancel"</Button>
                <Show when=move || !read_only()>
                    <Button on_click=on_save>"Save"</Button>
                </Show>
            }
            .into_any()
        })
    };

    let rows = Signal::derive(move || state.with(|s| s.visible_records()));
    let draft = Signal::derive(move || state.with(|s| s.draft.clone()));
    let search = Signal::derive(move || state.with(|s| s.search.clone()));

    view! {
        <div class="page master-page">
            {(!hide_toolbar).then(|| view! {
                <PageHeader title=title.clone() subtitle=subtitle>
                    <SearchInput value=search on_change=on_search />
                    <Button icon_name="plus" on_click=on_add>{add_text}</Button>
                </PageHeader>
            })}

            {move || state.with(|s| s.error.clone()).map(|message| {
                let on_dismiss = on_dismiss.clone();
                view! {
                    <div class="alert alert--error">
                        <span>{message}</span>
                        <button class="alert__close" title="Dismiss" on:click=on_dismiss>"×"</button>
                    </div>
                }
            })}

            <Show
                when=move || !state.with(|s| s.loading && s.records.is_empty())
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <MasterTable
                    columns=columns
                    rows=rows
                    on_view=on_view
                    on_edit=on_edit
                    on_delete=on_delete
                    show_actions=show_actions
                />
            </Show>

            <Show when=move || state.with(|s| s.is_form_open())>
                <Modal
                    title=modal_title
                    on_close=on_close
                    footer=footer()
                >
                    <SchemaForm
                        fields=fields
                        draft=draft
                        on_change=on_field
                        read_only=read_only()
                    />
                </Modal>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_title_follows_mode() {
        assert_eq!(form_title(Some(&FormMode::Create), "Customer"), "Add Customer");
        assert_eq!(form_title(Some(&FormMode::Edit("1".into())), "Customer"), "Edit Customer");
        assert_eq!(form_title(Some(&FormMode::View("1".into())), "Customer"), "Customer");
    }
}
