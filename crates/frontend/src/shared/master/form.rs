use contracts::domain::common::Record;
use leptos::prelude::*;
use serde_json::Value;

use super::schema::{visible_fields, FieldKind, FieldOption, FieldSchema};
use crate::shared::components::ui::{Checkbox, FileInput, FieldLabel, Input, RadioGroup, Select, Textarea};

fn option_pairs(options: &[FieldOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|o| (o.value_text(), o.label.clone()))
        .collect()
}

/// Renders the visible fields of `fields` against `draft`.
///
/// Every change is reported raw as `(name, value)`: text-like and select
/// inputs yield strings, checkboxes yield booleans and radios yield the
/// chosen option's value. Controls are keyed by field so focus survives
/// re-renders while visibility follows the draft.
#[component]
pub fn SchemaForm(
    #[prop(into)] fields: Signal<Vec<FieldSchema>>,
    #[prop(into)] draft: Signal<Record>,
    on_change: Callback<(String, Value)>,
    #[prop(optional)] read_only: bool,
) -> impl IntoView {
    view! {
        <div class="form schema-form">
            <For
                each=move || draft.with(|d| fields.with(|f| visible_fields(f, d)))
                key=|field| field.render_key()
                children=move |field| view! {
                    <SchemaField field=field draft=draft on_change=on_change read_only=read_only />
                }
            />
        </div>
    }
}

#[component]
fn SchemaField(
    field: FieldSchema,
    draft: Signal<Record>,
    on_change: Callback<(String, Value)>,
    read_only: bool,
) -> impl IntoView {
    let FieldSchema {
        name,
        label,
        kind,
        required,
        placeholder,
        hint,
        disabled,
        ..
    } = field;
    let disabled = disabled || read_only;
    let input_type = kind.input_type();

    let text_value = {
        let name = name.clone();
        Signal::derive(move || draft.with(|d| d.text(&name)))
    };
    let emit_text = {
        let name = name.clone();
        Callback::new(move |value: String| on_change.run((name.clone(), Value::String(value))))
    };

    match kind {
        FieldKind::Text
        | FieldKind::Number
        | FieldKind::Email
        | FieldKind::Password
        | FieldKind::Date => view! {
            <Input
                label=label
                value=text_value
                on_input=emit_text
                placeholder=placeholder
                input_type=input_type.to_string()
                disabled=disabled
                required=required
                id=name
                hint=hint
            />
        }
        .into_any(),
        FieldKind::Textarea => view! {
            <Textarea
                label=label
                value=text_value
                on_input=emit_text
                placeholder=placeholder
                disabled=disabled
                required=required
            />
        }
        .into_any(),
        FieldKind::File => view! {
            <FileInput
                label=label
                value=text_value
                on_select=emit_text
                disabled=disabled
                required=required
            />
        }
        .into_any(),
        FieldKind::Checkbox => {
            let checked = {
                let name = name.clone();
                Signal::derive(move || draft.with(|d| d.flag(&name)))
            };
            let emit_flag = Callback::new(move |value: bool| on_change.run((name.clone(), Value::Bool(value))));
            view! {
                <Checkbox label=label checked=checked on_change=emit_flag disabled=disabled />
            }
            .into_any()
        }
        FieldKind::Select(options) => view! {
            <Select
                label=label.clone()
                value=text_value
                on_change=emit_text
                options=option_pairs(&options)
                placeholder=placeholder.unwrap_or_else(|| format!("Select {}", label))
                disabled=disabled
                required=required
                id=name
            />
        }
        .into_any(),
        FieldKind::Radio(options) => {
            let pairs = option_pairs(&options);
            let emit_option = {
                let name = name.clone();
                Callback::new(move |chosen: String| {
                    let value = options
                        .iter()
                        .find(|o| o.value_text() == chosen)
                        .map(|o| o.value.clone())
                        .unwrap_or(Value::String(chosen));
                    on_change.run((name.clone(), value));
                })
            };
            view! {
                <RadioGroup
                    label=label
                    value=text_value
                    on_change=emit_option
                    name=name
                    options=pairs
                    disabled=disabled
                    required=required
                />
            }
            .into_any()
        }
        FieldKind::Unsupported(kind_name) => view! {
            <div class="form__group form__group--unsupported">
                <FieldLabel text=label required=required />
                <div class="form__placeholder">{format!("Unsupported field type: {}", kind_name)}</div>
            </div>
        }
        .into_any(),
    }
}
