//! Declarative field and column descriptions consumed by the generic
//! form and table renderers.

use std::fmt;
use std::sync::Arc;

use contracts::domain::common::{input_text, Record};
use serde_json::Value;

pub type Visibility = Arc<dyn Fn(&Record) -> bool + Send + Sync>;
pub type CellFormatter = Arc<dyn Fn(&Value, &Record) -> String + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldOption {
    pub value: Value,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Value as it appears in the DOM `value` attribute.
    pub fn value_text(&self) -> String {
        input_text(&self.value)
    }
}

/// Input kind of a form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Password,
    Date,
    Textarea,
    File,
    Checkbox,
    Select(Vec<FieldOption>),
    Radio(Vec<FieldOption>),
    /// Rendered as an inert placeholder.
    Unsupported(String),
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Date => "date",
            FieldKind::File => "file",
            _ => "text",
        }
    }

    pub fn options(&self) -> &[FieldOption] {
        match self {
            FieldKind::Select(options) | FieldKind::Radio(options) => options,
            _ => &[],
        }
    }
}

#[derive(Clone)]
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    pub hint: Option<String>,
    pub disabled: bool,
    conditional: Option<Visibility>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            hint: None,
            disabled: false,
            conditional: None,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn radio(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self::new(name, label, FieldKind::Radio(options))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.hint = Some(text.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Show the field only while `predicate` holds for the current draft.
    pub fn visible_when(
        mut self,
        predicate: impl Fn(&Record) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.conditional = Some(Arc::new(predicate));
        self
    }

    pub fn is_visible(&self, draft: &Record) -> bool {
        self.conditional.as_ref().map_or(true, |visible| visible(draft))
    }

    /// Identity used to key rendered controls. Changes when the options
    /// change so a reloaded dropdown is rebuilt; stays put while typing.
    pub fn render_key(&self) -> String {
        let options: Vec<String> = self
            .kind
            .options()
            .iter()
            .map(|o| format!("{}={}", o.value_text(), o.label))
            .collect();
        format!(
            "{}|{}|{:?}|{}",
            self.name,
            self.label,
            std::mem::discriminant(&self.kind),
            options.join(",")
        )
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("conditional", &self.conditional.is_some())
            .finish()
    }
}

/// Fields rendered for `draft`, in declaration order.
pub fn visible_fields(fields: &[FieldSchema], draft: &Record) -> Vec<FieldSchema> {
    fields
        .iter()
        .filter(|field| field.is_visible(draft))
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct ColumnSchema {
    pub key: String,
    pub header: String,
    render: Option<CellFormatter>,
}

impl ColumnSchema {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            render: None,
        }
    }

    pub fn render(
        mut self,
        formatter: impl Fn(&Value, &Record) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(formatter));
        self
    }

    /// Text shown in this column for `row`.
    ///
    /// With a formatter the result is `render(value, row)` verbatim. Without
    /// one, primitives are shown as-is and nested values are left blank.
    pub fn cell_text(&self, row: &Record) -> String {
        let value = row.get(&self.key).unwrap_or(&Value::Null);
        if let Some(render) = &self.render {
            return render(value, row);
        }
        match value {
            Value::Array(_) | Value::Object(_) => {
                log::warn!("column '{}' holds a nested value but has no formatter", self.key);
                String::new()
            }
            other => input_text(other),
        }
    }
}

impl fmt::Debug for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSchema")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Formatter reading `field` of a nested object, e.g. `category.name`.
pub fn nested(field: &'static str) -> impl Fn(&Value, &Record) -> String + Send + Sync + 'static {
    move |value: &Value, _row: &Record| value.get(field).map(input_text).unwrap_or_default()
}

/// Options built from fetched records.
pub fn options_from(
    records: &[Record],
    label: impl Fn(&Record) -> String,
) -> Vec<FieldOption> {
    records
        .iter()
        .filter_map(|record| record.id().map(|id| FieldOption::new(id, label(record))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer_fields() -> Vec<FieldSchema> {
        vec![
            FieldSchema::radio(
                "customerType",
                "Type",
                vec![FieldOption::new("B2C", "B2C"), FieldOption::new("B2B", "B2B")],
            ),
            FieldSchema::text("name", "Name").required(),
            FieldSchema::text("gstNo", "GST No")
                .visible_when(|draft| draft.text("customerType") == "B2B"),
        ]
    }

    #[test]
    fn hidden_conditional_fields_are_not_rendered() {
        let fields = customer_fields();
        let draft = Record::new().with("customerType", "B2C").with("gstNo", "stale");
        let names: Vec<String> = visible_fields(&fields, &draft).into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["customerType", "name"]);
    }

    #[test]
    fn visibility_follows_the_draft() {
        let fields = customer_fields();
        let mut draft = Record::new().with("customerType", "B2C");
        assert_eq!(visible_fields(&fields, &draft).len(), 2);
        draft.set("customerType", "B2B");
        assert_eq!(visible_fields(&fields, &draft).len(), 3);
    }

    #[test]
    fn formatter_output_is_shown_verbatim() {
        let column = ColumnSchema::new("grossWeight", "Gross").render(|v, _| format!("{} g", v));
        let row = Record::new().with("grossWeight", 12.5);
        assert_eq!(column.cell_text(&row), "12.5 g");
    }

    #[test]
    fn raw_values_are_not_transformed() {
        let column = ColumnSchema::new("name", "Name");
        assert_eq!(column.cell_text(&Record::new().with("name", "  Acme ")), "  Acme ");
        assert_eq!(ColumnSchema::new("n", "N").cell_text(&Record::new().with("n", 7)), "7");
        assert_eq!(ColumnSchema::new("n", "N").cell_text(&Record::new()), "");
    }

    #[test]
    fn nested_values_need_a_formatter() {
        let row = Record::from_serialize(&json!({"id": "1", "category": {"name": "Rings"}})).unwrap();
        assert_eq!(ColumnSchema::new("category", "Category").cell_text(&row), "");
        let column = ColumnSchema::new("category", "Category").render(nested("name"));
        assert_eq!(column.cell_text(&row), "Rings");
    }

    #[test]
    fn render_key_tracks_options_not_values() {
        let empty = FieldSchema::select("parentId", "Parent", vec![]);
        let loaded = FieldSchema::select("parentId", "Parent", vec![FieldOption::new("1", "Gold")]);
        assert_ne!(empty.render_key(), loaded.render_key());
        assert_eq!(loaded.render_key(), loaded.clone().required().render_key());
    }

    #[test]
    fn options_skip_records_without_id() {
        let records = vec![
            Record::new().with("id", "1").with("name", "Gold"),
            Record::new().with("name", "Draft"),
        ];
        let options = options_from(&records, |r| r.text("name"));
        assert_eq!(options, vec![FieldOption::new("1", "Gold")]);
    }
}
