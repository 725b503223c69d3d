use contracts::domain::a005_category::aggregate::{Category, MetalType};
use contracts::domain::a007_hsn::aggregate::Hsn;
use futures::try_join;
use serde_json::Value;

use crate::domain::a005_category::api::Categories;
use crate::domain::a007_hsn::api::{hsn_label, HsnCodes};
use crate::shared::api::{ApiError, ResourceClient};
use crate::shared::master::{nested, ColumnSchema, FieldOption, FieldSchema};

pub fn columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("name", "Name"),
        ColumnSchema::new("code", "Code"),
        ColumnSchema::new("metalType", "Metal Type"),
        ColumnSchema::new("isSubcategory", "Type").render(|value, _| {
            if value.as_bool().unwrap_or(false) {
                "Subcategory".to_string()
            } else {
                "Main Category".to_string()
            }
        }),
        ColumnSchema::new("parent", "Parent Category").render(|value, row| {
            let name = nested("name")(value, row);
            if name.is_empty() {
                "-".to_string()
            } else {
                name
            }
        }),
    ]
}

pub fn fields(categories: &[Category], hsn_codes: &[Hsn]) -> Vec<FieldSchema> {
    let metal_types = MetalType::ALL
        .iter()
        .map(|m| FieldOption::new(m.code(), m.label()))
        .collect();
    let parents = categories
        .iter()
        .filter(|c| !c.is_subcategory)
        .map(|c| FieldOption::new(c.id.clone(), c.name.clone()))
        .collect();
    let hsn_options = hsn_codes
        .iter()
        .map(|h| FieldOption::new(h.id.clone(), hsn_label(h)))
        .collect();

    vec![
        FieldSchema::text("name", "Category Name").required().placeholder("Enter category name"),
        FieldSchema::text("code", "Category Code").required().placeholder("e.g. CAT001"),
        FieldSchema::select("metalType", "Metal Type", metal_types).required(),
        FieldSchema::radio(
            "isSubcategory",
            "Is Subcategory?",
            vec![FieldOption::new(Value::Bool(true), "Yes"), FieldOption::new(Value::Bool(false), "No")],
        )
        .required(),
        FieldSchema::select("parentId", "Parent Category", parents)
            .required()
            .placeholder("Select Parent Category")
            .visible_when(|draft| draft.flag("isSubcategory")),
        FieldSchema::select("hsnId", "HSN Code", hsn_options)
            .required()
            .placeholder("Select HSN Code"),
        FieldSchema::textarea("description", "Description").placeholder("Category description..."),
        FieldSchema::text("image", "Category Image URL").placeholder("Image URL or S3 Key"),
    ]
}

/// Categories and HSN codes for the dropdowns, fetched together.
pub async fn load_dependencies(
    categories: ResourceClient<Categories>,
    hsn_codes: ResourceClient<HsnCodes>,
) -> Result<(Vec<Category>, Vec<Hsn>), ApiError> {
    try_join!(categories.get_all(), hsn_codes.get_all())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;
    use crate::shared::master::schema::visible_fields;

    fn category(id: &str, name: &str, is_subcategory: bool) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            code: String::new(),
            parent_id: None,
            parent: None,
            is_subcategory,
            description: None,
            metal_type: None,
            image: None,
            hsn_id: None,
        }
    }

    #[test]
    fn only_main_categories_are_parents() {
        let cats = vec![category("1", "Rings", false), category("2", "Kids Rings", true)];
        let fields = fields(&cats, &[]);
        let parent = fields.iter().find(|f| f.name == "parentId").unwrap();
        assert_eq!(parent.kind.options(), &[FieldOption::new("1", "Rings")]);
    }

    #[test]
    fn parent_field_follows_subcategory_radio() {
        let fields = fields(&[], &[]);
        let shown = |draft: &Record| visible_fields(&fields, draft).iter().any(|f| f.name == "parentId");
        assert!(!shown(&Record::new().with("isSubcategory", false)));
        assert!(shown(&Record::new().with("isSubcategory", true)));
    }

    #[test]
    fn type_column_names_the_level() {
        let row = Record::new().with("isSubcategory", true);
        assert_eq!(columns()[3].cell_text(&row), "Subcategory");
        assert_eq!(columns()[4].cell_text(&Record::new()), "-");
    }
}
