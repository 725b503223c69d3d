use contracts::domain::a005_category::aggregate::Category;
use contracts::domain::a009_material_type::aggregate::MaterialType;
use contracts::domain::a010_purity::aggregate::Purity;
use contracts::domain::a011_size::aggregate::Size;
use contracts::domain::common::{input_text, Record};
use futures::try_join;
use serde_json::Value;

use crate::domain::a005_category::api::Categories;
use crate::domain::a009_material_type::api::MaterialTypes;
use crate::domain::a010_purity::api::Purities;
use crate::domain::a011_size::api::Sizes;
use crate::shared::api::{ApiError, Gateway, ResourceClient};
use crate::shared::master::ColumnSchema;

/// Lookups behind the stock modal's dropdowns.
#[derive(Clone, Default)]
pub struct StockLookups {
    pub material_types: Vec<MaterialType>,
    pub categories: Vec<Category>,
    pub sizes: Vec<Size>,
    pub purities: Vec<Purity>,
}

fn dash(value: &Value, _row: &Record) -> String {
    let text = input_text(value);
    if text.is_empty() {
        "-".to_string()
    } else {
        text
    }
}

pub fn columns() -> Vec<ColumnSchema> {
    [
        ("stockType", "Stock Type"),
        ("barcode", "Barcode"),
        ("categoryName", "Category"),
        ("pieces", "Pieces"),
        ("sizeLabel", "Size"),
        ("purityLabel", "Purity"),
        ("grossWeight", "Gross Wt"),
        ("stoneWeight", "Stone Wt"),
        ("netWeight", "Net Wt"),
        ("wastagePercent", "Wastage %"),
        ("huid", "HUID"),
        ("fineWeight", "Fine Wt"),
        ("stoneCost", "Stone Cost"),
    ]
    .into_iter()
    .map(|(key, header)| ColumnSchema::new(key, header).render(dash))
    .collect()
}

pub async fn load_lookups(gateway: Gateway) -> Result<StockLookups, ApiError> {
    let material_types = ResourceClient::<MaterialTypes>::new(gateway.clone());
    let categories = ResourceClient::<Categories>::new(gateway.clone());
    let sizes = ResourceClient::<Sizes>::new(gateway.clone());
    let purities = ResourceClient::<Purities>::new(gateway);
    let (material_types, categories, sizes, purities) = try_join!(
        material_types.get_all(),
        categories.get_all(),
        sizes.get_all(),
        purities.get_all()
    )?;
    Ok(StockLookups {
        material_types,
        categories,
        sizes,
        purities,
    })
}

/// Open state of the stock modal: the item being edited, if any, and its draft.
#[derive(Clone, Debug, PartialEq)]
pub struct StockEditor {
    pub editing_id: Option<String>,
    pub draft: Record,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cells_show_a_dash() {
        let row = Record::new().with("huid", Value::Null).with("pieces", 2);
        let columns = columns();
        let huid = columns.iter().find(|c| c.key == "huid").unwrap();
        let pieces = columns.iter().find(|c| c.key == "pieces").unwrap();
        assert_eq!(huid.cell_text(&row), "-");
        assert_eq!(pieces.cell_text(&row), "2");
    }
}
