use contracts::domain::a005_category::aggregate::{Category, CategoryPayload, MetalType};
use contracts::domain::common::Record;

use crate::shared::api::Resource;
use crate::shared::master::choice;

pub struct Categories;

impl Resource for Categories {
    const PATH: &'static str = "/api/categories";
    type Item = Category;
    type Payload = CategoryPayload;
}

/// A parent is only sent for subcategories, whatever the draft still holds.
pub fn category_payload(draft: &Record) -> Result<CategoryPayload, String> {
    let metal_type: MetalType = choice(draft, "metalType", "Metal type")?;
    let is_subcategory = draft.flag("isSubcategory");
    Ok(CategoryPayload {
        name: draft.text("name"),
        code: draft.text("code"),
        is_subcategory,
        parent_id: if is_subcategory {
            draft.opt_text("parentId")
        } else {
            None
        },
        description: draft.opt_text("description"),
        metal_type,
        image: draft.opt_text("image"),
        hsn_id: draft.opt_text("hsnId"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_category_drops_stale_parent() {
        let draft = Record::new()
            .with("name", "Rings")
            .with("code", "CAT001")
            .with("metalType", "GOLD")
            .with("isSubcategory", false)
            .with("parentId", "p1");
        let payload = category_payload(&draft).unwrap();
        assert!(!payload.is_subcategory);
        assert_eq!(payload.parent_id, None);
        assert_eq!(payload.metal_type, MetalType::Gold);
    }

    #[test]
    fn subcategory_accepts_radio_string() {
        let draft = Record::new()
            .with("metalType", "SILVER")
            .with("isSubcategory", "true")
            .with("parentId", "p1");
        let payload = category_payload(&draft).unwrap();
        assert!(payload.is_subcategory);
        assert_eq!(payload.parent_id.as_deref(), Some("p1"));
    }
}
