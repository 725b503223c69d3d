use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetalType {
    Gold,
    Silver,
    Platinum,
    Other,
}

impl MetalType {
    pub const ALL: [MetalType; 4] = [
        MetalType::Gold,
        MetalType::Silver,
        MetalType::Platinum,
        MetalType::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MetalType::Gold => "GOLD",
            MetalType::Silver => "SILVER",
            MetalType::Platinum => "PLATINUM",
            MetalType::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetalType::Gold => "Gold",
            MetalType::Silver => "Silver",
            MetalType::Platinum => "Platinum",
            MetalType::Other => "Other",
        }
    }
}

/// Parent category as embedded in list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub parent: Option<CategoryRef>,
    #[serde(default)]
    pub is_subcategory: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metal_type: Option<MetalType>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub hsn_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub code: String,
    pub is_subcategory: bool,
    /// Only sent for subcategories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub metal_type: MetalType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsn_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_subcategory_with_parent() {
        let json = r#"{"id":"2","name":"Rings","code":"RG","parentId":"1",
            "parent":{"id":"1","name":"Gold"},"isSubcategory":true,"metalType":"GOLD"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.is_subcategory);
        assert_eq!(category.parent.map(|p| p.name), Some("Gold".to_string()));
        assert_eq!(category.metal_type, Some(MetalType::Gold));
    }
}
