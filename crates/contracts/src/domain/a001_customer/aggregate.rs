use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerType {
    B2B,
    B2C,
}

impl CustomerType {
    pub const ALL: [CustomerType; 2] = [CustomerType::B2C, CustomerType::B2B];

    pub fn code(&self) -> &'static str {
        match self {
            CustomerType::B2B => "B2B",
            CustomerType::B2C => "B2C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub customer_type: CustomerType,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub gst_no: Option<String>,
    #[serde(default)]
    pub pan_no: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub anniversary: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST /api/customers` and `PATCH /api/customers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub customer_type: CustomerType,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub state: String,
    pub city: String,
    pub country: String,
    pub pincode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anniversary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_customer() {
        let json = r#"{
            "id": "c1", "customerType": "B2B", "name": "Acme Jewels",
            "email": "a@b.in", "phone": "9876543210", "address": "MG Road",
            "state": "Gujarat", "city": "Surat", "country": "India", "pincode": "395003",
            "gstNo": "24ABCDE1234F1Z5", "gender": null
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.customer_type, CustomerType::B2B);
        assert_eq!(customer.gst_no.as_deref(), Some("24ABCDE1234F1Z5"));
        assert!(customer.gender.is_none());
    }

    #[test]
    fn payload_omits_empty_optionals() {
        let payload = CustomerPayload {
            customer_type: CustomerType::B2C,
            name: "Ravi".into(),
            email: "r@x.in".into(),
            phone: "1".into(),
            address: "-".into(),
            state: "KA".into(),
            city: "Blr".into(),
            country: "India".into(),
            pincode: "560001".into(),
            gst_no: None,
            pan_no: None,
            gender: Some(Gender::Male),
            birth_date: None,
            anniversary: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["customerType"], "B2C");
        assert_eq!(value["gender"], "MALE");
        assert!(value.get("gstNo").is_none());
    }
}
