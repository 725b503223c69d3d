use contracts::domain::a001_customer::aggregate::{CustomerType, Gender};
use leptos::prelude::*;

use crate::domain::a001_customer::api::{customer_payload, Customers};
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{
    bind_resource, ColumnSchema, FieldOption, FieldSchema, MasterContainer, MasterViewModel,
};

fn columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("name", "Name"),
        ColumnSchema::new("phone", "Phone"),
        ColumnSchema::new("email", "Email"),
        ColumnSchema::new("customerType", "Type"),
        ColumnSchema::new("city", "City"),
    ]
}

fn fields() -> Vec<FieldSchema> {
    let customer_types = CustomerType::ALL
        .iter()
        .map(|t| FieldOption::new(t.code(), t.code()))
        .collect();
    let genders = Gender::ALL
        .iter()
        .map(|g| FieldOption::new(g.code(), g.label()))
        .collect();

    vec![
        FieldSchema::text("name", "Customer Name").required(),
        FieldSchema::radio("customerType", "Customer Type", customer_types).required(),
        FieldSchema::text("phone", "Phone Number").required().placeholder("9876543210"),
        FieldSchema::email("email", "Email Address").required(),
        FieldSchema::textarea("address", "Address").required(),
        FieldSchema::text("state", "State").required(),
        FieldSchema::text("city", "City").required(),
        FieldSchema::text("country", "Country").required().placeholder("India"),
        FieldSchema::text("pincode", "Pincode").required(),
        FieldSchema::text("gstNo", "GST Number")
            .visible_when(|draft| draft.text("customerType") == CustomerType::B2B.code()),
        FieldSchema::text("panNo", "PAN Number"),
        FieldSchema::select("gender", "Gender", genders),
        FieldSchema::date("birthDate", "Birth Date"),
        FieldSchema::date("anniversary", "Anniversary"),
    ]
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let client = ResourceClient::<Customers>::new(use_gateway());
    let vm = MasterViewModel::new(bind_resource(client, customer_payload));

    view! {
        <MasterContainer
            title="Customer Master"
            subtitle="Manage customer records and details"
            columns=columns()
            fields=fields()
            vm=vm
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::master::schema::visible_fields;
    use contracts::domain::common::Record;

    #[test]
    fn gst_field_only_for_b2b() {
        let fields = fields();
        let b2c = Record::new().with("customerType", "B2C");
        let b2b = Record::new().with("customerType", "B2B");
        assert!(!visible_fields(&fields, &b2c).iter().any(|f| f.name == "gstNo"));
        assert!(visible_fields(&fields, &b2b).iter().any(|f| f.name == "gstNo"));
    }
}
