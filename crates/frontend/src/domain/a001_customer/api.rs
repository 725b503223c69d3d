use contracts::domain::a001_customer::aggregate::{Customer, CustomerPayload, CustomerType};
use contracts::domain::common::Record;

use crate::shared::api::Resource;
use crate::shared::master::choice;

pub struct Customers;

impl Resource for Customers {
    const PATH: &'static str = "/api/customers";
    type Item = Customer;
    type Payload = CustomerPayload;
}

/// The GST number is only sent for B2B customers.
pub fn customer_payload(draft: &Record) -> Result<CustomerPayload, String> {
    let customer_type: CustomerType = choice(draft, "customerType", "Customer type")?;
    Ok(CustomerPayload {
        customer_type,
        name: draft.text("name"),
        email: draft.text("email"),
        phone: draft.text("phone"),
        address: draft.text("address"),
        state: draft.text("state"),
        city: draft.text("city"),
        country: draft.text("country"),
        pincode: draft.text("pincode"),
        gst_no: match customer_type {
            CustomerType::B2B => draft.opt_text("gstNo"),
            CustomerType::B2C => None,
        },
        pan_no: draft.opt_text("panNo"),
        gender: draft.parse("gender"),
        birth_date: draft.opt_text("birthDate"),
        anniversary: draft.opt_text("anniversary"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::aggregate::Gender;

    fn draft() -> Record {
        Record::new()
            .with("name", "Asha Jewels")
            .with("customerType", "B2B")
            .with("phone", "9876543210")
            .with("gstNo", "32ABCDE1234F1Z5")
            .with("gender", "FEMALE")
            .with("birthDate", "")
    }

    #[test]
    fn b2b_draft_keeps_gst_number() {
        let payload = customer_payload(&draft()).unwrap();
        assert_eq!(payload.customer_type, CustomerType::B2B);
        assert_eq!(payload.gst_no.as_deref(), Some("32ABCDE1234F1Z5"));
        assert_eq!(payload.gender, Some(Gender::Female));
        assert_eq!(payload.birth_date, None);
    }

    #[test]
    fn stale_gst_number_is_dropped_for_b2c() {
        let mut draft = draft();
        draft.set("customerType", "B2C");
        assert_eq!(customer_payload(&draft).unwrap().gst_no, None);
    }

    #[test]
    fn missing_type_is_rejected() {
        let mut draft = draft();
        draft.remove("customerType");
        assert_eq!(
            customer_payload(&draft).unwrap_err(),
            "Customer type is required"
        );
    }
}
