//! Columns, fields and payload shared by vendors, salesmen and job workers.

use contracts::domain::common::{PartyPayload, Record};

use crate::shared::master::{ColumnSchema, FieldSchema};

pub fn party_columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("name", "Name"),
        ColumnSchema::new("phone", "Phone"),
        ColumnSchema::new("email", "Email"),
        ColumnSchema::new("panNo", "PAN"),
    ]
}

/// `name_label` is e.g. "Vendor Name".
pub fn party_fields(name_label: &str) -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("name", name_label).required(),
        FieldSchema::email("email", "Email Address").required(),
        FieldSchema::text("phone", "Phone Number").required().placeholder("9876543210"),
        FieldSchema::textarea("address", "Address").required(),
        FieldSchema::text("aadhaarNo", "Aadhaar No").placeholder("1234 5678 9012"),
        FieldSchema::text("panNo", "PAN No").placeholder("ABCDE1234F"),
        FieldSchema::text("accountNo", "Bank Account No"),
        FieldSchema::text("ifsc", "IFSC Code"),
        FieldSchema::text("bankName", "Bank Name"),
        FieldSchema::textarea("bankAddress", "Bank Address"),
    ]
}

pub fn party_payload(draft: &Record) -> Result<PartyPayload, String> {
    Ok(PartyPayload {
        name: draft.text("name"),
        email: draft.text("email"),
        phone: draft.text("phone"),
        address: draft.text("address"),
        aadhaar_no: draft.opt_text("aadhaarNo"),
        pan_no: draft.opt_text("panNo"),
        account_no: draft.opt_text("accountNo"),
        ifsc: draft.opt_text("ifsc"),
        bank_name: draft.opt_text("bankName"),
        bank_address: draft.opt_text("bankAddress"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_fields_are_omitted() {
        let draft = Record::new()
            .with("name", "Ravi")
            .with("email", "ravi@example.com")
            .with("ifsc", "")
            .with("panNo", "ABCDE1234F");
        let payload = party_payload(&draft).unwrap();
        assert_eq!(payload.name, "Ravi");
        assert_eq!(payload.ifsc, None);
        assert_eq!(payload.pan_no.as_deref(), Some("ABCDE1234F"));
        assert_eq!(payload.phone, "");
    }

    #[test]
    fn name_label_is_per_screen() {
        assert_eq!(party_fields("Salesman Name")[0].label, "Salesman Name");
    }
}
