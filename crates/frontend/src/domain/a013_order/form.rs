//! Order form: a design/custom switch over two field groups.

use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a003_salesman::aggregate::Salesman;
use contracts::domain::a006_design::aggregate::Design;
use contracts::domain::common::Record;

use crate::shared::date_utils::today_iso;
use crate::shared::master::{FieldOption, FieldSchema};

/// Draft key of the design/custom radio.
pub const ORDER_KIND: &str = "orderTypeSelection";

pub fn is_custom(draft: &Record) -> bool {
    draft.text(ORDER_KIND) == "custom"
}

pub fn new_order_draft() -> Record {
    Record::new()
        .with(ORDER_KIND, "design")
        .with("quantity", "1")
        .with("deliveryDate", today_iso())
}

fn design_only(field: FieldSchema) -> FieldSchema {
    field.visible_when(|draft| !is_custom(draft))
}

fn custom_only(field: FieldSchema) -> FieldSchema {
    field.visible_when(is_custom)
}

pub fn order_fields(designs: &[Design], customers: &[Customer], salesmen: &[Salesman]) -> Vec<FieldSchema> {
    let salesman_options = salesmen
        .iter()
        .map(|s| FieldOption::new(s.id.clone(), s.name.clone()))
        .collect();
    let customer_options = customers
        .iter()
        .map(|c| FieldOption::new(c.id.clone(), c.name.clone()))
        .collect();
    let design_options = designs
        .iter()
        .map(|d| FieldOption::new(d.design_no.clone(), format!("{} (GWT: {}g)", d.design_no, d.gwt)))
        .collect();

    vec![
        FieldSchema::radio(
            ORDER_KIND,
            "Order Type",
            vec![
                FieldOption::new("design", "Design Wise Order"),
                FieldOption::new("custom", "Custom Order"),
            ],
        ),
        FieldSchema::text("orderNumber", "Order No").required().placeholder("e.g. ORD-2025-001"),
        FieldSchema::select("salesman", "Salesman Details", salesman_options)
            .required()
            .placeholder("Select salesman"),
        FieldSchema::select("client", "Client", customer_options).required(),
        FieldSchema::date("deliveryDate", "Delivery Date").required(),
        design_only(
            FieldSchema::select("designNo", "Select Design", design_options)
                .required()
                .placeholder("Search Design No...")
                .hint("Selecting a design will auto-fetch estimated weights"),
        ),
        design_only(
            FieldSchema::number("netWeight", "Approx Net Weight (gms)")
                .placeholder("0.000")
                .disabled()
                .hint("Auto-fetched from Design Master"),
        ),
        design_only(
            FieldSchema::number("grossWeight", "Approx Gross Weight (gms)")
                .placeholder("0.000")
                .disabled()
                .hint("Auto-fetched from Design Master"),
        ),
        design_only(
            FieldSchema::number("otherWeight", "Other Weight (gms)")
                .placeholder("0.000")
                .disabled()
                .hint("Auto-fetched from Design Master"),
        ),
        design_only(FieldSchema::number("quantity", "Quantity").required().placeholder("1")),
        design_only(FieldSchema::textarea("remarks", "Remarks / Customization")),
        custom_only(
            FieldSchema::text("referenceImage", "Reference Image URL")
                .required()
                .hint("Enter image URL"),
        ),
        custom_only(
            FieldSchema::number("netWeight", "Estimated Net Weight (gms)")
                .placeholder("0.000")
                .required(),
        ),
        custom_only(
            FieldSchema::number("grossWeight", "Estimated Gross Weight (gms)")
                .placeholder("0.000")
                .required(),
        ),
        custom_only(FieldSchema::number("otherWeight", "Other Weight (gms)").placeholder("0.000")),
        custom_only(
            FieldSchema::textarea("description", "Design Description")
                .required()
                .placeholder("Describe the custom design requirements..."),
        ),
    ]
}

/// Picking a design copies its weights into the draft.
pub fn fill_design_weights(draft: &mut Record, changed: &str, designs: &[Design]) {
    if changed != "designNo" {
        return;
    }
    let design_no = draft.text("designNo");
    if let Some(design) = designs.iter().find(|d| d.design_no == design_no) {
        draft.set("grossWeight", design.gwt);
        draft.set("netWeight", design.nwt);
        draft.set("otherWeight", design.owt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::master::schema::visible_fields;

    fn design() -> Design {
        Design {
            id: "d1".into(),
            design_no: "DN-7".into(),
            category_id: String::new(),
            category: None,
            s3_key: None,
            gwt: 12.5,
            nwt: 10.0,
            owt: 2.5,
        }
    }

    #[test]
    fn switch_selects_field_group() {
        let fields = order_fields(&[], &[], &[]);
        let names = |draft: &Record| -> Vec<String> {
            visible_fields(&fields, draft).into_iter().map(|f| f.name).collect()
        };

        let design = names(&new_order_draft());
        assert!(design.contains(&"designNo".to_string()));
        assert!(!design.contains(&"referenceImage".to_string()));

        let custom = names(&Record::new().with(ORDER_KIND, "custom"));
        assert!(custom.contains(&"referenceImage".to_string()));
        assert!(!custom.contains(&"quantity".to_string()));
        assert_eq!(custom.iter().filter(|n| *n == "netWeight").count(), 1);
    }

    #[test]
    fn choosing_a_design_fills_weights() {
        let mut draft = new_order_draft().with("designNo", "DN-7");
        fill_design_weights(&mut draft, "designNo", &[design()]);
        assert_eq!(draft.number("grossWeight"), 12.5);
        assert_eq!(draft.number("otherWeight"), 2.5);

        let mut untouched = new_order_draft().with("designNo", "DN-7");
        fill_design_weights(&mut untouched, "remarks", &[design()]);
        assert!(untouched.get("grossWeight").is_none());
    }
}
