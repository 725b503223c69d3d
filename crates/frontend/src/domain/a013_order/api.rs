use contracts::domain::a006_design::aggregate::Design;
use contracts::domain::a013_order::aggregate::{
    CreateOrderPayload, Order, OrderItem, OrderStatus, OrderStatusUpdate, OrderType,
};
use contracts::domain::common::Record;
use serde_json::Value;

use crate::shared::api::resource::item_path;
use crate::shared::api::{ApiError, Gateway, Resource};
use crate::shared::date_utils::format_date;

use super::form::is_custom;

pub struct Orders;

impl Resource for Orders {
    const PATH: &'static str = "/api/orders";
    type Item = Order;
    type Payload = CreateOrderPayload;
}

/// `PATCH /api/orders/{id}/status`.
pub async fn update_order_status(
    gateway: &Gateway,
    id: &str,
    body: &OrderStatusUpdate,
) -> Result<(), ApiError> {
    let path = format!("{}/status", item_path(Orders::PATH, id));
    gateway.patch::<_, Value>(&path, body).await.map(|_| ())
}

/// List row: order number, client and the formatted delivery date.
pub fn order_row(order: &Order) -> Result<Record, String> {
    let mut row = Record::from_serialize(order)?;
    row.set("orderId", order.order_number.clone());
    row.set(
        "clientName",
        order
            .customer
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
    );
    row.set(
        "deliveryDate",
        order.delivery_date.as_deref().map(format_date).unwrap_or_default(),
    );
    row.set("statusLabel", order.status.label());
    Ok(row)
}

fn delivery_timestamp(date: Option<String>) -> String {
    match date {
        Some(day) if !day.contains('T') => format!("{}T00:00:00.000Z", day),
        Some(stamp) => stamp,
        None => chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    }
}

/// Body of a new order with its single item. Only the fields of the
/// selected branch (design or custom) are read.
pub fn order_payload(draft: &Record, designs: &[Design]) -> Result<CreateOrderPayload, String> {
    let custom = is_custom(draft);
    let quantity = if custom {
        1
    } else {
        draft.opt_number("quantity").map_or(1, |q| q as i64)
    };

    let (order_type, design_id, s3_key, notes) = if custom {
        (
            OrderType::Custom,
            None,
            draft.opt_text("referenceImage"),
            draft.opt_text("description"),
        )
    } else {
        let design_no = draft.text("designNo");
        let design = designs.iter().find(|d| d.design_no == design_no);
        (
            OrderType::Design,
            design.map(|d| d.id.clone()),
            design.and_then(|d| d.s3_key.clone()),
            draft.opt_text("remarks"),
        )
    };

    Ok(CreateOrderPayload {
        order_number: draft.text("orderNumber"),
        order_type,
        customer_id: draft.text("client"),
        salesman_id: draft.text("salesman"),
        status: OrderStatus::Pending,
        delivery_date: Some(delivery_timestamp(draft.opt_text("deliveryDate"))),
        remarks: notes.clone(),
        total_quantity: quantity,
        items: vec![OrderItem {
            design_id,
            approx_net_weight: draft.number("netWeight"),
            approx_gross_weight: draft.number("grossWeight"),
            other_weight: draft.number("otherWeight"),
            quantity,
            customization_notes: notes,
            s3_key,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a013_order::form::ORDER_KIND;
    use contracts::domain::a013_order::aggregate::NamedRef;

    fn design() -> Design {
        Design {
            id: "d1".into(),
            design_no: "DN-7".into(),
            category_id: "c1".into(),
            category: None,
            s3_key: Some("designs/dn7.png".into()),
            gwt: 12.0,
            nwt: 10.0,
            owt: 2.0,
        }
    }

    #[test]
    fn design_order_resolves_design_and_ignores_custom_fields() {
        let draft = Record::new()
            .with(ORDER_KIND, "design")
            .with("orderNumber", "ORD-1")
            .with("client", "c9")
            .with("salesman", "s3")
            .with("designNo", "DN-7")
            .with("netWeight", 10.0)
            .with("grossWeight", 12.0)
            .with("quantity", "3")
            .with("deliveryDate", "2025-01-20")
            .with("referenceImage", "stale.png")
            .with("remarks", "rush");
        let payload = order_payload(&draft, &[design()]).unwrap();
        assert_eq!(payload.order_type, OrderType::Design);
        assert_eq!(payload.total_quantity, 3);
        assert_eq!(payload.delivery_date.as_deref(), Some("2025-01-20T00:00:00.000Z"));
        let item = &payload.items[0];
        assert_eq!(item.design_id.as_deref(), Some("d1"));
        assert_eq!(item.s3_key.as_deref(), Some("designs/dn7.png"));
        assert_eq!(item.customization_notes.as_deref(), Some("rush"));
    }

    #[test]
    fn custom_order_uses_reference_image() {
        let draft = Record::new()
            .with(ORDER_KIND, "custom")
            .with("designNo", "DN-7")
            .with("referenceImage", "ref.png")
            .with("description", "floral band")
            .with("netWeight", "4.5");
        let payload = order_payload(&draft, &[design()]).unwrap();
        assert_eq!(payload.order_type, OrderType::Custom);
        let item = &payload.items[0];
        assert_eq!(item.design_id, None);
        assert_eq!(item.s3_key.as_deref(), Some("ref.png"));
        assert_eq!(item.approx_net_weight, 4.5);
        assert_eq!(item.quantity, 1);
        assert_eq!(payload.remarks.as_deref(), Some("floral band"));
    }

    #[test]
    fn row_falls_back_to_unknown_client() {
        let order = Order {
            id: "o1".into(),
            order_number: "ORD-1".into(),
            order_type: OrderType::Design,
            customer_id: String::new(),
            salesman_id: String::new(),
            status: OrderStatus::InProgress,
            delivery_date: Some("2025-01-20T00:00:00.000Z".into()),
            remarks: None,
            total_quantity: 1,
            customer: None,
            salesman: Some(NamedRef { id: "s".into(), name: "Ravi".into() }),
            items: Vec::new(),
        };
        let row = order_row(&order).unwrap();
        assert_eq!(row.text("orderId"), "ORD-1");
        assert_eq!(row.text("clientName"), "Unknown");
        assert_eq!(row.text("deliveryDate"), "20/01/2025");
        assert_eq!(row.text("status"), "IN_PROGRESS");
    }
}
