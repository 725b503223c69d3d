use serde::{Deserialize, Serialize};

use crate::domain::common::lenient_f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Design,
    Custom,
}

impl OrderType {
    pub const ALL: [OrderType; 2] = [OrderType::Design, OrderType::Custom];

    pub fn code(&self) -> &'static str {
        match self {
            OrderType::Design => "DESIGN",
            OrderType::Custom => "CUSTOM",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Design => "Design",
            OrderType::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub design_id: Option<String>,
    #[serde(with = "lenient_f64", default)]
    pub approx_net_weight: f64,
    #[serde(with = "lenient_f64", default)]
    pub approx_gross_weight: f64,
    #[serde(with = "lenient_f64", default)]
    pub other_weight: f64,
    #[serde(default = "one")]
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
}

fn one() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    pub order_type: OrderType,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub salesman_id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub total_quantity: i64,
    #[serde(default)]
    pub customer: Option<NamedRef>,
    #[serde(default)]
    pub salesman: Option<NamedRef>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Body of `POST /api/orders`. A single item is sent per order form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub order_number: String,
    pub order_type: OrderType,
    pub customer_id: String,
    pub salesman_id: String,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub total_quantity: i64,
    pub items: Vec<OrderItem>,
}

/// Body of `PATCH /api/orders/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip_through_from_code() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("SHIPPED"), None);
    }

    #[test]
    fn status_update_serializes_screaming_case() {
        let body = OrderStatusUpdate {
            status: OrderStatus::InProgress,
            remarks: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"IN_PROGRESS"}"#
        );
    }

    #[test]
    fn order_item_defaults_quantity_to_one() {
        let item: OrderItem = serde_json::from_str(r#"{"approxNetWeight":"5.5"}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.approx_net_weight, 5.5);
    }
}
