use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a003_salesman::aggregate::Salesman;
use contracts::domain::a006_design::aggregate::Design;
use contracts::domain::a013_order::aggregate::OrderStatus;
use futures::try_join;

use crate::domain::a001_customer::api::Customers;
use crate::domain::a003_salesman::api::Salesmen;
use crate::domain::a006_design::api::Designs;
use crate::shared::api::{ApiError, Gateway, ResourceClient};
use crate::shared::master::ColumnSchema;

pub fn columns() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("orderId", "Order ID"),
        ColumnSchema::new("clientName", "Client Name"),
        ColumnSchema::new("orderType", "Order Type"),
        ColumnSchema::new("status", "Status").render(|value, _| {
            value
                .as_str()
                .and_then(OrderStatus::from_code)
                .map(|s| s.label().to_string())
                .unwrap_or_default()
        }),
        ColumnSchema::new("deliveryDate", "Delivery Date"),
    ]
}

pub async fn load_dependencies(
    gateway: Gateway,
) -> Result<(Vec<Design>, Vec<Customer>, Vec<Salesman>), ApiError> {
    let designs = ResourceClient::<Designs>::new(gateway.clone());
    let customers = ResourceClient::<Customers>::new(gateway.clone());
    let salesmen = ResourceClient::<Salesmen>::new(gateway);
    try_join!(designs.get_all(), customers.get_all(), salesmen.get_all())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;

    #[test]
    fn status_column_shows_label() {
        let row = Record::new().with("status", "IN_PROGRESS");
        let status = columns().into_iter().find(|c| c.key == "status").unwrap();
        assert_eq!(status.cell_text(&row), "In Progress");
    }
}
