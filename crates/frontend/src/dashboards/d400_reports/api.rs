use contracts::domain::a012_stock_item::aggregate::{StockItem, StockStatus};
use contracts::domain::a013_order::aggregate::{Order, OrderStatus};
use contracts::domain::a014_sale::aggregate::Sale;
use contracts::domain::common::Record;
use futures::try_join;

use crate::domain::a012_stock_item::api::StockItems;
use crate::domain::a013_order::api::Orders;
use crate::domain::a014_sale::api::Sales;
use crate::shared::api::{ApiError, Gateway, ResourceClient};
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_inr;

/// Everything the reports screen shows, fetched in one go.
#[derive(Clone, Debug, Default)]
pub struct ReportData {
    pub sales: Vec<Sale>,
    pub orders: Vec<Order>,
    pub stock: Vec<StockItem>,
}

pub async fn load_report_data(gateway: &Gateway) -> Result<ReportData, ApiError> {
    let sales = ResourceClient::<Sales>::new(gateway.clone());
    let orders = ResourceClient::<Orders>::new(gateway.clone());
    let stock = ResourceClient::<StockItems>::new(gateway.clone());
    let (sales, orders, stock) = try_join!(sales.get_all(), orders.get_all(), stock.get_all())?;
    Ok(ReportData { sales, orders, stock })
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SalesStats {
    pub revenue: f64,
    pub count: usize,
    pub average: f64,
}

pub fn sales_stats(sales: &[Sale]) -> SalesStats {
    let revenue: f64 = sales.iter().map(|s| s.grand_total).sum();
    let count = sales.len();
    let average = if count > 0 { revenue / count as f64 } else { 0.0 };
    SalesStats { revenue, count, average }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    /// Confirmed orders count as completed.
    pub completed: usize,
}

pub fn order_stats(orders: &[Order]) -> OrderStats {
    let count = |pred: fn(&OrderStatus) -> bool| orders.iter().filter(|o| pred(&o.status)).count();
    OrderStats {
        total: orders.len(),
        pending: count(|s| *s == OrderStatus::Pending),
        completed: count(|s| matches!(s, OrderStatus::Completed | OrderStatus::Confirmed)),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StockStats {
    pub total: usize,
    pub available: usize,
    pub value: f64,
    pub gross_weight: f64,
}

pub fn stock_stats(stock: &[StockItem]) -> StockStats {
    StockStats {
        total: stock.len(),
        available: stock
            .iter()
            .filter(|s| s.status == Some(StockStatus::Available))
            .count(),
        value: stock.iter().filter_map(|s| s.approx_sales_price).sum(),
        gross_weight: stock.iter().map(|s| s.gross_weight).sum(),
    }
}

fn name_or_dash(name: Option<&str>) -> String {
    name.filter(|n| !n.is_empty()).unwrap_or("-").to_string()
}

pub fn sales_report_row(sale: &Sale) -> Record {
    Record::new()
        .with("id", sale.id.clone())
        .with("saleNo", sale.sale_no.clone())
        .with("saleDate", format_date(&sale.sale_date))
        .with("customerName", name_or_dash(sale.customer.as_ref().map(|c| c.name.as_str())))
        .with("salesmanName", name_or_dash(sale.salesman.as_ref().map(|s| s.name.as_str())))
        .with("grandTotal", format_inr(sale.grand_total))
}

pub fn order_report_row(order: &Order) -> Record {
    Record::new()
        .with("id", order.id.clone())
        .with("orderNumber", order.order_number.clone())
        .with("orderType", order.order_type.label())
        .with("customerName", name_or_dash(order.customer.as_ref().map(|c| c.name.as_str())))
        .with("status", order.status.label())
        .with(
            "deliveryDate",
            order.delivery_date.as_deref().map(format_date).unwrap_or_default(),
        )
        .with("totalQuantity", order.total_quantity)
}

pub fn stock_report_row(item: &StockItem) -> Record {
    Record::new()
        .with("id", item.id.clone())
        .with("huid", name_or_dash(item.huid.as_deref()))
        .with("category", name_or_dash(item.category.as_ref().map(|c| c.name.as_str())))
        .with("grossWeight", item.gross_weight)
        .with("netWeight", item.net_weight)
        .with("status", item.status.map(|s| s.label()).unwrap_or("-"))
        .with("approxSalesPrice", format_inr(item.approx_sales_price.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(status: &str) -> Order {
        serde_json::from_value(json!({
            "id": status,
            "orderNumber": "ORD-1",
            "orderType": "DESIGN",
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn sales_stats_average_over_count() {
        let sales = vec![
            Sale { grand_total: 1000.0, ..Default::default() },
            Sale { grand_total: 500.0, ..Default::default() },
        ];
        assert_eq!(
            sales_stats(&sales),
            SalesStats { revenue: 1500.0, count: 2, average: 750.0 }
        );
        assert_eq!(sales_stats(&[]).average, 0.0);
    }

    #[test]
    fn confirmed_orders_count_as_completed() {
        let orders = vec![
            order("PENDING"),
            order("PENDING"),
            order("CONFIRMED"),
            order("COMPLETED"),
            order("CANCELLED"),
        ];
        assert_eq!(
            order_stats(&orders),
            OrderStats { total: 5, pending: 2, completed: 2 }
        );
    }

    #[test]
    fn stock_stats_skip_missing_prices() {
        let stock = vec![
            StockItem {
                status: Some(StockStatus::Available),
                gross_weight: 10.5,
                approx_sales_price: Some(50_000.0),
                ..Default::default()
            },
            StockItem {
                status: Some(StockStatus::Sold),
                gross_weight: 4.5,
                ..Default::default()
            },
        ];
        let stats = stock_stats(&stock);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.available, 1);
        assert_eq!(stats.value, 50_000.0);
        assert_eq!(stats.gross_weight, 15.0);
    }

    #[test]
    fn report_rows_fall_back_to_dash() {
        let row = sales_report_row(&Sale { sale_no: "SALE-2024-1".into(), ..Default::default() });
        assert_eq!(row.text("customerName"), "-");
        assert_eq!(row.text("salesmanName"), "-");

        let row = stock_report_row(&StockItem::default());
        assert_eq!(row.text("huid"), "-");
        assert_eq!(row.text("status"), "-");
        assert_eq!(row.text("approxSalesPrice"), "₹0.00");
    }
}
