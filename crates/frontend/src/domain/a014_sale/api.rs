use contracts::domain::a014_sale::aggregate::{CreateSalePayload, Sale};
use contracts::domain::common::Record;

use crate::shared::api::Resource;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::{format_amount, format_weight};

pub struct Sales;

impl Resource for Sales {
    const PATH: &'static str = "/api/sales";
    type Item = Sale;
    type Payload = CreateSalePayload;
}

/// Filter bar of the sales list. Blank fields do not filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaleFilter {
    pub customer_id: String,
    /// Inclusive `YYYY-MM-DD` bounds.
    pub from_date: String,
    pub to_date: String,
}

impl SaleFilter {
    pub fn matches(&self, sale: &Sale) -> bool {
        let day = sale.sale_date.split('T').next().unwrap_or_default();
        let customer_ok = self.customer_id.is_empty()
            || sale.customer_id.as_deref() == Some(self.customer_id.as_str());
        let from_ok = self.from_date.is_empty() || day >= self.from_date.as_str();
        let to_ok = self.to_date.is_empty() || day <= self.to_date.as_str();
        customer_ok && from_ok && to_ok
    }
}

pub fn filter_sales(sales: &[Sale], filter: &SaleFilter) -> Vec<Sale> {
    sales.iter().filter(|s| filter.matches(s)).cloned().collect()
}

/// Display row of the sales table.
pub fn sale_row(sale: &Sale) -> Record {
    Record::new()
        .with("id", sale.id.clone())
        .with("date", format_date(&sale.sale_date))
        .with("invoiceNo", sale.sale_no.clone())
        .with(
            "customerName",
            sale.customer
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "-".to_string()),
        )
        .with("totalFine", format_weight(sale.total_fine_wt))
        .with("amount", format_amount(sale.grand_total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(id: &str, customer: &str, date: &str) -> Sale {
        Sale {
            id: id.into(),
            customer_id: Some(customer.into()),
            sale_date: date.into(),
            ..Default::default()
        }
    }

    #[test]
    fn filter_bounds_are_inclusive_days() {
        let sales = vec![
            sale("1", "c1", "2025-01-01T10:00:00.000Z"),
            sale("2", "c2", "2025-01-15T23:59:00.000Z"),
            sale("3", "c1", "2025-02-01T00:00:00.000Z"),
        ];
        let filter = SaleFilter {
            from_date: "2025-01-01".into(),
            to_date: "2025-01-15".into(),
            ..Default::default()
        };
        let ids: Vec<_> = filter_sales(&sales, &filter).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let by_customer = SaleFilter {
            customer_id: "c1".into(),
            ..Default::default()
        };
        assert_eq!(filter_sales(&sales, &by_customer).len(), 2);
        assert_eq!(filter_sales(&sales, &SaleFilter::default()).len(), 3);
    }

    #[test]
    fn row_formats_fine_and_amount() {
        let mut s = sale("1", "c1", "2025-03-05T08:00:00.000Z");
        s.sale_no = "SALE-2025-7".into();
        s.total_fine_wt = 7.3284;
        s.grand_total = 41406.0;
        let row = sale_row(&s);
        assert_eq!(row.text("date"), "05/03/2025");
        assert_eq!(row.text("customerName"), "-");
        assert_eq!(row.text("totalFine"), "7.328");
        assert_eq!(row.text("amount"), "41,406.00");
    }
}
