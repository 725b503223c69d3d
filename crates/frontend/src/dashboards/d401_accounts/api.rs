use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a014_sale::aggregate::Sale;
use contracts::domain::a015_ledger::aggregate::Ledger;
use contracts::domain::a016_voucher::aggregate::Voucher;
use contracts::domain::common::Record;
use futures::try_join;

use crate::domain::a001_customer::api::Customers;
use crate::domain::a014_sale::api::Sales;
use crate::shared::api::{ApiError, Gateway, ResourceClient};
use crate::shared::config::GST_RATE;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_inr;

const LEDGERS_PATH: &str = "/api/ledgers";
const VOUCHERS_PATH: &str = "/api/vouchers";

/// Ledgers, or an empty list when the endpoint is unavailable.
pub async fn fetch_ledgers(gateway: &Gateway) -> Vec<Ledger> {
    match gateway.get(LEDGERS_PATH).await {
        Ok(ledgers) => ledgers,
        Err(e) => {
            log::warn!("ledgers unavailable: {}", e);
            Vec::new()
        }
    }
}

/// Vouchers, or an empty list when the endpoint is unavailable.
pub async fn fetch_vouchers(gateway: &Gateway) -> Vec<Voucher> {
    match gateway.get(VOUCHERS_PATH).await {
        Ok(vouchers) => vouchers,
        Err(e) => {
            log::warn!("vouchers unavailable: {}", e);
            Vec::new()
        }
    }
}

pub async fn fetch_gst_sources(gateway: &Gateway) -> Result<(Vec<Sale>, Vec<Customer>), ApiError> {
    let sales = ResourceClient::<Sales>::new(gateway.clone());
    let customers = ResourceClient::<Customers>::new(gateway.clone());
    try_join!(sales.get_all(), customers.get_all())
}

pub fn ledger_row(ledger: &Ledger) -> Record {
    Record::new()
        .with("id", ledger.id.clone())
        .with("name", ledger.name.clone())
        .with("group", ledger.group.clone())
        .with("openingBalance", ledger.opening_balance)
        .with("balanceType", ledger.balance_type.code())
}

/// Day book row. The ledger id is resolved against `ledgers`.
pub fn voucher_row(voucher: &Voucher, ledgers: &[Ledger]) -> Record {
    let ledger_name = voucher
        .ledger_id
        .as_deref()
        .and_then(|id| ledgers.iter().find(|l| l.id == id))
        .map(|l| l.name.clone())
        .unwrap_or_else(|| "-".to_string());
    Record::new()
        .with("id", voucher.id.clone())
        .with("date", format_date(&voucher.date))
        .with("voucherNo", voucher.voucher_no.clone())
        .with("type", voucher.voucher_type.label())
        .with("ledgerName", ledger_name)
        .with("amount", format!("{} {}", format_inr(voucher.amount), voucher.type_dr_cr))
        .with("narration", voucher.narration.clone().unwrap_or_default())
}

/// One GSTR-1 outward supply per sale. Sales without a known customer are
/// reported as unregistered cash sales.
pub fn gstr1_rows(sales: &[Sale], customers: &[Customer]) -> Vec<Record> {
    sales
        .iter()
        .map(|sale| {
            let customer = sale
                .customer_id
                .as_deref()
                .and_then(|id| customers.iter().find(|c| c.id == id));
            let gstin = customer
                .and_then(|c| c.gst_no.clone())
                .filter(|g| !g.is_empty())
                .unwrap_or_else(|| "URP".to_string());
            let receiver = customer
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Cash Customer".to_string());
            let place = customer
                .map(|c| c.state.clone())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Local".to_string());

            Record::new()
                .with("id", sale.id.clone())
                .with("gstin", gstin)
                .with("receiverName", receiver)
                .with("invoiceNo", sale.sale_no.clone())
                .with("invoiceDate", format_date(&sale.sale_date))
                .with("invoiceValue", format_inr(sale.grand_total))
                .with("placeOfSupply", place)
                .with("rate", format!("{:.0}%", GST_RATE * 100.0))
                .with("taxableValue", format_inr(sale.sub_total))
                .with("cess", "0.00")
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gstr3bTotals {
    pub taxable: f64,
    pub total_tax: f64,
    pub cgst: f64,
    pub sgst: f64,
}

/// Summary of outward supplies. The CGST/SGST split comes from the sale
/// lines; sales listed without lines still count toward the total tax.
pub fn gstr3b_totals(sales: &[Sale]) -> Gstr3bTotals {
    sales.iter().fold(Gstr3bTotals::default(), |mut totals, sale| {
        totals.taxable += sale.sub_total;
        totals.total_tax += sale.total_tax;
        for item in &sale.items {
            totals.cgst += item.cgst_amount;
            totals.sgst += item.sgst_amount;
        }
        totals
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a014_sale::aggregate::SaleItem;
    use contracts::domain::a015_ledger::aggregate::BalanceType;
    use serde_json::json;

    fn customer(id: &str, gst_no: Option<&str>, state: &str) -> Customer {
        serde_json::from_value(json!({
            "id": id,
            "customerType": "B2B",
            "name": "Shree Jewels",
            "state": state,
            "gstNo": gst_no,
        }))
        .unwrap()
    }

    fn sale(customer_id: Option<&str>) -> Sale {
        Sale {
            id: "s1".into(),
            sale_no: "SALE-2024-7".into(),
            sale_date: "2024-04-02T10:00:00Z".into(),
            customer_id: customer_id.map(Into::into),
            sub_total: 40_200.0,
            total_tax: 1_206.0,
            grand_total: 41_406.0,
            ..Default::default()
        }
    }

    #[test]
    fn registered_customer_supply() {
        let rows = gstr1_rows(&[sale(Some("c1"))], &[customer("c1", Some("27ABCDE1234F1Z5"), "Maharashtra")]);
        let row = &rows[0];
        assert_eq!(row.text("gstin"), "27ABCDE1234F1Z5");
        assert_eq!(row.text("receiverName"), "Shree Jewels");
        assert_eq!(row.text("invoiceDate"), "02/04/2024");
        assert_eq!(row.text("invoiceValue"), "₹41,406.00");
        assert_eq!(row.text("placeOfSupply"), "Maharashtra");
        assert_eq!(row.text("rate"), "3%");
        assert_eq!(row.text("taxableValue"), "₹40,200.00");
        assert_eq!(row.text("cess"), "0.00");
    }

    #[test]
    fn unknown_customer_is_an_unregistered_cash_sale() {
        let rows = gstr1_rows(&[sale(Some("gone")), sale(None)], &[customer("c1", None, "")]);
        for row in rows {
            assert_eq!(row.text("gstin"), "URP");
            assert_eq!(row.text("receiverName"), "Cash Customer");
            assert_eq!(row.text("placeOfSupply"), "Local");
        }
    }

    #[test]
    fn customer_without_gstin_or_state_falls_back() {
        let rows = gstr1_rows(&[sale(Some("c1"))], &[customer("c1", Some(""), "")]);
        assert_eq!(rows[0].text("gstin"), "URP");
        assert_eq!(rows[0].text("receiverName"), "Shree Jewels");
        assert_eq!(rows[0].text("placeOfSupply"), "Local");
    }

    #[test]
    fn gstr3b_sums_sales_and_line_taxes() {
        let mut with_lines = sale(None);
        with_lines.items = vec![SaleItem {
            cgst_amount: 603.0,
            sgst_amount: 603.0,
            ..Default::default()
        }];
        let totals = gstr3b_totals(&[with_lines, sale(None)]);
        assert_eq!(
            totals,
            Gstr3bTotals { taxable: 80_400.0, total_tax: 2_412.0, cgst: 603.0, sgst: 603.0 }
        );
    }

    #[test]
    fn voucher_row_resolves_ledger_name() {
        let ledgers = vec![Ledger {
            id: "l1".into(),
            name: "Cash Account".into(),
            group: "Assets".into(),
            opening_balance: 0.0,
            balance_type: BalanceType::Dr,
        }];
        let voucher: Voucher = serde_json::from_value(json!({
            "id": "v1", "voucherNo": "RV-1", "date": "2024-04-01", "type": "Receipt",
            "ledgerId": "l1", "amount": 2500, "typeDrCr": "Cr",
        }))
        .unwrap();
        let row = voucher_row(&voucher, &ledgers);
        assert_eq!(row.text("ledgerName"), "Cash Account");
        assert_eq!(row.text("type"), "Receipt");
        assert_eq!(row.text("amount"), "₹2,500.00 Cr");

        let row = voucher_row(&voucher, &[]);
        assert_eq!(row.text("ledgerName"), "-");
    }
}
