//! Sales invoice model: scanned lines, their derived amounts and the
//! payload posted to `/api/sales`.

use chrono::{DateTime, SecondsFormat, Utc};
use contracts::domain::a014_sale::aggregate::{CreateSalePayload, SaleItem};
use contracts::domain::a017_barcode_details::aggregate::BarcodeDetails;

use crate::shared::config::{GST_RATE, HALF_GST_RATE};
use crate::shared::date_utils::sale_number;

/// Default gold and silver rates the invoice opens with.
pub const DEFAULT_GOLD_RATE: f64 = 7500.0;
pub const DEFAULT_SILVER_RATE: f64 = 85.0;

#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceLine {
    /// Local key of the line, unique within the invoice.
    pub id: String,
    pub stock_item_id: Option<String>,
    pub barcode_id: Option<String>,
    pub category_id: Option<String>,
    pub hsn_id: Option<String>,

    pub category: String,
    pub barcode: String,
    pub particulars: String,
    pub hsn: String,
    pub pieces: i64,
    pub size: String,
    pub purity: String,
    pub gross_weight: f64,
    pub other_weight: f64,
    pub net_weight: f64,
    pub fine: f64,
    pub wastage: f64,
    pub total_fine: f64,
    pub metal_rate: f64,
    pub labour: f64,
    pub amount: f64,
}

/// One edit made in an invoice row.
#[derive(Clone, Debug, PartialEq)]
pub enum LineEdit {
    Category(String),
    Particulars(String),
    Hsn(String),
    Pieces(i64),
    Size(String),
    Purity(String),
    GrossWeight(f64),
    OtherWeight(f64),
    MetalRate(f64),
    Labour(f64),
}

impl InvoiceLine {
    /// Line for a barcode search hit, priced at `metal_rate`.
    pub fn from_details(details: &BarcodeDetails, metal_rate: f64) -> Self {
        let stock_item = details.stock_items.first();
        let category = details.category.as_ref();
        let mut line = Self {
            id: uuid::Uuid::new_v4().to_string(),
            stock_item_id: stock_item.map(|s| s.id.clone()),
            barcode_id: Some(details.id.clone()),
            category_id: category.map(|c| c.id.clone()).filter(|id| !id.is_empty()),
            hsn_id: category.and_then(|c| c.hsn_id.clone()),
            category: category
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            barcode: details.barcode.clone(),
            particulars: category.and_then(|c| c.description.clone()).unwrap_or_default(),
            hsn: category.and_then(|c| c.hsn_id.clone()).unwrap_or_default(),
            pieces: details.pieces,
            size: stock_item
                .and_then(|s| s.size.as_ref())
                .map(|s| s.size_label.clone())
                .unwrap_or_default(),
            purity: details.purity.as_ref().map(|p| p.display()).unwrap_or_default(),
            gross_weight: details.gross_weight,
            other_weight: details.stone_weight,
            net_weight: details.net_weight,
            fine: details.fine_weight,
            wastage: details.wastage_percent,
            total_fine: details.fine_weight,
            metal_rate,
            labour: 0.0,
            amount: 0.0,
        };
        line.amount = line_amount(line.net_weight, line.metal_rate, line.labour);
        line
    }

    /// Apply `edit`. Weights re-derive net weight; net weight, rate and
    /// labour re-derive the amount.
    pub fn apply(&mut self, edit: LineEdit) {
        match edit {
            LineEdit::Category(v) => self.category = v,
            LineEdit::Particulars(v) => self.particulars = v,
            LineEdit::Hsn(v) => self.hsn = v,
            LineEdit::Pieces(v) => self.pieces = v,
            LineEdit::Size(v) => self.size = v,
            LineEdit::Purity(v) => self.purity = v,
            LineEdit::GrossWeight(v) => {
                self.gross_weight = v;
                self.net_weight = self.gross_weight - self.other_weight;
            }
            LineEdit::OtherWeight(v) => {
                self.other_weight = v;
                self.net_weight = self.gross_weight - self.other_weight;
            }
            LineEdit::MetalRate(v) => self.metal_rate = v,
            LineEdit::Labour(v) => self.labour = v,
        }
        self.amount = line_amount(self.net_weight, self.metal_rate, self.labour);
    }

    fn to_sale_item(&self) -> SaleItem {
        SaleItem {
            stock_item_id: self.stock_item_id.clone(),
            barcode_id: self.barcode_id.clone(),
            category_id: self.category_id.clone(),
            hsn_id: self.hsn_id.clone().filter(|h| !h.is_empty()),
            pieces: self.pieces,
            gross_weight: self.gross_weight,
            net_weight: self.net_weight,
            fine_weight: self.fine,
            metal_rate: self.metal_rate,
            metal_amount: self.amount - self.labour,
            stone_amount: 0.0,
            making_amount: self.labour,
            taxable_amount: self.amount,
            gst_percent: GST_RATE * 100.0,
            cgst_amount: self.amount * HALF_GST_RATE,
            sgst_amount: self.amount * HALF_GST_RATE,
            igst_amount: 0.0,
            line_total: self.amount * (1.0 + GST_RATE),
        }
    }
}

pub fn line_amount(net_weight: f64, metal_rate: f64, labour: f64) -> f64 {
    net_weight * metal_rate + labour
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InvoiceTotals {
    pub sub_total: f64,
    pub gst: f64,
    pub grand_total: f64,
}

pub fn invoice_totals(lines: &[InvoiceLine]) -> InvoiceTotals {
    let sub_total: f64 = lines.iter().map(|l| l.amount).sum();
    let gst = sub_total * GST_RATE;
    InvoiceTotals {
        sub_total,
        gst,
        grand_total: sub_total + gst,
    }
}

/// Append a line for `details` unless its barcode is already on the
/// invoice. Returns whether a line was added.
pub fn add_line(lines: &mut Vec<InvoiceLine>, details: &BarcodeDetails, metal_rate: f64) -> bool {
    if lines.iter().any(|l| l.barcode == details.barcode) {
        return false;
    }
    lines.push(InvoiceLine::from_details(details, metal_rate));
    true
}

pub fn edit_line(lines: &mut [InvoiceLine], id: &str, edit: LineEdit) {
    if let Some(line) = lines.iter_mut().find(|l| l.id == id) {
        line.apply(edit);
    }
}

pub fn remove_line(lines: &mut Vec<InvoiceLine>, id: &str) {
    lines.retain(|l| l.id != id);
}

pub fn join_narration(jewellery: &str, account: &str) -> String {
    if account.is_empty() {
        jewellery.to_string()
    } else {
        format!("{} | {}", jewellery, account)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvoiceError {
    #[error("Select a customer before saving")]
    NoCustomer,
    #[error("Add at least one item before saving")]
    NoLines,
}

/// Body of `POST /api/sales` for the current invoice.
pub fn sale_payload(
    customer_id: &str,
    lines: &[InvoiceLine],
    jewellery_narration: &str,
    account_narration: &str,
    now: DateTime<Utc>,
) -> Result<CreateSalePayload, InvoiceError> {
    if customer_id.is_empty() {
        return Err(InvoiceError::NoCustomer);
    }
    if lines.is_empty() {
        return Err(InvoiceError::NoLines);
    }
    let totals = invoice_totals(lines);
    let sum = |f: fn(&InvoiceLine) -> f64| lines.iter().map(f).sum::<f64>();

    Ok(CreateSalePayload {
        sale_no: sale_number(now),
        sale_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        customer_id: customer_id.to_string(),
        salesman_id: String::new(),
        total_gross_wt: sum(|l| l.gross_weight),
        total_net_wt: sum(|l| l.net_weight),
        total_fine_wt: sum(|l| l.total_fine),
        stone_amount: sum(|l| l.other_weight),
        making_amount: sum(|l| l.labour),
        wastage_amount: sum(|l| l.wastage),
        sub_total: totals.sub_total,
        total_tax: totals.gst,
        round_off: 0.0,
        grand_total: totals.grand_total,
        notes: join_narration(jewellery_narration, account_narration),
        items: lines.iter().map(InvoiceLine::to_sale_item).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::a017_barcode_details::aggregate::{
        BarcodeCategory, BarcodePurity, BarcodeSize, BarcodeStockItem,
    };

    fn details(barcode: &str) -> BarcodeDetails {
        BarcodeDetails {
            id: format!("bd-{}", barcode),
            barcode: barcode.into(),
            pieces: 1,
            gross_weight: 10.0,
            stone_weight: 2.0,
            net_weight: 8.0,
            fine_weight: 7.328,
            category: Some(BarcodeCategory {
                id: "c1".into(),
                name: "Ring".into(),
                description: Some("Gold Ring".into()),
                hsn_id: Some("h1".into()),
            }),
            purity: Some(BarcodePurity {
                purity_label: "22K".into(),
                purity_percent: Some(91.6),
            }),
            stock_items: vec![BarcodeStockItem {
                id: "s1".into(),
                size: Some(BarcodeSize { size_label: "12".into() }),
            }],
            ..Default::default()
        }
    }

    fn priced_line() -> InvoiceLine {
        let mut line = InvoiceLine::from_details(&details("1001"), 5000.0);
        line.apply(LineEdit::Labour(200.0));
        line
    }

    #[test]
    fn line_amount_is_net_times_rate_plus_labour() {
        let line = priced_line();
        assert_eq!(line.net_weight, 8.0);
        assert_eq!(line.amount, 40200.0);
        assert_eq!(line.purity, "91.6%");
        assert_eq!(line.size, "12");
        assert_eq!(line.stock_item_id.as_deref(), Some("s1"));
    }

    #[test]
    fn weight_edits_rederive_net_and_amount() {
        let mut line = priced_line();
        line.apply(LineEdit::GrossWeight(12.0));
        assert_eq!(line.net_weight, 10.0);
        assert_eq!(line.amount, 50200.0);
        line.apply(LineEdit::OtherWeight(0.0));
        assert_eq!(line.net_weight, 12.0);
        line.apply(LineEdit::MetalRate(1000.0));
        assert_eq!(line.amount, 12200.0);
    }

    #[test]
    fn totals_add_three_percent() {
        let mut second = priced_line();
        second.id = "other".into();
        let totals = invoice_totals(&[priced_line(), second]);
        assert_eq!(totals.sub_total, 80400.0);
        assert!((totals.gst - 80400.0 * 0.03).abs() < 1e-6);
        assert!((totals.grand_total - 80400.0 * 1.03).abs() < 1e-6);
        assert_eq!(invoice_totals(&[]), InvoiceTotals::default());
    }

    #[test]
    fn same_barcode_is_added_once() {
        let mut lines = Vec::new();
        assert!(add_line(&mut lines, &details("1001"), DEFAULT_GOLD_RATE));
        assert!(!add_line(&mut lines, &details("1001"), DEFAULT_GOLD_RATE));
        assert!(add_line(&mut lines, &details("1002"), DEFAULT_GOLD_RATE));
        assert_eq!(lines.len(), 2);

        let id = lines[0].id.clone();
        remove_line(&mut lines, &id);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].barcode, "1002");
    }

    #[test]
    fn payload_carries_per_line_tax() {
        let now = Utc.with_ymd_and_hms(2025, 4, 2, 9, 30, 0).unwrap();
        let payload = sale_payload("cust", &[priced_line()], "Bridal set", "", now).unwrap();
        assert!(payload.sale_no.starts_with("SALE-2025-"));
        assert_eq!(payload.sale_date, "2025-04-02T09:30:00.000Z");
        assert_eq!(payload.salesman_id, "");
        assert_eq!(payload.notes, "Bridal set");
        assert_eq!(payload.stone_amount, 2.0);
        let item = &payload.items[0];
        assert_eq!(item.metal_amount, 40000.0);
        assert_eq!(item.making_amount, 200.0);
        assert_eq!(item.gst_percent, 3.0);
        assert!((item.cgst_amount - 603.0).abs() < 1e-6);
        assert!((item.line_total - 41406.0).abs() < 1e-6);
        assert_eq!(item.hsn_id.as_deref(), Some("h1"));
    }

    #[test]
    fn save_needs_customer_and_lines() {
        let now = Utc::now();
        assert_eq!(
            sale_payload("", &[priced_line()], "", "", now),
            Err(InvoiceError::NoCustomer)
        );
        assert_eq!(sale_payload("c", &[], "", "", now), Err(InvoiceError::NoLines));
    }

    #[test]
    fn narration_joins_account_part() {
        assert_eq!(join_narration("a", "b"), "a | b");
        assert_eq!(join_narration("a", ""), "a");
    }
}
