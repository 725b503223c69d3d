use contracts::domain::a012_stock_item::aggregate::StockStatus;
use contracts::domain::common::Record;
use leptos::prelude::*;
use serde_json::Value;

use crate::domain::a012_stock_item::api::{stock_payload, StockItems};
use crate::domain::a012_stock_item::form::apply_stock_change;
use crate::domain::a012_stock_item::ui::list::{StockEditor, StockLookups};
use crate::shared::api::ResourceClient;
use crate::shared::master::{FieldOption, FieldSchema};

pub fn stock_fields(lookups: &StockLookups) -> Vec<FieldSchema> {
    let materials = lookups
        .material_types
        .iter()
        .map(|m| FieldOption::new(m.id.clone(), m.type_name.clone()))
        .collect();
    let categories = lookups
        .categories
        .iter()
        .map(|c| FieldOption::new(c.id.clone(), c.name.clone()))
        .collect();
    let sizes = lookups
        .sizes
        .iter()
        .map(|s| FieldOption::new(s.id.clone(), s.size_label.clone()))
        .collect();
    let purities = lookups
        .purities
        .iter()
        .map(|p| FieldOption::new(p.id.clone(), format!("{} ({}%)", p.purity_label, p.purity_percent)))
        .collect();
    let statuses = StockStatus::ALL
        .iter()
        .map(|s| FieldOption::new(s.code(), s.label()))
        .collect();

    vec![
        FieldSchema::select("materialTypeId", "Material Type", materials).required(),
        FieldSchema::select("categoryId", "Category", categories).required(),
        FieldSchema::text("barcode", "Barcode").placeholder("Auto/Scan"),
        FieldSchema::select("sizeId", "Size", sizes),
        FieldSchema::select("purityId", "Purity", purities).required(),
        FieldSchema::number("pieces", "Pieces").required(),
        FieldSchema::number("grossWeight", "Gross Weight").required(),
        FieldSchema::number("stoneWeight", "Stone Weight"),
        FieldSchema::number("netWeight", "Net Weight").hint("Gross - Stone"),
        FieldSchema::number("wastagePercent", "Wastage %"),
        FieldSchema::number("fineWeight", "Fine Weight").hint("Net x Purity %"),
        FieldSchema::text("huid", "HUID"),
        FieldSchema::number("stoneCost", "Stone Cost"),
        FieldSchema::number("approxSalesPrice", "Approx Sales Price"),
        FieldSchema::select("status", "Status", statuses),
        FieldSchema::text("salesVoucherNo", "Sales Voucher No"),
        FieldSchema::text("orderNo", "Order No"),
    ]
}

fn dialog_title(editing: bool) -> &'static str {
    if editing {
        "Edit Stock Item"
    } else {
        "Add Stock Item"
    }
}

/// ViewModel for the stock dialog. Saves go straight through the client;
/// the list reloads itself afterwards.
#[derive(Clone)]
pub struct StockDetailsViewModel {
    pub editing_id: Option<String>,
    pub draft: RwSignal<Record>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub lookups: RwSignal<StockLookups>,
}

impl StockDetailsViewModel {
    pub fn new(editor: StockEditor, lookups: RwSignal<StockLookups>) -> Self {
        Self {
            editing_id: editor.editing_id,
            draft: RwSignal::new(editor.draft),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            lookups,
        }
    }

    pub fn title(&self) -> &'static str {
        dialog_title(self.editing_id.is_some())
    }

    pub fn fields(&self) -> Signal<Vec<FieldSchema>> {
        let lookups = self.lookups;
        Signal::derive(move || lookups.with(stock_fields))
    }

    /// Store a field edit and re-derive the dependent weights.
    pub fn change(&self, name: &str, value: Value) {
        let purities = self.lookups.with_untracked(|l| l.purities.clone());
        self.draft
            .update(|d| apply_stock_change(d, name, value, &purities));
    }

    pub fn save_command(&self, client: ResourceClient<StockItems>, on_saved: Callback<()>) {
        let payload = match stock_payload(&self.draft.get_untracked()) {
            Ok(payload) => payload,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };
        let editing_id = self.editing_id.clone();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match editing_id {
                Some(id) => client.update(&id, &payload).await,
                None => client.create(&payload).await,
            };
            saving.try_set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    log::error!("failed to save stock item: {}", e);
                    error.try_set(Some(e.to_string()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::master::FieldKind;
    use contracts::domain::a010_purity::aggregate::Purity;

    #[test]
    fn purity_options_carry_percent() {
        let lookups = StockLookups {
            purities: vec![Purity {
                id: "p1".into(),
                purity_label: "22K".into(),
                purity_percent: 91.6,
            }],
            ..Default::default()
        };
        let fields = stock_fields(&lookups);
        let purity = fields.iter().find(|f| f.name == "purityId").unwrap();
        match &purity.kind {
            FieldKind::Select(options) => assert_eq!(options[0].label, "22K (91.6%)"),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn title_follows_edit_marker() {
        let lookups = RwSignal::new(StockLookups::default());
        let editor = |id: Option<&str>| StockEditor {
            editing_id: id.map(Into::into),
            draft: Record::new(),
        };
        assert_eq!(StockDetailsViewModel::new(editor(None), lookups).title(), "Add Stock Item");
        assert_eq!(StockDetailsViewModel::new(editor(Some("s1")), lookups).title(), "Edit Stock Item");
    }

    #[test]
    fn gross_edit_rederives_net_weight() {
        let lookups = RwSignal::new(StockLookups::default());
        let vm = StockDetailsViewModel::new(
            StockEditor { editing_id: None, draft: Record::new().with("stoneWeight", "1.5") },
            lookups,
        );
        vm.change("grossWeight", Value::from("10"));
        assert_eq!(vm.draft.get_untracked().text("netWeight"), "8.500");
    }
}
