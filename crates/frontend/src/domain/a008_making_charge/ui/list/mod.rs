use contracts::domain::a008_making_charge::aggregate::ChargeMode;
use leptos::prelude::*;

use crate::domain::a008_making_charge::api::{making_charge_payload, MakingCharges};
use crate::shared::api::{use_gateway, ResourceClient};
use crate::shared::master::{
    bind_resource, ColumnSchema, FieldOption, FieldSchema, MasterContainer, MasterViewModel,
};

#[component]
pub fn MakingChargeList() -> impl IntoView {
    let client = ResourceClient::<MakingCharges>::new(use_gateway());
    let vm = MasterViewModel::new(bind_resource(client, making_charge_payload));

    let modes: Vec<FieldOption> = ChargeMode::ALL
        .iter()
        .map(|m| FieldOption::new(m.code(), m.label()))
        .collect();
    let columns = vec![
        ColumnSchema::new("chargeMode", "Charge Mode"),
        ColumnSchema::new("value", "Value"),
    ];
    let fields = vec![
        FieldSchema::select("chargeMode", "Charge Mode", modes).required(),
        FieldSchema::number("value", "Value").required().placeholder("e.g. 100.00"),
    ];

    view! {
        <MasterContainer
            title="Making Charges"
            subtitle="Configure making charges and calculation modes"
            columns=columns
            fields=fields
            vm=vm
        />
    }
}
