use contracts::domain::a003_salesman::aggregate::{Salesman, SalesmanPayload};

use crate::shared::api::Resource;

pub struct Salesmen;

impl Resource for Salesmen {
    const PATH: &'static str = "/api/salesmen";
    type Item = Salesman;
    type Payload = SalesmanPayload;
}
