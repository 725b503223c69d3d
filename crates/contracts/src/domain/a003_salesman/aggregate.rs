use crate::domain::common::{Party, PartyPayload};

pub type Salesman = Party;
pub type SalesmanPayload = PartyPayload;
