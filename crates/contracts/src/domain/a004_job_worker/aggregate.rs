use crate::domain::common::{Party, PartyPayload};

pub type JobWorker = Party;
pub type JobWorkerPayload = PartyPayload;
