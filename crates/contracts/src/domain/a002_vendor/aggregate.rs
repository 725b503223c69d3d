//! Vendors share the party shape with salesmen and job workers.

use crate::domain::common::{Party, PartyPayload};

pub type Vendor = Party;
pub type VendorPayload = PartyPayload;
