use contracts::domain::a002_vendor::aggregate::{Vendor, VendorPayload};

use crate::shared::api::Resource;

pub struct Vendors;

impl Resource for Vendors {
    const PATH: &'static str = "/api/vendors";
    type Item = Vendor;
    type Payload = VendorPayload;
}
