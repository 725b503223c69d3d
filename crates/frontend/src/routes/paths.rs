//! Browser paths of every screen.

pub const HOME: &str = "/";
pub const ACCOUNTS: &str = "/accounts";

pub const CUSTOMERS: &str = "/masters/customers";
pub const VENDORS: &str = "/masters/vendors";
pub const SALESMEN: &str = "/masters/salesmen";
pub const JOB_WORKERS: &str = "/masters/job-workers";
pub const CATEGORIES: &str = "/masters/categories";
pub const DESIGNS: &str = "/designs";

pub const HSN: &str = "/settings/hsn";
pub const MAKING_CHARGES: &str = "/settings/making-charges";
pub const MATERIAL_TYPES: &str = "/settings/material-types";
pub const PURITIES: &str = "/settings/purities";
pub const SIZES: &str = "/settings/sizes";
pub const METAL_RATES: &str = "/settings/gold-silver-rate";

pub const STOCK: &str = "/stock";
pub const ORDERS: &str = "/orders";
pub const SALES: &str = "/sales";
pub const NEW_SALE: &str = "/sales/add";
