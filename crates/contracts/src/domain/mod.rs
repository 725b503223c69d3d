pub mod a001_customer;
pub mod a002_vendor;
pub mod a003_salesman;
pub mod a004_job_worker;
pub mod a005_category;
pub mod a006_design;
pub mod a007_hsn;
pub mod a008_making_charge;
pub mod a009_material_type;
pub mod a010_purity;
pub mod a011_size;
pub mod a012_stock_item;
pub mod a013_order;
pub mod a014_sale;
pub mod a015_ledger;
pub mod a016_voucher;
pub mod a017_barcode_details;
pub mod common;
