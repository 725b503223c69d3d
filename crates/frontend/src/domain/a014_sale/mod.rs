pub mod api;
pub mod invoice;
pub mod ui;
