//! Stock item add/edit dialog.
//!
//! - view_model.rs: draft, derived weights, save command
//! - view.rs: modal markup

mod view;
mod view_model;

pub use view::StockDetails;
pub use view_model::StockDetailsViewModel;
