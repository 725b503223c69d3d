mod state;
mod widget;

pub use state::{StockEditor, StockLookups};
pub use widget::StockList;
