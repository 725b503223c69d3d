mod state;
mod widget;

pub use widget::OrderList;
