mod dashboard;
mod gst;
mod ledgers;
mod vouchers;

pub use dashboard::AccountsDashboard;
