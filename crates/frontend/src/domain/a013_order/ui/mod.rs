pub mod list;
pub mod status_dialog;
