pub mod d400_reports;
pub mod d401_accounts;

pub use d400_reports::ui::ReportsDashboard;
pub use d401_accounts::ui::AccountsDashboard;
