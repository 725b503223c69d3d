mod dashboard;

pub use dashboard::ReportsDashboard;
