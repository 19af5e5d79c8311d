mod dashboard;
mod invoices;

pub use dashboard::DashboardPage;
pub use invoices::InvoicesPage;
