mod charts;
mod error_banner;
mod filter_bar;
mod invoice_view;
mod section;
mod tables;

pub use charts::{ChartSelections, ComboChart, LineChart};
pub use error_banner::ErrorBanner;
pub use filter_bar::FilterBar;
pub use invoice_view::InvoiceView;
pub use section::Section;
pub use tables::{RawTable, RollupTable};
