pub mod chart;
pub mod formatting;
pub mod table_renderer;

pub use chart::render_revenue_chart;
pub use table_renderer::{Alignment, Table, TableColumn};
