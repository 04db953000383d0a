pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{article_line, dim, error, header, info, muted, section, success, summary_row, warn};
pub use table::{articles_table, stats_table, TableBuilder};
pub use theme::{theme, Role, Theme};
