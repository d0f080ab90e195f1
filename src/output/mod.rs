pub mod formatter;

pub use formatter::{
    format_correlation_detail, format_correlation_table, format_feast_list, format_stats,
    format_tsv, should_use_colors,
};
