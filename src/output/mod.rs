mod format;
mod history;
mod json;

pub(crate) use history::{HistoryTableOptions, output_history_json, print_history_table};
pub(crate) use json::{output_catalog_json, output_generate_json, output_reset_json};
