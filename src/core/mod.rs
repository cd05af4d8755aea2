mod catalog;
mod history;

pub(crate) use catalog::Catalog;
pub(crate) use history::{History, HistoryCap};
