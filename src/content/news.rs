//! News item mapping
//!
//! Rows need at least six cells plus a title, municipality and date.

use super::ImageOptions;
use crate::constants::news_columns as col;
use crate::media::normalize_text;
use crate::models::{LoadStats, NewsItem, Row};
use crate::parser::{cell, data_rows};
use tracing::{debug, info};

pub fn news_from_row(row: &[String], images: &ImageOptions) -> Option<NewsItem> {
    if row.len() < col::MIN_COLUMNS {
        return None;
    }

    let title = cell(row, col::TITLE).trim();
    let municipality = cell(row, col::MUNICIPALITY).trim();
    let date = cell(row, col::DATE).trim();
    if title.is_empty() || municipality.is_empty() || date.is_empty() {
        return None;
    }

    Some(NewsItem {
        title: title.to_string(),
        municipality: normalize_text(municipality),
        description: cell(row, col::DESCRIPTION).to_string(),
        image: images.direct_url(cell(row, col::IMAGE)),
        date: date.to_string(),
    })
}

/// Map every data row of a parsed news sheet, skipping the header
pub fn news_from_table(table: &[Row], images: &ImageOptions) -> (Vec<NewsItem>, LoadStats) {
    let mut stats = LoadStats::default();
    let mut items = Vec::new();

    for (index, row) in data_rows(table).iter().enumerate() {
        if let Some(item) = news_from_row(row, images) {
            stats.record(true);
            items.push(item);
        } else {
            stats.record(false);
            debug!("Skipping news row {} ({} cells)", index + 2, row.len());
        }
    }

    info!(
        "Mapped {} news items from {} rows ({} skipped)",
        stats.rows_accepted, stats.rows_total, stats.rows_skipped
    );
    (items, stats)
}
