//! Community profile mapping
//!
//! Maps rows of the community sheet onto [`Profile`] records by fixed
//! column position. Rows missing the entrepreneur name, business name or
//! municipality are skipped; missing trailing cells read as empty.

use super::ImageOptions;
use crate::constants::{DEFAULT_SECTOR, community_columns as col};
use crate::media::normalize_text;
use crate::models::{LoadStats, Profile, Row};
use crate::parser::{cell, data_rows};
use tracing::{debug, info};

/// Map one data row, or `None` if a mandatory field is blank
pub fn profile_from_row(row: &[String], images: &ImageOptions) -> Option<Profile> {
    let entrepreneur_name = cell(row, col::ENTREPRENEUR_NAME).trim();
    let business_name = cell(row, col::BUSINESS_NAME).trim();
    let municipality = cell(row, col::MUNICIPALITY).trim();

    if entrepreneur_name.is_empty() || business_name.is_empty() || municipality.is_empty() {
        return None;
    }

    let sector = match cell(row, col::SECTOR) {
        "" => DEFAULT_SECTOR,
        sector => sector,
    };

    Some(Profile {
        entrepreneur_name: entrepreneur_name.to_string(),
        entrepreneur_bio: cell(row, col::ENTREPRENEUR_BIO).to_string(),
        entrepreneur_video: cell(row, col::ENTREPRENEUR_VIDEO).to_string(),
        entrepreneur_photo: images.direct_url(cell(row, col::ENTREPRENEUR_PHOTO)),
        business_name: business_name.to_string(),
        business_description: cell(row, col::BUSINESS_DESCRIPTION).to_string(),
        sector: sector.to_string(),
        address: cell(row, col::ADDRESS).to_string(),
        municipality: normalize_text(municipality),
        business_image: images.direct_url(cell(row, col::BUSINESS_IMAGE)),
        business_video: cell(row, col::BUSINESS_VIDEO).to_string(),
        tiktok: cell(row, col::TIKTOK).to_string(),
        instagram: cell(row, col::INSTAGRAM).to_string(),
        facebook: cell(row, col::FACEBOOK).to_string(),
    })
}

/// Map every data row of a parsed community sheet, skipping the header
pub fn profiles_from_table(table: &[Row], images: &ImageOptions) -> (Vec<Profile>, LoadStats) {
    let mut stats = LoadStats::default();
    let mut profiles = Vec::new();

    for (index, row) in data_rows(table).iter().enumerate() {
        match profile_from_row(row, images) {
            Some(profile) => {
                stats.record(true);
                profiles.push(profile);
            }
            None => {
                stats.record(false);
                debug!("Skipping community row {}: missing mandatory field", index + 2);
            }
        }
    }

    info!(
        "Mapped {} profiles from {} rows ({} skipped)",
        stats.rows_accepted, stats.rows_total, stats.rows_skipped
    );
    (profiles, stats)
}
