//! Core data structures for NextGen content.
//!
//! Defines the parsed table shapes, the typed records mapped from
//! spreadsheet rows, static reference data and loading statistics.

use serde::{Deserialize, Serialize};

/// One logical CSV record
pub type Row = Vec<String>;

/// All records of one CSV input, in source order
pub type Table = Vec<Row>;

/// A community entrepreneur profile with their business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub entrepreneur_name: String,
    pub entrepreneur_bio: String,
    pub entrepreneur_video: String,
    pub entrepreneur_photo: String,
    pub business_name: String,
    pub business_description: String,
    pub sector: String,
    pub address: String,
    pub municipality: String,
    pub business_image: String,
    pub business_video: String,
    pub tiktok: String,
    pub instagram: String,
    pub facebook: String,
}

/// Social networks a profile may link to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialNetwork {
    Instagram,
    Facebook,
    TikTok,
}

impl SocialNetwork {
    /// Brand colour used for the network's icon
    pub fn color(&self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "#E1306C",
            SocialNetwork::Facebook => "#1877F2",
            SocialNetwork::TikTok => "#000000",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: String,
}

/// How a profile video should be presented
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VideoLink {
    /// Drive-hosted video, playable through its preview page
    Embedded { preview_url: String },
    /// Any other link, opened externally
    External { url: String },
    None,
}

impl Profile {
    /// Social links worth showing, in Instagram, Facebook, TikTok order
    pub fn social_links(&self) -> Vec<SocialLink> {
        [
            (SocialNetwork::Instagram, &self.instagram),
            (SocialNetwork::Facebook, &self.facebook),
            (SocialNetwork::TikTok, &self.tiktok),
        ]
        .into_iter()
        .filter(|(_, url)| url.chars().count() > crate::constants::MIN_SOCIAL_URL_LEN)
        .map(|(network, url)| SocialLink {
            network,
            url: url.clone(),
        })
        .collect()
    }

    pub fn entrepreneur_video(&self) -> VideoLink {
        crate::media::video_link(&self.entrepreneur_video)
    }

    pub fn business_video(&self) -> VideoLink {
        crate::media::video_link(&self.business_video)
    }
}

/// A news item from the showcase sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub municipality: String,
    pub description: String,
    pub image: String,
    pub date: String,
}

/// A benefiting municipality with its map coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub date: String,
    pub municipality: String,
}

/// A scheduled NextGen tour route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub stops: Vec<RouteStop>,
}

/// Row mapping statistics
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    pub rows_total: usize,
    pub rows_accepted: usize,
    pub rows_skipped: usize,
}

impl LoadStats {
    pub fn record(&mut self, accepted: bool) {
        self.rows_total += 1;
        if accepted {
            self.rows_accepted += 1;
        } else {
            self.rows_skipped += 1;
        }
    }
}
