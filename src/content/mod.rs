//! Content loading for the published NextGen sheets.
//!
//! Ties together source retrieval, CSV parsing and row mapping, and hands
//! back owned views the caller filters and renders.

pub mod counter;
pub mod news;
pub mod profiles;
pub mod reference;
pub mod source;
pub mod views;

#[cfg(test)]
pub mod tests;

use self::source::{Fetcher, Source};
use self::views::{CommunityView, NewsView};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::media::drive_to_direct_image_url;
use crate::models::{LoadStats, NewsItem, Profile, Table};
use crate::parser::parse_csv;

use std::time::Instant;
use tracing::{debug, info};

/// How sheet image links are turned into displayable URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    pub fallback: String,
    pub width: u32,
}

impl ImageOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            fallback: config.fallback_image.clone(),
            width: config.image_width,
        }
    }

    /// Directly loadable URL for a sheet image link
    pub fn direct_url(&self, url: &str) -> String {
        drive_to_direct_image_url(url, &self.fallback, self.width)
    }
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// Everything the site shows, loaded in one pass
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub community: CommunityView,
    pub community_stats: LoadStats,
    pub news: NewsView,
    pub news_stats: LoadStats,
    pub applications: usize,
}

/// Loads and maps the configured sheets
#[derive(Debug, Clone)]
pub struct ContentLoader {
    config: SiteConfig,
    fetcher: Fetcher,
    images: ImageOptions,
}

impl ContentLoader {
    pub fn new(config: SiteConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = Fetcher::new(config.fetch.clone())?;
        let images = ImageOptions::from_config(&config);
        Ok(Self {
            config,
            fetcher,
            images,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Fetch and parse any source into a raw table, header included
    pub async fn parse_source(&self, spec: &str) -> Result<Table> {
        let source = Source::parse(spec)?;
        let start = Instant::now();
        let text = self.fetcher.fetch_text(&source).await?;
        let table = parse_csv(&text);
        debug!(
            "Parsed {} rows ({} bytes) from {} in {:?}",
            table.len(),
            text.len(),
            source,
            start.elapsed()
        );
        Ok(table)
    }

    pub async fn load_profiles(&self) -> Result<(Vec<Profile>, LoadStats)> {
        let table = self.parse_source(&self.config.sources.community).await?;
        Ok(profiles::profiles_from_table(&table, &self.images))
    }

    pub async fn load_news(&self) -> Result<(Vec<NewsItem>, LoadStats)> {
        let table = self.parse_source(&self.config.sources.news).await?;
        Ok(news::news_from_table(&table, &self.images))
    }

    pub async fn count_applications(&self) -> Result<usize> {
        let table = self.parse_source(&self.config.sources.applications).await?;
        Ok(counter::count_applications(&table))
    }

    /// Load all three sheets concurrently
    pub async fn load_all(&self) -> Result<SiteContent> {
        let start = Instant::now();
        let ((profiles, community_stats), (news, news_stats), applications) = futures::try_join!(
            self.load_profiles(),
            self.load_news(),
            self.count_applications()
        )?;

        info!(
            "Loaded {} profiles, {} news items and {} applications in {:?}",
            profiles.len(),
            news.len(),
            applications,
            start.elapsed()
        );

        Ok(SiteContent {
            community: CommunityView::new(profiles),
            community_stats,
            news: NewsView::new(news),
            news_stats,
            applications,
        })
    }
}
