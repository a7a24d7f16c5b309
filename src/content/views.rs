//! Filterable content views
//!
//! Each view owns its loaded records and current filter selection, so a
//! page holds one value per listing instead of shared mutable globals.

use crate::constants::FILTER_ALL;
use crate::models::{NewsItem, Profile};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

/// A single-valued equality filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    /// `Todos`, `all` and blank select everything, anything else an exact value
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == FILTER_ALL || value.eq_ignore_ascii_case("all") {
            Filter::All
        } else {
            Filter::Only(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
        }
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Filter::parse(s))
    }
}

/// Unique non-empty values, sorted
fn options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Community listing with municipality and sector filters
#[derive(Debug, Clone, Default)]
pub struct CommunityView {
    profiles: Vec<Profile>,
    municipality: Filter,
    sector: Filter,
}

impl CommunityView {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            ..Self::default()
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// First `limit` profiles in sheet order, ignoring filters
    pub fn preview(&self, limit: usize) -> &[Profile] {
        &self.profiles[..limit.min(self.profiles.len())]
    }

    pub fn municipality_options(&self) -> Vec<String> {
        options(self.profiles.iter().map(|p| p.municipality.as_str()))
    }

    pub fn sector_options(&self) -> Vec<String> {
        options(self.profiles.iter().map(|p| p.sector.as_str()))
    }

    pub fn set_municipality_filter(&mut self, filter: Filter) {
        self.municipality = filter;
    }

    pub fn set_sector_filter(&mut self, filter: Filter) {
        self.sector = filter;
    }

    pub fn reset_filters(&mut self) {
        self.municipality = Filter::All;
        self.sector = Filter::All;
    }

    pub fn filtered(&self) -> Vec<&Profile> {
        self.profiles
            .iter()
            .filter(|p| self.municipality.matches(&p.municipality) && self.sector.matches(&p.sector))
            .collect()
    }
}

/// News listing with a municipality filter
#[derive(Debug, Clone, Default)]
pub struct NewsView {
    items: Vec<NewsItem>,
    municipality: Filter,
}

impl NewsView {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            items,
            municipality: Filter::All,
        }
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn preview(&self, limit: usize) -> &[NewsItem] {
        &self.items[..limit.min(self.items.len())]
    }

    pub fn municipality_options(&self) -> Vec<String> {
        options(self.items.iter().map(|n| n.municipality.as_str()))
    }

    pub fn set_municipality_filter(&mut self, filter: Filter) {
        self.municipality = filter;
    }

    pub fn filtered(&self) -> Vec<&NewsItem> {
        self.items
            .iter()
            .filter(|n| self.municipality.matches(&n.municipality))
            .collect()
    }
}
