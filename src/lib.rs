//! NextGen Content Library
//!
//! Loads the content of the NextGen regional showcase site from
//! spreadsheets published as CSV exports.
//!
//! This library provides tools for:
//! - Parsing hand-edited CSV exports with quoted, multi-line and ragged cells
//! - Mapping sheet rows onto community profiles and news items by column position
//! - Converting Google Drive share links into directly loadable media URLs
//! - Filtering loaded content through explicitly owned views
//! - Counting submitted applications

pub mod cli;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod media;
pub mod models;
pub mod parser;

pub use config::SiteConfig;
pub use content::ContentLoader;
pub use error::{Result, SiteError};
pub use models::{NewsItem, Profile, Row, Table};
pub use parser::{parse_csv, to_csv};
