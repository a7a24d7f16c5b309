//! Link and text helpers for spreadsheet-sourced content.
//!
//! Sheet authors paste Google Drive share links in whatever form Drive
//! hands them out. These helpers pull out the file id and turn it into
//! URLs that can be loaded directly, and escape free text for markup.

use crate::constants::{DIRECT_IMAGE_HOSTS, IMAGE_EXTENSIONS};
use crate::models::VideoLink;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, warn};

static DRIVE_PATH_ID: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("valid regex"));

static DRIVE_QUERY_ID: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"id=([a-zA-Z0-9_-]+)").expect("valid regex"));

/// Extract a Drive file id from `/file/d/<id>`, `open?id=<id>` or `uc?id=<id>` links
pub fn extract_drive_id(url: &str) -> Option<String> {
    DRIVE_PATH_ID
        .captures(url)
        .or_else(|| DRIVE_QUERY_ID.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Preview page that embeds a Drive file
pub fn drive_preview_url(file_id: &str) -> String {
    format!("https://drive.google.com/file/d/{}/preview", file_id)
}

/// Convert a Drive share link into a directly loadable image URL
///
/// Empty or unrecognised links resolve to `fallback`. Links that are
/// already direct image URLs are returned unchanged.
pub fn drive_to_direct_image_url(url: &str, fallback: &str, width: u32) -> String {
    let original = url.trim();
    if original.is_empty() {
        return fallback.to_string();
    }

    if DIRECT_IMAGE_HOSTS.iter().any(|host| original.contains(host)) {
        return original.to_string();
    }

    match extract_drive_id(original) {
        Some(file_id) => {
            let direct = format!("https://lh3.googleusercontent.com/d/{}=w{}", file_id, width);
            debug!("Converted Drive image {} -> {}", original, direct);
            direct
        }
        None => {
            warn!("Could not convert image link: {}", original);
            fallback.to_string()
        }
    }
}

/// What a media link can be displayed as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    DriveEmbed { preview_url: String },
    Image { url: String },
    Unsupported,
}

/// Decide how a gallery link should be displayed
pub fn classify_media(url_or_id: &str) -> MediaKind {
    if let Some(file_id) = extract_drive_id(url_or_id) {
        return MediaKind::DriveEmbed {
            preview_url: drive_preview_url(&file_id),
        };
    }

    if has_image_extension(url_or_id) || url_or_id.starts_with("http") {
        MediaKind::Image {
            url: url_or_id.to_string(),
        }
    } else {
        MediaKind::Unsupported
    }
}

fn has_image_extension(url: &str) -> bool {
    url.rsplit_once('.')
        .map(|(_, ext)| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

pub(crate) fn video_link(url: &str) -> VideoLink {
    match extract_drive_id(url) {
        Some(file_id) => VideoLink::Embedded {
            preview_url: drive_preview_url(&file_id),
        },
        None if !url.is_empty() => VideoLink::External {
            url: url.to_string(),
        },
        None => VideoLink::None,
    }
}

/// Escape text for safe inclusion in HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Trim only, casing is kept since names like "Villa del Rosario" are compound
pub fn normalize_text(text: &str) -> String {
    text.trim().to_string()
}
