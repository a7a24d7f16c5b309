//! CSV source resolution and retrieval
//!
//! A source is either a published spreadsheet export URL or a local file.
//! URLs are fetched with retry and exponential backoff.

use crate::config::FetchConfig;
use crate::constants::CACHE_BUST_PARAM;
use crate::error::{Result, SiteError};
use chrono::Utc;
use reqwest::{Client, Url};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, warn};

/// Where a CSV document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(Url),
    File(PathBuf),
}

impl Source {
    /// Interpret a string as an `http(s)://` URL or otherwise a file path
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(SiteError::InvalidSource {
                source_spec: spec.to_string(),
                reason: "empty source".to_string(),
            });
        }

        if spec.starts_with("http://") || spec.starts_with("https://") {
            let url = Url::parse(spec).map_err(|e| SiteError::InvalidSource {
                source_spec: spec.to_string(),
                reason: e.to_string(),
            })?;
            Ok(Source::Url(url))
        } else {
            Ok(Source::File(PathBuf::from(spec)))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Retrieves CSV text from sources
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    pub async fn fetch_text(&self, source: &Source) -> Result<String> {
        match source {
            Source::File(path) => {
                if !path.exists() {
                    return Err(SiteError::SourceNotFound { path: path.clone() });
                }
                debug!("Reading CSV from {}", path.display());
                let bytes = tokio::fs::read(path).await?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Source::Url(url) => self.fetch_url(url).await,
        }
    }

    /// URL actually requested, with a timestamp parameter when cache busting
    pub fn request_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.config.cache_bust {
            url.query_pairs_mut().append_pair(
                CACHE_BUST_PARAM,
                &Utc::now().timestamp_millis().to_string(),
            );
        }
        url
    }

    async fn fetch_url(&self, url: &Url) -> Result<String> {
        let request_url = self.request_url(url);
        let mut attempts = 0;
        loop {
            match self.get_text(&request_url).await {
                Ok(text) => return Ok(text),
                Err(e) if attempts < self.config.max_retries => {
                    attempts += 1;
                    let backoff = self.config.backoff_delay(attempts);
                    warn!(%url, attempt = attempts, delay = ?backoff, error = %e, "Retrying");
                    sleep(backoff).await;
                }
                Err(e) => {
                    error!(%url, error = %e, "Exhausted retries");
                    return Err(SiteError::FetchFailed {
                        url: url.to_string(),
                        attempts: attempts + 1,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    async fn get_text(&self, url: &Url) -> Result<String> {
        debug!("Fetching text from {}", url);
        Ok(self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::NamedTempFile;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn fetcher(cache_bust: bool) -> Fetcher {
        Fetcher::new(FetchConfig {
            cache_bust,
            max_retries: 0,
            ..FetchConfig::default()
        })
        .unwrap()
    }

    fn retrying_fetcher(max_retries: u32) -> Fetcher {
        Fetcher::new(FetchConfig {
            timeout_secs: 5,
            max_retries,
            initial_backoff_ms: 1,
            cache_bust: true,
        })
        .unwrap()
    }

    /// Serve `responses` in order on a local port, repeating the last one.
    /// Returns the sheet URL and a counter of handled requests.
    async fn serve(responses: Vec<&'static str>) -> (Url, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let index = counter.fetch_add(1, Ordering::SeqCst);
                let response = responses[index.min(responses.len() - 1)];
                let mut buffer = [0u8; 4096];
                let _ = stream.read(&mut buffer).await;
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        let url = Url::parse(&format!("http://{}/sheet.csv?output=csv", addr)).unwrap();
        (url, hits)
    }

    const NOT_FOUND: &str =
        "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
    const SERVER_ERROR: &str =
        "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
    const SHEET: &str =
        "HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nContent-Length: 9\r\nConnection: close\r\n\r\nh1,h2\na,b";

    #[test]
    fn test_parse_source() {
        assert!(matches!(
            Source::parse("https://docs.google.com/x/pub?output=csv").unwrap(),
            Source::Url(_)
        ));
        assert_eq!(
            Source::parse(" data/news.csv ").unwrap(),
            Source::File(PathBuf::from("data/news.csv"))
        );
        assert!(matches!(
            Source::parse(""),
            Err(SiteError::InvalidSource { .. })
        ));
        assert!(matches!(
            Source::parse("https://"),
            Err(SiteError::InvalidSource { .. })
        ));
    }

    #[test]
    fn test_request_url_cache_bust() {
        let url = Url::parse("https://example.com/pub?gid=1&output=csv").unwrap();

        let busted = fetcher(true).request_url(&url);
        let pairs: Vec<_> = busted.query_pairs().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2].0, CACHE_BUST_PARAM);
        assert!(pairs[2].1.parse::<i64>().is_ok());

        assert_eq!(fetcher(false).request_url(&url), url);
    }

    #[tokio::test]
    async fn test_fetch_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "h1,h2\na,b").unwrap();

        let text = fetcher(false)
            .fetch_text(&Source::File(file.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(text, "h1,h2\na,b");
    }

    #[tokio::test]
    async fn test_fetch_file_with_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"h1,h2\nCaf\xe9,b").unwrap();

        let text = fetcher(false)
            .fetch_text(&Source::File(file.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(text, "h1,h2\nCaf\u{FFFD},b");
    }

    #[tokio::test]
    async fn test_fetch_url_exhausts_retries() {
        let url = Url::parse("http://127.0.0.1:1/sheet.csv").unwrap();
        let result = retrying_fetcher(2).fetch_text(&Source::Url(url)).await;
        assert!(matches!(
            result,
            Err(SiteError::FetchFailed { attempts: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_url_many_retries_without_backoff() {
        let fetcher = Fetcher::new(FetchConfig {
            max_retries: 70,
            initial_backoff_ms: 0,
            ..FetchConfig::default()
        })
        .unwrap();
        let url = Url::parse("http://127.0.0.1:1/sheet.csv").unwrap();
        let result = fetcher.fetch_text(&Source::Url(url)).await;
        assert!(matches!(
            result,
            Err(SiteError::FetchFailed { attempts: 71, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_url_error_status_fails() {
        let (url, hits) = serve(vec![NOT_FOUND]).await;
        let result = retrying_fetcher(1).fetch_text(&Source::Url(url)).await;
        match result {
            Err(SiteError::FetchFailed {
                attempts, reason, ..
            }) => {
                assert_eq!(attempts, 2);
                assert!(reason.contains("404"), "unexpected reason: {}", reason);
            }
            other => panic!("expected FetchFailed, got {:?}", other),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_url_recovers_after_retry() {
        let (url, hits) = serve(vec![SERVER_ERROR, SHEET]).await;
        let text = retrying_fetcher(2)
            .fetch_text(&Source::Url(url))
            .await
            .unwrap();
        assert_eq!(text, "h1,h2\na,b");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let result = fetcher(false)
            .fetch_text(&Source::File(PathBuf::from("/nonexistent/sheet.csv")))
            .await;
        assert!(matches!(result, Err(SiteError::SourceNotFound { .. })));
    }
}
