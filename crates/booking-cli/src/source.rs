//! Roster data sources.
//!
//! A source is fetched exactly once per run. There is no timeout and no
//! retry: a failure is returned to the caller, which logs it and carries on
//! with an empty roster.

use std::path::PathBuf;

use async_trait::async_trait;
use booking_engine::Roster;
use thiserror::Error;

pub const DEFAULT_SOURCE: &str = "http://localhost:5001/timeSlots";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] booking_engine::BookingError),
}

#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn fetch(&self) -> Result<Roster, SourceError>;

    /// Where the roster comes from, for log lines.
    fn describe(&self) -> String;
}

/// Fetches the roster with a GET request.
pub struct HttpRosterSource {
    url: String,
    client: reqwest::Client,
}

impl HttpRosterSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Use a preconfigured client, e.g. one with proxies or timeouts set.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl RosterSource for HttpRosterSource {
    async fn fetch(&self) -> Result<Roster, SourceError> {
        tracing::debug!(url = %self.url, "fetching roster");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| SourceError::Http {
                url: self.url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: response.status(),
            });
        }

        let body = response.text().await.map_err(|source| SourceError::Http {
            url: self.url.clone(),
            source,
        })?;

        Ok(Roster::from_json(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the roster from a JSON file on disk.
pub struct FileRosterSource {
    path: PathBuf,
}

impl FileRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for FileRosterSource {
    async fn fetch(&self) -> Result<Roster, SourceError> {
        tracing::debug!(path = %self.path.display(), "reading roster");

        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        Ok(Roster::from_json(&body)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source from a `--source` value: URLs go over HTTP, anything else
/// is a file path.
pub fn source_for(location: &str) -> Box<dyn RosterSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpRosterSource::new(location))
    } else {
        Box::new(FileRosterSource::new(location))
    }
}
