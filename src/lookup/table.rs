//! Backing sources for the delimited lookup tables.
//!
//! A table is re-read on every lookup. Nothing is cached, so edits to the
//! CSV files show up on the next track change.

use std::path::PathBuf;

use async_trait::async_trait;

use super::LookupError;

/// Something that can produce the full text of a lookup table.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Human-readable location, used in logs and errors
    fn location(&self) -> String;

    /// Read the whole table.
    async fn fetch(&self) -> Result<String, LookupError>;
}

/// Table stored on the local filesystem
pub struct FileTable {
    path: PathBuf,
}

impl FileTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TableSource for FileTable {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, LookupError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LookupError::transport(self.location(), e.to_string()))
    }
}

/// Table served over HTTP (e.g. `https://display.local/db/songs.csv`)
pub struct HttpTable {
    url: String,
    http_client: reqwest::Client,
}

impl HttpTable {
    pub fn new(url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl TableSource for HttpTable {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, LookupError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LookupError::transport(&self.url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::transport(
                &self.url,
                format!(
                    "HTTP {}: {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| LookupError::transport(&self.url, e.to_string()))
    }
}

/// Table held in memory. Used by one-shot commands and tests.
pub struct StaticTable {
    name: String,
    contents: String,
}

impl StaticTable {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

#[async_trait]
impl TableSource for StaticTable {
    fn location(&self) -> String {
        format!("memory:{}", self.name)
    }

    async fn fetch(&self) -> Result<String, LookupError> {
        Ok(self.contents.clone())
    }
}

/// Pick a source for a configured table location.
///
/// `http://` and `https://` locations are fetched over the network,
/// everything else is treated as a file path.
pub fn source_for(location: &str, http_client: &reqwest::Client) -> Box<dyn TableSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpTable::new(location, http_client.clone()))
    } else {
        Box::new(FileTable::new(location))
    }
}
