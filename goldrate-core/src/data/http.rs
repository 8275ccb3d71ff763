//! Default fetcher: blocking HTTP GET for URLs, filesystem read for paths.
//!
//! A failed fetch is reported once and not retried. Both public datasets are
//! small static files, so there is no rate limiting or backoff to manage.

use super::provider::{DataError, SeriesSource, SourceFetcher, SourceLocation};
use std::path::Path;
use std::time::Duration;

/// Fetcher used by the CLI for real runs.
pub struct StandardFetcher {
    client: reqwest::blocking::Client,
}

impl StandardFetcher {
    pub fn new() -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("goldrate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DataError::SourceUnavailable {
                source_name: "http client".into(),
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }

    fn get(&self, source_name: &str, url: &str) -> Result<String, DataError> {
        let unavailable = |reason: String| DataError::SourceUnavailable {
            source_name: source_name.to_string(),
            reason,
        };

        tracing::debug!(source = source_name, %url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP {status} from {url}")));
        }

        resp.text().map_err(|e| unavailable(e.to_string()))
    }

    fn read_file(source_name: &str, path: &Path) -> Result<String, DataError> {
        tracing::debug!(source = source_name, path = %path.display(), "reading file");
        std::fs::read_to_string(path).map_err(|e| DataError::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: format!("{}: {e}", path.display()),
        })
    }
}

impl SourceFetcher for StandardFetcher {
    fn name(&self) -> &str {
        "standard"
    }

    fn fetch_text(&self, source: &SeriesSource) -> Result<String, DataError> {
        match &source.location {
            SourceLocation::Url(url) => self.get(&source.name, url),
            SourceLocation::File(path) => Self::read_file(&source.name, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file_source(path: &Path) -> SeriesSource {
        SeriesSource {
            name: "rates".into(),
            location: SourceLocation::File(path.to_path_buf()),
            skip_lines: 0,
            date_column: "DATE".into(),
            value_column: "FEDFUNDS".into(),
        }
    }

    #[test]
    fn reads_local_file_sources() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "DATE,FEDFUNDS").unwrap();
        writeln!(file, "1960-01-01,3.99").unwrap();

        let fetcher = StandardFetcher::new().unwrap();
        let text = fetcher.fetch_text(&file_source(&path)).unwrap();
        assert!(text.starts_with("DATE,FEDFUNDS"));
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StandardFetcher::new().unwrap();
        let err = fetcher
            .fetch_text(&file_source(&dir.path().join("absent.csv")))
            .unwrap_err();
        assert!(matches!(err, DataError::SourceUnavailable { .. }));
    }
}
