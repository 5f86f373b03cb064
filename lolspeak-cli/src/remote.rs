//! Remote dictionary provider
//!
//! Downloads the translation table as a JSON object over HTTP. The default
//! source is the community lolcat dictionary; point `LOLSPEAK_DICTIONARY_URL`
//! or `--url` at any other document with the same shape.
//!
//! A failed download is reported once. There is no retry.

use crate::error::{CliError, CliResult};
use crate::provider::TableProvider;
use async_trait::async_trait;
use lolspeak::{TranslationTable, parse_table};
use std::time::Duration;
use tracing::{debug, info};

/// Where the dictionary is fetched from when nothing else is configured
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/normansimonr/Dumb-Cogs/master/lolz/data/tranzlashun.json";

/// Environment variable read by `--url` when the flag is absent
pub const DICTIONARY_URL_ENV: &str = "LOLSPEAK_DICTIONARY_URL";

/// Fetches the translation table from a URL
#[derive(Clone)]
pub struct RemoteTableProvider {
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Location of the JSON dictionary
    url: String,
}

impl RemoteTableProvider {
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a provider for an explicit URL
    ///
    /// # Errors
    ///
    /// * `CliError::Config` - If the URL is empty or malformed
    /// * `CliError::Network` - If the HTTP client cannot be built
    pub fn new(url: String) -> CliResult<Self> {
        if url.trim().is_empty() {
            return Err(CliError::Config("Dictionary URL cannot be empty".to_string()));
        }
        reqwest::Url::parse(&url)
            .map_err(|e| CliError::Config(format!("Invalid dictionary URL '{}': {}", url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, url })
    }
}

impl std::fmt::Debug for RemoteTableProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteTableProvider")
            .field("url", &self.url)
            .finish()
    }
}

#[async_trait]
impl TableProvider for RemoteTableProvider {
    async fn load_table(&self) -> CliResult<TranslationTable> {
        info!("Fetching dictionary from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                CliError::Config(format!(
                    "Dictionary request rejected ({}): {}",
                    status, error_text
                ))
            } else {
                CliError::Network(format!("Dictionary server error ({}): {}", status, error_text))
            });
        }

        let body = response.text().await?;
        let table = parse_table(&body)?;
        debug!("{} returned {} entries", self.provider_name(), table.len());
        Ok(table)
    }

    fn provider_name(&self) -> &str {
        "Remote dictionary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single HTTP response on a local port and return its URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/tranzlashun.json", addr)
    }

    #[test]
    fn test_new_with_valid_url() {
        let provider = RemoteTableProvider::new(DEFAULT_DICTIONARY_URL.to_string()).unwrap();
        assert!(format!("{:?}", provider).contains(DEFAULT_DICTIONARY_URL));
        assert_eq!(provider.provider_name(), "Remote dictionary");
    }

    #[test]
    fn test_new_with_empty_url() {
        match RemoteTableProvider::new("  ".to_string()) {
            Err(CliError::Config(msg)) => assert!(msg.contains("empty")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_with_malformed_url() {
        match RemoteTableProvider::new("not a url".to_string()) {
            Err(CliError::Config(msg)) => assert!(msg.contains("Invalid dictionary URL")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_table_from_server() {
        let url = serve_once("200 OK", r#"{"cat": "kitteh", "a": ""}"#).await;
        let provider = RemoteTableProvider::new(url).unwrap();

        let table = provider.load_table().await.unwrap();
        assert_eq!(table.lookup("cat"), Some("kitteh"));
        assert_eq!(table.lookup("a"), Some(""));
    }

    #[tokio::test]
    async fn test_client_error_is_config_error() {
        let url = serve_once("404 Not Found", r#"{"error": "missing"}"#).await;
        let provider = RemoteTableProvider::new(url).unwrap();

        match provider.load_table().await {
            Err(CliError::Config(msg)) => assert!(msg.contains("404")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let url = serve_once("503 Service Unavailable", "{}").await;
        let provider = RemoteTableProvider::new(url).unwrap();

        assert!(matches!(
            provider.load_table().await,
            Err(CliError::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_non_object_body_is_table_error() {
        let url = serve_once("200 OK", r#"["cat"]"#).await;
        let provider = RemoteTableProvider::new(url).unwrap();

        assert!(matches!(
            provider.load_table().await,
            Err(CliError::Table(lolspeak::LolError::InvalidTable(_)))
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_table_json_error() {
        let url = serve_once("200 OK", r#"{"cat": "#).await;
        let provider = RemoteTableProvider::new(url).unwrap();

        assert!(matches!(
            provider.load_table().await,
            Err(CliError::Table(lolspeak::LolError::Json(_)))
        ));
    }

    #[tokio::test]
    #[ignore]
    async fn test_fetch_default_dictionary() {
        let provider = RemoteTableProvider::new(DEFAULT_DICTIONARY_URL.to_string()).unwrap();
        let table = provider.load_table().await.unwrap();
        assert!(table.len() > 100);
        assert!(table.lookup("cat").is_some());
    }
}
