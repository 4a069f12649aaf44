use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::shared::config::SanityConfig;
use crate::shared::content::ContentError;
use crate::shared::format::preview;

/// Ответ query API: `{ "result": ..., "ms": 12 }`
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
    #[serde(default)]
    ms: Option<u64>,
}

/// HTTP-клиент query API CMS
pub struct SanityClient {
    client: reqwest::Client,
    query_url: String,
    token: Option<String>,
}

impl SanityClient {
    pub fn new(config: &SanityConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            query_url: query_url(config),
            token: config
                .token
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        })
    }

    /// Выполнить GROQ-запрос. Значения параметров кодируются как JSON.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, serde_json::Value)],
    ) -> Result<T, ContentError> {
        let mut query_params: Vec<(String, String)> = Vec::with_capacity(params.len() + 1);
        query_params.push(("query".to_string(), query.to_string()));
        for (name, value) in params {
            query_params.push((format!("${}", name), value.to_string()));
        }

        let mut request = self
            .client
            .get(&self.query_url)
            .header("Accept", "application/json")
            .query(&query_params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Content query failed with status {}: {}", status, preview(&body, 500));
            return Err(ContentError::Status {
                status: status.as_u16(),
                body: preview(&body, 500),
            });
        }

        let body = response.text().await?;
        match serde_json::from_str::<QueryResponse<T>>(&body) {
            Ok(data) => {
                tracing::debug!("Content query took {:?}ms", data.ms);
                Ok(data.result)
            }
            Err(e) => {
                tracing::error!("Failed to parse content query response: {}", e);
                tracing::error!("Response body: {}", preview(&body, 500));
                Err(ContentError::Decode(e.to_string()))
            }
        }
    }
}

/// `https://<project>.api[cdn].sanity.io/v<version>/data/query/<dataset>`
pub fn query_url(config: &SanityConfig) -> String {
    let version = config.api_version.trim_start_matches('v');
    let base = match config.api_host.as_deref().map(str::trim) {
        Some(host) if !host.is_empty() => host.trim_end_matches('/').to_string(),
        _ => {
            let host = if config.use_cdn { "apicdn" } else { "api" };
            format!("https://{}.{}.sanity.io", config.project_id, host)
        }
    };
    format!("{}/v{}/data/query/{}", base, version, config.dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn config(use_cdn: bool) -> SanityConfig {
        SanityConfig {
            project_id: "abc123".into(),
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            use_cdn,
            token: None,
            api_host: None,
        }
    }

    #[test]
    fn test_query_url() {
        assert_eq!(
            query_url(&config(true)),
            "https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
        assert_eq!(
            query_url(&config(false)),
            "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_query_url_accepts_prefixed_version() {
        let mut cfg = config(false);
        cfg.api_version = "v2021-10-21".into();
        assert!(query_url(&cfg).contains("/v2021-10-21/"));
    }

    #[test]
    fn test_query_url_with_api_host() {
        let mut cfg = config(true);
        cfg.api_host = Some("http://127.0.0.1:9999/".into());
        assert_eq!(
            query_url(&cfg),
            "http://127.0.0.1:9999/v2024-01-01/data/query/production"
        );
    }

    /// Локальный HTTP-сервер на одно соединение; `None` = не отвечать
    async fn serve_once(response: Option<String>) -> SanityClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    return;
                }
                request.extend_from_slice(&buf[..n]);
            }
            match response {
                Some(response) => {
                    socket.write_all(response.as_bytes()).await.unwrap();
                    socket.shutdown().await.ok();
                }
                None => tokio::time::sleep(Duration::from_secs(5)).await,
            }
        });

        let mut cfg = config(false);
        cfg.api_host = Some(format!("http://{}", addr));
        SanityClient::new(&cfg, Duration::from_millis(300)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_decodes_result() {
        let body = r#"{"result":["pergolas"],"ms":3}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let client = serve_once(Some(response)).await;
        let result: Vec<String> = client.fetch("*", &[]).await.unwrap();
        assert_eq!(result, vec!["pergolas"]);
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let client = serve_once(Some(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\nConnection: close\r\n\r\nboom".into(),
        ))
        .await;
        let err = client.fetch::<serde_json::Value>("*", &[]).await.unwrap_err();
        assert!(matches!(
            err,
            ContentError::Status { status: 500, ref body } if body == "boom"
        ));
    }

    #[tokio::test]
    async fn test_fetch_bad_json_is_decode_error() {
        let client = serve_once(Some(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot json!".into(),
        ))
        .await;
        let err = client.fetch::<serde_json::Value>("*", &[]).await.unwrap_err();
        assert!(matches!(err, ContentError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let client = serve_once(None).await;
        let err = client.fetch::<serde_json::Value>("*", &[]).await.unwrap_err();
        assert!(matches!(err, ContentError::Timeout), "{:?}", err);
    }
}
