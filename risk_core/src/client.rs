//! # Calculation Client
//!
//! Posts a [`CalculatorRequest`] as JSON to the model's endpoint and parses
//! the answer into a [`CalculatorResponse`].
//!
//! Every way this can go wrong (connect error, timeout, non-2xx status,
//! body that matches neither response contract) comes back as
//! [`RiskError::ConnectionFailure`]. Callers do not get to distinguish them;
//! the reason string only goes to the log.

use crate::config::ClientConfig;
use crate::errors::{RiskError, RiskResult};
use crate::request::CalculatorRequest;
use crate::response::CalculatorResponse;

/// Current application version (from Cargo.toml)
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the calculation service.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CalculationClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CalculationClient {
    /// Build a client with the configured timeout
    pub fn new(config: ClientConfig) -> RiskResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("Heredity/{}", CURRENT_VERSION))
            .timeout(config.timeout())
            .build()
            .map_err(|e| RiskError::connection_failure(format!("failed to create HTTP client: {}", e)))?;
        Ok(CalculationClient { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit one request and wait for its response
    pub async fn submit(&self, request: &CalculatorRequest) -> RiskResult<CalculatorResponse> {
        let calculator = request.calculator();
        let url = self.config.endpoint_url(calculator.endpoint());
        tracing::debug!(%calculator, %url, "posting calculation request");

        let response = self.http.post(&url).json(request).send().await.map_err(|e| {
            let kind = if e.is_timeout() { "timed out" } else { "network error" };
            RiskError::connection_failure(format!("{} posting to {}: {}", kind, url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RiskError::connection_failure(format!("{} returned {}", url, status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RiskError::connection_failure(format!("failed to read body from {}: {}", url, e)))?;

        let parsed = CalculatorResponse::from_json(calculator, &body)?;
        tracing::debug!(%calculator, kind = parsed.kind(), bytes = body.len(), "calculation response parsed");
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pedigree::{ParentSide, PedigreeState};
    use crate::request::{build_hemophilia, build_thalassemia, HemophiliaForm, ThalassemiaForm};
    use crate::response::LabeledPercentage;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn find_header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n")
    }

    /// Read one HTTP request (headers plus Content-Length body)
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find_header_end(&buf) {
                let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let len = headers
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serve a single canned response; the handle yields the raw request
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{}", addr), handle)
    }

    fn client_for(base_url: String, timeout_secs: u64) -> CalculationClient {
        CalculationClient::new(ClientConfig {
            base_url,
            timeout_secs,
            ..ClientConfig::default()
        })
        .unwrap()
    }

    fn thalassemia_request() -> CalculatorRequest {
        let mut pedigree = PedigreeState::new();
        pedigree.set_parent_status(ParentSide::Male, true);
        build_thalassemia(&ThalassemiaForm::default(), &mut pedigree, 0)
    }

    #[tokio::test]
    async fn test_posts_json_to_model_endpoint() {
        let (url, server) = serve_once("200 OK", r#"{"risk": 12.5}"#).await;
        let client = client_for(url, 5);

        let response = client.submit(&thalassemia_request()).await.unwrap();
        assert_eq!(
            response,
            CalculatorResponse::percentages(vec![LabeledPercentage::new("Autosomal Recessive Risk", 12.5)])
        );

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /calculate_thalassemia HTTP/1.1"));
        assert!(raw.to_lowercase().contains("content-type: application/json"));
        assert!(raw.contains(r#""history":"one_parent""#));
    }

    #[tokio::test]
    async fn test_hemophilia_plot_response() {
        let (url, server) = serve_once("200 OK", r#"{"plot": "iVBORw0K"}"#).await;
        let client = client_for(url, 5);

        let response = client.submit(&build_hemophilia(&HemophiliaForm::default())).await.unwrap();
        assert!(matches!(response, CalculatorResponse::PlotImage(_)));
        assert!(server.await.unwrap().starts_with("POST /calculate_hemophilia "));
    }

    #[tokio::test]
    async fn test_server_error_is_connection_failure() {
        let (url, _server) = serve_once("500 Internal Server Error", r#"{"error": "KeyError"}"#).await;
        let err = client_for(url, 5).submit(&thalassemia_request()).await.unwrap_err();
        assert_eq!(err.error_code(), "CONNECTION_FAILURE");
    }

    #[tokio::test]
    async fn test_html_body_is_connection_failure() {
        let (url, _server) = serve_once("200 OK", "<h1>API running</h1>").await;
        let err = client_for(url, 5).submit(&thalassemia_request()).await.unwrap_err();
        assert!(matches!(err, RiskError::ConnectionFailure { .. }));
    }

    #[tokio::test]
    async fn test_refused_connection_is_connection_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(format!("http://{}", addr), 5)
            .submit(&thalassemia_request())
            .await
            .unwrap_err();
        assert!(matches!(err, RiskError::ConnectionFailure { .. }));
    }

    #[tokio::test]
    async fn test_timeout_is_connection_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _silent = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(10)).await;
            drop(socket);
        });

        let err = client_for(format!("http://{}", addr), 1)
            .submit(&thalassemia_request())
            .await
            .unwrap_err();
        match err {
            RiskError::ConnectionFailure { reason } => assert!(reason.contains("timed out"), "{}", reason),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
