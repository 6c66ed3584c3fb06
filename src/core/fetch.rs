use crate::error::Result;
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking HTTP client for one metrics endpoint
pub struct MetricsFetcher {
    client: reqwest::blocking::Client,
    url: Url,
}

impl MetricsFetcher {
    pub fn new(url: Url) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!("blinky/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and decode the payload, failing on transport, status or JSON errors
    pub fn try_fetch(&self) -> Result<Value> {
        let response = self
            .client
            .get(self.url.clone())
            .header("Accept", "application/json")
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }

    /// Fetch the payload; any failure comes back as `{"error": message}`
    pub fn fetch(&self) -> Value {
        match self.try_fetch() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Fetching {} failed: {}", self.url, e);
                error_payload(&e.to_string())
            }
        }
    }
}

/// Payload shape for a failed fetch
pub fn error_payload(message: &str) -> Value {
    json!({ "error": message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    // Serve a single HTTP response on a random local port
    fn serve_once(status: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Url::parse(&format!("http://127.0.0.1:{}/metrics", port)).unwrap()
    }

    #[test]
    fn test_fetch_decodes_json() {
        let url = serve_once("200 OK", r#"{"hostname":"web1"}"#);
        let payload = MetricsFetcher::new(url).unwrap().fetch();
        assert_eq!(payload["hostname"], "web1");
    }

    #[test]
    fn test_http_error_status_becomes_error_payload() {
        let url = serve_once("500 Internal Server Error", "{}");
        let payload = MetricsFetcher::new(url).unwrap().fetch();
        assert!(payload["error"].as_str().unwrap().contains("500"));
    }

    #[test]
    fn test_invalid_json_is_a_decode_error() {
        let url = serve_once("200 OK", "not json");
        let fetcher = MetricsFetcher::new(url).unwrap();
        let err = fetcher.try_fetch().unwrap_err();
        assert!(matches!(err, crate::error::BlinkyError::Http(ref e) if e.is_decode()));
    }

    #[test]
    fn test_invalid_json_fetch_reports_error_payload() {
        let url = serve_once("200 OK", "{\"hostname\":");
        let payload = MetricsFetcher::new(url).unwrap().fetch();
        assert!(payload["error"].as_str().unwrap().starts_with("HTTP error"));
    }

    #[test]
    fn test_connection_refused_becomes_error_payload() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = Url::parse(&format!("http://127.0.0.1:{}/metrics", port)).unwrap();
        let payload = MetricsFetcher::new(url).unwrap().fetch();
        assert!(payload["error"].is_string());
    }
}
