//! Turns a host argument into the metrics URL to poll.

use crate::error::{BlinkyError, Result};
use url::Url;

pub const DEFAULT_HOST: &str = "localhost";

/// Which service answers the metrics request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// A single agent serving its own host
    #[default]
    Agent,
    /// A collector aggregating many agents
    Collector,
}

impl Mode {
    pub fn from_collector_flag(collector: bool) -> Self {
        if collector {
            Mode::Collector
        } else {
            Mode::Agent
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Mode::Agent => 9092,
            Mode::Collector => 8081,
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Mode::Agent => "/metrics",
            Mode::Collector => "/api/metrics",
        }
    }
}

/// Resolve a host name, `host:port` or full URL into a metrics URL
///
/// Without a scheme, `http` and the mode's default port are assumed unless
/// a port is given. The mode's route is appended when the path does not
/// already end with it.
pub fn resolve_endpoint(host: Option<&str>, mode: Mode) -> Result<Url> {
    let input = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST);
    let has_scheme = input.contains("://");

    let candidate = if has_scheme {
        input.to_string()
    } else {
        format!("http://{}", input)
    };
    let mut url = Url::parse(&candidate)
        .map_err(|e| BlinkyError::invalid_endpoint(format!("{}: {}", input, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(BlinkyError::invalid_endpoint(format!(
            "{}: unsupported scheme '{}'",
            input,
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(BlinkyError::invalid_endpoint(format!("{}: missing host", input)));
    }

    if !has_scheme && !has_explicit_port(input) {
        url.set_port(Some(mode.default_port()))
            .map_err(|_| BlinkyError::invalid_endpoint(format!("{}: cannot set port", input)))?;
    }

    let mut path = url.path().trim_end_matches('/').to_string();
    if !path.ends_with(mode.route()) {
        path.push_str(mode.route());
    }
    url.set_path(&path);

    log::debug!("Resolved endpoint {:?} -> {}", host, url);
    Ok(url)
}

// `Url::port` hides ports equal to the scheme default, so look at the input
fn has_explicit_port(input: &str) -> bool {
    let authority = input.split('/').next().unwrap_or(input);
    authority
        .rsplit_once(':')
        .map_or(false, |(_, port)| port.parse::<u16>().is_ok())
}
