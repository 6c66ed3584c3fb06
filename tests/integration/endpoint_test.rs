use blinky::core::endpoint::{resolve_endpoint, Mode};
use blinky::BlinkyError;

#[test]
fn test_agent_and_collector_defaults() {
    let agent = resolve_endpoint(Some("node1"), Mode::Agent).unwrap();
    assert_eq!(agent.as_str(), "http://node1:9092/metrics");

    let collector = resolve_endpoint(Some("node1"), Mode::from_collector_flag(true)).unwrap();
    assert_eq!(collector.as_str(), "http://node1:8081/api/metrics");
}

#[test]
fn test_https_url_keeps_scheme_and_port() {
    let url = resolve_endpoint(Some("https://mon.example.com:8443"), Mode::Collector).unwrap();
    assert_eq!(url.as_str(), "https://mon.example.com:8443/api/metrics");
}

#[test]
fn test_trailing_slash_does_not_double_route() {
    let url = resolve_endpoint(Some("http://node1:9092/metrics/"), Mode::Agent).unwrap();
    assert_eq!(url.as_str(), "http://node1:9092/metrics");
}

#[test]
fn test_invalid_endpoint() {
    let err = resolve_endpoint(Some("http://"), Mode::Agent).unwrap_err();
    assert!(matches!(err, BlinkyError::InvalidEndpoint(_)));
}
