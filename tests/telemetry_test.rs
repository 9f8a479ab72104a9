//! Integration tests for log setup
//!
//! Kept in its own test binary: the subscriber and the `log` bridge are
//! process-wide and can only be installed once.

use clublog_league::{
    clublog::{get_league, LeagueRequest},
    core::build_client,
    telemetry::{get_subscriber, init_subscriber},
    DateRange,
};
use std::{
    io::Write,
    sync::{Arc, Mutex},
    time::Duration,
};
use tracing_subscriber::fmt::MakeWriter;
use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuf {
    type Writer = SharedBuf;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_subscriber_captures_log_records_and_request_filters() {
    std::env::remove_var("RUST_LOG");
    let sink = SharedBuf::default();
    init_subscriber(get_subscriber("debug", sink.clone())).unwrap();

    // Records from crates that use `log`, such as reqwest, reach the subscriber
    tracing_log::log::info!(target: "reqwest::connect", "connecting via log bridge");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let request = LeagueRequest {
        date: DateRange::Past12,
        ..LeagueRequest::default()
    };
    let client = build_client().unwrap();
    let rows = get_league(
        &client,
        &format!("{}/league_api.php", server.uri()),
        &request,
        Duration::from_secs(5),
    )
    .await
    .unwrap();
    assert!(rows.is_empty());

    let output = sink.contents();
    assert!(output.contains("connecting via log bridge"));
    assert!(output.contains("requesting league"));
    assert!(output.contains("past 12 months"));
    assert!(output.contains("all modes"));
    assert!(output.contains("global"));

    // A second install is refused rather than silently replacing the first
    assert!(init_subscriber(get_subscriber("info", SharedBuf::default())).is_err());
}
