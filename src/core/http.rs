//! HTTP utilities for Club Log communication

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use std::time::Duration;

/// Club Log gets one attempt; slower responses fail the run.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every league request.
pub fn default_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the client used for the run.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_header_map())
        .build()?;
    Ok(client)
}
