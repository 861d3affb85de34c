//! Asynchronous retrieval of the remote people document.
//!
//! # Design
//! One GET, no retries: transport policy beyond the client's configured
//! timeout belongs to the caller. The function suspends only while waiting
//! on network I/O, so concurrent pipeline runs interleave freely; dropping
//! the returned future cancels the in-flight request and no partial body is
//! ever surfaced.

use crate::error::FetchError;

/// Fetch the raw response body from `address`.
///
/// A malformed address, unreachable host, timeout, or mid-body transport
/// failure is [`FetchError::Transport`]; a non-2xx answer is
/// [`FetchError::Status`]. The body content is not validated here.
pub async fn fetch_resource(
    client: &reqwest::Client,
    address: &str,
) -> Result<String, FetchError> {
    let response = client
        .get(address)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            address: address.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            address: address.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|source| FetchError::Transport {
            address: address.to_string(),
            source,
        })
}
