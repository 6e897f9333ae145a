//! The fetch boundary: resolving an HTTP request into a two-track outcome.
//!
//! `fetch` owns all of the I/O and error catching; `classify` is the pure
//! half that maps a status line onto the success or failure track. Nothing
//! downstream of this module ever sees a `reqwest::Error`.

use std::time::Duration;

use outcome::Outcome;
use reqwest::{Client, StatusCode, Url, header, redirect};

use crate::failure::FetchFailure;

/// A successfully fetched resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// The response body.
    pub body: String,
}

/// Builds the client used by [`fetch`].
///
/// Redirects are disabled: a redirect status must surface as data, not be
/// followed behind the caller's back.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .redirect(redirect::Policy::none())
        .build()
}

/// Maps a response status, `Location` header, and body onto the two tracks.
///
/// - `200` wraps the body as a [`Resource`]
/// - `404` becomes [`FetchFailure::NotFound`]
/// - `302` and `307` become [`FetchFailure::Moved`] with the parsed target
/// - every other status becomes [`FetchFailure::Generic`]
pub fn classify(
    status: StatusCode,
    location: Option<&str>,
    body: String,
) -> Outcome<Resource, FetchFailure> {
    if status == StatusCode::NOT_FOUND {
        return Outcome::err(FetchFailure::NotFound);
    }

    if status == StatusCode::FOUND || status == StatusCode::TEMPORARY_REDIRECT {
        return match location.and_then(|raw| Url::parse(raw).ok()) {
            Some(location) => Outcome::err(FetchFailure::Moved { location }),
            None => Outcome::err(FetchFailure::Other(
                "redirect without a usable Location header".to_string(),
            )),
        };
    }

    if status != StatusCode::OK {
        return Outcome::err(FetchFailure::Generic);
    }

    Outcome::ok(Resource { body })
}

/// Fetches `address` and resolves every way the request can end into exactly
/// one call to `Outcome::ok` or `Outcome::err`.
///
/// Timeouts become [`FetchFailure::Timeout`]; any other transport error is
/// caught here and carried as [`FetchFailure::Other`] with its description.
pub async fn fetch(client: &Client, address: Url) -> Outcome<Resource, FetchFailure> {
    let response = match client.get(address).send().await {
        Ok(response) => response,
        Err(error) if error.is_timeout() => return Outcome::err(FetchFailure::Timeout),
        Err(error) => return Outcome::err(FetchFailure::Other(error.to_string())),
    };

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    // Reading the body can fail after the status line arrived; that is still
    // a transport failure, not a panic.
    match response.text().await {
        Ok(body) => classify(status, location.as_deref(), body),
        Err(error) if error.is_timeout() => Outcome::err(FetchFailure::Timeout),
        Err(error) => Outcome::err(FetchFailure::Other(error.to_string())),
    }
}
