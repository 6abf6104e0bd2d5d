//! Identity forwarded by the upstream auth gateway.
//!
//! The gateway owns sessions and login. It forwards the signed-in user in
//! request headers whose values are percent-encoded UTF-8, so Arabic names
//! survive the trip.

use crate::types::CurrentUser;
use axum::http::HeaderMap;

pub const HEADER_FIRST_NAME: &str = "x-auth-first-name";
pub const HEADER_LAST_NAME: &str = "x-auth-last-name";
pub const HEADER_PICTURE_URL: &str = "x-auth-picture-url";

fn decoded_header(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(name)?.to_str().ok()?;
    match urlencoding::decode(raw) {
        Ok(value) => Some(value.into_owned()),
        Err(e) => {
            tracing::debug!(header = name, error = %e, "Header is not valid percent-encoded UTF-8");
            Some(raw.to_string())
        }
    }
}

/// The forwarded user, or `None` when the first-name header is missing.
pub fn user_from_headers(headers: &HeaderMap) -> Option<CurrentUser> {
    let first_name = decoded_header(headers, HEADER_FIRST_NAME)?;
    let last_name = decoded_header(headers, HEADER_LAST_NAME).unwrap_or_default();
    let profile_picture_url = decoded_header(headers, HEADER_PICTURE_URL);
    Some(CurrentUser {
        first_name,
        last_name,
        profile_picture_url,
    })
}
