//! Owner identity from the signed `user_id` cookie.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::COOKIE, request::Parts},
};

use crate::application::services::owner_service::OWNER_COOKIE;
use crate::state::AppState;

/// The caller's owner id, if any.
///
/// Resolved from a `user_id=<owner>.<signature>` cookie. A missing cookie
/// or one whose signature does not verify yields `Owner(None)`: the
/// request is served in single-tenant scope instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner(pub Option<String>);

impl FromRequestParts<AppState> for Owner {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let owner = cookie_value(&parts.headers, OWNER_COOKIE).and_then(|signed| {
            let owner = state.owner_service.verify(signed);
            if owner.is_none() {
                tracing::debug!("ignoring owner cookie with a bad signature");
            }
            owner
        });

        Ok(Self(owner))
    }
}

/// Finds `name` among all `Cookie` headers.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then_some(value)
        })
}
