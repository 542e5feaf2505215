//! OAuth refresh-token grant.
//!
//! Exchanges a refresh token for a new access token at the Etsy token
//! endpoint. The call is authenticated by the app keystring alone; the
//! expired bearer token is never sent.

use serde::Serialize;

use crate::auth::session::AccessTokenResponse;
use crate::clients::{HttpError, HttpResponse};
use crate::config::EtsyConfig;

/// OAuth grant type for exchanging a refresh token.
pub const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

#[derive(Debug, Serialize)]
struct TokenRefreshRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    refresh_token: &'a str,
}

/// Requests a new token set with the given refresh token.
///
/// # Errors
///
/// Returns [`HttpError::Network`] on transport failure, [`HttpError::Api`]
/// if the token endpoint answers with an error status, and
/// [`HttpError::Decode`] if the response is not a token set.
pub async fn refresh_access_token(
    client: &reqwest::Client,
    config: &EtsyConfig,
    refresh_token: &str,
) -> Result<AccessTokenResponse, HttpError> {
    let body = TokenRefreshRequest {
        grant_type: REFRESH_TOKEN_GRANT_TYPE,
        client_id: config.api_key().as_ref(),
        refresh_token,
    };

    tracing::debug!(url = %config.token_url(), "Refreshing Etsy access token");

    let res = client
        .post(config.token_url().as_ref())
        .header("Accept", "application/json")
        .header("x-api-key", config.api_key().as_ref())
        .json(&body)
        .send()
        .await?;

    let code = res.status().as_u16();
    let text = res.text().await?;
    let value = HttpResponse::from_body_text(code, &text)?.into_result()?;

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refresh_request_serializes_grant_fields() {
        let body = TokenRefreshRequest {
            grant_type: REFRESH_TOKEN_GRANT_TYPE,
            client_id: "keystring",
            refresh_token: "1.rt",
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "grant_type": "refresh_token",
                "client_id": "keystring",
                "refresh_token": "1.rt"
            })
        );
    }
}
