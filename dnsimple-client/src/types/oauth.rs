use serde::{Deserialize, Serialize};

/// Token returned by the OAuth authorization code exchange.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub scope: Option<String>,
    pub account_id: u64,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field(
                "access_token",
                &crate::utils::log_sanitizer::mask_secret(&self.access_token),
            )
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// Body of the token exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ExchangeAuthorizationInput<'a> {
    pub grant_type: &'static str,
    pub code: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub state: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<&'a str>,
}
