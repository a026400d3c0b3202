use crate::client::Client;
use crate::error::Result;
use crate::response::Response;
use crate::types::{AccessToken, ExchangeAuthorizationInput};

const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";

/// OAuth 2 authorization flow.
///
/// See <https://developer.dnsimple.com/v2/oauth/>.
pub struct Oauth<'a> {
    client: &'a Client,
}

impl<'a> Oauth<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Exchange the short-lived authorization code for an access token.
    ///
    /// The endpoint answers with the bare token object (no `data` key).
    pub async fn exchange_authorization_for_token(
        &self,
        code: &str,
        client_id: &str,
        client_secret: &str,
        state: &str,
        redirect_uri: Option<&str>,
    ) -> Result<Response<AccessToken>> {
        let input = ExchangeAuthorizationInput {
            grant_type: GRANT_TYPE_AUTHORIZATION_CODE,
            code,
            client_id,
            client_secret,
            state,
            redirect_uri,
        };
        self.client.post("/oauth/access_token", Some(&input)).await
    }

    /// URL to send the user to for authorizing the application.
    ///
    /// ```rust
    /// # use dnsimple_client::Client;
    /// let client = Client::builder().sandbox(true).build().unwrap();
    /// let url = client
    ///     .oauth()
    ///     .authorize_url("great-app", Some("https://example.com"), Some("secret"), None);
    /// assert_eq!(
    ///     url,
    ///     "https://api.sandbox.dnsimple.com/oauth/authorize?client_id=great-app&response_type=code&redirect_url=https%3A%2F%2Fexample.com&state=secret"
    /// );
    /// ```
    pub fn authorize_url(
        &self,
        client_id: &str,
        redirect_uri: Option<&str>,
        state: Option<&str>,
        scope: Option<&str>,
    ) -> String {
        let mut url = format!(
            "{}/oauth/authorize?client_id={}&response_type=code",
            self.client.base_url(),
            urlencoding::encode(client_id)
        );
        for (key, value) in [
            ("redirect_url", redirect_uri),
            ("state", state),
            ("scope", scope),
        ] {
            if let Some(value) = value {
                url.push_str(&format!("&{key}={}", urlencoding::encode(value)));
            }
        }
        url
    }
}
