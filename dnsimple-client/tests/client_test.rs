//! Wire-level behavior shared by every operation: authentication, headers,
//! query strings, error mapping and rate limits.
//!
//! Run with:
//! ```bash
//! cargo test -p dnsimple-client --test client_test
//! ```

mod common;

use std::time::Duration;

use common::{ACCESS_TOKEN, ACCOUNT_ID, MockServer, client_for};
use dnsimple_client::{Client, DnsimpleError, ListOptions};
use tokio::net::TcpListener;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============ Request headers ============

#[tokio::test]
async fn test_bearer_token_and_default_headers() {
    let server = MockServer::serve("v2/whoami/success_account").await;
    let client = client_for(&server);

    require_ok!(client.identity().whoami().await);

    let req = server.request().await;
    assert_eq!(req.method, "GET");
    assert_eq!(req.target, "/v2/whoami");
    let expected_auth = format!("Bearer {ACCESS_TOKEN}");
    assert_eq!(req.header("authorization"), Some(expected_auth.as_str()));
    assert_eq!(req.header("accept"), Some("application/json"));
    let expected_ua = format!("dnsimple-rust/{VERSION}");
    assert_eq!(req.header("user-agent"), Some(expected_ua.as_str()));
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn test_basic_auth_on_the_wire() {
    let server = MockServer::serve("v2/whoami/success_user").await;
    let client = require_ok!(
        Client::builder()
            .basic_auth("user@example.com", "secret")
            .base_url(server.url())
            .build()
    );

    let whoami = require_ok!(client.identity().whoami().await).data;
    assert!(whoami.account.is_none());
    assert_eq!(
        whoami.user.map(|u| u.email),
        Some("example-user@example.com".to_string())
    );

    let req = server.request().await;
    assert_eq!(
        req.header("authorization"),
        Some("Basic dXNlckBleGFtcGxlLmNvbTpzZWNyZXQ=")
    );
}

#[tokio::test]
async fn test_custom_user_agent_is_prepended() {
    let server = MockServer::serve("v2/whoami/success_account").await;
    let client = require_ok!(
        Client::builder()
            .access_token(ACCESS_TOKEN)
            .user_agent("MySuperAPP")
            .base_url(server.url())
            .build()
    );

    require_ok!(client.identity().whoami().await);

    let req = server.request().await;
    let expected = format!("MySuperAPP dnsimple-rust/{VERSION}");
    assert_eq!(req.header("user-agent"), Some(expected.as_str()));
}

#[tokio::test]
async fn test_json_body_has_content_type() {
    let server = MockServer::serve("v2/domains/create_domain_success").await;
    let client = client_for(&server);

    let input = dnsimple_client::CreateDomainInput {
        name: "example-beta.com".to_string(),
    };
    require_ok!(client.domains().create_domain(ACCOUNT_ID, &input).await);

    let req = server.request().await;
    assert_eq!(req.method, "POST");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.body, r#"{"name":"example-beta.com"}"#);
}

// ============ Query strings ============

#[tokio::test]
async fn test_list_options_become_query_parameters() {
    let server = MockServer::serve("v2/domains/list_domains_success").await;
    let client = client_for(&server);

    let opts = ListOptions::new()
        .page(2)
        .per_page(5)
        .sort("expiration:asc")
        .filter("name_like", "example");
    require_ok!(client.domains().list_domains(ACCOUNT_ID, &opts).await);

    let req = server.request().await;
    assert_eq!(req.path(), "/v2/1010/domains");
    assert_eq!(
        req.query(),
        Some("page=2&per_page=5&sort=expiration%3Aasc&name_like=example")
    );
}

#[tokio::test]
async fn test_no_query_string_without_options() {
    let server = MockServer::serve("v2/domains/list_domains_success").await;
    let client = client_for(&server);

    require_ok!(
        client
            .domains()
            .list_domains(ACCOUNT_ID, &ListOptions::default())
            .await
    );

    let req = server.request().await;
    assert_eq!(req.target, "/v2/1010/domains");
    assert_eq!(req.query(), None);
}

#[tokio::test]
async fn test_path_segments_are_escaped() {
    let server = MockServer::serve("v2/domains/get_domain_success").await;
    let client = client_for(&server);

    require_ok!(client.domains().get_domain(ACCOUNT_ID, "a/b?c").await);

    let req = server.request().await;
    assert_eq!(req.target, "/v2/1010/domains/a%2Fb%3Fc");
}

// ============ Response metadata ============

#[tokio::test]
async fn test_rate_limit_and_pagination() {
    let server = MockServer::serve("v2/domains/list_domains_success").await;
    let client = client_for(&server);

    let response = require_ok!(
        client
            .domains()
            .list_domains(ACCOUNT_ID, &ListOptions::new())
            .await
    );

    assert_eq!(response.status, 200);
    assert_eq!(response.rate_limit.limit, Some(2400));
    assert_eq!(response.rate_limit.remaining, Some(2391));
    assert_eq!(response.rate_limit.reset, Some(1_677_595_546));

    let pagination = require_some!(response.pagination);
    assert_eq!(pagination.current_page, 1);
    assert_eq!(pagination.per_page, 30);
    assert_eq!(pagination.total_entries, 2);
    assert_eq!(pagination.total_pages, 1);
    assert!(!pagination.has_more());
}

#[tokio::test]
async fn test_no_content_keeps_status_and_rate_limit() {
    let server = MockServer::serve("v2/domains/delete_domain_success").await;
    let client = client_for(&server);

    let response = require_ok!(
        client
            .domains()
            .delete_domain(ACCOUNT_ID, "example.com")
            .await
    );
    assert_eq!(response.status, 204);
    assert!(response.pagination.is_none());
    assert_eq!(response.rate_limit.remaining, Some(2391));

    assert_eq!(server.request().await.method, "DELETE");
}

// ============ Errors ============

#[tokio::test]
async fn test_validation_error_carries_attribute_errors() {
    let server = MockServer::serve("v2/errors/validation_error").await;
    let client = client_for(&server);

    let result = client
        .contacts()
        .create_contact(ACCOUNT_ID, &dnsimple_client::ContactInput::default())
        .await;
    let err = require_some!(result.err());

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.reason(), Some("Bad Request"));
    assert_eq!(err.message(), Some("Validation failed"));
    let errors = require_some!(err.attribute_errors());
    assert_eq!(
        errors.get("email"),
        Some(&vec![
            "can't be blank".to_string(),
            "is an invalid email address".to_string()
        ])
    );
    assert_eq!(errors.len(), 9);
    assert!(require_some!(err.body()).contains("Validation failed"));
}

#[tokio::test]
async fn test_not_found_error_message() {
    let server = MockServer::serve("v2/errors/not_found_domain").await;
    let client = client_for(&server);

    let err = require_some!(client.domains().get_domain(ACCOUNT_ID, "0").await.err());
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), Some("Domain `0` not found"));
    assert!(err.attribute_errors().is_none());
    assert!(err.to_string().starts_with("(404)\nReason: Not Found"));
}

#[tokio::test]
async fn test_error_with_empty_body() {
    let server = MockServer::serve("v2/errors/method_not_allowed").await;
    let client = client_for(&server);

    let err = require_some!(client.identity().whoami().await.err());
    assert_eq!(err.status(), Some(405));
    assert_eq!(err.reason(), Some("Method Not Allowed"));
    assert!(err.message().is_none());
    assert_eq!(err.body(), Some(""));
}

#[tokio::test]
async fn test_error_with_non_json_body() {
    let server = MockServer::serve("v2/errors/server_error").await;
    let client = client_for(&server);

    let err = require_some!(client.identity().whoami().await.err());
    assert_eq!(err.status(), Some(502));
    assert!(err.message().is_none());
    assert!(require_some!(err.body()).contains("502 Bad Gateway"));
}

#[tokio::test]
async fn test_unauthorized() {
    let server = MockServer::serve("v2/errors/unauthorized").await;
    let client = client_for(&server);

    let err = require_some!(client.accounts().list_accounts().await.err());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), Some("Authentication failed"));
}

#[tokio::test]
async fn test_malformed_success_body_is_parse_error() {
    let server = MockServer::serve("v2/errors/malformed_body").await;
    let client = client_for(&server);

    let err = require_some!(client.identity().whoami().await.err());
    assert!(
        matches!(err, DnsimpleError::ParseError { .. }),
        "unexpected error: {err:?}"
    );
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = require_ok!(TcpListener::bind("127.0.0.1:0").await);
    let addr = require_ok!(listener.local_addr());
    drop(listener);

    let client = require_ok!(
        Client::builder()
            .access_token(ACCESS_TOKEN)
            .base_url(format!("http://{addr}"))
            .build()
    );

    let err = require_some!(client.identity().whoami().await.err());
    assert!(
        matches!(err, DnsimpleError::NetworkError { .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_slow_server_is_timeout() {
    let listener = require_ok!(TcpListener::bind("127.0.0.1:0").await);
    let addr = require_ok!(listener.local_addr());
    let holder = tokio::spawn(async move {
        if let Ok((stream, _)) = listener.accept().await {
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(stream);
        }
    });

    let client = require_ok!(
        Client::builder()
            .access_token(ACCESS_TOKEN)
            .base_url(format!("http://{addr}"))
            .timeout(Duration::from_secs(1))
            .build()
    );

    let err = require_some!(client.identity().whoami().await.err());
    assert!(
        matches!(err, DnsimpleError::Timeout { .. }),
        "unexpected error: {err:?}"
    );
    holder.abort();
}
