//! Zones and zone records.

mod common;

use common::{ACCOUNT_ID, Fixture, MockServer, client_for};
use dnsimple_client::{
    BatchChangeZoneRecordsInput, BatchDeleteZoneRecord, BatchUpdateZoneRecord, ListOptions,
    UpdateZoneNsRecordsInput, ZoneRecordInput, ZoneRecordUpdateInput,
};

// ============ Zones ============

#[tokio::test]
async fn test_list_zones_with_filter() {
    let server = MockServer::serve("v2/zones/list_zones_success").await;
    let client = client_for(&server);

    let opts = ListOptions::new().filter("name_like", "example").sort("name:desc");
    let zones = require_ok!(client.zones().list_zones(ACCOUNT_ID, &opts).await).data;
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].name, "example-alpha.com");
    assert!(!zones[0].reverse);
    assert!(zones[1].reverse);
    assert_eq!(zones[0].active, Some(true));

    let req = server.request().await;
    assert_eq!(req.path(), "/v2/1010/zones");
    assert_eq!(req.query(), Some("sort=name%3Adesc&name_like=example"));
}

#[tokio::test]
async fn test_get_zone() {
    let server = MockServer::serve("v2/zones/get_zone_success").await;
    let client = client_for(&server);

    let zone = require_ok!(client.zones().get_zone(ACCOUNT_ID, "example-alpha.com").await).data;
    assert_eq!(zone.id, 1);
    assert!(!zone.secondary);
    assert!(zone.last_transferred_at.is_none());

    assert_eq!(
        server.request().await.target,
        "/v2/1010/zones/example-alpha.com"
    );
}

#[tokio::test]
async fn test_get_zone_file() {
    let server = MockServer::serve("v2/zones/get_zone_file_success").await;
    let client = client_for(&server);

    let file = require_ok!(client.zones().get_zone_file(ACCOUNT_ID, "example.com").await).data;
    assert!(file.zone.starts_with("$ORIGIN example.com.\n"));
    assert!(file.zone.contains("IN SOA ns1.dnsimple.com."));

    assert_eq!(
        server.request().await.target,
        "/v2/1010/zones/example.com/file"
    );
}

#[tokio::test]
async fn test_check_zone_distribution() {
    let server = MockServer::start(vec![
        Fixture::load("v2/zones/check_zone_distribution_success"),
        Fixture::load("v2/zones/check_zone_distribution_failure"),
        Fixture::load("v2/zones/check_zone_distribution_error"),
    ])
    .await;
    let client = client_for(&server);
    let zones = client.zones();

    let distributed = require_ok!(zones.check_zone_distribution(ACCOUNT_ID, "example.com").await);
    assert!(distributed.data.distributed);

    let pending = require_ok!(zones.check_zone_distribution(ACCOUNT_ID, "example.com").await);
    assert!(!pending.data.distributed);

    let err = require_some!(
        zones
            .check_zone_distribution(ACCOUNT_ID, "example.com")
            .await
            .err()
    );
    assert_eq!(err.status(), Some(504));
    assert_eq!(
        err.message(),
        Some("Could not query zone, connection timed out")
    );

    let requests = server.finish().await;
    assert!(
        requests
            .iter()
            .all(|r| r.target == "/v2/1010/zones/example.com/distribution")
    );
}

#[tokio::test]
async fn test_activate_and_deactivate_dns() {
    let server = MockServer::start(vec![
        Fixture::load("v2/zones/activate_dns_success"),
        Fixture::load("v2/zones/deactivate_dns_success"),
    ])
    .await;
    let client = client_for(&server);

    let active = require_ok!(client.zones().activate_dns(ACCOUNT_ID, "example.com").await).data;
    assert_eq!(active.active, Some(true));

    let inactive = require_ok!(client.zones().deactivate_dns(ACCOUNT_ID, "example.com").await).data;
    assert_eq!(inactive.active, Some(false));

    let requests = server.finish().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].target, "/v2/1010/zones/example.com/activation");
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].target, "/v2/1010/zones/example.com/activation");
}

#[tokio::test]
async fn test_update_zone_ns_records() {
    let server = MockServer::serve("v2/zones/update_zone_ns_records_success").await;
    let client = client_for(&server);

    let input = UpdateZoneNsRecordsInput {
        ns_names: vec!["ns1.example.com".to_string(), "ns2.example.com".to_string()],
        ns_set_ids: Some(vec![1, 2]),
    };
    let records = require_ok!(
        client
            .zones()
            .update_zone_ns_records(ACCOUNT_ID, "example.com", &input)
            .await
    )
    .data;
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.record_type == "NS" && r.name.is_empty()));

    let req = server.request().await;
    assert_eq!(req.method, "PUT");
    assert_eq!(req.target, "/v2/1010/zones/example.com/ns_records");
    assert_eq!(
        req.json(),
        serde_json::json!({"ns_names": ["ns1.example.com", "ns2.example.com"], "ns_set_ids": [1, 2]})
    );
}

// ============ Records ============

#[tokio::test]
async fn test_list_records() {
    let server = MockServer::serve("v2/zones/list_zone_records_success").await;
    let client = client_for(&server);

    let opts = ListOptions::new().filter("type", "MX").per_page(10);
    let records = require_ok!(
        client
            .zones()
            .list_records(ACCOUNT_ID, "example.com", &opts)
            .await
    )
    .data;
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].record_type, "SOA");
    assert!(records[0].system_record);
    assert_eq!(records[1].name, "www");
    assert_eq!(records[2].priority, Some(10));
    assert_eq!(records[2].regions, vec!["SV1".to_string(), "IAD".to_string()]);

    let req = server.request().await;
    assert_eq!(req.path(), "/v2/1010/zones/example.com/records");
    assert_eq!(req.query(), Some("per_page=10&type=MX"));
}

#[tokio::test]
async fn test_create_record() {
    let server = MockServer::serve("v2/zones/create_zone_record_success").await;
    let client = client_for(&server);

    let input = ZoneRecordInput::new("www", "A", "127.0.0.1").ttl(600);
    let response = require_ok!(
        client
            .zones()
            .create_record(ACCOUNT_ID, "example.com", &input)
            .await
    );
    assert_eq!(response.status, 201);
    assert_eq!(response.data.id, 64784);
    assert_eq!(response.data.zone_id, "example.com");

    let req = server.request().await;
    assert_eq!(req.method, "POST");
    assert_eq!(
        req.json(),
        serde_json::json!({"name": "www", "type": "A", "content": "127.0.0.1", "ttl": 600})
    );
}

#[tokio::test]
async fn test_create_apex_record_sends_empty_name() {
    let server = MockServer::serve("v2/zones/create_apex_zone_record_success").await;
    let client = client_for(&server);

    let input = ZoneRecordInput::new("", "MX", "mxa.example.com")
        .priority(10)
        .regions(vec!["SV1".to_string(), "IAD".to_string()]);
    let record = require_ok!(
        client
            .zones()
            .create_record(ACCOUNT_ID, "example.com", &input)
            .await
    )
    .data;
    assert_eq!(record.name, "");

    let body = server.request().await.json();
    assert_eq!(body["name"], "");
    assert_eq!(body["priority"], 10);
    assert_eq!(body["regions"], serde_json::json!(["SV1", "IAD"]));
    assert!(body.get("ttl").is_none());
}

#[tokio::test]
async fn test_get_record() {
    let server = MockServer::serve("v2/zones/get_zone_record_success").await;
    let client = client_for(&server);

    let record = require_ok!(
        client
            .zones()
            .get_record(ACCOUNT_ID, "example.com", 64785)
            .await
    )
    .data;
    assert_eq!(record.record_type, "MX");
    assert!(record.parent_id.is_none());

    assert_eq!(
        server.request().await.target,
        "/v2/1010/zones/example.com/records/64785"
    );
}

#[tokio::test]
async fn test_update_record_sends_only_changes() {
    let server = MockServer::serve("v2/zones/update_zone_record_success").await;
    let client = client_for(&server);

    let input = ZoneRecordUpdateInput {
        content: Some("mxb.example.com".to_string()),
        ttl: Some(3600),
        priority: Some(20),
        ..Default::default()
    };
    let record = require_ok!(
        client
            .zones()
            .update_record(ACCOUNT_ID, "example.com", 5, &input)
            .await
    )
    .data;
    assert_eq!(record.priority, Some(20));

    let req = server.request().await;
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.target, "/v2/1010/zones/example.com/records/5");
    assert_eq!(
        req.json(),
        serde_json::json!({"content": "mxb.example.com", "ttl": 3600, "priority": 20})
    );
}

#[tokio::test]
async fn test_delete_record() {
    let server = MockServer::serve("v2/zones/delete_zone_record_success").await;
    let client = client_for(&server);

    let response = require_ok!(
        client
            .zones()
            .delete_record(ACCOUNT_ID, "example.com", 5)
            .await
    );
    assert_eq!(response.status, 204);

    let req = server.request().await;
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.target, "/v2/1010/zones/example.com/records/5");
}

#[tokio::test]
async fn test_check_zone_record_distribution() {
    let server = MockServer::serve("v2/zones/check_zone_record_distribution_success").await;
    let client = client_for(&server);

    let distribution = require_ok!(
        client
            .zones()
            .check_zone_record_distribution(ACCOUNT_ID, "example.com", 5)
            .await
    )
    .data;
    assert!(distribution.distributed);

    assert_eq!(
        server.request().await.target,
        "/v2/1010/zones/example.com/records/5/distribution"
    );
}

// ============ Batch changes ============

#[tokio::test]
async fn test_batch_change_zone_records() {
    let server = MockServer::serve("v2/zones/batch_change_zone_records_success").await;
    let client = client_for(&server);

    let input = BatchChangeZoneRecordsInput {
        creates: Some(vec![
            ZoneRecordInput::new("ab", "A", "3.2.3.4"),
            ZoneRecordInput::new("", "A", "3.2.3.5"),
        ]),
        updates: Some(vec![BatchUpdateZoneRecord {
            id: 67_622_509,
            changes: ZoneRecordUpdateInput {
                content: Some("3.2.3.40".to_string()),
                ..Default::default()
            },
        }]),
        deletes: Some(vec![
            BatchDeleteZoneRecord { id: 67_622_511 },
            BatchDeleteZoneRecord { id: 67_622_512 },
        ]),
    };
    let result = require_ok!(
        client
            .zones()
            .batch_change_zone_records(ACCOUNT_ID, "bingo.pizza", &input)
            .await
    )
    .data;

    let creates = require_some!(result.creates);
    assert_eq!(creates.len(), 2);
    assert_eq!(creates[1].name, "");
    let updates = require_some!(result.updates);
    assert_eq!(updates[0].content, "3.2.3.40");
    let deletes = require_some!(result.deletes);
    assert_eq!(deletes, vec![
        BatchDeleteZoneRecord { id: 67_622_511 },
        BatchDeleteZoneRecord { id: 67_622_512 },
    ]);

    let req = server.request().await;
    assert_eq!(req.method, "POST");
    assert_eq!(req.target, "/v2/1010/zones/bingo.pizza/batch");
    assert_eq!(
        req.json(),
        serde_json::json!({
            "creates": [
                {"name": "ab", "type": "A", "content": "3.2.3.4"},
                {"name": "", "type": "A", "content": "3.2.3.5"}
            ],
            "updates": [{"id": 67_622_509, "content": "3.2.3.40"}],
            "deletes": [{"id": 67_622_511}, {"id": 67_622_512}]
        })
    );
}

#[tokio::test]
async fn test_batch_change_validation_error() {
    let server = MockServer::serve("v2/zones/batch_change_zone_records_validation_error").await;
    let client = client_for(&server);

    let input = BatchChangeZoneRecordsInput {
        creates: Some(vec![ZoneRecordInput::new("", "A", "")]),
        ..Default::default()
    };
    let err = require_some!(
        client
            .zones()
            .batch_change_zone_records(ACCOUNT_ID, "bingo.pizza", &input)
            .await
            .err()
    );
    assert_eq!(err.status(), Some(400));
    let errors = require_some!(err.attribute_errors());
    assert_eq!(
        errors.get("creates"),
        Some(&vec!["Record 1: Content can't be blank".to_string()])
    );

    let body = server.request().await.json();
    assert!(body.get("updates").is_none());
    assert!(body.get("deletes").is_none());
}
