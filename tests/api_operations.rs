//! Integration tests for the nine API operations
//!
//! Each test scripts the mock transport, drives an operation, and checks
//! both sides of the contract: the request descriptor that went out
//! (verb, path, query, body) and the typed payload that came back.

mod common;

use std::time::Duration;

use common::client_with_mock;
use pushy::{Error, SendOptions, TransportOptions};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::json;

#[tokio::test]
async fn send_posts_payload_and_yields_id() {
    let (client, transport) = client_with_mock();
    transport.push_response(
        200,
        json!({ "success": true, "id": "abc", "info": { "devices": 2, "failed": [] } }),
    );

    let result = client
        .send_notification(
            json!({ "message": "Hello World!" }),
            vec!["token1", "token2"],
            SendOptions {
                time_to_live: Some(30),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.id, "abc");
    assert_eq!(result.info.unwrap().devices, 2);

    let sent = &transport.requests()[0];
    assert_eq!(sent.request.method, Method::POST);
    assert_eq!(sent.request.url.path(), "/push");
    assert_eq!(sent.request.url.query(), Some("api_key=SECRETAPIKEY123"));

    let body = sent.request.body.as_ref().unwrap();
    assert_eq!(body["data"], json!({ "message": "Hello World!" }));
    assert_eq!(body["to"], json!(["token1", "token2"]));
    assert_eq!(body["time_to_live"], json!(30));
}

#[tokio::test]
async fn send_keeps_single_recipient_as_string() {
    let (client, transport) = client_with_mock();
    transport.push_response(200, json!({ "success": true, "id": "abc" }));

    client
        .send_notification(json!({ "message": "hi" }), "news", SendOptions::default())
        .await
        .unwrap();

    let body = transport.requests()[0].request.body.clone().unwrap();
    assert_eq!(body["to"], json!("news"));
}

#[tokio::test]
async fn send_reserved_fields_win_over_extra_options() {
    let (client, transport) = client_with_mock();
    transport.push_response(200, json!({ "success": true, "id": "abc" }));

    let mut options = SendOptions::default();
    options.extra.insert("data".to_string(), json!("clobbered"));
    options.extra.insert("to".to_string(), json!("clobbered"));
    options.extra.insert("priority".to_string(), json!("high"));

    client
        .send_notification(json!({ "message": "hi" }), "token1", options)
        .await
        .unwrap();

    let body = transport.requests()[0].request.body.clone().unwrap();
    assert_eq!(body["data"], json!({ "message": "hi" }));
    assert_eq!(body["to"], json!("token1"));
    assert_eq!(body["priority"], json!("high"));
}

#[tokio::test]
async fn notification_status_extracts_push_field() {
    let (client, transport) = client_with_mock();
    transport.push_response(
        200,
        json!({
            "push": {
                "date": 1712000000,
                "payload": { "message": "hi" },
                "expiration": 1714592000,
                "pending_devices": ["token1"]
            }
        }),
    );

    let status = client.notification_status("abc").await.unwrap();
    assert_eq!(status.date, 1712000000);
    assert_eq!(status.pending_devices, vec!["token1".to_string()]);

    let sent = &transport.requests()[0];
    assert_eq!(sent.request.method, Method::GET);
    assert_eq!(sent.request.url.path(), "/pushes/abc");
    assert!(sent.request.body.is_none());
}

#[tokio::test]
async fn delete_notification_is_a_bare_success_signal() {
    let (client, transport) = client_with_mock();
    transport.push_response(200, json!({ "success": true }));

    client.delete_notification("abc").await.unwrap();

    let sent = &transport.requests()[0];
    assert_eq!(sent.request.method, Method::DELETE);
    assert_eq!(sent.request.url.path(), "/pushes/abc");
}

#[tokio::test]
async fn device_info_returns_whole_body() {
    let (client, transport) = client_with_mock();
    transport.push_response(
        200,
        json!({
            "device": { "date": 1712000000, "platform": "android" },
            "presence": {
                "online": true,
                "last_active": { "date": 1712000100, "seconds_ago": 5 }
            },
            "pending_notifications": [],
            "subscriptions": ["news"]
        }),
    );

    let info = client.device_info("token1").await.unwrap();
    assert_eq!(info.device.platform, "android");
    assert!(info.presence.online);
    assert_eq!(info.subscriptions, vec!["news".to_string()]);

    assert_eq!(transport.requests()[0].request.url.path(), "/devices/token1");
}

#[tokio::test]
async fn device_presence_promotes_single_token_and_extracts_field() {
    let (client, transport) = client_with_mock();
    transport.push_response(
        200,
        json!({
            "presence": [
                { "id": "token1", "online": false, "last_active": 1712000000 }
            ]
        }),
    );

    let presence = client.device_presence("token1").await.unwrap();
    assert_eq!(presence.len(), 1);
    assert_eq!(presence[0].id, "token1");
    assert!(!presence[0].online);

    let sent = &transport.requests()[0];
    assert_eq!(sent.request.method, Method::POST);
    assert_eq!(sent.request.url.path(), "/devices/presence");
    assert_eq!(
        sent.request.body.clone().unwrap(),
        json!({ "tokens": ["token1"] })
    );
}

#[tokio::test]
async fn topics_extracts_topic_list() {
    let (client, transport) = client_with_mock();
    transport.push_response(
        200,
        json!({ "topics": [ { "name": "news", "subscribers": 3 } ] }),
    );

    let topics = client.topics().await.unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].name, "news");
    assert_eq!(topics[0].subscribers, 3);

    assert_eq!(transport.requests()[0].request.url.path(), "/topics/");
}

#[tokio::test]
async fn subscribers_extracts_token_list() {
    let (client, transport) = client_with_mock();
    transport.push_response(200, json!({ "subscribers": ["token1", "token2"] }));

    let subscribers = client.subscribers("news").await.unwrap();
    assert_eq!(subscribers, vec!["token1".to_string(), "token2".to_string()]);

    assert_eq!(transport.requests()[0].request.url.path(), "/topics/news");
}

#[tokio::test]
async fn subscribe_posts_token_and_topic_list() {
    let (client, transport) = client_with_mock();
    transport.push_response(200, json!({ "success": true }));

    client
        .subscribe(vec!["news", "weather"], "TOKEN")
        .await
        .unwrap();

    let sent = &transport.requests()[0];
    assert_eq!(sent.request.method, Method::POST);
    assert_eq!(sent.request.url.path(), "/topics/subscribe/");
    assert_eq!(
        sent.request.body.clone().unwrap(),
        json!({ "token": "TOKEN", "topics": ["news", "weather"] })
    );
}

#[tokio::test]
async fn unsubscribe_promotes_single_topic() {
    let (client, transport) = client_with_mock();
    transport.push_response(200, json!({ "success": true }));

    client.unsubscribe("news", "TOKEN").await.unwrap();

    let sent = &transport.requests()[0];
    assert_eq!(sent.request.url.path(), "/topics/unsubscribe/");
    assert_eq!(
        sent.request.body.clone().unwrap(),
        json!({ "token": "TOKEN", "topics": ["news"] })
    );
}

#[tokio::test]
async fn enterprise_endpoint_redirects_subsequent_requests() {
    let (mut client, transport) = client_with_mock();
    transport.push_response(200, json!({ "topics": [] }));

    client.set_enterprise_endpoint("https://pushy.example.com");
    client.topics().await.unwrap();

    let sent = &transport.requests()[0];
    assert_eq!(sent.request.url.host_str(), Some("pushy.example.com"));
    assert_eq!(sent.request.url.path(), "/topics/");
}

#[tokio::test]
async fn transport_options_reach_the_backend_without_touching_the_request() {
    let (mut client, transport) = client_with_mock();
    transport.push_response(200, json!({ "topics": [] }));

    let mut headers = HeaderMap::new();
    headers.insert("x-proxy-tag", HeaderValue::from_static("edge-7"));
    client.set_transport_options(TransportOptions {
        timeout: Some(Duration::from_secs(5)),
        headers: Some(headers),
    });

    client.topics().await.unwrap();

    let sent = &transport.requests()[0];
    assert_eq!(sent.options.timeout, Some(Duration::from_secs(5)));
    assert_eq!(
        sent.options.headers.as_ref().unwrap()["x-proxy-tag"],
        "edge-7"
    );

    // The computed request is untouched by the extra options.
    assert_eq!(sent.request.method, Method::GET);
    assert_eq!(sent.request.url.path(), "/topics/");
    assert_eq!(sent.request.url.query(), Some("api_key=SECRETAPIKEY123"));
    assert!(sent.request.body.is_none());
}

#[tokio::test]
async fn malformed_payload_surfaces_as_decode_error() {
    let (client, transport) = client_with_mock();
    // `push` field missing entirely; the typed decode reports it.
    transport.push_response(200, json!({ "unexpected": true }));

    let result = client.notification_status("abc").await;
    assert!(matches!(result, Err(Error::ResponseDecode { .. })));
}
