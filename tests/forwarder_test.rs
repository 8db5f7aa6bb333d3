//! Collector forwarding against a mock HTTP server.

use billscrape::{BillRecord, forward_records};

mod common;
use common::sample_record;

#[tokio::test]
async fn forwards_each_successful_record() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bills")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;

    let records = vec![sample_record(1), sample_record(2)];
    let forwarded = forward_records(&server.url(), &records).await.unwrap();

    assert_eq!(forwarded, 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn failure_records_are_not_forwarded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bills")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let records = vec![
        BillRecord::failure("https://bills.parliament.nz/v/9/broken", "nav timeout"),
        sample_record(1),
    ];
    let forwarded = forward_records(&server.url(), &records).await.unwrap();

    assert_eq!(forwarded, 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn stop_signal_ends_forwarding_early() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bills")
        .with_status(200)
        .with_body(r#"{"continue": false}"#)
        .expect(1)
        .create_async()
        .await;

    let records = vec![sample_record(1), sample_record(2), sample_record(3)];
    let forwarded = forward_records(&server.url(), &records).await.unwrap();

    assert_eq!(forwarded, 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn rejected_record_is_skipped_not_fatal() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bills")
        .with_status(500)
        .expect(2)
        .create_async()
        .await;

    let records = vec![sample_record(1), sample_record(2)];
    let forwarded = forward_records(&server.url(), &records).await.unwrap();

    assert_eq!(forwarded, 0);
    mock.assert_async().await;
}
