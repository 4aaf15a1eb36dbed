//! End-to-end orchestration tests over scripted channels.

mod common;

use std::collections::BTreeSet;

use common::{MockChannel, Upload, page};
use restock::RestockError;
use restock::models::{CanonicalRecord, PageStrategy};
use restock::sync::{sync_channel, sync_channels};

fn feed() -> Vec<CanonicalRecord> {
    vec![
        CanonicalRecord::new("A", "5", "100.00"),
        CanonicalRecord::new("B", ">10", "200.50"),
    ]
}

#[tokio::test]
async fn full_channel_sync_pushes_stocks_then_prices() {
    let channel = MockChannel::new(
        PageStrategy::Cursor,
        vec![page(&["A", "B", "C"], None, None)],
    )
    .with_chunks(2, 2)
    .with_warehouse("wh-1");

    let report = sync_channel(&channel, &feed()).await.unwrap();

    // Stock entries cover the catalog exactly; prices stay sparse.
    assert_eq!(report.offers, 3);
    assert_eq!(report.stocks_pushed, 3);
    assert_eq!(report.stock_batches, 2);
    assert_eq!(report.prices_pushed, 2);
    assert_eq!(report.price_batches, 1);

    let uploads = channel.uploads.lock().unwrap();
    let first_price = uploads
        .iter()
        .position(|u| matches!(u, Upload::Price(_)))
        .unwrap();
    assert!(
        uploads[..first_price]
            .iter()
            .all(|u| matches!(u, Upload::Stock(_))),
        "every stock batch must precede the first price batch"
    );
    drop(uploads);

    let pushed_ids: BTreeSet<String> = channel
        .stock_batches()
        .iter()
        .flatten()
        .map(|entry| entry.offer_id.clone())
        .collect();
    let expected: BTreeSet<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    assert_eq!(pushed_ids, expected);
}

#[tokio::test]
async fn stock_quantities_follow_the_normalization_policy() {
    let channel = MockChannel::new(
        PageStrategy::Cursor,
        vec![page(&["A", "B", "C"], None, None)],
    );

    sync_channel(&channel, &feed()).await.unwrap();

    let entries: Vec<(String, u32)> = channel
        .stock_batches()
        .iter()
        .flatten()
        .map(|entry| (entry.offer_id.clone(), entry.quantity))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("A".to_string(), 5),
            ("B".to_string(), 100),
            ("C".to_string(), 0),
        ]
    );

    let prices: Vec<(String, u64)> = channel
        .price_batches()
        .iter()
        .flatten()
        .map(|entry| (entry.offer_id.clone(), entry.amount))
        .collect();
    assert_eq!(prices, vec![("A".to_string(), 100), ("B".to_string(), 200)]);
}

#[tokio::test]
async fn in_stock_report_excludes_zero_quantities() {
    let channel = MockChannel::new(
        PageStrategy::Cursor,
        vec![page(&["A", "B", "C"], None, None)],
    );

    let report = sync_channel(&channel, &feed()).await.unwrap();

    let in_stock: Vec<&str> = report
        .in_stock
        .iter()
        .map(|entry| entry.offer_id.as_str())
        .collect();
    assert_eq!(in_stock, vec!["A", "B"]);
}

#[tokio::test]
async fn stock_batch_sizes_respect_the_channel_bound() {
    let ids: Vec<String> = (0..7).map(|i| format!("sku-{i}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let channel =
        MockChannel::new(PageStrategy::Cursor, vec![page(&id_refs, None, None)])
            .with_chunks(3, 2);

    sync_channel(&channel, &[]).await.unwrap();

    let sizes: Vec<usize> = channel.stock_batches().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![3, 3, 1]);
}

#[tokio::test]
async fn failed_stock_batch_stops_the_channel_before_prices() {
    let channel = MockChannel::new(
        PageStrategy::Cursor,
        vec![page(&["A", "B", "C"], None, None)],
    )
    .with_chunks(1, 1)
    .fail_on_stock_batch(2);

    let err = sync_channel(&channel, &feed()).await.unwrap_err();

    assert!(matches!(err, RestockError::Connection(_)), "got {err:?}");
    // One stock batch accepted, nothing after the failure.
    assert_eq!(channel.stock_batches().len(), 1);
    assert!(channel.price_batches().is_empty());
}

#[tokio::test]
async fn failed_price_batch_keeps_accepted_stock_batches() {
    let channel = MockChannel::new(
        PageStrategy::Cursor,
        vec![page(&["A", "B"], None, None)],
    )
    .with_chunks(10, 1)
    .fail_on_price_batch(2);

    let err = sync_channel(&channel, &feed()).await.unwrap_err();

    assert!(matches!(err, RestockError::Connection(_)));
    assert_eq!(channel.stock_batches().len(), 1);
    assert_eq!(channel.price_batches().len(), 1, "first price batch stays accepted");
}

#[tokio::test]
async fn failing_channel_aborts_the_remaining_channels() {
    let failing = MockChannel::new(
        PageStrategy::Cursor,
        vec![Err(RestockError::Connection("down".to_string()))],
    )
    .with_label("first");
    let untouched = MockChannel::new(
        PageStrategy::Cursor,
        vec![page(&["A"], None, None)],
    )
    .with_label("second");

    let channels = vec![failing, untouched];
    let err = sync_channels(&channels, &feed()).await.unwrap_err();

    assert!(matches!(err, RestockError::Connection(_)));
    assert_eq!(channels[1].upload_count(), 0, "later channels must not start");
}

#[tokio::test]
async fn channels_are_processed_in_configured_order() {
    let first = MockChannel::new(
        PageStrategy::Cursor,
        vec![page(&["A"], None, None)],
    )
    .with_label("first");
    let second = MockChannel::new(
        PageStrategy::Total,
        vec![page(&["A", "B"], None, Some(2))],
    )
    .with_label("second");

    let channels = vec![first, second];
    let reports = sync_channels(&channels, &feed()).await.unwrap();

    let labels: Vec<&str> = reports.iter().map(|r| r.channel.as_str()).collect();
    assert_eq!(labels, vec!["first", "second"]);
    assert_eq!(reports[1].offers, 2);
}

#[tokio::test]
async fn empty_catalog_dispatches_nothing() {
    let channel = MockChannel::new(PageStrategy::Cursor, vec![page(&[], None, None)]);

    let report = sync_channel(&channel, &feed()).await.unwrap();

    assert_eq!(report.stocks_pushed, 0);
    assert_eq!(report.stock_batches, 0);
    assert_eq!(report.prices_pushed, 0);
    assert_eq!(channel.upload_count(), 0);
}
