use std::sync::Arc;
use std::time::Duration;

use augur::{
    ActualPriceRecord, Augur, AugurError, Capability, ChartQuery, DataQualityWarning,
    PredictionRecord,
};
use augur_mock::{DynamicMockSource, MockBehavior};
use chrono::NaiveDate;

fn query() -> ChartQuery {
    ChartQuery::new().reference(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
}

fn prices() -> Vec<ActualPriceRecord> {
    vec![
        ActualPriceRecord::new("2024-01-02", 10.0),
        ActualPriceRecord::new("2024-01-03", 11.0),
    ]
}

fn predictions() -> Vec<PredictionRecord> {
    vec![
        PredictionRecord::new("2024-01-03", 10.8).with_confidence(0.9),
        PredictionRecord::new("2024-01-04", 11.5)
            .with_confidence(0.7)
            .with_interval(90, 11.0, 12.0),
    ]
}

#[tokio::test]
async fn failing_primary_falls_back_to_secondary() {
    let (p0, c0) = DynamicMockSource::new_with_controller("P0");
    let (p1, c1) = DynamicMockSource::new_with_controller("P1");
    c0.set_price_behavior("AAPL", MockBehavior::Fail(AugurError::source("P0", "down")))
        .await;
    c0.set_prediction_behavior("AAPL", MockBehavior::Return(predictions()))
        .await;
    c1.set_price_behavior("AAPL", MockBehavior::Return(prices()))
        .await;

    let augur = Augur::builder()
        .with_source(p0)
        .with_source(p1)
        .build()
        .unwrap();
    let report = augur.chart("AAPL", &query()).await.unwrap();

    assert_eq!(report.points.len(), 3);
    assert!(report.warnings.is_empty());
    assert_eq!(c1.call_count(Capability::ActualPrices).await, 1);
    // Predictions were answered by P0, so P1 was never asked.
    assert_eq!(c1.call_count(Capability::Predictions).await, 0);
}

#[tokio::test]
async fn empty_answer_falls_through() {
    let (p0, c0) = DynamicMockSource::new_with_controller("P0");
    let (p1, c1) = DynamicMockSource::new_with_controller("P1");
    c0.set_price_behavior("AAPL", MockBehavior::Return(vec![])).await;
    c1.set_price_behavior("AAPL", MockBehavior::Return(prices())).await;

    let augur = Augur::builder()
        .with_source(p0)
        .with_source(p1)
        .build()
        .unwrap();
    assert_eq!(augur.actual_prices("AAPL").await.unwrap(), prices());

    c1.set_price_behavior("AAPL", MockBehavior::Return(vec![])).await;
    assert!(augur.actual_prices("AAPL").await.unwrap().is_empty());
}

#[tokio::test]
async fn symbol_preference_reorders_sources() {
    let (p0, c0) = DynamicMockSource::new_with_controller("P0");
    let (p1, c1) = DynamicMockSource::new_with_controller("P1");
    for c in [&c0, &c1] {
        c.set_price_behavior("AAPL", MockBehavior::Return(prices())).await;
        c.set_prediction_behavior("AAPL", MockBehavior::Return(predictions()))
            .await;
    }

    let augur = Augur::builder()
        .with_source(Arc::clone(&p0))
        .with_source(Arc::clone(&p1))
        .prefer_symbol("AAPL", &[Arc::clone(&p1)])
        .build()
        .unwrap();
    augur.chart("AAPL", &query()).await.unwrap();
    assert!(c0.calls().await.is_empty());
    assert_eq!(c1.calls().await.len(), 2);
}

#[tokio::test]
async fn single_feed_sources_are_combined() {
    let (prices_src, pc) =
        DynamicMockSource::with_capabilities("prices", &[Capability::ActualPrices]);
    let (preds_src, fc) =
        DynamicMockSource::with_capabilities("preds", &[Capability::Predictions]);
    pc.set_price_behavior("AAPL", MockBehavior::Return(prices())).await;
    fc.set_prediction_behavior("AAPL", MockBehavior::Return(predictions()))
        .await;

    let augur = Augur::builder()
        .with_source(prices_src)
        .with_source(preds_src)
        .build()
        .unwrap();
    let report = augur.chart("AAPL", &query()).await.unwrap();
    assert_eq!(report.points.len(), 3);
    assert!(report.accuracy.is_some());
    assert_eq!(pc.call_count(Capability::Predictions).await, 0);
}

#[tokio::test]
async fn no_capable_source_is_unsupported() {
    let (only_prices, pc) =
        DynamicMockSource::with_capabilities("prices", &[Capability::ActualPrices]);
    pc.set_price_behavior("AAPL", MockBehavior::Return(prices())).await;
    let augur = Augur::builder().with_source(only_prices).build().unwrap();

    let err = augur.predictions("AAPL").await.unwrap_err();
    assert!(matches!(err, AugurError::Unsupported { .. }));

    let report = augur.chart("AAPL", &query()).await.unwrap();
    assert!(matches!(
        report.warnings.first(),
        Some(DataQualityWarning::MissingSource {
            origin: Capability::Predictions,
            error: AugurError::Unsupported { .. },
        })
    ));
}

#[tokio::test(start_paused = true)]
async fn hanging_source_times_out_and_falls_back() {
    let (p0, c0) = DynamicMockSource::new_with_controller("P0");
    let (p1, c1) = DynamicMockSource::new_with_controller("P1");
    c0.set_price_behavior("AAPL", MockBehavior::Hang).await;
    c1.set_price_behavior("AAPL", MockBehavior::Return(prices())).await;

    let augur = Augur::builder()
        .with_source(p0)
        .with_source(p1)
        .source_timeout(Duration::from_millis(20))
        .build()
        .unwrap();
    assert_eq!(augur.actual_prices("AAPL").await.unwrap(), prices());

    c1.set_price_behavior("AAPL", MockBehavior::Hang).await;
    let err = augur.actual_prices("AAPL").await.unwrap_err();
    match err {
        AugurError::AllSourcesFailed(es) => {
            assert_eq!(es.len(), 2);
            assert!(es
                .iter()
                .all(|e| matches!(e, AugurError::SourceTimeout { .. })));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn foreign_errors_are_tagged_with_the_source() {
    let (p0, c0) = DynamicMockSource::new_with_controller("P0");
    c0.set_price_behavior(
        "AAPL",
        MockBehavior::Fail(AugurError::InvalidArg("bad ticker".into())),
    )
    .await;
    let augur = Augur::builder().with_source(p0).build().unwrap();
    match augur.actual_prices("AAPL").await.unwrap_err() {
        AugurError::Source { source_name, msg } => {
            assert_eq!(source_name, "P0");
            assert!(msg.contains("bad ticker"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}
