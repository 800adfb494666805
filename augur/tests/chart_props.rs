use augur::{
    ActualPriceRecord, Augur, ChartQuery, DataQualityWarning, PredictionRecord, RangePreset,
};
use augur_core::compose;
use augur_mock::{DynamicMockSource, MockBehavior};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn day(offset: u16) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(u64::from(offset)))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn orchestrated_chart_matches_direct_composition(
        price_days in proptest::collection::btree_set(0u16..500, 1..80),
        pred_days in proptest::collection::btree_set(0u16..560, 1..80),
        reference in 0u16..500,
        preset_idx in 0usize..5,
    ) {
        let actuals: Vec<ActualPriceRecord> = price_days
            .iter()
            .map(|&o| ActualPriceRecord::on(day(o), 100.0 + f64::from(o)))
            .collect();
        let predictions: Vec<PredictionRecord> = pred_days
            .iter()
            .map(|&o| {
                PredictionRecord::new(day(o).to_string(), 99.0 + f64::from(o)).with_confidence(0.7)
            })
            .collect();
        let preset = RangePreset::ALL[preset_idx];
        let query = ChartQuery::new().reference(day(reference)).range(preset);

        let report = tokio_test::block_on(async {
            let (src, ctl) = DynamicMockSource::new_with_controller("P0");
            ctl.set_price_behavior("AAPL", MockBehavior::Return(actuals.clone())).await;
            ctl.set_prediction_behavior("AAPL", MockBehavior::Return(predictions.clone())).await;
            let augur = Augur::builder().with_source(src).build().unwrap();
            let resolved = augur.resolve(&query, chrono::Utc::now());
            let direct = compose("AAPL", &resolved, &actuals, &predictions);
            (augur.chart("AAPL", &query).await.unwrap(), direct)
        });
        let (orchestrated, direct) = report;

        prop_assert_eq!(&orchestrated, &direct);
        prop_assert!(
            !orchestrated
                .warnings
                .iter()
                .any(|w| matches!(w, DataQualityWarning::MissingSource { .. })),
            "unexpected MissingSource warning"
        );
        for w in orchestrated.points.windows(2) {
            prop_assert!(w[0].date < w[1].date);
        }
    }
}
