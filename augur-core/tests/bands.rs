use augur_core::{
    ConfidenceInterval, PredictionRecord, TimelinePoint, VisibleLevels, levels_present, merge,
    project,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn forecast_points() -> Vec<TimelinePoint> {
    let preds = vec![
        PredictionRecord::new("2024-01-03", 105.0)
            .with_interval(90, 100.0, 110.0)
            .with_interval(95, 98.0, 112.0)
            .with_interval(99, 95.0, 115.0),
        PredictionRecord::new("2024-01-04", 106.0).with_interval(90, 101.0, 111.0),
        PredictionRecord::new("2024-01-05", 107.0),
    ];
    merge(&[], &preds, d(2024, 1, 2)).points
}

#[test]
fn layers_follow_descending_level_and_align_with_points() {
    let pts = forecast_points();
    let layers = project(&pts, &VisibleLevels::default());
    assert_eq!(layers.levels().collect::<Vec<_>>(), vec![99, 95, 90]);

    let l90 = layers.get(90).unwrap();
    assert_eq!(l90.samples.len(), pts.len());
    assert_eq!(l90.samples[0].bounds, Some((100.0, 110.0)));
    assert_eq!(l90.samples[1].bounds, Some((101.0, 111.0)));
    assert_eq!(l90.samples[2].bounds, None);
    assert_eq!(l90.samples[2].date, d(2024, 1, 5));

    // 99% exists only on the first point; the rest are gaps, not extrapolations.
    let l99 = layers.get(99).unwrap();
    assert_eq!(l99.present().count(), 1);
    assert!(!l99.is_empty());
}

#[test]
fn unknown_level_yields_empty_layer() {
    let pts = forecast_points();
    let visible: VisibleLevels = [80u8, 90].into_iter().collect();
    let layers = project(&pts, &visible);
    assert_eq!(layers.levels().collect::<Vec<_>>(), vec![90, 80]);
    assert!(layers.get(80).unwrap().is_empty());
    assert!(layers.get(95).is_none());
}

#[test]
fn toggling_only_changes_emitted_layers() {
    let pts = forecast_points();
    let mut visible = VisibleLevels::default();
    let before = project(&pts, &visible);

    visible.toggle(95);
    let hidden = project(&pts, &visible);
    assert_eq!(hidden.levels().collect::<Vec<_>>(), vec![99, 90]);
    assert_eq!(hidden.get(90), before.get(90));

    visible.toggle(95);
    assert_eq!(project(&pts, &visible), before);
    assert!(project(&pts, &VisibleLevels::none()).layers.is_empty());
}

#[test]
fn levels_present_lists_data_levels() {
    let pts = forecast_points();
    assert_eq!(levels_present(&pts).into_iter().collect::<Vec<_>>(), vec![90, 95, 99]);
    assert!(levels_present(&[]).is_empty());
}

proptest! {
    #[test]
    fn ordering_ignores_request_order(levels in proptest::collection::vec(1u8..=99, 0..8)) {
        let mut p = TimelinePoint::empty(d(2024, 1, 3));
        p.future_predicted = Some(50.0);
        p.intervals = Some(vec![ConfidenceInterval::new(90, 40.0, 60.0)]);
        let pts = vec![p];

        let forward: VisibleLevels = levels.iter().copied().collect();
        let backward: VisibleLevels = levels.iter().rev().copied().collect();
        let a = project(&pts, &forward);
        let b = project(&pts, &backward);
        prop_assert_eq!(&a, &b);

        let emitted: Vec<u8> = a.levels().collect();
        for w in emitted.windows(2) {
            prop_assert!(w[0] > w[1]);
        }
        prop_assert_eq!(emitted.len(), forward.len());
    }
}
