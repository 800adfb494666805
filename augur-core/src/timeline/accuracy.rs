use std::collections::BTreeMap;

use augur_types::{AccuracyReport, AugurError, LevelCoverage, TimelinePoint};

struct Graded<'a> {
    actual: f64,
    predicted: f64,
    // Last realized price before this point, graded or not.
    previous_actual: Option<f64>,
    point: &'a TimelinePoint,
}

/// Grade past predictions against realized prices.
///
/// Only points carrying both `actual` and `past_predicted` are graded.
/// Direction accuracy compares, for each graded point with an earlier realized
/// price in `points`, the sign of `predicted - previous actual` against
/// `actual - previous actual`. The previous actual need not be graded.
/// Band coverage counts, per level, how often the realized price fell inside
/// the interval among graded points that carried that level.
///
/// # Errors
/// Returns `AugurError::InsufficientData` when no point can be graded.
pub fn grade(points: &[TimelinePoint]) -> Result<AccuracyReport, AugurError> {
    let mut graded: Vec<Graded<'_>> = Vec::new();
    let mut previous_actual: Option<f64> = None;
    for p in points {
        match (p.actual, p.past_predicted) {
            (Some(actual), Some(predicted)) if actual.is_finite() && predicted.is_finite() => {
                graded.push(Graded {
                    actual,
                    predicted,
                    previous_actual,
                    point: p,
                });
            }
            _ => {}
        }
        if let Some(actual) = p.actual.filter(|a| a.is_finite()) {
            previous_actual = Some(actual);
        }
    }

    if graded.is_empty() {
        return Err(AugurError::insufficient("no graded predictions in window"));
    }

    #[allow(clippy::cast_precision_loss)]
    let n = graded.len() as f64;
    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut bias_sum = 0.0;
    let mut pct_sum = 0.0;
    let mut pct_count = 0usize;
    for g in &graded {
        let err = g.predicted - g.actual;
        abs_sum += err.abs();
        sq_sum += err * err;
        bias_sum += err;
        if g.actual != 0.0 {
            pct_sum += (err / g.actual).abs();
            pct_count += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let mape = (pct_count > 0).then(|| pct_sum / pct_count as f64 * 100.0);

    let mut moves = 0usize;
    let mut hits = 0usize;
    for g in &graded {
        if let Some(base) = g.previous_actual {
            moves += 1;
            if same_direction(g.predicted - base, g.actual - base) {
                hits += 1;
            }
        }
    }
    #[allow(clippy::cast_precision_loss)]
    let direction_hit_rate = (moves > 0).then(|| hits as f64 / moves as f64);

    let mut by_level: BTreeMap<u8, LevelCoverage> = BTreeMap::new();
    for g in &graded {
        for iv in g.point.intervals.as_deref().unwrap_or_default() {
            let entry = by_level.entry(iv.level).or_insert(LevelCoverage {
                level: iv.level,
                samples: 0,
                hits: 0,
            });
            entry.samples += 1;
            if iv.contains(g.actual) {
                entry.hits += 1;
            }
        }
    }

    Ok(AccuracyReport {
        samples: graded.len(),
        mae: abs_sum / n,
        rmse: (sq_sum / n).sqrt(),
        mape,
        bias: bias_sum / n,
        direction_hit_rate,
        coverage: by_level.into_values().collect(),
    })
}

fn same_direction(predicted_move: f64, actual_move: f64) -> bool {
    (predicted_move > 0.0 && actual_move > 0.0)
        || (predicted_move < 0.0 && actual_move < 0.0)
        || (predicted_move == 0.0 && actual_move == 0.0)
}
