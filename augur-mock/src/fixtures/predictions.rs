use augur_core::PredictionRecord;

use super::prices::{AAPL_DAYS, MSFT_DAYS};
use super::{day, path};

pub fn by_symbol(s: &str) -> Option<Vec<PredictionRecord>> {
    match s {
        "AAPL" => Some(aapl()),
        "MSFT" => Some(
            (MSFT_DAYS - 5..MSFT_DAYS + 10)
                .map(|i| {
                    PredictionRecord::new(day(i).to_string(), path(401.0, i)).with_confidence(0.9)
                })
                .collect(),
        ),
        // Forecast-only: no price history exists yet.
        "NEWCO" => Some(
            (AAPL_DAYS + 1..AAPL_DAYS + 11)
                .map(|i| {
                    let v = path(20.0, i);
                    PredictionRecord::new(day(i).to_string(), v)
                        .with_confidence(0.45)
                        .with_interval(90, v - 1.0, v + 1.0)
                })
                .collect(),
        ),
        "BAD" => Some(vec![
            PredictionRecord::new("2024-01-05T16:00:00Z", 11.1).with_confidence(0.7),
            PredictionRecord::new("tomorrow", 12.0),
            PredictionRecord::new("2024-01-06", 11.4)
                .with_confidence(f64::INFINITY)
                .with_interval(90, 11.5, 12.0)
                .with_interval(95, 13.0, 10.0),
        ]),
        _ => None,
    }
}

/// Thirty graded days ending on the reference day, then thirty forecast days
/// with bands that widen and confidence that decays.
fn aapl() -> Vec<PredictionRecord> {
    let graded = (AAPL_DAYS - 29..=AAPL_DAYS).map(|i| {
        let miss = ((i % 5) as f64 - 2.0) * 0.5;
        let v = path(180.0, i) + miss;
        banded(PredictionRecord::new(day(i).to_string(), v), v, 1.0).with_confidence(0.82)
    });
    let forecast = (AAPL_DAYS + 1..=AAPL_DAYS + 30).map(|i| {
        let ahead = (i - AAPL_DAYS) as f64;
        let v = path(180.0, i);
        banded(PredictionRecord::new(day(i).to_string(), v), v, 1.0 + ahead * 0.1)
            .with_confidence(0.85 - ahead * 0.005)
    });
    graded.chain(forecast).collect()
}

fn banded(rec: PredictionRecord, v: f64, spread: f64) -> PredictionRecord {
    rec.with_interval(90, v - 2.0 * spread, v + 2.0 * spread)
        .with_interval(95, v - 3.0 * spread, v + 3.0 * spread)
        .with_interval(99, v - 5.0 * spread, v + 5.0 * spread)
}
