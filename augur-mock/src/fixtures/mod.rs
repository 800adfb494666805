pub mod predictions;
pub mod prices;

use chrono::{Days, NaiveDate};

/// Day the fixture feeds treat as "today": the last AAPL close.
pub fn reference() -> NaiveDate {
    day(prices::AAPL_DAYS)
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid fixture date")
}

pub fn day(offset: u64) -> NaiveDate {
    start()
        .checked_add_days(Days::new(offset))
        .expect("fixture date in range")
}

/// Deterministic price path: slow drift plus a saw-tooth wobble.
pub fn path(base: f64, offset: u64) -> f64 {
    let wobble = (offset % 17) as f64 * 0.75;
    let drift = offset as f64 * 0.1;
    ((base + wobble + drift) * 100.0).round() / 100.0
}
