use augur_core::ActualPriceRecord;

use super::{day, path};

/// Days of price history ending on the fixture reference day.
pub const AAPL_DAYS: u64 = 179;
pub const MSFT_DAYS: u64 = 40;

pub fn by_symbol(s: &str) -> Option<Vec<ActualPriceRecord>> {
    match s {
        "AAPL" => Some(series(180.0, AAPL_DAYS)),
        // Ends well before the reference day so trailing windows exclude it.
        "MSFT" => Some(series(400.0, MSFT_DAYS)),
        "BAD" => Some(vec![
            ActualPriceRecord::new("2024-01-02", 10.0),
            ActualPriceRecord::new("01/03/2024", 10.5),
            ActualPriceRecord::new("2024-01-04", f64::NAN),
            ActualPriceRecord::new("2024-01-05", 11.0),
            ActualPriceRecord::new("2024-01-05", 11.25),
            ActualPriceRecord::new("", 12.0),
        ]),
        _ => None,
    }
}

fn series(base: f64, days: u64) -> Vec<ActualPriceRecord> {
    (0..=days)
        .map(|i| ActualPriceRecord::on(day(i), path(base, i)))
        .collect()
}
