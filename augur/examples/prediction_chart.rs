use std::sync::Arc;
use std::time::Duration;

use augur::{Augur, ChartQuery, DataQualityWarning, RangePreset};
use augur_mock::MockSource;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,augur=trace,augur_core=debug (build with --features tracing)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();

    let augur = Augur::builder()
        .with_source(Arc::new(MockSource::new()))
        .default_range(RangePreset::ThreeMonths)
        .source_timeout(Duration::from_secs(2))
        .build()?;

    let range = std::env::args()
        .nth(1)
        .map(|s| s.parse::<RangePreset>())
        .transpose()?
        .unwrap_or_default();
    let query = ChartQuery::new()
        .reference(MockSource::reference_date())
        .range(range);

    for symbol in ["AAPL", "NEWCO", "BAD"] {
        let report = augur.chart(symbol, &query).await?;
        println!("== {symbol} ({range}) ==");
        println!(
            "points: {}  label every: {}",
            report.points.len(),
            report.label_interval.max(1)
        );
        match report.quality {
            Some(tier) => println!("forecast quality: {}", tier.label()),
            None => println!("forecast quality: --"),
        }
        match &report.price_stats {
            Some(s) => println!(
                "price: mean {:.2}  min {:.2}  max {:.2}  trend {:?}",
                s.mean, s.min, s.max, s.trend
            ),
            None => println!("price: --"),
        }
        if let Some(a) = &report.accuracy {
            println!("accuracy: {} graded, MAE {:.2}, RMSE {:.2}", a.samples, a.mae, a.rmse);
            for c in &a.coverage {
                if let Some(rate) = c.rate() {
                    println!("  {}% band covered {:.0}% of actuals", c.level, rate * 100.0);
                }
            }
        }
        for layer in &report.bands.layers {
            println!("  band {}%: {} samples", layer.level, layer.present().count());
        }
        for w in report.warnings.iter().filter(|w| w.is_defect()) {
            match w {
                DataQualityWarning::MissingSource { origin, error } => {
                    println!("  notice: {origin} unavailable ({error})");
                }
                other => println!("  notice: {other:?}"),
            }
        }
    }
    Ok(())
}
