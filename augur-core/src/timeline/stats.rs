use augur_types::{AugurError, FieldSelector, PerformanceStats, TimelinePoint, Trend};

/// Summary statistics of `field` over `points`.
///
/// Only points where the field is present (and finite) contribute; absent
/// values are excluded from every statistic rather than counted as zero.
/// `trend` compares the first and last present value in date order.
///
/// # Errors
/// Returns `AugurError::InsufficientData` when no point carries the field.
pub fn aggregate(
    points: &[TimelinePoint],
    field: FieldSelector,
) -> Result<PerformanceStats, AugurError> {
    let mut values = points
        .iter()
        .filter_map(|p| field.read(p))
        .filter(|v| v.is_finite());

    let Some(first) = values.next() else {
        return Err(AugurError::insufficient(format!(
            "no {} values in window",
            field.as_str()
        )));
    };

    let (mut count, mut sum, mut min, mut max, mut last) = (1usize, first, first, first, first);
    for v in values {
        count += 1;
        sum += v;
        min = min.min(v);
        max = max.max(v);
        last = v;
    }

    let trend = if last > first {
        Trend::Up
    } else if last < first {
        Trend::Down
    } else {
        Trend::Flat
    };

    #[allow(clippy::cast_precision_loss)]
    let mean = sum / count as f64;

    Ok(PerformanceStats {
        count,
        mean,
        max,
        min,
        first,
        last,
        change: last - first,
        trend,
    })
}
