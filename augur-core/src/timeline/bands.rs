use std::collections::BTreeSet;

use augur_types::{BandLayer, BandLayers, BandSample, TimelinePoint, VisibleLevels};

/// Project per-point confidence intervals into one layer per visible level.
///
/// Layers come back sorted by descending level (widest band first), which is
/// the order stacked semi-transparent fills must be drawn in. Each layer holds
/// one sample per point; a point without that level has `bounds: None` and is
/// never interpolated. A visible level absent from every point yields an empty
/// layer.
#[must_use]
pub fn project(points: &[TimelinePoint], visible: &VisibleLevels) -> BandLayers {
    let layers = visible
        .iter()
        .rev()
        .map(|level| BandLayer {
            level,
            samples: points
                .iter()
                .map(|p| BandSample {
                    date: p.date,
                    bounds: p.interval(level).map(|iv| (iv.lower, iv.upper)),
                })
                .collect(),
        })
        .collect();
    BandLayers { layers }
}

/// Levels that occur on at least one point, ascending.
#[must_use]
pub fn levels_present(points: &[TimelinePoint]) -> BTreeSet<u8> {
    points
        .iter()
        .filter_map(|p| p.intervals.as_deref())
        .flatten()
        .map(|iv| iv.level)
        .collect()
}
