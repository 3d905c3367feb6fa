//! Choropleth legend bins

use crate::algorithm::map::layer::MapLayer;

/// Rounding step for a count of the given magnitude
fn granularity(value: f64) -> f64 {
    if value >= 1_000_000.0 {
        100_000.0
    } else if value >= 100_000.0 {
        10_000.0
    } else if value >= 10_000.0 {
        1_000.0
    } else {
        1.0
    }
}

fn round_down(value: f64) -> f64 {
    let step = granularity(value);
    (value / step).floor() * step
}

fn round_up(value: f64) -> f64 {
    let step = granularity(value);
    (value / step).ceil() * step
}

/// `count` evenly spaced values from `start` to `end` inclusive
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    let intervals = (count - 1) as f64;
    (0..count)
        .map(|i| {
            if i + 1 == count {
                end
            } else {
                start + (end - start) * i as f64 / intervals
            }
        })
        .collect()
}

/// Bin edges for drawing `values` on `layer`
///
/// Large-count layers get edges rounded outward to a readable step so the
/// legend shows round numbers; every other layer is split evenly between
/// the smallest and largest value. Non-finite values are ignored. Returns
/// `None` when there is no finite value or fewer than two edges are
/// requested.
#[must_use]
pub fn choropleth_bins(layer: MapLayer, values: &[f64], num_bins: usize) -> Option<Vec<f64>> {
    if num_bins < 2 {
        return None;
    }

    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;

    let (start, end) = if layer.uses_rounded_bins() {
        (round_down(min), round_up(max))
    } else {
        (min, max)
    };
    Some(linspace(start, end, num_bins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_bins_are_rounded() {
        let bins = choropleth_bins(MapLayer::Population, &[123_456.0, 2_345_678.0], 5).unwrap();
        assert_eq!(bins.len(), 5);
        assert_eq!(bins[0], 120_000.0);
        assert_eq!(bins[4], 2_400_000.0);
        assert!(bins.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_small_counts_cover_the_range() {
        let bins = choropleth_bins(MapLayer::HivCases, &[12.5, 9_999.5], 5).unwrap();
        assert_eq!(bins[0], 12.0);
        assert_eq!(bins[4], 10_000.0);
    }

    #[test]
    fn test_rate_bins_span_min_to_max() {
        let bins =
            choropleth_bins(MapLayer::TbTreatmentSuccess, &[60.0, f64::NAN, 90.0, 75.0], 4).unwrap();
        assert_eq!(bins, vec![60.0, 70.0, 80.0, 90.0]);
    }

    #[test]
    fn test_no_finite_values() {
        assert_eq!(choropleth_bins(MapLayer::Population, &[], 5), None);
        assert_eq!(choropleth_bins(MapLayer::Population, &[f64::NAN], 5), None);
        assert_eq!(choropleth_bins(MapLayer::Population, &[1.0, 2.0], 1), None);
    }
}
