//! Quality indicators over a non-dominated set.
//!
//! Pure, read-only functions: the engine calls them at snapshot intervals,
//! and external reporting layers can call them on any point set.
//!
//! - [`hypervolume`]: area dominated by the front, bounded by a reference
//!   point. Higher is better.
//! - [`spacing`]: dispersion of nearest-neighbor gaps along the front.
//!   Lower means more uniform coverage.

use crate::nsga::ObjectivePair;

/// Margin applied to per-objective maxima when deriving a reference point.
const REFERENCE_SCALE: f64 = 1.2;
const REFERENCE_EPSILON: f64 = 1e-9;

/// Two-objective hypervolume (minimization) bounded by `reference`.
///
/// The reference point must be dominated by every candidate for the result
/// to reflect the whole front; points at or beyond it simply contribute
/// nothing.
///
/// # Algorithm
///
/// Sort by `f1` descending and sweep: each point claims a rectangle of
/// width `prev_f1 - f1` (skipped unless positive) and height
/// `max(r2 - f2, 0)`. Returns 0 for an empty front or a front entirely
/// outside the reference box.
///
/// # Example
///
/// ```
/// use u_moea::indicators::hypervolume;
///
/// let hv = hypervolume(&[[0.5, 0.5]], [1.0, 1.0]);
/// assert!((hv - 0.25).abs() < 1e-12);
/// ```
pub fn hypervolume(front: &[ObjectivePair], reference: [f64; 2]) -> f64 {
    let mut sorted: Vec<ObjectivePair> = front.to_vec();
    sorted.sort_by(|a, b| b[0].partial_cmp(&a[0]).unwrap_or(std::cmp::Ordering::Equal));

    let mut hv = 0.0;
    let mut prev_f1 = reference[0];
    for [f1, f2] in sorted {
        let width = prev_f1 - f1;
        if width > 0.0 {
            hv += width * (reference[1] - f2).max(0.0);
            prev_f1 = f1;
        }
    }
    hv
}

/// Spacing indicator: sample standard deviation of nearest-neighbor
/// Manhattan distances among front members.
///
/// Uses the n−1 denominator. Fronts of two or fewer points have no
/// dispersion to measure and return 0.
pub fn spacing(front: &[ObjectivePair]) -> f64 {
    let n = front.len();
    if n <= 1 {
        return 0.0;
    }

    let mut nearest = Vec::with_capacity(n);
    for (i, a) in front.iter().enumerate() {
        let mut min_dist = f64::INFINITY;
        for (j, b) in front.iter().enumerate() {
            if i == j {
                continue;
            }
            let dist = (a[0] - b[0]).abs() + (a[1] - b[1]).abs();
            if dist < min_dist {
                min_dist = dist;
            }
        }
        nearest.push(min_dist);
    }

    let mean = nearest.iter().sum::<f64>() / nearest.len() as f64;
    if nearest.len() < 2 {
        return 0.0;
    }
    let variance = nearest
        .iter()
        .map(|d| (d - mean).powi(2))
        .sum::<f64>()
        / (nearest.len() - 1) as f64;
    variance.sqrt()
}

/// Derives a hypervolume reference point from a front: per-objective
/// maxima scaled by 1.2 plus a small epsilon. With positive maxima (the
/// ZDT ranges used here) every front member strictly dominates the result.
///
/// Falls back to `(1, 1)` scaled the same way for an empty front.
pub fn derived_reference(front: &[ObjectivePair]) -> [f64; 2] {
    let mut max = [1.0f64, 1.0f64];
    if !front.is_empty() {
        for axis in 0..2 {
            max[axis] = front
                .iter()
                .map(|p| p[axis])
                .fold(f64::NEG_INFINITY, f64::max);
        }
    }
    [
        max[0] * REFERENCE_SCALE + REFERENCE_EPSILON,
        max[1] * REFERENCE_SCALE + REFERENCE_EPSILON,
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // ---- Hypervolume ----

    #[test]
    fn test_hypervolume_empty_front_is_zero() {
        assert_eq!(hypervolume(&[], [1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_hypervolume_singleton_rectangle() {
        // Single feasible point: (r1 - f1) * (r2 - f2)
        let hv = hypervolume(&[[0.2, 0.3]], [1.0, 1.0]);
        assert!((hv - 0.8 * 0.7).abs() < EPS, "got {hv}");
    }

    #[test]
    fn test_hypervolume_two_point_sweep_by_hand() {
        // Sweep: (0.5, 0.1) claims 0.5 * 0.9, then (0.2, 0.3) claims
        // 0.3 * 0.7, total 0.66.
        let hv = hypervolume(&[[0.2, 0.3], [0.5, 0.1]], [1.0, 1.0]);
        assert!((hv - 0.66).abs() < EPS, "got {hv}");
    }

    #[test]
    fn test_hypervolume_point_outside_box_contributes_nothing() {
        let inside = hypervolume(&[[0.2, 0.3]], [1.0, 1.0]);
        let with_outside = hypervolume(&[[0.2, 0.3], [1.5, 2.0]], [1.0, 1.0]);
        assert!((inside - with_outside).abs() < EPS);

        // Entirely outside: zero.
        assert_eq!(hypervolume(&[[2.0, 2.0]], [1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_hypervolume_dominating_point_never_decreases() {
        let base = [[0.4, 0.4], [0.6, 0.2]];
        let hv_base = hypervolume(&base, [1.0, 1.0]);

        // (0.3, 0.3) dominates (0.4, 0.4).
        let extended = [[0.4, 0.4], [0.6, 0.2], [0.3, 0.3]];
        let hv_ext = hypervolume(&extended, [1.0, 1.0]);
        assert!(
            hv_ext >= hv_base - EPS,
            "adding a dominating point shrank hv: {hv_base} -> {hv_ext}"
        );
    }

    #[test]
    fn test_hypervolume_duplicate_f1_counted_once() {
        let hv = hypervolume(&[[0.5, 0.2], [0.5, 0.2]], [1.0, 1.0]);
        assert!((hv - 0.5 * 0.8).abs() < EPS, "got {hv}");
    }

    // ---- Spacing ----

    #[test]
    fn test_spacing_degenerate_fronts() {
        assert_eq!(spacing(&[]), 0.0);
        assert_eq!(spacing(&[[0.3, 0.7]]), 0.0);
    }

    #[test]
    fn test_spacing_two_points_is_zero() {
        // Both nearest distances equal each other, so deviation is zero.
        let sp = spacing(&[[0.0, 1.0], [1.0, 0.0]]);
        assert!(sp.abs() < EPS, "got {sp}");
    }

    #[test]
    fn test_spacing_equally_spaced_collinear_is_zero() {
        let sp = spacing(&[[0.0, 2.0], [1.0, 1.0], [2.0, 0.0]]);
        assert!(sp.abs() < EPS, "got {sp}");
    }

    #[test]
    fn test_spacing_uneven_front_is_positive() {
        let sp = spacing(&[[0.0, 1.0], [0.1, 0.9], [1.0, 0.0]]);
        assert!(sp > 0.0, "got {sp}");
    }

    #[test]
    fn test_spacing_prefers_uniform_fronts() {
        let uniform = spacing(&[[0.0, 3.0], [1.0, 2.0], [2.0, 1.0], [3.0, 0.0]]);
        let clumped = spacing(&[[0.0, 3.0], [0.05, 2.95], [0.1, 2.9], [3.0, 0.0]]);
        assert!(uniform < clumped, "uniform {uniform} !< clumped {clumped}");
    }

    // ---- Reference derivation ----

    #[test]
    fn test_derived_reference_scales_maxima() {
        let reference = derived_reference(&[[0.5, 1.0], [1.0, 0.2]]);
        assert!((reference[0] - (1.0 * 1.2 + 1e-9)).abs() < EPS);
        assert!((reference[1] - (1.0 * 1.2 + 1e-9)).abs() < EPS);
    }

    #[test]
    fn test_derived_reference_is_dominated_by_front() {
        let front = [[0.1, 0.8], [0.4, 0.4], [0.9, 0.05]];
        let reference = derived_reference(&front);
        for p in &front {
            assert!(p[0] < reference[0] && p[1] < reference[1]);
        }
    }

    #[test]
    fn test_derived_reference_empty_front_fallback() {
        let reference = derived_reference(&[]);
        assert!((reference[0] - (1.2 + 1e-9)).abs() < EPS);
        assert!((reference[1] - (1.2 + 1e-9)).abs() < EPS);
    }
}
