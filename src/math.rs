//! Numeric helpers for sizes, points and snapping.
//!
//! Rounding here sends ties toward positive infinity (`-2.5` rounds to
//! `-2`), unlike [`f64::round`].

use std::f64::consts::PI;

/// Smallest step sizes are snapped to before comparing them.
pub const TINY_NUM: f64 = 0.0000001;

pub const REVERSE_TINY_NUM: f64 = 1.0 / TINY_NUM;

/// How [`calculate_bound_size`] keeps the aspect ratio of a size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum KeepRatio {
    /// Clamp each axis on its own.
    #[default]
    Free,
    /// Keep the ratio of the input size.
    Auto,
    /// Keep a fixed width / height ratio. `0` and `NaN` behave like `Free`.
    Ratio(f64),
}

impl KeepRatio {
    fn resolve(self, width: f64, height: f64) -> Option<f64> {
        match self {
            KeepRatio::Free => None,
            KeepRatio::Auto => Some(width / height),
            KeepRatio::Ratio(ratio) if ratio == 0.0 || ratio.is_nan() => None,
            KeepRatio::Ratio(ratio) => Some(ratio),
        }
    }
}

impl From<bool> for KeepRatio {
    fn from(keep: bool) -> Self {
        if keep { KeepRatio::Auto } else { KeepRatio::Free }
    }
}

impl From<f64> for KeepRatio {
    fn from(ratio: f64) -> Self {
        KeepRatio::Ratio(ratio)
    }
}

/// Rounds half toward positive infinity.
pub fn round(value: f64) -> f64 {
    let floor = value.floor();

    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Weighted split point of two values.
///
/// ```
/// use anim_utils::math::dot;
///
/// assert_eq!(dot(0.0, 15.0, 2.0, 3.0), 6.0);
/// assert_eq!(dot(5.0, 15.0, 1.0, 1.0), 10.0);
/// ```
pub fn dot(a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    (a1 * b2 + a2 * b1) / (b1 + b2)
}

/// Clamps `value` into `[min, max]`. `min` wins when the bounds cross.
pub fn between(value: f64, min: f64, max: f64) -> f64 {
    min.max(value.min(max))
}

/// Snaps `num` to a multiple of `unit`. A zero or `NaN` unit leaves it as is.
///
/// ```
/// use anim_utils::math::{throttle, TINY_NUM};
///
/// assert_eq!(throttle(167.997, 3.0), 168.0);
/// assert_eq!(throttle(167.997, TINY_NUM), 167.997);
/// ```
pub fn throttle(num: f64, unit: f64) -> f64 {
    if unit == 0.0 || unit.is_nan() {
        return num;
    }
    let reverse_unit = 1.0 / unit;

    round(num / unit) / reverse_unit
}

/// [`throttle`]s every number in place.
pub fn throttle_array(nums: &mut [f64], unit: f64) {
    for num in nums.iter_mut() {
        *num = throttle(*num, unit);
    }
}

pub fn sum(nums: &[f64]) -> f64 {
    nums.iter().rev().sum()
}

/// Mean of `nums`, or `0` when empty.
pub fn average(nums: &[f64]) -> f64 {
    if nums.is_empty() {
        0.0
    } else {
        sum(nums) / nums.len() as f64
    }
}

/// Angle from `pos1` to `pos2` in radians, in `[0, 2π)`.
pub fn get_rad(pos1: [f64; 2], pos2: [f64; 2]) -> f64 {
    let rad = (pos2[1] - pos1[1]).atan2(pos2[0] - pos1[0]);

    if rad >= 0.0 { rad } else { rad + PI * 2.0 }
}

pub fn get_center_point(points: &[[f64; 2]]) -> [f64; 2] {
    let xs: Vec<f64> = points.iter().map(|pos| pos[0]).collect();
    let ys: Vec<f64> = points.iter().map(|pos| pos[1]).collect();

    [average(&xs), average(&ys)]
}

/// Winding direction of a shape, judged from its first two points around
/// the center: `1` or `-1`. Returns `None` for fewer than two points.
pub fn get_shape_direction(points: &[[f64; 2]]) -> Option<i32> {
    let [first, second, ..] = points else {
        return None;
    };
    let center = get_center_point(points);
    let rad1 = get_rad(center, *first);
    let rad2 = get_rad(center, *second);

    let clockwise = (rad1 < rad2 && rad2 - rad1 < PI) || (rad1 > rad2 && rad2 - rad1 < -PI);
    Some(if clockwise { 1 } else { -1 })
}

/// Distance between `a` and `b`, or from the origin when `b` is `None`.
pub fn get_dist(a: [f64; 2], b: Option<[f64; 2]>) -> f64 {
    let [bx, by] = b.unwrap_or([0.0, 0.0]);

    ((bx - a[0]).powi(2) + (by - a[1]).powi(2)).sqrt()
}

/// `0..num` as a vector.
pub fn counter(num: usize) -> Vec<usize> {
    (0..num).collect()
}

/// Fits `compare_size` to `ratio` along one of its axes.
///
/// Tries the size with `compare_size`'s width first, then the one with its
/// height, and returns the first that stays within `compare_size` (at most
/// when `is_max`, at least otherwise). Falls back to `target_size`.
/// `ratio` defaults to the ratio of `target_size`.
pub fn check_bound_size(
    target_size: [f64; 2],
    compare_size: [f64; 2],
    is_max: bool,
    ratio: Option<f64>,
) -> [f64; 2] {
    let ratio = ratio.unwrap_or(target_size[0] / target_size[1]);
    let [compare_width, compare_height] = compare_size;
    let candidates = [
        [
            throttle(compare_width, TINY_NUM),
            throttle(compare_width / ratio, TINY_NUM),
        ],
        [
            throttle(compare_height * ratio, TINY_NUM),
            throttle(compare_height, TINY_NUM),
        ],
    ];

    candidates
        .into_iter()
        .find(|size| {
            size.iter().zip(compare_size).all(|(&value, default_size)| {
                let throttled_size = throttle(default_size, TINY_NUM);

                if is_max {
                    value <= default_size || value <= throttled_size
                } else {
                    value >= default_size || value >= throttled_size
                }
            })
        })
        .unwrap_or(target_size)
}

/// Clamps `size` between `min_size` and `max_size`.
///
/// With a kept ratio the size snaps to the ratio-preserving minimum or
/// maximum when either axis falls outside the bounds.
///
/// ```
/// use anim_utils::math::{calculate_bound_size, KeepRatio};
///
/// assert_eq!(
///     calculate_bound_size([100.0, 100.0], [0.0, 0.0], [100.0, 50.0], KeepRatio::Free),
///     [100.0, 50.0]
/// );
/// assert_eq!(
///     calculate_bound_size([100.0, 100.0], [0.0, 0.0], [100.0, 50.0], KeepRatio::Auto),
///     [50.0, 50.0]
/// );
/// ```
pub fn calculate_bound_size(
    size: [f64; 2],
    min_size: [f64; 2],
    max_size: [f64; 2],
    keep_ratio: KeepRatio,
) -> [f64; 2] {
    let [width, height] = size;
    let Some(ratio) = keep_ratio.resolve(width, height) else {
        return [
            between(width, min_size[0], max_size[0]),
            between(height, min_size[1], max_size[1]),
        ];
    };

    let [min_width, min_height] = check_bound_size(size, min_size, false, Some(ratio));
    let [max_width, max_height] = check_bound_size(size, max_size, true, Some(ratio));

    if width < min_width || height < min_height {
        [min_width, min_height]
    } else if width > max_width || height > max_height {
        [max_width, max_height]
    } else {
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -2.0);
        assert_eq!(round(-2.6), -3.0);
        assert_eq!(round(0.49999999999999994), 0.0);
    }

    #[test]
    fn test_throttle() {
        assert_eq!(throttle(167.997, TINY_NUM), 167.997);
        assert_eq!(throttle(167.997, 3.0), 168.0);
        assert_eq!(throttle(167.997, 0.003), 167.997);
        assert_eq!(throttle(1.234, 0.0), 1.234);
    }

    #[test]
    fn test_throttle_array() {
        let mut nums = [1.2, 2.6, -0.5];
        throttle_array(&mut nums, 1.0);
        assert_eq!(nums, [1.0, 3.0, 0.0]);
    }

    #[test]
    fn test_between() {
        assert_eq!(between(5.0, 0.0, 10.0), 5.0);
        assert_eq!(between(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(between(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(0.0, 15.0, 2.0, 3.0), 6.0);
        assert_eq!(dot(5.0, 15.0, 2.0, 3.0), 9.0);
        assert_eq!(dot(5.0, 15.0, 1.0, 1.0), 10.0);
    }

    #[test]
    fn test_sum_average() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(average(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_rad_and_dist() {
        assert_eq!(get_rad([0.0, 0.0], [1.0, 0.0]), 0.0);
        assert_eq!(get_rad([0.0, 0.0], [0.0, -1.0]), PI * 1.5);
        assert_eq!(get_dist([3.0, 4.0], None), 5.0);
        assert_eq!(get_dist([1.0, 1.0], Some([4.0, 5.0])), 5.0);
    }

    #[test]
    fn test_center_and_direction() {
        let square = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];
        assert_eq!(get_center_point(&square), [5.0, 5.0]);
        assert_eq!(get_shape_direction(&square), Some(1));

        let reversed = [[0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]];
        assert_eq!(get_shape_direction(&reversed), Some(-1));
        assert_eq!(get_shape_direction(&[[0.0, 0.0]]), None);
    }

    #[test]
    fn test_counter() {
        assert_eq!(counter(3), vec![0, 1, 2]);
        assert!(counter(0).is_empty());
    }

    #[test]
    fn test_check_bound_size() {
        let min_size = check_bound_size(
            [124.0, 101.8567474419186],
            [167.997, 137.997],
            false,
            Some(124.0 / 101.856747441918),
        );
        assert_eq!(min_size, [167.997, 137.997]);
    }

    #[test]
    fn test_calculate_bound_size() {
        let inf = f64::INFINITY;
        let cases = [
            ([100.0, 100.0], [0.0, 0.0], [100.0, 50.0], KeepRatio::Free, [100.0, 50.0]),
            ([-10.0, 100.0], [0.0, 0.0], [100.0, 50.0], KeepRatio::Free, [0.0, 50.0]),
            ([100.0, 100.0], [0.0, 0.0], [100.0, 50.0], KeepRatio::Auto, [50.0, 50.0]),
            ([100.0, 100.0], [50.0, 40.0], [100.0, 50.0], KeepRatio::Auto, [50.0, 50.0]),
            ([40.0, 100.0], [50.0, 40.0], [inf, 150.0], KeepRatio::Auto, [50.0, 125.0]),
            ([0.0, 0.0], [0.0, 0.0], [inf, inf], KeepRatio::Auto, [0.0, 0.0]),
            ([-1.0, -1.0], [0.0, 0.0], [inf, inf], KeepRatio::Auto, [0.0, 0.0]),
            (
                [124.0, 101.8567474419186],
                [167.997, 137.997],
                [inf, inf],
                KeepRatio::Ratio(124.0 / 101.8567474419186),
                [167.997, 137.997],
            ),
        ];

        for (size, min_size, max_size, keep_ratio, expected) in cases {
            assert_eq!(
                calculate_bound_size(size, min_size, max_size, keep_ratio),
                expected,
                "{:?} in {:?}..{:?} ({:?})",
                size,
                min_size,
                max_size,
                keep_ratio
            );
        }
    }

    #[test]
    fn test_keep_ratio_conversions() {
        assert_eq!(KeepRatio::from(true), KeepRatio::Auto);
        assert_eq!(KeepRatio::from(false), KeepRatio::Free);
        assert_eq!(KeepRatio::Ratio(0.0).resolve(1.0, 2.0), None);
    }
}
