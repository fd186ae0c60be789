//! Range and midrange

use formula_core::{max, min, Numeric};

/// Difference between the largest and smallest value
///
/// Returns `None` for an empty sample.
pub fn range<T: Numeric>(data: &[T]) -> Option<f64> {
    Some(max(data)? - min(data)?)
}

/// Midpoint of the smallest and largest value
///
/// Returns `None` for an empty sample.
pub fn midrange<T: Numeric>(data: &[T]) -> Option<f64> {
    Some((max(data)? + min(data)?) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        let cases: [(&[i32], f64); 6] = [
            (&[1, 1, 1], 0.0),
            (&[1, 2, 1], 1.0),
            (&[8, 4, 3], 5.0),
            (&[13, 18, 13, 14, 13, 16, 14, 21, 13], 8.0),
            (&[1, 2, 4, 7], 6.0),
            (&[12, 14, 16, 20, 24, 28, 28, 30, 32, 40], 28.0),
        ];
        for (data, expected) in cases {
            assert_eq!(range(data), Some(expected));
        }
    }

    #[test]
    fn test_midrange() {
        let cases: [(&[i32], f64); 5] = [
            (&[1, 1, 1], 1.0),
            (&[1, 1, 2], 1.5),
            (&[8, 4, 3], 5.5),
            (&[13, 18, 13, 14, 13, 16, 14, 21, 13], 17.0),
            (&[6, 7, 8, 10, 12, 14, 14, 15, 16, 20], 13.0),
        ];
        for (data, expected) in cases {
            assert_eq!(midrange(data), Some(expected));
        }
    }

    #[test]
    fn test_empty_has_no_value() {
        assert_eq!(range::<f64>(&[]), None);
        assert_eq!(midrange::<f64>(&[]), None);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(range(&[-3.5, -1.0]), Some(2.5));
        assert_eq!(midrange(&[-3.0, 1.0]), Some(-1.0));
    }
}
