//! Numeric input trait
//!
//! Samples may be given as any primitive numeric type (`i32`, `u64`, `f32`,
//! `f64`, ...). Every formula works in `f64`, so the only requirement on an
//! element is that it can be widened to `f64`.

use num_traits::AsPrimitive;
use std::fmt::Debug;

/// A sample element that can take part in a statistical formula
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Widen to `f64`
    fn to_float(self) -> f64;
}

impl<T> Numeric for T
where
    T: AsPrimitive<f64> + PartialOrd + Debug + Send + Sync,
{
    #[inline]
    fn to_float(self) -> f64 {
        self.as_()
    }
}

/// Convert a sample to a vector of `f64`
pub fn to_floats<T: Numeric>(data: &[T]) -> Vec<f64> {
    data.iter().map(|&x| x.to_float()).collect()
}
