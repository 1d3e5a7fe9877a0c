//! Bounded - macro for range-constrained style values
//!
//! Config values arrive from the host as loose numbers; these types clamp
//! them once at the boundary so the frame math never sees an opacity of 3.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Opacity, 0.0, 1.0);
/// let o = Opacity::new(0.5);
/// let o2 = o * 4.0;  // Opacity(1.0) - clamped to max
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            /// Const constructor for literals; out-of-range values fail at compile time.
            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            /// NaN collapses to MIN.
            pub fn clamped(value: f32) -> Self {
                if value.is_nan() {
                    return Self(Self::MIN);
                }
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f32 {
                self.0
            }

            pub fn contains(value: f32) -> bool {
                (Self::MIN..=Self::MAX).contains(&value)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self::Output {
                Self::clamped(self.0 * rhs)
            }
        }
    };
}

pub(crate) use bounded_f32;

#[cfg(test)]
mod tests {
    use super::*;

    bounded_f32!(TestStrength, 0.0, 1.0);
    bounded_f32!(TestZoom, 0.5, 2.0);

    const HALF: TestStrength = TestStrength::new(0.5);

    #[test]
    fn const_literal_keeps_value() {
        assert_eq!(HALF.value(), 0.5);
    }

    #[test]
    fn clamped_pins_to_bounds() {
        assert_eq!(TestZoom::clamped(9.0).value(), 2.0);
        assert_eq!(TestZoom::clamped(0.1).value(), 0.5);
    }

    #[test]
    fn nan_collapses_to_min() {
        assert_eq!(TestZoom::clamped(f32::NAN).value(), 0.5);
    }

    #[test]
    fn multiply_saturates() {
        assert_eq!((HALF * 4.0).value(), 1.0);
        assert_eq!((HALF * -1.0).value(), 0.0);
    }

    #[test]
    fn contains_is_inclusive() {
        assert!(TestStrength::contains(0.0));
        assert!(TestStrength::contains(1.0));
        assert!(!TestStrength::contains(1.01));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn rejects_out_of_range_literal() {
        let _ = TestZoom::new(3.0);
    }
}
