use num_traits::Float;

/// The rule to round rescaled landmark coordinates to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Ties go to the nearest even integer.
    HalfEven,
    /// Ties go away from zero.
    HalfAwayFromZero,
}

impl Default for RoundingMode {
    fn default() -> Self {
        Self::HalfEven
    }
}

impl RoundingMode {
    pub fn round<T>(self, value: T) -> T
    where
        T: Float,
    {
        match self {
            Self::HalfAwayFromZero => value.round(),
            Self::HalfEven => {
                let two = T::one() + T::one();
                let half = T::one() / two;
                if (value - value.trunc()).abs() == half {
                    (value / two).round() * two
                } else {
                    value.round()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_even() {
        let mode = RoundingMode::HalfEven;
        assert_eq!(mode.round(0.5), 0.0);
        assert_eq!(mode.round(1.5), 2.0);
        assert_eq!(mode.round(2.5), 2.0);
        assert_eq!(mode.round(-2.5), -2.0);
        assert_eq!(mode.round(44.8), 45.0);
        assert_eq!(mode.round(2.4f32), 2.0);
    }

    #[test]
    fn round_half_away_from_zero() {
        let mode = RoundingMode::HalfAwayFromZero;
        assert_eq!(mode.round(0.5), 1.0);
        assert_eq!(mode.round(2.5), 3.0);
        assert_eq!(mode.round(-2.5), -3.0);
    }
}
