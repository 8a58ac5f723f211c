use crate::common::*;

/// Size in height and width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HW<T> {
    h: T,
    w: T,
}

impl<T> HW<T>
where
    T: Num + PartialOrd + Copy,
{
    pub fn try_from_hw(hw: [T; 2]) -> Result<Self> {
        let [h, w] = hw;
        let zero = T::zero();
        ensure!(
            h >= zero && w >= zero,
            "height and width parameters must be non-negative"
        );
        Ok(Self { h, w })
    }

    pub fn from_hw(hw: [T; 2]) -> Self {
        Self::try_from_hw(hw).unwrap()
    }

    /// Square size with equal height and width.
    pub fn square(side: T) -> Result<Self> {
        Self::try_from_hw([side, side])
    }

    pub fn h(&self) -> T {
        self.h
    }

    pub fn w(&self) -> T {
        self.w
    }

    pub fn hw(&self) -> [T; 2] {
        [self.h, self.w]
    }
}
