use super::TLBR;
use crate::common::*;

/// The generic axis-aligned rectangle.
pub trait Rect {
    type Type;

    fn t(&self) -> Self::Type;
    fn l(&self) -> Self::Type;
    fn b(&self) -> Self::Type;
    fn r(&self) -> Self::Type;
    fn h(&self) -> Self::Type;
    fn w(&self) -> Self::Type;

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;

    fn try_from_tlhw(tlhw: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;
}

pub trait RectNum: Rect
where
    Self::Type: Num + PartialOrd,
{
    /// Build a rectangle from TLBR values.
    ///
    /// It panics if `b < t` or `r < l`.
    fn from_tlbr(tlbr: [Self::Type; 4]) -> Self
    where
        Self: Sized,
    {
        Self::try_from_tlbr(tlbr).unwrap()
    }

    fn from_tlhw(tlhw: [Self::Type; 4]) -> Self
    where
        Self: Sized,
    {
        Self::try_from_tlhw(tlhw).unwrap()
    }

    fn tlbr(&self) -> [Self::Type; 4] {
        [self.t(), self.l(), self.b(), self.r()]
    }

    fn tlhw(&self) -> [Self::Type; 4] {
        [self.t(), self.l(), self.h(), self.w()]
    }

    fn hw(&self) -> [Self::Type; 2] {
        [self.h(), self.w()]
    }

    /// Check whether both height and width are positive.
    fn is_non_empty(&self) -> bool {
        let zero = Self::Type::zero();
        self.h() > zero && self.w() > zero
    }

    /// Compute the overlapping region of two rectangles in TLBR format.
    ///
    /// It returns `None` if the rectangles do not overlap.
    fn intersect_with<R>(&self, other: &R) -> Option<TLBR<Self::Type>>
    where
        R: Rect<Type = Self::Type>,
    {
        let max = |a: Self::Type, b: Self::Type| if a >= b { a } else { b };
        let min = |a: Self::Type, b: Self::Type| if a <= b { a } else { b };

        let t = max(self.t(), other.t());
        let l = max(self.l(), other.l());
        let b = min(self.b(), other.b());
        let r = min(self.r(), other.r());
        (b > t && r > l).then(|| TLBR { t, l, b, r })
    }
}

impl<T> RectNum for T
where
    T: Rect,
    T::Type: Num + PartialOrd,
{
}
