use super::Rect;
use crate::common::*;

/// Rectangle in TLBR format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TLBR<T> {
    pub(crate) t: T,
    pub(crate) l: T,
    pub(crate) b: T,
    pub(crate) r: T,
}

impl<T> TLBR<T> {
    pub fn try_cast<V>(self) -> Option<TLBR<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(TLBR {
            t: V::from(self.t)?,
            l: V::from(self.l)?,
            b: V::from(self.b)?,
            r: V::from(self.r)?,
        })
    }

    pub fn cast<V>(self) -> TLBR<V>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        self.try_cast().unwrap()
    }
}

impl<T> TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    /// Build a rectangle from `[x0, y0, x1, y1]` corner values, the order used by
    /// annotation files.
    pub fn try_from_xyxy(xyxy: [T; 4]) -> Result<Self> {
        let [x0, y0, x1, y1] = xyxy;
        Self::try_from_tlbr([y0, x0, y1, x1])
    }
}

impl<T> Rect for TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn t(&self) -> Self::Type {
        self.t
    }

    fn l(&self) -> Self::Type {
        self.l
    }

    fn b(&self) -> Self::Type {
        self.b
    }

    fn r(&self) -> Self::Type {
        self.r
    }

    fn h(&self) -> Self::Type {
        self.b - self.t
    }

    fn w(&self) -> Self::Type {
        self.r - self.l
    }

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self> {
        let [t, l, b, r] = tlbr;
        ensure!(b >= t && r >= l, "b >= t and r >= l must hold");

        Ok(Self { t, l, b, r })
    }

    fn try_from_tlhw(tlhw: [Self::Type; 4]) -> Result<Self> {
        let [t, l, h, w] = tlhw;
        let b = t + h;
        let r = l + w;
        Self::try_from_tlbr([t, l, b, r])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RectNum;

    #[test]
    fn tlbr_from_xyxy() {
        let rect = TLBR::try_from_xyxy([10, 20, 110, 70]).unwrap();
        assert_eq!(rect.tlbr(), [20, 10, 70, 110]);
        assert_eq!(rect.hw(), [50, 100]);
        assert_eq!(rect.cast::<f64>().tlbr(), [20.0, 10.0, 70.0, 110.0]);
    }

    #[test]
    fn tlbr_reject_flipped_corners() {
        assert!(TLBR::try_from_xyxy([10, 10, 5, 20]).is_err());
        assert!(TLBR::try_from_xyxy([10, 10, 20, 5]).is_err());
    }
}
