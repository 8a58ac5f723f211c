use super::{Rect, TLBR};
use crate::{common::*, RectNum, HW};

/// Per-axis scaling followed by a translation.
///
/// A point `(y, x)` maps to `(y * sy + ty, x * sx + tx)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transform<T> {
    pub sy: T,
    pub sx: T,
    pub ty: T,
    pub tx: T,
}

impl<T> Transform<T>
where
    T: Copy + Num + PartialOrd,
{
    /// The transform that maps `src` onto `tgt`.
    pub fn from_rects<R>(src: &R, tgt: &R) -> Self
    where
        R: Rect<Type = T>,
    {
        let sy = tgt.h() / src.h();
        let sx = tgt.w() / src.w();
        let ty = tgt.t() - src.t() * sy;
        let tx = tgt.l() - src.l() * sx;

        Self { sy, sx, ty, tx }
    }

    /// The transform that moves the origin to the corner of `crop` and
    /// stretches the crop to `tgt_size`.
    pub fn from_crop(crop: &TLBR<T>, tgt_size: &HW<T>) -> Self {
        let tgt = TLBR::from_tlhw([T::zero(), T::zero(), tgt_size.h(), tgt_size.w()]);
        Self::from_rects(crop, &tgt)
    }

    /// Scale-only transform with the same ratios as [from_crop](Self::from_crop).
    pub fn scale_of_crop(crop: &TLBR<T>, tgt_size: &HW<T>) -> Self {
        Self {
            sy: tgt_size.h() / crop.h(),
            sx: tgt_size.w() / crop.w(),
            ty: T::zero(),
            tx: T::zero(),
        }
    }
}

impl<T> Transform<T>
where
    T: Copy + Num,
{
    pub fn apply_yx(&self, yx: [T; 2]) -> [T; 2] {
        let [y, x] = yx;
        [y * self.sy + self.ty, x * self.sx + self.tx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn transform_crop() {
        let crop = TLBR::try_from_xyxy([10.0, 10.0, 110.0, 110.0]).unwrap();
        let size = HW::from_hw([112.0, 112.0]);
        let transform = Transform::from_crop(&crop, &size);

        let [y, x] = transform.apply_yx([50.0, 50.0]);
        assert_abs_diff_eq!(y, 44.8, epsilon = 1e-9);
        assert_abs_diff_eq!(x, 44.8, epsilon = 1e-9);

        let [b, r] = transform.apply_yx([crop.b(), crop.r()]);
        assert_abs_diff_eq!(b, 112.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r, 112.0, epsilon = 1e-9);

        let scale = Transform::scale_of_crop(&crop, &size);
        assert_eq!(scale.tx, 0.0);
        assert_abs_diff_eq!(scale.sx, transform.sx);
    }

    #[test]
    fn transform_crop_non_square() {
        let crop = TLBR::try_from_xyxy([0.0, 20.0, 40.0, 40.0]).unwrap();
        let transform = Transform::from_crop(&crop, &HW::from_hw([80.0, 80.0]));
        assert_eq!(transform.apply_yx([20.0, 0.0]), [0.0, 0.0]);
        assert_eq!(transform.apply_yx([30.0, 20.0]), [40.0, 40.0]);
    }
}
