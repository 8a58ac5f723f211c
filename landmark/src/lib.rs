//! Facial landmark point sets.

pub use rounding::*;
mod rounding;

use anyhow::{ensure, Result};
use bbox::Transform;
use num_traits::{Float, Num, NumCast, ToPrimitive};
use std::ops::Mul;

/// A set of 2-D landmark points stored as a flat `[x0, y0, x1, y1, ...]` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmarks<T> {
    coords: Vec<T>,
}

impl<T> Landmarks<T> {
    /// Build landmarks from a flat coordinate list. The list length must be even.
    pub fn try_from_flat(coords: Vec<T>) -> Result<Self> {
        ensure!(
            coords.len() % 2 == 0,
            "expect an even number of landmark coordinates, but get {}",
            coords.len()
        );
        Ok(Self { coords })
    }

    pub fn num_points(&self) -> usize {
        self.coords.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn as_flat(&self) -> &[T] {
        &self.coords
    }

    pub fn into_flat(self) -> Vec<T> {
        self.coords
    }

    /// Iterate over points in `[x, y]` order.
    pub fn points(&self) -> impl Iterator<Item = [T; 2]> + '_
    where
        T: Copy,
    {
        self.coords.chunks_exact(2).map(|xy| [xy[0], xy[1]])
    }

    pub fn try_cast<V>(self) -> Option<Landmarks<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        let coords: Option<Vec<_>> = self.coords.into_iter().map(V::from).collect();
        Some(Landmarks { coords: coords? })
    }

    pub fn cast<V>(self) -> Landmarks<V>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        self.try_cast().unwrap()
    }
}

impl<T> Landmarks<T>
where
    T: Copy + Num,
{
    pub fn transform(&self, transform: &Transform<T>) -> Self {
        let coords = self
            .points()
            .flat_map(|[x, y]| {
                let [y, x] = transform.apply_yx([y, x]);
                [x, y]
            })
            .collect();
        Self { coords }
    }
}

impl<T> Landmarks<T>
where
    T: Float,
{
    pub fn round(&self, mode: RoundingMode) -> Self {
        let coords = self.coords.iter().map(|&value| mode.round(value)).collect();
        Self { coords }
    }
}

impl<'a, T> Mul<&'a Landmarks<T>> for &'a Transform<T>
where
    T: Copy + Num,
{
    type Output = Landmarks<T>;

    fn mul(self, rhs: &'a Landmarks<T>) -> Self::Output {
        rhs.transform(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbox::{HW, TLBR};

    #[test]
    fn landmarks_odd_length() {
        assert!(Landmarks::try_from_flat(vec![1.0, 2.0, 3.0]).is_err());
        assert!(Landmarks::<f32>::try_from_flat(vec![]).unwrap().is_empty());
    }

    #[test]
    fn landmarks_points() {
        let landmarks = Landmarks::try_from_flat(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(landmarks.num_points(), 2);
        let points: Vec<_> = landmarks.points().collect();
        assert_eq!(points, vec![[1, 2], [3, 4]]);
    }

    #[test]
    fn landmarks_crop_and_scale() {
        let crop = TLBR::try_from_xyxy([10.0, 10.0, 110.0, 110.0]).unwrap();
        let transform = Transform::from_crop(&crop, &HW::from_hw([112.0, 112.0]));
        let landmarks =
            Landmarks::try_from_flat(vec![50.0, 50.0, 70.0, 50.0, 60.0, 90.0]).unwrap();
        let output = (&transform * &landmarks).round(RoundingMode::HalfEven);
        assert_eq!(output.as_flat(), &[45.0, 45.0, 67.0, 45.0, 56.0, 90.0]);
    }
}
