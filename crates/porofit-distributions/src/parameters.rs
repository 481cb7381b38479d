use arrayvec::ArrayVec;
use serde::Serialize;

/// Largest number of shape parameters of any supported family.
pub const MAX_SHAPES: usize = 2;

/// Shape, location and scale parameters of a distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameters {
    pub shapes: ArrayVec<f64, MAX_SHAPES>,
    pub loc: f64,
    pub scale: f64,
}

impl Parameters {
    /// # Panics
    ///
    /// Panics if more than [`MAX_SHAPES`] shapes are given.
    #[must_use]
    pub fn new(shapes: &[f64], loc: f64, scale: f64) -> Self {
        assert!(shapes.len() <= MAX_SHAPES, "too many shape parameters");
        Self {
            shapes: shapes.iter().copied().collect(),
            loc,
            scale,
        }
    }

    /// Unpacks a flat `[shapes.., loc, scale]` vector.
    #[must_use]
    pub fn from_flat(values: &[f64]) -> Self {
        let (shapes, loc_scale) = values.split_at(values.len() - 2);
        Self::new(shapes, loc_scale[0], loc_scale[1])
    }

    /// Packs the parameters as `[shapes.., loc, scale]`.
    #[must_use]
    pub fn to_flat(&self) -> Vec<f64> {
        let mut values = self.shapes.to_vec();
        values.extend([self.loc, self.scale]);
        values
    }

    /// Maps `x` onto the standard (`loc = 0`, `scale = 1`) coordinate.
    #[must_use]
    pub fn standardize(&self, x: f64) -> f64 {
        (x - self.loc) / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_layout() {
        let params = Parameters::new(&[2.0, 3.0], -1.0, 0.5);
        assert_eq!(params.to_flat(), vec![2.0, 3.0, -1.0, 0.5]);
        assert_eq!(Parameters::from_flat(&params.to_flat()), params);
        assert_eq!(Parameters::from_flat(&[4.0, 2.0]).shapes.len(), 0);
    }

    #[test]
    fn test_standardize() {
        let params = Parameters::new(&[], 10.0, 2.0);
        assert_eq!(params.standardize(14.0), 2.0);
    }
}
