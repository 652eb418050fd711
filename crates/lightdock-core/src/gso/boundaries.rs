use super::error::ConfigError;
use crate::core::utils::random::RandomStream;

/// A half-open range `[lower, upper)` of valid values for one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    lower: f64,
    upper: f64,
}

impl Boundary {
    /// Creates a boundary.
    ///
    /// Rejects non-finite bounds, `lower >= upper` and ranges whose width
    /// overflows to infinity, which cannot be sampled.
    pub fn new(lower: f64, upper: f64) -> Result<Self, ConfigError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(ConfigError::InvalidBoundary { lower, upper });
        }
        if !(upper - lower).is_finite() {
            return Err(ConfigError::InvalidBoundary { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value < self.upper
    }

    /// Draws one uniform value inside this boundary.
    #[inline]
    pub fn sample(&self, rng: &mut RandomStream) -> f64 {
        rng.uniform(self.lower, self.upper)
    }
}

/// The sampling space: one [`Boundary`] per dimension, in dimension order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    boundaries: Vec<Boundary>,
}

impl BoundingBox {
    pub fn new(boundaries: Vec<Boundary>) -> Self {
        Self { boundaries }
    }

    pub fn dimension(&self) -> usize {
        self.boundaries.len()
    }

    pub fn get_boundary(&self, index: usize) -> Option<&Boundary> {
        self.boundaries.get(index)
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Draws one point of the box, one value per dimension in dimension order.
    pub fn sample(&self, rng: &mut RandomStream) -> Vec<f64> {
        self.boundaries.iter().map(|b| b.sample(rng)).collect()
    }
}
