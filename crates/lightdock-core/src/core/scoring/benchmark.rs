use super::ObjectiveFunction;
use crate::core::models::coordinates::Coordinates;

/// The two-dimensional "peaks" surface, a multimodal benchmark landscape.
///
/// `J1(x, y) = 3(1-x)^2 e^{-x^2-(y+1)^2} - 10(x/5 - x^3 - y^5) e^{-x^2-y^2} - 1/3 e^{-(x+1)^2-y^2}`
///
/// Only the first two coordinates are read.
#[derive(Debug, Clone, Copy, Default)]
pub struct J1;

impl ObjectiveFunction for J1 {
    fn evaluate(&self, coordinates: &Coordinates) -> f64 {
        let x = coordinates[0];
        let y = coordinates[1];
        3.0 * (1.0 - x).powi(2) * (-(x.powi(2) + (y + 1.0).powi(2))).exp()
            - 10.0 * (x / 5.0 - x.powi(3) - y.powi(5)) * (-(x.powi(2) + y.powi(2))).exp()
            - 1.0 / 3.0 * (-((x + 1.0).powi(2) + y.powi(2))).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn j1_at_origin() {
        let value = J1.evaluate(&Coordinates::new(vec![0.0, 0.0]));
        let expected = 8.0 / 3.0 * (-1.0f64).exp();
        assert!((value - expected).abs() < TOLERANCE);
    }

    #[test]
    fn j1_global_maximum_region() {
        let peak = J1.evaluate(&Coordinates::new(vec![-0.0093, 1.5814]));
        assert!((peak - 8.1062).abs() < 1e-3);
    }

    #[test]
    fn j1_vanishes_far_from_origin() {
        let value = J1.evaluate(&Coordinates::new(vec![10.0, 10.0]));
        assert!(value.abs() < TOLERANCE);
    }
}
