use std::fmt;
use std::ops::Index;

/// An ordered vector of coordinates describing one point of the search space.
///
/// The dimensionality is fixed at construction. `Display` renders the values in
/// parentheses separated by `", "`, using the shortest representation that
/// round-trips each value, e.g. `(0.617171, -2.85014)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coordinates {
    values: Vec<f64>,
}

impl Coordinates {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Returns the number of dimensions of this vector.
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }
}

impl From<Vec<f64>> for Coordinates {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<f64> for Coordinates {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Coordinates {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}
