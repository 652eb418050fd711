use super::landscape::LandscapePosition;
use super::parameters::GsoParameters;
use std::fmt;

/// One candidate pose of the swarm.
///
/// A glowworm holds one landscape position per configured objective together
/// with its luciferin level and the movement settings copied from
/// [`GsoParameters`]. Freshly initialized glowworms have no neighbors and an
/// unscored (`0.0`) scoring value.
#[derive(Debug, Clone)]
pub struct Glowworm {
    /// One position per objective, in objective order.
    pub landscape_positions: Vec<LandscapePosition>,
    pub luciferin: f64,
    pub rho: f64,
    pub gamma: f64,
    pub beta: f64,
    pub vision_range: f64,
    pub max_vision_range: f64,
    pub max_neighbors: usize,
    /// Indices of neighboring glowworms in the swarm.
    pub neighbors: Vec<usize>,
    pub scoring: f64,
    pub moved: bool,
}

impl Glowworm {
    pub fn new(landscape_positions: Vec<LandscapePosition>, parameters: &GsoParameters) -> Self {
        Self {
            landscape_positions,
            luciferin: parameters.initial_luciferin,
            rho: parameters.rho,
            gamma: parameters.gamma,
            beta: parameters.beta,
            vision_range: parameters.initial_vision_range,
            max_vision_range: parameters.max_vision_range,
            max_neighbors: parameters.max_neighbors,
            neighbors: Vec::new(),
            scoring: 0.0,
            moved: false,
        }
    }

    pub fn num_landscape_positions(&self) -> usize {
        self.landscape_positions.len()
    }
}

impl fmt::Display for Glowworm {
    /// Renders the first landscape position followed by luciferin, neighbor count,
    /// vision range and scoring value, e.g.
    /// `(0.617171, -2.85014)   5.00000000  0 0.200   0.00000000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.landscape_positions.first() {
            Some(position) => write!(f, "{}", position)?,
            None => write!(f, "()")?,
        }
        write!(
            f,
            " {:>12.8} {:>2} {:>5.3} {:>12.8}",
            self.luciferin,
            self.neighbors.len(),
            self.vision_range,
            self.scoring
        )
    }
}
