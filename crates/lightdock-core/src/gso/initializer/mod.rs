//! # Swarm Initializers
//!
//! Strategies that build the starting population of a glowworm swarm.
//!
//! Every strategy implements [`Initializer`]: it supplies its own
//! [`Initializer::generate_landscape_positions`], and the shared
//! [`Initializer::generate_glowworms`] wraps each set of positions into a
//! [`Glowworm`] configured from the run's [`GsoParameters`].
//!
//! - [`random::RandomInitializer`] - Uniform sampling inside a bounding box
//! - [`from_file::FromFileInitializer`] - Coordinates read from a file
//! - [`docking::LightdockFromFileInitializer`] - Docking poses read from a file and
//!   paired with scoring adapters
//!
//! A driver that selects the strategy from user input parses an
//! [`InitializationStrategy`]; names without an implementation are rejected with
//! [`InitializerError::UnimplementedStrategy`].

pub mod docking;
pub mod from_file;
pub mod random;

use super::error::InitializerError;
use super::glowworm::Glowworm;
use super::landscape::LandscapePosition;
use super::parameters::GsoParameters;
use super::swarm::Swarm;
use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;

/// Produces a populated [`Swarm`].
pub trait Initializer {
    /// Returns the landscape positions of every glowworm, one inner vector per
    /// glowworm holding one position per objective.
    fn generate_landscape_positions(
        &mut self,
    ) -> Result<Vec<Vec<LandscapePosition>>, InitializerError>;

    /// The parameters every generated glowworm is configured with.
    fn gso_parameters(&self) -> &GsoParameters;

    /// Builds the swarm, one glowworm per generated set of landscape positions.
    ///
    /// # Errors
    ///
    /// Propagates any error of [`Initializer::generate_landscape_positions`]
    /// unchanged; no partial swarm is returned.
    fn generate_glowworms(&mut self) -> Result<Swarm, InitializerError> {
        let positions = self.generate_landscape_positions()?;
        let parameters = self.gso_parameters();
        let glowworms = positions
            .into_iter()
            .map(|landscape_positions| Glowworm::new(landscape_positions, parameters))
            .collect();
        Ok(Swarm::new(glowworms))
    }
}

/// The initialization strategies a setup driver can select by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitializationStrategy {
    Random,
    FromFile,
    LightdockFromFile,
}

static STRATEGY_NAMES: Map<&'static str, InitializationStrategy> = phf_map! {
    "random" => InitializationStrategy::Random,
    "from-file" => InitializationStrategy::FromFile,
    "from_file" => InitializationStrategy::FromFile,
    "file" => InitializationStrategy::FromFile,
    "lightdock-from-file" => InitializationStrategy::LightdockFromFile,
    "lightdock_from_file" => InitializationStrategy::LightdockFromFile,
    "lightdock" => InitializationStrategy::LightdockFromFile,
};

impl InitializationStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            InitializationStrategy::Random => "random",
            InitializationStrategy::FromFile => "from-file",
            InitializationStrategy::LightdockFromFile => "lightdock-from-file",
        }
    }
}

impl FromStr for InitializationStrategy {
    type Err = InitializerError;

    /// Parses a strategy name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STRATEGY_NAMES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| InitializerError::UnimplementedStrategy(s.to_string()))
    }
}

impl fmt::Display for InitializationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::coordinates::Coordinates;
    use crate::core::scoring::benchmark::J1;
    use crate::gso::landscape::BenchmarkLandscapePosition;
    use std::sync::Arc;

    struct FixedInitializer {
        parameters: GsoParameters,
        points: Vec<Vec<f64>>,
    }

    impl Initializer for FixedInitializer {
        fn generate_landscape_positions(
            &mut self,
        ) -> Result<Vec<Vec<LandscapePosition>>, InitializerError> {
            Ok(self
                .points
                .iter()
                .map(|p| {
                    vec![LandscapePosition::Benchmark(BenchmarkLandscapePosition::new(
                        Arc::new(J1),
                        Coordinates::new(p.clone()),
                        self.parameters.initial_step,
                    ))]
                })
                .collect())
        }

        fn gso_parameters(&self) -> &GsoParameters {
            &self.parameters
        }
    }

    struct FailingInitializer(GsoParameters);

    impl Initializer for FailingInitializer {
        fn generate_landscape_positions(
            &mut self,
        ) -> Result<Vec<Vec<LandscapePosition>>, InitializerError> {
            Err(InitializerError::UnimplementedStrategy("failing".to_string()))
        }

        fn gso_parameters(&self) -> &GsoParameters {
            &self.0
        }
    }

    #[test]
    fn generate_glowworms_wraps_each_position_set() {
        let parameters = GsoParameters {
            initial_luciferin: 2.5,
            ..GsoParameters::default()
        };
        let mut initializer = FixedInitializer {
            parameters,
            points: vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]],
        };
        let swarm = initializer.generate_glowworms().unwrap();

        assert_eq!(swarm.get_size(), 3);
        assert!(swarm.iter().all(|g| g.luciferin == 2.5));
        assert_eq!(
            swarm.glowworms[2].landscape_positions[0].coordinates().values(),
            &[4.0, 5.0]
        );
    }

    #[test]
    fn generate_glowworms_propagates_errors() {
        let mut initializer = FailingInitializer(GsoParameters::default());
        assert!(matches!(
            initializer.generate_glowworms(),
            Err(InitializerError::UnimplementedStrategy(_))
        ));
    }

    #[test]
    fn strategy_names_parse_case_insensitively() {
        assert_eq!(
            "random".parse::<InitializationStrategy>().unwrap(),
            InitializationStrategy::Random
        );
        assert_eq!(
            " From-File ".parse::<InitializationStrategy>().unwrap(),
            InitializationStrategy::FromFile
        );
        assert_eq!(
            "LIGHTDOCK".parse::<InitializationStrategy>().unwrap(),
            InitializationStrategy::LightdockFromFile
        );
    }

    #[test]
    fn unknown_strategy_is_unimplemented() {
        let result = "initializer".parse::<InitializationStrategy>();
        match result {
            Err(InitializerError::UnimplementedStrategy(name)) => assert_eq!(name, "initializer"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn strategy_name_round_trips() {
        for strategy in [
            InitializationStrategy::Random,
            InitializationStrategy::FromFile,
            InitializationStrategy::LightdockFromFile,
        ] {
            assert_eq!(strategy.to_string().parse::<InitializationStrategy>().unwrap(), strategy);
        }
    }
}
