use super::Initializer;
use crate::core::models::coordinates::Coordinates;
use crate::core::scoring::ObjectiveFunction;
use crate::core::utils::random::RandomStream;
use crate::gso::boundaries::BoundingBox;
use crate::gso::error::{ConfigError, InitializerError};
use crate::gso::landscape::{BenchmarkLandscapePosition, LandscapePosition};
use crate::gso::parameters::GsoParameters;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Samples every glowworm uniformly inside a bounding box.
///
/// Draws happen glowworm by glowworm, objective by objective, dimension by
/// dimension, so a stream with a given seed always yields the same swarm.
#[derive(Debug)]
pub struct RandomInitializer<'a> {
    objective_functions: Vec<Arc<dyn ObjectiveFunction>>,
    number_of_glowworms: usize,
    parameters: GsoParameters,
    bounding_box: BoundingBox,
    rng: &'a mut RandomStream,
}

impl<'a> RandomInitializer<'a> {
    pub fn new(
        objective_functions: Vec<Arc<dyn ObjectiveFunction>>,
        number_of_glowworms: usize,
        parameters: GsoParameters,
        bounding_box: BoundingBox,
        rng: &'a mut RandomStream,
    ) -> Self {
        Self {
            objective_functions,
            number_of_glowworms,
            parameters,
            bounding_box,
            rng,
        }
    }

    fn check_shape(&self) -> Result<(), ConfigError> {
        if self.objective_functions.is_empty() {
            return Err(ConfigError::Invalid {
                name: "objective_functions",
                reason: "at least one objective function is required".to_string(),
            });
        }
        if self.number_of_glowworms == 0 {
            return Err(ConfigError::Invalid {
                name: "number_of_glowworms",
                reason: "must be positive".to_string(),
            });
        }
        if self.bounding_box.dimension() == 0 {
            return Err(ConfigError::Invalid {
                name: "bounding_box",
                reason: "must have at least one dimension".to_string(),
            });
        }
        Ok(())
    }
}

impl Initializer for RandomInitializer<'_> {
    #[instrument(skip_all, name = "random_initializer")]
    fn generate_landscape_positions(
        &mut self,
    ) -> Result<Vec<Vec<LandscapePosition>>, InitializerError> {
        self.check_shape()?;
        debug!(
            seed = self.rng.seed(),
            dimension = self.bounding_box.dimension(),
            objectives = self.objective_functions.len(),
            "Sampling initial positions inside the bounding box."
        );

        let mut positions = Vec::with_capacity(self.number_of_glowworms);
        for _ in 0..self.number_of_glowworms {
            let glowworm_positions = self
                .objective_functions
                .iter()
                .map(|objective_function| {
                    let coordinates = Coordinates::new(self.bounding_box.sample(self.rng));
                    LandscapePosition::Benchmark(BenchmarkLandscapePosition::new(
                        Arc::clone(objective_function),
                        coordinates,
                        self.parameters.initial_step,
                    ))
                })
                .collect();
            positions.push(glowworm_positions);
        }

        info!(
            glowworms = positions.len(),
            "Random initial population generated."
        );
        Ok(positions)
    }

    fn gso_parameters(&self) -> &GsoParameters {
        &self.parameters
    }
}
