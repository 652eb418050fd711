use super::Initializer;
use crate::core::io::coordinates::load_initial_population;
use crate::core::scoring::ObjectiveFunction;
use crate::gso::error::{ConfigError, InitializerError};
use crate::gso::landscape::{BenchmarkLandscapePosition, LandscapePosition};
use crate::gso::parameters::GsoParameters;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Reads one glowworm per record of a coordinate file.
///
/// Every objective function shares the same coordinate vector, so each glowworm
/// gets one identical position per objective.
#[derive(Debug)]
pub struct FromFileInitializer {
    objective_functions: Vec<Arc<dyn ObjectiveFunction>>,
    number_of_glowworms: usize,
    parameters: GsoParameters,
    dimension: usize,
    initial_population_file: PathBuf,
}

impl FromFileInitializer {
    pub fn new(
        objective_functions: Vec<Arc<dyn ObjectiveFunction>>,
        number_of_glowworms: usize,
        parameters: GsoParameters,
        dimension: usize,
        initial_population_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            objective_functions,
            number_of_glowworms,
            parameters,
            dimension,
            initial_population_file: initial_population_file.into(),
        }
    }

    fn check_shape(&self) -> Result<(), ConfigError> {
        if self.objective_functions.is_empty() {
            return Err(ConfigError::Invalid {
                name: "objective_functions",
                reason: "at least one objective function is required".to_string(),
            });
        }
        if self.dimension == 0 {
            return Err(ConfigError::Invalid {
                name: "dimension",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Initializer for FromFileInitializer {
    #[instrument(skip_all, name = "from_file_initializer", fields(path = %self.initial_population_file.display()))]
    fn generate_landscape_positions(
        &mut self,
    ) -> Result<Vec<Vec<LandscapePosition>>, InitializerError> {
        self.check_shape()?;
        debug!(
            dimension = self.dimension,
            objectives = self.objective_functions.len(),
            "Reading initial positions."
        );

        let population = load_initial_population(
            &self.initial_population_file,
            self.dimension,
            self.number_of_glowworms,
        )?;

        let positions: Vec<Vec<LandscapePosition>> = population
            .into_iter()
            .map(|coordinates| {
                self.objective_functions
                    .iter()
                    .map(|objective_function| {
                        LandscapePosition::Benchmark(BenchmarkLandscapePosition::new(
                            Arc::clone(objective_function),
                            coordinates.clone(),
                            self.parameters.initial_step,
                        ))
                    })
                    .collect()
            })
            .collect();

        info!(
            glowworms = positions.len(),
            "Initial population loaded from file."
        );
        Ok(positions)
    }

    fn gso_parameters(&self) -> &GsoParameters {
        &self.parameters
    }
}
