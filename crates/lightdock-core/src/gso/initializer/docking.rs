use super::Initializer;
use crate::core::io::coordinates::load_initial_population;
use crate::core::scoring::{ScoringAdapter, ScoringFunction};
use crate::core::utils::random::RandomStream;
use crate::gso::error::{ConfigError, InitializerError};
use crate::gso::landscape::{
    DockingLandscapePosition, DockingSteps, LandscapePosition, NormalModeCounts,
    RIGID_BODY_DIMENSION,
};
use crate::gso::parameters::GsoParameters;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Reads docking poses from a coordinate file and pairs them with scoring adapters.
///
/// Each record holds a translation, a quaternion and optional normal-mode
/// extents (see [`DockingLandscapePosition::from_record`]). Every glowworm gets
/// one docking position per (adapter, scoring function) pair, in pair order,
/// carrying the translation, rotation and normal-mode step scales. Scoring is
/// not evaluated here; glowworms start with a scoring value of `0.0`.
///
/// Built through [`LightdockFromFileInitializerBuilder`].
#[derive(Debug)]
pub struct LightdockFromFileInitializer<'a> {
    adapters: Vec<Arc<dyn ScoringAdapter>>,
    scoring_functions: Vec<Arc<dyn ScoringFunction>>,
    number_of_glowworms: usize,
    parameters: GsoParameters,
    dimension: usize,
    initial_population_file: PathBuf,
    steps: DockingSteps,
    n_modes: NormalModeCounts,
    rng: &'a mut RandomStream,
}

impl<'a> LightdockFromFileInitializer<'a> {
    pub fn builder() -> LightdockFromFileInitializerBuilder<'a> {
        LightdockFromFileInitializerBuilder::new()
    }

    pub fn num_scoring_pairs(&self) -> usize {
        self.scoring_functions.len()
    }
}

impl Initializer for LightdockFromFileInitializer<'_> {
    #[instrument(skip_all, name = "lightdock_from_file_initializer", fields(path = %self.initial_population_file.display()))]
    fn generate_landscape_positions(
        &mut self,
    ) -> Result<Vec<Vec<LandscapePosition>>, InitializerError> {
        debug!(
            seed = self.rng.seed(),
            dimension = self.dimension,
            scoring_pairs = self.scoring_functions.len(),
            rec_nmodes = self.n_modes.receptor,
            lig_nmodes = self.n_modes.ligand,
            "Reading initial docking poses."
        );

        let population = load_initial_population(
            &self.initial_population_file,
            self.dimension,
            self.number_of_glowworms,
        )?;

        let mut positions = Vec::with_capacity(population.len());
        for record in &population {
            let glowworm_positions = self
                .scoring_functions
                .iter()
                .zip(&self.adapters)
                .map(|(scoring_function, adapter)| {
                    DockingLandscapePosition::from_record(
                        Arc::clone(scoring_function),
                        Arc::clone(adapter),
                        record,
                        self.steps,
                        self.n_modes,
                    )
                    .map(LandscapePosition::Docking)
                    .ok_or_else(|| ConfigError::Invalid {
                        name: "dimension",
                        reason: format!(
                            "docking records hold {} coordinates, which the pose and normal-mode extents cannot take",
                            record.dimension()
                        ),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            positions.push(glowworm_positions);
        }

        info!(
            glowworms = positions.len(),
            "Initial docking poses loaded from file."
        );
        Ok(positions)
    }

    fn gso_parameters(&self) -> &GsoParameters {
        &self.parameters
    }
}

/// Configures a [`LightdockFromFileInitializer`].
///
/// Adapters and scoring functions may be given one at a time or as sequences;
/// both forms accumulate into ordered sequences that must have the same length.
/// Normal-mode counts and their step scale default to zero (rigid docking).
#[derive(Debug, Default)]
pub struct LightdockFromFileInitializerBuilder<'a> {
    adapters: Vec<Arc<dyn ScoringAdapter>>,
    scoring_functions: Vec<Arc<dyn ScoringFunction>>,
    number_of_glowworms: Option<usize>,
    parameters: Option<GsoParameters>,
    dimension: Option<usize>,
    initial_population_file: Option<PathBuf>,
    step_translation: Option<f64>,
    step_rotation: Option<f64>,
    rng: Option<&'a mut RandomStream>,
    step_nmodes: f64,
    num_rec_nmodes: usize,
    num_lig_nmodes: usize,
}

impl<'a> LightdockFromFileInitializerBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn adapter(mut self, adapter: Arc<dyn ScoringAdapter>) -> Self {
        self.adapters.push(adapter);
        self
    }

    pub fn adapters(mut self, adapters: Vec<Arc<dyn ScoringAdapter>>) -> Self {
        self.adapters.extend(adapters);
        self
    }

    pub fn scoring_function(mut self, scoring_function: Arc<dyn ScoringFunction>) -> Self {
        self.scoring_functions.push(scoring_function);
        self
    }

    pub fn scoring_functions(mut self, scoring_functions: Vec<Arc<dyn ScoringFunction>>) -> Self {
        self.scoring_functions.extend(scoring_functions);
        self
    }

    pub fn number_of_glowworms(mut self, n: usize) -> Self {
        self.number_of_glowworms = Some(n);
        self
    }

    pub fn gso_parameters(mut self, parameters: GsoParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn initial_population_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.initial_population_file = Some(path.into());
        self
    }

    pub fn step_translation(mut self, step: f64) -> Self {
        self.step_translation = Some(step);
        self
    }

    pub fn step_rotation(mut self, step: f64) -> Self {
        self.step_rotation = Some(step);
        self
    }

    pub fn random_stream(mut self, rng: &'a mut RandomStream) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn step_nmodes(mut self, step: f64) -> Self {
        self.step_nmodes = step;
        self
    }

    pub fn num_rec_nmodes(mut self, n: usize) -> Self {
        self.num_rec_nmodes = n;
        self
    }

    pub fn num_lig_nmodes(mut self, n: usize) -> Self {
        self.num_lig_nmodes = n;
        self
    }

    pub fn build(self) -> Result<LightdockFromFileInitializer<'a>, ConfigError> {
        if self.adapters.is_empty() {
            return Err(ConfigError::MissingParameter("adapters"));
        }
        if self.scoring_functions.is_empty() {
            return Err(ConfigError::MissingParameter("scoring_functions"));
        }
        if self.adapters.len() != self.scoring_functions.len() {
            return Err(ConfigError::Invalid {
                name: "adapters",
                reason: format!(
                    "{} adapter(s) given for {} scoring function(s)",
                    self.adapters.len(),
                    self.scoring_functions.len()
                ),
            });
        }
        let dimension = self
            .dimension
            .ok_or(ConfigError::MissingParameter("dimension"))?;
        if dimension < RIGID_BODY_DIMENSION {
            return Err(ConfigError::Invalid {
                name: "dimension",
                reason: format!(
                    "{} is below the {} rigid-body coordinates of a docking pose",
                    dimension, RIGID_BODY_DIMENSION
                ),
            });
        }
        let max_dimension = RIGID_BODY_DIMENSION + self.num_rec_nmodes + self.num_lig_nmodes;
        if dimension > max_dimension {
            return Err(ConfigError::Invalid {
                name: "dimension",
                reason: format!(
                    "{} exceeds the {} coordinates of a pose with {} receptor and {} ligand normal modes",
                    dimension, max_dimension, self.num_rec_nmodes, self.num_lig_nmodes
                ),
            });
        }

        Ok(LightdockFromFileInitializer {
            adapters: self.adapters,
            scoring_functions: self.scoring_functions,
            number_of_glowworms: self
                .number_of_glowworms
                .ok_or(ConfigError::MissingParameter("number_of_glowworms"))?,
            parameters: self
                .parameters
                .ok_or(ConfigError::MissingParameter("gso_parameters"))?,
            dimension,
            initial_population_file: self
                .initial_population_file
                .ok_or(ConfigError::MissingParameter("initial_population_file"))?,
            steps: DockingSteps {
                translation: self
                    .step_translation
                    .ok_or(ConfigError::MissingParameter("step_translation"))?,
                rotation: self
                    .step_rotation
                    .ok_or(ConfigError::MissingParameter("step_rotation"))?,
                n_modes: self.step_nmodes,
            },
            n_modes: NormalModeCounts {
                receptor: self.num_rec_nmodes,
                ligand: self.num_lig_nmodes,
            },
            rng: self
                .rng
                .ok_or(ConfigError::MissingParameter("random_stream"))?,
        })
    }
}
