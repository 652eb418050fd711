use crate::core::models::coordinates::Coordinates;
use crate::core::scoring::{ObjectiveFunction, ScoringAdapter, ScoringFunction};
use nalgebra::{Point3, Quaternion, UnitQuaternion, Vector3};
use std::fmt;
use std::sync::Arc;

/// Number of leading record components describing the rigid-body pose:
/// three for the translation and four for the quaternion (w, x, y, z).
pub const RIGID_BODY_DIMENSION: usize = 7;

/// A position of a glowworm in the search landscape of one objective.
///
/// A glowworm holds one position per configured objective. Benchmark landscapes
/// use a plain coordinate vector; docking landscapes split the vector into a
/// rigid-body pose and normal-mode extents and keep the scoring data they will
/// be evaluated against.
#[derive(Debug, Clone)]
pub enum LandscapePosition {
    Benchmark(BenchmarkLandscapePosition),
    Docking(DockingLandscapePosition),
}

impl LandscapePosition {
    /// Returns the position flattened into a single coordinate vector.
    pub fn coordinates(&self) -> Coordinates {
        match self {
            LandscapePosition::Benchmark(position) => position.coordinates.clone(),
            LandscapePosition::Docking(position) => position.coordinates(),
        }
    }

    /// Evaluates the objective this position belongs to.
    pub fn evaluate(&self) -> f64 {
        match self {
            LandscapePosition::Benchmark(position) => position.evaluate(),
            LandscapePosition::Docking(position) => position.evaluate(),
        }
    }
}

impl fmt::Display for LandscapePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinates())
    }
}

#[derive(Debug, Clone)]
pub struct BenchmarkLandscapePosition {
    pub objective_function: Arc<dyn ObjectiveFunction>,
    pub coordinates: Coordinates,
    /// Movement step size in coordinate units.
    pub step: f64,
}

impl BenchmarkLandscapePosition {
    pub fn new(
        objective_function: Arc<dyn ObjectiveFunction>,
        coordinates: Coordinates,
        step: f64,
    ) -> Self {
        Self {
            objective_function,
            coordinates,
            step,
        }
    }

    pub fn evaluate(&self) -> f64 {
        self.objective_function.evaluate(&self.coordinates)
    }
}

/// Step scales applied when a docking position moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockingSteps {
    pub translation: f64,
    pub rotation: f64,
    pub n_modes: f64,
}

/// Number of normal modes extended for each docking partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalModeCounts {
    pub receptor: usize,
    pub ligand: usize,
}

/// A receptor-ligand pose paired with the scoring function and adapter it is scored with.
#[derive(Debug, Clone)]
pub struct DockingLandscapePosition {
    pub scoring_function: Arc<dyn ScoringFunction>,
    pub adapter: Arc<dyn ScoringAdapter>,
    pub translation: Vector3<f64>,
    /// Ligand orientation, stored exactly as read (not normalized).
    pub rotation: Quaternion<f64>,
    pub rec_extent: Vec<f64>,
    pub lig_extent: Vec<f64>,
    pub steps: DockingSteps,
    pub n_modes: NormalModeCounts,
}

impl DockingLandscapePosition {
    /// Builds a docking position from a flat coordinate record.
    ///
    /// The record holds the translation, the quaternion (w, x, y, z), then up to
    /// `n_modes.receptor` receptor extents and up to `n_modes.ligand` ligand extents.
    /// Extents missing from the record are left empty.
    ///
    /// Returns `None` if the record is shorter than [`RIGID_BODY_DIMENSION`] or
    /// holds more values than the pose and both extents can take.
    pub fn from_record(
        scoring_function: Arc<dyn ScoringFunction>,
        adapter: Arc<dyn ScoringAdapter>,
        record: &Coordinates,
        steps: DockingSteps,
        n_modes: NormalModeCounts,
    ) -> Option<Self> {
        let values = record.values();
        if values.len() < RIGID_BODY_DIMENSION {
            return None;
        }
        let translation = Vector3::new(values[0], values[1], values[2]);
        let rotation = Quaternion::new(values[3], values[4], values[5], values[6]);

        let extents = &values[RIGID_BODY_DIMENSION..];
        let rec_len = n_modes.receptor.min(extents.len());
        let (rec_extent, rest) = extents.split_at(rec_len);
        let lig_len = n_modes.ligand.min(rest.len());
        if rest.len() > lig_len {
            return None;
        }

        Some(Self {
            scoring_function,
            adapter,
            translation,
            rotation,
            rec_extent: rec_extent.to_vec(),
            lig_extent: rest[..lig_len].to_vec(),
            steps,
            n_modes,
        })
    }

    pub fn coordinates(&self) -> Coordinates {
        let q = &self.rotation;
        [
            self.translation.x,
            self.translation.y,
            self.translation.z,
            q.w,
            q.i,
            q.j,
            q.k,
        ]
        .into_iter()
        .chain(self.rec_extent.iter().copied())
        .chain(self.lig_extent.iter().copied())
        .collect()
    }

    /// Scores the pose.
    ///
    /// Both partners are first displaced along their normal modes by the stored
    /// extents. The ligand is then rotated by the normalized quaternion and
    /// translated; the receptor stays in place.
    pub fn evaluate(&self) -> f64 {
        let receptor = self.adapter.receptor_model();
        let ligand = self.adapter.ligand_model();
        let rotation = UnitQuaternion::from_quaternion(self.rotation);
        let receptor_coordinates = receptor.displaced(&self.rec_extent);
        let ligand_coordinates: Vec<Point3<f64>> = ligand
            .displaced(&self.lig_extent)
            .into_iter()
            .map(|p| rotation * p + self.translation)
            .collect();
        self.scoring_function.energy(
            receptor,
            &receptor_coordinates,
            ligand,
            &ligand_coordinates,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::docking::DockingModel;
    use crate::core::scoring::benchmark::J1;

    #[derive(Debug)]
    struct PairAdapter {
        receptor: DockingModel,
        ligand: DockingModel,
    }

    impl ScoringAdapter for PairAdapter {
        fn receptor_model(&self) -> &DockingModel {
            &self.receptor
        }
        fn ligand_model(&self) -> &DockingModel {
            &self.ligand
        }
    }

    /// Scores a pose as the negative distance between the first receptor and ligand atoms.
    #[derive(Debug)]
    struct FirstAtomDistance;

    impl ScoringFunction for FirstAtomDistance {
        fn energy(
            &self,
            _receptor: &DockingModel,
            receptor_coordinates: &[Point3<f64>],
            _ligand: &DockingModel,
            ligand_coordinates: &[Point3<f64>],
        ) -> f64 {
            -(receptor_coordinates[0] - ligand_coordinates[0]).norm()
        }
    }

    fn adapter() -> Arc<dyn ScoringAdapter> {
        Arc::new(PairAdapter {
            receptor: DockingModel::new(vec![Point3::origin()]),
            ligand: DockingModel::new(vec![Point3::new(1.0, 0.0, 0.0)]),
        })
    }

    fn steps() -> DockingSteps {
        DockingSteps {
            translation: 0.5,
            rotation: 0.5,
            n_modes: 0.5,
        }
    }

    #[test]
    fn benchmark_position_evaluates_its_objective() {
        let position = LandscapePosition::Benchmark(BenchmarkLandscapePosition::new(
            Arc::new(J1),
            Coordinates::new(vec![0.0, 0.0]),
            0.03,
        ));
        let expected = 8.0 / 3.0 * (-1.0f64).exp();
        assert!((position.evaluate() - expected).abs() < 1e-9);
        assert_eq!(position.to_string(), "(0, 0)");
    }

    #[test]
    fn docking_record_round_trips_through_coordinates() {
        let record = Coordinates::new(vec![1.5, -2.0, 3.25, 0.5, 0.5, 0.5, 0.5, 0.1, 0.2, 0.3]);
        let position = DockingLandscapePosition::from_record(
            Arc::new(FirstAtomDistance),
            adapter(),
            &record,
            steps(),
            NormalModeCounts {
                receptor: 2,
                ligand: 1,
            },
        )
        .unwrap();

        assert_eq!(position.translation, Vector3::new(1.5, -2.0, 3.25));
        assert_eq!(position.rotation.w, 0.5);
        assert_eq!(position.rec_extent, vec![0.1, 0.2]);
        assert_eq!(position.lig_extent, vec![0.3]);
        assert_eq!(position.coordinates(), record);
    }

    #[test]
    fn docking_record_without_extents_is_rigid() {
        let record = Coordinates::new(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
        let position = DockingLandscapePosition::from_record(
            Arc::new(FirstAtomDistance),
            adapter(),
            &record,
            steps(),
            NormalModeCounts {
                receptor: 10,
                ligand: 10,
            },
        )
        .unwrap();
        assert!(position.rec_extent.is_empty());
        assert!(position.lig_extent.is_empty());
        assert_eq!(position.coordinates().dimension(), RIGID_BODY_DIMENSION);
    }

    #[test]
    fn docking_record_shorter_than_rigid_body_is_rejected() {
        let record = Coordinates::new(vec![0.0, 0.0, 0.0]);
        let position = DockingLandscapePosition::from_record(
            Arc::new(FirstAtomDistance),
            adapter(),
            &record,
            steps(),
            NormalModeCounts::default(),
        );
        assert!(position.is_none());
    }

    #[test]
    fn docking_record_with_values_past_the_extents_is_rejected() {
        let record = Coordinates::new(vec![1.0, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.1, 0.2, 0.3]);
        let position = DockingLandscapePosition::from_record(
            Arc::new(FirstAtomDistance),
            adapter(),
            &record,
            steps(),
            NormalModeCounts {
                receptor: 1,
                ligand: 1,
            },
        );
        assert!(position.is_none());
    }

    #[test]
    fn docking_evaluate_applies_normal_mode_extents() {
        let adapter: Arc<dyn ScoringAdapter> = Arc::new(PairAdapter {
            receptor: DockingModel::new(vec![Point3::origin()])
                .with_n_modes(vec![vec![Vector3::new(0.0, 1.0, 0.0)]]),
            ligand: DockingModel::new(vec![Point3::new(1.0, 0.0, 0.0)])
                .with_n_modes(vec![vec![Vector3::new(1.0, 0.0, 0.0)]]),
        });
        let record = Coordinates::new(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 4.0, 2.0]);
        let position = DockingLandscapePosition::from_record(
            Arc::new(FirstAtomDistance),
            adapter,
            &record,
            steps(),
            NormalModeCounts {
                receptor: 1,
                ligand: 1,
            },
        )
        .unwrap();
        // Receptor atom moves to (0, 4, 0), ligand atom to (3, 0, 0).
        assert!((position.evaluate() + 5.0).abs() < 1e-9);
    }

    #[test]
    fn docking_evaluate_rotates_then_translates_ligand() {
        // 90 degrees about z maps (1, 0, 0) to (0, 1, 0); unnormalized on purpose.
        let half = std::f64::consts::FRAC_PI_4;
        let record = Coordinates::new(vec![
            0.0,
            2.0,
            0.0,
            2.0 * half.cos(),
            0.0,
            0.0,
            2.0 * half.sin(),
        ]);
        let position = LandscapePosition::Docking(
            DockingLandscapePosition::from_record(
                Arc::new(FirstAtomDistance),
                adapter(),
                &record,
                steps(),
                NormalModeCounts::default(),
            )
            .unwrap(),
        );
        assert!((position.evaluate() + 3.0).abs() < 1e-9);
    }
}
