use nalgebra::{Point3, Vector3};

/// Atomic data of one docking partner (receptor or ligand) as consumed by a scoring function.
///
/// The model is built by a scoring adapter from a parsed structure. It keeps the
/// atom coordinates in Angstroms and, for flexible docking, the normal modes of
/// the molecule (one displacement vector per atom for every mode).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DockingModel {
    /// Atom coordinates in Angstroms, in structure order.
    pub coordinates: Vec<Point3<f64>>,
    /// Normal modes, each holding one displacement per atom.
    pub n_modes: Vec<Vec<Vector3<f64>>>,
}

impl DockingModel {
    pub fn new(coordinates: Vec<Point3<f64>>) -> Self {
        Self {
            coordinates,
            n_modes: Vec::new(),
        }
    }

    pub fn with_n_modes(mut self, n_modes: Vec<Vec<Vector3<f64>>>) -> Self {
        self.n_modes = n_modes;
        self
    }

    pub fn num_atoms(&self) -> usize {
        self.coordinates.len()
    }

    pub fn num_n_modes(&self) -> usize {
        self.n_modes.len()
    }

    /// Returns the atom coordinates displaced along the normal modes.
    ///
    /// Atom `a` moves by `extent[i] * n_modes[i][a]` for every mode `i`. Extents
    /// past the number of modes carried by the model contribute nothing.
    pub fn displaced(&self, extent: &[f64]) -> Vec<Point3<f64>> {
        let modes = extent.len().min(self.num_n_modes());
        self.coordinates
            .iter()
            .enumerate()
            .map(|(atom, position)| {
                self.n_modes[..modes]
                    .iter()
                    .zip(extent)
                    .filter_map(|(mode, amount)| mode.get(atom).map(|d| d * *amount))
                    .fold(*position, |acc, displacement| acc + displacement)
            })
            .collect()
    }
}
