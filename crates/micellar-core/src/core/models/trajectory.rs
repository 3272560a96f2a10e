use super::labels::species_family;
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error("trajectory has {n_frames} coordinate frames but {n_cells} cell records")]
    CellCountMismatch { n_frames: usize, n_cells: usize },

    #[error("frame {frame} has {n_atoms} atoms, expected {expected}")]
    AtomCountMismatch {
        frame: usize,
        n_atoms: usize,
        expected: usize,
    },
}

/// Coordinate data for a multi-frame simulation, as supplied by an external
/// trajectory loader.
///
/// Holds `F` frames of `N` atom positions each, the periodic cell edge
/// lengths per frame, and one molecule reference label per atom
/// (instance-count plus species symbol, e.g. `"1PS"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    coords: Vec<Vec<Point3<f64>>>,
    cells: Vec<Vector3<f64>>,
    mol_refs: Vec<String>,
}

impl Trajectory {
    /// Builds a trajectory, validating that every frame carries the same atom
    /// count as the molecule reference list and that each frame has a cell.
    pub fn new(
        coords: Vec<Vec<Point3<f64>>>,
        cells: Vec<Vector3<f64>>,
        mol_refs: Vec<String>,
    ) -> Result<Self, TrajectoryError> {
        if coords.len() != cells.len() {
            return Err(TrajectoryError::CellCountMismatch {
                n_frames: coords.len(),
                n_cells: cells.len(),
            });
        }

        let expected = mol_refs.len();
        for (frame, frame_coords) in coords.iter().enumerate() {
            if frame_coords.len() != expected {
                return Err(TrajectoryError::AtomCountMismatch {
                    frame,
                    n_atoms: frame_coords.len(),
                    expected,
                });
            }
        }

        Ok(Self {
            coords,
            cells,
            mol_refs,
        })
    }

    pub fn n_frames(&self) -> usize {
        self.coords.len()
    }

    pub fn n_atoms(&self) -> usize {
        self.mol_refs.len()
    }

    /// Atom positions for one frame.
    pub fn frame_coords(&self, frame: usize) -> &[Point3<f64>] {
        &self.coords[frame]
    }

    /// Periodic cell edge lengths for one frame.
    pub fn cell(&self, frame: usize) -> &Vector3<f64> {
        &self.cells[frame]
    }

    pub fn mol_refs(&self) -> &[String] {
        &self.mol_refs
    }

    /// Indices of all atoms belonging to molecules of the given species
    /// symbol, in trajectory order.
    pub fn molecule_indices(&self, symbol: &str) -> Vec<usize> {
        self.mol_refs
            .iter()
            .enumerate()
            .filter(|(_, label)| species_family(label) == symbol)
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trajectory_reports_frame_and_atom_counts() {
        let trajectory = Trajectory::new(
            vec![vec![Point3::origin(); 3]; 2],
            vec![Vector3::new(6.0, 6.0, 6.0); 2],
            labels(&["1PS", "1PS", "1NA"]),
        )
        .unwrap();

        assert_eq!(trajectory.n_frames(), 2);
        assert_eq!(trajectory.n_atoms(), 3);
    }

    #[test]
    fn molecule_indices_select_atoms_by_species_family() {
        let trajectory = Trajectory::new(
            vec![vec![Point3::origin(); 5]],
            vec![Vector3::new(6.0, 6.0, 6.0)],
            labels(&["1PS", "1PS", "2PS", "2PS", "1NA"]),
        )
        .unwrap();

        assert_eq!(trajectory.molecule_indices("PS"), vec![0, 1, 2, 3]);
        assert_eq!(trajectory.molecule_indices("NA"), vec![4]);
        assert!(trajectory.molecule_indices("XX").is_empty());
    }

    #[test]
    fn mismatched_cell_count_is_rejected() {
        let result = Trajectory::new(
            vec![vec![Point3::origin(); 2]; 2],
            vec![Vector3::new(6.0, 6.0, 6.0)],
            labels(&["1PS", "1PS"]),
        );

        assert_eq!(
            result.unwrap_err(),
            TrajectoryError::CellCountMismatch {
                n_frames: 2,
                n_cells: 1
            }
        );
    }

    #[test]
    fn mismatched_atom_count_is_rejected() {
        let result = Trajectory::new(
            vec![vec![Point3::origin(); 2], vec![Point3::origin(); 3]],
            vec![Vector3::new(6.0, 6.0, 6.0); 2],
            labels(&["1PS", "1PS"]),
        );

        assert_eq!(
            result.unwrap_err(),
            TrajectoryError::AtomCountMismatch {
                frame: 1,
                n_atoms: 3,
                expected: 2
            }
        );
    }
}
