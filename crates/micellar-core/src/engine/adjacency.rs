use super::error::ClusterError;
use crate::core::matrix::{MatrixError, block_sum, threshold_mask};
use crate::core::models::labels::species_family;
use itertools::Itertools;
use nalgebra::DMatrix;

/// Thresholds a squared-distance matrix into a binary adjacency matrix: two
/// entities are neighbours when `0 < r2 < r_thresh^2`.
pub fn distance_adjacency(
    r2_matrix: &DMatrix<f64>,
    r_thresh: f64,
) -> Result<DMatrix<f64>, ClusterError> {
    if r2_matrix.iter().any(|x| !x.is_finite()) {
        return Err(ClusterError::UnsupportedMatrix);
    }

    Ok(threshold_mask(r2_matrix, 0.0, r_thresh * r_thresh))
}

/// One species family's slice of the molecule reference list: which atoms it
/// owns, which global molecule indices its instances occupy, and how many
/// sites each instance carries.
struct SpeciesGroup {
    atom_indices: Vec<usize>,
    mol_indices: Vec<usize>,
    n_sites: usize,
}

fn group_by_species(mol_refs: &[String]) -> Vec<SpeciesGroup> {
    // Molecule instances are the distinct full labels, in first-appearance
    // order; this order defines the global molecule index.
    let mut molecules: Vec<&str> = Vec::new();
    for label in mol_refs {
        if !molecules.contains(&label.as_str()) {
            molecules.push(label);
        }
    }

    let families: Vec<String> = molecules
        .iter()
        .map(|label| species_family(label))
        .unique()
        .collect();

    families
        .iter()
        .map(|family| {
            let atom_indices: Vec<usize> = mol_refs
                .iter()
                .enumerate()
                .filter(|(_, label)| species_family(label) == *family)
                .map(|(index, _)| index)
                .collect();
            let mol_indices: Vec<usize> = molecules
                .iter()
                .enumerate()
                .filter(|(_, label)| species_family(label) == *family)
                .map(|(index, _)| index)
                .collect();
            let n_sites = atom_indices.len() / mol_indices.len();

            SpeciesGroup {
                atom_indices,
                mol_indices,
                n_sites,
            }
        })
        .collect()
}

/// Escalates an atom-level adjacency matrix to molecule granularity.
///
/// Atoms are grouped into molecule instances via their reference labels. For
/// every pair of molecule instances the atomic adjacency entries between
/// their atom sets are summed with a block reduction, and the two molecules
/// are considered neighbours when that sum reaches `atom_thresh` (inclusive).
/// Self-pairs are always forced to zero.
pub fn molecular_criteria(
    adjacency: &DMatrix<f64>,
    mol_refs: &[String],
    atom_thresh: usize,
) -> Result<DMatrix<f64>, ClusterError> {
    let n_atoms = adjacency.nrows();
    if adjacency.ncols() != n_atoms {
        return Err(MatrixError::NotSquare {
            rows: n_atoms,
            cols: adjacency.ncols(),
        }
        .into());
    }
    if mol_refs.len() != n_atoms {
        return Err(ClusterError::RefMismatch {
            n_entities: n_atoms,
            n_refs: mol_refs.len(),
        });
    }

    let groups = group_by_species(mol_refs);
    let n_mols: usize = groups.iter().map(|group| group.mol_indices.len()).sum();
    let mut mol_adjacency = DMatrix::zeros(n_mols, n_mols);

    for (group_a, group_b) in groups.iter().cartesian_product(groups.iter()) {
        // Atomic contacts between the two families, reduced per instance pair.
        let submatrix = DMatrix::from_fn(
            group_a.atom_indices.len(),
            group_b.atom_indices.len(),
            |i, j| adjacency[(group_a.atom_indices[i], group_b.atom_indices[j])],
        );
        let contact_sums = block_sum(&submatrix, (group_a.n_sites, group_b.n_sites))?;

        for (i, &mol_a) in group_a.mol_indices.iter().enumerate() {
            for (j, &mol_b) in group_b.mol_indices.iter().enumerate() {
                mol_adjacency[(mol_a, mol_b)] = contact_sums[(i, j)];
            }
        }
    }

    mol_adjacency.fill_diagonal(0.0);

    Ok(mol_adjacency.map(|sum| if sum >= atom_thresh as f64 { 1.0 } else { 0.0 }))
}
