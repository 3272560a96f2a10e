use super::adjacency::{distance_adjacency, molecular_criteria};
use super::components::{apply_background, label_elements};
use super::config::{ClusterConfig, ClusterMethod};
use super::error::ClusterError;
use crate::core::geometry::periodic_distance_matrix;
use crate::core::models::labels::label_set;
use nalgebra::{Point3, Vector3};
use tracing::{debug, instrument};

/// Assigns every entity in `coords` to a cluster for a single frame.
///
/// `coords` is interpreted per `config.method`: one point per molecule
/// (molecular) or one point per atom (atomic). The atomic method additionally
/// requires one molecule reference label per atom and returns labels at
/// molecule granularity, so the output length is the molecule count rather
/// than the atom count.
#[instrument(skip_all, name = "cluster_frame")]
pub fn cluster(
    coords: &[Point3<f64>],
    cell: &Vector3<f64>,
    mol_refs: Option<&[String]>,
    config: &ClusterConfig,
) -> Result<Vec<i64>, ClusterError> {
    // Validate atomic-mode preconditions before the O(N^2) distance pass.
    let atomic_refs = match config.method {
        ClusterMethod::Molecular => None,
        ClusterMethod::Atomic => {
            let refs = mol_refs.ok_or(ClusterError::MissingMoleculeRefs)?;
            if refs.len() != coords.len() {
                return Err(ClusterError::RefMismatch {
                    n_entities: coords.len(),
                    n_refs: refs.len(),
                });
            }
            Some(refs)
        }
    };

    let r2_matrix = periodic_distance_matrix(coords, cell, config.batch_size);
    let mut adjacency = distance_adjacency(&r2_matrix, config.r_thresh)?;

    if let Some(refs) = atomic_refs {
        adjacency = molecular_criteria(&adjacency, refs, config.atom_thresh)?;
    }

    let mut labels = label_elements(&adjacency, config.noise_thresh, config.cluster_thresh);
    apply_background(&mut labels, config.background);

    debug!(
        n_entities = labels.len(),
        n_clusters = label_set(&labels, config.background).len(),
        "Frame clustering complete."
    );

    Ok(labels)
}
