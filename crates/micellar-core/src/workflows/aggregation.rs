use crate::core::geometry::molecular_positions;
use crate::core::models::formulation::Formulation;
use crate::core::models::fragment::Fragment;
use crate::core::models::labels::{label_count, label_set};
use crate::core::models::trajectory::Trajectory;
use crate::engine::clusterer::cluster;
use crate::engine::config::{AggregationConfig, ClusterMethod};
use crate::engine::error::ClusterError;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use tracing::{info, instrument};

/// Site used as the representative centre contributor for each molecule in
/// molecular-granularity clustering.
const CENTRE_SITES: [usize; 1] = [0];

/// Computes the micelle aggregation-number time series for a trajectory.
///
/// Every frame is clustered independently (molecular or atomic granularity
/// per the configuration), the member count of each qualifying cluster is
/// appended to a cumulative list that is never reset between frames, and the
/// frame's aggregation number is the arithmetic mean of that list so far
/// (0 while the list is empty). The result is one value per frame, in frame
/// order; a failure on any frame aborts the whole run.
#[instrument(skip_all, name = "aggregation_workflow")]
pub fn run(
    trajectory: &Trajectory,
    fragments: &[Fragment],
    config: &AggregationConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<f64>, ClusterError> {
    let n_frames = trajectory.n_frames();
    info!(
        n_frames,
        n_fragments = fragments.len(),
        "Starting aggregation number analysis."
    );
    reporter.report(Progress::Message(
        "Clustering trajectory frames...".to_string(),
    ));

    let fragment_indices: Vec<Vec<usize>> = fragments
        .iter()
        .map(|fragment| trajectory.molecule_indices(&fragment.symbol))
        .collect();
    let all_indices: Vec<usize> = fragment_indices.concat();
    let mol_refs: Vec<String> = all_indices
        .iter()
        .map(|&index| trajectory.mol_refs()[index].clone())
        .collect();

    reporter.report(Progress::TaskStart {
        total_steps: n_frames as u64,
    });

    let cluster_config = config.cluster_config();
    let mut cluster_sizes: Vec<usize> = Vec::new();
    let mut aggregation_numbers = Vec::with_capacity(n_frames);

    for frame in 0..n_frames {
        let coords = frame_positions(trajectory, fragments, &fragment_indices, frame, config)?;
        let frame_refs = match config.method {
            ClusterMethod::Molecular => None,
            ClusterMethod::Atomic => Some(mol_refs.as_slice()),
        };

        let labels = cluster(&coords, trajectory.cell(frame), frame_refs, &cluster_config)?;

        // Sizes accumulate across frames; the mean is a cumulative average.
        for label in label_set(&labels, cluster_config.background) {
            cluster_sizes.push(label_count(&labels, label));
        }

        let mean = if cluster_sizes.is_empty() {
            0.0
        } else {
            cluster_sizes.iter().sum::<usize>() as f64 / cluster_sizes.len() as f64
        };
        aggregation_numbers.push(mean);

        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    info!(
        final_value = aggregation_numbers.last().copied().unwrap_or(0.0),
        "Aggregation number analysis complete."
    );

    Ok(aggregation_numbers)
}

/// Runs the aggregation analysis for the fragments of a formulation matching
/// the given species symbols.
///
/// Convenience entry point for callers holding a full [`Formulation`]: the
/// participating fragments are resolved with
/// [`Formulation::fragment_search`] before clustering. Symbols with no
/// matching fragment are skipped.
#[instrument(skip_all, name = "formulation_aggregation_workflow")]
pub fn run_with_formulation(
    trajectory: &Trajectory,
    formulation: &Formulation,
    symbols: &[&str],
    config: &AggregationConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<f64>, ClusterError> {
    let fragments: Vec<Fragment> = formulation
        .fragment_search(symbols)
        .into_iter()
        .cloned()
        .collect();

    run(trajectory, &fragments, config, reporter)
}

/// Collates the point cloud to cluster for one frame: one representative
/// position per molecule (molecular method) or the raw fragment atom
/// coordinates (atomic method).
fn frame_positions(
    trajectory: &Trajectory,
    fragments: &[Fragment],
    fragment_indices: &[Vec<usize>],
    frame: usize,
    config: &AggregationConfig,
) -> Result<Vec<Point3<f64>>, ClusterError> {
    let frame_coords = trajectory.frame_coords(frame);
    let mut positions = Vec::new();

    match config.method {
        ClusterMethod::Molecular => {
            for (fragment, indices) in fragments.iter().zip(fragment_indices) {
                let fragment_coords: Vec<Point3<f64>> =
                    indices.iter().map(|&index| frame_coords[index]).collect();
                positions.extend(molecular_positions(
                    &fragment_coords,
                    fragment.atom_count(),
                    &fragment.masses(),
                    &CENTRE_SITES,
                )?);
            }
        }
        ClusterMethod::Atomic => {
            for indices in fragment_indices {
                positions.extend(indices.iter().map(|&index| frame_coords[index]));
            }
        }
    }

    Ok(positions)
}
