use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("coordinate count {n_coords} is not a multiple of the {n_sites}-site molecule size")]
    IndivisibleSites { n_coords: usize, n_sites: usize },

    #[error("expected {n_sites} site masses, got {n_masses}")]
    MassCount { n_sites: usize, n_masses: usize },

    #[error("centre site index {index} is out of range for a {n_sites}-site molecule")]
    SiteOutOfRange { index: usize, n_sites: usize },
}

/// Reduces a flat per-atom coordinate slice to one representative position per
/// molecule.
///
/// `coords` holds contiguous molecules of `n_sites` atoms each; `masses` gives
/// the per-site masses and `com_sites` selects which sites contribute to the
/// mass-weighted centre. An empty `com_sites` uses every site, i.e. the full
/// centre of mass.
pub fn molecular_positions(
    coords: &[Point3<f64>],
    n_sites: usize,
    masses: &[f64],
    com_sites: &[usize],
) -> Result<Vec<Point3<f64>>, GeometryError> {
    if n_sites == 0 || coords.len() % n_sites != 0 {
        return Err(GeometryError::IndivisibleSites {
            n_coords: coords.len(),
            n_sites,
        });
    }
    if masses.len() != n_sites {
        return Err(GeometryError::MassCount {
            n_sites,
            n_masses: masses.len(),
        });
    }

    let all_sites: Vec<usize> = (0..n_sites).collect();
    let sites = if com_sites.is_empty() {
        all_sites.as_slice()
    } else {
        com_sites
    };

    for &site in sites {
        if site >= n_sites {
            return Err(GeometryError::SiteOutOfRange {
                index: site,
                n_sites,
            });
        }
    }

    let total_mass: f64 = sites.iter().map(|&site| masses[site]).sum();

    let positions = coords
        .chunks_exact(n_sites)
        .map(|molecule| {
            let weighted = sites
                .iter()
                .map(|&site| molecule[site].coords * masses[site])
                .sum::<nalgebra::Vector3<f64>>();
            Point3::from(weighted / total_mass)
        })
        .collect();

    Ok(positions)
}
