use serde::Deserialize;

/// A single atom (or coarse-grained bead) within a fragment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FragmentAtom {
    /// The site name within the fragment (e.g., "C1", "NA").
    pub name: String,
    /// The atomic or bead mass in atomic mass units.
    pub mass: f64,
}

/// A reusable rigid sub-molecular unit with a fixed atom composition, such as
/// one surfactant tail or one counter-ion.
///
/// The `symbol` identifies the species family in trajectory molecule
/// references (digit-stripped form, see
/// [`species_family`](super::labels::species_family)).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fragment {
    /// The species symbol used to select trajectory columns (e.g., "PS").
    pub symbol: String,
    /// The atoms making up one instance of this fragment, in site order.
    pub atoms: Vec<FragmentAtom>,
}

impl Fragment {
    pub fn new(symbol: impl Into<String>, atoms: Vec<FragmentAtom>) -> Self {
        Self {
            symbol: symbol.into(),
            atoms,
        }
    }

    /// Number of sites in one instance of this fragment.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Per-site masses, in site order.
    pub fn masses(&self) -> Vec<f64> {
        self.atoms.iter().map(|atom| atom.mass).collect()
    }
}
