use super::fragment::Fragment;

/// A chemical formulation: the set of fragments present in one simulated
/// sample.
///
/// The formulation arithmetic itself (price, mass fractions) lives outside
/// this library; the clustering workflow only needs to resolve which fragments
/// participate in micelle formation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Formulation {
    fragments: Vec<Fragment>,
}

impl Formulation {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Resolves fragments by species symbol, in the order the symbols are
    /// given. Unknown symbols are skipped.
    pub fn fragment_search(&self, symbols: &[&str]) -> Vec<&Fragment> {
        symbols
            .iter()
            .filter_map(|&symbol| {
                self.fragments
                    .iter()
                    .find(|fragment| fragment.symbol == symbol)
            })
            .collect()
    }
}
