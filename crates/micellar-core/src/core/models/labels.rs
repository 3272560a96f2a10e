/// Strips ASCII digits from a molecule reference label, leaving the species
/// family symbol.
///
/// Trajectory labels disambiguate molecule instances by embedding a count in
/// the species symbol (`"1PS"`, `"2PS"`, ...). This function is the single
/// home of that convention: grouping code compares the undigitized form and
/// must not re-implement the stripping rule.
pub fn species_family(label: &str) -> String {
    label.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Returns the ordered set of unique labels in `labels`, excluding the
/// `background` value.
pub fn label_set(labels: &[i64], background: i64) -> Vec<i64> {
    let mut set: Vec<i64> = labels
        .iter()
        .copied()
        .filter(|&label| label != background)
        .collect();
    set.sort_unstable();
    set.dedup();
    set
}

/// Counts the occurrences of `value` in `labels`.
pub fn label_count(labels: &[i64], value: i64) -> usize {
    labels.iter().filter(|&&label| label == value).count()
}
