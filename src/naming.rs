//! Organism name normalization.
//!
//! Census experiments are stored under snake-cased organism names
//! (`homo_sapiens`, `mus_musculus`). Callers usually type the scientific
//! name instead, so lookups go through [`experiment_name`] first.

/// Convert an organism name into the key its experiment is stored under.
///
/// Every run of one or more ASCII spaces becomes a single `_` and the
/// result is lowercased. Tabs, newlines and existing underscores are left
/// alone, and nothing is trimmed.
///
/// # Example
///
/// ```rust
/// use soma_census::naming::experiment_name;
///
/// assert_eq!(experiment_name("Homo sapiens"), "homo_sapiens");
/// assert_eq!(experiment_name("Homo   sapiens"), "homo_sapiens");
/// assert_eq!(experiment_name("homo_sapiens"), "homo_sapiens");
/// ```
#[must_use]
pub fn experiment_name(organism: &str) -> String {
    let mut name = String::with_capacity(organism.len());
    let mut in_space_run = false;

    for ch in organism.chars() {
        if ch == ' ' {
            if !in_space_run {
                name.push('_');
                in_space_run = true;
            }
        } else {
            in_space_run = false;
            name.push(ch);
        }
    }

    // Whole-string lowercasing so context-sensitive mappings (final sigma) apply
    name.to_lowercase()
}
