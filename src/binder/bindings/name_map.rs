use std::collections::HashMap;

use crate::config::IdentifierCase;

/// Ordered output names of a derived column source plus a lookup from
/// (normalized) name to every position carrying it.
///
/// Duplicate names are kept: both positions stay reachable through `*` and a
/// lookup by the shared name reports all of them so the caller can refuse
/// the reference as ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMap {
    names: Vec<String>,
    positions: HashMap<String, Vec<usize>>,
    case: IdentifierCase,
}

impl NameMap {
    pub fn new(names: Vec<String>, case: IdentifierCase) -> Self {
        let mut positions: HashMap<String, Vec<usize>> = HashMap::with_capacity(names.len());
        for (pos, name) in names.iter().enumerate() {
            positions.entry(case.normalize(name).into_owned()).or_default().push(pos);
        }
        Self { names, positions, case }
    }

    /// Every position whose name matches, in declaration order.
    pub fn lookup(&self, name: &str) -> &[usize] {
        self.positions
            .get(&*self.case.normalize(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.lookup(name).is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name_at(&self, pos: usize) -> Option<&str> {
        self.names.get(pos).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn has_duplicates(&self) -> bool {
        self.positions.len() != self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_positions() {
        let map = NameMap::new(names(&["a", "b", "c"]), IdentifierCase::Sensitive);
        assert_eq!(map.lookup("b"), &[1]);
        assert!(map.lookup("B").is_empty());
        assert!(!map.has_duplicates());
    }

    #[test]
    fn test_duplicates_keep_every_position() {
        let map = NameMap::new(names(&["id", "x", "id"]), IdentifierCase::Sensitive);
        assert_eq!(map.lookup("id"), &[0, 2]);
        assert!(map.has_duplicates());
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_insensitive_folds_duplicates() {
        let map = NameMap::new(names(&["Id", "ID"]), IdentifierCase::Insensitive);
        assert_eq!(map.lookup("id"), &[0, 1]);
        assert_eq!(map.name_at(1), Some("ID"));
    }

    #[test]
    fn test_empty_name_never_matches() {
        let map = NameMap::new(names(&["a"]), IdentifierCase::Sensitive);
        assert!(!map.contains(""));
    }
}
