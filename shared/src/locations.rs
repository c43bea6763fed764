use crate::models::torneo::Torneo;
use std::collections::BTreeSet;

/// Distinct, non-empty `ubicacion` values of a collection, in lexicographic order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSet(BTreeSet<String>);

impl LocationSet {
    pub fn from_torneos(torneos: &[Torneo]) -> Self {
        Self(
            torneos
                .iter()
                .filter(|t| !t.ubicacion.is_empty())
                .map(|t| t.ubicacion.clone())
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, ubicacion: &str) -> bool {
        self.0.contains(ubicacion)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
