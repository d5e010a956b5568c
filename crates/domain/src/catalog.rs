use std::collections::BTreeMap;

/// Metadata of one exercise of the externally supplied catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub categories: Vec<String>,
    pub equipment: Vec<String>,
    pub muscles: Vec<String>,
}

/// Read-only exercise lookup table, keyed by name.
///
/// The catalog is supplied by the embedding application and is never
/// validated here. History operations treat names missing from the catalog
/// like any other exercise without history.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.name.clone(), e))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn with_category(&self, category: &str) -> Vec<&CatalogEntry> {
        self.entries
            .values()
            .filter(|e| e.categories.iter().any(|c| c == category))
            .collect()
    }

    #[must_use]
    pub fn with_equipment(&self, equipment: &str) -> Vec<&CatalogEntry> {
        self.entries
            .values()
            .filter(|e| e.equipment.iter().any(|c| c == equipment))
            .collect()
    }

    #[must_use]
    pub fn with_muscle(&self, muscle: &str) -> Vec<&CatalogEntry> {
        self.entries
            .values()
            .filter(|e| e.muscles.iter().any(|m| m == muscle))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
