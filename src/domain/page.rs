use std::sync::Arc;

use dashmap::DashMap;

use crate::domain::error::DomainError;

/// In-memory model of the hosting page: a set of named display regions whose
/// content is replaced wholesale.
///
/// The handle is cheap to clone; all clones share the same regions. A replace
/// either installs the full markup or leaves the region untouched — there is
/// no partial write.
#[derive(Default, Clone)]
pub struct Page {
    regions: Arc<DashMap<String, String>>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            regions: Arc::new(DashMap::new()),
        }
    }

    /// Build a page carrying a single empty region.
    pub fn with_region(id: impl Into<String>) -> Self {
        let page = Self::new();
        page.add_region(id);
        page
    }

    /// Register an empty region. Re-registering an existing region keeps its
    /// current content.
    pub fn add_region(&self, id: impl Into<String>) {
        self.regions.entry(id.into()).or_default();
    }

    pub fn contains_region(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    /// Replace a region's content with the given markup.
    pub fn replace(&self, id: &str, markup: String) -> Result<(), DomainError> {
        match self.regions.get_mut(id) {
            Some(mut region) => {
                *region = markup;
                Ok(())
            }
            None => Err(DomainError::unknown_region(id)),
        }
    }

    /// Current content of a region, or `None` when the region does not exist.
    pub fn content(&self, id: &str) -> Option<String> {
        self.regions.get(id).map(|region| region.clone())
    }
}
