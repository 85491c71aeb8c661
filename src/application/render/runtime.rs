use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

/// Tracks display regions that currently have an in-flight render.
///
/// Without the guard, two overlapping invocations would race on the region's
/// content across their suspension points.
#[derive(Default, Clone)]
pub struct InFlightRenders {
    regions: Arc<DashMap<String, ()>>,
}

#[derive(Debug, Error)]
pub enum InFlightError {
    #[error("render already in progress for region `{region}`")]
    AlreadyRunning { region: String },
}

impl InFlightRenders {
    pub fn new() -> Self {
        Self {
            regions: Arc::new(DashMap::new()),
        }
    }

    pub fn acquire(&self, region: &str) -> Result<RenderGuard, InFlightError> {
        use dashmap::mapref::entry::Entry;

        match self.regions.entry(region.to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(());
                Ok(RenderGuard {
                    region: region.to_string(),
                    regions: Arc::clone(&self.regions),
                })
            }
            Entry::Occupied(_) => Err(InFlightError::AlreadyRunning {
                region: region.to_string(),
            }),
        }
    }
}

/// Releases the in-flight marker on drop, error paths included.
#[derive(Debug)]
pub struct RenderGuard {
    region: String,
    regions: Arc<DashMap<String, ()>>,
}

impl Drop for RenderGuard {
    fn drop(&mut self) {
        self.regions.remove(&self.region);
    }
}
