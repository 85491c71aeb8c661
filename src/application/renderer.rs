use std::sync::Arc;

use tracing::{error, warn};

use crate::application::render::{Converter, InFlightError, InFlightRenders, RenderError};
use crate::application::source::DocumentSource;
use crate::domain::page::Page;

/// Fetches the configured document, converts it, and installs the markup into
/// the page's display region.
///
/// Failures never escape [`DocumentRenderer::render`]: they are logged once
/// and the region is left untouched. Overlapping invocations for the same
/// region are rejected.
pub struct DocumentRenderer {
    source: Arc<dyn DocumentSource>,
    converter: Arc<dyn Converter>,
    page: Page,
    document: String,
    region: String,
    inflight: InFlightRenders,
}

impl DocumentRenderer {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        converter: Arc<dyn Converter>,
        page: Page,
        document: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            source,
            converter,
            page,
            document: document.into(),
            region: region.into(),
            inflight: InFlightRenders::new(),
        }
    }

    /// Run one render pass. The region is updated only when retrieval and
    /// conversion both succeed.
    pub async fn render(&self) {
        let _guard = match self.inflight.acquire(&self.region) {
            Ok(guard) => guard,
            Err(InFlightError::AlreadyRunning { region }) => {
                warn!(
                    target = "application::renderer",
                    region = %region,
                    "render already in progress, skipping"
                );
                return;
            }
        };

        if let Err(err) = self.try_render().await {
            error!(
                target = "application::renderer",
                document = %self.document,
                region = %self.region,
                error = %err,
                "document render failed"
            );
        }
    }

    async fn try_render(&self) -> Result<(), RenderError> {
        let markdown = self.source.fetch_text(&self.document).await?;
        let markup = self.converter.convert(&markdown)?;
        self.page.replace(&self.region, markup)?;
        Ok(())
    }
}
