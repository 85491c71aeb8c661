use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::application::source::{DocumentSource, SourceError};

/// HTTP adapter for [`DocumentSource`], resolving document names against a
/// fixed base URL.
pub struct HttpDocumentSource {
    client: Client,
    base: Url,
}

impl HttpDocumentSource {
    pub fn new(base: Url) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .build()
            .map_err(SourceError::from_transport)?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("foglio/", env!("CARGO_PKG_VERSION"))
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch_text(&self, name: &str) -> Result<String, SourceError> {
        let url = self.base.join(name).map_err(SourceError::from_transport)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(SourceError::from_transport)?;

        // The status code is not inspected: any response that arrives with a
        // readable text body is handed on to the converter.
        response.text().await.map_err(SourceError::from_transport)
    }
}
