use async_trait::async_trait;
use quiz_core::model::QuestionBank;

use crate::records::{ChapterRecord, records_into_bank};
use crate::repository::{QuestionRepository, StorageError};

/// Question corpus served as a static JSON resource.
#[derive(Debug, Clone)]
pub struct HttpRepository {
    client: reqwest::Client,
    url: String,
}

impl HttpRepository {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuestionRepository for HttpRepository {
    async fn fetch_bank(&self) -> Result<QuestionBank, StorageError> {
        tracing::debug!(url = %self.url, "fetching question corpus");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, %status, "question corpus request failed");
            return Err(StorageError::Unavailable(format!(
                "request failed with status {status}"
            )));
        }

        let records: Vec<ChapterRecord> = response
            .json()
            .await
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        records_into_bank(records)
    }
}
