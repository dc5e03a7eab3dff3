//! TimeoutRetrieval — bound the time one concept fetch may take.

use annoscope_core::{RetrievalClient, RetrievalError, ResultSet, Taxonomy};
use async_trait::async_trait;
use std::time::Duration;

/// Wraps a client so that a fetch running longer than `budget` resolves to
/// [`RetrievalError::Timeout`]. The inner future is dropped on expiry.
#[derive(Debug, Clone)]
pub struct TimeoutRetrieval<C> {
    inner: C,
    budget: Duration,
}

impl<C> TimeoutRetrieval<C> {
    pub fn new(inner: C, budget: Duration) -> Self {
        Self { inner, budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

#[async_trait]
impl<C: RetrievalClient> RetrievalClient for TimeoutRetrieval<C> {
    async fn fetch(&self, taxonomy: Taxonomy, concept_uri: &str) -> Result<ResultSet, RetrievalError> {
        match tokio::time::timeout(self.budget, self.inner.fetch(taxonomy, concept_uri)).await {
            Ok(result) => result,
            Err(_elapsed) => {
                tracing::warn!(concept_uri, budget = ?self.budget, "retrieval timed out");
                Err(RetrievalError::Timeout(self.budget))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sleepy(Duration);

    #[async_trait]
    impl RetrievalClient for Sleepy {
        async fn fetch(&self, _taxonomy: Taxonomy, _concept_uri: &str) -> Result<ResultSet, RetrievalError> {
            tokio::time::sleep(self.0).await;
            Ok(Vec::new())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_fetch_times_out() {
        let client = TimeoutRetrieval::new(Sleepy(Duration::from_secs(60)), Duration::from_secs(5));
        let err = client.fetch(Taxonomy::Taxon, "t:1").await.unwrap_err();
        assert_eq!(err, RetrievalError::Timeout(Duration::from_secs(5)));
    }

    #[tokio::test(start_paused = true)]
    async fn fast_fetch_passes_through() {
        let client = TimeoutRetrieval::new(Sleepy(Duration::from_millis(10)), Duration::from_secs(5));
        assert_eq!(client.budget(), Duration::from_secs(5));
        assert!(client.fetch(Taxonomy::Taxon, "t:1").await.unwrap().is_empty());
    }
}
