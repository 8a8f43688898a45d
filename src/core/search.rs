use crate::core::extractor::{extract_cas_number, extract_display_fields};
use crate::core::{CompoundProvider, FoundCompound, SearchOutcome, SearchPage};
use crate::utils::error::LookupError;
use std::sync::Arc;

/// Turns the optional `chemical` query parameter into a [`SearchPage`].
///
/// Stateless between calls: the only shared piece is the provider, which
/// holds nothing but a connection pool.
#[derive(Clone)]
pub struct SearchHandler {
    provider: Arc<dyn CompoundProvider>,
}

impl SearchHandler {
    pub fn new(provider: Arc<dyn CompoundProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle_search(&self, query: Option<&str>) -> SearchPage {
        let query = query.map(str::trim).unwrap_or_default();
        if query.is_empty() {
            tracing::debug!("No chemical query, rendering idle page");
            return SearchPage::idle();
        }

        tracing::info!("Looking up compound: {}", query);
        let outcome = match self.lookup(query).await {
            Ok(found) => {
                tracing::debug!("Found compound CID {}", found.record.cid());
                SearchOutcome::Found(Box::new(found))
            }
            Err(e) => {
                tracing::warn!(
                    "Compound lookup for '{}' failed: {} (category: {})",
                    query,
                    e,
                    e.category()
                );
                SearchOutcome::Failed(e)
            }
        };

        SearchPage {
            query: query.to_string(),
            outcome: Some(outcome),
        }
    }

    async fn lookup(&self, name: &str) -> Result<FoundCompound, LookupError> {
        let record = self
            .provider
            .compounds_by_name(name)
            .await?
            .into_iter()
            .next()
            .ok_or(LookupError::NotFound)?;

        let cas_number = extract_cas_number(&record.props);
        let fields = extract_display_fields(&record.props);
        let image_url = self.provider.structure_image_url(record.cid());

        Ok(FoundCompound {
            record,
            cas_number,
            fields,
            image_url,
        })
    }
}
