use std::sync::Arc;

use crate::adapters::pubchem::PubChemClient;
use crate::core::{render::PageRenderer, search::SearchHandler, CompoundProvider, ConfigProvider};
use crate::utils::error::Result;

pub struct AppState {
    pub search: SearchHandler,
    pub renderer: PageRenderer,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompoundProvider>) -> Arc<Self> {
        Arc::new(Self {
            search: SearchHandler::new(provider),
            renderer: PageRenderer::new(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Arc<Self>> {
        let client = PubChemClient::from_config(config)?;
        Ok(Self::new(Arc::new(client)))
    }
}
