use crate::domain::model::CompoundRecord;
use crate::utils::error::LookupError;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn pubchem_base_url(&self) -> &str;
    fn request_timeout_seconds(&self) -> Option<u64>;
}

/// Remote source of compound records.
#[async_trait]
pub trait CompoundProvider: Send + Sync {
    /// All compounds the provider returns for `name`, in provider order.
    /// A successful response without compounds is an empty vector.
    async fn compounds_by_name(&self, name: &str) -> Result<Vec<CompoundRecord>, LookupError>;

    fn structure_image_url(&self, cid: u64) -> String;
}
