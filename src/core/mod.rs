pub mod extractor;
pub mod render;
pub mod search;

pub use crate::domain::model::{
    CompoundRecord, DisplayField, DisplayFields, FoundCompound, PropertyEntry, PugResponse,
    SearchOutcome, SearchPage, NOT_AVAILABLE,
};
pub use crate::domain::ports::{CompoundProvider, ConfigProvider};
pub use crate::utils::error::Result;
