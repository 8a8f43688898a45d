pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::pubchem::PubChemClient;
pub use crate::core::{render::PageRenderer, search::SearchHandler};
pub use server::{router, serve, AppState};
pub use utils::error::{FragranceError, LookupError, Result};
