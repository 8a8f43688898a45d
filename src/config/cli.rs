use crate::adapters::pubchem::DEFAULT_PUBCHEM_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ffragrance")]
#[command(about = "Aroma chemical search backed by PubChem")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_PUBCHEM_BASE_URL)]
    pub pubchem_base_url: String,

    #[arg(long, help = "Timeout for PubChem requests; unset keeps the client default")]
    pub request_timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML config file; replaces the server and PubChem flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn pubchem_base_url(&self) -> &str {
        &self.pubchem_base_url
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.request_timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_url("pubchem_base_url", &self.pubchem_base_url)?;
        if let Some(timeout) = self.request_timeout_seconds {
            validate_positive_number("request_timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["ffragrance"]);
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8000);
        assert_eq!(config.pubchem_base_url(), DEFAULT_PUBCHEM_BASE_URL);
        assert_eq!(config.request_timeout_seconds(), None);
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig::parse_from([
            "ffragrance",
            "--host",
            "127.0.0.1",
            "--port",
            "3000",
            "--request-timeout-seconds",
            "10",
            "--verbose",
        ]);
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 3000);
        assert_eq!(config.request_timeout_seconds(), Some(10));
        assert!(config.verbose);
    }

    #[test]
    fn test_zero_timeout_fails_validation() {
        let config =
            CliConfig::parse_from(["ffragrance", "--request-timeout-seconds", "0"]);
        assert!(config.validate().is_err());
    }
}
