use crate::core::{CompoundProvider, CompoundRecord, ConfigProvider, PugResponse};
use crate::utils::error::{FragranceError, LookupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_PUBCHEM_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";

/// PUG REST client. One pooled `reqwest::Client` is shared by every request.
#[derive(Debug, Clone)]
pub struct PubChemClient {
    base_url: Url,
    client: Client,
}

impl PubChemClient {
    pub fn new(base_url: &str, timeout_seconds: Option<u64>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| FragranceError::InvalidConfigValueError {
            field: "pubchem.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FragranceError::InvalidConfigValueError {
                field: "pubchem.base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| FragranceError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self { base_url, client })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.pubchem_base_url(), config.request_timeout_seconds())
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` only accepts base URLs, whose path segments are always writable
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `{base}/compound/name/{name}/JSON`, with `name` encoded as one segment.
    pub fn compound_by_name_url(&self, name: &str) -> Url {
        self.endpoint(&["compound", "name", name, "JSON"])
    }
}

#[async_trait]
impl CompoundProvider for PubChemClient {
    async fn compounds_by_name(
        &self,
        name: &str,
    ) -> std::result::Result<Vec<CompoundRecord>, LookupError> {
        let url = self.compound_by_name_url(name);

        tracing::debug!("Making PubChem request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("PubChem response status: {}", status);
        if !status.is_success() {
            return Err(LookupError::UpstreamFailure {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: PugResponse = serde_json::from_slice(&body)?;
        tracing::debug!("PubChem returned {} compounds", parsed.compounds.len());

        Ok(parsed.compounds)
    }

    fn structure_image_url(&self, cid: u64) -> String {
        let cid = cid.to_string();
        self.endpoint(&["compound", "cid", &cid, "PNG"]).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookup_url() {
        let client = PubChemClient::new(DEFAULT_PUBCHEM_BASE_URL, None).unwrap();
        let url = client.compound_by_name_url("linalool");
        assert_eq!(
            url.as_str(),
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/linalool/JSON"
        );
    }

    #[test]
    fn test_name_is_encoded_as_single_segment() {
        let client = PubChemClient::new(DEFAULT_PUBCHEM_BASE_URL, None).unwrap();
        let url = client.compound_by_name_url("rose oxide/cis");
        assert_eq!(
            url.as_str(),
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/rose%20oxide%2Fcis/JSON"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_is_tolerated() {
        let client = PubChemClient::new("http://127.0.0.1:9000/", Some(5)).unwrap();
        let url = client.compound_by_name_url("vanillin");
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/compound/name/vanillin/JSON");
    }

    #[test]
    fn test_structure_image_url() {
        let client = PubChemClient::new(DEFAULT_PUBCHEM_BASE_URL, None).unwrap();
        assert_eq!(
            client.structure_image_url(6549),
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/cid/6549/PNG"
        );
    }

    #[test]
    fn test_rejects_non_base_url_at_construction() {
        let err = PubChemClient::new("mailto:someone@example.com", None).unwrap_err();
        assert!(matches!(
            err,
            FragranceError::InvalidConfigValueError { ref field, .. } if field == "pubchem.base_url"
        ));
        assert!(PubChemClient::new("not a url", None).is_err());
    }

    #[test]
    fn test_urls_keep_base_path_prefix() {
        let client = PubChemClient::new("http://mirror.test/pubchem/rest/pug", None).unwrap();
        assert_eq!(
            client.compound_by_name_url("linalool").as_str(),
            "http://mirror.test/pubchem/rest/pug/compound/name/linalool/JSON"
        );
        assert_eq!(
            client.structure_image_url(1183),
            "http://mirror.test/pubchem/rest/pug/compound/cid/1183/PNG"
        );
    }
}
