//! Property lookup facade: URL building, fetch, and envelope extraction.

use crate::query;
use crate::transport::{HttpTransport, PugTransport};
use crate::types::{Cid, CompoundProperty, PropertyMap, PubChemError, PubChemResult};
use serde::Deserialize;

/// Response wrapper returned by the property endpoint:
/// `{"PropertyTable": {"Properties": [ {..record..} ]}}`.
#[derive(Debug, Deserialize)]
struct PropertyEnvelope {
    #[serde(rename = "PropertyTable")]
    property_table: PropertyTable,
}

#[derive(Debug, Deserialize)]
struct PropertyTable {
    #[serde(rename = "Properties")]
    properties: Vec<PropertyMap>,
}

/// Client for the PubChem compound property endpoint.
///
/// Holds no state across calls; each lookup is a single linear pipeline of
/// build URL, GET, extract. Errors from any step propagate unmodified.
pub struct PubChemClient<T = HttpTransport> {
    transport: T,
    base: String,
}

impl PubChemClient<HttpTransport> {
    /// Client against the public PubChem API with the default transport.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for PubChemClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PugTransport> PubChemClient<T> {
    /// Client with an injected transport collaborator.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            base: query::PUG_BASE.to_string(),
        }
    }

    /// Point the client at a different endpoint base (e.g. a local mock).
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.base = base.trim_end_matches('/').to_string();
        self
    }

    /// Look up one or more chemical properties of a compound.
    ///
    /// Returns a flat mapping from property name to value, plus the `CID`
    /// entry the service echoes back.
    pub async fn properties_by_cid(
        &self,
        cid: Cid,
        properties: &[CompoundProperty],
    ) -> PubChemResult<PropertyMap> {
        let url = query::property_url_at(&self.base, cid, properties)?;
        self.fetch_properties(&url).await
    }

    /// Look up the conventional representation of a compound's molecular
    /// formula, e.g. `C9H8O4` for aspirin.
    pub async fn molecular_formula_by_cid(&self, cid: Cid) -> PubChemResult<String> {
        let record = self
            .properties_by_cid(cid, &[CompoundProperty::MolecularFormula])
            .await?;
        let formula = record
            .get(CompoundProperty::MolecularFormula.as_str())
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                PubChemError::Envelope("record has no MolecularFormula value".to_string())
            })?;
        Ok(formula.to_string())
    }

    /// GET an already-built query URL and extract the single property record.
    ///
    /// Only the first element of the `Properties` array is consumed; a CID
    /// lookup returns exactly one record.
    pub async fn fetch_properties(&self, url: &str) -> PubChemResult<PropertyMap> {
        let body = self.transport.get_json(url).await?;
        let envelope: PropertyEnvelope = serde_json::from_value(body)?;

        let mut records = envelope.property_table.properties;
        if records.is_empty() {
            return Err(PubChemError::Envelope(
                "Properties array is empty".to_string(),
            ));
        }
        Ok(records.swap_remove(0))
    }
}
