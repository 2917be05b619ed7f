//! Query URL construction for the PUG REST compound property endpoint.

use crate::types::{Cid, CompoundProperty, PubChemError, PubChemResult};

/// Base URL of the public PubChem PUG REST API.
pub const PUG_BASE: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";

/// Build the property lookup URL for `cid` against the public PubChem API.
///
/// Property tokens are joined with commas in the order given; nothing is
/// deduplicated or sorted.
pub fn property_url(cid: Cid, properties: &[CompoundProperty]) -> PubChemResult<String> {
    property_url_at(PUG_BASE, cid, properties)
}

/// Build the property lookup URL against an explicit endpoint base.
///
/// Used by the client to target a configured base, and by tests to point at
/// a local mock server. A trailing slash on `base` is tolerated.
pub fn property_url_at(
    base: &str,
    cid: Cid,
    properties: &[CompoundProperty],
) -> PubChemResult<String> {
    if properties.is_empty() {
        return Err(PubChemError::InvalidArgument(format!(
            "Expected at least one property name. Received: {properties:?}."
        )));
    }

    let joined = properties
        .iter()
        .map(CompoundProperty::as_str)
        .collect::<Vec<_>>()
        .join(",");

    Ok(format!(
        "{}/compound/cid/{cid}/property/{joined}/JSON",
        base.trim_end_matches('/')
    ))
}
