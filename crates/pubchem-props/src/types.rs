//! Core data types for compound property lookup.

use std::fmt;
use std::str::FromStr;

/// A PubChem compound identifier (e.g. 2244 for aspirin, 5793 for glucose).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cid(u64);

impl Cid {
    /// Wrap a raw compound identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric identifier.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Cid {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cid {
    type Err = PubChemError;

    /// Parse a CID from user-supplied text. Anything non-numeric is rejected.
    fn from_str(s: &str) -> PubChemResult<Self> {
        s.trim()
            .parse::<u64>()
            .map(Cid)
            .map_err(|_| PubChemError::InvalidArgument("The CID must be numeric.".to_string()))
    }
}

/// A chemical property that can be queried in PubChem.
///
/// The named variants cover the commonly used tokens; PUG REST accepts many
/// more, which pass through verbatim as [`CompoundProperty::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompoundProperty {
    Charge,
    ExactMass,
    InChIKey,
    IupacName,
    MolecularFormula,
    MolecularWeight,
    /// Any other property name accepted by the service, passed through as-is.
    Other(String),
}

impl CompoundProperty {
    /// The token as it appears in the query URL and the response record.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Charge => "Charge",
            Self::ExactMass => "ExactMass",
            Self::InChIKey => "InChIKey",
            Self::IupacName => "IUPACName",
            Self::MolecularFormula => "MolecularFormula",
            Self::MolecularWeight => "MolecularWeight",
            Self::Other(name) => name,
        }
    }

    /// All properties this enumeration knows by name.
    pub fn known() -> [CompoundProperty; 6] {
        [
            Self::Charge,
            Self::ExactMass,
            Self::InChIKey,
            Self::IupacName,
            Self::MolecularFormula,
            Self::MolecularWeight,
        ]
    }
}

impl fmt::Display for CompoundProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompoundProperty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Charge" => Self::Charge,
            "ExactMass" => Self::ExactMass,
            "InChIKey" => Self::InChIKey,
            "IUPACName" => Self::IupacName,
            "MolecularFormula" => Self::MolecularFormula,
            "MolecularWeight" => Self::MolecularWeight,
            other => Self::Other(other.to_string()),
        })
    }
}

/// Flat mapping from property name to its JSON value, one entry per requested
/// property plus the `CID` entry echoed back by the service.
pub type PropertyMap = serde_json::Map<String, serde_json::Value>;

/// Errors that can occur during property lookup.
#[derive(thiserror::Error, Debug)]
pub enum PubChemError {
    /// Bad input detected locally before any request is made.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport failure or non-success HTTP status, straight from reqwest.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not the expected JSON envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structurally valid JSON that breaks the envelope contract.
    #[error("Unexpected response envelope: {0}")]
    Envelope(String),
}

/// Convenience result type.
pub type PubChemResult<T> = Result<T, PubChemError>;
