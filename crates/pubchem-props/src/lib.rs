//! pubchem-props: minimal PubChem PUG REST client for looking up chemical
//! properties of compounds by CID.

pub mod client;
pub mod query;
pub mod transport;
pub mod types;

pub use client::PubChemClient;
pub use query::{property_url, property_url_at, PUG_BASE};
pub use transport::{HttpTransport, PugTransport};
pub use types::*;
