//! Illustrative command-line entry point.
//!
//! Prints the molecular formula and a property table for a compound. The
//! reusable surface lives in the library; this binary is a usage example.

use anyhow::Result;
use clap::Parser;
use pubchem_props::{Cid, CompoundProperty, PubChemClient};

#[derive(Parser)]
#[command(
    name = "pcprops",
    about = "Look up chemical properties of a compound in PubChem by CID",
    version
)]
struct Cli {
    /// PubChem CID to look up (2244 is aspirin)
    #[arg(default_value = "2244")]
    cid: Cid,

    /// Property to fetch; repeat for more (defaults to the full known set)
    #[arg(long = "property", short = 'p')]
    properties: Vec<CompoundProperty>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let properties = if cli.properties.is_empty() {
        CompoundProperty::known().to_vec()
    } else {
        cli.properties
    };

    let client = PubChemClient::new();

    let formula = client.molecular_formula_by_cid(cli.cid).await?;
    println!("The molecular formula of CID {} is {formula}", cli.cid);

    let record = client.properties_by_cid(cli.cid, &properties).await?;
    println!("\nProperties of CID {}:", cli.cid);
    for (name, value) in &record {
        println!("  {name}: {value}");
    }

    Ok(())
}
