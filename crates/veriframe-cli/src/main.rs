//! veriframe - image tampering detection from the command line.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    veriframe_cli::run().await
}
