//! schema command - Print every schema the provider exposes

use anyhow::Result;

use crate::cli::Context;
use crate::host;
use crate::provider::GitLocalProvider;
use crate::ui::output;

/// Print the provider and data source schemas as JSON.
pub fn schema(ctx: &Context) -> Result<()> {
    let provider = GitLocalProvider::new(env!("CARGO_PKG_VERSION"));
    let document = host::schemas(&provider);
    output::debug(
        format!("{} data sources", document.data_sources.len()),
        ctx.verbosity,
    );
    output::json(&document)?;
    Ok(())
}
