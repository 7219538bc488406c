pub mod extract;
pub mod parse;

use arbeitszeit_core::error::ArbeitszeitError;
use arbeitszeit_core::options::{self, ExtractOptions, FirstRowPolicy};
use std::path::PathBuf;

/// Options from the config file (or defaults), with CLI flags on top.
pub fn load_options(
    config: Option<PathBuf>,
    first_row_policy: Option<FirstRowPolicy>,
) -> Result<ExtractOptions, ArbeitszeitError> {
    let mut opts = match config {
        Some(path) => options::load_options(&path)?,
        None => ExtractOptions::default(),
    };

    if let Some(policy) = first_row_policy {
        opts.first_row_policy = policy;
    }

    Ok(opts)
}
