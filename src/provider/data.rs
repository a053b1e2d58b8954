//! provider::data
//!
//! The opaque value the provider hands to its data sources, and the one
//! place that checks it actually carries a repository handle.

use std::any::Any;
use std::sync::Arc;

use crate::core::diagnostics::Diagnostics;
use crate::git::Git;

/// Opaque data produced by provider configure and passed to every data
/// source. The host treats it as a black box.
pub type ProviderData = Arc<dyn Any + Send + Sync>;

/// Wrap an opened repository as provider data.
pub fn repository_data(git: Git) -> ProviderData {
    Arc::new(git)
}

/// Extract the shared repository handle from provider data.
///
/// Returns `None` without a diagnostic when `data` is absent: the host
/// may configure data sources before the provider itself is configured.
/// Data of any other kind is a contract violation between host and
/// plugin and is reported as an error.
pub fn repository_from(data: Option<&ProviderData>, diags: &mut Diagnostics) -> Option<Arc<Git>> {
    let data = data?;

    match Arc::clone(data).downcast::<Git>() {
        Ok(git) => Some(git),
        Err(_) => {
            diags.add_error(
                "Unexpected Data Source Configure Type",
                format!(
                    "Expected an opened git repository ({}), got provider data of a \
                     different type. Please report this issue to the provider developers.",
                    std::any::type_name::<Git>()
                ),
            );
            None
        }
    }
}

/// Get the configured handle or report that the data source was never
/// configured.
pub(crate) fn require_repository<'a>(
    repo: &'a Option<Arc<Git>>,
    diags: &mut Diagnostics,
) -> Option<&'a Git> {
    match repo {
        Some(git) => Some(git.as_ref()),
        None => {
            diags.add_error(
                "Unconfigured Data Source",
                "The data source was read before the provider supplied a git repository. \
                 Please report this issue to the provider developers.",
            );
            None
        }
    }
}
