//! Template loading and placeholder substitution.
//!
//! Substitution is literal token replacement over a declared
//! placeholder set. No recursion, no escaping: a placeholder value must
//! never itself contain a placeholder token. Both the on-disk solution
//! template and the embedded module boilerplate go through
//! [`substitute`], so there is exactly one substitution mechanism.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::scaffold::{Filesystem, ScaffoldError, ScaffoldResult};

/// Placeholder token for the project name, as used by the engine's
/// template resources.
pub const PROJECT_NAME_TOKEN: &str = "$PROJECT_NAME";

/// Replace every occurrence of each placeholder token with its mapped
/// value. Unmatched tokens in the body are left verbatim.
///
/// The map is a `BTreeMap` so the pass order is deterministic, though
/// output is independent of it as long as no value contains a token.
pub fn substitute(body: &str, placeholders: &BTreeMap<String, String>) -> String {
    let mut rendered = body.to_string();
    for (token, value) in placeholders {
        rendered = rendered.replace(token.as_str(), value);
    }
    rendered
}

/// Load a template resource through the filesystem port.
///
/// A missing or unreadable template is reported as
/// [`ScaffoldError::TemplateNotFound`]; templates are engine-supplied
/// and their absence means a broken installation, not a user error.
pub fn load(fs: &dyn Filesystem, path: &Path) -> ScaffoldResult<String> {
    debug!(template = %path.display(), "loading template");
    fs.read_to_string(path)
        .map_err(|_| ScaffoldError::TemplateNotFound {
            path: path.to_path_buf(),
        })
}

/// Single-token convenience: the project-name mapping used by every
/// name-parameterized template in this engine.
pub fn project_name_placeholders(sanitized_name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(PROJECT_NAME_TOKEN.to_string(), sanitized_name.to_string())])
}
