//! Detects imports whose default name would collide with the injected
//! error-wrapping library.

use super::WRAP_LIBRARY_PATH;
use crate::core::ImportSpec;

const CONFLICTING_SUFFIX: &str = "errors";

/// True if some import other than the wrapping library itself has a path
/// ending in `errors`, so that adding the library unaliased would clash.
pub fn has_dependency_name_conflict(imports: &[ImportSpec]) -> bool {
    imports.iter().any(|spec| {
        let path = spec.unquoted_path();
        path.ends_with(CONFLICTING_SUFFIX) && path != WRAP_LIBRARY_PATH
    })
}
