//! `Bundle-ClassPath` derivation for web bundles.
//!
//! Compile and runtime jars (and jars without a scope) are embedded under
//! `WEB-INF/lib`; everything else stays off the bundle classpath. Entries
//! appear in dependency-list order.

use crate::constants::{WEB_CLASSES_ENTRY, WEB_LIB_DIR};
use crate::models::{Dependency, PackagingType, Scope};

const SEPARATOR: &str = ", ";

/// True if the dependency ends up inside the bundle.
pub fn is_embedded(dependency: &Dependency) -> bool {
    let scope_ok = matches!(dependency.scope, None | Some(Scope::Compile | Scope::Runtime));
    scope_ok && dependency.packaging == PackagingType::Jar
}

/// `WEB-INF/lib/<artifactId>-<version>.jar`, or `<artifactId>.jar` when unversioned.
pub fn embedded_entry(dependency: &Dependency) -> String {
    match &dependency.version {
        Some(version) => format!("{WEB_LIB_DIR}/{}-{version}.jar", dependency.artifact_id),
        None => format!("{WEB_LIB_DIR}/{}.jar", dependency.artifact_id),
    }
}

/// Classpath entries for `dependencies`, joined with `", "`.
///
/// Returns an empty string when nothing qualifies.
pub fn derive_bundle_classpath(dependencies: &[Dependency]) -> String {
    dependencies
        .iter()
        .filter(|d| is_embedded(d))
        .map(embedded_entry)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Append `derived` to `prior`. An empty `derived` leaves `prior` as is.
pub fn extend_classpath(prior: &str, derived: &str) -> String {
    match (prior.is_empty(), derived.is_empty()) {
        (_, true) => prior.to_string(),
        (true, false) => derived.to_string(),
        (false, false) => format!("{prior}{SEPARATOR}{derived}"),
    }
}

/// Full classpath of a web bundle: `WEB-INF/classes` followed by the embedded jars.
pub fn web_bundle_classpath(dependencies: &[Dependency]) -> String {
    extend_classpath(WEB_CLASSES_ENTRY, &derive_bundle_classpath(dependencies))
}
