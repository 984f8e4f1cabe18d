//! Well-known names used throughout the bundle packaging code.
//!
//! Coordinates of the bundle tool and of the libraries the installer knows
//! about, the manifest instruction names the merger writes, and the fixed
//! build-phase binding attached to every bundle plugin.

/// Group id of the bundle-building Maven plugin.
pub const BUNDLE_PLUGIN_GROUP: &str = "org.apache.felix";

/// Artifact id of the bundle-building Maven plugin.
pub const BUNDLE_PLUGIN_ARTIFACT: &str = "maven-bundle-plugin";

/// Name of the container element holding manifest instructions.
pub const INSTRUCTIONS: &str = "instructions";

/// Singular wrapper written by older versions of `add-service-component`.
///
/// Only ever appended to, never created.
pub const LEGACY_INSTRUCTION_WRAPPER: &str = "instruction";

/// Root element name of a plugin configuration.
pub const CONFIGURATION: &str = "configuration";

pub const BUNDLE_ACTIVATOR: &str = "Bundle-Activator";
pub const SERVICE_COMPONENT: &str = "Service-Component";
pub const WEB_CONTEXT_PATH: &str = "Web-ContextPath";
pub const BUNDLE_CLASSPATH: &str = "Bundle-ClassPath";
pub const META_PERSISTENCE: &str = "Meta-Persistence";
pub const IMPORT_PACKAGE: &str = "Import-Package";
pub const SUPPORTED_PROJECT_TYPES: &str = "supportedProjectTypes";
pub const SUPPORTED_PROJECT_TYPE: &str = "supportedProjectType";

/// Classpath entry for the compiled classes of a web bundle.
pub const WEB_CLASSES_ENTRY: &str = "WEB-INF/classes";

/// Directory embedded jars are placed in inside a web bundle.
pub const WEB_LIB_DIR: &str = "WEB-INF/lib";

/// Location of the JPA descriptor announced through `Meta-Persistence`.
pub const PERSISTENCE_DESCRIPTOR: &str = "META-INF/persistence.xml";

/// Packages imported when the operator asks for servlet imports.
pub const SERVLET_IMPORTS: &str = "javax.servlet,javax.servlet.http";

/// Execution id of the manifest binding.
pub const MANIFEST_EXECUTION_ID: &str = "bundle-manifest";

/// Build phase the manifest goal is bound to.
pub const MANIFEST_EXECUTION_PHASE: &str = "process-classes";

/// Goal producing `MANIFEST.MF`.
pub const MANIFEST_GOAL: &str = "manifest";

/// File name of the project descriptor inside a project directory.
pub const PROJECT_DESCRIPTOR: &str = "osgi-project.toml";

/// Root of generated Java sources, relative to the project directory.
pub const JAVA_SOURCE_ROOT: &str = "src/main/java";

/// Marker directory for projects carrying web resources.
pub const WEBAPP_DIR: &str = "src/main/webapp";

/// Marker file for projects carrying a JPA persistence unit.
pub const PERSISTENCE_MARKER: &str = "src/main/resources/META-INF/persistence.xml";

/// Environment variable overriding the global configuration location.
pub const CONFIG_PATH_ENV: &str = "OSGI_CONFIG_PATH";
