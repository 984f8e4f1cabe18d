//! Java sources: generated classes and classes referenced by commands.
//!
//! [`JavaClass`] is the structural view of a source file that packaging
//! code works with. [`SourcePersistence`] is the seam between packaging code
//! and wherever sources live; [`FsSourcePersistence`] keeps them in the
//! usual `src/main/java` layout.

pub mod class;
pub mod names;
pub mod persistence;

pub use class::{JavaClass, JavaMethod, LifecycleHooks};
pub use persistence::{FsSourcePersistence, SourcePersistence};
