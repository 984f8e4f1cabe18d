//! Manifest instructions: merging them into plugin configurations and
//! deriving the values that go into them.

pub mod classpath;
pub mod merge;

pub use classpath::{derive_bundle_classpath, extend_classpath, web_bundle_classpath};
pub use merge::{Instruction, MergeOutcome, append_instruction, merge_instruction};
