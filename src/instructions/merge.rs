//! Merging manifest instructions into plugin configurations.
//!
//! Instructions only ever get appended. Existing entries, including other
//! instructions and any sibling configuration elements, are never rewritten
//! or reordered.

use tracing::{debug, warn};

use crate::constants::{BUNDLE_ACTIVATOR, INSTRUCTIONS, LEGACY_INSTRUCTION_WRAPPER, SERVICE_COMPONENT};
use crate::models::ConfigElement;

/// A single manifest instruction, e.g. `Bundle-Activator = com.acme.osgi.Activator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub name: String,
    pub text: String,
}

impl Instruction {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn bundle_activator(qualified_name: impl Into<String>) -> Self {
        Self::new(BUNDLE_ACTIVATOR, qualified_name)
    }

    pub fn service_component(qualified_name: impl Into<String>) -> Self {
        Self::new(SERVICE_COMPONENT, qualified_name)
    }

    // Older configurations may carry `Service-Component` entries under a
    // singular `instruction` wrapper.
    fn accepts_legacy_wrapper(&self) -> bool {
        self.name == SERVICE_COMPONENT
    }

    fn to_element(&self) -> ConfigElement {
        ConfigElement::new(&self.name).with_text(&self.text)
    }
}

/// What [`merge_instruction`] did to the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No container existed; one was created holding only the new instruction.
    CreatedContainer,
    /// The instruction was appended as the last child of an existing container.
    Appended,
    /// An identical instruction was already there; nothing changed.
    AlreadyPresent,
}

/// Merge `instruction` into a plugin `configuration` root.
///
/// Appends to the existing `instructions` container, or creates it when it
/// is missing. `Service-Component` falls back to a legacy `instruction`
/// wrapper if that is the only container present.
pub fn merge_instruction(configuration: &mut ConfigElement, instruction: &Instruction) -> MergeOutcome {
    match container_mut(configuration, instruction.accepts_legacy_wrapper()) {
        Some(container) => append_instruction(container, instruction),
        None => {
            debug!("Creating '{}' container for {}", INSTRUCTIONS, instruction.name);
            configuration
                .add_child(ConfigElement::new(INSTRUCTIONS))
                .add_child(instruction.to_element());
            MergeOutcome::CreatedContainer
        }
    }
}

/// Append `instruction` to an instructions container.
///
/// An entry with the same name and text is not added a second time.
pub fn append_instruction(container: &mut ConfigElement, instruction: &Instruction) -> MergeOutcome {
    let duplicate = container.child_texts(&instruction.name).any(|text| text == instruction.text);
    if duplicate {
        warn!(
            "{} '{}' is already present in '{}', leaving it unchanged",
            instruction.name,
            instruction.text,
            container.name()
        );
        return MergeOutcome::AlreadyPresent;
    }

    debug!("Appending {} = {} to '{}'", instruction.name, instruction.text, container.name());
    container.add_child(instruction.to_element());
    MergeOutcome::Appended
}

fn container_mut(configuration: &mut ConfigElement, allow_legacy: bool) -> Option<&mut ConfigElement> {
    let name = if !configuration.has_child_named(INSTRUCTIONS)
        && allow_legacy
        && configuration.has_child_named(LEGACY_INSTRUCTION_WRAPPER)
    {
        LEGACY_INSTRUCTION_WRAPPER
    } else {
        INSTRUCTIONS
    };
    configuration.child_named_mut(name)
}
