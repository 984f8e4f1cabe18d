//! Named configuration tree used for plugin configuration and manifest instructions.
//!
//! A [`ConfigElement`] is a name, optional text and an ordered list of
//! children. There are no attributes. Child order is kept exactly as inserted
//! because it decides the order of entries in the generated manifest.
//!
//! Two ways of building a tree:
//!
//! - by value, for trees known up front:
//!
//! ```rust
//! use osgi_plugin::models::ConfigElement;
//!
//! let types = ConfigElement::new("supportedProjectTypes")
//!     .with_child(ConfigElement::new("supportedProjectType").with_text("war"));
//! assert_eq!(types.child_named("supportedProjectType").and_then(|c| c.text()), Some("war"));
//! ```
//!
//! - in place, where [`ConfigElement::add_child`] hands back the *new child*
//!   so it can be configured further; the parent stays reachable through the
//!   caller's own binding:
//!
//! ```rust
//! use osgi_plugin::models::ConfigElement;
//!
//! let mut instructions = ConfigElement::new("instructions");
//! instructions.add_child(ConfigElement::new("Web-ContextPath")).set_text("/app");
//! instructions.add_child(ConfigElement::new("Bundle-ClassPath")).set_text("WEB-INF/classes");
//! assert_eq!(instructions.children().len(), 2);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigElement {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ConfigElement>,
}

impl ConfigElement {
    /// Create an element with no text and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[ConfigElement] {
        &self.children
    }

    /// Set the text content. Children are left alone.
    pub fn set_text(&mut self, value: impl Into<String>) -> &mut Self {
        self.text = Some(value.into());
        self
    }

    /// By-value variant of [`set_text`](Self::set_text).
    #[must_use]
    pub fn with_text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(value.into());
        self
    }

    /// Append `child` and return a reference to it, not to `self`.
    pub fn add_child(&mut self, child: ConfigElement) -> &mut ConfigElement {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// By-value variant of [`add_child`](Self::add_child) returning the parent.
    #[must_use]
    pub fn with_child(mut self, child: ConfigElement) -> Self {
        self.children.push(child);
        self
    }

    /// True if a direct child has exactly this name.
    pub fn has_child_named(&self, name: &str) -> bool {
        self.children.iter().any(|c| c.name == name)
    }

    /// First direct child with this name.
    ///
    /// Duplicates are not collapsed; later siblings with the same name are
    /// only reachable through [`children`](Self::children).
    pub fn child_named(&self, name: &str) -> Option<&ConfigElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_named_mut(&mut self, name: &str) -> Option<&mut ConfigElement> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Texts of every direct child called `name`, in order.
    pub fn child_texts<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.children
            .iter()
            .filter(move |c| c.name == name)
            .filter_map(|c| c.text.as_deref())
    }

    /// No text and no children.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }

    /// Render as indented `name = text` lines, one element per line.
    pub fn render_outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(0, &mut out);
        out
    }

    fn write_outline(&self, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.name);
        if let Some(text) = &self.text {
            out.push_str(" = ");
            out.push_str(text);
        }
        out.push('\n');
        for child in &self.children {
            child.write_outline(depth + 1, out);
        }
    }
}
