//! Structural parsing of generated Java classes.
//!
//! This is not a Java parser. It reads just enough of a single top-level
//! class to check that generated code is well formed and to find its
//! qualified name and lifecycle methods:
//!
//! 1. comments and string/char literals are blanked out
//! 2. braces must balance
//! 3. package, imports and the class header are matched with regexes
//! 4. methods are looked for only at the top level of the class body

use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::names::{is_keyword, qualify};
use crate::core::OsgiError;

static PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*package\s+([\w$.]+)\s*;").expect("valid regex"));
static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*import\s+(?:static\s+)?([\w$.*]+)\s*;").expect("valid regex"));
static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+([A-Za-z_$][\w$]*)").expect("valid regex"));
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*(?:<.*?>)?\s*(?:extends\s+(.+?))?\s*(?:implements\s+(.+?))?\s*$").expect("valid regex")
});
static METHOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_$][\w$]*)\s*\(([^()]*)\)\s*(?:throws\s+[\w$.,\s]+?)?\s*[{;]").expect("valid regex")
});

/// Words that can precede a call but never a method name in a declaration.
const NOT_A_RETURN_TYPE: &[&str] = &["new", "return", "throw", "else", "case", "assert"];

/// A method declared directly in the class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaMethod {
    pub name: String,
    pub parameter_types: Vec<String>,
}

/// Which pair of bundle lifecycle methods a class declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleHooks {
    /// `start`/`stop`, as on `BundleActivator` and DM components.
    StartStop,
    /// `init`/`destroy`, as on a DependencyManager activator.
    InitDestroy,
}

impl fmt::Display for LifecycleHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleHooks::StartStop => f.write_str("start/stop"),
            LifecycleHooks::InitDestroy => f.write_str("init/destroy"),
        }
    }
}

/// A parsed Java source file with one top-level class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaClass {
    package: String,
    imports: Vec<String>,
    name: String,
    superclass: Option<String>,
    interfaces: Vec<String>,
    methods: Vec<JavaMethod>,
    source: String,
}

impl JavaClass {
    pub fn parse(source: &str) -> Result<Self, OsgiError> {
        let code = strip_comments_and_literals(source)?;
        check_braces(&code)?;

        let package = PACKAGE_RE.captures(&code).map(|c| c[1].to_string()).unwrap_or_default();
        let imports = IMPORT_RE.captures_iter(&code).map(|c| c[1].to_string()).collect();

        let declaration = CLASS_RE
            .captures_iter(&code)
            .find(|c| c.get(0).is_some_and(|m| depth_at(&code, m.start()) == 0))
            .ok_or_else(|| parse_error("no top-level class declaration"))?;
        let (name, name_end) = match declaration.get(1) {
            Some(m) => (m.as_str().to_string(), m.end()),
            None => return Err(parse_error("no top-level class declaration")),
        };

        let open = code[name_end..]
            .find('{')
            .map(|offset| name_end + offset)
            .ok_or_else(|| parse_error(format!("class {name} has no body")))?;
        let header = HEADER_RE
            .captures(&code[name_end..open])
            .ok_or_else(|| parse_error(format!("cannot read the declaration of class {name}")))?;
        let superclass = header.get(1).map(|m| strip_generics(m.as_str()));
        let interfaces = header.get(2).map(|m| split_types(m.as_str())).unwrap_or_default();

        let close = matching_brace(&code, open).ok_or_else(|| parse_error(format!("class {name} is not closed")))?;
        let methods = class_methods(&code[open + 1..close], &name);

        Ok(Self {
            package,
            imports,
            name,
            superclass,
            interfaces,
            methods,
            source: source.to_string(),
        })
    }

    /// Empty for the default package.
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualified_name(&self) -> String {
        qualify(&self.package, &self.name)
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn methods(&self) -> &[JavaMethod] {
        &self.methods
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }

    pub fn lifecycle_hooks(&self) -> Option<LifecycleHooks> {
        if self.has_method("start") && self.has_method("stop") {
            Some(LifecycleHooks::StartStop)
        } else if self.has_method("init") && self.has_method("destroy") {
            Some(LifecycleHooks::InitDestroy)
        } else {
            None
        }
    }

    /// Source text exactly as it was parsed.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// `com/acme/osgi/Activator.java`
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').filter(|s| !s.is_empty()).collect();
        path.push(format!("{}.java", self.name));
        path
    }
}

fn parse_error(reason: impl Into<String>) -> OsgiError {
    OsgiError::SourceParseError {
        reason: reason.into(),
    }
}

/// Blank out comments and the contents of string and char literals.
///
/// Newlines are kept so `(?m)` anchors still work on the result.
fn strip_comments_and_literals(source: &str) -> Result<String, OsgiError> {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut closed = false;
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && c == '/' {
                        closed = true;
                        break;
                    }
                    prev = c;
                }
                if !closed {
                    return Err(parse_error("unterminated block comment"));
                }
                out.push(' ');
            }
            '"' | '\'' => {
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => {
                            chars.next();
                        }
                        '\n' => break,
                        c if c == ch => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return Err(parse_error("unterminated string or char literal"));
                }
                out.push(ch);
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

fn check_braces(code: &str) -> Result<(), OsgiError> {
    let mut depth = 0usize;
    for c in code.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1).ok_or_else(|| parse_error("unexpected '}'"))?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(parse_error(format!("{depth} unclosed '{{'")))
    }
}

fn depth_at(code: &str, position: usize) -> usize {
    code[..position].chars().fold(0usize, |depth, c| match c {
        '{' => depth + 1,
        '}' => depth.saturating_sub(1),
        _ => depth,
    })
}

fn matching_brace(code: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in code[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Keep only the top level of a class body; nested blocks keep their outer
/// braces but their contents become spaces.
fn flatten_body(body: &str) -> String {
    let mut depth = 0usize;
    body.chars()
        .map(|c| {
            let visible = match c {
                '{' => {
                    depth += 1;
                    depth == 1
                }
                '}' => {
                    depth = depth.saturating_sub(1);
                    depth == 0
                }
                _ => depth == 0,
            };
            if visible || c == '\n' { c } else { ' ' }
        })
        .collect()
}

fn class_methods(body: &str, class_name: &str) -> Vec<JavaMethod> {
    let flat = flatten_body(body);
    let mut methods = Vec::new();

    for captures in METHOD_RE.captures_iter(&flat) {
        let (Some(whole), Some(name), Some(params)) = (captures.get(0), captures.get(1), captures.get(2)) else {
            continue;
        };
        let name = name.as_str();
        if is_keyword(name) || name == class_name {
            continue;
        }

        // A declaration has a return type right before the name; calls and
        // initializers have `=`, `.`, `(` or a keyword like `new`.
        let before = flat[..whole.start()].trim_end();
        let type_like = before
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '>' | ']'));
        let previous_word = before.rsplit(|c: char| c.is_whitespace()).next().unwrap_or_default();
        if !type_like || NOT_A_RETURN_TYPE.contains(&previous_word) {
            continue;
        }

        methods.push(JavaMethod {
            name: name.to_string(),
            parameter_types: parameter_types(params.as_str()),
        });
    }

    methods
}

fn parameter_types(params: &str) -> Vec<String> {
    split_top_level(params)
        .into_iter()
        .filter_map(|param| {
            let tokens: Vec<&str> = param
                .split_whitespace()
                .filter(|t| !t.starts_with('@') && *t != "final")
                .collect();
            match tokens.split_last() {
                Some((_, ty)) if !ty.is_empty() => Some(ty.join(" ")),
                _ => None,
            }
        })
        .collect()
}

/// Split on commas that are not inside `<...>`.
fn split_top_level(list: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in list.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    parts.push(current);
    parts.into_iter().map(|p| p.trim().to_string()).filter(|p| !p.is_empty()).collect()
}

fn split_types(list: &str) -> Vec<String> {
    split_top_level(list).iter().map(|t| strip_generics(t)).collect()
}

fn strip_generics(type_name: &str) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for c in type_name.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if depth == 0 && !c.is_whitespace() => out.push(c),
            _ => {}
        }
    }
    out
}
