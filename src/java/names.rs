//! Java identifier and package name checks.

use crate::core::OsgiError;

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long", "native",
    "new", "package", "private", "protected", "public", "return", "short", "static", "strictfp",
    "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try", "void",
    "volatile", "while", "true", "false", "null", "_",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// ASCII Java identifier that is not a reserved word.
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !is_keyword(word)
}

pub fn validate_package(name: &str) -> Result<(), OsgiError> {
    if !name.is_empty() && name.split('.').all(is_identifier) {
        Ok(())
    } else {
        Err(OsgiError::InvalidPackageName {
            name: name.to_string(),
        })
    }
}

pub fn validate_class_name(name: &str) -> Result<(), OsgiError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(OsgiError::InvalidClassName {
            name: name.to_string(),
        })
    }
}

/// Turn a build group id such as `org.acme-corp` into a usable package.
///
/// Characters that cannot appear in an identifier become `_`; segments that
/// start with a digit or are reserved words get a leading `_`. Empty
/// segments are dropped.
pub fn package_from_group_id(group_id: &str) -> String {
    group_id
        .split('.')
        .map(|segment| {
            segment
                .trim()
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
                .collect::<String>()
        })
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if is_identifier(&segment) {
                segment
            } else {
                format!("_{segment}")
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// `package.Class`, or just `Class` in the default package.
pub fn qualify(package: &str, class_name: &str) -> String {
    if package.is_empty() {
        class_name.to_string()
    } else {
        format!("{package}.{class_name}")
    }
}

/// Split `com.acme.Service` into `("com.acme", "Service")`.
pub fn split_qualified(qualified: &str) -> (&str, &str) {
    match qualified.rsplit_once('.') {
        Some((package, class_name)) => (package, class_name),
        None => ("", qualified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("Activator"));
        assert!(is_identifier("_impl$1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("class"));
        assert!(!is_identifier("my-class"));
    }

    #[test]
    fn test_package_validation() {
        assert!(validate_package("com.acme.osgi").is_ok());
        assert!(matches!(validate_package("com..acme"), Err(OsgiError::InvalidPackageName { .. })));
        assert!(validate_package("com.acme.new").is_err());
        assert!(validate_package("").is_err());
    }

    #[test]
    fn test_class_validation() {
        assert!(validate_class_name("DmComponent").is_ok());
        assert!(matches!(validate_class_name("Dm Component"), Err(OsgiError::InvalidClassName { .. })));
    }

    #[test]
    fn test_package_from_group_id() {
        assert_eq!(package_from_group_id("com.acme"), "com.acme");
        assert_eq!(package_from_group_id("org.acme-corp"), "org.acme_corp");
        assert_eq!(package_from_group_id("io.2fast.int"), "io._2fast._int");
        assert_eq!(package_from_group_id("org..acme."), "org.acme");
        assert_eq!(package_from_group_id("org.-"), "org.__");

        for group_id in ["org.acme-corp", "io.2fast.int", "org.-", "com.ex@mple.new"] {
            assert!(validate_package(&package_from_group_id(group_id)).is_ok(), "{group_id}");
        }
    }

    #[test]
    fn test_qualify_and_split() {
        assert_eq!(qualify("com.acme", "Service"), "com.acme.Service");
        assert_eq!(qualify("", "Service"), "Service");
        assert_eq!(split_qualified("com.acme.Service"), ("com.acme", "Service"));
        assert_eq!(split_qualified("Service"), ("", "Service"));
    }
}
