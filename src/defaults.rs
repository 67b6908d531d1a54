//! Built-in default values for implicitly unwrapped stubbed results.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::model::TypeDescriptor;

static CATALOG: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("Int", "0"),
        ("Int8", "0"),
        ("Int16", "0"),
        ("Int32", "0"),
        ("Int64", "0"),
        ("UInt", "0"),
        ("UInt8", "0"),
        ("UInt16", "0"),
        ("UInt32", "0"),
        ("UInt64", "0"),
        ("Float", "0"),
        ("Double", "0"),
        ("CGFloat", "0"),
        ("TimeInterval", "0"),
        ("Decimal", "0"),
        ("Bool", "false"),
        ("String", "\"\""),
        ("Substring", "\"\""),
        ("Data", "Data()"),
        ("Date", "Date()"),
        ("UUID", "UUID()"),
    ]
    .into_iter()
    .collect()
});

/// A Swift expression constructing a default value of `ty`, if one is known.
pub(crate) fn builtin_default(ty: &TypeDescriptor) -> Option<String> {
    match ty {
        TypeDescriptor::Scalar { name } => {
            if let Some(value) = CATALOG.get(name.trim()) {
                return Some(value.to_string());
            }
            if is_dictionary_literal(name) {
                Some("[:]".to_string())
            } else {
                None
            }
        }
        TypeDescriptor::Array { .. } => Some("[]".to_string()),
        TypeDescriptor::Optional { .. } | TypeDescriptor::Closure(_) => None,
    }
}

// `[Key: Value]` spelled as a scalar
fn is_dictionary_literal(name: &str) -> bool {
    let name = name.trim();
    name.starts_with('[') && name.ends_with(']') && name.contains(':')
}
