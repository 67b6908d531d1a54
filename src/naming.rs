//! Mock name allocation.
//!
//! Every method of a type gets one mock name, which prefixes all of its stub
//! fields (`invokedFooBar`, `stubbedFooBarResult`, ...). Names are allocated in
//! declaration order against a [NameRegistry] that lives for exactly one type.
//!
//! Methods are grouped into families by call name and arity. A method that is
//! alone in its family keeps its capitalized call name unless that is already
//! taken. Overloads in a family are told apart first by argument labels, then
//! by labels combined with masked parameter type names.
//!
//! Distinct mock names do not guarantee distinct field names: `foo()` and
//! `fooCount()` are allocated `Foo` and `FooCount`, and both declare
//! `invokedFooCount`. See [TypeMock::colliding_fields](crate::TypeMock::colliding_fields).

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::model::{Method, Parameter, TypeDescriptor};

/// Names reserved and assigned during one type's generation pass.
///
/// Create a fresh registry per type and thread it through every [allocate]
/// call for that type's methods, in declaration order.
#[derive(Clone, Debug)]
pub struct NameRegistry {
    type_name: String,
    reserved: BTreeSet<String>,
    assigned: BTreeSet<String>,
}

impl NameRegistry {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            reserved: BTreeSet::new(),
            assigned: BTreeSet::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether `name` is taken, either as an assigned mock name or as a
    /// reservation made on behalf of an overload family.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    /// Whether `name` has been handed out to a method.
    pub fn is_assigned(&self, name: &str) -> bool {
        self.assigned.contains(name)
    }

    /// Assigned names in lexical order.
    pub fn assigned(&self) -> impl Iterator<Item = &str> {
        self.assigned.iter().map(String::as_str)
    }

    fn reserve(&mut self, name: &str) {
        if !self.reserved.contains(name) {
            self.reserved.insert(name.to_string());
        }
    }

    fn assign(&mut self, name: String) -> String {
        tracing::debug!(type_name = %self.type_name, mock_name = %name, "allocated mock name");
        self.reserved.insert(name.clone());
        self.assigned.insert(name.clone());
        name
    }
}

/// Allocate the mock name of `method`.
///
/// `siblings` are all methods of the enclosing type, `method` included.
/// Fails only when `method` cannot be told apart from another member of its
/// family.
pub fn allocate(
    method: &Method,
    siblings: &[Method],
    registry: &mut NameRegistry,
) -> Result<String> {
    let base = base_name(method);

    let mut family: Vec<&Method> = siblings
        .iter()
        .filter(|sibling| {
            sibling.call_name == method.call_name && sibling.arity() == method.arity()
        })
        .collect();
    // membership is by value; `method` may be a copy of its sibling
    if !family.contains(&method) {
        family.push(method);
    }

    if family.len() == 1 {
        Ok(allocate_single(method, base, registry))
    } else {
        allocate_overload(method, &family, base, registry)
    }
}

fn allocate_single(method: &Method, base: String, registry: &mut NameRegistry) -> String {
    if !registry.is_reserved(&base) {
        return registry.assign(base);
    }

    let arity = method.arity();
    let candidates = (0..arity)
        .map(|prefix| label_candidate(&base, method, prefix))
        .chain((0..arity).map(|prefix| typed_candidate(&base, method, prefix)));

    for candidate in candidates {
        if registry.is_reserved(&candidate) {
            tracing::trace!(candidate = %candidate, "mock name taken");
            continue;
        }
        return registry.assign(candidate);
    }

    let name = with_ordinal(&base, registry);
    registry.assign(name)
}

fn allocate_overload(
    method: &Method,
    family: &[&Method],
    base: String,
    registry: &mut NameRegistry,
) -> Result<String> {
    registry.reserve(&base);

    let mut first_unique: Option<String> = None;

    for prefix in 0..method.arity() {
        let candidate = label_candidate(&base, method, prefix);
        registry.reserve(&candidate);

        let is_unique = family
            .iter()
            .filter(|member| label_candidate(&base, member, prefix) == candidate)
            .count()
            == 1;

        if is_unique {
            if !registry.is_assigned(&candidate) {
                return Ok(registry.assign(candidate));
            }
            first_unique.get_or_insert(candidate);
        } else {
            tracing::trace!(candidate = %candidate, "label candidate shared by overloads");
        }
    }

    for prefix in 0..method.arity() {
        let candidate = typed_candidate(&base, method, prefix);

        let is_unique = family
            .iter()
            .filter(|member| typed_candidate(&base, member, prefix) == candidate)
            .count()
            == 1;

        if is_unique {
            if !registry.is_assigned(&candidate) {
                return Ok(registry.assign(candidate));
            }
            first_unique.get_or_insert(candidate);
        } else {
            tracing::trace!(candidate = %candidate, "typed candidate shared by overloads");
        }
    }

    match first_unique {
        Some(stem) => {
            let name = with_ordinal(&stem, registry);
            Ok(registry.assign(name))
        }
        None => Err(Error::IndistinguishableMethods {
            type_name: registry.type_name().to_string(),
            method: method.declared_name().into_owned(),
            arity: method.arity(),
        }),
    }
}

/// Capitalized call name without a failable initializer marker.
pub fn base_name(method: &Method) -> String {
    capitalize(method.call_name.trim_end_matches(|c: char| c == '?' || c == '!'))
}

/// `base` followed by the label (or name) of each of the first `prefix + 1` parameters.
fn label_candidate(base: &str, method: &Method, prefix: usize) -> String {
    let mut candidate = base.to_string();
    for param in method.params.iter().take(prefix + 1) {
        candidate.push_str(&capitalize(param.argument_label().unwrap_or(param.name.as_str())));
    }
    candidate
}

/// `base` followed by label and masked type of the first `prefix + 1`
/// parameters, then the bare labels of the rest.
fn typed_candidate(base: &str, method: &Method, prefix: usize) -> String {
    let mut candidate = base.to_string();
    for (index, param) in method.params.iter().enumerate() {
        candidate.push_str(&label_or_empty(param));
        if index <= prefix {
            candidate.push_str(&masked_type_name(&param.ty));
        }
    }
    sanitize(&candidate)
}

fn label_or_empty(param: &Parameter) -> String {
    param.argument_label().map(capitalize).unwrap_or_default()
}

/// Identifier-friendly name of a type, used for disambiguating overloads.
///
/// Optionals are unwrapped, arrays become their element name with a plural `s`.
pub fn masked_type_name(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Scalar { name } => capitalize(name),
        TypeDescriptor::Optional { wrapped } => masked_type_name(wrapped),
        TypeDescriptor::Array { element } => format!("{}s", masked_type_name(element)),
        TypeDescriptor::Closure(closure) => {
            let mut name: String = closure.params.iter().map(masked_type_name).collect();
            name.push_str("Closure");
            name
        }
    }
}

fn with_ordinal(stem: &str, registry: &NameRegistry) -> String {
    let mut ordinal = 2;
    loop {
        let candidate = format!("{stem}{ordinal}");
        if !registry.is_reserved(&candidate) {
            return candidate;
        }
        ordinal += 1;
    }
}

/// Drop qualified-name dots and anything else that cannot appear in an identifier.
fn sanitize(candidate: &str) -> String {
    candidate
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

pub(crate) fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
