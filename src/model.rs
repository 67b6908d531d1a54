//! The structural model of a mocked type, as handed over by the upstream extractor.
//!
//! Everything in here is plain data. Generation never mutates the model, and
//! ordering is always declaration order: methods and parameters are kept in
//! `Vec`s exactly as supplied.

use std::borrow::Cow;
use std::fmt;

/// A type whose methods should be mocked.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Type {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub methods: Vec<Method>,
}

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: vec![],
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

/// A method or initializer of a [Type].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Method {
    /// Name without argument labels, e.g. `foo` or `init?`.
    pub call_name: String,
    /// Full signature name as spelled upstream, e.g. `foo(bar: Int)`.
    /// Synthesized from the parameters when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub declared_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<Parameter>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub return_type: Option<TypeDescriptor>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_initializer: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_async: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub throws: bool,
    /// Opaque attribute annotations, mirrored verbatim onto the mock declaration.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<String>,
}

impl Method {
    /// A regular method called `call_name`.
    pub fn func(call_name: impl Into<String>) -> Self {
        Self {
            call_name: call_name.into(),
            declared_name: None,
            params: vec![],
            return_type: None,
            is_initializer: false,
            is_async: false,
            throws: false,
            attributes: vec![],
        }
    }

    /// A non-failable initializer.
    pub fn init() -> Self {
        Self {
            is_initializer: true,
            ..Self::func("init")
        }
    }

    /// A failable initializer (`init?`).
    pub fn failable_init() -> Self {
        Self {
            is_initializer: true,
            ..Self::func("init?")
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, return_type: TypeDescriptor) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn asynchronous(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn throwing(mut self) -> Self {
        self.throws = true;
        self
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn declared(mut self, declared_name: impl Into<String>) -> Self {
        self.declared_name = Some(declared_name.into());
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The return type, or `None` when the method returns nothing.
    pub fn return_type(&self) -> Option<&TypeDescriptor> {
        self.return_type.as_ref().filter(|ty| !ty.is_void())
    }

    /// The full signature name, e.g. `foo(bar: Int, _ baz: String)`.
    pub fn declared_name(&self) -> Cow<'_, str> {
        match &self.declared_name {
            Some(declared_name) => Cow::Borrowed(declared_name.as_str()),
            None => {
                let params = self
                    .params
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                Cow::Owned(format!("{}({params})", self.call_name))
            }
        }
    }
}

/// A parameter of a [Method].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Parameter {
    pub name: String,
    /// External argument label. `None` is the unlabeled (`_`) form.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: TypeDescriptor,
    #[cfg_attr(feature = "serde", serde(default))]
    pub escaping: bool,
}

impl Parameter {
    /// A parameter whose argument label equals its name, like Swift's `bar: Int`.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        let name = name.into();
        Self {
            label: Some(name.clone()),
            name,
            ty,
            escaping: false,
        }
    }

    pub fn unlabeled(mut self) -> Self {
        self.label = None;
        self
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn escaping(mut self) -> Self {
        self.escaping = true;
        self
    }

    /// The argument label, treating an explicit `_` as no label.
    pub fn argument_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| *label != "_")
    }

    /// The closure type of a closure-typed parameter, looking through one optional.
    pub fn closure_type(&self) -> Option<&ClosureType> {
        match &self.ty {
            TypeDescriptor::Closure(closure) => Some(closure),
            TypeDescriptor::Optional { wrapped } => wrapped.as_closure(),
            _ => None,
        }
    }

    pub fn is_optional_closure(&self) -> bool {
        matches!(&self.ty, TypeDescriptor::Optional { wrapped } if wrapped.as_closure().is_some())
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.argument_label() {
            Some(label) if label == self.name => write!(f, "{}: ", self.name)?,
            Some(label) => write!(f, "{label} {}: ", self.name)?,
            None => write!(f, "_ {}: ", self.name)?,
        }
        // optional closures are implicitly escaping and reject the attribute
        if self.escaping && matches!(self.ty, TypeDescriptor::Closure(_)) {
            write!(f, "@escaping ")?;
        }
        write!(f, "{}", self.ty)
    }
}

/// Closed set of type shapes the generator distinguishes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum TypeDescriptor {
    Scalar { name: String },
    Optional { wrapped: Box<TypeDescriptor> },
    Array { element: Box<TypeDescriptor> },
    Closure(ClosureType),
}

impl TypeDescriptor {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar { name: name.into() }
    }

    pub fn optional(wrapped: TypeDescriptor) -> Self {
        Self::Optional {
            wrapped: Box::new(wrapped),
        }
    }

    pub fn array(element: TypeDescriptor) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    pub fn closure(
        params: impl IntoIterator<Item = TypeDescriptor>,
        return_type: TypeDescriptor,
    ) -> Self {
        Self::Closure(ClosureType::new(params, return_type))
    }

    pub fn void() -> Self {
        Self::scalar("Void")
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Scalar { name } if name == "Void" || name == "()")
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional { .. })
    }

    pub fn as_closure(&self) -> Option<&ClosureType> {
        match self {
            Self::Closure(closure) => Some(closure),
            _ => None,
        }
    }

    /// Render with a postfix type operator (`?`, `!`), parenthesizing closures.
    pub(crate) fn with_postfix(&self, postfix: char) -> String {
        match self {
            Self::Closure(_) => format!("({self}){postfix}"),
            _ => format!("{self}{postfix}"),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar { name } => write!(f, "{name}"),
            Self::Optional { wrapped } => write!(f, "{}", wrapped.with_postfix('?')),
            Self::Array { element } => write!(f, "[{element}]"),
            Self::Closure(closure) => write!(f, "{closure}"),
        }
    }
}

/// The signature of a closure-typed parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClosureType {
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<TypeDescriptor>,
    pub return_type: Box<TypeDescriptor>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_async: bool,
}

impl ClosureType {
    pub fn new(
        params: impl IntoIterator<Item = TypeDescriptor>,
        return_type: TypeDescriptor,
    ) -> Self {
        Self {
            params: params.into_iter().collect(),
            return_type: Box::new(return_type),
            is_async: false,
        }
    }

    pub fn asynchronous(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }
}

impl fmt::Display for ClosureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")?;
        if self.is_async {
            write!(f, " async")?;
        }
        write!(f, " -> {}", self.return_type)
    }
}
