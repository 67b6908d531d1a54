use crate::config::Config;
use crate::model::{Method, TypeDescriptor};

/// What a mock hands back to its caller.
pub enum OutputStructure {
    /// Initializers and void methods.
    None,
    Stubbed {
        /// Return type with self references substituted.
        ty: TypeDescriptor,
        kind: OutputKind,
    },
}

/// How the stubbed result field is declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputKind {
    /// Declared return type is optional; the field is a plain optional.
    Optional,
    /// Implicitly unwrapped field, initialized with a default value when one is known.
    ImplicitlyUnwrapped { default: Option<String> },
}

pub fn determine_output_structure(
    method: &Method,
    self_type: &str,
    config: &Config,
) -> OutputStructure {
    if method.is_initializer {
        return OutputStructure::None;
    }

    let Some(return_type) = method.return_type() else {
        return OutputStructure::None;
    };

    let ty = substitute_self_type(return_type, self_type, config);
    let kind = if ty.is_optional() {
        OutputKind::Optional
    } else {
        OutputKind::ImplicitlyUnwrapped {
            default: config.default_value(&ty),
        }
    };

    OutputStructure::Stubbed { ty, kind }
}

/// Return type as spelled in the mock declaration.
pub fn declared_return_type(
    method: &Method,
    self_type: &str,
    config: &Config,
) -> Option<TypeDescriptor> {
    method
        .return_type()
        .map(|return_type| substitute_self_type(return_type, self_type, config))
}

/// Replace references to the enclosing type with its synthesized default mock.
pub fn substitute_self_type(
    ty: &TypeDescriptor,
    self_type: &str,
    config: &Config,
) -> TypeDescriptor {
    match ty {
        TypeDescriptor::Scalar { name } if name == self_type => {
            TypeDescriptor::scalar(config.default_mock_name(self_type))
        }
        TypeDescriptor::Optional { wrapped } => {
            TypeDescriptor::optional(substitute_self_type(wrapped, self_type, config))
        }
        TypeDescriptor::Array { element } => {
            TypeDescriptor::array(substitute_self_type(element, self_type, config))
        }
        _ => ty.clone(),
    }
}
