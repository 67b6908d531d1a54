//! Mock assembly: one block of fields, declaration and body per method.

mod body;
mod decl;
mod field;
mod method;
mod output;

use std::collections::BTreeSet;

use crate::config::Config;
use crate::error::Result;
use crate::model::{Method, Type};
use crate::naming::{allocate, NameRegistry};
use crate::render::to_line;

pub use body::{statements, ClosureCall, Statement, StubArgs, TupleValue};
pub use decl::{declaration, Declaration};
pub use field::{fields, Field, StubValue, TupleSlot, TupleType};
pub use output::OutputKind;

/// The mock of a single method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodMock {
    /// Allocated, type-unique mock name.
    pub mock_name: String,
    pub fields: Vec<Field>,
    /// Attribute annotations mirrored verbatim from the mocked method.
    pub attributes: Vec<String>,
    pub declaration: Declaration,
    pub statements: Vec<Statement>,
}

impl MethodMock {
    /// Field lines, a blank line, then the method itself.
    pub fn lines(&self, config: &Config) -> Vec<String> {
        let mut lines: Vec<String> = self.fields.iter().map(to_line).collect();
        lines.push(String::new());
        lines.extend(self.attributes.iter().cloned());
        lines.push(to_line(&self.declaration));
        lines.extend(
            self.statements
                .iter()
                .map(|statement| format!("{}{}", config.indent, to_line(statement))),
        );
        lines.push("}".to_string());
        lines
    }
}

/// All method mocks of a type, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMock {
    pub type_name: String,
    pub methods: Vec<MethodMock>,
}

impl TypeMock {
    pub fn mock_names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|method| method.mock_name.as_str())
    }

    /// Field names declared by more than one method, in lexical order.
    pub fn colliding_fields(&self) -> Vec<&str> {
        let mut declared = BTreeSet::new();
        let mut colliding = BTreeSet::new();
        for field in self.methods.iter().flat_map(|method| &method.fields) {
            if !declared.insert(field.name()) {
                colliding.insert(field.name());
            }
        }
        colliding.into_iter().collect()
    }

    /// Method blocks separated by blank lines.
    pub fn lines(&self, config: &Config) -> Vec<String> {
        let mut lines = vec![];
        for (index, method) in self.methods.iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            lines.extend(method.lines(config));
        }
        lines
    }
}

pub(crate) fn mock_method(
    method: &Method,
    mock_name: String,
    self_type: &str,
    config: &Config,
) -> MethodMock {
    MethodMock {
        fields: fields(method, &mock_name, self_type, config),
        attributes: method.attributes.clone(),
        declaration: declaration(method, self_type, config),
        statements: statements(method, &mock_name),
        mock_name,
    }
}

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(type_name = %ty.name, methods = ty.methods.len())
)]
pub(crate) fn mock_type(ty: &Type, config: &Config) -> Result<TypeMock> {
    let mut registry = NameRegistry::new(ty.name.as_str());

    let methods = ty
        .methods
        .iter()
        .map(|method| -> Result<MethodMock> {
            let mock_name = allocate(method, &ty.methods, &mut registry)?;
            Ok(mock_method(method, mock_name, &ty.name, config))
        })
        .collect::<Result<Vec<_>>>()?;

    let mock = TypeMock {
        type_name: ty.name.clone(),
        methods,
    };
    for field in mock.colliding_fields() {
        tracing::warn!(type_name = %ty.name, field, "field declared by more than one method");
    }

    Ok(mock)
}
