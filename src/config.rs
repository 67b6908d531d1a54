use std::collections::BTreeMap;

use crate::defaults;
use crate::model::TypeDescriptor;

/// Rendering knobs for generated mocks.
///
/// None of these influence name allocation; they only change the text a
/// [MethodMock](crate::MethodMock) renders to.
#[derive(Clone, Debug)]
pub struct Config {
    /// One level of indentation for statements inside a mock body.
    pub indent: String,
    /// The waitable one-shot notification type used for invocation expectations.
    pub expectation_type: String,
    /// Prefix of the synthesized mock type substituted for self-referential return types.
    pub default_mock_prefix: String,
    /// Suffix of the synthesized mock type substituted for self-referential return types.
    pub default_mock_suffix: String,
    default_values: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            expectation_type: "XCTestExpectation".to_string(),
            default_mock_prefix: "Default".to_string(),
            default_mock_suffix: "Mock".to_string(),
            default_values: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_expectation_type(mut self, expectation_type: impl Into<String>) -> Self {
        self.expectation_type = expectation_type.into();
        self
    }

    /// Register a default value for a type, keyed by its Swift spelling.
    ///
    /// Takes precedence over the built-in catalog.
    pub fn with_default_value(mut self, ty: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_values.insert(ty.into(), value.into());
        self
    }

    /// Name of the synthesized mock type standing in for `type_name`, e.g. `DefaultServiceMock`.
    pub fn default_mock_name(&self, type_name: &str) -> String {
        format!(
            "{}{type_name}{}",
            self.default_mock_prefix, self.default_mock_suffix
        )
    }

    pub(crate) fn default_value(&self, ty: &TypeDescriptor) -> Option<String> {
        self.default_values
            .get(&ty.to_string())
            .cloned()
            .or_else(|| defaults::builtin_default(ty))
    }
}
