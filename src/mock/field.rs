use crate::config::Config;
use crate::model::{Method, TypeDescriptor};
use crate::render::{render, Render, Separated};

use super::method::{MockMethod, StubShape};
use super::output::{determine_output_structure, OutputKind, OutputStructure};

/// A stored property of the mock type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    /// `var stubbedFooError: Error?`
    StubbedError { name: String },
    /// `var invokedFoo = false`
    Invoked { name: String },
    /// `var invokedFooCount = 0`
    InvokedCount { name: String },
    /// `var invokedFooParameters: (bar: Int, Void)?`
    LastParameters { name: String, tuple: TupleType },
    /// `var invokedFooParametersList = [(bar: Int, Void)]()`
    ParametersHistory { name: String, tuple: TupleType },
    /// `var shouldInvokeFooCompletion = false`
    ShouldInvoke { name: String },
    /// `var stubbedFooCompletionResult: (Int, String)?`
    StubbedClosureResult { name: String, value: StubValue },
    /// `var stubbedFooResult: Int! = 0`
    StubbedResult {
        name: String,
        ty: TypeDescriptor,
        kind: OutputKind,
    },
    /// `let invokedFooExpectation = XCTestExpectation(...)`
    Expectation {
        name: String,
        expectation_type: String,
    },
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Self::StubbedError { name }
            | Self::Invoked { name }
            | Self::InvokedCount { name }
            | Self::LastParameters { name, .. }
            | Self::ParametersHistory { name, .. }
            | Self::ShouldInvoke { name }
            | Self::StubbedClosureResult { name, .. }
            | Self::StubbedResult { name, .. }
            | Self::Expectation { name, .. } => name,
        }
    }
}

/// Tuple type of captured values.
///
/// A single slot is padded with `Void` so the type stays a genuine tuple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleType {
    pub slots: Vec<TupleSlot>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleSlot {
    pub label: Option<String>,
    pub ty: TypeDescriptor,
}

impl TupleType {
    pub fn is_padded(&self) -> bool {
        self.slots.len() == 1
    }
}

/// Stored value that a closure stub is called with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StubValue {
    Single(TypeDescriptor),
    Tuple(TupleType),
}

/// Emit the stub fields of `method`, in declaration order.
pub fn fields(method: &Method, mock_name: &str, self_type: &str, config: &Config) -> Vec<Field> {
    let mock_method = MockMethod::new(method, mock_name);
    let mut fields = vec![];

    if method.throws {
        fields.push(Field::StubbedError {
            name: mock_method.stubbed_error(),
        });
    }

    if !method.is_initializer {
        fields.push(Field::Invoked {
            name: mock_method.invoked(),
        });
        fields.push(Field::InvokedCount {
            name: mock_method.invoked_count(),
        });
    }

    let captured = TupleType {
        slots: mock_method
            .mockable_params()
            .map(|param| TupleSlot {
                label: Some(param.name.clone()),
                ty: param.ty.clone(),
            })
            .collect(),
    };
    if !captured.slots.is_empty() {
        fields.push(Field::LastParameters {
            name: mock_method.parameters(),
            tuple: captured.clone(),
        });
        fields.push(Field::ParametersHistory {
            name: mock_method.parameters_list(),
            tuple: captured,
        });
    }

    for closure_param in mock_method.closure_params() {
        let value = match closure_param.stub_shape() {
            StubShape::Flag => {
                fields.push(Field::ShouldInvoke {
                    name: mock_method.should_invoke(closure_param.param),
                });
                continue;
            }
            StubShape::Single(ty) => StubValue::Single(ty.clone()),
            StubShape::Tuple(params) => StubValue::Tuple(TupleType {
                slots: params
                    .iter()
                    .map(|ty| TupleSlot {
                        label: None,
                        ty: ty.clone(),
                    })
                    .collect(),
            }),
        };

        fields.push(Field::StubbedClosureResult {
            name: mock_method.stubbed_closure_result(closure_param.param),
            value,
        });
    }

    if let OutputStructure::Stubbed { ty, kind } =
        determine_output_structure(method, self_type, config)
    {
        fields.push(Field::StubbedResult {
            name: mock_method.stubbed_result(),
            ty,
            kind,
        });
    }

    fields.push(Field::Expectation {
        name: mock_method.expectation(),
        expectation_type: config.expectation_type.clone(),
    });

    fields
}

impl Render for Field {
    fn render(&self, out: &mut String) {
        match self {
            Self::StubbedError { name } => render!(out, ["var ", name, ": Error?"]),
            Self::Invoked { name } | Self::ShouldInvoke { name } => {
                render!(out, ["var ", name, " = false"])
            }
            Self::InvokedCount { name } => render!(out, ["var ", name, " = 0"]),
            Self::LastParameters { name, tuple } => render!(out, ["var ", name, ": ", tuple, "?"]),
            Self::ParametersHistory { name, tuple } => {
                render!(out, ["var ", name, " = [", tuple, "]()"])
            }
            Self::StubbedClosureResult { name, value } => {
                render!(out, ["var ", name, ": "]);
                match value {
                    StubValue::Single(ty) => out.push_str(&ty.with_postfix('?')),
                    StubValue::Tuple(tuple) => render!(out, [tuple, "?"]),
                }
            }
            Self::StubbedResult { name, ty, kind } => {
                render!(out, ["var ", name, ": "]);
                match kind {
                    OutputKind::Optional => render!(out, [ty]),
                    OutputKind::ImplicitlyUnwrapped { default } => {
                        out.push_str(&ty.with_postfix('!'));
                        if let Some(default) = default {
                            render!(out, [" = ", default]);
                        }
                    }
                }
            }
            Self::Expectation {
                name,
                expectation_type,
            } => render!(
                out,
                [
                    "let ",
                    name,
                    " = ",
                    expectation_type,
                    "(description: \"\\(#function) expectation\")"
                ]
            ),
        }
    }
}

impl Render for TupleType {
    fn render(&self, out: &mut String) {
        render!(out, ["(", Separated(&self.slots)]);
        if self.is_padded() {
            out.push_str(", Void");
        }
        out.push(')');
    }
}

impl Render for TupleSlot {
    fn render(&self, out: &mut String) {
        if let Some(label) = &self.label {
            render!(out, [label, ": "]);
        }
        render!(out, [self.ty]);
    }
}
