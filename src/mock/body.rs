use crate::model::Method;
use crate::render::{render, Render, Separated};

use super::method::{MockMethod, StubShape};

/// One statement of a mock body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `defer { invokedFooExpectation.fulfill() }`
    DeferFulfill { expectation: String },
    /// `if let error = stubbedFooError { throw error }`
    ThrowStubbedError { field: String },
    /// `invokedFoo = true`
    SetInvoked { field: String },
    /// `invokedFooCount += 1`
    IncrementCount { field: String },
    /// `invokedFooParameters = (bar, ())`
    AssignLastParameters { field: String, value: TupleValue },
    /// `invokedFooParametersList.append((bar, ()))`
    AppendHistory { field: String, value: TupleValue },
    /// `if shouldInvokeFooCompletion { completion() }`
    InvokeIfFlag { flag: String, call: ClosureCall },
    /// `if let result = stubbedFooCompletionResult { completion(result) }`
    InvokeWithStub {
        field: String,
        call: ClosureCall,
        args: StubArgs,
    },
    /// `return stubbedFooResult`
    ReturnStubbedResult { field: String },
}

/// Tuple expression of captured parameter names, padded with `()` when single.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleValue {
    pub names: Vec<String>,
}

/// Invocation of a closure parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosureCall {
    pub closure: String,
    /// Optional closure parameter, called with `?`.
    pub optional: bool,
    /// Asynchronous closure, called at an `await` suspension point.
    pub is_async: bool,
    /// Non-void closure, its result is explicitly discarded.
    pub discards_result: bool,
}

/// How the stored stub value is passed to the closure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StubArgs {
    /// The stored value itself.
    Single,
    /// The first `n` elements of the stored tuple.
    Positional(usize),
}

/// Emit the body statements of `method`, in execution order.
pub fn statements(method: &Method, mock_name: &str) -> Vec<Statement> {
    let mock_method = MockMethod::new(method, mock_name);
    let mut statements = vec![Statement::DeferFulfill {
        expectation: mock_method.expectation(),
    }];

    // must precede any state mutation
    if method.throws {
        statements.push(Statement::ThrowStubbedError {
            field: mock_method.stubbed_error(),
        });
    }

    if !method.is_initializer {
        statements.push(Statement::SetInvoked {
            field: mock_method.invoked(),
        });
        statements.push(Statement::IncrementCount {
            field: mock_method.invoked_count(),
        });
    }

    let captured = TupleValue {
        names: mock_method
            .mockable_params()
            .map(|param| param.name.clone())
            .collect(),
    };
    if !captured.names.is_empty() {
        statements.push(Statement::AssignLastParameters {
            field: mock_method.parameters(),
            value: captured.clone(),
        });
        statements.push(Statement::AppendHistory {
            field: mock_method.parameters_list(),
            value: captured,
        });
    }

    for closure_param in mock_method.closure_params() {
        let call = ClosureCall {
            closure: closure_param.param.name.clone(),
            optional: closure_param.optional,
            is_async: closure_param.closure.is_async,
            discards_result: !closure_param.closure.returns_void(),
        };

        statements.push(match closure_param.stub_shape() {
            StubShape::Flag => Statement::InvokeIfFlag {
                flag: mock_method.should_invoke(closure_param.param),
                call,
            },
            StubShape::Single(_) => Statement::InvokeWithStub {
                field: mock_method.stubbed_closure_result(closure_param.param),
                call,
                args: StubArgs::Single,
            },
            StubShape::Tuple(params) => Statement::InvokeWithStub {
                field: mock_method.stubbed_closure_result(closure_param.param),
                call,
                args: StubArgs::Positional(params.len()),
            },
        });
    }

    if !method.is_initializer && method.return_type().is_some() {
        statements.push(Statement::ReturnStubbedResult {
            field: mock_method.stubbed_result(),
        });
    }

    statements
}

impl Render for Statement {
    fn render(&self, out: &mut String) {
        match self {
            Self::DeferFulfill { expectation } => {
                render!(out, ["defer { ", expectation, ".fulfill() }"])
            }
            Self::ThrowStubbedError { field } => {
                render!(out, ["if let error = ", field, " { throw error }"])
            }
            Self::SetInvoked { field } => render!(out, [field, " = true"]),
            Self::IncrementCount { field } => render!(out, [field, " += 1"]),
            Self::AssignLastParameters { field, value } => render!(out, [field, " = ", value]),
            Self::AppendHistory { field, value } => {
                render!(out, [field, ".append(", value, ")"])
            }
            Self::InvokeIfFlag { flag, call } => {
                render!(out, ["if ", flag, " { "]);
                call.render_with(out, |_| {});
                out.push_str(" }");
            }
            Self::InvokeWithStub { field, call, args } => {
                render!(out, ["if let result = ", field, " { "]);
                call.render_with(out, |out| match args {
                    StubArgs::Single => out.push_str("result"),
                    StubArgs::Positional(count) => {
                        let elements: Vec<String> =
                            (0..*count).map(|index| format!("result.{index}")).collect();
                        render!(out, [Separated(&elements)]);
                    }
                });
                out.push_str(" }");
            }
            Self::ReturnStubbedResult { field } => render!(out, ["return ", field]),
        }
    }
}

impl ClosureCall {
    fn render_with(&self, out: &mut String, args: impl FnOnce(&mut String)) {
        if self.discards_result {
            out.push_str("_ = ");
        }
        if self.is_async {
            out.push_str("await ");
        }
        out.push_str(&self.closure);
        if self.optional {
            out.push('?');
        }
        out.push('(');
        args(out);
        out.push(')');
    }
}

impl Render for TupleValue {
    fn render(&self, out: &mut String) {
        render!(out, ["(", Separated(&self.names)]);
        if self.names.len() == 1 {
            out.push_str(", ()");
        }
        out.push(')');
    }
}
