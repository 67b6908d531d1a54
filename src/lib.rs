//!
//! `swiftmock` generates Swift test doubles from a structural description of a type.
//!
//! For each method it emits stub fields that record invocations and captured
//! parameters, script closure callbacks and return values, plus the mocked
//! method itself:
//!
//! ```rust
//! use swiftmock::*;
//!
//! let service = Type::new("Service").method(
//!     Method::func("fetch")
//!         .param(Parameter::new("id", TypeDescriptor::scalar("Int")))
//!         .returns(TypeDescriptor::scalar("String")),
//! );
//!
//! let config = Config::default();
//! let mock = generate_type(&service, &config).unwrap();
//!
//! assert_eq!(
//!     mock.lines(&config),
//!     [
//!         "var invokedFetch = false",
//!         "var invokedFetchCount = 0",
//!         "var invokedFetchParameters: (id: Int, Void)?",
//!         "var invokedFetchParametersList = [(id: Int, Void)]()",
//!         "var stubbedFetchResult: String! = \"\"",
//!         "let invokedFetchExpectation = XCTestExpectation(description: \"\\(#function) expectation\")",
//!         "",
//!         "func fetch(id: Int) -> String {",
//!         "    defer { invokedFetchExpectation.fulfill() }",
//!         "    invokedFetch = true",
//!         "    invokedFetchCount += 1",
//!         "    invokedFetchParameters = (id, ())",
//!         "    invokedFetchParametersList.append((id, ()))",
//!         "    return stubbedFetchResult",
//!         "}",
//!     ]
//! );
//! ```
//!
//! # Mock names
//! Every stub field is prefixed by the method's mock name, which is unique within the type.
//! Overloads are told apart by argument labels first, then by parameter types.
//! See [naming] for the full allocation rules.
//!
//! # Output
//! Generation produces plain values ([Field], [Declaration], [Statement]) that render to
//! text lines only at the end, through [MethodMock::lines] and [TypeMock::lines].
//! Assembling the lines into a mock class and writing files is left to the caller.
//!

#![forbid(unsafe_code)]

mod config;
mod defaults;
mod error;
mod mock;
mod model;
pub mod naming;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
pub use mock::*;
pub use model::{ClosureType, Method, Parameter, Type, TypeDescriptor};

/// Generate the mock of one type, with a fresh name registry.
///
/// Fails when two methods of the type cannot be told apart.
pub fn generate_type(ty: &Type, config: &Config) -> Result<TypeMock> {
    mock::mock_type(ty, config)
}

/// Generate mocks for each type in order. Each type gets its own name registry.
///
/// Stops at the first type that fails.
pub fn generate(types: &[Type], config: &Config) -> Result<Vec<TypeMock>> {
    types.iter().map(|ty| generate_type(ty, config)).collect()
}
