use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort mock generation for a type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Naming invariant violation: every disambiguation strategy was exhausted.
    ///
    /// Two methods of the same type cannot be told apart by call name, arity,
    /// argument labels and parameter types. Continuing would make both mocks
    /// write into the same fields.
    #[error("{type_name}: cannot allocate a unique mock name for `{method}` ({arity} parameters): it is indistinguishable from another method of the same type")]
    IndistinguishableMethods {
        type_name: String,
        method: String,
        arity: usize,
    },
}
