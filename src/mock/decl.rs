use crate::config::Config;
use crate::model::{Method, TypeDescriptor};
use crate::render::{render, Render};

use super::output::declared_return_type;

/// The opening line of a mocked method or initializer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    /// `required init(name: String) {`
    Initializer {
        signature: String,
        is_async: bool,
        throws: bool,
    },
    /// `func foo(bar: Int) async throws -> String {`
    Method {
        signature: String,
        is_async: bool,
        throws: bool,
        return_type: Option<TypeDescriptor>,
    },
}

pub fn declaration(method: &Method, self_type: &str, config: &Config) -> Declaration {
    let signature = method.declared_name();

    if method.is_initializer {
        Declaration::Initializer {
            signature: strip_failable_marker(&signature),
            is_async: method.is_async,
            throws: method.throws,
        }
    } else {
        Declaration::Method {
            signature: signature.into_owned(),
            is_async: method.is_async,
            throws: method.throws,
            return_type: declared_return_type(method, self_type, config),
        }
    }
}

/// `init?(name: String)` -> `init(name: String)`
fn strip_failable_marker(signature: &str) -> String {
    let (name, rest) = match signature.find('(') {
        Some(index) => signature.split_at(index),
        None => (signature, ""),
    };
    format!("{}{rest}", name.trim_end_matches(|c: char| c == '?' || c == '!'))
}

impl Render for Declaration {
    fn render(&self, out: &mut String) {
        let (is_async, throws) = match self {
            Self::Initializer {
                signature,
                is_async,
                throws,
            } => {
                render!(out, ["required ", signature]);
                (*is_async, *throws)
            }
            Self::Method {
                signature,
                is_async,
                throws,
                ..
            } => {
                render!(out, ["func ", signature]);
                (*is_async, *throws)
            }
        };

        if is_async {
            out.push_str(" async");
        }
        if throws {
            out.push_str(" throws");
        }
        if let Self::Method {
            return_type: Some(return_type),
            ..
        } = self
        {
            render!(out, [" -> ", return_type]);
        }
        out.push_str(" {");
    }
}
