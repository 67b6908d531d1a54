use crate::model::{ClosureType, Method, Parameter, TypeDescriptor};
use crate::naming::capitalize;

/// A method paired with its allocated mock name.
///
/// Both the field emitter and the body emitter derive stub field names from
/// here, so the statements always refer to fields that were declared.
pub struct MockMethod<'t> {
    pub method: &'t Method,
    pub mock_name: &'t str,
}

pub enum ParamClass<'t> {
    Plain,
    Closure(ClosureParam<'t>),
}

pub struct ClosureParam<'t> {
    pub param: &'t Parameter,
    pub closure: &'t ClosureType,
    /// The parameter is an optional closure.
    pub optional: bool,
}

/// How a closure parameter is scripted by test code.
pub enum StubShape<'t> {
    /// Zero-argument closure, invoked when a flag is set.
    Flag,
    /// One non-optional argument, stored as is.
    Single(&'t TypeDescriptor),
    /// Any other arity, stored as a tuple.
    Tuple(&'t [TypeDescriptor]),
}

impl<'t> MockMethod<'t> {
    pub fn new(method: &'t Method, mock_name: &'t str) -> Self {
        Self { method, mock_name }
    }

    pub fn classify_param(param: &'t Parameter) -> ParamClass<'t> {
        match param.closure_type() {
            Some(closure) => ParamClass::Closure(ClosureParam {
                param,
                closure,
                optional: param.is_optional_closure(),
            }),
            None => ParamClass::Plain,
        }
    }

    /// Parameters captured as observable state: non-closures and escaping closures.
    pub fn mockable_params(&self) -> impl Iterator<Item = &'t Parameter> + 't {
        let method: &'t Method = self.method;
        method
            .params
            .iter()
            .filter(|param| match Self::classify_param(*param) {
                ParamClass::Plain => true,
                ParamClass::Closure(closure) => closure.param.escaping,
            })
    }

    pub fn closure_params(&self) -> impl Iterator<Item = ClosureParam<'t>> + 't {
        let method: &'t Method = self.method;
        method
            .params
            .iter()
            .filter_map(|param| match Self::classify_param(param) {
                ParamClass::Closure(closure) => Some(closure),
                ParamClass::Plain => None,
            })
    }

    pub fn stubbed_error(&self) -> String {
        format!("stubbed{}Error", self.mock_name)
    }

    pub fn invoked(&self) -> String {
        format!("invoked{}", self.mock_name)
    }

    pub fn invoked_count(&self) -> String {
        format!("invoked{}Count", self.mock_name)
    }

    pub fn parameters(&self) -> String {
        format!("invoked{}Parameters", self.mock_name)
    }

    pub fn parameters_list(&self) -> String {
        format!("invoked{}ParametersList", self.mock_name)
    }

    pub fn should_invoke(&self, param: &Parameter) -> String {
        format!("shouldInvoke{}{}", self.mock_name, capitalize(&param.name))
    }

    pub fn stubbed_closure_result(&self, param: &Parameter) -> String {
        format!("stubbed{}{}Result", self.mock_name, capitalize(&param.name))
    }

    pub fn stubbed_result(&self) -> String {
        format!("stubbed{}Result", self.mock_name)
    }

    pub fn expectation(&self) -> String {
        format!("invoked{}Expectation", self.mock_name)
    }
}

impl<'t> ClosureParam<'t> {
    pub fn stub_shape(&self) -> StubShape<'t> {
        let closure: &'t ClosureType = self.closure;
        match closure.params.as_slice() {
            [] => StubShape::Flag,
            [single] if !single.is_optional() => StubShape::Single(single),
            params => StubShape::Tuple(params),
        }
    }
}
