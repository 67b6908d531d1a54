//! The final step of generation: turning fields, statements and declarations into Swift text.
//!
//! They all implement [Render]. Each renders to exactly one logical line, without
//! indentation.

use std::fmt::Write;

use crate::model::TypeDescriptor;

pub trait Render {
    fn render(&self, out: &mut String);
}

/// Render a sequence of [Render] values, string literals included, into `out`.
macro_rules! render {
    ($out:expr, [$($item:expr),* $(,)?]) => {{
        $($crate::render::Render::render(&$item, $out);)*
    }};
}

pub(crate) use render;

/// Render one item to a freshly allocated line.
pub fn to_line(item: &impl Render) -> String {
    let mut line = String::new();
    item.render(&mut line);
    line
}

impl Render for str {
    fn render(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Render for String {
    fn render(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut String) {
        (**self).render(out);
    }
}

impl Render for TypeDescriptor {
    fn render(&self, out: &mut String) {
        let _ = write!(out, "{self}");
    }
}

/// Comma separated list.
pub(crate) struct Separated<'a, T>(pub &'a [T]);

impl<'a, T: Render> Render for Separated<'a, T> {
    fn render(&self, out: &mut String) {
        for (index, item) in self.0.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            item.render(out);
        }
    }
}
