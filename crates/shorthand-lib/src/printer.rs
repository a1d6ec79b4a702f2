//! Fully expanded view of a navigation tree, for diagnostics.
//!
//! One line per schema key, indented by depth, with the key's selector:
//!
//! ```text
//! page = page
//!   rows = page rows
//!     with(row) = label
//!     row = page rows row
//!       label = page rows row label
//! ```
//!
//! Printing builds every node it visits, so it defeats laziness on purpose.

use std::fmt::Write;

use shorthand_core::Colors;

use crate::nav::{Navigator, Node};

pub struct TreePrinter<'n> {
    navigator: &'n Navigator,
    compiled: bool,
    colors: Colors,
}

impl<'n> TreePrinter<'n> {
    pub fn new(navigator: &'n Navigator) -> Self {
        Self {
            navigator,
            compiled: false,
            colors: Colors::OFF,
        }
    }

    /// Show compiled selectors instead of shorthand prefixes.
    pub fn compiled(mut self, value: bool) -> Self {
        self.compiled = value;
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_children(self.navigator.root(), 0, w)
    }

    fn format_children(
        &self,
        node: Node<'n>,
        depth: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let c = self.colors;
        let indent = "  ".repeat(depth);

        if let Some(filter) = node.row_filter() {
            writeln!(
                w,
                "{indent}{}with({}){} {}={} {}",
                c.yellow,
                filter.item_key(),
                c.reset,
                c.dim,
                c.reset,
                filter.columns().join(", ")
            )?;
        }

        for key in node.keys() {
            let Some(child) = node.child(&key) else {
                continue;
            };
            let selector = if self.compiled {
                child.selector()
            } else {
                child.prefix().to_string()
            };
            writeln!(
                w,
                "{indent}{}{key}{} {}={} {}{selector}{}",
                c.blue, c.reset, c.dim, c.reset, c.green, c.reset
            )?;
            self.format_children(child, depth + 1, w)?;
        }
        Ok(())
    }
}
