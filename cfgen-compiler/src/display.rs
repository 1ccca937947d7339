//! Blueprint tree display formatting.
//!
//! ```ignore
//! use cfgen_compiler::{BlueprintExt, DisplayStyle};
//!
//! println!("{}", blueprint.display_style(DisplayStyle::WithDescriptions).indent("  "));
//! ```

use std::fmt;

use cfgen_ir::{Blueprint, Field, Table};

/// Display style for blueprint trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Names only.
    ///
    /// ```text
    /// PORT
    ///   PORT_LIST [name]
    ///     mtu
    ///     members (leaf-list)
    /// ```
    #[default]
    Simple,

    /// Names followed by descriptions, where present.
    ///
    /// ```text
    /// PORT - Physical ports
    ///   PORT_LIST [name]
    ///     mtu - Port MTU
    /// ```
    WithDescriptions,
}

/// Declarative blueprint display formatter.
#[derive(Debug, Clone)]
pub struct BlueprintDisplay<'a> {
    blueprint: &'a Blueprint,
    style: DisplayStyle,
    indent_str: &'a str,
    prefix: &'a str,
}

impl<'a> BlueprintDisplay<'a> {
    pub fn new(blueprint: &'a Blueprint) -> Self {
        Self {
            blueprint,
            style: DisplayStyle::default(),
            indent_str: "  ",
            prefix: "",
        }
    }

    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Prefix every line (default: nothing).
    pub fn indent(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Render the tree. Lines are joined with `\n`, without a trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        for table in &self.blueprint.tables {
            self.render_table(table, &mut lines);
        }
        lines.join("\n")
    }

    fn render_table(&self, table: &Table, lines: &mut Vec<String>) {
        lines.push(self.line(0, &table.name, &table.description));

        for object in table.static_objects() {
            lines.push(self.line(1, &object.name, &object.description));
            self.render_fields(&object.attrs, lines);
        }

        for object in table.dynamic_objects() {
            let keys: Vec<_> = object.key_names().collect();
            let title = format!("{} [{}]", object.name, keys.join(" "));
            lines.push(self.line(1, &title, &object.description));
            self.render_fields(&object.attrs, lines);
        }
    }

    fn render_fields(&self, fields: &[Field], lines: &mut Vec<String>) {
        for field in fields {
            let mut markers = Vec::new();
            if field.is_mandatory {
                markers.push("mandatory");
            }
            if field.is_multivalue {
                markers.push("leaf-list");
            }

            let title = if markers.is_empty() {
                field.name.clone()
            } else {
                format!("{} ({})", field.name, markers.join(", "))
            };
            lines.push(self.line(2, &title, &field.description));
        }
    }

    fn line(&self, depth: usize, title: &str, description: &str) -> String {
        let indent = self.indent_str.repeat(depth);
        match self.style {
            DisplayStyle::WithDescriptions if !description.is_empty() => {
                format!("{}{}{} - {}", self.prefix, indent, title, description)
            }
            _ => format!("{}{}{}", self.prefix, indent, title),
        }
    }
}

impl fmt::Display for BlueprintDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Convenience methods for displaying a blueprint.
pub trait BlueprintExt {
    fn display(&self) -> BlueprintDisplay<'_>;

    fn display_style(&self, style: DisplayStyle) -> BlueprintDisplay<'_>;
}

impl BlueprintExt for Blueprint {
    fn display(&self) -> BlueprintDisplay<'_> {
        BlueprintDisplay::new(self)
    }

    fn display_style(&self, style: DisplayStyle) -> BlueprintDisplay<'_> {
        BlueprintDisplay::new(self).style(style)
    }
}
