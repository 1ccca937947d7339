//! List command report data structures.

use super::output::{Output, Report};

/// A loaded module.
#[derive(Debug)]
pub struct ModuleEntry {
    pub name: String,
    /// Name of the top-level container, if the module has one.
    pub top_level: Option<String>,
}

/// Report data from module discovery.
#[derive(Debug)]
pub struct ListReport {
    pub modules: Vec<ModuleEntry>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.modules.is_empty() {
            out.preformatted("No modules found");
            return;
        }

        out.section(&format!("Modules ({})", self.modules.len()));
        for module in &self.modules {
            match &module.top_level {
                Some(_) => out.list_item(&module.name),
                None => out.list_item(&format!("{} (no top-level container)", module.name)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = ListReport {
            modules: vec![
                ModuleEntry {
                    name: "sonic-port".into(),
                    top_level: Some("sonic-port".into()),
                },
                ModuleEntry {
                    name: "sonic-types".into(),
                    top_level: None,
                },
            ],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Modules (2)",
                "  - sonic-port",
                "  - sonic-types (no top-level container)",
            ]
        );
    }

    #[test]
    fn test_render_empty() {
        let mut out = BufferOutput::default();
        ListReport { modules: vec![] }.render(&mut out);
        assert_eq!(out.lines, ["No modules found"]);
    }
}
