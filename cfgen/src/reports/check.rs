//! Check command report data structures.

use cfgen_compiler::{Diagnostic, Severity};

use super::output::{Output, Report};

/// Report data from module validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Name of the checked module.
    pub module: String,
    pub table_count: usize,
    pub object_count: usize,
    /// Diagnostics, most severe first.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            match diag.severity {
                Severity::Info => out.preformatted(&diag.to_string()),
                _ => out.warning(&diag.to_string()),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        let summary = format!(
            "{} tables, {} objects ({} errors, {} warnings)",
            self.table_count,
            self.object_count,
            self.count(Severity::Error),
            self.count(Severity::Warning),
        );
        if self.is_valid() {
            out.preformatted(&format!("✓ {}: {}", self.module, summary));
        } else {
            out.preformatted(&format!("✗ {}: {}", self.module, summary));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_summary() {
        let report = CheckReport {
            module: "sonic-port".into(),
            table_count: 2,
            object_count: 3,
            diagnostics: vec![Diagnostic::warning("lint", "key 'x' has no leaf").at("PORT.x")],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: key 'x' has no leaf (at PORT.x)",
                "",
                "✓ sonic-port: 2 tables, 3 objects (0 errors, 1 warnings)",
            ]
        );
    }

    #[test]
    fn test_errors_invalidate() {
        let report = CheckReport {
            module: "m".into(),
            table_count: 0,
            object_count: 0,
            diagnostics: vec![Diagnostic::error("build", "broken")],
        };
        assert!(!report.is_valid());
    }
}
