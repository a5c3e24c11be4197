//! Console reporter: human-readable output with color codes.

use tollgate_core::errors::SpecificationMismatch;

use super::Reporter;
use crate::audit::{AuditReport, RoleReport};

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn status_symbol(&self, passed: bool) -> &'static str {
        if passed {
            "✓"
        } else {
            "✗"
        }
    }

    fn color_start(&self, passed: bool) -> &'static str {
        if !self.use_color {
            return "";
        }
        if passed {
            "\x1b[32m" // green
        } else {
            "\x1b[31m" // red
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    fn write_role(&self, output: &mut String, role: &RoleReport) {
        let cs = self.color_start(role.passed);
        let ce = self.color_end();
        output.push_str(&format!(
            "{cs}{}{ce} {} ({}): {} identifiers observed\n",
            self.status_symbol(role.passed),
            role.contract,
            role.role,
            role.observation.len(),
        ));

        for mismatch in &role.mismatches {
            let subject = match mismatch {
                SpecificationMismatch::IdentifierSet { .. } => "identifiers".to_string(),
                SpecificationMismatch::FunctionSet { limit, kind, .. } => format!("{limit}.{kind}"),
            };
            output.push_str(&format!("  {cs}mismatch{ce}: {subject}\n"));
            if !mismatch.missing().is_empty() {
                output.push_str(&format!("    missing: {}\n", mismatch.missing().join(", ")));
            }
            if !mismatch.extra().is_empty() {
                output.push_str(&format!("    extra:   {}\n", mismatch.extra().join(", ")));
            }
        }
        output.push('\n');
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &AuditReport) -> Result<String, String> {
        let mut output = String::new();

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║       Tollgate Rate-Limit Audit          ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");

        for role in &report.roles {
            self.write_role(&mut output, role);
        }

        let passed = report.roles.iter().filter(|r| r.passed).count();
        let total = report.roles.len();
        output.push_str(&format!(
            "─── Summary: {passed}/{total} roles compliant, {} mismatches, {} files ───\n",
            report.mismatch_count(),
            report.files_scanned,
        ));

        if report.passed {
            output.push_str("Result: PASSED ✓\n");
        } else {
            output.push_str("Result: FAILED ✗\n");
        }

        Ok(output)
    }
}
