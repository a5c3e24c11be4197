//! JSON reporter: structured JSON output.

use serde_json::json;

use super::Reporter;
use crate::audit::AuditReport;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &AuditReport) -> Result<String, String> {
        let roles: Vec<serde_json::Value> = report
            .roles
            .iter()
            .map(|r| {
                json!({
                    "role": r.role,
                    "contract": r.contract,
                    "passed": r.passed,
                    "identifier_count": r.observation.len(),
                    "mismatch_count": r.mismatches.len(),
                    "mismatches": r.mismatches.iter().map(|m| {
                        let mut value = serde_json::to_value(m).unwrap_or_default();
                        if let Some(obj) = value.as_object_mut() {
                            obj.insert("message".to_string(), json!(m.to_string()));
                        }
                        value
                    }).collect::<Vec<_>>(),
                    "observation": r.observation,
                })
            })
            .collect();

        let output = json!({
            "overall_passed": report.passed,
            "total_mismatches": report.mismatch_count(),
            "files_scanned": report.files_scanned,
            "duration_ms": report.duration_ms,
            "roles": roles,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
