//! Purpose: Build the machine-readable envelope for `--json` runs.
//! Exports: `report_json`.
//! Role: Shared contract helper so the CLI and tests agree on one schema.
//! Invariants: Schema is stable once published; fields are additive-only.

use std::path::Path;

use serde_json::{Value, json};

use regconv::core::convert::RunReport;

pub fn report_json(dir: &Path, check: bool, report: &RunReport) -> Value {
    json!({
        "dir": dir.display().to_string(),
        "check": check,
        "ok": report.succeeded(),
        "report": report,
    })
}
