use std::fmt::Write;
use std::path::Path;

use crate::errors::GenerationError;
use crate::model::GenerationReport;
use crate::output::{
    CUSTOMER_FILE, PAYMENT_FILE, TRANSACTION_FILE, TRANSACTION_REQUEST_FILE, VIDEO_FILE,
};

const RULE: &str =
    "--------------------------------------------------------------------------------";
const TITLE: &str = "Westside Brothers Video Store Sample Data";

/// Console summary printed at the end of a run.
pub fn render_summary(report: &GenerationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Videos per genre:");
    for genre in &report.genres {
        let _ = writeln!(out, "  * {}: {} videos", genre.label, genre.videos);
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Added {} Videos ({VIDEO_FILE})", report.videos);
    let _ = writeln!(out, "Added {} Customers ({CUSTOMER_FILE})", report.customers);
    let _ = writeln!(
        out,
        "Added {} Transactions ({TRANSACTION_FILE})",
        report.transactions
    );
    let _ = writeln!(
        out,
        "Added {} Transaction Requests ({TRANSACTION_REQUEST_FILE})",
        report.transaction_requests
    );
    let _ = writeln!(out, "Added {} Payments ({PAYMENT_FILE})", report.payments);
    let _ = writeln!(out, "{RULE}");
    out
}

/// Write the report as pretty JSON, creating parent directories.
pub fn write_report_json(path: &Path, report: &GenerationReport) -> Result<(), GenerationError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_vec_pretty(report)?)?;
    Ok(())
}
