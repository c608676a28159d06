//! Rendering a collected report into the delivered text artifact.

use walk::CollectedReport;

/// Renders `report` into a single text payload.
///
/// Each record contributes a `filepath:` header line, its content with a
/// guaranteed trailing newline, and a blank separator line. Records appear
/// in walk order, so the payload is deterministic for an unmodified tree.
#[must_use]
pub fn render_report(report: &CollectedReport) -> String {
    let mut out = String::new();
    for record in report.records() {
        out.push_str("filepath: ");
        out.push_str(&record.relative_path().display().to_string());
        out.push('\n');
        out.push_str(record.contents());
        if !record.contents().ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_report;
    use std::fs;

    #[test]
    fn records_render_with_headers_in_walk_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("b.txt"), "second\n").expect("write");
        fs::write(temp.path().join("a.txt"), "first").expect("write");

        let report = walk::walk(temp.path()).expect("walk");
        let payload = render_report(&report);

        assert_eq!(
            payload,
            "filepath: a.txt\nfirst\n\nfilepath: b.txt\nsecond\n\n"
        );
    }

    #[test]
    fn empty_report_renders_empty_payload() {
        let temp = tempfile::tempdir().expect("tempdir");
        let report = walk::walk(temp.path()).expect("walk");
        assert!(render_report(&report).is_empty());
    }
}
