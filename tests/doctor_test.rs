//! Integration tests for `stackplan doctor`

mod common;

use common::{stdout_of, TestRegistry};

#[test]
fn test_doctor_reports_git_status() {
    let registry = TestRegistry::new();
    let output = registry.run(&["doctor"]);

    // Doctor always exits successfully; it reports findings
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("git"));
}
