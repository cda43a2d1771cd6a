//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::app::CliOutput;
use super::fixtures::ALLOWED_SCHEMES;

/// Assert the binary succeeded and printed exactly `expected`.
pub fn assert_prints(output: &CliOutput, expected: &str) {
    assert!(
        output.status.success(),
        "Expected success, got {}. stderr: {}",
        output.status,
        output.stderr
    );
    assert_eq!(output.lines(), vec![expected]);
}

/// Assert the binary failed and printed only the fallback scheme.
pub fn assert_fallback_failure(output: &CliOutput) {
    assert!(
        !output.status.success(),
        "Expected failure status, got {}. stdout: {}",
        output.status,
        output.stdout
    );
    assert_eq!(output.lines(), vec!["scheme-tonal-spot"]);
}

/// Assert the binary succeeded with one allowed scheme; returns it.
pub fn assert_valid_scheme(output: &CliOutput) -> String {
    assert!(
        output.status.success(),
        "Expected success, got {}. stderr: {}",
        output.status,
        output.stderr
    );
    let lines = output.lines();
    assert_eq!(lines.len(), 1, "Expected one line, got {:?}", lines);
    assert!(
        ALLOWED_SCHEMES.contains(&lines[0]),
        "Unexpected scheme {:?}",
        lines[0]
    );
    lines[0].to_string()
}

/// Assert the binary succeeded and printed a float; returns it.
pub fn assert_float_output(output: &CliOutput) -> f64 {
    assert!(
        output.status.success(),
        "Expected success, got {}. stderr: {}",
        output.status,
        output.stderr
    );
    let lines = output.lines();
    assert_eq!(lines.len(), 1, "Expected one line, got {:?}", lines);
    lines[0]
        .parse()
        .unwrap_or_else(|e| panic!("Expected a float, got {:?}: {e}", lines[0]))
}
