//! Output formatting for CLI responses.

use fieldrun_types::DiagnosticError;

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("[OK] {message}");
}

/// Prints cause and remediation for a failed operation, if known.
pub fn print_diagnostic(err: &impl DiagnosticError) {
    if let Some(hint) = err.hint() {
        eprintln!("\n  Cause: {hint}");
    }
    if let Some(fix) = err.fix() {
        eprintln!("  Fix:   {fix}\n");
    }
}
