//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that a file exists in the stack directory.
#[macro_export]
macro_rules! assert_generated {
    ($env:expr, $path:expr) => {
        assert!(
            $env.path($path).exists(),
            "Expected '{}' in the stack directory.\nFiles found: {:?}",
            $path,
            $env.stack_files()
        );
    };
}

/// Assert that a file does NOT exist in the stack directory.
#[macro_export]
macro_rules! assert_not_generated {
    ($env:expr, $path:expr) => {
        assert!(
            !$env.path($path).exists(),
            "Expected '{}' to NOT exist, but it does.\nFiles found: {:?}",
            $path,
            $env.stack_files()
        );
    };
}

/// Assert that output (stdout or stderr) contains the expected pattern.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that the command exited with the given code.
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code, $code,
            "Unexpected exit code.\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}
