use std::{ffi::OsStr, sync::LazyLock};

use jiff::{Zoned, civil};

mod format;
mod resolve;

/// The reference time every test invocation runs against, via `TS_NOW`.
///
/// 2025-09-25 is a Thursday.
static NOW: LazyLock<Zoned> = LazyLock::new(|| {
    civil::date(2025, 9, 25).at(12, 30, 0, 0).in_tz("UTC").unwrap()
});

/// Return a command for the `ts` binary and no arguments.
fn ts_bare() -> crate::command::Command {
    crate::command::bin("ts")
        .env("TZ", "UTC")
        .env("TS_NOW", NOW.timestamp().to_string())
        // Backtraces in the caller's environment would otherwise leak into
        // the stderr of every error-path snapshot.
        .env_remove("RUST_BACKTRACE")
}

/// Return a command for the `ts` binary with the given arguments appended
/// to it.
fn ts<T: AsRef<OsStr>>(
    args: impl IntoIterator<Item = T>,
) -> crate::command::Command {
    ts_bare().args(args)
}

/// Test that calling `ts` with no arguments is a usage error.
#[test]
fn no_args() {
    crate::command::assert_cmd_snapshot!(
        ts_bare(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    at least one timestamp argument is required
    ",
    );
}

/// Test that a third positional argument is rejected.
#[test]
fn too_many_args() {
    crate::command::assert_cmd_snapshot!(
        ts(["now", "now", "now"]),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    expected at most two timestamp arguments, but got 3
    ",
    );
}

/// Test that error output stays clean even when the test process itself has
/// backtraces enabled.
#[test]
fn backtrace_env_is_not_inherited() {
    // Safe enough here: every spawned `ts` removes the variable again, so
    // concurrently running tests never observe it.
    unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    crate::command::assert_cmd_snapshot!(
        ts_bare(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    at least one timestamp argument is required
    ",
    );
}

/// Test that `--version` prints the version to stdout and exits with
/// success.
#[test]
fn version() {
    let snap = ts(["--version"]).snapshot();
    let snapshot = snap.snapshot();
    assert!(snapshot.starts_with("success: true"), "got: {snapshot}");
    assert!(snapshot.contains("ts "), "got: {snapshot}");
}

/// Test that `--examples` prints example invocations.
#[test]
fn examples() {
    let snap = ts(["--examples"]).snapshot();
    let snapshot = snap.snapshot();
    assert!(snapshot.starts_with("success: true"), "got: {snapshot}");
    assert!(snapshot.contains("EXAMPLES:"), "got: {snapshot}");
}
