use crate::{command::assert_cmd_snapshot, ts};

/// Test that `now` renders the reference time in the default format.
#[test]
fn now_default_format() {
    assert_cmd_snapshot!(
        ts(["now"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Thu Sep 25 12:30:00 UTC 2025

    ----- stderr -----
    ",
    );
}

#[test]
fn relative_phrases() {
    assert_cmd_snapshot!(
        ts(["5 minutes ago"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Thu Sep 25 12:25:00 UTC 2025

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["yesterday 10am"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Wed Sep 24 10:00:00 UTC 2025

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["next sunday at 22:45"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Sun Sep 28 22:45:00 UTC 2025

    ----- stderr -----
    ",
    );
}

/// A bare clock time resolves to that time on the reference day.
#[test]
fn clock_time() {
    assert_cmd_snapshot!(
        ts(["11:30"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Thu Sep 25 11:30:00 UTC 2025

    ----- stderr -----
    ",
    );
}

/// Offsets like `-1h` must not be eaten by the flag parser.
#[test]
fn dash_number_is_positional() {
    assert_cmd_snapshot!(
        ts(["-1h"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Thu Sep 25 11:30:00 UTC 2025

    ----- stderr -----
    ",
    );
}

#[test]
fn self_contained_formats() {
    assert_cmd_snapshot!(
        ts(["-f", "rfc3339", "2025-09-25T06:00:00-04:00"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    2025-09-25T06:00:00-04:00

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["-f", "unix", "Thu, 25 Sep 2025 12:30:00 +0000"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    1758803400

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["Thu Sep 25 12:30:00 PM UTC 2025"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Thu Sep 25 12:30:00 UTC 2025

    ----- stderr -----
    ",
    );
}

#[test]
fn heuristic_formats() {
    assert_cmd_snapshot!(
        ts(["2025/09/25 06:15:00"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Thu Sep 25 06:15:00 UTC 2025

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["1758803400"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Thu Sep 25 12:30:00 UTC 2025

    ----- stderr -----
    ",
    );
}

/// The output of `ts -f unix` resolves back to the same instant.
#[test]
fn unix_round_trips() {
    let snap = ts(["-f", "unix", "now"]).snapshot();
    let epoch = snap.stdout().to_string();
    assert_cmd_snapshot!(
        ts([epoch.trim()]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Thu Sep 25 12:30:00 UTC 2025

    ----- stderr -----
    ",
    );
}

/// `--tz` re-expresses the instant without changing it.
#[test]
fn tz_changes_display_only() {
    assert_cmd_snapshot!(
        ts(["--tz", "America/New_York", "now"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Thu Sep 25 08:30:00 EDT 2025

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["--tz", "America/New_York", "-f", "unix", "now"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    1758803400

    ----- stderr -----
    ",
    );
}

/// Unresolvable input is an error that names the input.
#[test]
fn unrecognized() {
    assert_cmd_snapshot!(
        ts(["not-a-timestamp-xyz"]),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    unrecognized timestamp `not-a-timestamp-xyz`
    ",
    );
}
