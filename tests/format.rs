use crate::{command::assert_cmd_snapshot, ts};

/// Scaled duration tokens render a number with two decimal places, and
/// `-u` appends the unit word.
#[test]
fn duration_units() {
    assert_cmd_snapshot!(
        ts(["-f", "hour", "now", "11:30"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    1.00

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["-f", "hour", "-u", "now", "11:30"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    1.00 hours

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["-f", "day", "-u", "now", "yesterday"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    1.52 days

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["-f", "ms", "-u", "now", "11:30"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    3600000 milliseconds

    ----- stderr -----
    ",
    );
}

/// An unrecognized token for a duration falls back to the compact form.
#[test]
fn duration_default() {
    assert_cmd_snapshot!(
        ts(["-f", "dur", "now", "10:00"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    2h30m

    ----- stderr -----
    ",
    );
}

#[test]
fn datetime_named_layouts() {
    assert_cmd_snapshot!(
        ts(["-f", "rfc3339", "now"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    2025-09-25T12:30:00+00:00

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["-f", "date", "now"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    2025-09-25

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["-f", "time", "now"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    12:30:00

    ----- stderr -----
    ",
    );
    assert_cmd_snapshot!(
        ts(["-f", "unix", "now"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    1758803400

    ----- stderr -----
    ",
    );
}

/// Anything else is a custom strftime layout for timestamps.
#[test]
fn datetime_custom_layout() {
    assert_cmd_snapshot!(
        ts(["-f", "%Y-%m-%d %H:%M", "now"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    2025-09-25 12:30

    ----- stderr -----
    ",
    );
}
