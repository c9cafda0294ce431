use bstr::ByteSlice;

use crate::{args::Usage, parse::FromBytes};

/// The arithmetic mode selected on the command line.
///
/// Exactly one mode is active per invocation. When neither `-d` nor `-a` is
/// given, `Diff` is used.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Compute the difference between the two values.
    #[default]
    Diff,
    /// Add the second value to the first.
    Add,
}

impl Mode {
    pub const USAGE_DIFF: Usage = Usage::flag(
        "-d, --diff",
        "Compute the difference between two timestamps (default).",
        r#"
Compute the difference between two timestamps (default).

When the second argument is a duration like `2h30m`, the result is the first
timestamp moved backward by that amount. When the second argument is itself a
timestamp, the result is the absolute elapsed time between the two, which is
never negative regardless of argument order.
"#,
    );

    pub const USAGE_ADD: Usage = Usage::flag(
        "-a, --add",
        "Add the second argument to the first timestamp.",
        r#"
Add the second argument to the first timestamp.

When the second argument is a duration like `2h30m`, the result is the first
timestamp moved forward by that amount. When the second argument is itself a
timestamp, only its clock time is used: the first timestamp is advanced by
the second's hours, minutes and seconds since midnight, and the second's date
is ignored entirely.
"#,
    );
}

/// The render token given via `-f/--format`.
///
/// The token is kept verbatim because its interpretation depends on the
/// shape of the result: `day` selects a unit for a duration, `date` selects
/// a layout for a timestamp, and anything unrecognized is a custom strftime
/// pattern for timestamps but the default rendering for durations. See
/// `Value::render`.
#[derive(Clone, Debug, Default)]
pub struct Format {
    token: Option<Box<str>>,
}

impl Format {
    pub const USAGE: Usage = Usage::flag(
        "-f, --format <token>",
        "Render the result in this format.",
        r#"
Render the result in this format.

For durations (the result of diffing two timestamps), the recognized tokens
are `d`/`day`/`days`, `h`/`hour`/`hours`, `m`/`min`/`mins`/`minutes`,
`s`/`sec`/`secs`/`seconds` and `ms`/`msec`/`msecs`/`milliseconds`. Each
renders the duration as a number in that unit, with two decimal places
(milliseconds are integral). Any other token, or no token at all, renders the
compact human form, e.g. `2h30m`.

For timestamps, the recognized tokens are `rfc3339`, `date`, `time` and
`unix` (epoch seconds). The `datetime` token, or no token at all, renders the
default form, e.g. `Thu Sep 25 12:30:00 UTC 2025`. Any other token is used
verbatim as a strftime(3)-style pattern, e.g. `%Y-%m-%d %H:%M`.
"#,
    );

    /// Returns the raw token, if one was given.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Format> {
        Format::from_bytes(s.as_bytes())
    }
}

impl FromBytes for Format {
    type Err = anyhow::Error;

    fn from_bytes(s: &[u8]) -> anyhow::Result<Format> {
        let token = s.to_str().map_err(|_| {
            anyhow::anyhow!(
                "format token `{s}` is not valid UTF-8",
                s = s.as_bstr()
            )
        })?;
        Ok(Format { token: Some(token.into()) })
    }
}

/// A weekday parsed from user input, e.g. `sunday`, `Thurs` or `FR`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Weekday {
    weekday: jiff::civil::Weekday,
}

impl Weekday {
    /// Return the parsed weekday.
    pub fn get(&self) -> jiff::civil::Weekday {
        self.weekday
    }
}

impl From<jiff::civil::Weekday> for Weekday {
    fn from(weekday: jiff::civil::Weekday) -> Weekday {
        Weekday { weekday }
    }
}

impl std::str::FromStr for Weekday {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Weekday> {
        Weekday::from_bytes(s.as_bytes())
    }
}

impl FromBytes for Weekday {
    type Err = anyhow::Error;

    fn from_bytes(s: &[u8]) -> anyhow::Result<Weekday> {
        use jiff::civil::Weekday::*;

        let weekday = match &*s.to_ascii_lowercase() {
            b"sunday" | b"sun" | b"su" => Sunday,
            b"monday" | b"mon" | b"mo" => Monday,
            b"tuesday" | b"tues" | b"tue" | b"tu" => Tuesday,
            b"wednesday" | b"wed" | b"we" => Wednesday,
            b"thursday" | b"thurs" | b"thu" | b"th" => Thursday,
            b"friday" | b"fri" | b"fr" => Friday,
            b"saturday" | b"sat" | b"sa" => Saturday,
            unk => anyhow::bail!(
                "unrecognized weekday: `{unk}`",
                unk = unk.as_bstr()
            ),
        };
        Ok(Weekday { weekday })
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self.weekday {
            jiff::civil::Weekday::Sunday => "Sunday",
            jiff::civil::Weekday::Monday => "Monday",
            jiff::civil::Weekday::Tuesday => "Tuesday",
            jiff::civil::Weekday::Wednesday => "Wednesday",
            jiff::civil::Weekday::Thursday => "Thursday",
            jiff::civil::Weekday::Friday => "Friday",
            jiff::civil::Weekday::Saturday => "Saturday",
        };
        write!(f, "{s}")
    }
}
