use std::sync::LazyLock;

use {
    anyhow::Context,
    bstr::{BStr, ByteSlice},
    jiff::{SignedDuration, fmt::friendly},
    regex::bytes::Regex,
};

use crate::{args::Usage, parse::FromBytes};

/// The compact duration token pattern: one or more digits followed by a
/// single unit letter. Everything else in the input is ignored.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)([dhms])").unwrap());

/// An elapsed amount of time.
///
/// This is just a wrapper around `jiff::SignedDuration`, which does most of
/// the heavy lifting for us. The wrapper exists so that parsing and
/// rendering specific to this tool have a home: a `TimeSpan` parses from the
/// compact token syntax (`2d1h30m`) and displays in jiff's compact friendly
/// format.
///
/// This is named `TimeSpan` mostly just so that it doesn't clash with
/// `jiff::Span`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeSpan {
    /// The accumulated duration. i.e., The thing we operate on.
    dur: SignedDuration,
}

impl TimeSpan {
    pub const ARG: Usage = Usage::arg(
        "<duration>",
        "A compact duration, e.g., `30m`, `2h5m` or `10d12h`.",
        r#"
A compact duration.

A duration is a sequence of `<digits><unit>` tokens where the unit is one of
`d` (days), `h` (hours), `m` (minutes) or `s` (seconds). Tokens may appear in
any order and repeat; every token adds to the total. For example, `2h5m` is 2
hours and 5 minutes, `10d12h` is 10 and a half days, and `1h1h` is 2 hours.

Text between tokens is ignored, but at least one token must be present for
the input to count as a duration at all. An argument with no token is
resolved as a timestamp instead.
"#,
    );

    /// Returns true if at least one duration token appears in the input.
    ///
    /// The arithmetic engine uses this for dispatch: anything that contains
    /// a token is treated as a duration, even if it would also resolve as a
    /// timestamp.
    pub fn looks_like(s: &BStr) -> bool {
        TOKEN.is_match(s)
    }

    /// Get the underlying Jiff duration.
    ///
    /// If possible, prefer defining an operation on `TimeSpan` instead of
    /// using a `SignedDuration` directly. This helps centralize the
    /// operations we need, and also helps encourage consistent error
    /// reporting.
    pub fn get(&self) -> SignedDuration {
        self.dur
    }

    /// The magnitude of this span in fractional seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.dur.as_secs_f64()
    }

    /// The magnitude of this span in whole milliseconds.
    pub fn as_millis(&self) -> i128 {
        self.dur.as_millis()
    }
}

impl From<SignedDuration> for TimeSpan {
    fn from(dur: SignedDuration) -> TimeSpan {
        TimeSpan { dur }
    }
}

impl std::fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        static PRINTER: LazyLock<friendly::SpanPrinter> = LazyLock::new(|| {
            friendly::SpanPrinter::new()
                .designator(friendly::Designator::Compact)
                .spacing(friendly::Spacing::None)
        });
        f.write_str(&PRINTER.duration_to_string(&self.dur))
    }
}

impl std::str::FromStr for TimeSpan {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<TimeSpan> {
        TimeSpan::from_bytes(s.as_bytes())
    }
}

impl FromBytes for TimeSpan {
    type Err = anyhow::Error;

    fn from_bytes(s: &[u8]) -> anyhow::Result<TimeSpan> {
        let mut seconds: i64 = 0;
        let mut found = false;
        for caps in TOKEN.captures_iter(s) {
            found = true;
            // The pattern guarantees ASCII digits, so UTF-8 always holds.
            let digits = caps[1].to_str().expect("ASCII digits");
            // A numeral too big for i64 is a hard error rather than a
            // silently skipped token.
            let value: i64 = digits.parse().with_context(|| {
                format!("duration value `{digits}` is out of range")
            })?;
            let unit_seconds = match caps[2][0] {
                b'd' => 86_400,
                b'h' => 3_600,
                b'm' => 60,
                b's' => 1,
                unit => unreachable!("unit `{}` can't match", unit as char),
            };
            seconds = value
                .checked_mul(unit_seconds)
                .and_then(|n| seconds.checked_add(n))
                .with_context(|| {
                    format!(
                        "accumulated duration overflows at token \
                         `{digits}{unit}`",
                        unit = caps[2][0] as char,
                    )
                })?;
        }
        if !found {
            anyhow::bail!(
                "no duration tokens (like `2h` or `30m`) in `{s}`",
                s = s.as_bstr()
            );
        }
        Ok(TimeSpan { dur: SignedDuration::from_secs(seconds) })
    }
}
