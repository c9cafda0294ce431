use {
    anyhow::Context,
    bstr::{BStr, ByteSlice},
    jiff::{
        Span, Timestamp, Zoned, civil,
        fmt::{strtime, temporal},
        tz::{self, Offset},
    },
};

use crate::{
    args::{Usage, flags::Weekday},
    parse::BytesExt,
    span::TimeSpan,
    timezone::TimeZone,
};

static TEMPORAL_PARSER: temporal::DateTimeParser =
    temporal::DateTimeParser::new();
static RFC2822_PARSER: jiff::fmt::rfc2822::DateTimeParser =
    jiff::fmt::rfc2822::DateTimeParser::new();

/// The fixed absolute layouts recognized by the second cascade stage.
///
/// This list is deliberately an immutable static handed to the strategy at
/// construction. There is no registry to mutate, so resolution for a fixed
/// input is identical on every call.
///
/// jiff's strptime cannot parse `%Z`-style zone abbreviations, so layouts
/// that traditionally carry one (Unix `date`, RFC 850) use `%Q` here, which
/// accepts an IANA identifier or an offset.
static KNOWN_LAYOUTS: &[&str] = &[
    // Unix `date` output, e.g. `Thu Sep 25 12:30:00 UTC 2025`.
    "%a %b %e %H:%M:%S %Q %Y",
    // GNU date in 12-hour locales, e.g. `Thu Sep 25 12:30:00 PM UTC 2025`.
    "%a %b %e %I:%M:%S %p %Q %Y",
    // Ruby style, e.g. `Thu Sep 25 12:30:00 +0000 2025`.
    "%a %b %d %H:%M:%S %z %Y",
    // asctime(3), e.g. `Thu Sep 25 12:30:00 2025`.
    "%a %b %e %H:%M:%S %Y",
    // RFC 850, e.g. `Thursday, 25-Sep-25 12:30:00 UTC`.
    "%A, %d-%b-%y %H:%M:%S %Q",
    // RFC 822 with a numeric or named zone.
    "%d %b %y %H:%M:%S %z",
    "%d %b %y %H:%M %z",
    "%d %b %y %H:%M %Q",
];

/// Permissive layouts for the last-resort heuristic stage.
static HEURISTIC_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%b %d %Y %H:%M:%S",
    "%b %d %Y",
];

/// Represents a "datetime" parsed from user input.
///
/// Basically, everything comes down to a physical instant in time. We
/// support a lot of different ways to get to one (including just clock time
/// like `17:30`), but the representation is ultimately an instant in time
/// paired with the time zone it should be displayed in.
///
/// The display zone is the system zone (overridable via the `TZ` environment
/// variable), unless `--tz` re-expresses the instant elsewhere.
///
/// This type exists primarily as a target for trait impls and for
/// centralizing the operations the arithmetic engine needs.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct DateTime {
    /// The actual parsed datetime. i.e., The thing we operate on.
    zdt: Zoned,
}

impl DateTime {
    pub const ARG: Usage = Usage::arg(
        "<timestamp>",
        "A timestamp string, e.g., `now`, `yesterday 10am` or `11:30`.",
        r#"
A timestamp string.

ts accepts a number of different formats for a timestamp automatically, tried
in a fixed order until one succeeds.

Relative phrases are resolved against the current time (which is computed
once when ts starts, or taken from the `TS_NOW` environment variable):
`now`, `today`, `yesterday`, `tomorrow`, clock times like `11:30` or
`5:35pm`, offsets like `2h`, `3 days ago` or `1 week`, and weekday phrases
like `next sunday`, `last friday` or `this thurs`. A day phrase and a clock
time combine in either order, optionally joined by `at`: `yesterday 10am`,
`10am tomorrow`, `next sunday at 22:45`.

Self-contained formats are accepted next: RFC 9557 (e.g.
`2025-03-15T10:23:00-04:00[America/New_York]`), RFC 3339 and flexible
ISO 8601 (e.g. `2025-03-15T10:23:00-04:00`, `2025-03-15`), RFC 2822 (e.g.
`Sat, 15 Mar 2025 10:23:00 -0400`), Unix `date` output, Ruby style, asctime
and RFC 850.

As a last resort, bare numerals are read as Unix epoch values (seconds,
or milliseconds and finer for longer numerals; 8 digits are a packed
`YYYYMMDD` date) and common slash, dot and month-name layouts like
`2025/09/25 06:15:00` or `September 17, 2012` are tried.
"#,
    );

    /// Get the underlying Jiff zoned datetime.
    ///
    /// If possible, prefer defining an operation on `DateTime` instead of
    /// using a `Zoned` directly. This helps centralize the operations we
    /// need, and also helps encourage consistent error reporting.
    pub fn get(&self) -> &Zoned {
        &self.zdt
    }

    /// Move this instant forward by the given span.
    pub fn checked_add(&self, span: &TimeSpan) -> anyhow::Result<DateTime> {
        self.zdt
            .checked_add(span.get())
            .with_context(|| format!("failed to add {span} to {self}"))
            .map(DateTime::from)
    }

    /// Move this instant backward by the given span.
    pub fn checked_sub(&self, span: &TimeSpan) -> anyhow::Result<DateTime> {
        self.zdt
            .checked_sub(span.get())
            .with_context(|| {
                format!("failed to subtract {span} from {self}")
            })
            .map(DateTime::from)
    }

    /// The absolute elapsed time between this instant and another.
    ///
    /// This is symmetric in its arguments and never negative. Equal instants
    /// yield a zero span.
    pub fn absolute_diff(&self, other: &DateTime) -> TimeSpan {
        let dur =
            self.zdt.timestamp().duration_since(other.zdt.timestamp());
        TimeSpan::from(dur.abs())
    }

    /// Advance this instant by the clock time of `other`.
    ///
    /// Only `other`'s hours, minutes and seconds since midnight count; its
    /// date is ignored entirely.
    pub fn add_time_of_day(&self, other: &DateTime) -> anyhow::Result<DateTime> {
        let time = other.zdt.datetime().time();
        let seconds = i64::from(time.hour()) * 3_600
            + i64::from(time.minute()) * 60
            + i64::from(time.second());
        let span = TimeSpan::from(jiff::SignedDuration::from_secs(seconds));
        self.checked_add(&span)
    }

    /// Re-express this instant in the given time zone.
    ///
    /// The instant in absolute time does not change, only its display zone.
    pub fn in_tz(&self, tz: &TimeZone) -> DateTime {
        DateTime { zdt: self.zdt.with_time_zone(tz.get().clone()) }
    }
}

impl From<Zoned> for DateTime {
    fn from(zdt: Zoned) -> DateTime {
        DateTime { zdt }
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.zdt, f)
    }
}

/// A single stage of the resolution cascade.
///
/// `Ok(None)` means the input wasn't recognized and the next strategy should
/// get a try. `Err` means the input was definitively recognized but could
/// not be turned into an instant, and aborts the cascade with that error.
pub trait ResolveStrategy: std::fmt::Debug {
    fn name(&self) -> &'static str;

    fn try_resolve(
        &self,
        reference: &Zoned,
        s: &BStr,
    ) -> anyhow::Result<Option<Zoned>>;
}

/// Resolves free-form timestamp strings via an ordered strategy cascade.
///
/// Strategies are tried in a fixed priority order regardless of the shape of
/// the input; the first to succeed wins. New strategies can be added to the
/// list without touching the resolution loop.
#[derive(Debug)]
pub struct Resolver {
    strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl Resolver {
    pub fn new() -> Resolver {
        Resolver {
            strategies: vec![
                Box::new(Relative),
                Box::new(KnownLayouts { layouts: KNOWN_LAYOUTS }),
                Box::new(Heuristic { layouts: HEURISTIC_LAYOUTS }),
            ],
        }
    }

    /// Resolve `raw` into an instant, anchored to `reference` for relative
    /// phrases. When `tz` is given, the resolved instant is re-expressed in
    /// that zone as a pure post-processing step.
    pub fn resolve(
        &self,
        reference: &Zoned,
        raw: &BStr,
        tz: Option<&TimeZone>,
    ) -> anyhow::Result<DateTime> {
        for strategy in self.strategies.iter() {
            let Some(zdt) = strategy.try_resolve(reference, raw)? else {
                continue;
            };
            log::debug!(
                "resolved `{raw}` with the {} strategy",
                strategy.name(),
            );
            let mut dt = DateTime::from(zdt);
            if let Some(tz) = tz {
                dt = dt.in_tz(tz);
            }
            return Ok(dt);
        }
        anyhow::bail!("unrecognized timestamp `{raw}`")
    }
}

/// Relative and natural-language phrases, anchored to the reference instant.
#[derive(Debug)]
struct Relative;

impl ResolveStrategy for Relative {
    fn name(&self) -> &'static str {
        "relative"
    }

    fn try_resolve(
        &self,
        reference: &Zoned,
        s: &BStr,
    ) -> anyhow::Result<Option<Zoned>> {
        parse_relative(reference, s)
    }
}

/// Self-contained absolute formats: RFC 9557, flexible ISO 8601, RFC 2822
/// and a fixed list of strptime layouts.
///
/// Nothing here is anchored to the reference instant. Layouts lacking zone
/// information are interpreted as wall-clock time in the reference's zone.
#[derive(Debug)]
struct KnownLayouts {
    layouts: &'static [&'static str],
}

impl ResolveStrategy for KnownLayouts {
    fn name(&self) -> &'static str {
        "known-layouts"
    }

    fn try_resolve(
        &self,
        reference: &Zoned,
        s: &BStr,
    ) -> anyhow::Result<Option<Zoned>> {
        // We attempt the most specific thing first: an RFC 9557 timestamp
        // with a time zone annotation.
        //
        // We do keep the error for this around, since if we later find out
        // that we did have a time zone annotation but something else about
        // it was invalid, then we'll want to return this error.
        let temporal_parse_err = match TEMPORAL_PARSER.parse_zoned(s) {
            Err(err) => err,
            Ok(zdt) => return Ok(Some(zdt)),
        };
        if let Ok(pieces) = temporal::Pieces::parse(s) {
            // If we parsed a time zone annotation, that means the RFC 9557
            // parse failed above for exciting reasons. Like perhaps, an
            // offset inconsistent with the time zone. Or an invalid time
            // zone name. So we should just return the error that we got
            // above.
            if pieces.time_zone_annotation().is_some() {
                return Err(temporal_parse_err.into());
            }
            let date = pieces.date();
            let time = pieces.time().unwrap_or(civil::Time::midnight());
            let dt = date.to_datetime(time);
            let zdt = match pieces.offset() {
                None => dt.to_zoned(reference.time_zone().clone())?,
                Some(temporal::PiecesOffset::Zulu) => {
                    dt.to_zoned(tz::TimeZone::unknown())?
                }
                Some(temporal::PiecesOffset::Numeric(ref off)) => {
                    if off.offset() == Offset::UTC && off.is_negative() {
                        dt.to_zoned(tz::TimeZone::unknown())?
                    } else {
                        dt.to_zoned(tz::TimeZone::fixed(off.offset()))?
                    }
                }
                Some(unk) => {
                    anyhow::bail!("unrecognized parsed offset: {unk:?}")
                }
            };
            return Ok(Some(zdt));
        }
        // N.B. This also covers RFC 822/1123 shapes and RFC 9110.
        if let Ok(zdt) = RFC2822_PARSER.parse_zoned(s) {
            return Ok(Some(zdt));
        }
        for layout in self.layouts {
            let Ok(tm) = strtime::parse(layout, s) else { continue };
            return broken_down_to_zoned(&tm, reference.time_zone())
                .map(Some);
        }
        Ok(None)
    }
}

/// Last resort: epoch numerals and a list of permissive layouts.
#[derive(Debug)]
struct Heuristic {
    layouts: &'static [&'static str],
}

impl ResolveStrategy for Heuristic {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn try_resolve(
        &self,
        reference: &Zoned,
        s: &BStr,
    ) -> anyhow::Result<Option<Zoned>> {
        let tz = reference.time_zone();
        if !s.is_empty() && s.iter().all(|b| b.is_ascii_digit()) {
            // 8 digits reads most naturally as a packed calendar date.
            if s.len() == 8 {
                if let Ok(tm) = strtime::parse("%Y%m%d", s) {
                    return broken_down_to_zoned(&tm, tz).map(Some);
                }
            }
            let digits = s.to_str().expect("all ASCII digits");
            let n: i64 = digits.parse().with_context(|| {
                format!("epoch value `{digits}` is out of range")
            })?;
            let ts = match s.len() {
                ..=11 => Timestamp::from_second(n),
                12..=14 => Timestamp::from_millisecond(n),
                15..=17 => Timestamp::from_microsecond(n),
                _ => Timestamp::from_nanosecond(i128::from(n)),
            }
            .with_context(|| {
                format!("epoch value `{digits}` is out of range")
            })?;
            return Ok(Some(ts.to_zoned(tz.clone())));
        }
        for layout in self.layouts {
            let Ok(tm) = strtime::parse(layout, s) else { continue };
            return broken_down_to_zoned(&tm, tz).map(Some);
        }
        Ok(None)
    }
}

/// Converts a parsed broken down time to a zoned datetime.
///
/// A parsed IANA identifier or offset pins the instant; otherwise the civil
/// datetime is interpreted as wall-clock time in the default zone. A missing
/// time means midnight.
fn broken_down_to_zoned(
    tm: &strtime::BrokenDownTime,
    default_tz: &tz::TimeZone,
) -> anyhow::Result<Zoned> {
    if let Ok(zdt) = tm.to_zoned() {
        return Ok(zdt);
    }
    if let Ok(ts) = tm.to_timestamp() {
        let tz = tm
            .offset()
            .map(tz::TimeZone::fixed)
            .unwrap_or_else(|| default_tz.clone());
        return Ok(ts.to_zoned(tz));
    }
    let date = tm.to_date()?;
    let time = tm.to_time().unwrap_or(civil::Time::midnight());
    Ok(date.to_datetime(time).to_zoned(default_tz.clone())?)
}

/// Tries to parse a relative phrase in `s` against the reference given.
///
/// If one could not be found, then `None` is returned. If one is
/// definitively found, but it could not be processed into a zoned datetime
/// for some reason, then an error is returned.
fn parse_relative(
    reference: &Zoned,
    raw: &BStr,
) -> anyhow::Result<Option<Zoned>> {
    // Phrases are matched case insensitively and `at` is just a joiner:
    // `Next Sunday AT 22:45` and `next sunday 22:45` are the same input.
    let normalized = raw.to_ascii_lowercase().replace(" at ", " ");
    let s = normalized.trim().as_bstr();
    match &**s {
        b"now" => return Ok(Some(reference.clone())),
        b"today" => return Ok(Some(reference.start_of_day()?)),
        b"yesterday" => {
            return Ok(Some(reference.yesterday()?.start_of_day()?));
        }
        b"tomorrow" => return Ok(Some(reference.tomorrow()?.start_of_day()?)),
        _ => {}
    }
    let Some((first, rest)) = s.split_once_str(" ") else {
        // A single token is a clock time, a duration offset or a weekday.
        // Clock times must be tried before durations since, e.g.,
        // `14:30:00` is also a valid friendly duration.
        if let Some(time) = parse_clock(s) {
            return Ok(Some(reference.with().time(time).build()?));
        }
        if let Some(zdt) = parse_friendly(reference, s)? {
            return Ok(Some(zdt));
        }
        return parse_day_phrase(reference, s);
    };
    // `<clock> <day phrase>`, e.g., `10am tomorrow` or `5pm next wed`.
    if let Some(time) = parse_clock(first.as_bstr()) {
        if let Some(zdt) = parse_day_phrase(reference, rest.as_bstr())? {
            return Ok(Some(zdt.with().time(time).build()?));
        }
    }
    // `<day phrase> <clock>`, e.g., `yesterday 10am` or `next sunday 22:45`.
    if let Some((head, last)) = s.rsplit_once_str(" ") {
        if let Some(time) = parse_clock(last.as_bstr()) {
            if let Some(zdt) = parse_day_phrase(reference, head.as_bstr())? {
                return Ok(Some(zdt.with().time(time).build()?));
            }
        }
    }
    // A relative offset written out with spaces, e.g., `3 days ago`,
    // `1 week` or `1 year 1 second`.
    if let Some(zdt) = parse_friendly(reference, s)? {
        return Ok(Some(zdt));
    }
    parse_day_phrase(reference, s)
}

/// Parses a description of a day (`today`, `yesterday`, `tomorrow` or a
/// weekday phrase like `next sunday`) relative to the reference given.
///
/// Unlike the bare specials in `parse_relative`, the day keywords here keep
/// the reference's clock time. They are only reachable as part of a bigger
/// phrase, where either an explicit clock time is set afterward or the
/// weekday semantics want "same time of day".
fn parse_day_phrase(
    reference: &Zoned,
    s: &BStr,
) -> anyhow::Result<Option<Zoned>> {
    match &**s {
        b"today" => return Ok(Some(reference.clone())),
        b"yesterday" => return Ok(Some(reference.yesterday()?)),
        b"tomorrow" => return Ok(Some(reference.tomorrow()?)),
        _ => {}
    }
    if let Ok(wd) = s.parse::<Weekday>() {
        return Ok(Some(relative_weekday(reference, 0, wd)?));
    }
    if let Some((first, rest)) = s.split_once_str(" ") {
        if let Some(multiplier) = parse_multiplier(first.as_bstr()) {
            if let Ok(wd) = rest.parse::<Weekday>() {
                return Ok(Some(relative_weekday(
                    reference, multiplier, wd,
                )?));
            }
        }
    }
    Ok(None)
}

/// Finds the next/previous weekday relative to the datetime given.
///
/// The multiplier refers to the "nth" weekday, with a negative multiplier
/// going back in time.
///
/// The zeroth multiplier is a little special. In this case, if the given
/// zoned datetime falls on the given weekday, then the zoned datetime is
/// returned unchanged.
fn relative_weekday(
    reference: &Zoned,
    mut multiplier: i32,
    weekday: Weekday,
) -> anyhow::Result<Zoned> {
    if multiplier == 0 {
        if reference.weekday() == weekday.get() {
            return Ok(reference.clone());
        }
        multiplier = 1;
    }
    reference.nth_weekday(multiplier, weekday.get()).with_context(|| {
        format!("failed to get {multiplier} {weekday}s after {reference}")
    })
}

/// Attempts to parse `s` as a weekday multiplier.
///
/// A multiplier can be a signed integer or an English word standing in for
/// one: `this` means 0, `last` means -1, `next` and `first` mean 1, and so
/// on. The input is expected to be lowercased already.
fn parse_multiplier(s: &BStr) -> Option<i32> {
    if let Some(n) = s.to_str().ok().and_then(|s| s.parse::<i32>().ok()) {
        return Some(n);
    }
    Some(match &**s {
        b"this" => 0,
        b"last" => -1,
        b"next" | b"first" => 1,
        b"second" => 2,
        b"third" => 3,
        b"fourth" => 4,
        b"fifth" => 5,
        _ => return None,
    })
}

/// Parses a friendly duration as an offset from the reference datetime.
fn parse_friendly(
    reference: &Zoned,
    s: &BStr,
) -> anyhow::Result<Option<Zoned>> {
    let Ok(s) = s.to_str() else { return Ok(None) };
    let Ok(span) = s.parse::<Span>() else { return Ok(None) };
    let zdt = reference.checked_add(span).with_context(|| {
        format!("failed to add `{span:#}` to `{reference}`")
    })?;
    Ok(Some(zdt))
}

/// Parses one of a variety of different clock times, including am/pm.
fn parse_clock(s: &BStr) -> Option<civil::Time> {
    static FORMATS: &[&str] =
        &["%I:%M:%S%P", "%I:%M%P", "%I%P", "%H:%M:%S", "%H:%M"];

    for fmt in FORMATS {
        if let Ok(time) = civil::Time::strptime(fmt, s) {
            return Some(time);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn reference() -> Zoned {
        date(2025, 9, 25).at(12, 30, 0, 0).in_tz("UTC").unwrap()
    }

    fn resolve(s: &str) -> DateTime {
        Resolver::new()
            .resolve(&reference(), BStr::new(s), None)
            .unwrap()
    }

    fn resolve_err(s: &str) -> anyhow::Error {
        Resolver::new()
            .resolve(&reference(), BStr::new(s), None)
            .unwrap_err()
    }

    fn at(
        year: i16,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> Zoned {
        date(year, month, day).at(hour, minute, second, 0).in_tz("UTC").unwrap()
    }

    #[test]
    fn relative_specials() {
        assert_eq!(*resolve("now").get(), reference());
        assert_eq!(*resolve("today").get(), at(2025, 9, 25, 0, 0, 0));
        assert_eq!(*resolve("yesterday").get(), at(2025, 9, 24, 0, 0, 0));
        assert_eq!(*resolve("tomorrow").get(), at(2025, 9, 26, 0, 0, 0));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(*resolve("  now ").get(), reference());
        assert_eq!(
            *resolve(" yesterday 10am  ").get(),
            at(2025, 9, 24, 10, 0, 0)
        );
    }

    #[test]
    fn relative_clock_times() {
        assert_eq!(*resolve("11:30").get(), at(2025, 9, 25, 11, 30, 0));
        assert_eq!(*resolve("03:15").get(), at(2025, 9, 25, 3, 15, 0));
        assert_eq!(*resolve("10am").get(), at(2025, 9, 25, 10, 0, 0));
        assert_eq!(*resolve("5:35:52pm").get(), at(2025, 9, 25, 17, 35, 52));
    }

    #[test]
    fn relative_offsets() {
        assert_eq!(*resolve("2h").get(), at(2025, 9, 25, 14, 30, 0));
        assert_eq!(*resolve("5 minutes ago").get(), at(2025, 9, 25, 12, 25, 0));
        assert_eq!(*resolve("3 days ago").get(), at(2025, 9, 22, 12, 30, 0));
        assert_eq!(*resolve("1 week").get(), at(2025, 10, 2, 12, 30, 0));
    }

    #[test]
    fn relative_day_with_clock() {
        // 2025-09-25 is a Thursday.
        assert_eq!(*resolve("yesterday 10am").get(), at(2025, 9, 24, 10, 0, 0));
        assert_eq!(*resolve("10am tomorrow").get(), at(2025, 9, 26, 10, 0, 0));
        assert_eq!(
            *resolve("next sunday at 22:45").get(),
            at(2025, 9, 28, 22, 45, 0)
        );
        assert_eq!(
            *resolve("last friday at 5pm").get(),
            at(2025, 9, 19, 17, 0, 0)
        );
    }

    #[test]
    fn relative_weekdays() {
        assert_eq!(*resolve("next sunday").get(), at(2025, 9, 28, 12, 30, 0));
        assert_eq!(*resolve("last friday").get(), at(2025, 9, 19, 12, 30, 0));
        // The reference is itself a Thursday, so `this thurs` is a no-op.
        assert_eq!(*resolve("this thurs").get(), reference());
    }

    #[test]
    fn known_layouts() {
        assert_eq!(
            resolve("2025-09-25T06:00:00-04:00").get().timestamp(),
            at(2025, 9, 25, 10, 0, 0).timestamp(),
        );
        assert_eq!(
            resolve("Thu, 25 Sep 2025 12:30:00 +0000").get().timestamp(),
            reference().timestamp(),
        );
        assert_eq!(
            *resolve("Thu Sep 25 12:30:00 UTC 2025").get(),
            reference(),
        );
        assert_eq!(
            *resolve("Thu Sep 25 12:30:00 PM UTC 2025").get(),
            reference(),
        );
        assert_eq!(*resolve("2025-09-25").get(), at(2025, 9, 25, 0, 0, 0));
    }

    #[test]
    fn heuristics() {
        assert_eq!(
            *resolve("2025/09/25 06:15:00").get(),
            at(2025, 9, 25, 6, 15, 0)
        );
        assert_eq!(
            *resolve("September 17, 2012").get(),
            at(2012, 9, 17, 0, 0, 0)
        );
        assert_eq!(*resolve("1758803400").get(), reference());
        assert_eq!(*resolve("20250925").get(), at(2025, 9, 25, 0, 0, 0));
        assert_eq!(
            resolve("1758803400000").get().timestamp(),
            reference().timestamp()
        );
    }

    #[test]
    fn tz_override_keeps_instant() {
        let tz: TimeZone = "America/New_York".parse().unwrap();
        let dt = Resolver::new()
            .resolve(&reference(), BStr::new("now"), Some(&tz))
            .unwrap();
        assert_eq!(dt.get().timestamp(), reference().timestamp());
        assert_eq!(dt.get().datetime().hour(), 8);
    }

    #[test]
    fn unrecognized_input_names_it() {
        let err = resolve_err("definitely not a timestamp");
        assert!(
            err.to_string().contains("definitely not a timestamp"),
            "got: {err}"
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve("3 days ago");
        let b = resolve("3 days ago");
        assert_eq!(a, b);
    }
}
