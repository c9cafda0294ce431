use jiff::fmt::strtime;

use crate::{args::flags::Format, datetime::DateTime, span::TimeSpan};

/// The default layout for rendering an instant, in the style of Unix
/// `date`, e.g., `Thu Sep 25 12:30:00 UTC 2025`.
pub const DEFAULT_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// The final result of a computation: either an instant or an elapsed time.
///
/// Carrying the variant through to rendering (instead of, say, formatting
/// eagerly at the point of computation) keeps all presentation decisions in
/// one place.
#[derive(Clone, Debug)]
pub enum Value {
    DateTime(DateTime),
    Duration(TimeSpan),
}

impl Value {
    /// Render this value as the line to print.
    ///
    /// The format token selects among named layouts appropriate to the
    /// variant. For an instant, anything that isn't a recognized name is
    /// handed to strftime as a custom layout. For a duration, an
    /// unrecognized name falls back to the compact default rendering.
    ///
    /// `unit` appends a unit word to scaled duration renderings. It has no
    /// effect on instants or on the compact default.
    pub fn render(
        &self,
        format: &Format,
        unit: bool,
    ) -> anyhow::Result<String> {
        match *self {
            Value::DateTime(ref dt) => render_datetime(dt, format.token()),
            Value::Duration(ref span) => {
                Ok(render_duration(span, format.token(), unit))
            }
        }
    }
}

fn render_datetime(
    dt: &DateTime,
    token: Option<&str>,
) -> anyhow::Result<String> {
    let zdt = dt.get();
    let layout = match token {
        None | Some("") | Some("datetime") => DEFAULT_FORMAT,
        Some("rfc3339") => "%Y-%m-%dT%H:%M:%S%:z",
        Some("date") => "%Y-%m-%d",
        Some("time") => "%H:%M:%S",
        Some("unix") => return Ok(zdt.timestamp().as_second().to_string()),
        Some(custom) => custom,
    };
    Ok(strtime::format(layout, zdt)?)
}

fn render_duration(span: &TimeSpan, token: Option<&str>, unit: bool) -> String {
    let (divisor, suffix) = match token {
        Some("d" | "day" | "days") => (86_400.0, " days"),
        Some("h" | "hour" | "hours") => (3_600.0, " hours"),
        Some("m" | "min" | "mins" | "minutes") => (60.0, " minutes"),
        Some("s" | "sec" | "secs" | "seconds") => (1.0, " seconds"),
        Some("ms" | "msec" | "msecs" | "milliseconds") => {
            let mut rendered = span.as_millis().to_string();
            if unit {
                rendered.push_str(" milliseconds");
            }
            return rendered;
        }
        // This covers `dur`, `duration` and any unrecognized token.
        _ => return span.to_string(),
    };
    let mut rendered = format!("{:.2}", span.as_secs_f64() / divisor);
    if unit {
        rendered.push_str(suffix);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use {
        bstr::BStr,
        jiff::{SignedDuration, civil::date},
    };

    use {super::*, crate::parse::BytesExt};

    fn hours(n: i64) -> Value {
        Value::Duration(TimeSpan::from(SignedDuration::from_secs(n * 3_600)))
    }

    fn instant() -> Value {
        let zdt = date(2025, 9, 25).at(12, 30, 0, 0).in_tz("UTC").unwrap();
        Value::DateTime(DateTime::from(zdt))
    }

    fn fmt(token: &str) -> Format {
        BStr::new(token).parse::<Format>().unwrap()
    }

    #[test]
    fn duration_scaled_tokens() {
        assert_eq!(hours(24).render(&fmt("day"), false).unwrap(), "1.00");
        assert_eq!(
            hours(24).render(&fmt("day"), true).unwrap(),
            "1.00 days"
        );
        assert_eq!(hours(1).render(&fmt("h"), false).unwrap(), "1.00");
        assert_eq!(
            hours(1).render(&fmt("minutes"), true).unwrap(),
            "60.00 minutes"
        );
        assert_eq!(
            hours(1).render(&fmt("ms"), true).unwrap(),
            "3600000 milliseconds"
        );
    }

    #[test]
    fn duration_default_is_compact() {
        let span =
            Value::Duration(TimeSpan::from(SignedDuration::from_secs(9_000)));
        assert_eq!(span.render(&Format::default(), false).unwrap(), "2h30m");
        assert_eq!(span.render(&fmt("dur"), true).unwrap(), "2h30m");
    }

    #[test]
    fn datetime_named_layouts() {
        assert_eq!(
            instant().render(&Format::default(), false).unwrap(),
            "Thu Sep 25 12:30:00 UTC 2025"
        );
        assert_eq!(
            instant().render(&fmt("rfc3339"), false).unwrap(),
            "2025-09-25T12:30:00+00:00"
        );
        assert_eq!(instant().render(&fmt("date"), false).unwrap(), "2025-09-25");
        assert_eq!(instant().render(&fmt("time"), false).unwrap(), "12:30:00");
        assert_eq!(
            instant().render(&fmt("unix"), false).unwrap(),
            "1758803400"
        );
    }

    #[test]
    fn datetime_custom_layout() {
        assert_eq!(
            instant().render(&fmt("%Y-%m-%d %H:%M"), false).unwrap(),
            "2025-09-25 12:30"
        );
    }

    #[test]
    fn datetime_bad_custom_layout_is_an_error() {
        assert!(instant().render(&fmt("%!"), false).is_err());
    }
}
