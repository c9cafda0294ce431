use {bstr::BStr, jiff::Zoned};

use crate::{
    args::flags::Mode,
    datetime::{DateTime, Resolver},
    parse::BytesExt,
    span::TimeSpan,
    timezone::TimeZone,
    value::Value,
};

/// Combine an already resolved timestamp with a second free-form input.
///
/// The second input is classified before the mode is applied: anything
/// containing duration tokens (like `2h` or `30m`) is treated as a duration,
/// even if it would also resolve as a timestamp. A malformed duration (say,
/// an overflowing numeral) is therefore a hard error rather than a fallback
/// to timestamp resolution.
///
/// The shape of the result depends on both the mode and the classification:
/// shifting a timestamp by a duration yields a timestamp, diffing two
/// timestamps yields a duration, and adding two timestamps yields the first
/// advanced by the second's time of day.
pub fn combine(
    resolver: &Resolver,
    reference: &Zoned,
    mode: Mode,
    first: &DateTime,
    second: &BStr,
    tz: Option<&TimeZone>,
) -> anyhow::Result<Value> {
    if TimeSpan::looks_like(second) {
        let span = second.parse::<TimeSpan>()?;
        let shifted = match mode {
            Mode::Diff => first.checked_sub(&span)?,
            Mode::Add => first.checked_add(&span)?,
        };
        return Ok(Value::DateTime(shifted));
    }
    let second = resolver.resolve(reference, second, tz)?;
    match mode {
        Mode::Diff => Ok(Value::Duration(first.absolute_diff(&second))),
        Mode::Add => Ok(Value::DateTime(first.add_time_of_day(&second)?)),
    }
}
