use std::io::Write;

use bstr::{BString, ByteSlice};

use crate::{
    args::{self, Usage, flags},
    compute,
    datetime::{DateTime, Resolver},
    parse::OsStrExt,
    span::TimeSpan,
    timezone::TimeZone,
    value::Value,
};

const USAGE: &'static str = r#"
Resolve free-form timestamps and do simple arithmetic on them.

ts accepts one or two timestamp arguments. A single argument is resolved and
printed. With two arguments, the default is to print the elapsed time between
them, and -a/--add adds the second to the first instead. A second argument
containing duration tokens like `2h30m` shifts the first timestamp by that
amount instead.

USAGE:
    ts [options] <timestamp> [<timestamp> | <duration>]

TIP:
    use -h for short docs and --help for long docs, and --examples for
    example invocations

REQUIRED ARGUMENTS:
%args%
OPTIONS:
%flags%
"#;

const EXAMPLES: &'static str = r#"EXAMPLES:
    Print the current time in the default format:

        ts now

    Resolve a timestamp written in some other format:

        ts '14.01.2023'
        ts 1758803400
        ts 'September 17, 2012'

    Resolve a relative phrase:

        ts '5 minutes ago'
        ts 'next sunday at 22:45'
        ts 'yesterday 10am'

    Print the elapsed time between two timestamps:

        ts now '2023-01-14T10:00:00Z'
        ts now 11:30
        ts -f hour -u now 11:30

    Shift a timestamp by a duration:

        ts -a now 2h30m
        ts now 12d4h

    Add the clock time of one timestamp to another:

        ts -a now 01:30

    Render the result in another format or time zone:

        ts -f rfc3339 now
        ts -f unix now
        ts -f '%Y-%m-%d %H:%M' now
        ts --tz Europe/Berlin now
"#;

const USAGE_UNIT: Usage = Usage::flag(
    "-u, --unit",
    "Append a unit word to scaled duration output.",
    r#"
Append a unit word to scaled duration output.

This only has an effect when the result is a duration and -f/--format
selects a scaling unit. For example, `-f hour -u` renders `1.00 hours`
instead of `1.00`.
"#,
);

const USAGE_EXAMPLES: Usage = Usage::flag(
    "-e, --examples",
    "Print example invocations and exit.",
    r#"
Print example invocations and exit.

All other flags and arguments are ignored when this is given.
"#,
);

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    let mut config = Config::default();
    args::configure(p, USAGE, &mut [&mut config])?;
    if config.examples {
        let mut wtr = std::io::stdout().lock();
        write!(wtr, "{EXAMPLES}")?;
        return Ok(());
    }

    let resolver = Resolver::new();
    let reference = &*crate::NOW;
    let tz = config.tz.as_ref();
    let value = match &*config.args {
        [] => anyhow::bail!("at least one timestamp argument is required"),
        [only] => {
            Value::DateTime(resolver.resolve(reference, only.as_bstr(), tz)?)
        }
        [first, second] => {
            let first = resolver.resolve(reference, first.as_bstr(), tz)?;
            compute::combine(
                &resolver,
                reference,
                config.mode,
                &first,
                second.as_bstr(),
                tz,
            )?
        }
        args => anyhow::bail!(
            "expected at most two timestamp arguments, but got {}",
            args.len(),
        ),
    };
    let mut wtr = std::io::stdout().lock();
    writeln!(wtr, "{}", value.render(&config.format, config.unit)?)?;
    Ok(())
}

#[derive(Debug, Default)]
struct Config {
    args: Vec<BString>,
    mode: flags::Mode,
    format: flags::Format,
    unit: bool,
    examples: bool,
    tz: Option<TimeZone>,
}

impl args::Configurable for Config {
    fn configure(
        &mut self,
        p: &mut lexopt::Parser,
        arg: &mut lexopt::Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            lexopt::Arg::Value(ref mut v) => {
                self.args.push(BString::from(v.to_bytes()?));
            }
            lexopt::Arg::Short('d') | lexopt::Arg::Long("diff") => {
                self.mode = flags::Mode::Diff;
            }
            lexopt::Arg::Short('a') | lexopt::Arg::Long("add") => {
                self.mode = flags::Mode::Add;
            }
            lexopt::Arg::Short('u') | lexopt::Arg::Long("unit") => {
                self.unit = true;
            }
            lexopt::Arg::Short('e') | lexopt::Arg::Long("examples") => {
                self.examples = true;
            }
            lexopt::Arg::Short('f') | lexopt::Arg::Long("format") => {
                self.format = args::parse_bytes(p, "-f/--format")?;
            }
            lexopt::Arg::Long("tz") => {
                self.tz = Some(args::parse_bytes(p, "--tz")?);
            }
            lexopt::Arg::Short('v') | lexopt::Arg::Long("version") => {
                return Err(args::Version.into());
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        &[
            DateTime::ARG,
            TimeSpan::ARG,
            flags::Mode::USAGE_DIFF,
            flags::Mode::USAGE_ADD,
            flags::Format::USAGE,
            USAGE_UNIT,
            USAGE_EXAMPLES,
            TimeZone::USAGE,
        ]
    }
}
