use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(&'static str),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(flag) => write!(f, "Missing value for {}", flag),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "-c" | "--command" => flags.command = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-k" | "--no-lookalikes" => flags.no_lookalikes = true,
            "--allow-repeats" => flags.allow_repeats = true,
            "--allow-sequences" => flags.allow_sequences = true,
            "--all-classes" => flags.all_classes = true,
            "-l" | "--length" => flags.length = Some(next_number(args, &mut i, "--length")?),
            "-n" | "--number" => flags.number = Some(next_number(args, &mut i, "--number")?),
            "--special" => flags.special = Some(next_value(args, &mut i, "--special")?),
            "-x" | "--exclude" => flags.exclude = Some(next_value(args, &mut i, "--exclude")?),
            "-o" | "--output" => {
                // Path is optional; a bare -o falls back to the default name.
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(String::new());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn next_value(args: &[String], i: &mut usize, flag: &'static str) -> Result<String, ParseError> {
    *i += 1;
    args.get(*i).cloned().ok_or(ParseError::MissingValue(flag))
}

fn next_number(args: &[String], i: &mut usize, flag: &'static str) -> Result<usize, ParseError> {
    let value = next_value(args, i, flag)?;
    value.parse().map_err(|_| ParseError::InvalidNumber(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("passforge".to_string())
            .chain(line.split_whitespace().map(String::from))
            .collect()
    }

    #[test]
    fn parses_length_and_number() {
        let flags = parse(&args("-l 20 -n 5")).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(5));
    }

    #[test]
    fn parses_class_and_constraint_switches() {
        let flags = parse(&args("--no-symbols --no-lookalikes --allow-repeats --all-classes")).unwrap();
        assert!(flags.no_symbols);
        assert!(flags.no_lookalikes);
        assert!(flags.allow_repeats);
        assert!(!flags.allow_sequences);
        assert!(flags.all_classes);
    }

    #[test]
    fn exclude_takes_a_value() {
        let flags = parse(&args("-x abc123")).unwrap();
        assert_eq!(flags.exclude.as_deref(), Some("abc123"));
    }

    #[test]
    fn output_path_is_optional() {
        assert_eq!(parse(&args("-o")).unwrap().output.as_deref(), Some(""));
        assert_eq!(
            parse(&args("-o pw.txt")).unwrap().output.as_deref(),
            Some("pw.txt")
        );
        // A following flag must not be eaten as the path.
        let flags = parse(&args("-o -q")).unwrap();
        assert_eq!(flags.output.as_deref(), Some(""));
        assert!(flags.quiet);
    }

    #[test]
    fn rejects_unknown_arguments_and_bad_numbers() {
        assert_eq!(
            parse(&args("--bogus")),
            Err(ParseError::UnknownArg("--bogus".into()))
        );
        assert_eq!(
            parse(&args("-l abc")),
            Err(ParseError::InvalidNumber("abc".into()))
        );
        assert_eq!(
            parse(&args("-l")),
            Err(ParseError::MissingValue("--length"))
        );
    }

    #[test]
    fn explicit_args_detection() {
        assert!(!parse(&args("")).unwrap().has_explicit_args());
        assert!(!parse(&args("-q -b")).unwrap().has_explicit_args());
        assert!(parse(&args("-l 12")).unwrap().has_explicit_args());
        assert!(parse(&args("--no-digits")).unwrap().has_explicit_args());
    }
}
