#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub default: bool,
    pub command: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub no_lookalikes: bool,
    pub allow_repeats: bool,
    pub allow_sequences: bool,
    pub all_classes: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub special: Option<String>,
    pub exclude: Option<String>,
    pub output: Option<String>,
}

impl CliFlags {
    /// True when the invocation carries its own generation options, in which
    /// case a saved command must not be replayed over them.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.saved
            || self.default
            || self.no_lower
            || self.no_upper
            || self.no_digits
            || self.no_symbols
            || self.no_lookalikes
            || self.allow_repeats
            || self.allow_sequences
            || self.all_classes
            || self.special.is_some()
            || self.exclude.is_some()
            || self.output.is_some()
    }
}
