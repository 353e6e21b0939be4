use std::time::Duration;

use formula_sat::config::{Config, EquivTemplate};

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// How much to hold back: 0 for everything, 1 to drop the parse tree and trace, 2 for only the verdict and model.
    pub quiet: u8,

    /// Whether to write the CNF in DIMACS form.
    pub dimacs: bool,

    /// A seed from which to generate a random formula, in place of reading a formula.
    pub random: Option<u64>,

    /// The formula, if given as an argument.
    pub formula: Option<String>,
}

pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// Parse CLI arguments to a [Config] struct and a [CliConfig] struct.
///
/// Any argument which does not begin with `-` is read as the formula, and at most one formula may be given.
pub(super) fn parse_args(args: &[String], cli_options: &mut CliConfig) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    'arg_examination: for arg in args.iter().skip(1) {
        if !arg.starts_with('-') {
            if cli_options.formula.is_some() {
                return Err(ConfigError::NonSpecific(format!(
                    "At most one formula may be given, found a second: {arg}"
                )));
            }
            cli_options.formula = Some(arg.clone());
            continue 'arg_examination;
        }

        let mut split = arg.split("=");
        match split.next() {
            Some("-q") => cli_options.quiet = std::cmp::max(cli_options.quiet, 1),

            Some("-qq") => cli_options.quiet = 2,

            Some("--dimacs") => cli_options.dimacs = true,

            Some("--tseitin") => cfg.direct_recognition.value = false,

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, an error is returned.
            //
            // Further, the cases should be in lexicographic order.
            //
            Some("--decision_limit") => {
                let (min, max) = cfg.decision_limit.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if cfg.decision_limit.set_if_within_bounds(value) {
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "decision_limit requires a value between {min} and {max}"
                )));
            }

            Some("--equiv") => {
                let (min, max) = cfg.equiv_template.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<EquivTemplate>() {
                        if cfg.equiv_template.set_if_within_bounds(value) {
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "equiv requires a template between {min} and {max}"
                )));
            }

            Some("--random") => {
                if let Some(request) = split.next() {
                    if let Ok(seed) = request.parse::<u64>() {
                        cli_options.random = Some(seed);
                        continue 'arg_examination;
                    }
                }

                return Err(ConfigError::NonSpecific(
                    "random requires a seed between 0 and 2^64 - 1".to_string(),
                ));
            }

            Some("--time_limit") => {
                let (min, _) = cfg.time_limit.min_max();

                if let Some(request) = split.next() {
                    if let Ok(seconds) = request.parse::<u64>() {
                        if cfg.time_limit.set_if_within_bounds(Duration::from_secs(seconds)) {
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "time_limit requires a count of seconds, of at least {}",
                    min.as_secs()
                )));
            }

            _ => {
                return Err(ConfigError::NonSpecific(format!("Unknown option: {arg}")));
            }
        }
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("formula_sat")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn options_and_formula() {
        let mut cli_options = CliConfig::default();
        let config = parse_args(
            &args(&["-q", "--tseitin", "--decision_limit=12", "a&b"]),
            &mut cli_options,
        );

        let Ok(config) = config else { panic!("! options rejected") };
        assert!(!config.direct_recognition.value);
        assert_eq!(config.decision_limit.value, 12);
        assert_eq!(cli_options.quiet, 1);
        assert_eq!(cli_options.formula.as_deref(), Some("a&b"));
    }

    #[test]
    fn rejections() {
        for bad in [
            args(&["--decision_limit=many"]),
            args(&["--equiv=Sideways"]),
            args(&["--random"]),
            args(&["--unknown"]),
            args(&["a", "b"]),
        ] {
            assert!(parse_args(&bad, &mut CliConfig::default()).is_err());
        }
    }
}
