/*!
Configuration of a compilation and of a context.

All configuration is contained within a [Config], and each option is a [ConfigOption] noting the bounds of the option.

```rust
# use formula_sat::config::Config;
let mut config = Config::default();
assert!(config.direct_recognition.value);

assert!(config.decision_limit.set_if_within_bounds(64));
assert_eq!(config.decision_limit.value, 64);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod equiv_template;
pub use equiv_template::EquivTemplate;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Recognise formulas already in conjunctive normal form, and lower only other formulas by a Tseitin transformation.
    pub direct_recognition: ConfigOption<bool>,

    /// The clause template used for equivalences during a Tseitin transformation.
    pub equiv_template: ConfigOption<EquivTemplate>,

    /// The greatest count of decisions a solve may make before giving up.
    pub decision_limit: ConfigOption<usize>,

    /// The time limit for a solve.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            direct_recognition: ConfigOption {
                name: "direct_recognition",
                min: false,
                max: true,
                value: true,
            },

            equiv_template: ConfigOption {
                name: "equiv_template",
                min: EquivTemplate::MIN,
                max: EquivTemplate::MAX,
                value: EquivTemplate::Direct,
            },

            decision_limit: ConfigOption {
                name: "decision_limit",
                min: 0,
                max: usize::MAX,
                value: usize::MAX,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::MAX,
            },
        }
    }
}
