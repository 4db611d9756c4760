use std::{collections::HashMap, env, fmt, fs, io::Write, path::PathBuf};

use serde::Serialize;

use crate::generate::{validator::Validator, value::Value};

mod markdown;
pub(crate) mod validator;
pub(crate) mod value;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parse errors.
    Parse(String),
    /// Validation errors.
    Validation(String),
}

impl Error {
    /// Convenience function for creating parse errors.
    pub fn parse<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self::Parse(message.into())
    }

    /// Convenience function for creating validation errors.
    pub fn validation<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self::Validation(message.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(message) => write!(f, "{message}"),
            Error::Validation(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for Error {}

/// A configuration option.
#[derive(Serialize)]
pub struct ConfigOption {
    /// The name of the configuration option.
    ///
    /// The associated environment variable has the format of
    /// `<CRATE>_CONFIG_<NAME>`.
    pub name: &'static str,

    /// The description of the configuration option, included in the generated
    /// markdown documentation.
    pub description: &'static str,

    /// The default value of the configuration option.
    pub default_value: Value,

    /// An optional validator for the configuration option.
    pub constraint: Option<Validator>,
}

impl ConfigOption {
    fn env_var(&self, prefix: &str) -> String {
        format!("{prefix}{}", screaming_snake_case(self.name))
    }

    fn cfg_name(&self) -> String {
        snake_case(self.name)
    }
}

/// Generate and parse config for `crate_name` from a list of options.
///
/// Any `SCREAMING_SNAKE_CASE` environment variable starting with
/// `<CRATE_NAME>_CONFIG_` is parsed into the matching option's [`Value`] and
/// checked against the option's [`Validator`]. Every option is then emitted as a
/// `rustc-env` variable, and boolean options that are `true` are also emitted as
/// `snake_case` cfg's.
///
/// Passing `true` for `emit_md_tables` writes
/// `{crate_name}_config_table.md` and `{crate_name}_selected_config.md` into
/// `OUT_DIR`, for inclusion in the crate documentation.
///
/// Unknown keys with the crate's prefix, unparsable values and values rejected
/// by a validator cause this function to panic, failing the build.
pub fn generate_config(
    crate_name: &str,
    config: &[ConfigOption],
    emit_md_tables: bool,
) -> HashMap<String, Value> {
    let configs = generate_config_internal(std::io::stdout(), crate_name, config);

    if emit_md_tables {
        let file_name = snake_case(crate_name);

        let mut doc_table = String::from(markdown::DOC_TABLE_HEADER);
        let mut selected_config = String::from(markdown::SELECTED_TABLE_HEADER);

        for (name, option, value) in configs.iter() {
            markdown::write_doc_table_line(&mut doc_table, name, option);
            markdown::write_summary_table_line(&mut selected_config, name, value);
        }

        write_out_file(format!("{file_name}_config_table.md"), doc_table);
        write_out_file(format!("{file_name}_selected_config.md"), selected_config);
    }

    configs.into_iter().map(|(k, _, v)| (k, v)).collect()
}

/// Like [`generate_config`], but writes the cargo directives to `stdout` and
/// keeps the matching [`ConfigOption`] next to each value.
pub fn generate_config_internal<'a>(
    mut stdout: impl Write,
    crate_name: &str,
    config: &'a [ConfigOption],
) -> Vec<(String, &'a ConfigOption, Value)> {
    // Only rebuild if `build.rs` changed. Otherwise, Cargo will rebuild if any
    // other file changed.
    writeln!(stdout, "cargo:rerun-if-changed=build.rs").ok();

    let prefix = format!("{}_CONFIG_", screaming_snake_case(crate_name));

    let mut configs = config
        .iter()
        .map(|option| (option.env_var(&prefix), option, option.default_value.clone()))
        .collect::<Vec<_>>();

    capture_from_env(&prefix, &mut configs);

    let failed = configs
        .iter()
        .filter_map(|(var, option, value)| {
            let validator = option.constraint.as_ref()?;
            validator.validate(value).err().map(|e| format!("{var}: {e}"))
        })
        .collect::<Vec<_>>();
    if !failed.is_empty() {
        panic!("Invalid configuration values detected: {failed:?}");
    }

    emit_configuration(&mut stdout, &configs);

    #[cfg(not(test))]
    write_out_file(
        format!("{}_config_data.json", snake_case(crate_name)),
        config_json(&configs),
    );

    configs
}

#[cfg(not(test))]
fn config_json(config: &[(String, &ConfigOption, Value)]) -> String {
    #[derive(Serialize)]
    struct Item<'a> {
        #[serde(flatten)]
        option: &'a ConfigOption,
        actual_value: &'a Value,
    }

    let items = config
        .iter()
        .map(|(_, option, actual_value)| Item {
            option,
            actual_value,
        })
        .collect::<Vec<_>>();

    serde_json::to_string(&items).unwrap_or_default()
}

fn capture_from_env(prefix: &str, configs: &mut [(String, &ConfigOption, Value)]) {
    let mut unknown = Vec::new();
    let mut failed = Vec::new();

    for (var, value) in env::vars() {
        if !var.starts_with(prefix) {
            continue;
        }

        let Some((_, _, cfg)) = configs.iter_mut().find(|(k, _, _)| k == &var) else {
            unknown.push(var);
            continue;
        };

        if let Err(e) = cfg.parse_in_place(&value) {
            failed.push(format!("{var}: {e}"));
        }
    }

    if !failed.is_empty() {
        panic!("Invalid configuration options detected: {failed:?}");
    }

    if !unknown.is_empty() {
        panic!("Unknown configuration options detected: {unknown:?}");
    }
}

fn emit_configuration(mut stdout: impl Write, configs: &[(String, &ConfigOption, Value)]) {
    for (env_var_name, option, value) in configs.iter() {
        let cfg_name = option.cfg_name();

        writeln!(stdout, "cargo:rustc-env={env_var_name}={value}").ok();
        writeln!(stdout, "cargo:rerun-if-env-changed={env_var_name}").ok();
        writeln!(stdout, "cargo:rustc-check-cfg=cfg({cfg_name})").ok();

        if let Value::Bool(true) = value {
            writeln!(stdout, "cargo:rustc-cfg={cfg_name}").ok();
        }

        if let Some(validator) = option.constraint.as_ref() {
            validator.emit_cargo_extras(&mut stdout, &cfg_name, value);
        }
    }
}

fn write_out_file(file_name: String, contents: String) {
    // Outside of a build script there is nowhere to put the file.
    let Some(out_dir) = env::var_os("OUT_DIR") else {
        return;
    };
    let out_file = PathBuf::from(out_dir).join(file_name);
    if let Err(e) = fs::write(&out_file, contents) {
        panic!("Failed to write {}: {e}", out_file.display());
    }
}

fn snake_case(name: &str) -> String {
    let mut name = name.replace('-', "_");
    name.make_ascii_lowercase();

    name
}

fn screaming_snake_case(name: &str) -> String {
    let mut name = name.replace('-', "_");
    name.make_ascii_uppercase();

    name
}

#[cfg(test)]
mod test {
    use super::*;

    fn oscclk_option() -> ConfigOption {
        ConfigOption {
            name: "oscclk-frequency",
            description: "NA",
            default_value: Value::Integer(26_000_000),
            constraint: Some(Validator::IntegerInRange(1_000_000..=100_000_000)),
        }
    }

    fn run(config: &[ConfigOption]) -> (String, Vec<(String, Value)>) {
        let mut stdout = Vec::new();
        let configs = generate_config_internal(&mut stdout, "exynos-test", config);
        let configs = configs.into_iter().map(|(k, _, v)| (k, v)).collect();
        (String::from_utf8(stdout).unwrap(), configs)
    }

    #[test]
    fn value_number_formats() {
        const INPUTS: &[&str] = &["0xAA", "0o252", "0b0000000010101010", "170", "1_70"];
        let mut v = Value::Integer(0);

        for input in INPUTS {
            v.parse_in_place(input).unwrap();
            assert_eq!(v.to_string(), "170");
        }
    }

    #[test]
    fn value_negative_numbers() {
        let mut v = Value::Integer(0);
        v.parse_in_place("-0x10").unwrap();
        assert_eq!(v, Value::Integer(-16));

        v.parse_in_place("-").expect_err("a lone sign is not a number");
    }

    #[test]
    fn value_bool_inputs() {
        let mut v = Value::Bool(false);

        v.parse_in_place("true").unwrap();
        assert_eq!(v.to_string(), "true");

        v.parse_in_place("false").unwrap();
        assert_eq!(v.to_string(), "false");

        v.parse_in_place("yes")
            .expect_err("Only true or false are valid");
    }

    #[test]
    fn defaults_are_emitted() {
        temp_env::with_vars_unset(["EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY"], || {
            let (stdout, configs) = run(&[oscclk_option()]);

            assert_eq!(
                configs,
                vec![(
                    String::from("EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY"),
                    Value::Integer(26_000_000)
                )]
            );
            assert!(stdout.contains("cargo:rustc-env=EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY=26000000"));
            assert!(stdout.contains("cargo:rerun-if-env-changed=EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY"));
            assert!(stdout.contains("cargo:rustc-check-cfg=cfg(oscclk_frequency)"));
        });
    }

    #[test]
    fn env_override() {
        temp_env::with_vars(
            [
                ("EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY", Some("24_000_000")),
                ("EXYNOS_TEST_CONFIG_STRICT", Some("true")),
                ("EXYNOS_TEST_CONFIG_BOARD", Some("a10")),
            ],
            || {
                let configs = generate_config(
                    "exynos-test",
                    &[
                        oscclk_option(),
                        ConfigOption {
                            name: "strict",
                            description: "NA",
                            default_value: Value::Bool(false),
                            constraint: None,
                        },
                        ConfigOption {
                            name: "board",
                            description: "NA",
                            default_value: Value::String(String::from("generic")),
                            constraint: Some(Validator::Enumeration(vec![
                                String::from("generic"),
                                String::from("a10"),
                            ])),
                        },
                        ConfigOption {
                            name: "untouched",
                            description: "NA",
                            default_value: Value::Integer(7),
                            constraint: Some(Validator::PositiveInteger),
                        },
                    ],
                    false,
                );

                assert_eq!(
                    configs["EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY"],
                    Value::Integer(24_000_000)
                );
                assert_eq!(configs["EXYNOS_TEST_CONFIG_STRICT"], Value::Bool(true));
                assert_eq!(
                    configs["EXYNOS_TEST_CONFIG_BOARD"],
                    Value::String(String::from("a10"))
                );
                assert_eq!(configs["EXYNOS_TEST_CONFIG_UNTOUCHED"], Value::Integer(7));
            },
        )
    }

    #[test]
    fn bool_and_enumeration_emit_cfgs() {
        temp_env::with_vars([("EXYNOS_TEST_CONFIG_STRICT", Some("true"))], || {
            let (stdout, _) = run(&[
                ConfigOption {
                    name: "strict",
                    description: "NA",
                    default_value: Value::Bool(false),
                    constraint: None,
                },
                ConfigOption {
                    name: "board",
                    description: "NA",
                    default_value: Value::String(String::from("generic")),
                    constraint: Some(Validator::Enumeration(vec![
                        String::from("generic"),
                        String::from("a10"),
                    ])),
                },
            ]);

            assert!(stdout.contains("cargo:rustc-cfg=strict\n"));
            assert!(stdout.contains("cargo:rustc-check-cfg=cfg(board_a10)"));
            assert!(stdout.contains("cargo:rustc-cfg=board_generic\n"));
        });
    }

    #[test]
    fn custom_validation_passes() {
        temp_env::with_vars([("EXYNOS_TEST_CONFIG_NUMBER", Some("13"))], || {
            run(&[ConfigOption {
                name: "number",
                description: "NA",
                default_value: Value::Integer(-1),
                constraint: Some(Validator::Custom(Box::new(|value| {
                    if value.is_integer() && value.as_integer() % 13 == 0 {
                        Ok(())
                    } else {
                        Err(Error::validation("value is not a multiple of 13"))
                    }
                }))),
            }]);
        });
    }

    #[test]
    #[should_panic]
    fn range_validation_bails() {
        temp_env::with_vars(
            [("EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY", Some("200000000"))],
            || {
                run(&[oscclk_option()]);
            },
        );
    }

    #[test]
    #[should_panic]
    fn default_is_validated_too() {
        temp_env::with_vars_unset(["EXYNOS_TEST_CONFIG_NUMBER"], || {
            run(&[ConfigOption {
                name: "number",
                description: "NA",
                default_value: Value::Integer(0),
                constraint: Some(Validator::PositiveInteger),
            }]);
        });
    }

    #[test]
    #[should_panic]
    fn unparsable_value_bails() {
        temp_env::with_vars(
            [("EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY", Some("26MHz"))],
            || {
                run(&[oscclk_option()]);
            },
        );
    }

    #[test]
    #[should_panic]
    fn unknown_option_bails() {
        temp_env::with_vars(
            [
                ("EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY", Some("26000000")),
                ("EXYNOS_TEST_CONFIG_TYPO", Some("1")),
            ],
            || {
                run(&[oscclk_option()]);
            },
        );
    }

    #[test]
    fn markdown_lines_describe_constraints() {
        let option = oscclk_option();
        let mut table = String::new();
        markdown::write_doc_table_line(&mut table, "EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY", &option);

        assert_eq!(
            table,
            "|**EXYNOS_TEST_CONFIG_OSCCLK_FREQUENCY**|NA|26000000|Integer in range 1000000..=100000000\n"
        );
    }
}
