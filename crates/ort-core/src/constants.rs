/// ORT engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Worst (least precise) precision code. Also used when a record carries no PDC.
pub const MAX_PDC: u8 = 18;

/// CoCoMac precision letters, in rank order. `A` is 0, `R` is 17.
pub const PDC_LETTERS: &str = "ABCDEFGHIJKLMNOPQR";

/// Highest connection density (degree) value.
pub const MAX_DEGREE: u8 = 3;

/// Separator between map and site in a region identifier.
pub const REGION_SEPARATOR: char = '-';

/// Name of the project-level config file looked up by `OrtConfig::load`.
pub const CONFIG_FILE_NAME: &str = "ort.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "ORT_LOG";
