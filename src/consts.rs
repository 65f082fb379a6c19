use regex::Regex;
use std::sync::LazyLock;

/// Matches an experiment ID like `px1234`, bounded by the string edges or a `-`/`_` separator.
/// The token itself is capture group 1.
pub static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|[-_])(px\d{4,})(?:[-_]|$)").unwrap());

/// Matches an eight digit date token, bounded the same way as [`ID_RE`].
pub static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[-_])(\d{8})(?:[-_]|$)").unwrap());

/// Characters stripped from both ends of the leftover name.
pub const SEPARATORS: [char; 2] = ['-', '_'];

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
