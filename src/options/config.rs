use serde::Deserialize;

use crate::collection::display::DisplayBackend;

/// The default config file contents, as printed by `--default-config`.
pub const CONFIG_TEXT: &str = r#"# This is a default config file for hostinfo. All values are commented out by default.
# Arguments passed on the command line take precedence over these values.

#[display]
# How the graphics device is found on Linux: "lspci", "driver" or "sdl".
#backend = "lspci"
# How long to wait for the PCI listing command. Milliseconds or a human duration.
#timeout = "2s"
# The command used to list PCI devices.
#lspci_command = "lspci"
"#;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub(crate) display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DisplayConfig {
    pub(crate) backend: Option<DisplayBackend>,
    pub(crate) timeout: Option<StringOrNum>,
    pub(crate) lspci_command: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StringOrNum {
    String(String),
    Num(u64),
}
