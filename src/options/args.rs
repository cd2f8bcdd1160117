//! Argument parsing via clap.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "hostinfo [OPTIONS]";

/// The arguments for hostinfo.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub display_args: DisplayArgs,

    #[command(flatten)]
    pub output_args: OutputArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If not set, the default location is used if a file exists there."
    )]
    pub config_location: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Display Options")]
pub struct DisplayArgs {
    #[arg(
        short = 'b',
        long,
        value_name = "BACKEND",
        value_parser = ["lspci", "driver", "sdl"],
        help = "Sets how the graphics device is found on Linux.",
        long_help = indoc! {
            "Sets how the graphics device is found on Linux. 'lspci' parses the VGA entry of the
            PCI device listing and reports the device description. 'driver' reports the name of the
            video driver bound to the primary DRM card. 'sdl' reports the video driver SDL picks,
            like 'x11' or 'wayland', and needs the 'sdl' feature. Defaults to 'lspci'. Ignored on
            other platforms."
        }
    )]
    pub backend: Option<String>,

    #[arg(
        short = 't',
        long,
        value_name = "TIME",
        help = "How long to wait for the PCI listing command.",
        long_help = "How long to wait for the PCI listing command before giving up. Takes a number in \
                    milliseconds or a human duration (e.g. 2s). Must be between 100ms and 60s. \
                    Defaults to 2s."
    )]
    pub timeout: Option<String>,

    #[arg(
        long,
        value_name = "COMMAND",
        help = "The command used to list PCI devices.",
        long_help = "The command used to list PCI devices. It is split on whitespace and run \
                    directly, without a shell. Defaults to 'lspci'."
    )]
    pub lspci_command: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Output Options")]
pub struct OutputArgs {
    #[arg(long, help = "Prints the report as JSON.")]
    pub json: bool,

    #[arg(
        long,
        help = "Reports values the way the legacy native interface does.",
        long_help = "Reports values the way the legacy native interface does: failed memory queries \
                    show as -1 and a failed graphics device query shows as null."
    )]
    pub legacy: bool,

    #[arg(long, help = "Prints a default config file and exits.")]
    pub default_config: bool,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short='h', long, action=ArgAction::Help, help="Prints help info (for more details use `--help`.)")]
    help: (),

    #[arg(short='V', long, action=ArgAction::Version, help="Prints version information.")]
    version: (),
}

/// Returns an [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}
