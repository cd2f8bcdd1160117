use std::path::Path;

use anyhow::{Context, Result};
use hostinfo::{
    options::{self, config::CONFIG_TEXT},
    report::{HostReport, LegacyHostReport, SystemDetails},
    LegacyBoundary, PlatformProvider,
};

fn main() -> Result<()> {
    let args = options::args::get_args();

    #[cfg(all(feature = "logging", debug_assertions))]
    {
        hostinfo::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("debug.log"),
        )?;
    }

    if args.output_args.default_config {
        print!("{CONFIG_TEXT}");
        return Ok(());
    }

    let config = options::get_config(args.general_args.config_location.as_deref().map(Path::new))
        .context("Unable to properly parse or read the config file.")?;
    let settings = options::get_display_settings(&args, &config)
        .context("Found an issue while setting up the display query.")?;
    let output = options::get_output_options(&args);

    log::debug!("display settings: {settings:?}");

    let provider = PlatformProvider::new(settings);
    let details = SystemDetails::current();

    let rendered = if output.legacy {
        let report = LegacyHostReport::collect(details, &LegacyBoundary::new(provider));
        render(&report, output.json)?
    } else {
        let report = HostReport::collect(details, &provider);
        render(&report, output.json)?
    };

    print!("{rendered}");

    Ok(())
}

fn render<R: serde::Serialize + std::fmt::Display>(report: &R, json: bool) -> Result<String> {
    if json {
        let mut rendered =
            serde_json::to_string_pretty(report).context("Unable to serialize the report.")?;
        rendered.push('\n');
        Ok(rendered)
    } else {
        Ok(report.to_string())
    }
}
