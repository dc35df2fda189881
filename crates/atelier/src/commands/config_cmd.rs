//! Config command handler: inspect the resolved configuration.

use crate::cli::{ConfigArgs, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    if args.path {
        output::print_output(
            &atelier_config::config_path().display().to_string(),
            global.quiet,
        );
        return Ok(());
    }

    let cfg = util::resolved_config(global)?;
    let rendered = match global.output {
        OutputFormat::Json => serde_json::to_string_pretty(&cfg)?,
        // TOML is the config's native shape; table output doesn't apply.
        OutputFormat::Table | OutputFormat::Plain => {
            toml::to_string_pretty(&cfg).map_err(|e| CliError::ConfigInvalid {
                message: e.to_string(),
            })?
        }
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}
