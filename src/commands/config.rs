//! Config subcommands handler

use anyhow::Result;

use stepscope::cli::ConfigAction;
use stepscope::Config;

/// Dispatch `stepscope config`; a bare `config` shows the current values.
pub fn handle(action: Option<ConfigAction>) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => handle_show(),
        ConfigAction::Path => handle_path(),
    }
}

/// Show current configuration as TOML.
fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{toml_str}");
    Ok(())
}

/// Print the path the configuration is read from.
fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
