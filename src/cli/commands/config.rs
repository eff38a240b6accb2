use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            if path.exists() {
                ConfigLogic::print(path)?;
            } else {
                warning("No configuration file, showing defaults.");
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                Config::init_at(path)?;
            }
            ConfigLogic::edit(path, editor)?;
            success(format!("Configuration file edited: {}", path.display()));
        }

        if !*print_config && !*edit_config {
            warning("Nothing to do: use --print or --edit.");
        }
    }

    Ok(())
}
