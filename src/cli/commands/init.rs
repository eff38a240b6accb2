use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config_path();

    info("Initializing hoslog...");
    let cfg = Config::init_at(&path)?;

    println!("📄 Config file : {}", path.display());
    println!(
        "🚚 HOS limits  : {}h driving / {}h on duty",
        cfg.max_driving_hours, cfg.max_on_duty_hours
    );

    success("hoslog initialization completed!");
    Ok(())
}
