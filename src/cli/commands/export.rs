use crate::cli::commands::load_trip;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        trip,
        format,
        file,
        force,
    } = cmd
    {
        let plan = load_trip(trip)?;
        ExportLogic::export(&plan, cfg, format, file, *force)?;
    }
    Ok(())
}
