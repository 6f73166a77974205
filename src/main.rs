use anyhow::{anyhow, Result};
use env_logger::Env;

use rail_bridge::command;
use rail_bridge::constants::{defaults, envvars};
use rail_bridge::helpers::base_path::{BridgePaths, PathOverrides};
use rail_bridge::helpers::load_dotenv;

const CMD_SYNC: &str = "sync";
const CMD_PREVIEW: &str = "preview";
const CMD_DB_STATS: &str = "db-stats";

const ARG_CONFIG: &str = "--config";
const ARG_DB: &str = "--db";
const ARG_OUTPUT: &str = "--output";

const USAGE: &str = "\
Usage: rail-bridge [sync|preview|db-stats] [--config PATH] [--db PATH] [--output PATH]

  sync       rebuild pointconfig.json from the RAIL Data Server config (default)
  preview    print the pointconfig that sync would write
  db-stats   print table statistics of the RAIL Data Server database
";

fn main() -> Result<()> {
    let loaded_dotenv = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    if loaded_dotenv {
        log::debug!("Loaded local .env");
    }

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }
    let subcommand = args.subcommand()?;
    let overrides = PathOverrides {
        config: args.opt_value_from_str(ARG_CONFIG)?,
        database: args.opt_value_from_str(ARG_DB)?,
        output: args.opt_value_from_str(ARG_OUTPUT)?,
    };
    let unused = args.finish();
    if !unused.is_empty() {
        return Err(anyhow!("Unexpected arguments: {:?}", unused));
    }
    let paths = BridgePaths::resolve(overrides);

    match subcommand.as_deref() {
        None | Some(CMD_SYNC) => command::sync(&paths),
        Some(CMD_PREVIEW) => command::preview(&paths),
        Some(CMD_DB_STATS) => command::db_stats(&paths),
        Some(other) => Err(anyhow!(
            "Unknown subcommand '{other}'; must be one of 'sync', 'preview', 'db-stats'"
        )),
    }
}
