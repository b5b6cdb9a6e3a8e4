//! Command line tool that replays checkpoint proposals against a persisted checkpoint oracle.
//!
//! The oracle is restored from the snapshot in the datadir (or freshly initialized from the
//! configured params), the script's proposals are applied in order, and the resulting state
//! is written back.

mod args;
mod config;
mod errors;
mod replay;
mod script;

use std::{fs, path::Path, process};

use anyhow::Context;
use args::Args;
use config::Config;
use errors::InitError;
use replay::{ReplaySummary, replay};
use script::ReplayScript;
use strata_checkpoint_oracle::{
    CheckpointOracle, OracleParams, StaticAuthority, load_snapshot, save_snapshot,
};
use strata_common::logging::{self, FileLoggingConfig, LoggerConfig};
use tracing::*;

fn main() {
    let args: Args = argh::from_env();
    if let Err(e) = main_inner(args) {
        eprintln!("ERROR\n{e:?}");
        process::exit(1);
    }
}

fn main_inner(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_file(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(datadir) = args.datadir {
        config.storage.datadir = datadir;
    }

    init_logging(&config)?;

    let script = ReplayScript::from_file(&args.script)
        .with_context(|| format!("loading replay script from {}", args.script.display()))?;

    let summary = execute(&config, &script)?;
    info!(
        accepted = summary.accepted.len(),
        rejected = summary.rejected,
        "replay finished"
    );
    Ok(())
}

fn init_logging(config: &Config) -> Result<(), InitError> {
    let mut lconfig = LoggerConfig::new("strata-oracle-tool".to_owned())
        .with_json_logging(config.logging.json_format);

    if let Some(log_dir) = &config.logging.log_dir {
        lconfig = lconfig.with_file_logging(
            FileLoggingConfig::new(log_dir.clone(), "oracle-tool".to_owned())
                .with_json_format(config.logging.json_format),
        );
    }

    logging::init(lconfig)?;
    Ok(())
}

/// Restores the oracle, applies the script and persists the result.
fn execute(config: &Config, script: &ReplayScript) -> Result<ReplaySummary, InitError> {
    config.oracle.check_well_formed()?;
    fs::create_dir_all(&config.storage.datadir)?;

    let snapshot_path = config.snapshot_path();
    let mut oracle = open_oracle(&snapshot_path, &config.oracle)?;

    let summary = replay(&mut oracle, script)?;

    if let Some(state) = oracle.state() {
        save_snapshot(&snapshot_path, state)?;
    }
    info!(
        latest_height = oracle.latest_height(),
        count = oracle.count(),
        path = %snapshot_path.display(),
        "saved oracle state"
    );

    Ok(summary)
}

/// Loads the oracle from `path`, or initializes a fresh one if there is no snapshot yet.
fn open_oracle(path: &Path, params: &OracleParams) -> Result<CheckpointOracle, InitError> {
    let Some(state) = load_snapshot(path)? else {
        info!(path = %path.display(), "no snapshot found, initializing oracle");
        let mut oracle = CheckpointOracle::new();
        oracle.init_with_params(params)?;
        return Ok(oracle);
    };

    let stored = OracleParams::new(*state.authority(), state.ring().max_count());
    if &stored != params {
        return Err(InitError::ParamsMismatch {
            configured: params.clone(),
            stored,
        });
    }

    Ok(CheckpointOracle::from_state(StaticAuthority, state)?)
}

#[cfg(test)]
mod tests {
    use strata_oracle_types::{Address, Buf32};

    use super::*;
    use crate::{
        config::{LoggingConfig, StorageConfig},
        script::ProposalEntry,
    };

    const AUTHORITY: Address = Address::new([0xaa; 20]);

    fn test_config(datadir: &Path, max_count: u64) -> Config {
        Config {
            oracle: OracleParams::new(AUTHORITY, max_count),
            logging: LoggingConfig::default(),
            storage: StorageConfig {
                datadir: datadir.to_path_buf(),
            },
        }
    }

    fn script(heights: &[u64]) -> ReplayScript {
        ReplayScript {
            host_blocks: vec![],
            proposals: heights
                .iter()
                .map(|&height| ProposalEntry {
                    caller: AUTHORITY,
                    commitment: Buf32::new([height as u8; 32]),
                    height,
                    host_height: height,
                    anchor: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_execute_persists_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir.path().join("data"), 2);

        let summary = execute(&config, &script(&[10, 20])).unwrap();
        assert_eq!(summary.accepted.len(), 2);
        assert!(config.snapshot_path().exists());

        // Second run picks up where the first left off.
        let summary = execute(&config, &script(&[15, 30])).unwrap();
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.accepted[0].index, 0);

        let state = load_snapshot(&config.snapshot_path()).unwrap().unwrap();
        let oracle = CheckpointOracle::from_state(StaticAuthority, state).unwrap();
        let heights: Vec<_> = oracle
            .checkpoints()
            .unwrap()
            .iter()
            .map(|r| r.height())
            .collect();
        assert_eq!(heights, vec![20, 30]);
    }

    #[test]
    fn test_execute_rejects_changed_params() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), 2);
        execute(&config, &script(&[10])).unwrap();

        let resized = test_config(dir.path(), 3);
        assert!(matches!(
            execute(&resized, &script(&[20])),
            Err(InitError::ParamsMismatch { .. })
        ));
    }

    #[test]
    fn test_execute_rejects_zero_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), 0);
        assert!(matches!(
            execute(&config, &script(&[])),
            Err(InitError::Oracle(_))
        ));
    }
}
