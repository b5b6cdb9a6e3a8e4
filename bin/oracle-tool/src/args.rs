//! CLI argument parsing.

use std::path::PathBuf;

use argh::FromArgs;

#[derive(Clone, Debug, FromArgs)]
#[argh(description = "Replays checkpoint proposals against a persisted checkpoint oracle")]
pub(crate) struct Args {
    #[argh(option, short = 'c', description = "path to configuration")]
    pub(crate) config: PathBuf,

    /// Overrides `storage.datadir` from the config.
    #[argh(
        option,
        short = 'd',
        description = "datadir path holding the oracle snapshot"
    )]
    pub(crate) datadir: Option<PathBuf>,

    #[argh(option, short = 's', description = "JSON replay script")]
    pub(crate) script: PathBuf,
}
