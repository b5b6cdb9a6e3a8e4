//! On-disk persistence of [`OracleState`].

use std::{fs, path::Path};

use borsh::BorshDeserialize;
use tracing::debug;

use crate::{
    errors::{OracleError, OracleResult},
    oracle::OracleState,
};

/// Writes the state to `path`.  The file is replaced atomically by writing a sibling temp file
/// and renaming it over the target.
pub fn save_snapshot(path: &Path, state: &OracleState) -> OracleResult<()> {
    let buf = borsh::to_vec(state)?;

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");

    fs::write(&tmp_path, &buf)?;
    fs::rename(&tmp_path, path)?;

    debug!(path = %path.display(), len = buf.len(), "wrote oracle snapshot");
    Ok(())
}

/// Loads a state previously written by [`save_snapshot`].  Returns `None` if there is no file.
pub fn load_snapshot(path: &Path) -> OracleResult<Option<OracleState>> {
    if !path.exists() {
        return Ok(None);
    }

    let buf = fs::read(path)?;
    let state = OracleState::try_from_slice(&buf)
        .map_err(|e| OracleError::CorruptSnapshot(e.to_string()))?;
    state.validate()?;

    debug!(path = %path.display(), count = state.ring().count(), "loaded oracle snapshot");
    Ok(Some(state))
}
