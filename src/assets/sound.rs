use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::AssetError;
use crate::types::OpenSound;

/// Plays an audio clip without waiting for it to finish.
pub trait SoundPlayer: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when playback cannot be started.
    fn play(&self, clip: &Path) -> Result<(), AssetError>;
}

/// Launches an external player process per clip, e.g. `ffplay`.
#[derive(Clone, Debug)]
pub struct CommandSoundPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandSoundPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Default for CommandSoundPlayer {
    fn default() -> Self {
        Self::new(
            "ffplay",
            ["-nodisp", "-autoexit", "-loglevel", "quiet"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        )
    }
}

impl SoundPlayer for CommandSoundPlayer {
    fn play(&self, clip: &Path) -> Result<(), AssetError> {
        if !clip.is_file() {
            return Err(AssetError::Io {
                path: clip.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Command::new(&self.program)
            .args(&self.args)
            .arg(clip)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| AssetError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

/// Player that stays silent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Muted;

impl SoundPlayer for Muted {
    fn play(&self, clip: &Path) -> Result<(), AssetError> {
        trace!(clip = %clip.display(), "sound muted");
        Ok(())
    }
}

/// Fires the clip for `sound` from `dir` on a blocking worker. Failures are
/// only logged.
pub fn play_detached(player: Arc<dyn SoundPlayer>, dir: &Path, sound: OpenSound) {
    let clip: PathBuf = dir.join(sound.file_name());
    tokio::task::spawn_blocking(move || {
        if let Err(err) = player.play(&clip) {
            debug!(clip = %clip.display(), error = %err, "open sound skipped");
        }
    });
}
