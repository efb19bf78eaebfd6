use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Result;
use crate::error::Error as ToastError;
use crate::geometry::Size;
use crate::types::{AnimationKind, Corner, Easing, ImageStyle, OpenSound};

mod defaults;
mod durations;
mod env;
mod raw;

pub(crate) use defaults::{
    DEFAULT_ALPHA, DEFAULT_ANIMATION_DURATION, DEFAULT_APP_NAME, DEFAULT_FRAME_INTERVAL,
    DEFAULT_MESSAGE, DEFAULT_OPEN_TIME_MS, DEFAULT_TITLE, DEFAULT_WINDOW_SIZE,
};
pub(crate) use durations::HumantimeDuration;

pub use defaults::DEFAULT_SCREEN;

/// Immutable description of one toast. Built and validated by
/// [`crate::builder::ToastBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) alpha: f64,
    pub(crate) open_time: Duration,
    pub(crate) image_style: ImageStyle,
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) app_name: String,
    pub(crate) image_source: String,
    pub(crate) open_sound: OpenSound,
    pub(crate) corner: Corner,
    pub(crate) animation_kind: AnimationKind,
    pub(crate) show_buttons: bool,
    pub(crate) window_size: Size,
    pub(crate) animation_duration: Duration,
    pub(crate) easing: Easing,
    pub(crate) frame_interval: Duration,
    pub(crate) sound_dir: PathBuf,
}

impl Config {
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Dwell time between the end of the open animation and the start of
    /// the close animation.
    #[must_use]
    pub const fn open_time(&self) -> Duration {
        self.open_time
    }

    #[must_use]
    pub const fn image_style(&self) -> ImageStyle {
        self.image_style
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn image_source(&self) -> &str {
        &self.image_source
    }

    #[must_use]
    pub const fn open_sound(&self) -> OpenSound {
        self.open_sound
    }

    #[must_use]
    pub const fn corner(&self) -> Corner {
        self.corner
    }

    #[must_use]
    pub const fn animation_kind(&self) -> AnimationKind {
        self.animation_kind
    }

    #[must_use]
    pub const fn show_buttons(&self) -> bool {
        self.show_buttons
    }

    #[must_use]
    pub const fn window_size(&self) -> Size {
        self.window_size
    }

    #[must_use]
    pub const fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    #[must_use]
    pub const fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    #[must_use]
    pub fn sound_dir(&self) -> &Path {
        &self.sound_dir
    }

    /// Time from `start()` until the close animation lands.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.animation_duration
            .saturating_mul(2)
            .saturating_add(self.open_time)
    }
}

/// Everything the `toaster` binary reads from its configuration sources.
#[derive(Debug, Clone)]
pub struct Settings {
    pub toast: Config,
    /// Screen size override for surfaces that cannot query it.
    pub screen: Option<Size>,
    pub sound: SoundSettings,
    pub image_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundSettings {
    pub mute: bool,
    pub player: String,
    pub player_args: Vec<String>,
}

impl Settings {
    /// Load settings from a TOML file (optional) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration file cannot be parsed, when
    /// environment overrides are invalid, or when the resulting values fail
    /// validation.
    pub fn from_env_and_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut raw = raw::load(path).map_err(ToastError::from)?;
        raw.apply_env_overrides().map_err(ToastError::from)?;
        raw.validate_and_build()
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use crate::types::{AnimationKind, Corner};
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn loads_sections_from_toml() {
        let dir = std::env::temp_dir().join(format!("toaster-cfg-{}", std::process::id()));
        if let Err(err) = std::fs::create_dir_all(&dir) {
            panic!("failed to create temp dir: {err}");
        }
        let path = dir.join("toaster.toml");
        let written = std::fs::File::create(&path).and_then(|mut file| {
            file.write_all(
                br#"
[toast]
title = "Build finished"
message = "All green"
open_time_ms = 1200

[window]
corner = "bottom-left"
width = 320
height = 120
screen = "1280x720"

[animation]
kind = "fade"
alpha = 0.5
duration = "250ms"

[assets]
mute = true
"#,
            )
        });
        if let Err(err) = written {
            panic!("failed to write config: {err}");
        }

        let settings = match Settings::from_env_and_file(&path) {
            Ok(settings) => settings,
            Err(err) => panic!("config rejected: {err}"),
        };
        assert_eq!(settings.toast.title(), "Build finished");
        assert_eq!(settings.toast.open_time(), Duration::from_millis(1200));
        assert_eq!(settings.toast.corner(), Corner::BottomLeft);
        assert_eq!(settings.toast.animation_kind(), AnimationKind::Fade);
        assert_eq!(
            settings.toast.animation_duration(),
            Duration::from_millis(250)
        );
        assert!((settings.toast.alpha() - 0.5).abs() < f64::EPSILON);
        assert_eq!(settings.toast.window_size().width, 320.0);
        assert_eq!(settings.screen.map(|s| s.height), Some(720.0));
        assert!(settings.sound.mute);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn negative_open_time_fails_fast() {
        let dir = std::env::temp_dir().join(format!("toaster-neg-{}", std::process::id()));
        if let Err(err) = std::fs::create_dir_all(&dir) {
            panic!("failed to create temp dir: {err}");
        }
        let path = dir.join("toaster.toml");
        if let Err(err) = std::fs::write(&path, "[toast]\nopen_time_ms = -5\n") {
            panic!("failed to write config: {err}");
        }

        let err = match Settings::from_env_and_file(&path) {
            Ok(_) => panic!("negative open time accepted"),
            Err(err) => err,
        };
        assert!(err.is_config());
        assert!(err.to_string().contains("open_time"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn undrawable_screen_is_rejected() {
        let dir = std::env::temp_dir().join(format!("toaster-screen-{}", std::process::id()));
        if let Err(err) = std::fs::create_dir_all(&dir) {
            panic!("failed to create temp dir: {err}");
        }
        let path = dir.join("toaster.toml");
        if let Err(err) = std::fs::write(&path, "[window]\nscreen = \"NaNxNaN\"\n") {
            panic!("failed to write config: {err}");
        }

        let err = match Settings::from_env_and_file(&path) {
            Ok(_) => panic!("NaN screen accepted"),
            Err(err) => err,
        };
        assert!(err.is_config());
        assert!(err.to_string().contains("window.screen"), "{err}");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
