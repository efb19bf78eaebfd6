//! Fluent construction of toasts.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::Result;
use crate::assets::{DEFAULT_IMAGE_TIMEOUT, ImageLoader, Muted, SoundPlayer};
use crate::config::{
    Config, DEFAULT_ALPHA, DEFAULT_ANIMATION_DURATION, DEFAULT_APP_NAME, DEFAULT_FRAME_INTERVAL,
    DEFAULT_MESSAGE, DEFAULT_OPEN_TIME_MS, DEFAULT_TITLE, DEFAULT_WINDOW_SIZE,
};
use crate::error::ConfigError;
use crate::geometry::Size;
use crate::platform::Surface;
use crate::toast::Toast;
use crate::types::{AnimationKind, Corner, Easing, ImageStyle, OpenSound};

/// Upper bound for the open/close animation and its frame interval.
const MAX_ANIMATION_TIMING: Duration = Duration::from_secs(60 * 60);

/// Collects toast settings; nothing is checked until [`ToastBuilder::build_config`]
/// or [`ToastBuilder::build`].
///
/// ```
/// use toaster::builder::ToastBuilder;
/// use toaster::types::Corner;
///
/// let config = ToastBuilder::new()
///     .title("Notification")
///     .message("Iron Man 2")
///     .app_name("AC/DC")
///     .corner(Corner::BottomRight)
///     .build_config()
///     .unwrap();
/// assert_eq!(config.corner(), Corner::BottomRight);
/// ```
#[derive(Clone)]
pub struct ToastBuilder {
    alpha: f64,
    open_time_ms: i64,
    image_style: ImageStyle,
    title: String,
    message: String,
    app_name: String,
    image_source: String,
    open_sound: OpenSound,
    corner: Corner,
    animation_kind: AnimationKind,
    show_buttons: bool,
    window_size: Size,
    animation_duration: Duration,
    easing: Easing,
    frame_interval: Duration,
    sound_dir: PathBuf,
    sound_player: Option<Arc<dyn SoundPlayer>>,
    image_loader: Option<ImageLoader>,
}

impl Default for ToastBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToastBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastBuilder")
            .field("title", &self.title)
            .field("corner", &self.corner)
            .field("animation_kind", &self.animation_kind)
            .field("open_time_ms", &self.open_time_ms)
            .finish_non_exhaustive()
    }
}

impl From<&Config> for ToastBuilder {
    fn from(config: &Config) -> Self {
        Self {
            alpha: config.alpha,
            open_time_ms: i64::try_from(config.open_time.as_millis()).unwrap_or(i64::MAX),
            image_style: config.image_style,
            title: config.title.clone(),
            message: config.message.clone(),
            app_name: config.app_name.clone(),
            image_source: config.image_source.clone(),
            open_sound: config.open_sound,
            corner: config.corner,
            animation_kind: config.animation_kind,
            show_buttons: config.show_buttons,
            window_size: config.window_size,
            animation_duration: config.animation_duration,
            easing: config.easing,
            frame_interval: config.frame_interval,
            sound_dir: config.sound_dir.clone(),
            sound_player: None,
            image_loader: None,
        }
    }
}

impl ToastBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            open_time_ms: DEFAULT_OPEN_TIME_MS,
            image_style: ImageStyle::default(),
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            image_source: String::new(),
            open_sound: OpenSound::default(),
            corner: Corner::default(),
            animation_kind: AnimationKind::default(),
            show_buttons: true,
            window_size: DEFAULT_WINDOW_SIZE,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            easing: Easing::default(),
            frame_interval: DEFAULT_FRAME_INTERVAL,
            sound_dir: PathBuf::from("."),
            sound_player: None,
            image_loader: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Target opacity of a fade-in, in `(0, 1]`.
    #[must_use]
    pub const fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn open_time(mut self, open_time: Duration) -> Self {
        self.open_time_ms = i64::try_from(open_time.as_millis()).unwrap_or(i64::MAX);
        self
    }

    /// Dwell time in milliseconds. Negative values are rejected at build time.
    #[must_use]
    pub const fn open_time_ms(mut self, open_time_ms: i64) -> Self {
        self.open_time_ms = open_time_ms;
        self
    }

    #[must_use]
    pub const fn image_style(mut self, image_style: ImageStyle) -> Self {
        self.image_style = image_style;
        self
    }

    /// Icon URI or path. Empty means no icon.
    #[must_use]
    pub fn image_source(mut self, image_source: impl Into<String>) -> Self {
        self.image_source = image_source.into();
        self
    }

    #[must_use]
    pub const fn open_sound(mut self, open_sound: OpenSound) -> Self {
        self.open_sound = open_sound;
        self
    }

    #[must_use]
    pub const fn corner(mut self, corner: Corner) -> Self {
        self.corner = corner;
        self
    }

    #[must_use]
    pub const fn animation_kind(mut self, animation_kind: AnimationKind) -> Self {
        self.animation_kind = animation_kind;
        self
    }

    #[must_use]
    pub const fn show_buttons(mut self, show_buttons: bool) -> Self {
        self.show_buttons = show_buttons;
        self
    }

    #[must_use]
    pub const fn size(mut self, width: f64, height: f64) -> Self {
        self.window_size = Size::new(width, height);
        self
    }

    #[must_use]
    pub const fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub const fn frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    #[must_use]
    pub fn sound_dir(mut self, sound_dir: impl Into<PathBuf>) -> Self {
        self.sound_dir = sound_dir.into();
        self
    }

    #[must_use]
    pub fn sound_player(mut self, player: Arc<dyn SoundPlayer>) -> Self {
        self.sound_player = Some(player);
        self
    }

    #[must_use]
    pub fn image_loader(mut self, loader: ImageLoader) -> Self {
        self.image_loader = Some(loader);
        self
    }

    /// Validates the collected values into an immutable [`Config`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a negative open time, an alpha
    /// outside `(0, 1]`, a non-positive window size, or an animation duration
    /// or frame interval that is zero (interval only) or above one hour.
    pub fn build_config(&self) -> Result<Config> {
        let open_time_ms = u64::try_from(self.open_time_ms).map_err(|_| {
            ConfigError::InvalidField {
                field: "open_time",
                message: format!("must not be negative, got {}ms", self.open_time_ms),
            }
        })?;
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ConfigError::InvalidField {
                field: "alpha",
                message: format!("expected a value in (0, 1], got {}", self.alpha),
            }
            .into());
        }
        if !self.window_size.is_drawable() {
            let Size { width, height } = self.window_size;
            return Err(ConfigError::InvalidField {
                field: "window_size",
                message: format!("dimensions must be positive, got {width}x{height}"),
            }
            .into());
        }
        if self.frame_interval.is_zero() || self.frame_interval > MAX_ANIMATION_TIMING {
            return Err(ConfigError::InvalidField {
                field: "frame_interval",
                message: format!(
                    "expected a value in (0, {}], got {}",
                    humantime::format_duration(MAX_ANIMATION_TIMING),
                    humantime::format_duration(self.frame_interval)
                ),
            }
            .into());
        }
        if self.animation_duration > MAX_ANIMATION_TIMING {
            return Err(ConfigError::InvalidField {
                field: "animation_duration",
                message: format!(
                    "must not exceed {}, got {}",
                    humantime::format_duration(MAX_ANIMATION_TIMING),
                    humantime::format_duration(self.animation_duration)
                ),
            }
            .into());
        }

        Ok(Config {
            alpha: self.alpha,
            open_time: Duration::from_millis(open_time_ms),
            image_style: self.image_style,
            title: self.title.clone(),
            message: self.message.clone(),
            app_name: self.app_name.clone(),
            image_source: self.image_source.clone(),
            open_sound: self.open_sound,
            corner: self.corner,
            animation_kind: self.animation_kind,
            show_buttons: self.show_buttons,
            window_size: self.window_size,
            animation_duration: self.animation_duration,
            easing: self.easing,
            frame_interval: self.frame_interval,
            sound_dir: self.sound_dir.clone(),
        })
    }

    /// Validates the configuration and lays out a toast on `surface`.
    ///
    /// Without an explicit sound player the toast is silent; without an
    /// image loader one with the default timeout is created.
    ///
    /// # Errors
    ///
    /// Returns a configuration error (see [`ToastBuilder::build_config`]) or
    /// an asset error when the default image loader cannot be created.
    pub fn build<S: Surface>(self, surface: S) -> Result<Toast<S>> {
        let config = self.build_config()?;
        let images = match self.image_loader {
            Some(loader) => loader,
            None => ImageLoader::new(DEFAULT_IMAGE_TIMEOUT)?,
        };
        let sound = self.sound_player.unwrap_or_else(|| Arc::new(Muted));
        Ok(Toast::new(config, surface, sound, images))
    }
}

#[cfg(test)]
mod tests {
    use super::ToastBuilder;
    use crate::error::{ConfigError, Error};
    use crate::types::{AnimationKind, Corner};
    use std::time::Duration;

    fn rejected_field(builder: &ToastBuilder) -> &'static str {
        match builder.build_config() {
            Err(Error::Config(ConfigError::InvalidField { field, .. })) => field,
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("invalid config accepted"),
        }
    }

    #[test]
    fn defaults_follow_the_classic_toast() {
        let config = match ToastBuilder::new().build_config() {
            Ok(config) => config,
            Err(err) => panic!("defaults rejected: {err}"),
        };
        assert!((config.alpha() - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.open_time(), Duration::from_millis(4900));
        assert_eq!(config.corner(), Corner::TopRight);
        assert_eq!(config.animation_kind(), AnimationKind::Slide);
        assert_eq!(config.animation_duration(), Duration::from_millis(1500));
        assert!(config.show_buttons());
        assert!(config.image_source().is_empty());
    }

    #[test]
    fn rejects_misconfiguration() {
        assert_eq!(rejected_field(&ToastBuilder::new().open_time_ms(-1)), "open_time");
        assert_eq!(rejected_field(&ToastBuilder::new().alpha(0.0)), "alpha");
        assert_eq!(rejected_field(&ToastBuilder::new().alpha(1.5)), "alpha");
        assert_eq!(rejected_field(&ToastBuilder::new().alpha(f64::NAN)), "alpha");
        assert_eq!(rejected_field(&ToastBuilder::new().size(0.0, 10.0)), "window_size");
        assert_eq!(
            rejected_field(&ToastBuilder::new().frame_interval(Duration::ZERO)),
            "frame_interval"
        );
    }

    #[test]
    fn rejects_animation_timing_that_cannot_be_scheduled() {
        assert_eq!(
            rejected_field(&ToastBuilder::new().animation_duration(Duration::MAX)),
            "animation_duration"
        );
        assert_eq!(
            rejected_field(&ToastBuilder::new().animation_duration(Duration::from_secs(3601))),
            "animation_duration"
        );
        assert_eq!(
            rejected_field(&ToastBuilder::new().frame_interval(Duration::MAX)),
            "frame_interval"
        );
        assert!(
            ToastBuilder::new()
                .animation_duration(Duration::from_secs(3600))
                .frame_interval(Duration::from_secs(3600))
                .build_config()
                .is_ok()
        );
    }

    #[test]
    fn accepts_zero_open_time_and_full_alpha() {
        let config = match ToastBuilder::new().open_time_ms(0).alpha(1.0).build_config() {
            Ok(config) => config,
            Err(err) => panic!("valid config rejected: {err}"),
        };
        assert_eq!(config.open_time(), Duration::ZERO);
    }

    #[test]
    fn reopened_config_round_trips() {
        let config = match ToastBuilder::new()
            .title("a")
            .corner(Corner::BottomLeft)
            .open_time(Duration::from_millis(250))
            .build_config()
        {
            Ok(config) => config,
            Err(err) => panic!("valid config rejected: {err}"),
        };
        let again = ToastBuilder::from(&config).message("b").build_config();
        match again {
            Ok(again) => {
                assert_eq!(again.title(), "a");
                assert_eq!(again.message(), "b");
                assert_eq!(again.corner(), Corner::BottomLeft);
                assert_eq!(again.open_time(), Duration::from_millis(250));
            }
            Err(err) => panic!("reopened config rejected: {err}"),
        }
    }
}
