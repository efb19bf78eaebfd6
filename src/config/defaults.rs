use std::time::Duration;

use crate::assets::DEFAULT_IMAGE_TIMEOUT;
use crate::geometry::Size;

pub(crate) const DEFAULT_ALPHA: f64 = 0.9;
pub(crate) const DEFAULT_OPEN_TIME_MS: i64 = 4_900;
pub(crate) const DEFAULT_TITLE: &str = "TITLE";
pub(crate) const DEFAULT_MESSAGE: &str = "MESSAGE";
pub(crate) const DEFAULT_APP_NAME: &str = "APP NAME";
pub(crate) const DEFAULT_WINDOW_SIZE: Size = Size::new(400.0, 150.0);
pub(crate) const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1_500);
pub(crate) const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Screen assumed when neither the surface nor the configuration knows better.
pub const DEFAULT_SCREEN: Size = Size::new(1920.0, 1080.0);

pub(super) fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

pub(super) fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

pub(super) fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

pub(super) const fn default_open_time_ms() -> i64 {
    DEFAULT_OPEN_TIME_MS
}

pub(super) const fn default_true() -> bool {
    true
}

pub(super) const fn default_width() -> f64 {
    DEFAULT_WINDOW_SIZE.width
}

pub(super) const fn default_height() -> f64 {
    DEFAULT_WINDOW_SIZE.height
}

pub(super) const fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

pub(super) const fn default_animation_duration() -> Duration {
    DEFAULT_ANIMATION_DURATION
}

pub(super) const fn default_frame_interval() -> Duration {
    DEFAULT_FRAME_INTERVAL
}

pub(super) fn default_sound_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(".")
}

pub(super) fn default_player() -> String {
    "ffplay".to_string()
}

pub(super) fn default_player_args() -> Vec<String> {
    ["-nodisp", "-autoexit", "-loglevel", "quiet"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub(super) const fn default_image_timeout() -> Duration {
    DEFAULT_IMAGE_TIMEOUT
}
