use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use serde_with::serde_as;

use crate::Result;
use crate::builder::ToastBuilder;
use crate::error::ConfigError;
use crate::geometry::Size;
use crate::types::{AnimationKind, Corner, Easing, ImageStyle, OpenSound};

use super::defaults::{
    default_alpha, default_animation_duration, default_app_name, default_frame_interval,
    default_height, default_image_timeout, default_message, default_open_time_ms,
    default_player, default_player_args, default_sound_dir, default_title, default_true,
    default_width,
};
use super::env::{env_bool, env_duration, env_string};
use super::{HumantimeDuration, Settings, SoundSettings};

pub(super) fn load(path: impl AsRef<Path>) -> std::result::Result<RawConfig, ConfigError> {
    let mut builder = ::config::Config::builder();
    let path = path.as_ref();
    builder = builder.add_source(::config::File::from(path).required(false));
    builder = builder.add_source(
        ::config::Environment::with_prefix("TOASTER")
            .separator("__")
            .try_parsing(true),
    );

    builder
        .build()
        .map_err(|err| ConfigError::Other(err.to_string()))?
        .try_deserialize()
        .map_err(|err| ConfigError::Parse(err.to_string()))
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub(super) toast: RawToast,
    #[serde(default)]
    pub(super) window: RawWindow,
    #[serde(default)]
    pub(super) animation: RawAnimation,
    #[serde(default)]
    pub(super) assets: RawAssets,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawToast {
    #[serde(default = "default_title")]
    pub(super) title: String,
    #[serde(default = "default_message")]
    pub(super) message: String,
    #[serde(default = "default_app_name")]
    pub(super) app_name: String,
    #[serde(default = "default_open_time_ms")]
    pub(super) open_time_ms: i64,
    #[serde(default = "default_true")]
    pub(super) buttons: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawWindow {
    #[serde(default)]
    pub(super) corner: Option<String>,
    #[serde(default = "default_width")]
    pub(super) width: f64,
    #[serde(default = "default_height")]
    pub(super) height: f64,
    #[serde(default)]
    pub(super) screen: Option<String>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawAnimation {
    #[serde(default)]
    pub(super) kind: Option<String>,
    #[serde(default = "default_alpha")]
    pub(super) alpha: f64,
    #[serde(default = "default_animation_duration")]
    #[serde_as(as = "HumantimeDuration")]
    pub(super) duration: Duration,
    #[serde(default)]
    pub(super) easing: Option<String>,
    #[serde(default = "default_frame_interval")]
    #[serde_as(as = "HumantimeDuration")]
    pub(super) frame_interval: Duration,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawAssets {
    #[serde(default)]
    pub(super) image: String,
    #[serde(default)]
    pub(super) image_style: Option<String>,
    #[serde(default = "default_image_timeout")]
    #[serde_as(as = "HumantimeDuration")]
    pub(super) image_timeout: Duration,
    #[serde(default)]
    pub(super) sound: Option<String>,
    #[serde(default = "default_sound_dir")]
    pub(super) sound_dir: PathBuf,
    #[serde(default)]
    pub(super) mute: bool,
    #[serde(default = "default_player")]
    pub(super) player: String,
    #[serde(default = "default_player_args")]
    pub(super) player_args: Vec<String>,
}

impl Default for RawToast {
    fn default() -> Self {
        Self {
            title: default_title(),
            message: default_message(),
            app_name: default_app_name(),
            open_time_ms: default_open_time_ms(),
            buttons: true,
        }
    }
}

impl Default for RawWindow {
    fn default() -> Self {
        Self {
            corner: None,
            width: default_width(),
            height: default_height(),
            screen: None,
        }
    }
}

impl Default for RawAnimation {
    fn default() -> Self {
        Self {
            kind: None,
            alpha: default_alpha(),
            duration: default_animation_duration(),
            easing: None,
            frame_interval: default_frame_interval(),
        }
    }
}

impl Default for RawAssets {
    fn default() -> Self {
        Self {
            image: String::new(),
            image_style: None,
            image_timeout: default_image_timeout(),
            sound: None,
            sound_dir: default_sound_dir(),
            mute: false,
            player: default_player(),
            player_args: default_player_args(),
        }
    }
}

impl RawConfig {
    pub(super) fn apply_env_overrides(&mut self) -> std::result::Result<(), ConfigError> {
        if let Some(title) = env_string("TOAST_TITLE")? {
            self.toast.title = title;
        }
        if let Some(message) = env_string("TOAST_MESSAGE")? {
            self.toast.message = message;
        }
        if let Some(app_name) = env_string("TOAST_APPNAME")? {
            self.toast.app_name = app_name;
        }
        if let Some(open_time) = env_duration("TOAST_OPEN_TIME")? {
            self.toast.open_time_ms = i64::try_from(open_time.as_millis()).map_err(|_| {
                ConfigError::InvalidField {
                    field: "TOAST_OPEN_TIME",
                    message: "duration too large".to_string(),
                }
            })?;
        }
        if let Some(corner) = env_string("TOAST_CORNER")? {
            self.window.corner = Some(corner);
        }
        if let Some(kind) = env_string("TOAST_ANIMATION")? {
            self.animation.kind = Some(kind);
        }
        if let Some(image) = env_string("TOAST_IMAGE")? {
            self.assets.image = image;
        }
        if let Some(mute) = env_bool("TOAST_MUTE")? {
            self.assets.mute = mute;
        }
        Ok(())
    }

    pub(super) fn validate_and_build(self) -> Result<Settings> {
        let mut builder = ToastBuilder::new()
            .title(self.toast.title)
            .message(self.toast.message)
            .app_name(self.toast.app_name)
            .open_time_ms(self.toast.open_time_ms)
            .show_buttons(self.toast.buttons)
            .size(self.window.width, self.window.height)
            .alpha(self.animation.alpha)
            .animation_duration(self.animation.duration)
            .frame_interval(self.animation.frame_interval)
            .image_source(self.assets.image)
            .sound_dir(self.assets.sound_dir);

        if let Some(corner) = self.window.corner.as_deref() {
            builder = builder.corner(parse_field::<Corner>("window.corner", corner)?);
        }
        if let Some(kind) = self.animation.kind.as_deref() {
            builder = builder.animation_kind(parse_field::<AnimationKind>("animation.kind", kind)?);
        }
        if let Some(easing) = self.animation.easing.as_deref() {
            builder = builder.easing(parse_field::<Easing>("animation.easing", easing)?);
        }
        if let Some(style) = self.assets.image_style.as_deref() {
            builder = builder.image_style(parse_field::<ImageStyle>("assets.image_style", style)?);
        }
        if let Some(sound) = self.assets.sound.as_deref() {
            builder = builder.open_sound(parse_field::<OpenSound>("assets.sound", sound)?);
        }

        let screen = self
            .window
            .screen
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| parse_field::<Size>("window.screen", raw))
            .transpose()?;
        if self.assets.image_timeout.is_zero() {
            return Err(ConfigError::InvalidField {
                field: "assets.image_timeout",
                message: "timeout must be greater than zero".to_string(),
            }
            .into());
        }
        if !self.assets.mute && self.assets.player.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "assets.player",
                message: "player cannot be empty unless sound is muted".to_string(),
            }
            .into());
        }

        Ok(Settings {
            toast: builder.build_config()?,
            screen,
            sound: SoundSettings {
                mute: self.assets.mute,
                player: self.assets.player,
                player_args: self.assets.player_args,
            },
            image_timeout: self.assets.image_timeout,
        })
    }
}

fn parse_field<T>(field: &'static str, raw: &str) -> std::result::Result<T, ConfigError>
where
    T: FromStr<Err = String>,
{
    T::from_str(raw.trim()).map_err(|message| ConfigError::InvalidField { field, message })
}
