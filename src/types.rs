use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Screen corner a toast is anchored to.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    /// `+1.0` when the nearest horizontal screen edge is the right one.
    #[must_use]
    pub const fn horizontal_sign(self) -> f64 {
        if self.is_right() { 1.0 } else { -1.0 }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Corner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "top-left" | "upper-left" => Ok(Self::TopLeft),
            "top-right" | "upper-right" => Ok(Self::TopRight),
            "bottom-left" | "lower-left" => Ok(Self::BottomLeft),
            "bottom-right" | "lower-right" => Ok(Self::BottomRight),
            other => Err(format!("unknown corner: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    #[default]
    Circle,
    Rectangle,
}

impl FromStr for ImageStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "rectangle" | "rect" => Ok(Self::Rectangle),
            other => Err(format!("unknown image style: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenSound {
    Music,
    #[default]
    Knock,
    Drums,
}

impl OpenSound {
    /// File name of the clip, relative to the configured sound directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Music => "1.mp3",
            Self::Knock => "2.mp3",
            Self::Drums => "3.mp3",
        }
    }
}

impl FromStr for OpenSound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "music" => Ok(Self::Music),
            "knock" => Ok(Self::Knock),
            "drums" => Ok(Self::Drums),
            other => Err(format!("unknown open sound: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    #[default]
    Slide,
    Fade,
}

impl Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Slide => "slide",
            Self::Fade => "fade",
        })
    }
}

impl FromStr for AnimationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slide" | "transition" | "translate" => Ok(Self::Slide),
            "fade" => Ok(Self::Fade),
            other => Err(format!("unknown animation: {other}")),
        }
    }
}

/// Progress curve applied to animation time.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseBoth,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve. Out of range input is clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseBoth => t * t * 2.0f64.mul_add(-t, 3.0),
        }
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "linear" => Ok(Self::Linear),
            "ease_both" | "ease" => Ok(Self::EaseBoth),
            other => Err(format!("unknown easing: {other}")),
        }
    }
}
