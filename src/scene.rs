//! Visual tree of a toast, as plain data handed to the surface.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::assets::ImageSource;
use crate::config::Config;
use crate::types::ImageStyle;

const ICON_RADIUS: u32 = 50;
const ICON_SIDE: u32 = 100;

/// Icon outline, in logical pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "shape")]
pub enum IconShape {
    Circle { radius: u32 },
    Rectangle { width: u32, height: u32 },
}

impl From<ImageStyle> for IconShape {
    fn from(style: ImageStyle) -> Self {
        match style {
            ImageStyle::Circle => Self::Circle {
                radius: ICON_RADIUS,
            },
            ImageStyle::Rectangle => Self::Rectangle {
                width: ICON_SIDE,
                height: ICON_SIDE,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Icon {
    pub outline: IconShape,
    pub source: String,
    /// Raw image bytes; `None` leaves the shape unfilled.
    #[serde(skip)]
    pub fill: Option<Arc<[u8]>>,
}

impl Icon {
    /// Filesystem path of the icon when it is a local image.
    #[must_use]
    pub fn local_path(&self) -> Option<PathBuf> {
        match ImageSource::parse(&self.source) {
            Some(ImageSource::Local(path)) => Some(path),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelRole {
    Title,
    Message,
    AppName,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub role: LabelRole,
    pub text: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonRole {
    Ok,
    Close,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Button {
    pub role: ButtonRole,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub icon: Option<Icon>,
    pub labels: Vec<Label>,
    pub buttons: Vec<Button>,
}

impl Scene {
    /// Lays out the toast content described by `config`.
    #[must_use]
    pub fn layout(config: &Config) -> Self {
        let icon = (!config.image_source().trim().is_empty()).then(|| Icon {
            outline: IconShape::from(config.image_style()),
            source: config.image_source().to_string(),
            fill: None,
        });

        let labels = vec![
            Label {
                role: LabelRole::Title,
                text: config.title().to_string(),
            },
            Label {
                role: LabelRole::Message,
                text: config.message().to_string(),
            },
            Label {
                role: LabelRole::AppName,
                text: config.app_name().to_string(),
            },
        ];

        let buttons = if config.show_buttons() {
            vec![
                Button {
                    role: ButtonRole::Ok,
                    text: "Ok".to_string(),
                },
                Button {
                    role: ButtonRole::Close,
                    text: "Close".to_string(),
                },
            ]
        } else {
            Vec::new()
        };

        Self {
            icon,
            labels,
            buttons,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.label(LabelRole::Title)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.label(LabelRole::Message)
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        self.label(LabelRole::AppName)
    }

    fn label(&self, role: LabelRole) -> &str {
        self.labels
            .iter()
            .find(|label| label.role == role)
            .map_or("", |label| label.text.as_str())
    }
}
