use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use humantime::parse_duration;
use toaster::geometry::Size;
use toaster::types::{AnimationKind, Corner};

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(author, version, about = "Show a toast notification in a corner of the screen", long_about = None)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Toast title.
    #[arg(long)]
    pub title: Option<String>,

    /// Message shown under the title.
    #[arg(long)]
    pub message: Option<String>,

    /// Name of the sending application.
    #[arg(long)]
    pub app_name: Option<String>,

    /// Anchor corner (top-left, top-right, bottom-left, bottom-right).
    #[arg(long, value_parser = parse_corner)]
    pub corner: Option<Corner>,

    /// Open/close animation (slide or fade).
    #[arg(long, value_parser = parse_animation)]
    pub animation: Option<AnimationKind>,

    /// How long the toast stays between its two animations (e.g. "5s").
    #[arg(long, value_parser = parse_duration)]
    pub open_time: Option<Duration>,

    /// Icon image (URL or local path).
    #[arg(long, value_name = "URI")]
    pub image: Option<String>,

    /// Screen size used for placement (e.g. "1920x1080").
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    pub screen: Option<Size>,

    /// Log every animation frame instead of notifying the desktop.
    ///
    /// Without it the toast goes to the OS notification centre, which does its
    /// own placement and shows no slide or fade.
    #[arg(long, action = ArgAction::SetTrue)]
    pub headless: bool,

    /// Do not play the open sound.
    #[arg(long, action = ArgAction::SetTrue)]
    pub mute: bool,

    /// JSON log output (needs `--features json-logs`).
    #[arg(long, action = ArgAction::SetTrue)]
    pub json_logs: bool,

    /// Explicit log filter (e.g. "toaster=debug").
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_corner(raw: &str) -> Result<Corner, String> {
    raw.parse()
}

fn parse_animation(raw: &str) -> Result<AnimationKind, String> {
    raw.parse()
}

fn parse_size(raw: &str) -> Result<Size, String> {
    raw.parse()
}
