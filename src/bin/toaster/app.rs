use std::path::PathBuf;
use std::sync::Arc;

use toaster::Result;
use toaster::assets::{CommandSoundPlayer, ImageLoader, Muted, SoundPlayer};
use toaster::builder::ToastBuilder;
use toaster::config::{DEFAULT_SCREEN, Settings};
use toaster::platform::{DesktopSurface, HeadlessSurface, Surface};
use toaster::telemetry::init_tracing;
use toaster::toast::Outcome;
use tracing::info;

use super::cli::Cli;

const DEFAULT_CONFIG: &str = "toaster.toml";

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_filter.as_deref(), cli.json_logs)?;

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let settings = Settings::from_env_and_file(&config_path)?;

    let builder = apply_overrides(ToastBuilder::from(&settings.toast), &cli);
    let screen = cli.screen.or(settings.screen).unwrap_or(DEFAULT_SCREEN);

    let sound: Arc<dyn SoundPlayer> = if cli.mute || settings.sound.mute {
        Arc::new(Muted)
    } else {
        Arc::new(CommandSoundPlayer::new(
            settings.sound.player.clone(),
            settings.sound.player_args.clone(),
        ))
    };
    let builder = builder
        .sound_player(sound)
        .image_loader(ImageLoader::new(settings.image_timeout)?);

    let outcome = if cli.headless {
        present(builder, HeadlessSurface::new(screen)).await?
    } else {
        let lifetime = builder.build_config()?.lifetime();
        present(builder, DesktopSurface::new(screen, lifetime)).await?
    };

    info!(
        id = %outcome.id,
        lifetime_ms = outcome.lifetime.as_millis(),
        "toast done, exiting"
    );
    Ok(())
}

async fn present<S: Surface>(builder: ToastBuilder, surface: S) -> Result<Outcome> {
    let toast = builder.build(surface)?;
    toast.start().finished().await
}

fn apply_overrides(mut builder: ToastBuilder, cli: &Cli) -> ToastBuilder {
    if let Some(title) = cli.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(message) = cli.message.as_deref() {
        builder = builder.message(message);
    }
    if let Some(app_name) = cli.app_name.as_deref() {
        builder = builder.app_name(app_name);
    }
    if let Some(corner) = cli.corner {
        builder = builder.corner(corner);
    }
    if let Some(kind) = cli.animation {
        builder = builder.animation_kind(kind);
    }
    if let Some(open_time) = cli.open_time {
        builder = builder.open_time(open_time);
    }
    if let Some(image) = cli.image.as_deref() {
        builder = builder.image_source(image);
    }
    builder
}
