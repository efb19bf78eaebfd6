use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::animation::Frame;
use crate::error::SurfaceError;
use crate::geometry::{Bounds, Size};
use crate::scene::Scene;

use super::Surface;

/// Mirrors the toast into the operating system's notification centre.
///
/// The notification server owns placement and motion there, so frames are
/// not forwarded; the notification is asked to linger for the toast's whole
/// lifetime instead.
pub struct DesktopSurface {
    screen: Size,
    linger: Duration,
    shown: bool,
}

impl DesktopSurface {
    #[must_use]
    pub const fn new(screen: Size, linger: Duration) -> Self {
        Self {
            screen,
            linger,
            shown: false,
        }
    }
}

impl Surface for DesktopSurface {
    fn screen_size(&self) -> Size {
        self.screen
    }

    fn show(&mut self, scene: &Scene, bounds: Bounds, _frame: Frame) -> Result<(), SurfaceError> {
        debug!(
            x = bounds.origin.x,
            y = bounds.origin.y,
            linger_ms = self.linger.as_millis(),
            "sending desktop toast"
        );
        backend::show(scene, self.linger)?;
        self.shown = true;
        Ok(())
    }

    fn render(&mut self, frame: Frame) {
        trace!(
            translate_x = frame.translate_x,
            opacity = frame.opacity,
            "desktop frame not forwarded"
        );
    }

    fn close(&mut self) {
        if !self.shown {
            warn!("desktop toast closed before it was shown");
        }
        self.shown = false;
    }
}

#[cfg(target_os = "linux")]
mod backend {
    use std::time::Duration;

    use notify_rust::{Notification, Timeout};

    use crate::error::SurfaceError;
    use crate::scene::Scene;

    pub(super) fn show(scene: &Scene, linger: Duration) -> Result<(), SurfaceError> {
        let timeout_ms = u32::try_from(linger.as_millis()).unwrap_or(u32::MAX);
        let mut builder = Notification::new();
        builder
            .summary(scene.title())
            .body(scene.message())
            .appname(scene.app_name())
            .timeout(Timeout::Milliseconds(timeout_ms));

        if let Some(path) = scene.icon.as_ref().and_then(|icon| icon.local_path()) {
            builder.icon(&path.to_string_lossy());
        }

        builder
            .show()
            .map(drop)
            .map_err(|err| SurfaceError::Backend(err.to_string()))
    }
}

#[cfg(target_os = "windows")]
mod backend {
    use std::time::Duration;

    use tauri_winrt_notification::{Duration as WinDuration, Toast};

    use crate::error::SurfaceError;
    use crate::scene::Scene;

    const LONG_TOAST: Duration = Duration::from_secs(7);

    pub(super) fn show(scene: &Scene, linger: Duration) -> Result<(), SurfaceError> {
        let duration = if linger > LONG_TOAST {
            WinDuration::Long
        } else {
            WinDuration::Short
        };
        Toast::new(Toast::POWERSHELL_APP_ID)
            .title(scene.title())
            .text1(scene.message())
            .text2(scene.app_name())
            .duration(duration)
            .sound(None)
            .show()
            .map_err(|err| SurfaceError::Backend(err.to_string()))
    }
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
mod backend {
    use std::time::Duration;

    use crate::error::SurfaceError;
    use crate::scene::Scene;

    pub(super) fn show(scene: &Scene, linger: Duration) -> Result<(), SurfaceError> {
        let _ = (scene, linger);
        Err(SurfaceError::Unsupported)
    }
}
