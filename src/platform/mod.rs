//! Host window primitives a toast renders into.

use crate::animation::Frame;
use crate::error::SurfaceError;
use crate::geometry::{Bounds, Size};
use crate::scene::Scene;

mod desktop;
mod headless;

pub use desktop::DesktopSurface;
pub use headless::{HeadlessSurface, SurfaceEvent, SurfaceJournal};

/// A borderless top-level window owned by exactly one toast.
///
/// All methods are called from the toast's lifecycle task, in order:
/// `show` once, `render` for every animation frame, `close` once.
pub trait Surface: Send + 'static {
    /// Usable size of the screen the toast is shown on.
    fn screen_size(&self) -> Size;

    /// Maps the window at `bounds` with its first animation frame applied.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot create the window.
    fn show(&mut self, scene: &Scene, bounds: Bounds, frame: Frame) -> Result<(), SurfaceError>;

    fn render(&mut self, frame: Frame);

    /// Tears the window down. Called once the close animation has finished.
    fn close(&mut self);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn screen_size(&self) -> Size {
        (**self).screen_size()
    }

    fn show(&mut self, scene: &Scene, bounds: Bounds, frame: Frame) -> Result<(), SurfaceError> {
        (**self).show(scene, bounds, frame)
    }

    fn render(&mut self, frame: Frame) {
        (**self).render(frame);
    }

    fn close(&mut self) {
        (**self).close();
    }
}
