use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::animation::Frame;
use crate::error::SurfaceError;
use crate::geometry::{Bounds, Size};
use crate::scene::Scene;

use super::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    Shown {
        at: Duration,
        bounds: Bounds,
        frame: Frame,
        icon_filled: Option<bool>,
    },
    Rendered {
        at: Duration,
        frame: Frame,
    },
    Closed {
        at: Duration,
    },
}

impl SurfaceEvent {
    /// Time since the surface was created.
    #[must_use]
    pub const fn at(&self) -> Duration {
        match self {
            Self::Shown { at, .. } | Self::Rendered { at, .. } | Self::Closed { at } => *at,
        }
    }
}

/// Shared, cloneable view of what a [`HeadlessSurface`] went through.
#[derive(Clone, Debug, Default)]
pub struct SurfaceJournal {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl SurfaceJournal {
    #[must_use]
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rendered frames only, in order.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::Rendered { frame, .. } => Some(frame),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: SurfaceEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

/// Surface without a window: logs what it would draw and keeps a journal.
pub struct HeadlessSurface {
    screen: Size,
    created: Instant,
    journal: SurfaceJournal,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new(screen: Size) -> Self {
        Self {
            screen,
            created: Instant::now(),
            journal: SurfaceJournal::default(),
        }
    }

    #[must_use]
    pub fn journal(&self) -> SurfaceJournal {
        self.journal.clone()
    }

    fn since_created(&self) -> Duration {
        Instant::now().saturating_duration_since(self.created)
    }
}

impl Surface for HeadlessSurface {
    fn screen_size(&self) -> Size {
        self.screen
    }

    fn show(&mut self, scene: &Scene, bounds: Bounds, frame: Frame) -> Result<(), SurfaceError> {
        let icon_filled = scene.icon.as_ref().map(|icon| icon.fill.is_some());
        info!(
            x = bounds.origin.x,
            y = bounds.origin.y,
            width = bounds.size.width,
            height = bounds.size.height,
            title = %scene.title(),
            icon = ?icon_filled,
            buttons = scene.buttons.len(),
            "headless toast shown"
        );
        self.journal.push(SurfaceEvent::Shown {
            at: self.since_created(),
            bounds,
            frame,
            icon_filled,
        });
        Ok(())
    }

    fn render(&mut self, frame: Frame) {
        debug!(
            translate_x = frame.translate_x,
            opacity = frame.opacity,
            "headless frame"
        );
        self.journal.push(SurfaceEvent::Rendered {
            at: self.since_created(),
            frame,
        });
    }

    fn close(&mut self) {
        info!("headless toast closed");
        self.journal.push(SurfaceEvent::Closed {
            at: self.since_created(),
        });
    }
}
