//! Toast lifecycle: `Built → Opening → Visible → Closing → Terminated`.

use std::fmt::{self, Display};
use std::sync::Arc;
use std::time::Duration;

use async_channel::{Receiver, Sender, bounded};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::Result;
use crate::animation::{self, Motion, Timing};
use crate::assets::{ImageLoader, ImageSource, SoundPlayer, play_detached};
use crate::config::Config;
use crate::error::{Error, LifecycleError};
use crate::geometry::{Bounds, Point, Size, place};
use crate::platform::Surface;
use crate::scene::Scene;
use crate::types::Corner;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ToastState {
    Built,
    Opening,
    Visible,
    Closing,
    Terminated,
}

impl ToastState {
    /// The only state this one may move to.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Built => Some(Self::Opening),
            Self::Opening => Some(Self::Visible),
            Self::Visible => Some(Self::Closing),
            Self::Closing => Some(Self::Terminated),
            Self::Terminated => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Built => "built",
            Self::Opening => "opening",
            Self::Visible => "visible",
            Self::Closing => "closing",
            Self::Terminated => "terminated",
        }
    }
}

impl Display for ToastState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry and lifecycle state of one toast window.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastWindow {
    id: Uuid,
    position: Point,
    size: Size,
    state: ToastState,
}

impl ToastWindow {
    #[must_use]
    pub fn new(size: Size, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size,
            state: ToastState::Built,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub const fn state(&self) -> ToastState {
        self.state
    }

    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        Bounds {
            origin: self.position,
            size: self.size,
        }
    }

    /// Moves to `to`, which must be the direct successor of the current state.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidTransition`] for any other target.
    pub fn advance(&mut self, to: ToastState) -> std::result::Result<(), LifecycleError> {
        if self.state.next() != Some(to) {
            return Err(LifecycleError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    fn place(&mut self, corner: Corner, screen: Size) {
        self.position = place(corner, screen, self.size);
    }
}

/// What a finished toast reports to whoever started it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub id: Uuid,
    /// Time from `start()` until the close animation landed.
    pub lifetime: Duration,
}

/// A laid-out toast, ready to be started.
pub struct Toast<S> {
    config: Arc<Config>,
    window: ToastWindow,
    scene: Scene,
    motion: Motion,
    surface: S,
    sound: Arc<dyn SoundPlayer>,
    images: ImageLoader,
}

impl<S: Surface> Toast<S> {
    pub(crate) fn new(
        config: Config,
        surface: S,
        sound: Arc<dyn SoundPlayer>,
        images: ImageLoader,
    ) -> Self {
        let size = config.window_size();
        let position = place(config.corner(), surface.screen_size(), size);
        let motion = Motion::new(config.animation_kind(), config.corner(), size, config.alpha());
        let scene = Scene::layout(&config);
        Self {
            config: Arc::new(config),
            window: ToastWindow::new(size, position),
            scene,
            motion,
            surface,
            sound,
            images,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.window.id()
    }

    #[must_use]
    pub const fn window(&self) -> &ToastWindow {
        &self.window
    }

    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn motion(&self) -> Motion {
        self.motion
    }

    /// Starts the lifecycle on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    #[must_use = "the handle is the only way to learn when the toast is gone"]
    pub fn start(self) -> ToastHandle {
        let id = self.id();
        let (state_tx, state_rx) = watch::channel(ToastState::Built);
        let span = info_span!("toast", %id);
        let task = tokio::spawn(self.run(state_tx).instrument(span));
        ToastHandle {
            id,
            state: state_rx,
            task,
        }
    }

    async fn run(mut self, state: watch::Sender<ToastState>) -> Result<Outcome> {
        let started = Instant::now();
        let timing = Timing {
            duration: self.config.animation_duration(),
            frame_interval: self.config.frame_interval(),
            easing: self.config.easing(),
        };

        self.transition(&state, ToastState::Opening)?;
        self.load_icon().await;

        self.window
            .place(self.config.corner(), self.surface.screen_size());
        play_detached(
            Arc::clone(&self.sound),
            self.config.sound_dir(),
            self.config.open_sound(),
        );
        let opening = self.motion.opening();
        self.surface
            .show(&self.scene, self.window.bounds(), opening.first_frame())?;
        info!(
            corner = %self.config.corner(),
            animation = %self.config.animation_kind(),
            x = self.window.position().x,
            y = self.window.position().y,
            "toast opening"
        );
        animation::play(&mut self.surface, opening, timing).await;

        self.transition(&state, ToastState::Visible)?;
        dwell(self.config.open_time()).await;

        self.transition(&state, ToastState::Closing)?;
        animation::play(&mut self.surface, self.motion.closing(), timing).await;

        self.surface.close();
        self.transition(&state, ToastState::Terminated)?;
        let lifetime = started.elapsed();
        info!(lifetime_ms = lifetime.as_millis(), "toast finished");
        Ok(Outcome {
            id: self.window.id(),
            lifetime,
        })
    }

    fn transition(
        &mut self,
        state: &watch::Sender<ToastState>,
        to: ToastState,
    ) -> std::result::Result<(), LifecycleError> {
        self.window.advance(to)?;
        debug!(state = %to, "toast state changed");
        state.send_replace(to);
        Ok(())
    }

    async fn load_icon(&mut self) {
        let Some(icon) = self.scene.icon.as_mut() else {
            return;
        };
        let Some(source) = ImageSource::parse(&icon.source) else {
            return;
        };
        match self.images.load(&source).await {
            Ok(bytes) => {
                debug!(bytes = bytes.len(), "icon loaded");
                icon.fill = Some(bytes);
            }
            Err(err) => {
                warn!(source = %icon.source, error = %err, "icon unavailable, leaving it unfilled");
            }
        }
    }
}

/// Waits out the open time on a separate timer task that signals back over
/// a channel.
async fn dwell(open_time: Duration) {
    let (tx, rx) = bounded::<DwellSignal>(1);
    let timer = tokio::spawn(async move {
        fire_after(open_time, &tx).await;
    });
    wait_for_close(&rx, timer).await;
}

/// Sleeps for `open_time`, then asks the lifecycle task to close. Returns
/// whether the signal was delivered.
async fn fire_after(open_time: Duration, tx: &Sender<DwellSignal>) -> bool {
    sleep(open_time).await;
    let delivered = tx.send(DwellSignal::BeginClose).await.is_ok();
    if !delivered {
        debug!(
            open_time_ms = open_time.as_millis(),
            "dwell receiver gone before the timer fired"
        );
    }
    delivered
}

/// A timer that goes away without signalling counts as an interrupted wait:
/// it is logged and the toast closes anyway.
async fn wait_for_close(rx: &Receiver<DwellSignal>, timer: JoinHandle<()>) -> DwellEnd {
    match rx.recv().await {
        Ok(DwellSignal::BeginClose) => {
            debug!("dwell elapsed");
            DwellEnd::Elapsed
        }
        Err(_) => {
            let reason = match timer.await {
                Err(err) => err.to_string(),
                Ok(()) => "timer exited without signalling".to_string(),
            };
            warn!(%reason, "dwell timer interrupted, closing now");
            DwellEnd::Interrupted(reason)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DwellEnd {
    Elapsed,
    Interrupted(String),
}

#[derive(Debug, Clone, Copy)]
enum DwellSignal {
    BeginClose,
}

/// Handle to a started toast.
#[derive(Debug)]
pub struct ToastHandle {
    id: Uuid,
    state: watch::Receiver<ToastState>,
    task: JoinHandle<Result<Outcome>>,
}

impl ToastHandle {
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Most recently published lifecycle state.
    #[must_use]
    pub fn state(&self) -> ToastState {
        *self.state.borrow()
    }

    /// Resolves once the toast has reached `target` (or any later state).
    ///
    /// # Errors
    ///
    /// Returns an error when the lifecycle task stops before reaching `target`.
    pub async fn reached(&mut self, target: ToastState) -> Result<ToastState> {
        self.state
            .wait_for(|current| *current >= target)
            .await
            .map(|current| *current)
            .map_err(|_| {
                Error::from(LifecycleError::Task(format!(
                    "toast stopped before reaching {target}"
                )))
            })
    }

    /// Waits for the close animation to finish.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped the lifecycle, or a lifecycle error
    /// when the task panicked or was aborted.
    pub async fn finished(self) -> Result<Outcome> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(err) => Err(LifecycleError::Task(err.to_string()).into()),
        }
    }
}
