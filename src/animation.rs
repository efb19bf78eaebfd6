//! Open/close transitions and the frame driver that plays them on a surface.

use std::time::Duration;

use serde::Serialize;
use tokio::time::{Instant, sleep_until};
use tracing::trace;

use crate::geometry::{Size, slide_offset};
use crate::platform::Surface;
use crate::types::{AnimationKind, Corner, Easing};

/// One sampled animation state, relative to the window's resting position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub translate_x: f64,
    pub opacity: f64,
}

/// A single interpolation between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Slide { from_x: f64, to_x: f64 },
    Fade { from: f64, to: f64 },
}

impl Transition {
    /// Samples the transition at already-eased progress `t`.
    #[must_use]
    pub fn sample(&self, t: f64) -> Frame {
        match *self {
            Self::Slide { from_x, to_x } => Frame {
                translate_x: lerp(from_x, to_x, t),
                opacity: 1.0,
            },
            Self::Fade { from, to } => Frame {
                translate_x: 0.0,
                opacity: lerp(from, to, t),
            },
        }
    }

    #[must_use]
    pub fn first_frame(&self) -> Frame {
        self.sample(0.0)
    }

    #[must_use]
    pub fn last_frame(&self) -> Frame {
        self.sample(1.0)
    }
}

/// Animation strategy of a toast, fixed when the toast is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Horizontal slide; `offset` is the signed off-screen distance.
    Slide { offset: f64 },
    /// Opacity fade up to `alpha`.
    Fade { alpha: f64 },
}

impl Motion {
    #[must_use]
    pub fn new(kind: AnimationKind, corner: Corner, window: Size, alpha: f64) -> Self {
        match kind {
            AnimationKind::Slide => Self::Slide {
                offset: slide_offset(corner, window),
            },
            AnimationKind::Fade => Self::Fade { alpha },
        }
    }

    #[must_use]
    pub const fn opening(&self) -> Transition {
        match *self {
            Self::Slide { offset } => Transition::Slide {
                from_x: offset,
                to_x: 0.0,
            },
            Self::Fade { alpha } => Transition::Fade {
                from: 0.0,
                to: alpha,
            },
        }
    }

    /// Mirror of [`Motion::opening`]: the toast leaves the way it came in.
    #[must_use]
    pub const fn closing(&self) -> Transition {
        match *self {
            Self::Slide { offset } => Transition::Slide {
                from_x: 0.0,
                to_x: offset,
            },
            Self::Fade { alpha } => Transition::Fade {
                from: alpha,
                to: 0.0,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub duration: Duration,
    pub frame_interval: Duration,
    pub easing: Easing,
}

impl Timing {
    /// Eased progress after `elapsed` time.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let raw = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.apply(raw)
    }
}

/// Plays `transition` on `surface` and returns once its last frame has been
/// rendered. The first frame is rendered immediately and the last one lands
/// exactly `timing.duration` after the call.
pub async fn play<S>(surface: &mut S, transition: Transition, timing: Timing) -> usize
where
    S: Surface + ?Sized,
{
    let started = Instant::now();
    let deadline = started.checked_add(timing.duration).unwrap_or(started);
    let mut frames = 0usize;

    loop {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(started);
        let frame = if now >= deadline {
            transition.last_frame()
        } else {
            transition.sample(timing.progress(elapsed))
        };
        surface.render(frame);
        frames += 1;

        if now >= deadline {
            break;
        }
        let next = now
            .checked_add(timing.frame_interval)
            .map_or(deadline, |next| next.min(deadline));
        sleep_until(next).await;
    }

    trace!(frames, duration_ms = timing.duration.as_millis(), "transition finished");
    frames
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (to - from).mul_add(t, from)
}

#[cfg(test)]
mod tests {
    use super::{Motion, Timing, Transition, play};
    use crate::geometry::Size;
    use crate::platform::HeadlessSurface;
    use crate::types::{AnimationKind, Corner, Easing};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn oversized_frame_interval_jumps_to_the_last_frame() {
        let mut surface = HeadlessSurface::new(Size::new(800.0, 600.0));
        let journal = surface.journal();
        let timing = Timing {
            duration: Duration::from_millis(100),
            frame_interval: Duration::MAX,
            easing: Easing::Linear,
        };
        let transition = Transition::Fade { from: 0.0, to: 1.0 };

        assert_eq!(play(&mut surface, transition, timing).await, 2);
        let frames = journal.frames();
        assert_eq!(frames.first().map(|f| f.opacity), Some(0.0));
        assert_eq!(frames.last().map(|f| f.opacity), Some(1.0));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_renders_only_the_last_frame() {
        let mut surface = HeadlessSurface::new(Size::new(800.0, 600.0));
        let journal = surface.journal();
        let timing = Timing {
            duration: Duration::ZERO,
            frame_interval: Duration::from_millis(16),
            easing: Easing::EaseBoth,
        };
        let transition = Transition::Slide {
            from_x: 0.0,
            to_x: 250.0,
        };

        assert_eq!(play(&mut surface, transition, timing).await, 1);
        assert_eq!(journal.frames().last().map(|f| f.translate_x), Some(250.0));
    }

    #[test]
    fn slide_exits_where_it_entered() {
        let window = Size::new(300.0, 150.0);
        for corner in Corner::ALL {
            let motion = Motion::new(AnimationKind::Slide, corner, window, 0.9);
            let Transition::Slide { from_x: start, .. } = motion.opening() else {
                panic!("slide motion must open with a slide");
            };
            let Transition::Slide { to_x: end, .. } = motion.closing() else {
                panic!("slide motion must close with a slide");
            };
            assert_eq!(start, end, "{corner}");
            assert_eq!(start.abs(), window.width);
            assert_eq!(motion.opening().last_frame().translate_x, 0.0);
            assert_eq!(motion.closing().first_frame().translate_x, 0.0);
        }
    }

    #[test]
    fn top_left_slides_in_from_the_left() {
        let motion = Motion::new(
            AnimationKind::Slide,
            Corner::TopLeft,
            Size::new(300.0, 150.0),
            1.0,
        );
        assert_eq!(motion.opening().first_frame().translate_x, -300.0);
    }

    #[test]
    fn fade_goes_up_to_alpha_and_back() {
        let motion = Motion::new(
            AnimationKind::Fade,
            Corner::BottomRight,
            Size::new(300.0, 150.0),
            0.9,
        );
        let open = motion.opening();
        let close = motion.closing();
        assert_eq!(open.first_frame().opacity, 0.0);
        assert!((open.last_frame().opacity - 0.9).abs() < f64::EPSILON);
        assert!((close.first_frame().opacity - 0.9).abs() < f64::EPSILON);
        assert_eq!(close.last_frame().opacity, 0.0);
        assert_eq!(open.sample(0.5).translate_x, 0.0);
    }

    #[test]
    fn slide_keeps_full_opacity() {
        let motion = Motion::new(
            AnimationKind::Slide,
            Corner::TopRight,
            Size::new(200.0, 100.0),
            0.3,
        );
        let mid = motion.opening().sample(0.5);
        assert_eq!(mid.opacity, 1.0);
        assert_eq!(mid.translate_x, 100.0);
    }
}
