// Indicator animation
// Linear transition of the selection indicator between frames

use std::time::{Duration, Instant};

/// Default transition time for the selection indicator
pub const DEFAULT_INDICATOR_ANIMATION: Duration = Duration::from_millis(300);

/// Horizontal placement of the indicator bar
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorFrame {
    pub offset: f32,
    pub width: f32,
}

impl IndicatorFrame {
    pub const fn new(offset: f32, width: f32) -> Self {
        Self { offset, width }
    }

    fn lerp(self, to: IndicatorFrame, t: f32) -> IndicatorFrame {
        IndicatorFrame {
            offset: self.offset + (to.offset - self.offset) * t,
            width: self.width + (to.width - self.width) * t,
        }
    }
}

/// Linear animation from the displayed frame to the latest target
#[derive(Debug, Clone)]
pub struct IndicatorAnimation {
    from: IndicatorFrame,
    to: IndicatorFrame,
    started: Option<Instant>,
    duration: Duration,
}

impl IndicatorAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            from: IndicatorFrame::default(),
            to: IndicatorFrame::default(),
            started: None,
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Frame the animation is heading to
    pub fn target(&self) -> IndicatorFrame {
        self.to
    }

    /// Point the animation at a new target
    /// The transition restarts from whatever is on screen at `now`.
    /// Returns false when the target is unchanged.
    pub fn retarget(&mut self, target: IndicatorFrame, now: Instant) -> bool {
        if target == self.to {
            return false;
        }
        self.from = self.frame_at(now);
        self.to = target;
        self.started = Some(now);
        true
    }

    /// Jump to `target` without a transition
    pub fn snap_to(&mut self, target: IndicatorFrame) {
        self.from = target;
        self.to = target;
        self.started = None;
    }

    /// Interpolated frame at `now`
    pub fn frame_at(&self, now: Instant) -> IndicatorFrame {
        let Some(started) = self.started else {
            return self.to;
        };

        let elapsed = now.saturating_duration_since(started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, t)
    }

    /// Whether frames still differ from the target at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.started {
            Some(started) => {
                self.from != self.to && now.saturating_duration_since(started) < self.duration
            }
            None => false,
        }
    }
}

impl Default for IndicatorAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_INDICATOR_ANIMATION)
    }
}
