//! Presentation pacing: the ball animation and the opponent timer.
//!
//! Neither affects gameplay. The authoritative ball position is final the
//! moment a play resolves; the animation only interpolates what a shell
//! draws, and the timer only spaces out opponent snaps. The host drives
//! both by passing elapsed time into [`Pacer::advance`].
//!
//! At most one opponent timer exists at a time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config::PacingConfig;

/// Cosmetic ball slide from one position to another.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BallAnimation {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
}

impl BallAnimation {
    /// Slide from `from` to `to` at `speed` yards per second.
    ///
    /// Speeds too slow to represent saturate at `Duration::MAX`.
    #[must_use]
    pub fn new(from: i32, to: i32, speed: f32) -> Self {
        let yards = f64::from((to - from).abs());
        let duration =
            Duration::try_from_secs_f64(yards / f64::from(speed)).unwrap_or(Duration::MAX);
        Self {
            from: from as f32,
            to: to as f32,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Progress the animation, returning the part of `dt` left over after
    /// it completes.
    pub fn advance(&mut self, dt: Duration) -> Duration {
        let needed = self.duration.saturating_sub(self.elapsed);
        if dt >= needed {
            self.elapsed = self.duration;
            dt - needed
        } else {
            self.elapsed += dt;
            Duration::ZERO
        }
    }

    /// Interpolated position to draw.
    #[must_use]
    pub fn position(&self) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Total animation length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Final position.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}

/// What one call to [`Pacer::advance`] reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PacerTick {
    /// Nothing pending.
    Idle,
    /// Time ran out before anything completed.
    Waiting,
    /// The ball animation finished with `left` time unspent.
    AnimationFinished { left: Duration },
    /// The opponent timer expired with `left` time unspent.
    OpponentDue { left: Duration },
}

/// Drives the ball animation and the single opponent timer.
#[derive(Clone, Debug)]
pub struct Pacer {
    config: PacingConfig,
    animation: Option<BallAnimation>,
    opponent_timer: Option<Duration>,
    resting: f32,
}

impl Pacer {
    /// Create an idle pacer with the ball drawn at `ball`.
    #[must_use]
    pub fn new(config: PacingConfig, ball: i32) -> Self {
        Self {
            config,
            animation: None,
            opponent_timer: None,
            resting: ball as f32,
        }
    }

    /// Start animating a play, replacing any animation in flight.
    pub fn animate(&mut self, from: i32, to: i32) {
        let animation = BallAnimation::new(from, to, self.config.ball_speed);
        log::trace!("animating ball {from} -> {to} over {:?}", animation.duration());
        self.resting = to as f32;
        self.animation = Some(animation);
    }

    /// Arm the opponent timer. Does nothing if one is already running.
    pub fn arm_opponent_timer(&mut self) {
        if self.opponent_timer.is_none() {
            log::trace!("opponent snap in {:?}", self.config.opponent_delay);
            self.opponent_timer = Some(self.config.opponent_delay);
        }
    }

    /// Cancel the timer and any animation, parking the ball at `ball`.
    pub fn cancel(&mut self, ball: i32) {
        self.animation = None;
        self.opponent_timer = None;
        self.resting = ball as f32;
    }

    /// Spend up to `budget` on whatever is pending.
    ///
    /// The animation runs before the timer; call again with the returned
    /// leftover time to continue.
    pub fn advance(&mut self, budget: Duration) -> PacerTick {
        if let Some(animation) = self.animation.as_mut() {
            let left = animation.advance(budget);
            if animation.is_complete() {
                self.animation = None;
                return PacerTick::AnimationFinished { left };
            }
            return PacerTick::Waiting;
        }

        match self.opponent_timer {
            Some(remaining) if budget >= remaining => {
                self.opponent_timer = None;
                PacerTick::OpponentDue {
                    left: budget - remaining,
                }
            }
            Some(remaining) => {
                self.opponent_timer = Some(remaining - budget);
                PacerTick::Waiting
            }
            None => PacerTick::Idle,
        }
    }

    /// Ball position a shell should draw.
    #[must_use]
    pub fn displayed_position(&self) -> f32 {
        self.animation
            .as_ref()
            .map_or(self.resting, BallAnimation::position)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Time until the opponent snaps, if the timer is armed.
    #[must_use]
    pub fn opponent_timer(&self) -> Option<Duration> {
        self.opponent_timer
    }
}
