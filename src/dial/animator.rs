use crate::dial::RELEASE_DURATION;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Clock {
    Stopped,
    /// Started, waiting for the first frame to fix the start time.
    Pending,
    Running { started_at: Duration },
}

/// Result of advancing the animation to a frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationStep {
    Idle,
    Running(f64),
    Finished,
}

/// Linear interpolation of the plate rotation from fully deflected (1.0) back to rest (0.0).
///
/// Time is whatever monotonic base the host frame clock supplies. The clock starts at the
/// first [`ReleaseAnimator::tick`] after [`ReleaseAnimator::start`], so starting never needs
/// a timestamp.
#[derive(Debug, Clone)]
pub struct ReleaseAnimator {
    duration: Duration,
    progress: f64,
    clock: Clock,
}

impl Default for ReleaseAnimator {
    fn default() -> Self {
        Self::new(RELEASE_DURATION)
    }
}

impl ReleaseAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            progress: 1.0,
            clock: Clock::Stopped,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Takes effect on the next [`start`](Self::start).
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn is_running(&self) -> bool {
        self.clock != Clock::Stopped
    }

    pub fn start(&mut self) {
        self.progress = 1.0;
        self.clock = Clock::Pending;
    }

    /// Cancels any in-flight run and jumps straight to `progress`.
    pub fn snap_to(&mut self, progress: f64) {
        self.clock = Clock::Stopped;
        self.progress = progress.clamp(0.0, 1.0);
    }

    pub fn tick(&mut self, now: Duration) -> AnimationStep {
        let started_at = match self.clock {
            Clock::Stopped => return AnimationStep::Idle,
            Clock::Pending => {
                self.clock = Clock::Running { started_at: now };
                now
            }
            Clock::Running { started_at } => started_at,
        };

        let elapsed = now.saturating_sub(started_at);
        if elapsed >= self.duration {
            self.snap_to(0.0);
            return AnimationStep::Finished;
        }

        self.progress = 1.0 - elapsed.as_secs_f64() / self.duration.as_secs_f64();
        AnimationStep::Running(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_idle_until_started() {
        let mut animator = ReleaseAnimator::default();
        assert_eq!(animator.tick(ms(10)), AnimationStep::Idle);
        assert_eq!(animator.progress(), 1.0);
        assert!(!animator.is_running());
    }

    #[test]
    fn test_linear_interpolation() {
        let mut animator = ReleaseAnimator::default();
        animator.start();
        assert_eq!(animator.tick(ms(1000)), AnimationStep::Running(1.0));
        assert_eq!(animator.tick(ms(1250)), AnimationStep::Running(0.5));
        assert_eq!(animator.tick(ms(1400)), AnimationStep::Running(1.0 - 0.8));
        assert_eq!(animator.tick(ms(1500)), AnimationStep::Finished);
        assert_eq!(animator.progress(), 0.0);
        assert_eq!(animator.tick(ms(1600)), AnimationStep::Idle);
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut animator = ReleaseAnimator::default();
        animator.start();
        animator.tick(ms(0));
        animator.tick(ms(300));
        animator.start();
        assert_eq!(animator.progress(), 1.0);
        assert_eq!(animator.tick(ms(400)), AnimationStep::Running(1.0));
        assert_eq!(animator.tick(ms(900)), AnimationStep::Finished);
    }

    #[test]
    fn test_snap_cancels() {
        let mut animator = ReleaseAnimator::default();
        animator.start();
        animator.tick(ms(0));
        animator.tick(ms(100));
        animator.snap_to(1.0);
        assert!(!animator.is_running());
        assert_eq!(animator.tick(ms(600)), AnimationStep::Idle);
        assert_eq!(animator.progress(), 1.0);
    }

    #[test]
    fn test_duration_change_applies() {
        let mut animator = ReleaseAnimator::new(ms(100));
        animator.set_duration(ms(200));
        animator.start();
        animator.tick(ms(0));
        assert_eq!(animator.tick(ms(100)), AnimationStep::Running(0.5));
        assert_eq!(animator.tick(ms(200)), AnimationStep::Finished);
    }
}
