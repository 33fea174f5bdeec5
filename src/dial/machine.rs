use crate::dial::animator::{AnimationStep, ReleaseAnimator};
use crate::dial::geometry::{DialMetrics, Digit, DigitLayout, Point, round_degrees};
use crate::dial::{
    ANGLE_STEP, DIGIT_COUNT, HIT_RADIUS, INNER_RADIUS, LIMIT_ANGLE, RELEASE_DURATION, tracker,
};
use std::time::Duration;
use strum::Display as StrumDisplay;

/// A single drag-to-release interaction for one digit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub digit: Digit,
    pub accumulated_angle: f64,
    pub last_pointer: Point,
}

impl Session {
    fn new(digit: Digit, pointer: Point) -> Self {
        Self {
            digit,
            accumulated_angle: 0.0,
            last_pointer: pointer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialState {
    Idle,
    Dragging(Session),
    AtLimit(Session),
    Releasing { session: Session, at_limit: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum DialPhase {
    Idle,
    Dragging,
    AtLimit,
    Releasing,
}

impl DialState {
    pub fn phase(&self) -> DialPhase {
        match self {
            Self::Idle => DialPhase::Idle,
            Self::Dragging(_) => DialPhase::Dragging,
            Self::AtLimit(_) => DialPhase::AtLimit,
            Self::Releasing { .. } => DialPhase::Releasing,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Idle => None,
            Self::Dragging(s) | Self::AtLimit(s) | Self::Releasing { session: s, .. } => Some(s),
        }
    }

    pub fn at_limit(&self) -> bool {
        matches!(
            self,
            Self::AtLimit(_) | Self::Releasing { at_limit: true, .. }
        )
    }
}

/// What the host should do after feeding the dial an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureAction {
    pub should_redraw: bool,
    /// A release has started; the host must deliver frame ticks until it finishes.
    pub should_animate: bool,
}

impl GestureAction {
    pub fn new(should_redraw: bool, should_animate: bool) -> Self {
        Self {
            should_redraw,
            should_animate,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DialSnapshot {
    pub dragged_digit: Option<Digit>,
    pub accumulated_angle: f64,
    pub animation_progress: f64,
    pub at_limit: bool,
    pub rest_angles: [f64; DIGIT_COUNT],
    pub metrics: DialMetrics,
}

impl DialSnapshot {
    pub fn rest_angle(&self, digit: Digit) -> f64 {
        self.rest_angles[digit.as_index()]
    }

    /// Where `digit` is drawn this frame: the whole plate turns with the dragged digit.
    pub fn display_angle(&self, digit: Digit) -> f64 {
        self.rest_angle(digit) - self.accumulated_angle * self.animation_progress
    }
}

type DialListener = Box<dyn FnMut(Digit)>;

pub struct RotaryDial {
    layout: DigitLayout,
    metrics: DialMetrics,
    state: DialState,
    animator: ReleaseAnimator,
    on_number_dialed: Option<DialListener>,
}

impl Default for RotaryDial {
    fn default() -> Self {
        Self::new(INNER_RADIUS, HIT_RADIUS, RELEASE_DURATION)
    }
}

impl RotaryDial {
    pub fn new(inner_radius: f64, hit_radius: f64, release_duration: Duration) -> Self {
        Self {
            layout: DigitLayout::new(),
            metrics: DialMetrics::from_size(0.0, 0.0, inner_radius, hit_radius),
            state: DialState::Idle,
            animator: ReleaseAnimator::new(release_duration),
            on_number_dialed: None,
        }
    }

    pub fn with_listener(mut self, listener: impl FnMut(Digit) + 'static) -> Self {
        self.on_number_dialed = Some(Box::new(listener));
        self
    }

    pub fn state(&self) -> &DialState {
        &self.state
    }

    pub fn layout(&self) -> &DigitLayout {
        &self.layout
    }

    pub fn metrics(&self) -> &DialMetrics {
        &self.metrics
    }

    pub fn is_releasing(&self) -> bool {
        matches!(self.state, DialState::Releasing { .. })
    }

    /// Layout pass: recomputes the centre and ring from the container size.
    pub fn resize(&mut self, width: f64, height: f64) -> GestureAction {
        let metrics = DialMetrics::from_size(
            width,
            height,
            self.metrics.inner_radius,
            self.metrics.hit_radius,
        );
        let changed = metrics != self.metrics;
        self.metrics = metrics;
        GestureAction::new(changed, false)
    }

    /// Applies new radii and release duration without touching an active session.
    pub fn reconfigure(
        &mut self,
        inner_radius: f64,
        hit_radius: f64,
        release_duration: Duration,
    ) -> GestureAction {
        self.metrics = self.metrics.with_radii(inner_radius, hit_radius);
        self.animator.set_duration(release_duration);
        GestureAction::new(true, false)
    }

    pub fn pointer_down(&mut self, point: Point) -> GestureAction {
        let mut action = GestureAction::default();
        if matches!(self.state, DialState::Dragging(_) | DialState::AtLimit(_)) {
            // only one pointer is tracked: finish the old drag first
            action = self.pointer_up();
        }

        let Some(digit) = self.layout.hit_test(
            point,
            self.metrics.center,
            self.metrics.orbit_radius,
            self.metrics.hit_radius,
        ) else {
            return action;
        };

        self.animator.snap_to(1.0);
        self.transition(DialState::Dragging(Session::new(digit, point)));
        GestureAction::new(true, false)
    }

    pub fn pointer_move(&mut self, point: Point) -> GestureAction {
        let DialState::Dragging(mut session) = self.state else {
            if let DialState::AtLimit(session) = &mut self.state {
                session.last_pointer = point;
            }
            return GestureAction::default();
        };

        let change = tracker::angle_change(session.last_pointer, point, self.metrics.center);
        session.last_pointer = point;

        let rest_angle = self.layout.rest_angle(session.digit);
        if limit_reached(rest_angle - session.accumulated_angle - change) {
            session.accumulated_angle = rest_angle + ANGLE_STEP;
            self.transition(DialState::AtLimit(session));
            log::info!("Dialed {}", session.digit);
            if let Some(listener) = self.on_number_dialed.as_mut() {
                listener(session.digit);
            }
            return GestureAction::new(true, false);
        }

        session.accumulated_angle += change;
        self.state = DialState::Dragging(session);
        GestureAction::new(change != 0.0, false)
    }

    pub fn pointer_up(&mut self) -> GestureAction {
        let next = match self.state {
            DialState::Dragging(session) => DialState::Releasing {
                session,
                at_limit: false,
            },
            DialState::AtLimit(session) => DialState::Releasing {
                session,
                at_limit: true,
            },
            DialState::Idle | DialState::Releasing { .. } => return GestureAction::default(),
        };

        self.animator.start();
        self.transition(next);
        GestureAction::new(true, true)
    }

    /// Frame tick from the host's clock.
    pub fn tick(&mut self, now: Duration) -> GestureAction {
        if !self.is_releasing() {
            return GestureAction::default();
        }

        match self.animator.tick(now) {
            AnimationStep::Running(_) => GestureAction::new(true, true),
            AnimationStep::Finished | AnimationStep::Idle => {
                self.transition(DialState::Idle);
                GestureAction::new(true, false)
            }
        }
    }

    pub fn snapshot(&self) -> DialSnapshot {
        let session = self.state.session();
        DialSnapshot {
            dragged_digit: session.map(|s| s.digit),
            accumulated_angle: session.map_or(0.0, |s| s.accumulated_angle),
            animation_progress: self.animator.progress(),
            at_limit: self.state.at_limit(),
            rest_angles: *self.layout.rest_angles(),
            metrics: self.metrics,
        }
    }

    fn transition(&mut self, next: DialState) {
        log::debug!("Dial {} -> {}", self.state.phase(), next.phase());
        self.state = next;
    }
}

/// Compares in rounded whole degrees: reaching the limiter going forward shows up as a
/// difference of 360 or more, turning back past the start as a negative one.
fn limit_reached(candidate: f64) -> bool {
    let alpha = round_degrees(candidate) - round_degrees(LIMIT_ANGLE);
    alpha >= 360 || alpha < 0
}
