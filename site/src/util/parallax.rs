//! Title parallax: a spring-damped offset driven by discrete pointer events.
//!
//! The card title drifts against the pointer while it moves over the card and
//! springs back when the pointer leaves. Rendering surfaces feed events in and
//! call [`Parallax::tick`] once per frame; everything here is plain data so the
//! motion can be simulated without a display.
//!
//! ```text
//!   AtRest --move--> Tracking --leave--> Returning --settled--> AtRest
//!                       ^                    |
//!                       +-------move---------+
//! ```

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// Pointer movement is divided by this before it becomes a translation.
pub const TRANSLATE_DIVISOR: f64 = 22.0;

/// Integration step; the spring is advanced in fixed 1 ms increments.
const STEP_SECS: f64 = 0.001;
/// Longest frame gap simulated in one tick (e.g. after a background tab).
const MAX_FRAME_MS: f64 = 64.0;
/// Distance and speed below which an axis counts as settled.
const REST_EPSILON: f64 = 0.01;

/// Damped spring constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub mass: f64,
    pub tension: f64,
    pub friction: f64,
}

impl SpringConfig {
    /// Heavy, slightly under-damped spring used for card titles.
    pub const TITLE: Self = Self { mass: 10.0, tension: 550.0, friction: 140.0 };
}

/// Title translation in pointer pixels plus a scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Offset {
    pub const REST: Self = Self { x: 0.0, y: 0.0, scale: 1.0 };
    const STILL: Self = Self { x: 0.0, y: 0.0, scale: 0.0 };
}

/// Phase of the parallax gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParallaxState {
    /// Offset is at rest and no pointer is over the card.
    AtRest,
    /// Pointer is moving over the card; carries movement since tracking began.
    Tracking { moved_x: f64, moved_y: f64 },
    /// Pointer left; the offset is springing back to rest.
    Returning,
}

/// Animation state owned by one card.
#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    state: ParallaxState,
    config: SpringConfig,
    position: Offset,
    velocity: Offset,
    target: Offset,
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new(SpringConfig::TITLE)
    }
}

impl Parallax {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self {
            state: ParallaxState::AtRest,
            config,
            position: Offset::REST,
            velocity: Offset::STILL,
            target: Offset::REST,
        }
    }

    #[must_use]
    pub fn state(&self) -> ParallaxState {
        self.state
    }

    /// Current animated offset.
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.position
    }

    /// Offset the spring is heading for.
    #[must_use]
    pub fn target(&self) -> Offset {
        self.target
    }

    /// Pointer moved by `(dx, dy)` pixels over the card.
    pub fn pointer_move(&mut self, dx: f64, dy: f64) {
        let (moved_x, moved_y) = match self.state {
            ParallaxState::Tracking { moved_x, moved_y } => (moved_x + dx, moved_y + dy),
            ParallaxState::AtRest | ParallaxState::Returning => (dx, dy),
        };
        self.state = ParallaxState::Tracking { moved_x, moved_y };
        self.target = Offset { x: 0.0 - moved_x, y: 0.0 - moved_y, scale: 1.0 };
    }

    /// Pointer left the card.
    pub fn pointer_leave(&mut self) {
        if self.state == ParallaxState::AtRest {
            return;
        }
        self.state = ParallaxState::Returning;
        self.target = Offset::REST;
    }

    /// Whether another frame would change the offset.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match self.state {
            ParallaxState::AtRest => false,
            ParallaxState::Returning => true,
            ParallaxState::Tracking { .. } => !self.is_settled(),
        }
    }

    /// Advance the spring by `elapsed_ms` of wall time.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick(&mut self, elapsed_ms: f64) {
        if self.state == ParallaxState::AtRest || elapsed_ms <= 0.0 {
            return;
        }
        let steps = elapsed_ms.min(MAX_FRAME_MS).round().max(1.0) as u32;
        for _ in 0..steps {
            self.step();
        }
        if self.is_settled() {
            self.position = self.target;
            self.velocity = Offset::STILL;
            if self.state == ParallaxState::Returning {
                self.state = ParallaxState::AtRest;
            }
        }
    }

    /// CSS transform for the title.
    #[must_use]
    pub fn transform(&self) -> String {
        let Offset { x, y, scale } = self.position;
        format!(
            "translate3d({}px, {}px, 0) scale({scale})",
            x / TRANSLATE_DIVISOR,
            y / TRANSLATE_DIVISOR
        )
    }

    fn step(&mut self) {
        let SpringConfig { mass, tension, friction } = self.config;
        let advance = |position: &mut f64, velocity: &mut f64, to: f64| {
            let force = -tension * (*position - to);
            let damping = -friction * *velocity;
            *velocity += (force + damping) / mass * STEP_SECS;
            *position += *velocity * STEP_SECS;
        };
        advance(&mut self.position.x, &mut self.velocity.x, self.target.x);
        advance(&mut self.position.y, &mut self.velocity.y, self.target.y);
        advance(&mut self.position.scale, &mut self.velocity.scale, self.target.scale);
    }

    fn is_settled(&self) -> bool {
        let axis = |position: f64, velocity: f64, to: f64| {
            (position - to).abs() < REST_EPSILON && velocity.abs() < REST_EPSILON
        };
        axis(self.position.x, self.velocity.x, self.target.x)
            && axis(self.position.y, self.velocity.y, self.target.y)
            && axis(self.position.scale, self.velocity.scale, self.target.scale)
    }
}
