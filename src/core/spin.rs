//! Rotation strategies for the wheel.
//!
//! Each strategy is a small state machine over one rotation scalar
//! (degrees, cumulative), advanced once per rendered frame. Randomness and
//! the tick cue are injected so every strategy runs deterministically
//! under a seeded RNG with a counting cue.

use super::geometry::choice_index_at;
use rand::prelude::*;
use std::time::Duration;

/// Which strategy drives the wheel, selected once at startup via the
/// `mode` query parameter. Unknown or absent values fall back to the
/// inertial wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Inertial,
    Tween,
    Simulated,
    Static,
}

impl StrategyKind {
    pub fn from_query(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        for pair in query.split('&') {
            if let Some(value) = pair.strip_prefix("mode=") {
                return match value {
                    "tween" => Self::Tween,
                    "sim" => Self::Simulated,
                    "static" => Self::Static,
                    _ => Self::Inertial,
                };
            }
        }
        Self::Inertial
    }
}

/// Inertial-decay tuning.
#[derive(Clone, Debug)]
pub struct InertialParams {
    pub min_turns: u32,
    pub max_turns: u32,
    pub time_constant: Duration,
    pub settle_epsilon_deg: f64,
}

impl Default for InertialParams {
    fn default() -> Self {
        Self {
            min_turns: 10,
            max_turns: 15,
            time_constant: Duration::from_millis(1000),
            settle_epsilon_deg: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct InertialTarget {
    rotation: f64,
    index: usize,
}

/// Spin to a pre-chosen slice with an exponential settle.
///
/// The winning slice is drawn uniformly when the spin is triggered; the
/// animation then decays toward the exact angle that puts it under the
/// pointer, so the selection never depends on where the easing stops.
#[derive(Clone, Debug)]
pub struct InertialSpin {
    params: InertialParams,
    rotation: f64,
    target: Option<InertialTarget>,
    settled: Option<usize>,
}

impl InertialSpin {
    pub fn new(params: InertialParams) -> Self {
        Self {
            params,
            rotation: 0.0,
            target: None,
            settled: None,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.target.is_some()
    }

    /// Pre-chosen slice for the spin in flight, or the last settled one.
    pub fn selection(&self) -> Option<usize> {
        self.target.map(|t| t.index).or(self.settled)
    }

    /// Ignored while a spin is active or when there are no choices.
    pub fn trigger(&mut self, choice_count: usize, rng: &mut StdRng) {
        if choice_count == 0 || self.target.is_some() {
            return;
        }
        let index = rng.gen_range(0..choice_count);
        let angle = index as f64 * (360.0 / choice_count as f64);
        let turns = rng.gen_range(self.params.min_turns..=self.params.max_turns);
        // Rebase to the last whole turn so the target angle is exact.
        let base = self.rotation - self.rotation.rem_euclid(360.0);
        self.target = Some(InertialTarget {
            rotation: base + angle + f64::from(turns) * 360.0,
            index,
        });
    }

    pub fn advance(&mut self, dt: Duration) {
        let Some(t) = self.target else { return };
        let tau = self.params.time_constant.as_secs_f64();
        let alpha = 1.0 - (-dt.as_secs_f64() / tau).exp();
        self.rotation += (t.rotation - self.rotation) * alpha;
        if (t.rotation - self.rotation).abs() < self.params.settle_epsilon_deg {
            self.rotation = t.rotation;
            self.settled = Some(t.index);
            self.target = None;
        }
    }
}

/// Tweened-spin tuning. The turn count is drawn from
/// `min_turns..=max_turns` and mapped linearly onto the duration range, so
/// bigger spins take longer.
#[derive(Clone, Debug)]
pub struct TweenParams {
    pub min_turns: u32,
    pub max_turns: u32,
    pub min_duration: Duration,
    pub max_duration: Duration,
    pub correction_deg: f64,
    pub correction_duration: Duration,
}

impl Default for TweenParams {
    fn default() -> Self {
        Self {
            min_turns: 3,
            max_turns: 8,
            min_duration: Duration::from_millis(1800),
            max_duration: Duration::from_millis(4500),
            correction_deg: -12.0,
            correction_duration: Duration::from_millis(350),
        }
    }
}

impl TweenParams {
    /// Linear map from the turn range onto the duration range.
    pub fn duration_for(&self, turns: u32) -> Duration {
        let span = (self.max_turns - self.min_turns).max(1);
        let frac = f64::from(turns.saturating_sub(self.min_turns)) / f64::from(span);
        let secs = self.min_duration.as_secs_f64()
            + frac * (self.max_duration.as_secs_f64() - self.min_duration.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TweenPhase {
    Spin,
    Correct,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
    phase: TweenPhase,
}

fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

/// Fixed-duration eased spin with a small settling correction afterward.
///
/// The correction nudges the wheel by a constant angle wherever the tween
/// lands, so the landing distribution over slices is not uniform. That
/// bias is inherent to this strategy and kept as-is; the selection is
/// whatever the pointer resolver reports at rest.
#[derive(Clone, Debug)]
pub struct TweenSpin {
    params: TweenParams,
    rotation: f64,
    anim: Option<Tween>,
}

impl TweenSpin {
    pub fn new(params: TweenParams) -> Self {
        Self {
            params,
            rotation: 0.0,
            anim: None,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.anim.is_some()
    }

    /// Ignored while a spin is active or when there are no choices.
    pub fn trigger(&mut self, choice_count: usize, rng: &mut StdRng) {
        if choice_count == 0 || self.anim.is_some() {
            return;
        }
        let turns = rng.gen_range(self.params.min_turns..=self.params.max_turns);
        self.anim = Some(Tween {
            from: self.rotation,
            to: self.rotation + f64::from(turns) * 360.0,
            elapsed: Duration::ZERO,
            duration: self.params.duration_for(turns),
            phase: TweenPhase::Spin,
        });
    }

    pub fn advance(&mut self, dt: Duration) {
        let Some(anim) = &mut self.anim else { return };
        anim.elapsed += dt;
        let p = (anim.elapsed.as_secs_f64() / anim.duration.as_secs_f64()).min(1.0);
        self.rotation = anim.from + (anim.to - anim.from) * ease_out_cubic(p);
        if p >= 1.0 {
            match anim.phase {
                TweenPhase::Spin => {
                    *anim = Tween {
                        from: self.rotation,
                        to: self.rotation + self.params.correction_deg,
                        elapsed: Duration::ZERO,
                        duration: self.params.correction_duration,
                        phase: TweenPhase::Correct,
                    };
                }
                TweenPhase::Correct => self.anim = None,
            }
        }
    }
}

/// Phases of the velocity simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimPhase {
    Idle,
    Accelerating,
    Holding,
    Decelerating,
}

/// Velocity-simulation tuning, all in per-frame units.
#[derive(Clone, Debug)]
pub struct SimParams {
    pub accel_min: f64,
    pub accel_max: f64,
    pub max_velocity: f64,
    /// Fixed negative acceleration applied while decelerating.
    pub decel: f64,
    /// Chance per frame to start decelerating while at max velocity.
    pub decel_chance: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            accel_min: 0.005,
            accel_max: 0.02,
            max_velocity: 1.0,
            decel: -0.01,
            decel_chance: 0.025,
        }
    }
}

/// Explicit per-frame velocity/acceleration state machine.
///
/// Linear velocity is eased cubically into the angular step, giving a fast
/// spin at the cap and a long slow tail near rest. Ticks fire on
/// peg-boundary crossings rather than slice changes.
#[derive(Clone, Debug)]
pub struct SimulatedSpin {
    params: SimParams,
    rotation: f64,
    velocity: f64,
    acceleration: f64,
    phase: SimPhase,
}

impl SimulatedSpin {
    pub fn new(params: SimParams) -> Self {
        Self {
            params,
            rotation: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            phase: SimPhase::Idle,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.velocity > 0.0
    }

    /// Start accelerating with a random ramp; ignored unless idle.
    pub fn trigger(&mut self, choice_count: usize, rng: &mut StdRng) {
        if choice_count == 0 || self.phase != SimPhase::Idle {
            return;
        }
        self.acceleration = rng.gen_range(self.params.accel_min..=self.params.accel_max);
        self.phase = SimPhase::Accelerating;
    }

    /// Direct velocity override from the slider; skips the ramp-up and
    /// resets acceleration in the same step so the state stays coherent.
    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity.clamp(0.0, self.params.max_velocity);
        self.acceleration = 0.0;
        self.phase = if self.velocity > 0.0 {
            SimPhase::Holding
        } else {
            SimPhase::Idle
        };
    }

    /// Advance one frame. Fires the cue when the step crosses a peg
    /// boundary.
    pub fn step(&mut self, peg_count: usize, rng: &mut StdRng, cue: &mut dyn FnMut()) {
        match self.phase {
            SimPhase::Idle => {}
            SimPhase::Accelerating => {
                self.velocity += self.acceleration;
                if self.velocity >= self.params.max_velocity {
                    self.velocity = self.params.max_velocity;
                    self.acceleration = 0.0;
                    self.phase = SimPhase::Holding;
                }
            }
            SimPhase::Holding => {
                if self.velocity >= self.params.max_velocity
                    && rng.gen::<f64>() < self.params.decel_chance
                {
                    self.acceleration = self.params.decel;
                    self.phase = SimPhase::Decelerating;
                }
            }
            SimPhase::Decelerating => {
                self.velocity += self.acceleration;
                if self.velocity <= 0.0 {
                    self.velocity = 0.0;
                    self.acceleration = 0.0;
                    self.phase = SimPhase::Idle;
                }
            }
        }
        let delta = (self.velocity / 4.0).powi(3) * 360.0;
        if delta > 0.0 && peg_count > 0 {
            let spacing = 360.0 / peg_count as f64;
            let before = (self.rotation / spacing).floor();
            let after = ((self.rotation + delta) / spacing).floor();
            if after > before {
                cue();
            }
        }
        self.rotation += delta;
    }
}

/// Motionless variant; only the palette start offset varies run to run.
#[derive(Clone, Copy, Debug)]
pub struct StaticWheel {
    color_offset: usize,
}

impl StaticWheel {
    pub fn new(palette_len: usize, rng: &mut StdRng) -> Self {
        let color_offset = if palette_len == 0 {
            0
        } else {
            rng.gen_range(0..palette_len)
        };
        Self { color_offset }
    }

    pub fn color_offset(&self) -> usize {
        self.color_offset
    }
}

/// The active rotation strategy.
#[derive(Clone, Debug)]
pub enum Strategy {
    Inertial(InertialSpin),
    Tween(TweenSpin),
    Simulated(SimulatedSpin),
    Static(StaticWheel),
}

impl Strategy {
    pub fn rotation(&self) -> f64 {
        match self {
            Strategy::Inertial(s) => s.rotation(),
            Strategy::Tween(s) => s.rotation(),
            Strategy::Simulated(s) => s.rotation(),
            Strategy::Static(_) => 0.0,
        }
    }

    pub fn is_spinning(&self) -> bool {
        match self {
            Strategy::Inertial(s) => s.is_spinning(),
            Strategy::Tween(s) => s.is_spinning(),
            Strategy::Simulated(s) => s.is_spinning(),
            Strategy::Static(_) => false,
        }
    }

    pub fn trigger(&mut self, choice_count: usize, rng: &mut StdRng) {
        match self {
            Strategy::Inertial(s) => s.trigger(choice_count, rng),
            Strategy::Tween(s) => s.trigger(choice_count, rng),
            Strategy::Simulated(s) => s.trigger(choice_count, rng),
            Strategy::Static(_) => {}
        }
    }

    /// Advance one frame. `peg_count` only matters to the simulation,
    /// which fires the cue on peg crossings; the eased strategies tick on
    /// slice changes via `TickDetector` at the call site.
    pub fn advance(
        &mut self,
        dt: Duration,
        peg_count: usize,
        rng: &mut StdRng,
        cue: &mut dyn FnMut(),
    ) {
        match self {
            Strategy::Inertial(s) => s.advance(dt),
            Strategy::Tween(s) => s.advance(dt),
            Strategy::Simulated(s) => s.step(peg_count, rng, cue),
            Strategy::Static(_) => {}
        }
    }

    pub fn uses_slice_ticks(&self) -> bool {
        matches!(self, Strategy::Inertial(_) | Strategy::Tween(_))
    }

    /// Only the inertial wheel runs the idle color-cycling demo.
    pub fn cycles_colors(&self) -> bool {
        matches!(self, Strategy::Inertial(_))
    }
}

/// Fires the cue when the pointer-resolved slice changes between frames.
///
/// The first observation after a reset only records the index, so a
/// rebuilt wheel never ticks spuriously.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickDetector {
    prev: Option<usize>,
}

impl TickDetector {
    pub fn reset(&mut self) {
        self.prev = None;
    }

    pub fn update(&mut self, rotation_deg: f64, choice_count: usize, cue: &mut dyn FnMut()) {
        let Some(index) = choice_index_at(rotation_deg, choice_count) else {
            self.prev = None;
            return;
        };
        if let Some(prev) = self.prev {
            if prev != index {
                cue();
            }
        }
        self.prev = Some(index);
    }
}
