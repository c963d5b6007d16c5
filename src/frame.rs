use crate::audio::TickPlayer;
use crate::constants::{COLORS, DEMO_RESUME_DELAY_MS, DEMO_SHUFFLE_INTERVAL_MS, MIN_PEG_COUNT};
use crate::core::{geometry, palette, DemoMode, Strategy, TickDetector};
use crate::render::WheelView;
use instant::Instant;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    strategy: Strategy,
    rng: StdRng,
    detector: TickDetector,
    demo: DemoMode,
    palette: Vec<&'static str>,
    choice_count: usize,
    peg_count: usize,
    view: WheelView,
    audio: TickPlayer,
    last_instant: Instant,
    was_spinning: bool,
}

impl FrameContext {
    pub fn new(strategy: Strategy, rng: StdRng, view: WheelView) -> Self {
        Self {
            strategy,
            rng,
            detector: TickDetector::default(),
            demo: DemoMode::new(
                Duration::from_millis(DEMO_SHUFFLE_INTERVAL_MS),
                Duration::from_millis(DEMO_RESUME_DELAY_MS),
            ),
            palette: COLORS.to_vec(),
            choice_count: 0,
            peg_count: 0,
            view,
            audio: TickPlayer::new(),
            last_instant: Instant::now(),
            was_spinning: false,
        }
    }

    /// Advance one animation frame: demo cycling, physics, tick cues, and
    /// the rotation pushed to the view.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        if self.strategy.cycles_colors() {
            if self.demo.advance(dt) {
                self.palette = palette::shuffled(COLORS, &mut self.rng);
                self.view.set_colors(&self.palette);
            }
            self.view.set_demo_class(self.demo.is_running());
        }

        let audio = &self.audio;
        let mut cue = || audio.play();
        self.strategy
            .advance(dt, self.peg_count, &mut self.rng, &mut cue);

        let rotation = self.strategy.rotation();
        let spinning = self.strategy.is_spinning();
        if self.strategy.uses_slice_ticks() && spinning {
            self.detector.update(rotation, self.choice_count, &mut cue);
        }
        if self.was_spinning && !spinning {
            // Inertial spins know their result up front; the others report
            // whatever the pointer landed on.
            let selected = match &self.strategy {
                Strategy::Inertial(s) => s.selection(),
                _ => geometry::choice_index_at(rotation, self.choice_count),
            };
            if let Some(index) = selected {
                log::info!("wheel settled on slice {index}");
            }
        }
        self.was_spinning = spinning;
        self.view.set_rotation(rotation);
    }

    /// Spin-button press. A trigger mid-spin is ignored by the strategy
    /// itself; with no choices the wheel stays inert.
    pub fn trigger_spin(&mut self) {
        if self.choice_count == 0 {
            return;
        }
        self.audio.unlock();
        self.strategy.trigger(self.choice_count, &mut self.rng);
        self.demo.suspend();
    }

    /// Slider input (simulation strategy only).
    pub fn set_velocity(&mut self, velocity: f64) {
        if let Strategy::Simulated(sim) = &mut self.strategy {
            self.audio.unlock();
            sim.set_velocity(velocity);
            log::debug!("velocity override: {:.2} ({:?})", sim.velocity(), sim.phase());
        }
    }

    /// New choice list: recompute pegs, re-randomize colors, rebuild the
    /// SVG, and rearm tick detection.
    pub fn set_choices(&mut self, choices: &[String]) {
        self.choice_count = choices.len();
        self.peg_count = geometry::peg_count(self.choice_count, MIN_PEG_COUNT);
        self.palette = match &self.strategy {
            Strategy::Static(s) => palette::rotated_by(COLORS, s.color_offset()),
            _ => palette::shuffled(COLORS, &mut self.rng),
        };
        self.view.rebuild(choices, &self.palette, self.peg_count);
        self.detector.reset();
    }
}

/// Drive the context with the self-referential requestAnimationFrame
/// closure.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
