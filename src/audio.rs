//! WebAudio tick cue. Playback is fire-and-forget: overlapping calls
//! overlap, nothing is queued, and every JS failure is swallowed so a
//! blocked or missing audio context can never stall the frame loop.

use crate::constants::{TICK_DURATION_SEC, TICK_FREQ_HZ, TICK_VOLUME};
use web_sys as web;

pub struct TickPlayer {
    ctx: Option<web::AudioContext>,
    master: Option<web::GainNode>,
}

impl TickPlayer {
    pub fn new() -> Self {
        let ctx = web::AudioContext::new().ok();
        let master = ctx.as_ref().and_then(|ctx| {
            let gain = web::GainNode::new(ctx).ok()?;
            gain.gain().set_value(TICK_VOLUME);
            gain.connect_with_audio_node(&ctx.destination()).ok()?;
            Some(gain)
        });
        if ctx.is_none() {
            log::warn!("AudioContext unavailable; ticks are silent");
        }
        Self { ctx, master }
    }

    /// Resume the context after a user gesture; browsers start it
    /// suspended until one happens.
    pub fn unlock(&self) {
        if let Some(ctx) = &self.ctx {
            _ = ctx.resume();
        }
    }

    /// One short oscillator blip through the master gain.
    pub fn play(&self) {
        let (Some(ctx), Some(master)) = (&self.ctx, &self.master) else {
            return;
        };
        let Ok(src) = web::OscillatorNode::new(ctx) else {
            return;
        };
        src.set_type(web::OscillatorType::Square);
        src.frequency().set_value(TICK_FREQ_HZ);
        let Ok(env) = web::GainNode::new(ctx) else {
            return;
        };
        let t0 = ctx.current_time();
        env.gain().set_value(1.0);
        _ = env
            .gain()
            .linear_ramp_to_value_at_time(0.0, t0 + TICK_DURATION_SEC);
        _ = src.connect_with_audio_node(&env);
        _ = env.connect_with_audio_node(master);
        _ = src.start();
        _ = src.stop_with_when(t0 + TICK_DURATION_SEC + 0.01);
    }
}
