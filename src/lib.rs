#![cfg(target_arch = "wasm32")]
use crate::core::{
    parse_choices, InertialParams, InertialSpin, SimParams, SimulatedSpin, StaticWheel, Strategy,
    StrategyKind, TweenParams, TweenSpin,
};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spin-wheel starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let host = document
        .get_element_by_id("wheel")
        .ok_or_else(|| anyhow::anyhow!("missing #wheel"))?;
    let textarea: web::HtmlTextAreaElement = dom::element_by_id(&document, "choice-input")?;
    let spin_button: web::HtmlButtonElement = dom::element_by_id(&document, "spin-button")?;
    let slider: Option<web::HtmlInputElement> =
        dom::element_by_id(&document, "velocity-slider").ok();

    let kind = StrategyKind::from_query(&window.location().search().unwrap_or_default());
    log::info!("strategy: {:?}", kind);

    let mut rng = StdRng::from_entropy();
    let strategy = match kind {
        StrategyKind::Inertial => Strategy::Inertial(InertialSpin::new(InertialParams::default())),
        StrategyKind::Tween => Strategy::Tween(TweenSpin::new(TweenParams::default())),
        StrategyKind::Simulated => Strategy::Simulated(SimulatedSpin::new(SimParams::default())),
        StrategyKind::Static => {
            Strategy::Static(StaticWheel::new(constants::COLORS.len(), &mut rng))
        }
    };

    // The slider only drives the simulation; the static wheel has no spin.
    let velocity_slider = if kind == StrategyKind::Simulated {
        slider
    } else {
        if let Some(s) = &slider {
            s.set_hidden(true);
        }
        None
    };
    if kind == StrategyKind::Static {
        spin_button.set_hidden(true);
    }

    if textarea.value().is_empty() {
        textarea.set_value(&constants::DEFAULT_CHOICES.join("\n"));
    }
    let choices = parse_choices(&textarea.value());
    spin_button.set_disabled(choices.is_empty());

    let view = render::WheelView::build(&document, &host)?;
    let mut ctx = frame::FrameContext::new(strategy, rng, view);
    ctx.set_choices(&choices);
    let ctx = Rc::new(RefCell::new(ctx));

    events::wire(
        events::InputElements {
            textarea,
            spin_button,
            velocity_slider,
        },
        ctx.clone(),
    );
    frame::start_loop(ctx);

    Ok(())
}
