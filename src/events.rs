use crate::core::choices::parse_choices;
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct InputElements {
    pub textarea: web::HtmlTextAreaElement,
    pub spin_button: web::HtmlButtonElement,
    pub velocity_slider: Option<web::HtmlInputElement>,
}

/// Wire the spin button, the choice textarea, and (for the simulation
/// strategy) the velocity slider to the frame context.
pub fn wire(elements: InputElements, ctx: Rc<RefCell<FrameContext>>) {
    let ctx_spin = ctx.clone();
    dom::add_listener(elements.spin_button.as_ref(), "click", move || {
        ctx_spin.borrow_mut().trigger_spin();
    });

    let ctx_input = ctx.clone();
    let textarea = elements.textarea.clone();
    let button = elements.spin_button.clone();
    dom::add_listener(elements.textarea.as_ref(), "input", move || {
        let choices = parse_choices(&textarea.value());
        button.set_disabled(choices.is_empty());
        ctx_input.borrow_mut().set_choices(&choices);
    });

    if let Some(slider) = elements.velocity_slider {
        let ctx_slider = ctx.clone();
        let slider_value = slider.clone();
        dom::add_listener(slider.as_ref(), "input", move || {
            // Slider range is 0..=100; the simulation caps velocity at 1.
            let velocity = slider_value.value().parse::<f64>().unwrap_or(0.0) / 100.0;
            ctx_slider.borrow_mut().set_velocity(velocity);
        });
    }
}
