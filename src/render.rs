//! SVG construction and per-frame updates for the wheel.
//!
//! The whole widget lives in a viewBox-normalized `<svg>`: slice paths,
//! labels and outlines in a rotating group behind a center-hole mask, a
//! peg ring, and a fixed pointer polygon on top.

use crate::constants::{
    CENTER_RADIUS, LABEL_OFFSET_X, LABEL_OFFSET_Y, PEG_RADIUS, PEG_RING_RADIUS, POINTER_POINTS,
    VIEWBOX,
};
use crate::core::geometry;
use crate::core::palette::color_for;
use crate::dom;
use anyhow::Result;
use web_sys as web;

pub struct WheelView {
    document: web::Document,
    svg: web::Element,
    wheel_group: web::Element,
    slices_group: web::Element,
    labels_group: web::Element,
    outlines_group: web::Element,
    pegs_group: web::Element,
}

impl WheelView {
    /// Build the SVG skeleton and attach it under `host`.
    pub fn build(document: &web::Document, host: &web::Element) -> Result<Self> {
        let svg = dom::create_svg_element(document, "svg")?;
        _ = svg.set_attribute("viewBox", VIEWBOX);

        // Mask punches the center hole out of the rotating group.
        let defs = dom::create_svg_element(document, "defs")?;
        let mask = dom::create_svg_element(document, "mask")?;
        _ = mask.set_attribute("id", "center-hole");
        let outer = dom::create_svg_element(document, "circle")?;
        _ = outer.set_attribute("cx", "0");
        _ = outer.set_attribute("cy", "0");
        _ = outer.set_attribute("r", "2");
        _ = outer.set_attribute("fill", "white");
        let inner = dom::create_svg_element(document, "circle")?;
        _ = inner.set_attribute("cx", "0");
        _ = inner.set_attribute("cy", "0");
        _ = inner.set_attribute("r", &CENTER_RADIUS.to_string());
        _ = inner.set_attribute("fill", "black");
        _ = mask.append_child(&outer);
        _ = mask.append_child(&inner);
        _ = defs.append_child(&mask);
        _ = svg.append_child(&defs);

        let wheel_group = dom::create_svg_element(document, "g")?;
        _ = wheel_group.set_attribute("class", "wheel");
        _ = wheel_group.set_attribute("mask", "url(#center-hole)");

        let slices_group = dom::create_svg_element(document, "g")?;
        _ = slices_group.set_attribute("class", "slices");
        let labels_group = dom::create_svg_element(document, "g")?;
        _ = labels_group.set_attribute("class", "labels");
        let outlines_group = dom::create_svg_element(document, "g")?;
        _ = outlines_group.set_attribute("class", "outlines");
        let pegs_group = dom::create_svg_element(document, "g")?;
        _ = pegs_group.set_attribute("class", "pegs");

        let center_outline = dom::create_svg_element(document, "circle")?;
        _ = center_outline.set_attribute("class", "center-outline");
        _ = center_outline.set_attribute("cx", "0");
        _ = center_outline.set_attribute("cy", "0");
        _ = center_outline.set_attribute("r", &CENTER_RADIUS.to_string());

        _ = wheel_group.append_child(&slices_group);
        _ = wheel_group.append_child(&labels_group);
        _ = wheel_group.append_child(&outlines_group);
        _ = wheel_group.append_child(&pegs_group);
        _ = wheel_group.append_child(&center_outline);
        _ = svg.append_child(&wheel_group);

        let pointer = dom::create_svg_element(document, "polygon")?;
        _ = pointer.set_attribute("class", "pointer");
        _ = pointer.set_attribute("points", POINTER_POINTS);
        _ = svg.append_child(&pointer);

        _ = host.append_child(&svg);

        Ok(Self {
            document: document.clone(),
            svg,
            wheel_group,
            slices_group,
            labels_group,
            outlines_group,
            pegs_group,
        })
    }

    /// Regenerate slices, labels, outlines, and pegs for a new choice
    /// list. Zero choices leaves the wheel empty.
    pub fn rebuild(&self, choices: &[String], palette: &[&str], peg_count: usize) {
        self.slices_group.set_inner_html("");
        self.labels_group.set_inner_html("");
        self.outlines_group.set_inner_html("");
        self.pegs_group.set_inner_html("");

        let count = choices.len();
        for (index, choice) in choices.iter().enumerate() {
            let path_def = geometry::slice_path(count, index);

            if let Ok(path) = dom::create_svg_element(&self.document, "path") {
                _ = path.set_attribute("d", &path_def);
                _ = path.set_attribute("fill", color_for(palette, index));
                _ = self.slices_group.append_child(&path);
            }

            if let Ok(text) = dom::create_svg_element(&self.document, "text") {
                _ = text.set_attribute("x", "0");
                _ = text.set_attribute("y", "0");
                let degrees = geometry::label_turn(count, index) * 360.0;
                _ = text.set_attribute(
                    "transform",
                    &format!("rotate({degrees}) translate({LABEL_OFFSET_X} {LABEL_OFFSET_Y})"),
                );
                text.set_text_content(Some(choice));
                _ = self.labels_group.append_child(&text);
            }

            if let Ok(outline) = dom::create_svg_element(&self.document, "path") {
                _ = outline.set_attribute("d", &path_def);
                _ = self.outlines_group.append_child(&outline);
            }
        }

        if peg_count > 0 && count > 0 {
            // Pegs share the slice offset so they line up with boundaries.
            let offset = geometry::slice_span(count, 0).0;
            for peg in 0..peg_count {
                let turn = offset + peg as f64 / peg_count as f64;
                let (x, y) = geometry::circle_point(turn);
                if let Ok(circle) = dom::create_svg_element(&self.document, "circle") {
                    _ = circle.set_attribute("cx", &(x * PEG_RING_RADIUS).to_string());
                    _ = circle.set_attribute("cy", &(y * PEG_RING_RADIUS).to_string());
                    _ = circle.set_attribute("r", &PEG_RADIUS.to_string());
                    _ = self.pegs_group.append_child(&circle);
                }
            }
        }
    }

    /// Recolor slices in place (demo-mode cycling) without rebuilding.
    pub fn set_colors(&self, palette: &[&str]) {
        let children = self.slices_group.children();
        for i in 0..children.length() {
            if let Some(el) = children.item(i) {
                _ = el.set_attribute("fill", color_for(palette, i as usize));
            }
        }
    }

    pub fn set_rotation(&self, rotation_deg: f64) {
        _ = self
            .wheel_group
            .set_attribute("transform", &format!("rotate({rotation_deg})"));
    }

    pub fn set_demo_class(&self, on: bool) {
        let cl = self.svg.class_list();
        if on {
            _ = cl.add_1("demo");
        } else {
            _ = cl.remove_1("demo");
        }
    }
}
