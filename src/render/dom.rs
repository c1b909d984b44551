//! Applies `UiUpdate`s to the live document
//!
//! Tests run in a browser (`wasm-pack test --headless --firefox`).

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{BallSpec, UiUpdate};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Apply updates in order. Updates whose target is missing are skipped.
pub fn apply(document: &Document, updates: &[UiUpdate]) -> Result<(), JsValue> {
    for update in updates {
        let Some(target) = document.query_selector(update.selector())? else {
            log::debug!("No element for {}", update.selector());
            continue;
        };

        match update {
            UiUpdate::Clear { .. } => target.set_inner_html(""),
            UiUpdate::AppendBall { ball, .. } => {
                let svg = create_ball(document, ball)?;
                target.append_child(&svg)?;
            }
            UiUpdate::SetText { text, .. } => target.set_text_content(Some(text.as_str())),
            UiUpdate::SetHtml { html, .. } => target.set_inner_html(html),
        }
    }
    Ok(())
}

fn create_ball(document: &Document, ball: &BallSpec) -> Result<Element, JsValue> {
    let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
    for (name, value) in ball.svg_attributes() {
        svg.set_attribute(name, &value)?;
    }

    let circle = document.create_element_ns(Some(SVG_NS), "circle")?;
    for (name, value) in ball.circle_attributes() {
        circle.set_attribute(name, &value)?;
    }

    svg.append_child(&circle)?;
    Ok(svg)
}
