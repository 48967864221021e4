// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: two bit rulers and a checkbox-gated audio element.
//!
//! Builds a small page in code: a 16-bit ruler (most significant bit first), an
//! 8-bit ruler laid out least significant bit first, a clear button, and a
//! checkbox that plays `chime.ogg` when ticked. Any `.ruler[data-items]`
//! hosts already present in `index.html` are mounted too.
//!
//! Build with: `wasm-pack build --target web demos/web_ruler`
//! Then serve `demos/web_ruler/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::rc::Rc;

use bitruler_backend_web::{
    ConsoleSink, MediaHandle, PlaybackBinding, RulerConfig, RulerStyle, RulerWidget,
};
use bitruler_core::id::{PlayerId, RulerId};
use bitruler_core::ruler::RenderOrder;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, HtmlMediaElement};

const CHIME_SRC: &str = "chime.ogg";

/// Builds the demo page. Runs automatically when the module is instantiated.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let shell = element(&document, "section")?;
    style(
        &shell,
        "width: 720px; margin: 40px auto; padding: 20px 24px; border-radius: 16px; background: #fffdf6; border: 1px solid #d8cfb4; display: grid; gap: 12px; font-family: system-ui, sans-serif;",
    )?;
    body.append_child(&shell)?;

    // -- rulers ------------------------------------------------------------
    let wide = add_ruler(&document, &shell, "wideMask", "16", RenderOrder::Descending, 0)?;
    let narrow = add_ruler(&document, &shell, "narrowMask", "8", RenderOrder::Ascending, 1)?;
    let built_here = 2;

    let clear: HtmlElement = document.create_element("button")?.unchecked_into();
    clear.set_text_content(Some("Clear both"));
    shell.append_child(&clear)?;
    let rulers = Rc::new((wide, narrow));
    let clear_rulers = Rc::clone(&rulers);
    let clear_cb = Closure::wrap(Box::new(move |_event: Event| {
        clear_rulers.0.clear();
        clear_rulers.1.clear();
    }) as Box<dyn FnMut(_)>);
    clear.add_event_listener_with_callback("click", clear_cb.as_ref().unchecked_ref())?;
    clear_cb.forget();

    // -- conditional audio -------------------------------------------------
    let audio: HtmlMediaElement = document.create_element("audio")?.unchecked_into();
    audio.set_src(CHIME_SRC);
    audio.set_preload("auto");
    shell.append_child(&audio)?;

    let row = element(&document, "label")?;
    style(&row, "display: inline-flex; gap: 8px; align-items: center;")?;
    let checkbox: HtmlInputElement = document.create_element("input")?.unchecked_into();
    checkbox.set_type("checkbox");
    let text = element(&document, "span")?;
    text.set_text_content(Some("Chime when checked"));
    row.append_child(&checkbox)?;
    row.append_child(&text)?;
    shell.append_child(&row)?;

    let binding = PlaybackBinding::bind(checkbox, MediaHandle::new(audio), PlayerId(0))?;

    // Hosts declared in index.html, numbered after the rulers built above.
    bitruler_backend_web::mount_rulers(built_here)?;

    // Page-lifetime state: keep listeners registered.
    core::mem::forget(rulers);
    core::mem::forget(binding);

    Ok(())
}

fn add_ruler(
    doc: &Document,
    host: &HtmlElement,
    mask_id: &str,
    items: &str,
    order: RenderOrder,
    id: u32,
) -> Result<RulerWidget, JsValue> {
    let mask = element(doc, "code")?;
    mask.set_id(mask_id);
    style(&mask, "font-size: 20px;")?;

    // No `ruler` class: these hosts are mounted here, not by `mount_rulers`.
    let container = element(doc, "div")?;
    style(&container, "display: flex; gap: 2px;")?;
    host.append_child(&container)?;
    host.append_child(&mask)?;

    let config = RulerConfig {
        order,
        mask_target: mask_id.into(),
        spacing: Some("6px".into()),
        ..RulerConfig::from_attrs(Some(items), None, None, None)
    };
    RulerWidget::mount(
        container,
        &config,
        RulerStyle::default(),
        RulerId(id),
        Some(Box::new(ConsoleSink)),
    )
}

fn element(doc: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(doc.create_element(tag)?.unchecked_into())
}

fn style(el: &web_sys::Element, css: &str) -> Result<(), JsValue> {
    el.set_attribute("style", css)
}
