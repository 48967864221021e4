// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for bitruler.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomPresenter`]: `<button>` and mask-text management
//! - [`RulerWidget`]: per-ruler click listener registration
//! - [`MediaHandle`] and [`PlaybackBinding`]: checkbox-gated playback
//! - [`ConsoleSink`]: trace events to the browser console
//!
//! Two functions are exported to JavaScript for plain HTML pages:
//! `mountRulers(firstId)` builds every `.ruler[data-items]` element on the
//! page, numbering them from `firstId` in trace output, and
//! `playIfChecked(id, input)` plays the media element `id` when `input` is a
//! checked checkbox.

#![no_std]

extern crate alloc;

mod config;
mod console;
mod media;
mod presenter;
mod widget;

use alloc::boxed::Box;

pub use bitruler_core::backend::{Playable, Presenter};
pub use config::{DEFAULT_MASK_TARGET, RULER_SELECTOR, RulerConfig, RulerStyle};
pub use console::ConsoleSink;
pub use media::{MediaHandle, PlaybackBinding, play_if_checked};
pub use presenter::{BIT_ATTR, DomPresenter, TOGGLED_ATTR};
pub use widget::RulerWidget;

use bitruler_core::id::RulerId;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// Builds every ruler host on the page that matches [`RULER_SELECTOR`].
///
/// Each ruler gets its own listeners and lives for the rest of the page.
/// Rulers are labelled `first_id`, `first_id + 1`, and so on, so pages that
/// mount other rulers first can keep their trace output apart. Returns the
/// number of rulers mounted.
#[wasm_bindgen(js_name = mountRulers)]
pub fn mount_rulers(first_id: u32) -> Result<u32, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let hosts = document.query_selector_all(RULER_SELECTOR)?;

    let mut mounted = 0;
    for i in 0..hosts.length() {
        let Some(host) = hosts.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let config = RulerConfig::from_element(&host);
        let widget = RulerWidget::mount(
            host,
            &config,
            RulerStyle::default(),
            nth_ruler_id(first_id, mounted),
            Some(Box::new(ConsoleSink)),
        )?;
        // Page-lifetime widget: keep its listeners registered.
        core::mem::forget(widget);
        mounted += 1;
    }
    Ok(mounted)
}

/// The id of the `n`th ruler mounted when numbering starts at `first_id`.
fn nth_ruler_id(first_id: u32, n: u32) -> RulerId {
    RulerId(first_id.saturating_add(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounted_ids_continue_from_first_id() {
        assert_eq!(nth_ruler_id(0, 0), RulerId(0));
        assert_eq!(nth_ruler_id(2, 0), RulerId(2));
        assert_eq!(nth_ruler_id(2, 3), RulerId(5));
        assert_eq!(nth_ruler_id(u32::MAX, 1), RulerId(u32::MAX));
    }
}
