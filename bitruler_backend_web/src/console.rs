// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::string::ToString as _;

use bitruler_core::trace::{
    PlaybackEvent, RejectedToggleEvent, RulerBuiltEvent, ToggleEvent, TraceSink,
};
use wasm_bindgen::JsValue;

/// Writes one `console.log` line per trace event.
///
/// Rejected toggles and adjusted item counts go to `console.warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

fn log(line: &str) {
    web_sys::console::log_1(&JsValue::from_str(line));
}

fn warn(line: &str) {
    web_sys::console::warn_1(&JsValue::from_str(line));
}

impl TraceSink for ConsoleSink {
    fn on_ruler_built(&mut self, e: &RulerBuiltEvent) {
        if e.adjusted() {
            warn(&e.to_string());
        } else {
            log(&e.to_string());
        }
    }

    fn on_toggle(&mut self, e: &ToggleEvent) {
        log(&e.to_string());
    }

    fn on_rejected_toggle(&mut self, e: &RejectedToggleEvent) {
        warn(&e.to_string());
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        log(&e.to_string());
    }
}
