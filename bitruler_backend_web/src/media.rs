// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox-gated playback of `<audio>`/`<video>` elements.

use alloc::boxed::Box;
use alloc::string::String;

use bitruler_core::backend::Playable;
use bitruler_core::id::PlayerId;
use bitruler_core::player::{InputSnapshot, play_if_checked_traced};
use bitruler_core::trace::Tracer;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlInputElement, HtmlMediaElement};

use crate::console::ConsoleSink;

/// A media element that can be started by [`play_if_checked`].
///
/// [`play_if_checked`]: bitruler_core::player::play_if_checked
#[derive(Clone, Debug)]
pub struct MediaHandle(HtmlMediaElement);

impl MediaHandle {
    /// Wraps a media element.
    #[must_use]
    pub fn new(media: HtmlMediaElement) -> Self {
        Self(media)
    }

    /// Looks up a media element by id in the current document.
    #[must_use]
    pub fn by_id(id: &str) -> Option<Self> {
        let doc = web_sys::window()?.document()?;
        let media = doc.get_element_by_id(id)?.dyn_into::<HtmlMediaElement>().ok()?;
        Some(Self(media))
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn element(&self) -> &HtmlMediaElement {
        &self.0
    }
}

impl Playable for MediaHandle {
    fn play(&mut self) {
        // The returned promise settles when playback actually starts (or is
        // blocked by autoplay policy); nothing here waits on it.
        let _ = self.0.play();
    }
}

/// Takes a type/checked snapshot of an input element.
fn snapshot(input: &HtmlInputElement) -> (String, bool) {
    (input.type_(), input.checked())
}

/// Plays the media element `id` if `input` is a checked checkbox.
///
/// Exported to JavaScript as `playIfChecked(id, input)` so it can be used
/// directly from an `onchange` attribute. A missing or non-media element is
/// logged to the console and otherwise ignored.
#[wasm_bindgen(js_name = playIfChecked)]
pub fn play_if_checked(id: &str, input: &HtmlInputElement) {
    let Some(mut media) = MediaHandle::by_id(id) else {
        web_sys::console::warn_1(&JsValue::from_str(&alloc::format!(
            "playIfChecked: no media element with id {id:?}"
        )));
        return;
    };
    let (kind, checked) = snapshot(input);
    let mut sink = ConsoleSink;
    play_if_checked_traced(
        &mut media,
        InputSnapshot::new(&kind, checked),
        PlayerId::default(),
        &mut Tracer::new(&mut sink),
    );
}

/// A `change` listener that plays a media element when its checkbox becomes
/// checked. Dropping the binding unregisters the listener.
pub struct PlaybackBinding {
    input: HtmlInputElement,
    closure: Closure<dyn FnMut(Event)>,
}

impl core::fmt::Debug for PlaybackBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PlaybackBinding")
            .field("input", &"HtmlInputElement")
            .finish_non_exhaustive()
    }
}

impl PlaybackBinding {
    /// Registers a `change` listener on `input` that plays `media`.
    ///
    /// `source` labels the resulting trace events.
    pub fn bind(
        input: HtmlInputElement,
        mut media: MediaHandle,
        source: PlayerId,
    ) -> Result<Self, JsValue> {
        let target = input.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            let (kind, checked) = snapshot(&target);
            let mut sink = ConsoleSink;
            play_if_checked_traced(
                &mut media,
                InputSnapshot::new(&kind, checked),
                source,
                &mut Tracer::new(&mut sink),
            );
        }) as Box<dyn FnMut(Event)>);
        input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        Ok(Self { input, closure })
    }
}

impl Drop for PlaybackBinding {
    fn drop(&mut self) {
        let _ = self
            .input
            .remove_event_listener_with_callback("change", self.closure.as_ref().unchecked_ref());
    }
}
