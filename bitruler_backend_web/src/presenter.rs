// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element management.
//!
//! Translates [`BitRuler`] state into a row of `<button>` elements and a mask
//! text node by applying incremental updates from [`RulerChanges`].
//!
//! [`BitRuler`]: bitruler_core::ruler::BitRuler
//! [`RulerChanges`]: bitruler_core::ruler::RulerChanges

use alloc::string::{String, ToString as _};
use alloc::vec::Vec;

use bitruler_core::backend::Presenter;
use bitruler_core::bits::BitIndex;
use bitruler_core::ruler::{BitRuler, RulerChanges};
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

use crate::config::RulerStyle;

/// Attribute mirroring each button's on/off state, for styling hooks.
pub const TOGGLED_ATTR: &str = "data-toggled";

/// Attribute carrying each button's bit position.
pub const BIT_ATTR: &str = "data-bit";

/// Maps a [`BitRuler`] to live DOM elements, applying incremental updates
/// from [`RulerChanges`].
///
/// The presenter owns a container `HtmlElement` to which one `<button>` per
/// bit is appended, and optionally a text element that shows the mask. Call
/// [`apply`](Presenter::apply) after each mutation to synchronize the DOM.
///
/// [`BitRuler`]: bitruler_core::ruler::BitRuler
pub struct DomPresenter {
    container: HtmlElement,
    mask_text: Option<HtmlElement>,
    buttons: Vec<Option<HtmlElement>>,
    style: RulerStyle,
    spacing: Option<String>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("container", &"HtmlElement")
            .field("has_mask_text", &self.mask_text.is_some())
            .field("buttons_len", &self.buttons.len())
            .field("style", &self.style)
            .field("spacing", &self.spacing)
            .finish()
    }
}

impl DomPresenter {
    /// Creates a presenter that manages child buttons of `container` and
    /// writes the mask into `mask_text`, if given.
    #[must_use]
    pub fn new(container: HtmlElement, mask_text: Option<HtmlElement>, style: RulerStyle) -> Self {
        Self {
            container,
            mask_text,
            buttons: Vec::new(),
            style,
            spacing: None,
        }
    }

    /// Returns a reference to the container element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Returns the button for the given bit, if it exists.
    #[must_use]
    pub fn button(&self, index: BitIndex) -> Option<&HtmlElement> {
        self.buttons
            .get(index.as_usize())
            .and_then(|slot| slot.as_ref())
    }

    /// Sets the spacing between items: `padding-right` on the container and
    /// `padding-left` on every button, current and future.
    pub fn set_spacing(&mut self, spacing: &str) {
        let _ = self
            .container
            .style()
            .set_property("padding-right", spacing);
        for el in self.buttons.iter().flatten() {
            let _ = el.style().set_property("padding-left", spacing);
        }
        self.spacing = Some(spacing.into());
    }

    /// Stores a button at the given bit slot, growing the vec if needed.
    fn put_button(&mut self, index: BitIndex, el: HtmlElement) {
        let slot = index.as_usize();
        if self.buttons.len() <= slot {
            self.buttons.resize_with(slot + 1, || None);
        }
        self.buttons[slot] = Some(el);
    }

    fn create_button(&self, index: BitIndex) -> Option<HtmlElement> {
        let doc = self.container.owner_document()?;
        let el: HtmlElement = doc.create_element("button").ok()?.unchecked_into();
        let label = index.get().to_string();
        el.set_text_content(Some(&label));
        let _ = el.set_attribute(BIT_ATTR, &label);
        let _ = el.set_attribute("type", "button");
        if let Some(spacing) = &self.spacing {
            let _ = el.style().set_property("padding-left", spacing);
        }
        Some(el)
    }

    fn paint(&self, el: &HtmlElement, on: bool) {
        let _ = el
            .style()
            .set_property("background", self.style.background(on));
        let _ = el.set_attribute(TOGGLED_ATTR, if on { "true" } else { "false" });
    }
}

impl Presenter for DomPresenter {
    /// Applies incremental changes from a [`RulerChanges`] to the DOM.
    fn apply(&mut self, ruler: &BitRuler, changes: &RulerChanges) {
        // 1. Additions, already in render order
        for &index in &changes.added {
            let Some(el) = self.create_button(index) else {
                continue;
            };
            self.paint(&el, ruler.is_toggled(index.get()));
            let _ = self.container.append_child(&el);
            self.put_button(index, el);
        }

        // 2. Toggles
        for &index in &changes.toggled {
            if let Some(el) = self.button(index) {
                self.paint(el, ruler.is_toggled(index.get()));
            }
        }

        // 3. Reorder
        if changes.reordered {
            for item in ruler.items_in_render_order() {
                if let Some(el) = self.button(item.index()) {
                    // DOM re-append moves an existing child, reordering it.
                    let _ = self.container.append_child(el);
                }
            }
        }

        // 4. Mask text
        if changes.mask_changed
            && let Some(text) = &self.mask_text
        {
            text.set_text_content(Some(&ruler.render()));
        }
    }
}
