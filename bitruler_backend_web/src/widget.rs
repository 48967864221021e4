// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click wiring for a single ruler.
//!
//! [`RulerWidget`] owns one [`BitRuler`], the [`DomPresenter`] that mirrors
//! it, and one `click` listener per item button. Listeners are registered on
//! the ruler's own buttons only, so several rulers on a page never see each
//! other's clicks. Dropping the widget unregisters every listener.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use bitruler_core::backend::present;
use bitruler_core::bits::{BitIndex, Bitmask};
use bitruler_core::id::RulerId;
use bitruler_core::ruler::{BitRuler, RenderOrder, ToggleError};
use bitruler_core::trace::{TraceSink, Tracer};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement};

use crate::config::{RulerConfig, RulerStyle};
use crate::presenter::DomPresenter;

type ClickClosure = Closure<dyn FnMut(Event)>;

struct WidgetState {
    ruler: BitRuler,
    presenter: DomPresenter,
    sink: Option<Box<dyn TraceSink>>,
}

impl WidgetState {
    fn toggle(&mut self, index: u32) -> Result<Bitmask, ToggleError> {
        let Self {
            ruler,
            presenter,
            sink,
        } = self;
        let mask = ruler.toggle_traced(index, &mut tracer_for(sink))?;
        present(ruler, presenter);
        Ok(mask)
    }
}

fn tracer_for(sink: &mut Option<Box<dyn TraceSink>>) -> Tracer<'_> {
    match sink {
        Some(sink) => Tracer::new(&mut **sink),
        None => Tracer::none(),
    }
}

/// A mounted ruler with its own click listeners.
pub struct RulerWidget {
    state: Rc<RefCell<WidgetState>>,
    listeners: Vec<(HtmlElement, ClickClosure)>,
}

impl core::fmt::Debug for RulerWidget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("RulerWidget")
            .field("id", &state.ruler.id())
            .field("mask", &state.ruler.mask())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RulerWidget {
    /// Builds a ruler inside `container` and registers its click listeners.
    ///
    /// Existing children of `container` are removed first. The mask text goes
    /// to the element whose id is `config.mask_target`; if the page has no
    /// such element the ruler still works, it just shows no text.
    pub fn mount(
        container: HtmlElement,
        config: &RulerConfig,
        style: RulerStyle,
        id: RulerId,
        mut sink: Option<Box<dyn TraceSink>>,
    ) -> Result<Self, JsValue> {
        let doc = container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("ruler container has no owner document"))?;
        container.set_inner_html("");

        let mask_text = doc
            .get_element_by_id(&config.mask_target)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let mut presenter = DomPresenter::new(container, mask_text, style);
        if let Some(spacing) = &config.spacing {
            presenter.set_spacing(spacing);
        }

        let mut ruler =
            BitRuler::build_traced(id, config.item_count, config.order, &mut tracer_for(&mut sink));
        present(&mut ruler, &mut presenter);

        let state = Rc::new(RefCell::new(WidgetState {
            ruler,
            presenter,
            sink,
        }));
        let mut widget = Self {
            state,
            listeners: Vec::new(),
        };
        widget.bind_items()?;
        Ok(widget)
    }

    fn bind_items(&mut self) -> Result<(), JsValue> {
        let buttons: Vec<(BitIndex, HtmlElement)> = {
            let s = self.state.borrow();
            s.ruler
                .items()
                .iter()
                .filter_map(|item| {
                    let el = s.presenter.button(item.index())?;
                    Some((item.index(), el.clone()))
                })
                .collect()
        };

        for (index, el) in buttons {
            let state = Rc::clone(&self.state);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                let _ = state.borrow_mut().toggle(index.get());
            }) as Box<dyn FnMut(Event)>);
            el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            self.listeners.push((el, closure));
        }
        Ok(())
    }

    /// Returns the current mask.
    #[must_use]
    pub fn mask(&self) -> Bitmask {
        self.state.borrow().ruler.mask()
    }

    /// Returns the rendered mask text.
    #[must_use]
    pub fn render(&self) -> String {
        self.state.borrow().ruler.render()
    }

    /// Toggles bit `index` as if its button had been clicked.
    pub fn toggle(&self, index: u32) -> Result<Bitmask, ToggleError> {
        self.state.borrow_mut().toggle(index)
    }

    /// Turns every item off.
    pub fn clear(&self) {
        let mut s = self.state.borrow_mut();
        let WidgetState {
            ruler, presenter, ..
        } = &mut *s;
        ruler.clear();
        present(ruler, presenter);
    }

    /// Switches the render order and re-lays out the buttons.
    pub fn set_order(&self, order: RenderOrder) {
        let mut s = self.state.borrow_mut();
        let WidgetState {
            ruler, presenter, ..
        } = &mut *s;
        ruler.set_order(order);
        present(ruler, presenter);
    }

    /// Changes the spacing between items.
    pub fn set_spacing(&self, spacing: &str) {
        self.state.borrow_mut().presenter.set_spacing(spacing);
    }
}

impl Drop for RulerWidget {
    fn drop(&mut self) {
        for (el, closure) in self.listeners.drain(..) {
            let _ =
                el.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}
