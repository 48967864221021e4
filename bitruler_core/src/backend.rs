// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for presentation surfaces and media.
//!
//! Bitruler splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Presenter** — Implements [`Presenter`] to mirror a [`BitRuler`] onto a
//!   surface (e.g. DOM `<button>` elements and a text node).
//!
//! - **Event source** — Delivers "item activated" events carrying a bit index
//!   to [`BitRuler::toggle`]. Registration is per ruler: each ruler only hears
//!   about its own items. This is backend-specific and not abstracted by a
//!   trait because listener setup differs fundamentally across platforms.
//!
//! - **Media** — Implements [`Playable`] for whatever handle the platform uses
//!   to start playback.
//!
//! # Crate boundaries
//!
//! `bitruler_core` owns the data model and this contract module. Backend
//! crates depend on `bitruler_core` and provide platform glue. Application
//! code depends on both and wires them together.

use crate::ruler::{BitRuler, RulerChanges};

/// Applies pending ruler changes to a presentation surface.
///
/// Both DOM-based and in-memory presenters implement this trait, enabling
/// generic event handlers and test doubles.
///
/// # Event handler pseudocode
///
/// ```rust,ignore
/// fn on_item_activated(index: u32) {
///     if ruler.toggle(index).is_ok() {
///         let changes = ruler.take_changes();
///         presenter.apply(&ruler, &changes);
///     }
/// }
/// ```
///
/// Implementations should handle the fields of [`RulerChanges`] in this
/// order: `added`, `toggled`, `reordered`, then `mask_changed`. Item state is
/// read from `ruler`, not from the change list.
pub trait Presenter {
    /// Applies the given [`RulerChanges`] to the backing surface, reading
    /// current item and mask state from `ruler` as needed.
    fn apply(&mut self, ruler: &BitRuler, changes: &RulerChanges);
}

/// Drains `ruler`'s pending changes into `presenter`.
///
/// Returns `false` without calling the presenter if nothing was pending.
pub fn present(ruler: &mut BitRuler, presenter: &mut dyn Presenter) -> bool {
    if !ruler.has_changes() {
        return false;
    }
    let changes = ruler.take_changes();
    presenter.apply(ruler, &changes);
    true
}

/// Something that can start media playback.
///
/// Playback completion (buffering, decoding) is the platform's concern; the
/// caller never observes it.
pub trait Playable {
    /// Starts playback.
    fn play(&mut self);
}
