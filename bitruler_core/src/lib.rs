// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core model for a clickable bit ruler and checkbox-gated playback.
//!
//! `bitruler_core` holds the platform-independent pieces of two small UI
//! components. It is `no_std` compatible (with `alloc`) and never touches a
//! presentation surface directly.
//!
//! # Architecture
//!
//! ```text
//!   Backend (event source)
//!       │ item activated (index)
//!       ▼
//!   BitRuler::toggle() ──► RulerChanges ──► Presenter::apply()
//!
//!   Backend (input change)
//!       │ InputSnapshot
//!       ▼
//!   play_if_checked() ──► Playable::play()
//! ```
//!
//! **[`bits`]** — [`BitIndex`](bits::BitIndex) and the unsigned
//! [`Bitmask`](bits::Bitmask), rendered as `0x`-prefixed lowercase hex.
//!
//! **[`ruler`]** — [`BitRuler`](ruler::BitRuler): one item per bit, the mask
//! derived from them, and pending [`RulerChanges`](ruler::RulerChanges).
//!
//! **[`player`]** — [`play_if_checked`](player::play_if_checked) and its pure
//! predicate.
//!
//! **[`backend`]** — The [`Presenter`](backend::Presenter) and
//! [`Playable`](backend::Playable) traits that platform backends implement.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types, with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod bits;
pub mod id;
pub mod player;
pub mod ruler;
pub mod trace;
