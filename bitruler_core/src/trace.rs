// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for ruler and playback events.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! `*_traced` operations call. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use core::fmt;

use crate::bits::{BitIndex, Bitmask};
use crate::id::{PlayerId, RulerId};
use crate::player::PlayDecision;
use crate::ruler::RenderOrder;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a ruler is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulerBuiltEvent {
    /// Which ruler.
    pub ruler: RulerId,
    /// The item count that was asked for, before fallback or clamping.
    pub requested: i64,
    /// The item count the ruler was built with.
    pub item_count: u32,
    /// Initial render order.
    pub order: RenderOrder,
}

impl RulerBuiltEvent {
    /// Returns `true` if the ruler did not get the count it asked for.
    #[must_use]
    pub fn adjusted(&self) -> bool {
        self.requested != i64::from(self.item_count)
    }
}

/// Emitted after an item is toggled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleEvent {
    /// Which ruler.
    pub ruler: RulerId,
    /// The bit that was flipped.
    pub index: BitIndex,
    /// The bit's new state.
    pub on: bool,
    /// The mask after the toggle.
    pub mask: Bitmask,
}

/// Emitted when a toggle is rejected because the index is out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RejectedToggleEvent {
    /// Which ruler.
    pub ruler: RulerId,
    /// The index that was asked for.
    pub index: u32,
    /// The ruler's item count.
    pub item_count: u32,
}

/// Emitted after a playback request is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackEvent {
    /// Label of the control that asked for playback.
    pub source: PlayerId,
    /// What happened.
    pub decision: PlayDecision,
}

// ---------------------------------------------------------------------------
// One-line rendering
// ---------------------------------------------------------------------------

/// Returns a short label for a [`RenderOrder`].
#[must_use]
pub const fn order_name(order: RenderOrder) -> &'static str {
    match order {
        RenderOrder::Descending => "descending",
        RenderOrder::Ascending => "ascending",
    }
}

/// Returns a short label for a [`PlayDecision`].
#[must_use]
pub const fn decision_name(decision: PlayDecision) -> &'static str {
    match decision {
        PlayDecision::Played => "played",
        PlayDecision::NotChecked => "unchecked",
        PlayDecision::NotCheckbox => "not-checkbox",
    }
}

impl fmt::Display for RulerBuiltEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[built] ruler={} items={} order={}",
            self.ruler.0,
            self.item_count,
            order_name(self.order),
        )?;
        if self.adjusted() {
            write!(f, " requested={}", self.requested)?;
        }
        Ok(())
    }
}

impl fmt::Display for ToggleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[toggle] ruler={} index={} {} mask={}",
            self.ruler.0,
            self.index,
            if self.on { "on" } else { "off" },
            self.mask,
        )
    }
}

impl fmt::Display for RejectedToggleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[rejected] ruler={} index={} items={}",
            self.ruler.0, self.index, self.item_count,
        )
    }
}

impl fmt::Display for PlaybackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[playback] player={} {}",
            self.source.0,
            decision_name(self.decision),
        )
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a ruler is constructed.
    fn on_ruler_built(&mut self, e: &RulerBuiltEvent) {
        _ = e;
    }

    /// Called after an item is toggled.
    fn on_toggle(&mut self, e: &ToggleEvent) {
        _ = e;
    }

    /// Called when a toggle is rejected.
    fn on_rejected_toggle(&mut self, e: &RejectedToggleEvent) {
        _ = e;
    }

    /// Called after a playback request is decided.
    fn on_playback(&mut self, e: &PlaybackEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`RulerBuiltEvent`].
    #[inline]
    pub fn ruler_built(&mut self, e: &RulerBuiltEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_ruler_built(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ToggleEvent`].
    #[inline]
    pub fn toggle(&mut self, e: &ToggleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_toggle(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RejectedToggleEvent`].
    #[inline]
    pub fn rejected_toggle(&mut self, e: &RejectedToggleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rejected_toggle(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PlaybackEvent`].
    #[inline]
    pub fn playback(&mut self, e: &PlaybackEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_playback(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_toggle() -> ToggleEvent {
        ToggleEvent {
            ruler: RulerId(1),
            index: BitIndex::MAX,
            on: true,
            mask: Bitmask(0x8000_0000),
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_toggle(&sample_toggle());
        sink.on_playback(&PlaybackEvent {
            source: PlayerId(0),
            decision: PlayDecision::NotChecked,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.toggle(&sample_toggle());
        tracer.rejected_toggle(&RejectedToggleEvent {
            ruler: RulerId(0),
            index: 40,
            item_count: 8,
        });
    }

    #[test]
    fn built_event_reports_adjustment() {
        let mut e = RulerBuiltEvent {
            ruler: RulerId(0),
            requested: 8,
            item_count: 8,
            order: RenderOrder::Descending,
        };
        assert!(!e.adjusted());
        e.requested = -3;
        e.item_count = 0;
        assert!(e.adjusted());
    }

    #[test]
    fn events_render_one_line() {
        use alloc::string::ToString as _;

        assert_eq!(
            sample_toggle().to_string(),
            "[toggle] ruler=1 index=31 on mask=0x80000000"
        );
        let built = RulerBuiltEvent {
            ruler: RulerId(2),
            requested: 40,
            item_count: 32,
            order: RenderOrder::Descending,
        };
        assert_eq!(
            built.to_string(),
            "[built] ruler=2 items=32 order=descending requested=40"
        );
        let playback = PlaybackEvent {
            source: PlayerId(0),
            decision: PlayDecision::NotCheckbox,
        };
        assert_eq!(playback.to_string(), "[playback] player=0 not-checkbox");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            masks: Vec<u32>,
        }
        impl TraceSink for RecordingSink {
            fn on_toggle(&mut self, e: &ToggleEvent) {
                self.masks.push(e.mask.bits());
            }
        }

        let mut sink = RecordingSink { masks: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.toggle(&sample_toggle());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.masks, &[0x8000_0000]);
    }
}
