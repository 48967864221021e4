// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records, one tag byte followed by
//! the event fields. [`decode`] reads them back as an iterator of
//! [`RecordedEvent`]; a truncated record or unknown tag ends the iteration.

use bitruler_core::bits::{BitIndex, Bitmask};
use bitruler_core::id::{PlayerId, RulerId};
use bitruler_core::player::PlayDecision;
use bitruler_core::ruler::RenderOrder;
use bitruler_core::trace::{
    PlaybackEvent, RejectedToggleEvent, RulerBuiltEvent, ToggleEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_RULER_BUILT: u8 = 1;
const TAG_TOGGLE: u8 = 2;
const TAG_REJECTED_TOGGLE: u8 = 3;
const TAG_PLAYBACK: u8 = 4;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_order(&mut self, o: RenderOrder) {
        self.write_u8(match o {
            RenderOrder::Descending => 0,
            RenderOrder::Ascending => 1,
        });
    }

    fn write_decision(&mut self, d: PlayDecision) {
        self.write_u8(match d {
            PlayDecision::Played => 0,
            PlayDecision::NotChecked => 1,
            PlayDecision::NotCheckbox => 2,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_ruler_built(&mut self, e: &RulerBuiltEvent) {
        self.write_u8(TAG_RULER_BUILT);
        self.write_u32(e.ruler.0);
        self.write_i64(e.requested);
        self.write_u32(e.item_count);
        self.write_order(e.order);
    }

    fn on_toggle(&mut self, e: &ToggleEvent) {
        self.write_u8(TAG_TOGGLE);
        self.write_u32(e.ruler.0);
        #[expect(clippy::cast_possible_truncation, reason = "bit index is < 32")]
        let index = e.index.get() as u8;
        self.write_u8(index);
        self.write_u8(u8::from(e.on));
        self.write_u32(e.mask.bits());
    }

    fn on_rejected_toggle(&mut self, e: &RejectedToggleEvent) {
        self.write_u8(TAG_REJECTED_TOGGLE);
        self.write_u32(e.ruler.0);
        self.write_u32(e.index);
        self.write_u32(e.item_count);
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        self.write_u8(TAG_PLAYBACK);
        self.write_u32(e.source.0);
        self.write_decision(e.decision);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A [`RulerBuiltEvent`].
    RulerBuilt(RulerBuiltEvent),
    /// A [`ToggleEvent`].
    Toggle(ToggleEvent),
    /// A [`RejectedToggleEvent`].
    RejectedToggle(RejectedToggleEvent),
    /// A [`PlaybackEvent`].
    Playback(PlaybackEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?;
        self.pos += N;
        bytes.try_into().ok()
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.read_array::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    fn read_i64(&mut self) -> Option<i64> {
        self.read_array().map(i64::from_le_bytes)
    }

    fn read_order(&mut self) -> Option<RenderOrder> {
        Some(match self.read_u8()? {
            0 => RenderOrder::Descending,
            _ => RenderOrder::Ascending,
        })
    }

    fn read_decision(&mut self) -> Option<PlayDecision> {
        Some(match self.read_u8()? {
            0 => PlayDecision::Played,
            1 => PlayDecision::NotChecked,
            _ => PlayDecision::NotCheckbox,
        })
    }

    fn decode_ruler_built(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::RulerBuilt(RulerBuiltEvent {
            ruler: RulerId(self.read_u32()?),
            requested: self.read_i64()?,
            item_count: self.read_u32()?,
            order: self.read_order()?,
        }))
    }

    fn decode_toggle(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Toggle(ToggleEvent {
            ruler: RulerId(self.read_u32()?),
            index: BitIndex::new(u32::from(self.read_u8()?))?,
            on: self.read_u8()? != 0,
            mask: Bitmask(self.read_u32()?),
        }))
    }

    fn decode_rejected_toggle(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::RejectedToggle(RejectedToggleEvent {
            ruler: RulerId(self.read_u32()?),
            index: self.read_u32()?,
            item_count: self.read_u32()?,
        }))
    }

    fn decode_playback(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Playback(PlaybackEvent {
            source: PlayerId(self.read_u32()?),
            decision: self.read_decision()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_u8()? {
            TAG_RULER_BUILT => self.decode_ruler_built(),
            TAG_TOGGLE => self.decode_toggle(),
            TAG_REJECTED_TOGGLE => self.decode_rejected_toggle(),
            TAG_PLAYBACK => self.decode_playback(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bitruler_core::player::{InputSnapshot, play_if_checked_traced};
    use bitruler_core::ruler::{BitRuler, ItemCount};
    use bitruler_core::trace::Tracer;

    struct Silent;
    impl bitruler_core::backend::Playable for Silent {
        fn play(&mut self) {}
    }

    #[test]
    fn records_a_session() {
        let mut rec = RecorderSink::new();
        {
            let mut tracer = Tracer::new(&mut rec);
            let mut ruler = BitRuler::build_traced(
                RulerId(7),
                ItemCount::from_raw(8),
                RenderOrder::Descending,
                &mut tracer,
            );
            ruler.toggle_traced(31, &mut tracer).unwrap_err();
            ruler.toggle_traced(7, &mut tracer).unwrap();
            play_if_checked_traced(
                &mut Silent,
                InputSnapshot::checkbox(false),
                PlayerId(2),
                &mut tracer,
            );
        }

        let events: Vec<RecordedEvent> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            events[0],
            RecordedEvent::RulerBuilt(RulerBuiltEvent { item_count: 8, requested: 8, .. })
        ));
        assert_eq!(
            events[1],
            RecordedEvent::RejectedToggle(RejectedToggleEvent {
                ruler: RulerId(7),
                index: 31,
                item_count: 8,
            })
        );
        assert_eq!(
            events[2],
            RecordedEvent::Toggle(ToggleEvent {
                ruler: RulerId(7),
                index: BitIndex::new(7).unwrap(),
                on: true,
                mask: Bitmask(0x80),
            })
        );
        assert_eq!(
            events[3],
            RecordedEvent::Playback(PlaybackEvent {
                source: PlayerId(2),
                decision: PlayDecision::NotChecked,
            })
        );
    }

    #[test]
    fn truncated_record_stops_decoding() {
        let mut rec = RecorderSink::new();
        rec.on_playback(&PlaybackEvent {
            source: PlayerId(0),
            decision: PlayDecision::Played,
        });
        rec.on_playback(&PlaybackEvent {
            source: PlayerId(1),
            decision: PlayDecision::Played,
        });
        let bytes = rec.into_bytes();
        let cut = &bytes[..bytes.len() - 1];
        assert_eq!(decode(cut).count(), 1);
    }

    #[test]
    fn unknown_tag_stops_decoding() {
        assert_eq!(decode(&[0xff, 0, 0, 0, 0]).count(), 0);
        assert_eq!(decode(&[]).count(), 0);
    }
}
