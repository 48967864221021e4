// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use bitruler_core::trace::{
    PlaybackEvent, RejectedToggleEvent, RulerBuiltEvent, ToggleEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    lines: u64,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer, lines: 0 }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Returns the number of lines written so far.
    #[must_use]
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, event: &dyn std::fmt::Display) {
        if writeln!(self.writer, "{event}").is_ok() {
            self.lines += 1;
        }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_ruler_built(&mut self, e: &RulerBuiltEvent) {
        self.line(e);
    }

    fn on_toggle(&mut self, e: &ToggleEvent) {
        self.line(e);
    }

    fn on_rejected_toggle(&mut self, e: &RejectedToggleEvent) {
        self.line(e);
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        self.line(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitruler_core::bits::{BitIndex, Bitmask};
    use bitruler_core::id::{PlayerId, RulerId};
    use bitruler_core::player::PlayDecision;
    use bitruler_core::ruler::RenderOrder;

    #[test]
    fn pretty_print_toggle() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_toggle(&ToggleEvent {
            ruler: RulerId(0),
            index: BitIndex::new(3).unwrap(),
            on: true,
            mask: Bitmask(0x8),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[toggle] ruler=0 index=3 on mask=0x8\n");
    }

    #[test]
    fn pretty_print_counts_lines() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_ruler_built(&RulerBuiltEvent {
            ruler: RulerId(1),
            requested: -3,
            item_count: 0,
            order: RenderOrder::Ascending,
        });
        sink.on_rejected_toggle(&RejectedToggleEvent {
            ruler: RulerId(1),
            index: 0,
            item_count: 0,
        });
        sink.on_playback(&PlaybackEvent {
            source: PlayerId(1),
            decision: PlayDecision::Played,
        });
        assert_eq!(sink.lines(), 3);
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(
            output.contains("[built] ruler=1 items=0 order=ascending requested=-3"),
            "got: {output}"
        );
        assert!(output.contains("[rejected]"), "got: {output}");
        assert!(output.ends_with("[playback] player=1 played\n"), "got: {output}");
    }
}
