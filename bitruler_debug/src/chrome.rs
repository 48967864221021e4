// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Ruler events carry no timestamps, so each event is placed at its sequence
//! number (one microsecond apart). Rulers are tracks (`tid`) of process 0 and
//! media players are tracks of process 1, so the two id spaces never share a
//! track.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use bitruler_core::trace::{decision_name, order_name};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
/// Toggles additionally produce a `"C"` (counter) event tracking the mask
/// value per ruler.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for (seq, recorded) in decode(bytes).enumerate() {
        let ts = seq as u64;
        match recorded {
            RecordedEvent::RulerBuilt(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "RulerBuilt",
                    "cat": "Ruler",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.ruler.0,
                    "s": "t",
                    "args": {
                        "item_count": e.item_count,
                        "requested": e.requested,
                        "order": order_name(e.order),
                    }
                }));
            }
            RecordedEvent::Toggle(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Toggle",
                    "cat": "Ruler",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.ruler.0,
                    "s": "t",
                    "args": {
                        "index": e.index.get(),
                        "on": e.on,
                        "mask": e.mask.to_string(),
                    }
                }));
                events.push(json!({
                    "ph": "C",
                    "name": format!("mask[{}]", e.ruler.0),
                    "ts": ts,
                    "pid": 0,
                    "args": {
                        "mask": e.mask.bits(),
                    }
                }));
            }
            RecordedEvent::RejectedToggle(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "RejectedToggle",
                    "cat": "Ruler",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.ruler.0,
                    "s": "t",
                    "args": {
                        "index": e.index,
                        "item_count": e.item_count,
                    }
                }));
            }
            RecordedEvent::Playback(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Playback",
                    "cat": "Player",
                    "ts": ts,
                    "pid": 1,
                    "tid": e.source.0,
                    "s": "t",
                    "args": {
                        "decision": decision_name(e.decision),
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(&mut *writer, &events)?;
    writeln!(writer)?;
    Ok(())
}
