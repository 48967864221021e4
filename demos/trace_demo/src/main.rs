// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted ruler session that exercises the tracing and diagnostics pipeline.
//!
//! Builds a ruler, replays a list of commands against it while a text
//! presenter redraws the row after every change, records events to both a
//! [`PrettyPrintSink`](bitruler_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](bitruler_debug::recorder::RecorderSink), then exports a
//! Chrome trace JSON file.
//!
//! Usage: `trace_demo [ITEMS] [COMMAND...]` where each command is a bit index
//! to toggle, `clear`, `asc`, `desc`, `play` (checked checkbox) or `skip`
//! (unchecked checkbox).

use std::fs::File;
use std::io::{self, BufWriter, Write};

use bitruler_core::backend::{Playable, Presenter, present};
use bitruler_core::id::{PlayerId, RulerId};
use bitruler_core::player::{InputSnapshot, play_if_checked_traced};
use bitruler_core::ruler::{BitRuler, ItemCount, RenderOrder, RulerChanges};
use bitruler_core::trace::{
    PlaybackEvent, RejectedToggleEvent, RulerBuiltEvent, ToggleEvent, TraceSink, Tracer,
};

use bitruler_debug::pretty::PrettyPrintSink;
use bitruler_debug::recorder::RecorderSink;

const DEFAULT_ITEMS: &str = "8";
const DEFAULT_SCRIPT: &[&str] = &["0", "2", "7", "2", "9", "asc", "play", "clear", "desc", "skip"];

/// Fans every event out to a pretty printer and a recorder.
struct Tee {
    pretty: PrettyPrintSink,
    recorder: RecorderSink,
}

impl TraceSink for Tee {
    fn on_ruler_built(&mut self, e: &RulerBuiltEvent) {
        self.pretty.on_ruler_built(e);
        self.recorder.on_ruler_built(e);
    }

    fn on_toggle(&mut self, e: &ToggleEvent) {
        self.pretty.on_toggle(e);
        self.recorder.on_toggle(e);
    }

    fn on_rejected_toggle(&mut self, e: &RejectedToggleEvent) {
        self.pretty.on_rejected_toggle(e);
        self.recorder.on_rejected_toggle(e);
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        self.pretty.on_playback(e);
        self.recorder.on_playback(e);
    }
}

/// Draws the ruler as `[7][6]...[0]  0x..`, toggled items in brackets of `#`.
struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn apply(&mut self, ruler: &BitRuler, changes: &RulerChanges) {
        let row: String = ruler
            .items_in_render_order()
            .map(|item| {
                if item.toggled() {
                    format!("#{}#", item.label())
                } else {
                    format!("[{}]", item.label())
                }
            })
            .collect();
        let _ = writeln!(
            self.out,
            "  {row}  {}{}",
            ruler.render(),
            if changes.reordered { "  (reordered)" } else { "" },
        );
    }
}

/// Stand-in for an audio element.
struct Chime {
    plays: u32,
}

impl Playable for Chime {
    fn play(&mut self) {
        self.plays += 1;
        println!("  *chime*");
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (items, script): (&str, Vec<&str>) = match args.split_first() {
        Some((items, rest)) if !rest.is_empty() => {
            (items.as_str(), rest.iter().map(String::as_str).collect())
        }
        Some((items, _)) => (items.as_str(), DEFAULT_SCRIPT.to_vec()),
        None => (DEFAULT_ITEMS, DEFAULT_SCRIPT.to_vec()),
    };

    // -- sinks -------------------------------------------------------------
    let mut tee = Tee {
        pretty: PrettyPrintSink::new(Box::new(io::stdout())),
        recorder: RecorderSink::new(),
    };
    let mut presenter = TextPresenter { out: io::stdout() };
    let mut chime = Chime { plays: 0 };

    {
        let mut tracer = Tracer::new(&mut tee);
        let id = RulerId(0);
        let mut ruler = BitRuler::build_traced(
            id,
            ItemCount::from_attr(items),
            RenderOrder::Descending,
            &mut tracer,
        );
        present(&mut ruler, &mut presenter);

        for command in script {
            match command {
                "clear" => ruler.clear(),
                "asc" => ruler.set_order(RenderOrder::Ascending),
                "desc" => ruler.set_order(RenderOrder::Descending),
                "play" | "skip" => {
                    let input = InputSnapshot::checkbox(command == "play");
                    play_if_checked_traced(&mut chime, input, PlayerId(0), &mut tracer);
                }
                other => match other.parse::<u32>() {
                    // Rejections are reported by the tracer.
                    Ok(index) => {
                        let _ = ruler.toggle_traced(index, &mut tracer);
                    }
                    Err(_) => eprintln!("unknown command {other:?}"),
                },
            }
            present(&mut ruler, &mut presenter);
        }
    }

    // -- export Chrome trace -----------------------------------------------
    let path = "bitruler_trace.json";
    let mut writer = BufWriter::new(File::create(path)?);
    bitruler_debug::chrome::export(tee.recorder.as_bytes(), &mut writer)?;
    writer.flush()?;

    println!(
        "Wrote {path} ({} trace lines, {} chimes)",
        tee.pretty.lines(),
        chime.plays
    );
    Ok(())
}
