// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox-gated media playback.
//!
//! [`play_if_checked`] starts a [`Playable`] only when the triggering input is
//! a checkbox that is currently checked. Any other input (a checked radio
//! button, an unchecked checkbox, a text field) leaves the media untouched.

use crate::backend::Playable;
use crate::id::PlayerId;
use crate::trace::{PlaybackEvent, Tracer};

/// The `type` attribute value that qualifies an input for playback.
pub const CHECKBOX: &str = "checkbox";

/// A snapshot of the input that requested playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputSnapshot<'a> {
    /// The input's `type` attribute (e.g. `"checkbox"`, `"radio"`).
    pub kind: &'a str,
    /// Whether the input is currently checked.
    pub checked: bool,
}

impl<'a> InputSnapshot<'a> {
    /// Creates a snapshot from an input's type and checked state.
    #[must_use]
    pub const fn new(kind: &'a str, checked: bool) -> Self {
        Self { kind, checked }
    }

    /// A checkbox in the given state.
    #[must_use]
    pub const fn checkbox(checked: bool) -> Self {
        Self::new(CHECKBOX, checked)
    }
}

/// What [`play_if_checked`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayDecision {
    /// Playback was started.
    Played,
    /// The input was a checkbox but not checked.
    NotChecked,
    /// The input was not a checkbox.
    NotCheckbox,
}

impl PlayDecision {
    /// Decides without side effects.
    #[must_use]
    pub fn for_input(input: &InputSnapshot<'_>) -> Self {
        if input.kind != CHECKBOX {
            Self::NotCheckbox
        } else if input.checked {
            Self::Played
        } else {
            Self::NotChecked
        }
    }

    /// Returns `true` for [`Played`](Self::Played).
    #[must_use]
    pub const fn played(self) -> bool {
        matches!(self, Self::Played)
    }
}

/// Returns `true` if `input` should start playback.
#[must_use]
pub fn should_play(input: &InputSnapshot<'_>) -> bool {
    PlayDecision::for_input(input).played()
}

/// Plays `media` if `input` is a checked checkbox.
pub fn play_if_checked(media: &mut dyn Playable, input: InputSnapshot<'_>) -> PlayDecision {
    let decision = PlayDecision::for_input(&input);
    if decision.played() {
        media.play();
    }
    decision
}

/// Like [`play_if_checked`], reporting the decision to `tracer`.
///
/// `source` labels the event with the media control that asked for playback.
pub fn play_if_checked_traced(
    media: &mut dyn Playable,
    input: InputSnapshot<'_>,
    source: PlayerId,
    tracer: &mut Tracer<'_>,
) -> PlayDecision {
    let decision = play_if_checked(media, input);
    tracer.playback(&PlaybackEvent { source, decision });
    decision
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingMedia {
        plays: u32,
    }

    impl Playable for CountingMedia {
        fn play(&mut self) {
            self.plays += 1;
        }
    }

    #[test]
    fn checked_checkbox_plays() {
        let mut media = CountingMedia::default();
        let d = play_if_checked(&mut media, InputSnapshot::checkbox(true));
        assert_eq!(d, PlayDecision::Played);
        assert_eq!(media.plays, 1);
    }

    #[test]
    fn unchecked_checkbox_does_not_play() {
        let mut media = CountingMedia::default();
        let d = play_if_checked(&mut media, InputSnapshot::checkbox(false));
        assert_eq!(d, PlayDecision::NotChecked);
        assert_eq!(media.plays, 0);
    }

    #[test]
    fn checked_radio_does_not_play() {
        let mut media = CountingMedia::default();
        let d = play_if_checked(&mut media, InputSnapshot::new("radio", true));
        assert_eq!(d, PlayDecision::NotCheckbox);
        assert_eq!(media.plays, 0);
    }

    #[test]
    fn type_match_is_exact() {
        assert!(!should_play(&InputSnapshot::new("Checkbox", true)));
        assert!(!should_play(&InputSnapshot::new("", true)));
        assert!(should_play(&InputSnapshot::new("checkbox", true)));
    }

    #[test]
    fn every_invocation_is_independent() {
        let mut media = CountingMedia::default();
        for _ in 0..3 {
            play_if_checked(&mut media, InputSnapshot::checkbox(true));
        }
        play_if_checked(&mut media, InputSnapshot::checkbox(false));
        assert_eq!(media.plays, 3);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn traced_playback_reports_decision() {
        use crate::trace::TraceSink;
        use alloc::vec::Vec;

        struct Decisions(Vec<(PlayerId, PlayDecision)>);
        impl TraceSink for Decisions {
            fn on_playback(&mut self, e: &PlaybackEvent) {
                self.0.push((e.source, e.decision));
            }
        }

        let mut sink = Decisions(Vec::new());
        let mut tracer = Tracer::new(&mut sink);
        let mut media = CountingMedia::default();
        let checkbox = InputSnapshot::checkbox(true);
        let radio = InputSnapshot::new("radio", true);
        play_if_checked_traced(&mut media, checkbox, PlayerId(4), &mut tracer);
        play_if_checked_traced(&mut media, radio, PlayerId(5), &mut tracer);
        drop(tracer);
        assert_eq!(
            sink.0,
            [
                (PlayerId(4), PlayDecision::Played),
                (PlayerId(5), PlayDecision::NotCheckbox),
            ]
        );
    }
}
