// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler and player identification.
//!
//! [`RulerId`] and [`PlayerId`] are lightweight labels attached to trace events
//! so that a page with several rulers and media controls can tell them apart.
//! Callers assign these; core treats them as opaque. The two id spaces are
//! independent.

use core::fmt;

/// Identifies one ruler instance in diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RulerId(pub u32);

impl fmt::Debug for RulerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RulerId({})", self.0)
    }
}

/// Identifies one conditional media control in diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PlayerId(pub u32);

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}
