// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler configuration read from `data-*` attributes.
//!
//! A ruler host element looks like:
//!
//! ```html
//! <div class="ruler" data-items="16" data-order="descending"
//!      data-mask-target="rulerBitmaskText" data-spacing="4px"></div>
//! ```
//!
//! Every attribute is optional. Missing or malformed values fall back to the
//! defaults rather than failing.

use alloc::string::{String, ToString as _};

use bitruler_core::ruler::{ItemCount, RenderOrder};
use web_sys::Element;

/// Element id the mask text is written to when `data-mask-target` is absent.
pub const DEFAULT_MASK_TARGET: &str = "rulerBitmaskText";

/// CSS selector matching ruler host elements.
pub const RULER_SELECTOR: &str = ".ruler[data-items]";

/// Per-ruler settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulerConfig {
    /// Number of bit items.
    pub item_count: ItemCount,
    /// Visual order of the items.
    pub order: RenderOrder,
    /// Id of the element that shows the mask text.
    pub mask_target: String,
    /// Optional CSS length used for item spacing.
    pub spacing: Option<String>,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            item_count: ItemCount::ZERO,
            order: RenderOrder::default(),
            mask_target: DEFAULT_MASK_TARGET.to_string(),
            spacing: None,
        }
    }
}

impl RulerConfig {
    /// Builds a config from raw attribute values.
    #[must_use]
    pub fn from_attrs(
        items: Option<&str>,
        order: Option<&str>,
        mask_target: Option<&str>,
        spacing: Option<&str>,
    ) -> Self {
        let non_blank = |v: &&str| !v.trim().is_empty();
        Self {
            item_count: items.map_or(ItemCount::ZERO, ItemCount::from_attr),
            order: order.and_then(RenderOrder::from_attr).unwrap_or_default(),
            mask_target: mask_target
                .filter(non_blank)
                .map_or_else(|| DEFAULT_MASK_TARGET.to_string(), |t| t.trim().to_string()),
            spacing: spacing.filter(non_blank).map(|s| s.trim().to_string()),
        }
    }

    /// Reads the config from a ruler host element's attributes.
    #[must_use]
    pub fn from_element(el: &Element) -> Self {
        Self::from_attrs(
            el.get_attribute("data-items").as_deref(),
            el.get_attribute("data-order").as_deref(),
            el.get_attribute("data-mask-target").as_deref(),
            el.get_attribute("data-spacing").as_deref(),
        )
    }
}

/// Colors for the two item states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulerStyle {
    /// Background of a toggled-on item.
    pub on: String,
    /// Background of a toggled-off item.
    pub off: String,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            on: "tan".to_string(),
            off: "lightYellow".to_string(),
        }
    }
}

impl RulerStyle {
    /// Returns the background for an item in the given state.
    #[must_use]
    pub fn background(&self, on: bool) -> &str {
        if on { &self.on } else { &self.off }
    }
}
