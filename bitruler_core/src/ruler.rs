// Copyright 2026 the Bitruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bit ruler widget model.
//!
//! A [`BitRuler`] owns one [`BitItem`] per bit position and the [`Bitmask`]
//! derived from them. Items are stored in index order (`items[i]` is bit `i`)
//! and presented in [`RenderOrder`], most significant bit first by default.
//!
//! Mutations never touch a presentation surface directly. Instead they record
//! [`RulerChanges`], which a [`Presenter`](crate::backend::Presenter) drains
//! via [`BitRuler::take_changes`] and mirrors onto its surface.
//!
//! ```
//! use bitruler_core::ruler::{BitRuler, ItemCount};
//!
//! let mut ruler = BitRuler::new(ItemCount::from_attr("8"));
//! ruler.toggle(0).unwrap();
//! ruler.toggle(2).unwrap();
//! assert_eq!(ruler.render(), "0x5");
//! ```

use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::fmt;

use crate::bits::{BitIndex, Bitmask};
use crate::id::RulerId;
use crate::trace::{RejectedToggleEvent, RulerBuiltEvent, ToggleEvent, Tracer};

// ---------------------------------------------------------------------------
// ItemCount
// ---------------------------------------------------------------------------

/// The number of items a ruler is built with, in `0..=32`.
///
/// Malformed input never fails: anything that is not a positive number
/// becomes an empty ruler, and counts above 32 are clamped because bits at
/// and above 32 cannot be represented in the mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ItemCount {
    count: u8,
    requested: i64,
}

const MAX_ITEMS: u8 = 32;

impl ItemCount {
    /// The largest supported item count.
    pub const MAX: u32 = MAX_ITEMS as u32;

    /// An empty ruler.
    pub const ZERO: Self = Self {
        count: 0,
        requested: 0,
    };

    /// Builds a count from a raw integer, falling back to 0 for values `<= 0`
    /// and clamping to [`MAX`](Self::MAX).
    #[must_use]
    pub const fn from_raw(requested: i64) -> Self {
        let count = if requested <= 0 {
            0
        } else if requested >= MAX_ITEMS as i64 {
            MAX_ITEMS
        } else {
            #[expect(clippy::cast_possible_truncation, reason = "0 < requested < 32")]
            let c = requested as u8;
            c
        };
        Self { count, requested }
    }

    /// Parses an attribute value such as `data-items="16"`.
    ///
    /// Surrounding whitespace is ignored. Accepts signed decimal integers,
    /// unsigned `0x`-prefixed hex, and finite decimal fractions (truncated
    /// toward zero). Values too large to represent saturate and then clamp.
    /// Empty or non-numeric text yields an empty ruler.
    #[must_use]
    pub fn from_attr(attr: &str) -> Self {
        let text = attr.trim();
        if let Some(hex) = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
        {
            if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Self::ZERO;
            }
            let value = hex.bytes().fold(0_i64, |acc, b| {
                let digit = match b {
                    b'0'..=b'9' => b - b'0',
                    b'a'..=b'f' => b - b'a' + 10,
                    _ => b - b'A' + 10,
                };
                acc.saturating_mul(16).saturating_add(i64::from(digit))
            });
            return Self::from_raw(value);
        }
        if let Ok(v) = text.parse::<i64>() {
            return Self::from_raw(v);
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "float-to-int `as` saturates and truncates toward zero"
                )]
                let truncated = v as i64;
                Self::from_raw(truncated)
            }
            _ => Self::ZERO,
        }
    }

    /// Returns the effective item count.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.count as u32
    }

    /// Returns the value that was asked for before fallback or clamping.
    #[inline]
    #[must_use]
    pub const fn requested(self) -> i64 {
        self.requested
    }

    /// Returns `true` if the requested value had to be clamped to
    /// [`MAX`](Self::MAX).
    #[inline]
    #[must_use]
    pub const fn was_clamped(self) -> bool {
        self.requested > MAX_ITEMS as i64
    }
}

// ---------------------------------------------------------------------------
// RenderOrder
// ---------------------------------------------------------------------------

/// The visual order in which a ruler lays out its items.
///
/// Changing the order never changes the mask; bit `i` is always item `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RenderOrder {
    /// Most significant bit first (`n-1 .. 0`).
    #[default]
    Descending,
    /// Least significant bit first (`0 .. n-1`).
    Ascending,
}

impl RenderOrder {
    /// Parses a `data-order` attribute value, case-insensitively.
    ///
    /// Returns `None` for unrecognized text.
    #[must_use]
    pub fn from_attr(attr: &str) -> Option<Self> {
        const ASCENDING: [&str; 3] = ["ascending", "asc", "little"];
        const DESCENDING: [&str; 3] = ["descending", "desc", "big"];
        let text = attr.trim();
        if ASCENDING.iter().any(|a| text.eq_ignore_ascii_case(a)) {
            Some(Self::Ascending)
        } else if DESCENDING.iter().any(|d| text.eq_ignore_ascii_case(d)) {
            Some(Self::Descending)
        } else {
            None
        }
    }

    /// Returns the opposite order.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Descending => Self::Ascending,
            Self::Ascending => Self::Descending,
        }
    }
}

// ---------------------------------------------------------------------------
// Items and errors
// ---------------------------------------------------------------------------

/// One togglable control for a single bit position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitItem {
    index: BitIndex,
    toggled: bool,
}

impl BitItem {
    /// Returns the bit position this item controls.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> BitIndex {
        self.index
    }

    /// Returns `true` if the item is on.
    #[inline]
    #[must_use]
    pub const fn toggled(&self) -> bool {
        self.toggled
    }

    /// Returns the item's label text (its bit position in decimal).
    #[must_use]
    pub fn label(&self) -> String {
        self.index.to_string()
    }
}

/// Errors from [`BitRuler`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleError {
    /// The index does not name an item of this ruler, or cannot be
    /// represented in a 32-bit mask.
    InvalidIndex {
        /// The index that was asked for.
        index: u32,
        /// The ruler's item count.
        item_count: u32,
    },
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { index, item_count } => {
                write!(f, "bit index {index} is out of range for {item_count} items")
            }
        }
    }
}

impl core::error::Error for ToggleError {}

// ---------------------------------------------------------------------------
// RulerChanges
// ---------------------------------------------------------------------------

/// Presentation work accumulated since the last [`BitRuler::take_changes`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RulerChanges {
    /// Items that need a visual control, in render order.
    pub added: Vec<BitIndex>,
    /// Items whose on/off state changed, in the order they were toggled.
    ///
    /// An index toggled twice appears twice; presenters read the final state
    /// from the ruler, so repeats are harmless.
    pub toggled: Vec<BitIndex>,
    /// The rendered mask text needs to be refreshed.
    pub mask_changed: bool,
    /// The render order changed and existing controls must be re-laid out.
    pub reordered: bool,
}

impl RulerChanges {
    /// Returns `true` if there is nothing to present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.toggled.is_empty() && !self.mask_changed && !self.reordered
    }
}

// ---------------------------------------------------------------------------
// BitRuler
// ---------------------------------------------------------------------------

/// A row of togglable bit items and the mask they produce.
///
/// The mask always agrees with the items: bit `i` is set exactly when
/// `items[i]` is toggled on.
#[derive(Clone, Debug)]
pub struct BitRuler {
    id: RulerId,
    items: Vec<BitItem>,
    mask: Bitmask,
    order: RenderOrder,
    pending: RulerChanges,
}

impl BitRuler {
    /// Creates a ruler with `count` untoggled items and an empty mask.
    #[must_use]
    pub fn new(count: ItemCount) -> Self {
        Self::with_order(count, RenderOrder::default())
    }

    /// Creates a ruler laid out in the given order.
    #[must_use]
    pub fn with_order(count: ItemCount, order: RenderOrder) -> Self {
        let items: Vec<BitItem> = (0..count.get())
            .filter_map(BitIndex::new)
            .map(|index| BitItem {
                index,
                toggled: false,
            })
            .collect();
        let mut ruler = Self {
            id: RulerId::default(),
            items,
            mask: Bitmask::EMPTY,
            order,
            pending: RulerChanges::default(),
        };
        ruler.pending.added = ruler.items_in_render_order().map(BitItem::index).collect();
        ruler.pending.mask_changed = true;
        ruler
    }

    /// Creates a ruler from a `data-items` attribute value.
    #[must_use]
    pub fn from_attr(attr: &str) -> Self {
        Self::new(ItemCount::from_attr(attr))
    }

    /// Creates a ruler and reports it to `tracer`.
    #[must_use]
    pub fn build_traced(
        id: RulerId,
        count: ItemCount,
        order: RenderOrder,
        tracer: &mut Tracer<'_>,
    ) -> Self {
        let ruler = Self::with_order(count, order).with_id(id);
        tracer.ruler_built(&RulerBuiltEvent {
            ruler: id,
            requested: count.requested(),
            item_count: ruler.item_count(),
            order,
        });
        ruler
    }

    /// Sets the identifier attached to this ruler's trace events.
    #[must_use]
    pub fn with_id(mut self, id: RulerId) -> Self {
        self.id = id;
        self
    }

    /// Returns the identifier attached to trace events.
    #[inline]
    #[must_use]
    pub fn id(&self) -> RulerId {
        self.id
    }

    /// Returns the number of items.
    #[inline]
    #[must_use]
    pub fn item_count(&self) -> u32 {
        #[expect(clippy::cast_possible_truncation, reason = "at most 32 items")]
        let n = self.items.len() as u32;
        n
    }

    /// Returns the current mask.
    #[inline]
    #[must_use]
    pub fn mask(&self) -> Bitmask {
        self.mask
    }

    /// Returns the items in index order (`items()[i]` is bit `i`).
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[BitItem] {
        &self.items
    }

    /// Returns the item for bit `index`, if this ruler has one.
    #[must_use]
    pub fn item(&self, index: u32) -> Option<&BitItem> {
        self.items.get(BitIndex::new(index)?.as_usize())
    }

    /// Returns `true` if bit `index` is toggled on. Unknown indices are off.
    #[must_use]
    pub fn is_toggled(&self, index: u32) -> bool {
        self.item(index).is_some_and(BitItem::toggled)
    }

    /// Returns the current render order.
    #[inline]
    #[must_use]
    pub fn order(&self) -> RenderOrder {
        self.order
    }

    /// Iterates over the items in visual order.
    pub fn items_in_render_order(&self) -> RenderIter<'_> {
        RenderIter {
            inner: self.items.iter(),
            order: self.order,
        }
    }

    /// Flips bit `index` and returns the new mask.
    ///
    /// Indices outside this ruler's items are rejected without mutation.
    pub fn toggle(&mut self, index: u32) -> Result<Bitmask, ToggleError> {
        self.flip(index).map(|_| self.mask)
    }

    /// Like [`toggle`](Self::toggle), reporting the outcome to `tracer`.
    pub fn toggle_traced(
        &mut self,
        index: u32,
        tracer: &mut Tracer<'_>,
    ) -> Result<Bitmask, ToggleError> {
        match self.flip(index) {
            Ok((bit, on)) => {
                tracer.toggle(&ToggleEvent {
                    ruler: self.id,
                    index: bit,
                    on,
                    mask: self.mask,
                });
                Ok(self.mask)
            }
            Err(err) => {
                tracer.rejected_toggle(&RejectedToggleEvent {
                    ruler: self.id,
                    index,
                    item_count: self.item_count(),
                });
                Err(err)
            }
        }
    }

    /// Flips one item and its mask bit, returning the bit and its new state.
    fn flip(&mut self, index: u32) -> Result<(BitIndex, bool), ToggleError> {
        let invalid = ToggleError::InvalidIndex {
            index,
            item_count: self.item_count(),
        };
        let bit = BitIndex::new(index).ok_or(invalid)?;
        let item = self.items.get_mut(bit.as_usize()).ok_or(invalid)?;
        item.toggled = !item.toggled;
        let on = item.toggled;
        self.mask = self.mask.with_bit(bit, on);
        self.pending.toggled.push(bit);
        self.pending.mask_changed = true;
        Ok((bit, on))
    }

    /// Turns every item off, leaving an empty mask.
    pub fn clear(&mut self) {
        for item in self.items.iter_mut().filter(|item| item.toggled) {
            item.toggled = false;
            self.pending.toggled.push(item.index);
        }
        if !self.mask.is_empty() {
            self.mask = Bitmask::EMPTY;
            self.pending.mask_changed = true;
        }
    }

    /// Switches the render order. The mask is unaffected.
    pub fn set_order(&mut self, order: RenderOrder) {
        if self.order != order {
            self.order = order;
            self.pending.reordered = true;
        }
    }

    /// Renders the mask as `0x`-prefixed lowercase hex.
    #[must_use]
    pub fn render(&self) -> String {
        self.mask.to_string()
    }

    /// Returns `true` if presentation work is pending.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drains pending presentation work.
    pub fn take_changes(&mut self) -> RulerChanges {
        core::mem::take(&mut self.pending)
    }
}

/// Iterator over a ruler's items in [`RenderOrder`].
#[derive(Clone, Debug)]
pub struct RenderIter<'a> {
    inner: core::slice::Iter<'a, BitItem>,
    order: RenderOrder,
}

impl<'a> Iterator for RenderIter<'a> {
    type Item = &'a BitItem;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            RenderOrder::Descending => self.inner.next_back(),
            RenderOrder::Ascending => self.inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RenderIter<'_> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use alloc::vec;

    fn indices(ruler: &BitRuler) -> Vec<u32> {
        ruler
            .items_in_render_order()
            .map(|item| item.index().get())
            .collect()
    }

    #[test]
    fn construct_yields_untoggled_items() {
        for n in 0..=32_i64 {
            let ruler = BitRuler::new(ItemCount::from_raw(n));
            assert_eq!(i64::from(ruler.item_count()), n);
            assert_eq!(ruler.mask(), Bitmask::EMPTY);
            for (i, item) in ruler.items().iter().enumerate() {
                assert_eq!(item.index().as_usize(), i);
                assert!(!item.toggled(), "item {i} of {n} starts toggled");
            }
        }
    }

    #[test]
    fn malformed_counts_give_empty_ruler() {
        assert_eq!(BitRuler::new(ItemCount::from_raw(-3)).item_count(), 0);
        assert_eq!(BitRuler::from_attr("abc").item_count(), 0);
        assert_eq!(BitRuler::from_attr("").item_count(), 0);
        assert_eq!(BitRuler::from_attr("   ").item_count(), 0);
        assert_eq!(BitRuler::from_attr("NaN").item_count(), 0);
        assert_eq!(BitRuler::from_attr("inf").item_count(), 0);
        assert_eq!(BitRuler::from_attr("0xZZ").item_count(), 0);
    }

    #[test]
    fn attr_parsing_follows_number_coercion() {
        assert_eq!(ItemCount::from_attr(" 16 ").get(), 16);
        assert_eq!(ItemCount::from_attr("+4").get(), 4);
        assert_eq!(ItemCount::from_attr("7.9").get(), 7);
        assert_eq!(ItemCount::from_attr("0x10").get(), 16);
        assert_eq!(ItemCount::from_attr("-0.5").get(), 0);
        assert_eq!(ItemCount::from_attr("0x").get(), 0);
        assert_eq!(ItemCount::from_attr("0x+5").get(), 0);
        assert_eq!(ItemCount::from_attr("0x-5").get(), 0);
        assert_eq!(ItemCount::from_attr("99999999999999999999999").get(), 32);
        assert_eq!(ItemCount::from_attr("0xFFFFFFFFFFFFFFFFFFFF").get(), 32);
        assert_eq!(ItemCount::from_attr("0xFFFFFFFFFFFFFFFFFFFF").requested(), i64::MAX);
    }

    #[test]
    fn oversized_count_is_clamped() {
        let count = ItemCount::from_raw(64);
        assert_eq!(count.get(), 32);
        assert_eq!(count.requested(), 64);
        assert!(count.was_clamped());
        assert!(!ItemCount::from_raw(32).was_clamped());
        assert_eq!(BitRuler::from_attr("1000").item_count(), 32);
    }

    #[test]
    fn descending_is_default_order() {
        let ruler = BitRuler::from_attr("4");
        assert_eq!(indices(&ruler), vec![3, 2, 1, 0]);
    }

    #[test]
    fn ascending_order_lists_lsb_first() {
        let ruler = BitRuler::with_order(ItemCount::from_raw(4), RenderOrder::Ascending);
        assert_eq!(indices(&ruler), vec![0, 1, 2, 3]);
        assert_eq!(ruler.items_in_render_order().len(), 4);
    }

    #[test]
    fn toggle_twice_restores_mask() {
        let mut ruler = BitRuler::from_attr("32");
        ruler.toggle(3).unwrap();
        ruler.toggle(17).unwrap();
        let before = ruler.mask();
        for i in 0..32 {
            ruler.toggle(i).unwrap();
            ruler.toggle(i).unwrap();
            assert_eq!(ruler.mask(), before, "bit {i} is not an involution");
        }
    }

    #[test]
    fn toggle_touches_only_its_bit() {
        let mut ruler = BitRuler::from_attr("32");
        ruler.toggle(1).unwrap();
        let before = ruler.mask().bits();
        let after = ruler.toggle(6).unwrap().bits();
        assert_eq!(after ^ before, 1 << 6);
        assert!(ruler.is_toggled(6));
        assert!(ruler.is_toggled(1));
        assert!(!ruler.is_toggled(0));
    }

    #[test]
    fn mask_matches_items() {
        let mut ruler = BitRuler::from_attr("12");
        for i in [0, 3, 3, 7, 11, 5] {
            ruler.toggle(i).unwrap();
        }
        for item in ruler.items() {
            assert_eq!(ruler.mask().is_set(item.index()), item.toggled());
        }
    }

    #[test]
    fn render_examples() {
        let mut ruler = BitRuler::from_attr("32");
        assert_eq!(ruler.render(), "0x0");
        ruler.toggle(0).unwrap();
        ruler.toggle(2).unwrap();
        assert_eq!(ruler.render(), "0x5");
        ruler.clear();
        ruler.toggle(31).unwrap();
        assert_eq!(ruler.render(), "0x80000000");
    }

    #[test]
    fn invalid_index_is_rejected_without_mutation() {
        let mut ruler = BitRuler::from_attr("8");
        ruler.toggle(2).unwrap();
        let _ = ruler.take_changes();

        let err = ruler.toggle(8).unwrap_err();
        assert_eq!(
            err,
            ToggleError::InvalidIndex {
                index: 8,
                item_count: 8
            }
        );
        assert!(ruler.toggle(32).is_err());
        assert!(ruler.toggle(u32::MAX).is_err());
        assert_eq!(ruler.render(), "0x4");
        assert!(!ruler.has_changes());
    }

    #[test]
    fn empty_ruler_rejects_everything() {
        let mut ruler = BitRuler::from_attr("-3");
        assert!(ruler.toggle(0).is_err());
        assert_eq!(ruler.render(), "0x0");
    }

    #[test]
    fn construction_changes_list_every_item() {
        let mut ruler = BitRuler::from_attr("3");
        let changes = ruler.take_changes();
        let added: Vec<u32> = changes.added.iter().map(|i| i.get()).collect();
        assert_eq!(added, vec![2, 1, 0]);
        assert!(changes.mask_changed);
        assert!(changes.toggled.is_empty());
        assert!(!ruler.has_changes());
        assert!(ruler.take_changes().is_empty());
    }

    #[test]
    fn toggle_changes_list_index() {
        let mut ruler = BitRuler::from_attr("8");
        let _ = ruler.take_changes();
        ruler.toggle(5).unwrap();
        let changes = ruler.take_changes();
        assert_eq!(changes.toggled, vec![BitIndex::new(5).unwrap()]);
        assert!(changes.mask_changed);
        assert!(changes.added.is_empty());
    }

    #[test]
    fn clear_reports_each_toggled_index() {
        let mut ruler = BitRuler::from_attr("8");
        ruler.toggle(1).unwrap();
        ruler.toggle(4).unwrap();
        let _ = ruler.take_changes();

        ruler.clear();
        assert_eq!(ruler.mask(), Bitmask::EMPTY);
        let changes = ruler.take_changes();
        let cleared: Vec<u32> = changes.toggled.iter().map(|i| i.get()).collect();
        assert_eq!(cleared, vec![1, 4]);
        assert!(changes.mask_changed);

        ruler.clear();
        assert!(!ruler.has_changes(), "clearing an empty mask is a no-op");
    }

    #[test]
    fn set_order_keeps_mask() {
        let mut ruler = BitRuler::from_attr("4");
        ruler.toggle(3).unwrap();
        let _ = ruler.take_changes();

        ruler.set_order(RenderOrder::Ascending);
        assert_eq!(ruler.render(), "0x8");
        assert_eq!(indices(&ruler), vec![0, 1, 2, 3]);
        let changes = ruler.take_changes();
        assert!(changes.reordered);
        assert!(!changes.mask_changed);

        ruler.set_order(RenderOrder::Ascending);
        assert!(!ruler.has_changes());
    }

    #[test]
    fn render_order_from_attr() {
        assert_eq!(RenderOrder::from_attr("ASC"), Some(RenderOrder::Ascending));
        assert_eq!(RenderOrder::from_attr(" little "), Some(RenderOrder::Ascending));
        assert_eq!(RenderOrder::from_attr("big"), Some(RenderOrder::Descending));
        assert_eq!(RenderOrder::from_attr("sideways"), None);
        assert_eq!(RenderOrder::Ascending.reversed(), RenderOrder::Descending);
    }

    #[test]
    fn item_labels_are_decimal() {
        let ruler = BitRuler::from_attr("12");
        let labels: Vec<String> = ruler
            .items_in_render_order()
            .take(2)
            .map(BitItem::label)
            .collect();
        assert_eq!(labels, vec!["11", "10"]);
    }

    #[test]
    fn toggle_error_display() {
        let err = ToggleError::InvalidIndex {
            index: 40,
            item_count: 8,
        };
        assert_eq!(err.to_string(), "bit index 40 is out of range for 8 items");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn traced_operations_reach_sink() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Counts {
            built: Vec<(u32, i64)>,
            toggles: Vec<(u32, bool)>,
            rejected: Vec<u32>,
        }
        impl TraceSink for Counts {
            fn on_ruler_built(&mut self, e: &RulerBuiltEvent) {
                self.built.push((e.item_count, e.requested));
            }
            fn on_toggle(&mut self, e: &ToggleEvent) {
                self.toggles.push((e.index.get(), e.on));
            }
            fn on_rejected_toggle(&mut self, e: &RejectedToggleEvent) {
                self.rejected.push(e.index);
            }
        }

        let mut sink = Counts::default();
        let mut tracer = Tracer::new(&mut sink);
        let mut ruler = BitRuler::build_traced(
            RulerId(3),
            ItemCount::from_raw(40),
            RenderOrder::Descending,
            &mut tracer,
        );
        ruler.toggle_traced(2, &mut tracer).unwrap();
        ruler.toggle_traced(2, &mut tracer).unwrap();
        assert!(ruler.toggle_traced(33, &mut tracer).is_err());
        drop(tracer);

        assert_eq!(sink.built, vec![(32, 40)]);
        assert_eq!(sink.toggles, vec![(2, true), (2, false)]);
        assert_eq!(sink.rejected, vec![33]);
    }
}
