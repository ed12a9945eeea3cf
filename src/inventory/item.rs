//! Item stacks and the value-level rules for combining them
//!
//! A stack with a count of zero is empty no matter what identity it carries;
//! operations normalize such stacks to [`ItemStack::empty`] so that empty
//! slots compare equal.

use crate::error::{TweakError, TweakResult};
use crate::item::{ItemId, ItemRegistry};
use serde::{Deserialize, Serialize};

/// Represents a stack of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item_id: ItemId,
    pub count: u32,
    /// Auxiliary data, part of the stack's identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<serde_json::Value>,
}

impl ItemStack {
    /// The empty stack
    pub fn empty() -> Self {
        Self {
            item_id: ItemId::AIR,
            count: 0,
            tag: None,
        }
    }

    /// Create a new item stack
    pub fn new(item_id: ItemId, count: u32) -> Self {
        Self {
            item_id,
            count,
            tag: None,
        }
        .normalized()
    }

    /// Create a single item
    pub fn single(item_id: ItemId) -> Self {
        Self::new(item_id, 1)
    }

    /// Attach tag data
    pub fn with_tag(mut self, tag: serde_json::Value) -> Self {
        if !self.is_empty() {
            self.tag = Some(tag);
        }
        self
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.item_id == ItemId::AIR
    }

    /// True iff both stacks are non-empty and share identity and tag data
    pub fn is_same_kind(&self, other: &ItemStack) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.item_id == other.item_id
            && self.tag == other.tag
    }

    /// A stack of the same kind with a different count
    pub fn copy_with_count(&self, count: u32) -> ItemStack {
        if self.is_empty() {
            return ItemStack::empty();
        }
        ItemStack {
            item_id: self.item_id,
            count,
            tag: self.tag.clone(),
        }
        .normalized()
    }

    /// Maximum count for this stack's item
    pub fn max_stack_size(&self, items: &ItemRegistry) -> u32 {
        items.max_stack_size(self.item_id)
    }

    /// Check if stack is full
    pub fn is_full(&self, items: &ItemRegistry) -> bool {
        !self.is_empty() && self.count >= self.max_stack_size(items)
    }

    pub fn grow(&mut self, count: u32) {
        self.count = self.count.saturating_add(count);
    }

    pub fn shrink(&mut self, count: u32) {
        self.count = self.count.saturating_sub(count);
        self.normalize();
    }

    /// Split the stack, taking up to the specified count
    pub fn split(&mut self, count: u32) -> ItemStack {
        let taken = count.min(self.count);
        let result = self.copy_with_count(taken);
        self.shrink(taken);
        result
    }

    /// Take the whole stack, leaving this one empty
    pub fn take(&mut self) -> ItemStack {
        std::mem::replace(self, ItemStack::empty())
    }

    /// Replace zero-count stacks with the canonical empty stack
    pub fn normalize(&mut self) {
        if self.is_empty() {
            *self = ItemStack::empty();
        }
    }

    fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

/// Move as much of `src` into `dst` as the stack size allows
///
/// Whatever does not fit stays in `src`. Merging two non-empty stacks of
/// different kinds is a caller error and leaves both untouched.
pub fn merge(dst: &mut ItemStack, src: &mut ItemStack, items: &ItemRegistry) -> TweakResult<()> {
    if src.is_empty() {
        return Ok(());
    }
    if dst.is_empty() {
        let max = src.max_stack_size(items);
        *dst = src.split(max);
        return Ok(());
    }
    if !can_merge(dst, src) {
        return Err(TweakError::IncompatibleStack {
            held: dst.item_id,
            incoming: src.item_id,
        });
    }

    let space = dst.max_stack_size(items).saturating_sub(dst.count);
    let moved = src.split(space);
    dst.grow(moved.count);
    Ok(())
}

/// Insert a stack into a slot list, first-fit
///
/// Partial stacks of the same kind are topped up first, in index order, then
/// empty slots are filled in index order. Slots rejected by `accepts` are
/// skipped. Returns whatever did not fit.
pub fn insert_first_fit(
    slots: &mut [ItemStack],
    stack: ItemStack,
    items: &ItemRegistry,
    accepts: impl Fn(usize, &ItemStack) -> bool,
) -> ItemStack {
    let mut rest = stack;
    if rest.is_empty() {
        return rest;
    }

    for (index, slot) in slots.iter_mut().enumerate() {
        if rest.is_empty() {
            break;
        }
        if slot.is_same_kind(&rest) && !slot.is_full(items) && accepts(index, &rest) {
            let space = slot.max_stack_size(items).saturating_sub(slot.count);
            slot.grow(rest.split(space).count);
        }
    }

    for (index, slot) in slots.iter_mut().enumerate() {
        if rest.is_empty() {
            break;
        }
        if slot.is_empty() && accepts(index, &rest) {
            let max = rest.max_stack_size(items);
            *slot = rest.split(max);
        }
    }

    rest
}

/// Whether `src` could be merged into `dst` at all
pub fn can_merge(dst: &ItemStack, src: &ItemStack) -> bool {
    dst.is_empty() || src.is_empty() || dst.is_same_kind(src)
}

/// Total item count across stacks
pub fn total_quantity<'a>(stacks: impl IntoIterator<Item = &'a ItemStack>) -> u64 {
    stacks
        .into_iter()
        .filter(|stack| !stack.is_empty())
        .map(|stack| stack.count as u64)
        .sum()
}

/// Totals per item kind, in order of first appearance
///
/// Each entry carries a single-item representative of the kind.
pub fn kind_totals<'a>(stacks: impl IntoIterator<Item = &'a ItemStack>) -> Vec<(ItemStack, u64)> {
    let mut totals: Vec<(ItemStack, u64)> = Vec::new();
    for stack in stacks.into_iter().filter(|stack| !stack.is_empty()) {
        match totals.iter_mut().find(|(kind, _)| kind.is_same_kind(stack)) {
            Some((_, total)) => *total += stack.count as u64,
            None => totals.push((stack.copy_with_count(1), stack.count as u64)),
        }
    }
    totals
}
