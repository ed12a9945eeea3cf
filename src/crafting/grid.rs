use crate::error::{TweakError, TweakResult};
use crate::inventory::{total_quantity, ItemStack};
use std::fmt;

/// A fixed-size crafting grid, stored row-major
///
/// The number of slots is fixed at construction; only their contents change.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftingGrid {
    grid_id: usize,
    width: usize,
    height: usize,
    slots: Vec<ItemStack>,
}

impl CraftingGrid {
    /// Create an empty grid
    pub fn new(grid_id: usize, width: usize, height: usize) -> Self {
        Self {
            grid_id,
            width,
            height,
            slots: vec![ItemStack::empty(); width * height],
        }
    }

    /// Create a grid from existing stacks in row-major order
    pub fn from_stacks(
        grid_id: usize,
        width: usize,
        height: usize,
        stacks: Vec<ItemStack>,
    ) -> TweakResult<Self> {
        if stacks.len() != width * height {
            return Err(TweakError::InvalidGrid { grid_id });
        }
        let mut grid = Self {
            grid_id,
            width,
            height,
            slots: stacks,
        };
        grid.normalize();
        Ok(grid)
    }

    pub fn grid_id(&self) -> usize {
        self.grid_id
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of slots
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Slot index for a row and column
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Get item at position
    pub fn get(&self, row: usize, col: usize) -> Option<&ItemStack> {
        self.index_of(row, col).and_then(|index| self.slots.get(index))
    }

    pub fn slot(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut ItemStack> {
        self.slots.get_mut(index)
    }

    /// Replace the stack at `index`, returning the previous one
    pub fn set(&mut self, index: usize, stack: ItemStack) -> TweakResult<ItemStack> {
        let size = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(TweakError::IndexOutOfRange { index, size })?;
        Ok(std::mem::replace(slot, stack))
    }

    pub fn slots(&self) -> &[ItemStack] {
        &self.slots
    }

    /// Mutable access to the slots; the slice length cannot change
    pub fn slots_mut(&mut self) -> &mut [ItemStack] {
        &mut self.slots
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots.fill(ItemStack::empty());
    }

    /// Check if grid is empty
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(ItemStack::is_empty)
    }

    /// Number of non-empty slots
    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    pub fn total_quantity(&self) -> u64 {
        total_quantity(&self.slots)
    }

    pub fn into_stacks(self) -> Vec<ItemStack> {
        self.slots
    }

    fn normalize(&mut self) {
        for slot in &mut self.slots {
            slot.normalize();
        }
    }
}

impl fmt::Display for CraftingGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let cells: Vec<String> = (0..self.width)
                .map(|col| match self.get(row, col) {
                    Some(stack) if !stack.is_empty() => {
                        format!("{}x{}", stack.count, stack.item_id.0)
                    }
                    _ => "-".to_string(),
                })
                .collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}
