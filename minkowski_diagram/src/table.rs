// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Addressing of traces in the flat list handed to a renderer.

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;
use minkowski_lorentz::StepError;

use crate::GridVisibility;

/// Which of an actor's two traces at a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraceKind {
    /// The boosted worldline samples.
    Worldline,
    /// The boosted grid lines.
    Grid,
}

/// Identifies one generated trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TraceKey {
    /// Index of the actor in the input list.
    pub actor: usize,
    /// Boost step.
    pub step: usize,
    /// Worldline or grid.
    pub kind: TraceKind,
}

impl TraceKey {
    /// Key of an actor's worldline at `step`.
    #[must_use]
    pub const fn worldline(actor: usize, step: usize) -> Self {
        Self {
            actor,
            step,
            kind: TraceKind::Worldline,
        }
    }

    /// Key of an actor's grid lines at `step`.
    #[must_use]
    pub const fn grid(actor: usize, step: usize) -> Self {
        Self {
            actor,
            step,
            kind: TraceKind::Grid,
        }
    }
}

/// Position of a trace in the flat trace list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TraceSlot(usize);

impl TraceSlot {
    /// Returns the position in the flat list.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// What occupies a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotContent {
    /// A generated actor trace.
    Trace(TraceKey),
    /// The always-visible reference trace after all actor traces.
    Reference,
}

/// Mapping between [`TraceKey`]s and [`TraceSlot`]s.
///
/// Slots are handed out actor by actor, then step by step, worldline before
/// grid, with one reference slot at the very end. Callers look slots up by
/// key and never need to know the ordering.
#[derive(Clone, Debug)]
pub struct TraceTable {
    actor_count: usize,
    step_count: usize,
    by_key: HashMap<TraceKey, TraceSlot>,
    by_slot: Vec<SlotContent>,
}

impl TraceTable {
    /// Lays out slots for `actor_count` actors over `step_count` steps.
    #[must_use]
    pub fn new(actor_count: usize, step_count: usize) -> Self {
        let mut by_slot = Vec::with_capacity(2 * actor_count * step_count + 1);
        for actor in 0..actor_count {
            for step in 0..step_count {
                by_slot.push(SlotContent::Trace(TraceKey::worldline(actor, step)));
                by_slot.push(SlotContent::Trace(TraceKey::grid(actor, step)));
            }
        }
        by_slot.push(SlotContent::Reference);

        let by_key = by_slot
            .iter()
            .enumerate()
            .filter_map(|(slot, content)| match content {
                SlotContent::Trace(key) => Some((*key, TraceSlot(slot))),
                SlotContent::Reference => None,
            })
            .collect();

        Self {
            actor_count,
            step_count,
            by_key,
            by_slot,
        }
    }

    /// Number of actors laid out.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actor_count
    }

    /// Number of steps laid out.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Total number of slots, the reference slot included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_slot.len()
    }

    /// Always `false`; the reference slot is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the slot holding `key`, if it was laid out.
    #[must_use]
    pub fn slot(&self, key: TraceKey) -> Option<TraceSlot> {
        self.by_key.get(&key).copied()
    }

    /// Returns the reference slot.
    #[must_use]
    pub fn reference(&self) -> TraceSlot {
        TraceSlot(self.by_slot.len() - 1)
    }

    /// Returns what occupies `slot`.
    #[must_use]
    pub fn content(&self, slot: TraceSlot) -> Option<SlotContent> {
        self.by_slot.get(slot.0).copied()
    }

    /// Iterates over every slot in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (TraceSlot, SlotContent)> + '_ {
        self.by_slot
            .iter()
            .enumerate()
            .map(|(slot, content)| (TraceSlot(slot), *content))
    }

    /// Visibility of every slot while `step` is active.
    ///
    /// Each actor's worldline at `step` is shown, its grid lines follow
    /// `grid`, the reference trace is always shown and everything else is
    /// hidden.
    pub fn visibility(&self, step: usize, grid: GridVisibility) -> Result<Vec<bool>, StepError> {
        if step >= self.step_count {
            return Err(StepError::OutOfRange {
                index: step,
                step_count: self.step_count,
            });
        }
        let mut visible = vec![false; self.len()];
        for actor in 0..self.actor_count {
            if let Some(slot) = self.slot(TraceKey::worldline(actor, step)) {
                visible[slot.0] = true;
            }
            if let Some(slot) = self.slot(TraceKey::grid(actor, step)) {
                visible[slot.0] = grid == GridVisibility::Shown;
            }
        }
        visible[self.reference().0] = true;
        Ok(visible)
    }
}

/// Visibility of every slot while `step` is active, with grid lines hidden.
///
/// Shorthand for laying out a [`TraceTable`] and calling
/// [`TraceTable::visibility`].
pub fn step_visibility(
    step: usize,
    actor_count: usize,
    step_count: usize,
) -> Result<Vec<bool>, StepError> {
    TraceTable::new(actor_count, step_count).visibility(step, GridVisibility::Hidden)
}
