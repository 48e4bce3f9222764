// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use minkowski_lorentz::{BoostSteps, StepError, Velocity};

use crate::{GridVisibility, TraceTable};

/// One stop of the boost scrubber.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrubberStep {
    /// Step index.
    pub index: usize,
    /// Boost velocity at this step.
    pub velocity: Velocity,
    /// Short label, the velocity rounded to one decimal.
    pub label: String,
    /// Title to show while this step is active.
    pub title: String,
    /// Visibility of every slot in the trace table while this step is active.
    pub visible: Vec<bool>,
}

/// Specification of a scrubber control over all boost steps.
///
/// The scrubber holds no selection of its own; [`Scrubber::active`] is only
/// the step to start on.
#[derive(Clone, Debug, PartialEq)]
pub struct Scrubber {
    steps: Vec<ScrubberStep>,
    active: usize,
}

impl Scrubber {
    /// Builds one scrubber step per boost step.
    pub fn new(
        table: &TraceTable,
        steps: BoostSteps,
        grid: GridVisibility,
    ) -> Result<Self, StepError> {
        let steps = steps
            .iter()
            .map(|(index, velocity)| {
                Ok(ScrubberStep {
                    index,
                    velocity,
                    label: step_label(velocity),
                    title: step_title(velocity),
                    visible: table.visibility(index, grid)?,
                })
            })
            .collect::<Result<Vec<_>, StepError>>()?;
        let active = steps.len() / 2;
        Ok(Self { steps, active })
    }

    /// All steps, in order.
    #[must_use]
    pub fn steps(&self) -> &[ScrubberStep] {
        &self.steps
    }

    /// Returns step `index`, if it exists.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<&ScrubberStep> {
        self.steps.get(index)
    }

    /// Index of the initially active step, the rest frame.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// The initially active step.
    #[must_use]
    pub fn active_step(&self) -> &ScrubberStep {
        &self.steps[self.active]
    }

    /// Slot visibility before the user touches the scrubber.
    #[must_use]
    pub fn initial_visibility(&self) -> &[bool] {
        &self.active_step().visible
    }
}

/// Velocity rounded to one decimal, e.g. `"-0.4"`.
///
/// The nudged edge steps (`±0.999`) read `"±1.0"` even though the boost is
/// strictly subluminal.
#[must_use]
pub fn step_label(u: Velocity) -> String {
    // Adding zero turns a rounded -0.0 into 0.0.
    let rounded = libm::round(u.get() * 10.0) / 10.0 + 0.0;
    format!("{rounded:.1}")
}

/// Title for the diagram while boosted by `u`.
#[must_use]
pub fn step_title(u: Velocity) -> String {
    format!("Minkowski Space Time with boost u = {:4.2} c", u.get())
}

#[cfg(test)]
mod tests {
    use crate::TraceKey;

    use super::*;

    fn v(value: f64) -> Velocity {
        Velocity::new(value).unwrap()
    }

    #[test]
    fn labels_round_to_one_decimal() {
        assert_eq!(step_label(v(0.0)), "0.0");
        assert_eq!(step_label(v(0.30000000000000004)), "0.3");
        assert_eq!(step_label(v(-0.7)), "-0.7");
        assert_eq!(step_label(v(-0.04)), "0.0");
        assert_eq!(step_label(v(0.999)), "1.0");
    }

    #[test]
    fn titles_show_two_decimals() {
        assert_eq!(
            step_title(v(0.5)),
            "Minkowski Space Time with boost u = 0.50 c"
        );
        assert_eq!(
            step_title(v(-0.999)),
            "Minkowski Space Time with boost u = -1.00 c"
        );
    }

    #[test]
    fn starts_on_the_rest_frame() {
        let table = TraceTable::new(1, 21);
        let steps = BoostSteps::new(21).unwrap();
        let scrubber = Scrubber::new(&table, steps, GridVisibility::Hidden).unwrap();

        assert_eq!(scrubber.steps().len(), 21);
        assert_eq!(scrubber.active(), 10);
        assert_eq!(scrubber.active_step().velocity, Velocity::ZERO);
        assert_eq!(scrubber.active_step().label, "0.0");

        let rest = table.slot(TraceKey::worldline(0, 10)).unwrap();
        assert!(scrubber.initial_visibility()[rest.get()]);
        assert!(scrubber.initial_visibility()[table.reference().get()]);
    }

    #[test]
    fn each_step_shows_only_its_own_worldlines() {
        let table = TraceTable::new(2, 5);
        let steps = BoostSteps::new(5).unwrap();
        let scrubber = Scrubber::new(&table, steps, GridVisibility::Hidden).unwrap();
        for step in scrubber.steps() {
            for actor in 0..2 {
                let own = table.slot(TraceKey::worldline(actor, step.index)).unwrap();
                let grid = table.slot(TraceKey::grid(actor, step.index)).unwrap();
                assert!(step.visible[own.get()]);
                assert!(!step.visible[grid.get()]);
            }
            assert_eq!(step.visible.iter().filter(|v| **v).count(), 3);
        }
        assert!(scrubber.step(5).is_none());
    }
}
