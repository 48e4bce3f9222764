// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::dataset::trace_dataset;
use crate::grid::light_rays;
use crate::trace::{BuildPlan, BuildTrace, DatasetEvent, NoTrace};
use crate::{
    Actor, ActorStyle, DiagramConfig, DiagramError, Scrubber, SegmentPath, SlotContent,
    TraceDataset, TraceKey, TraceKind, TraceSlot, TraceTable,
};

/// One actor's datasets at one boost step, with display names.
#[derive(Clone, Debug, PartialEq)]
pub struct StepTraces {
    /// Boost step.
    pub step: usize,
    /// Name for the worldline trace.
    pub worldline_name: String,
    /// Name for the grid-line trace.
    pub grid_name: String,
    /// The generated geometry.
    pub dataset: TraceDataset,
}

/// Everything generated for one actor, one entry per boost step.
#[derive(Clone, Debug)]
pub struct ActorTraces {
    /// Actor label.
    pub name: String,
    /// Rendering hints carried through from the actor.
    pub style: ActorStyle,
    /// Per-step datasets, indexed by step.
    pub steps: Vec<StepTraces>,
}

/// A borrowed view of whatever occupies a trace slot.
#[derive(Clone, Copy, Debug)]
pub enum SlotTrace<'a> {
    /// An actor's worldline samples.
    Worldline {
        /// Display name.
        name: &'a str,
        /// Rendering hints.
        style: &'a ActorStyle,
        /// Samples, `x` for position and `y` for time.
        points: &'a [Point],
    },
    /// An actor's grid lines.
    Grid {
        /// Display name.
        name: &'a str,
        /// Rendering hints.
        style: &'a ActorStyle,
        /// Grid segments.
        path: &'a SegmentPath,
    },
    /// The light-ray reference.
    Reference {
        /// Light-ray segments.
        path: &'a SegmentPath,
    },
}

/// All the data needed to render a scrubbable Minkowski diagram.
///
/// Building computes a [`TraceDataset`] for every actor at every boost step,
/// lays the resulting traces out in a [`TraceTable`], and derives a
/// [`Scrubber`] that switches between steps.
#[derive(Clone, Debug)]
pub struct Diagram {
    config: DiagramConfig,
    table: TraceTable,
    actors: Vec<ActorTraces>,
    light_rays: SegmentPath,
    scrubber: Scrubber,
}

impl Diagram {
    /// Builds a diagram for `actors` under `config`.
    ///
    /// Configuration and actors are validated up front; on error nothing is
    /// generated.
    pub fn build(config: &DiagramConfig, actors: &[Actor]) -> Result<Self, DiagramError> {
        Self::build_with_trace(config, actors, &mut NoTrace)
    }

    /// Like [`Diagram::build`], reporting progress to `trace`.
    pub fn build_with_trace<T>(
        config: &DiagramConfig,
        actors: &[Actor],
        trace: &mut T,
    ) -> Result<Self, DiagramError>
    where
        T: BuildTrace + ?Sized,
    {
        let steps = config.validate()?;
        if actors.is_empty() {
            return Err(DiagramError::NoActors);
        }
        for (index, actor) in actors.iter().enumerate() {
            actor.validate(index)?;
        }

        let table = TraceTable::new(actors.len(), steps.len());
        let extent = config.grid_extent();
        trace.begin(&BuildPlan {
            actor_count: actors.len(),
            step_count: steps.len(),
            slot_count: table.len(),
            grid_extent: extent,
        });

        let actor_traces: Vec<ActorTraces> = actors
            .iter()
            .enumerate()
            .map(|(actor_index, actor)| {
                let steps = steps
                    .iter()
                    .map(|(step, velocity)| {
                        let dataset = trace_dataset(actor, velocity, extent, &config.grid);
                        trace.dataset(&DatasetEvent {
                            actor_index,
                            actor,
                            step,
                            velocity,
                            dataset: &dataset,
                        });
                        let u = velocity.get();
                        StepTraces {
                            step,
                            worldline_name: format!("{} at u={u:3.1}", actor.name()),
                            grid_name: format!("{} axes at u={u:3.1}", actor.name()),
                            dataset,
                        }
                    })
                    .collect();
                ActorTraces {
                    name: actor.name().into(),
                    style: *actor.style(),
                    steps,
                }
            })
            .collect();

        let scrubber = Scrubber::new(&table, steps, config.grid_visibility)?;
        let diagram = Self {
            config: *config,
            table,
            actors: actor_traces,
            light_rays: light_rays(config.plot_bounds, config.light_ray_scale),
            scrubber,
        };
        trace.finish(&diagram);
        Ok(diagram)
    }

    /// The configuration the diagram was built with.
    #[must_use]
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Slot layout of the flat trace list.
    #[must_use]
    pub fn table(&self) -> &TraceTable {
        &self.table
    }

    /// Per-actor datasets, in input order.
    #[must_use]
    pub fn actors(&self) -> &[ActorTraces] {
        &self.actors
    }

    /// The light-ray reference trace.
    #[must_use]
    pub fn light_rays(&self) -> &SegmentPath {
        &self.light_rays
    }

    /// Scrubber steps and the initially active step.
    #[must_use]
    pub fn scrubber(&self) -> &Scrubber {
        &self.scrubber
    }

    /// Dataset for `actor` at `step`.
    #[must_use]
    pub fn dataset(&self, actor: usize, step: usize) -> Option<&TraceDataset> {
        Some(&self.actors.get(actor)?.steps.get(step)?.dataset)
    }

    /// Returns the trace stored in `slot`.
    #[must_use]
    pub fn slot_trace(&self, slot: TraceSlot) -> Option<SlotTrace<'_>> {
        match self.table.content(slot)? {
            SlotContent::Reference => Some(SlotTrace::Reference {
                path: &self.light_rays,
            }),
            SlotContent::Trace(TraceKey { actor, step, kind }) => {
                let traces = self.actors.get(actor)?;
                let at_step = traces.steps.get(step)?;
                Some(match kind {
                    TraceKind::Worldline => SlotTrace::Worldline {
                        name: &at_step.worldline_name,
                        style: &traces.style,
                        points: &at_step.dataset.worldline,
                    },
                    TraceKind::Grid => SlotTrace::Grid {
                        name: &at_step.grid_name,
                        style: &traces.style,
                        path: &at_step.dataset.grid,
                    },
                })
            }
        }
    }

    /// Every slot's trace, in slot order.
    pub fn slot_traces(&self) -> impl Iterator<Item = (TraceSlot, SlotTrace<'_>)> + '_ {
        self.table
            .iter()
            .filter_map(|(slot, _)| Some((slot, self.slot_trace(slot)?)))
    }

    /// Snapshot of the diagram for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> DiagramDebugInfo {
        DiagramDebugInfo {
            actor_count: self.actors.len(),
            step_count: self.table.step_count(),
            slot_count: self.table.len(),
            active_step: self.scrubber.active(),
            grid_extent: self.config.grid_extent(),
            worldline_points: self
                .actors
                .iter()
                .flat_map(|a| &a.steps)
                .map(|s| s.dataset.worldline.len())
                .sum(),
        }
    }
}

/// Debug snapshot of a [`Diagram`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramDebugInfo {
    /// Number of actors.
    pub actor_count: usize,
    /// Number of boost steps.
    pub step_count: usize,
    /// Total slots, the reference slot included.
    pub slot_count: usize,
    /// Initially active step.
    pub active_step: usize,
    /// Half-length of every grid line.
    pub grid_extent: f64,
    /// Worldline points across all datasets.
    pub worldline_points: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridVisibility;

    fn pair() -> [Actor; 2] {
        [
            Actor::new("earth", 0.0).unwrap(),
            Actor::new("ship", 0.5).unwrap().with_position(1.0),
        ]
    }

    #[test]
    fn rejects_empty_actor_list() {
        let err = Diagram::build(&DiagramConfig::default(), &[]).unwrap_err();
        assert_eq!(err, DiagramError::NoActors);
    }

    #[test]
    fn one_dataset_per_actor_and_step() {
        let diagram = Diagram::build(&DiagramConfig::default(), &pair()).unwrap();
        assert_eq!(diagram.actors().len(), 2);
        for traces in diagram.actors() {
            assert_eq!(traces.steps.len(), 21);
            for (i, step) in traces.steps.iter().enumerate() {
                assert_eq!(step.step, i);
                assert_eq!(step.dataset.worldline.len(), 20);
            }
        }
        assert!(diagram.dataset(1, 20).is_some());
        assert!(diagram.dataset(1, 21).is_none());
        assert!(diagram.dataset(2, 0).is_none());
    }

    #[test]
    fn end_to_end_rest_step_matches_lab_frame() {
        let actor = Actor::new("ship", 0.5).unwrap().with_dots(5, 1.0);
        let diagram = Diagram::build(&DiagramConfig::default(), &[actor.clone()]).unwrap();
        let data = diagram.dataset(0, 10).unwrap();
        assert_eq!(data.boost.get(), 0.0);

        let expected: Vec<Point> = actor
            .proper_times()
            .map(|tau| {
                let e = actor.lab_event(tau);
                Point::new(e.x, e.t)
            })
            .collect();
        assert_eq!(data.worldline, expected);
        assert_eq!(data.worldline[2], Point::ZERO);
    }

    #[test]
    fn trace_names_carry_actor_and_boost() {
        let diagram = Diagram::build(&DiagramConfig::default(), &pair()).unwrap();
        let ship = &diagram.actors()[1];
        assert_eq!(ship.name, "ship");
        assert_eq!(ship.steps[10].worldline_name, "ship at u=0.0");
        assert_eq!(ship.steps[15].grid_name, "ship axes at u=0.5");
        assert_eq!(ship.steps[0].worldline_name, "ship at u=-1.0");
    }

    #[test]
    fn slots_resolve_to_the_matching_traces() {
        let diagram = Diagram::build(&DiagramConfig::default(), &pair()).unwrap();
        let table = diagram.table();

        let slot = table.slot(TraceKey::worldline(1, 3)).unwrap();
        match diagram.slot_trace(slot) {
            Some(SlotTrace::Worldline { name, points, .. }) => {
                assert_eq!(name, diagram.actors()[1].steps[3].worldline_name);
                assert_eq!(points, &diagram.dataset(1, 3).unwrap().worldline[..]);
            }
            other => panic!("expected a worldline, got {other:?}"),
        }

        let grid = table.slot(TraceKey::grid(0, 7)).unwrap();
        assert!(matches!(
            diagram.slot_trace(grid),
            Some(SlotTrace::Grid { .. })
        ));
        assert!(matches!(
            diagram.slot_trace(table.reference()),
            Some(SlotTrace::Reference { .. })
        ));
        assert_eq!(diagram.slot_traces().count(), table.len());
    }

    #[test]
    fn scrubber_covers_every_step_and_starts_at_rest() {
        let config = DiagramConfig::default().with_grid_visibility(GridVisibility::Hidden);
        let diagram = Diagram::build(&config, &pair()).unwrap();
        let scrubber = diagram.scrubber();
        assert_eq!(scrubber.steps().len(), 21);
        assert_eq!(scrubber.active(), 10);

        let step5 = scrubber.step(5).unwrap();
        let shown: Vec<usize> = step5
            .visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect();
        assert_eq!(shown, [10, 52, 84]);
    }

    #[test]
    fn invalid_actor_stops_the_build() {
        let actors = [
            Actor::new("ok", 0.1).unwrap(),
            Actor::new("bad", 0.1).unwrap().with_dots(3, 0.0),
        ];
        assert_eq!(
            Diagram::build(&DiagramConfig::default(), &actors).unwrap_err(),
            DiagramError::NonPositiveDotSpacing {
                actor: 1,
                spacing: 0.0
            }
        );
    }

    #[test]
    fn debug_info_summarizes_the_build() {
        let diagram = Diagram::build(&DiagramConfig::default(), &pair()).unwrap();
        let info = diagram.debug_info();
        assert_eq!(info.actor_count, 2);
        assert_eq!(info.step_count, 21);
        assert_eq!(info.slot_count, 85);
        assert_eq!(info.active_step, 10);
        assert_eq!(info.grid_extent, 20.0);
        assert_eq!(info.worldline_points, 2 * 21 * 20);
    }
}
