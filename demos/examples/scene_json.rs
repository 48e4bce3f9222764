// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a Minkowski diagram and write it out as a JSON scene.
//!
//! Run:
//! - `cargo run -p minkowski_demos --example scene_json -- --pretty`
//! - `RUST_LOG=debug cargo run -p minkowski_demos --example scene_json -- \
//!   --actor rocket:0.6:-2 --actor probe:-0.3 --steps 41 --output scene.json`

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use minkowski_demos::logging::{TracingSink, init_tracing};
use minkowski_demos::scene::scene;
use minkowski_diagram::{Actor, Diagram, DiagramConfig, DiagramError, GridVisibility};
use peniko::Color;

/// An actor given on the command line as `name:velocity[:position]`.
#[derive(Clone, Debug)]
struct ActorSpec {
    name: String,
    velocity: f64,
    position: f64,
}

impl FromStr for ActorSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let name = parts
            .next()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| format!("missing actor name in {s:?}"))?;
        let velocity = parts
            .next()
            .ok_or_else(|| format!("missing velocity in {s:?}"))?
            .parse()
            .map_err(|e| format!("bad velocity in {s:?}: {e}"))?;
        let position = match parts.next() {
            Some(p) => p
                .parse()
                .map_err(|e| format!("bad position in {s:?}: {e}"))?,
            None => 0.0,
        };
        if parts.next().is_some() {
            return Err(format!("too many fields in {s:?}"));
        }
        Ok(Self {
            name: name.into(),
            velocity,
            position,
        })
    }
}

#[derive(Debug, Parser)]
#[command(about = "Generate a scrubbable Minkowski diagram as JSON")]
struct Args {
    /// Actors as `name:velocity[:position]`; defaults to a small fleet.
    #[arg(long = "actor")]
    actors: Vec<ActorSpec>,
    /// Number of boost steps.
    #[arg(long, default_value_t = 21)]
    steps: usize,
    /// Half-width of the square plot region.
    #[arg(long, default_value_t = 10.0)]
    bound: f64,
    /// Only plot samples at or after lab time zero.
    #[arg(long)]
    positive_only: bool,
    /// Let the slider show grid lines for the active step.
    #[arg(long)]
    show_grid: bool,
    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
    /// Write to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

const PALETTE: [Color; 4] = [
    Color::from_rgba8(0, 255, 0, 255),
    Color::from_rgba8(0, 120, 255, 255),
    Color::from_rgba8(255, 60, 60, 255),
    Color::from_rgba8(180, 0, 255, 255),
];

fn default_fleet() -> Vec<ActorSpec> {
    [("earth", 0.0, 0.0), ("rocket", 0.6, -2.0), ("probe", -0.3, 3.0)]
        .into_iter()
        .map(|(name, velocity, position)| ActorSpec {
            name: name.into(),
            velocity,
            position,
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing().map_err(|e| e.to_string())?;
    let args = Args::parse();

    let specs = if args.actors.is_empty() {
        default_fleet()
    } else {
        args.actors
    };
    let actors = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            Ok(Actor::new(spec.name.as_str(), spec.velocity)?
                .with_position(spec.position)
                .with_positive_only(args.positive_only)
                .with_color(PALETTE[i % PALETTE.len()]))
        })
        .collect::<Result<Vec<_>, DiagramError>>()?;

    let visibility = if args.show_grid {
        GridVisibility::Shown
    } else {
        GridVisibility::Hidden
    };
    let config = DiagramConfig::default()
        .with_step_count(args.steps)
        .with_plot_bounds(-args.bound, args.bound, -args.bound, args.bound)
        .with_grid_visibility(visibility);

    let diagram = Diagram::build_with_trace(&config, &actors, &mut TracingSink)?;
    let scene = scene(&diagram);
    let json = if args.pretty {
        serde_json::to_string_pretty(&scene)?
    } else {
        serde_json::to_string(&scene)?
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, json)?;
            tracing::info!(path = %path.display(), "scene written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
