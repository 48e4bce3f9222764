// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use minkowski_diagram::{Actor, BuildStats, Diagram, DiagramConfig, trace_dataset};
use minkowski_lorentz::{Boost, BoostSteps, Event, Velocity};

fn fleet(n: usize, dots: usize) -> Vec<Actor> {
    (0..n)
        .map(|i| {
            // Spread velocities over (-0.9, 0.9).
            let v = -0.9 + 1.8 * (i as f64 + 0.5) / n as f64;
            Actor::new(format!("actor {i}"), v)
                .expect("fleet velocities are subluminal")
                .with_position(i as f64 - n as f64 / 2.0)
                .with_dots(dots, 0.5)
        })
        .collect()
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("minkowski_lorentz");
    let u = Velocity::new(0.6).expect("0.6 is subluminal");
    let boost = Boost::new(u);
    let events: Vec<Event> = (0..1_024)
        .map(|i| Event::new(i as f64 * 0.01, 5.0 - i as f64 * 0.02))
        .collect();

    group.bench_function("boost_apply(1024)", |b| {
        b.iter(|| {
            let sum = events
                .iter()
                .map(|e| boost.apply(*e))
                .fold(0.0, |acc, e| acc + e.t + e.x);
            black_box(sum);
        });
    });

    group.bench_function("steps_iter(201)", |b| {
        let steps = BoostSteps::new(201).expect("201 steps is valid");
        b.iter(|| {
            let sum: f64 = steps.iter().map(|(_, u)| u.gamma()).sum();
            black_box(sum);
        });
    });

    group.finish();
}

fn bench_diagram(c: &mut Criterion) {
    let mut group = c.benchmark_group("minkowski_diagram");
    group.sample_size(30);

    let config = DiagramConfig::default();
    let one = fleet(1, 20);
    let u = Velocity::new(0.3).expect("0.3 is subluminal");
    group.bench_function("trace_dataset(dots=20)", |b| {
        b.iter(|| {
            black_box(trace_dataset(
                &one[0],
                u,
                config.grid_extent(),
                &config.grid,
            ));
        });
    });

    for &(actors, steps, dots) in &[(2_usize, 21_usize, 20_usize), (8, 41, 40), (32, 101, 100)] {
        let fleet = fleet(actors, dots);
        let config = DiagramConfig::default().with_step_count(steps);
        group.bench_function(
            format!("build(actors={actors},steps={steps},dots={dots})"),
            |b| {
                b.iter(|| {
                    let diagram = Diagram::build(&config, &fleet).expect("valid diagram");
                    black_box(diagram);
                });
            },
        );
        group.bench_function(
            format!("build_with_stats(actors={actors},steps={steps},dots={dots})"),
            |b| {
                b.iter(|| {
                    let mut stats = BuildStats::default();
                    let diagram = Diagram::build_with_trace(&config, &fleet, &mut stats)
                        .expect("valid diagram");
                    black_box((diagram, stats));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_kernel, bench_diagram);
criterion_main!(benches);
