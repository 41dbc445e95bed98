// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use understory_drag_drop::{
    BindingConfig, DragContext, DragController, DragEvent, HandlerSpec, HeadlessHost, ListenerId,
    Rule,
};

// Every rule but the last declines, so each dispatch scans the whole list.
fn rules(len: u32) -> HandlerSpec<u32> {
    HandlerSpec::rules((0..len).map(|i| {
        let wanted = if i + 1 == len { u32::MAX } else { i };
        Rule::new()
            .matching(move |id: &u32| wanted == u32::MAX || *id == wanted)
            .on_drag(|c: &DragContext<'_, u32>| {
                black_box(c.delta);
            })
    }))
}

fn bench_resolve_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_drop/resolve_drag");

    for len in [1_u32, 8, 64, 512] {
        let mut spec = rules(len);
        let event = DragEvent::new(0_u32, Point::new(1.0, 1.0));
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                let ctx = DragContext {
                    dragged: &u32::MAX,
                    container: &0,
                    delta: Vec2::new(1.0, 0.0),
                    event: &event,
                };
                black_box(spec.resolve_drag(&ctx));
            });
        });
    }

    group.finish();
}

fn bench_drag_over(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_drop/on_drag_over");

    for len in [8_u32, 512] {
        let mut host = HeadlessHost::new();
        host.insert(0_u32, None);
        host.insert(u32::MAX, Some(0));
        let mut dnd = DragController::<u32, ListenerId>::new();
        dnd.attach(&mut host, 0, BindingConfig::default().with_handler(rules(len)));
        dnd.attach(
            &mut host,
            u32::MAX,
            BindingConfig::default().with_draggable(true),
        );
        dnd.on_drag_start(&mut host, &u32::MAX, &mut DragEvent::new(u32::MAX, Point::ZERO))
            .unwrap();

        let mut x = 0.0;
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                x += 1.0;
                let mut ev = DragEvent::new(0, Point::new(x, 0.0));
                black_box(dnd.on_drag_over(&mut host, &0, &mut ev));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve_drag, bench_drag_over);
criterion_main!(benches);
