//! Decomposition benchmarks.
//!
//! Run with: cargo bench --package leto-core --bench decompose

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use leto_core::{CalendarKind, Calendars};

fn benchmark_decompose(c: &mut Criterion) {
    let calendars = Calendars::build().unwrap();
    let mut group = c.benchmark_group("decompose");

    for kind in CalendarKind::ALL {
        let calendar = calendars.get(kind);
        for day_offset in [0i64, 739_904, 2_729_466, 9_999_999] {
            group.bench_with_input(
                BenchmarkId::new(kind.to_string(), day_offset),
                &day_offset,
                |b, &day_offset| {
                    b.iter(|| calendar.calculate_calendar_periods(black_box(day_offset)).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn benchmark_compose(c: &mut Criterion) {
    let calendars = Calendars::build().unwrap();
    let mut group = c.benchmark_group("compose");

    for kind in CalendarKind::ALL {
        let calendar = calendars.get(kind);
        let periods = calendar
            .calculate_calendar_periods(calendar.epoch_offset_days())
            .unwrap();
        group.bench_with_input(BenchmarkId::new("epoch", kind), &periods, |b, periods| {
            b.iter(|| calendar.calculate_days_from_periods(black_box(periods)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_build(c: &mut Criterion) {
    c.bench_function("build_all_calendars", |b| {
        b.iter(|| Calendars::build().unwrap());
    });
}

criterion_group!(benches, benchmark_decompose, benchmark_compose, benchmark_build);
criterion_main!(benches);
