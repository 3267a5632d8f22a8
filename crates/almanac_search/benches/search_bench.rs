use almanac_search::{
    SearchConfig, SiderealFrame, lunar_phase, new_moon_at_or_after, nth_new_moon,
    solar_longitude_after,
};
use almanac_time::{CivilCalendar, Gregorian};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn solar_event_bench(c: &mut Criterion) {
    let config = SearchConfig::default();
    let tee = Gregorian.fixed_from_date(2024, 1, 1) as f64;

    let mut group = c.benchmark_group("search_solar");
    group.bench_function("solar_longitude_after", |b| {
        b.iter(|| {
            solar_longitude_after(black_box(0.0), black_box(tee), &config)
                .expect("search should succeed")
        })
    });
    group.sample_size(20);
    group.bench_function("sidereal_frame_new", |b| {
        b.iter(|| SiderealFrame::new(black_box(&Gregorian), &config).expect("frame should build"))
    });
    group.finish();
}

fn lunar_phase_bench(c: &mut Criterion) {
    let config = SearchConfig::default();
    let tee = Gregorian.fixed_from_date(2024, 3, 20) as f64 + 0.5;

    let mut group = c.benchmark_group("search_lunar_phase");
    group.bench_function("nth_new_moon", |b| b.iter(|| nth_new_moon(black_box(25_021))));
    group.bench_function("lunar_phase", |b| b.iter(|| lunar_phase(black_box(tee))));
    group.bench_function("new_moon_at_or_after", |b| {
        b.iter(|| new_moon_at_or_after(black_box(tee), &config).expect("search should succeed"))
    });
    group.finish();
}

criterion_group!(benches, solar_event_bench, lunar_phase_bench);
criterion_main!(benches);
