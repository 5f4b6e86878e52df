use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sun_viewer::api::{SunViewer, ViewerConfig};
use sun_viewer::core::{Channel, FixedClock, PathResolver, Timestamp, ViewerTimeZone};
use sun_viewer::display::NullDisplay;

fn bench_path_resolution(c: &mut Criterion) {
    let resolver = PathResolver::new("/img/sun", ViewerTimeZone::Utc);
    let timestamp =
        Timestamp::parse_local("2012-03-04T05:00", ViewerTimeZone::Utc).expect("valid timestamp");

    c.bench_function("path_resolution_all_channels", |b| {
        b.iter(|| {
            for channel in Channel::selectable() {
                let _ = resolver.resolve(black_box(timestamp), black_box(channel), Some("aia"));
            }
        })
    });
}

fn bench_step_sweep_1k(c: &mut Criterion) {
    let now = Utc
        .with_ymd_and_hms(2024, 6, 1, 14, 45, 0)
        .single()
        .expect("valid clock reading");
    let config = ViewerConfig::default().with_time_zone(ViewerTimeZone::Utc);
    let mut viewer =
        SunViewer::new(NullDisplay::default(), config, &FixedClock::at(now)).expect("viewer init");

    c.bench_function("step_sweep_1k", |b| {
        b.iter(|| {
            for _ in 0..1_000 {
                let _ = black_box(viewer.step_backward());
            }
            for _ in 0..1_000 {
                let _ = black_box(viewer.step_forward());
            }
        })
    });
}

criterion_group!(benches, bench_path_resolution, bench_step_sweep_1k);
criterion_main!(benches);
