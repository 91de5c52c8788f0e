use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::{Rand, StdRand};

use pitchzone::event::Location;
use pitchzone::zone;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rand = StdRand::default();
    let locations = (0..1_000)
        .map(|_| {
            let x = rand.next_u64() as f64 / u64::MAX as f64 * 120.0;
            let y = rand.next_u64() as f64 / u64::MAX as f64 * 80.0;
            Location::new(x, y)
        })
        .collect::<Vec<_>>();

    // sanity check
    assert_eq!(Some(zone::Zone::Two), zone::classify(&Location::new(116.0, 40.0)));

    c.bench_function("cri_classify_1k", |b| {
        b.iter(|| {
            locations
                .iter()
                .filter(|location| zone::classify(location).is_some())
                .count()
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
