use criterion::{Criterion, black_box, criterion_group, criterion_main};
use optypo::prelude::*;
use optypo::spelling::ALL_PRESETS;
use optypo::util::levenshtein::levenshtein_distance_threshold;

fn generate_candidates(registry: &PresetRegistry) -> Vec<Candidate<usize>> {
    // Drop one character from the middle of every known option name.
    registry
        .iter()
        .flat_map(|(_, members)| members.iter())
        .enumerate()
        .map(|(i, name)| {
            let mut chars: Vec<char> = name.chars().collect();
            chars.remove(chars.len() / 2);
            Candidate::new(chars.into_iter().collect::<String>(), i)
        })
        .collect()
}

fn bench_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    group.bench_function("full", |b| {
        b.iter(|| levenshtein_distance(black_box("beforeRouteUpdate"), black_box("beforeUpdate")))
    });
    group.bench_function("bounded", |b| {
        b.iter(|| {
            levenshtein_distance_threshold(
                black_box("beforeRouteUpdate"),
                black_box("beforeUpdate"),
                black_box(1),
            )
        })
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let registry = PresetRegistry::builtin();
    let config = TypoConfig::default().with_presets([ALL_PRESETS]).with_threshold(2);
    let classifier = TypoClassifier::from_config(&config, &registry).unwrap();
    let candidates = generate_candidates(&registry);

    let mut group = c.benchmark_group("classify");

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(classifier.classify_all(black_box(&candidates))))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(classifier.par_classify(black_box(&candidates))))
    });

    group.finish();
}

criterion_group!(benches, bench_distances, bench_classify);
criterion_main!(benches);
