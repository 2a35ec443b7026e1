use criterion::{criterion_group, criterion_main, Criterion};

use storyline_core::{Document, StorylineConfig};
use storyline_engine::EventDetector;
use test_fixtures::doc;

const TOPICS: [&str; 6] = [
    "earthquake tokyo damage",
    "rocket launch delayed",
    "football final tonight",
    "market crash stocks",
    "election results count",
    "storm warning coast",
];

/// ~2K posts over two days, each mixing one topic with filler words.
fn synthetic_corpus(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| {
            let topic = TOPICS[(i / 40) % TOPICS.len()];
            let content = format!("{topic} update {} from user{}", i % 7, i % 13);
            doc(&content, (i as i64) * 86)
        })
        .collect()
}

fn bench_detect_2k(c: &mut Criterion) {
    let docs = synthetic_corpus(2_000);
    let config = StorylineConfig::from_toml(
        "[detection]\nwindow_size_hours = 2\nsignificance_threshold = 3\nsimilarity_threshold = 0.2",
    )
    .unwrap();
    let detector = EventDetector::from_config(Vec::<String>::new(), &config).unwrap();

    c.bench_function("detect_2k_posts", |b| {
        b.iter(|| {
            let timeline = detector.detect(&docs).unwrap();
            assert!(!timeline.is_empty());
        })
    });
}

fn bench_detect_overlapping(c: &mut Criterion) {
    let docs = synthetic_corpus(2_000);
    let config = StorylineConfig::from_toml(
        "[detection]\nwindow_size_hours = 4\nwindow_step_hours = 1\nsignificance_threshold = 3",
    )
    .unwrap();
    let detector = EventDetector::from_config(Vec::<String>::new(), &config).unwrap();

    c.bench_function("detect_2k_posts_overlapping", |b| {
        b.iter(|| detector.detect(&docs).unwrap())
    });
}

criterion_group!(benches, bench_detect_2k, bench_detect_overlapping);
criterion_main!(benches);
