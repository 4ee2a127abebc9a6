//! Performance benchmarks for marking and session checks.
//!
//! Run with: `cargo bench --bench marking`
//!
//! ## Performance Targets
//!
//! | Operation | Target | Notes |
//! |-----------|--------|-------|
//! | Mark 300-word answer | <100μs | Word count + four keyword scans |
//! | Mark gated answer | <5μs | Word count only |
//! | Session check | <20μs | HMAC-SHA256 + JSON parse |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use prompt_automarker::{MarkingEngine, SessionGate};

const SECRET: &[u8] = b"bench_session_secret_32_bytes_ok";

fn answer_of(words: usize) -> String {
    let seed = [
        "act", "as", "a", "planner", "write", "an", "itinerary", "for", "my", "team",
        "in", "london", "using", "bullet", "points", "and", "a", "friendly", "tone", "please",
    ];
    seed.iter().cycle().take(words).copied().collect::<Vec<_>>().join(" ")
}

fn bench_mark(c: &mut Criterion) {
    let engine = MarkingEngine::new();
    let mut group = c.benchmark_group("mark");

    for words in [10usize, 20, 100, 300] {
        let text = answer_of(words);
        group.throughput(Throughput::Elements(words as u64));
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| engine.mark(black_box(text)))
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let gate = SessionGate::new("BENCH-CODE", SECRET.to_vec(), 60);
    let issued = gate.issue_session();
    let token = issued.token.as_str().to_string();

    c.bench_function("session/issue", |b| b.iter(|| gate.issue_session_at(black_box(1_000))));
    c.bench_function("session/check_valid", |b| {
        b.iter(|| gate.check_session(black_box(Some(token.as_str()))))
    });
    c.bench_function("session/check_forged", |b| {
        b.iter(|| gate.check_session(black_box(Some("7b7d.00"))))
    });
    c.bench_function("session/validate_code", |b| {
        b.iter(|| gate.validate_code(black_box("BENCH-CODE")))
    });
}

criterion_group!(benches, bench_mark, bench_session);
criterion_main!(benches);
