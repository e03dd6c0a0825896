//! Candidate pipeline benchmarks
//!
//! Run with: cargo bench --bench candidate_pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use menu_roulette::domain::models::{Budget, Mood, RecommendationRequest, Weather};
use menu_roulette::services::{parse_candidates, ContextResolver, PromptBuilder, TabularSource};

const CLEAN_RESPONSE: &str = "김치찌개:든든해요\n파스타:데이트에 딱\n초밥:신선해요";

const NOISY_RESPONSE: &str = "추천 메뉴입니다!\n\n**마라탕**: 스트레스엔 얼얼한 국물: 강추\n\
    그냥 아무거나\n`쌀국수`: 비 오는 날 딱 | _해물파전_ : 막걸리와 함께\n";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_candidates");
    for (name, response) in [("clean", CLEAN_RESPONSE), ("noisy", NOISY_RESPONSE)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), response, |b, response| {
            b.iter(|| parse_candidates(black_box(response)));
        });
    }
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let resolver = ContextResolver::new();
    let mut group = c.benchmark_group("tabular_rank");
    for budget in Budget::ALL {
        let request = RecommendationRequest::new("", Weather::Rain, Mood::Stressed, budget);
        let context = resolver.resolve(19, &request);
        let mut source = TabularSource::seeded(7);
        group.bench_with_input(
            BenchmarkId::from_parameter(budget.label()),
            &context,
            |b, context| b.iter(|| source.rank(black_box(context))),
        );
    }
    group.finish();
}

fn bench_prompt(c: &mut Criterion) {
    let request = RecommendationRequest::new("성수동", Weather::Snow, Mood::Tired, Budget::Moderate);
    let context = ContextResolver::new().resolve(12, &request);
    let builder = PromptBuilder::new();

    c.bench_function("prompt_build", |b| b.iter(|| builder.build(black_box(&context))));
}

criterion_group!(benches, bench_parse, bench_rank, bench_prompt);
criterion_main!(benches);
