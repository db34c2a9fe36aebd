// Criterion benchmarks for the matching reducer

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use collab_match::core::{reduce, Action, MatchingState};
use collab_match::models::{
    MatchFilterPatch, MatchSuggestion, ProfileRef, ScoreBreakdown, ScoreRange, SuggestionStatus,
    SwipeDecision,
};

fn create_suggestion(id: usize) -> MatchSuggestion {
    MatchSuggestion {
        id: format!("match-{}", id),
        profile: ProfileRef {
            profile_id: format!("profile-{}", id),
            display_name: format!("Creator {}", id),
            niche_tags: vec!["fitness".to_string(), "travel".to_string()],
            rizz_score: 40.0 + (id % 60) as f64,
            is_verified: id % 3 == 0,
        },
        compatibility_score: 50.0 + (id % 50) as f64,
        breakdown: ScoreBreakdown {
            niche: 70.0,
            audience: 60.0,
            engagement: 75.0,
            trust: 65.0,
        },
        status: SuggestionStatus::Suggested,
        action_taken_at: None,
    }
}

fn deck(size: usize) -> MatchingState {
    reduce(
        &MatchingState::initial(),
        Action::SetSuggestions((0..size).map(create_suggestion).collect()),
    )
}

fn bench_apply_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_swipe");

    for deck_size in [10usize, 50, 100, 500].iter() {
        let state = deck(*deck_size);

        group.bench_with_input(
            BenchmarkId::new("like_current", deck_size),
            deck_size,
            |b, _| {
                b.iter(|| {
                    reduce(
                        black_box(&state),
                        Action::ApplySwipe {
                            decision: SwipeDecision::Like,
                            match_id: "match-0".to_string(),
                            at: Utc::now(),
                        },
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_stale_swipe(c: &mut Criterion) {
    let state = deck(100);

    c.bench_function("stale_swipe_noop", |b| {
        b.iter(|| {
            reduce(
                black_box(&state),
                Action::ApplySwipe {
                    decision: SwipeDecision::Pass,
                    match_id: "not-current".to_string(),
                    at: Utc::now(),
                },
            )
        });
    });
}

fn bench_filter_merge(c: &mut Criterion) {
    let state = deck(50);
    let patch = MatchFilterPatch {
        rizz_score: Some(ScoreRange { min: 70.0, max: 100.0 }),
        niches: Some(vec!["fitness".to_string()]),
        ..MatchFilterPatch::default()
    };

    c.bench_function("update_filters", |b| {
        b.iter(|| reduce(black_box(&state), Action::UpdateFilters(patch.clone())));
    });
}

fn bench_full_deck_drain(c: &mut Criterion) {
    c.bench_function("drain_deck_100", |b| {
        b.iter(|| {
            let mut state = deck(100);
            while let Some(current) = state.current_suggestion() {
                let id = current.id.clone();
                state = reduce(
                    &state,
                    Action::ApplySwipe {
                        decision: SwipeDecision::Pass,
                        match_id: id,
                        at: Utc::now(),
                    },
                );
            }
            black_box(state)
        });
    });
}

criterion_group!(
    benches,
    bench_apply_swipe,
    bench_stale_swipe,
    bench_filter_merge,
    bench_full_deck_drain
);

criterion_main!(benches);
