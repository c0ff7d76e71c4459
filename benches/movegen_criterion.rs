use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sparring_chess::board_state::BoardState;
use sparring_chess::engines::search_engine::SearchEngine;
use sparring_chess::engines::skill_profile::SkillProfile;

fn bench_legal_moves_startpos(c: &mut Criterion) {
    let mut state = BoardState::new_game();
    c.bench_function("legal_moves_startpos", |b| {
        b.iter(|| black_box(state.get_legal_moves()))
    });
}

fn bench_search_startpos(c: &mut Criterion) {
    let mut state = BoardState::new_game();
    let mut engine = SearchEngine::with_rng(StdRng::seed_from_u64(7));
    let profile = SkillProfile {
        search_depth: 3,
        random_chance: 0.0,
    };
    c.bench_function("search_depth_3_startpos", |b| {
        b.iter(|| {
            let legal = state.get_legal_moves();
            black_box(engine.pick_with_profile(&mut state, &legal, &profile, 2000))
        })
    });
}

criterion_group!(benches, bench_legal_moves_startpos, bench_search_startpos);
criterion_main!(benches);
