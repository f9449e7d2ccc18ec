use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use spire_engine::cards::standard_cards;
use spire_engine::monsters::standard_monsters;
use spire_engine::session::{CombatSession, Command, GamePhase};
use spire_engine::zones::Pile;
use spire_engine::RunConfig;

const CONFIG_STR: &str = include_str!("configs/standard.toml");
const SEED: u64 = 0x5eed_c0de_2a17_9b03;

fn load_config() -> RunConfig {
    RunConfig::from_toml_str(CONFIG_STR).expect("bad TOML")
}

fn next_command(session: &CombatSession) -> Command {
    match session.phase() {
        GamePhase::Combat => {
            let hand = session.piles().len(Pile::Hand);
            (0..hand)
                .find(|&i| session.is_playable(i))
                .map_or(Command::EndTurn, Command::PlayCard)
        }
        GamePhase::Victory => session
            .rewards()
            .first()
            .map_or(Command::SkipReward, |&card| Command::SelectReward(card)),
        GamePhase::Defeat | GamePhase::GameWon => Command::ContinueRun,
    }
}

fn play_encounter(session: &mut CombatSession) {
    while session.phase() == GamePhase::Combat {
        let command = next_command(session);
        session.apply(command).expect("bot sent a rejected command");
    }
}

fn bench_encounter(c: &mut Criterion) {
    let config = load_config();
    let cards = Arc::new(standard_cards());
    let monsters = Arc::new(standard_monsters());

    let mut group = c.benchmark_group("encounter");
    group.throughput(Throughput::Elements(1));

    group.bench_function("play_first_encounter", |b| {
        b.iter(|| {
            let mut session = CombatSession::with_catalogs(
                config.clone(),
                Arc::clone(&cards),
                Arc::clone(&monsters),
                black_box(SEED),
            )
            .expect("invalid config");
            play_encounter(&mut session);
            black_box(session.phase());
        })
    });

    let session = CombatSession::with_catalogs(config.clone(), Arc::clone(&cards), Arc::clone(&monsters), SEED)
        .expect("invalid config");
    group.bench_function("snapshot", |b| {
        b.iter(|| black_box(session.snapshot()));
    });

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let config = load_config();
    let cards = Arc::new(standard_cards());
    let monsters = Arc::new(standard_monsters());

    let mut session = CombatSession::with_catalogs(config.clone(), Arc::clone(&cards), Arc::clone(&monsters), SEED)
        .expect("invalid config");
    for _ in 0..200 {
        let command = next_command(&session);
        session.apply(command).expect("bot sent a rejected command");
    }
    let history = session.history().clone();

    let mut group = c.benchmark_group("replay");
    group.throughput(Throughput::Elements(history.len() as u64));

    group.bench_function("replay_200_commands", |b| {
        b.iter(|| {
            let replayed = CombatSession::replay(
                config.clone(),
                Arc::clone(&cards),
                Arc::clone(&monsters),
                SEED,
                black_box(&history),
            )
            .expect("invalid config");
            black_box(replayed.phase());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_encounter, bench_replay);
criterion_main!(benches);
