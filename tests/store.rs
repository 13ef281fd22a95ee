//! Score store and session sink tests.

use std::sync::{Arc, Mutex, PoisonError};

use twentyone::{
    HISTORY_LIMIT, MemoryStore, Outcome, ResultSink, RoundSummary, SessionSink,
};

const fn summary(player: u8, dealer: u8) -> RoundSummary {
    RoundSummary {
        player_score: player,
        dealer_score: dealer,
        outcome: Outcome::resolve(player, dealer),
    }
}

#[test]
fn players_are_created_at_zero() {
    let mut store = MemoryStore::new();
    assert_eq!(store.high_score("ada"), None);

    // A losing round still creates the player, at high score 0.
    store.record_round("ada", &summary(17, 19));
    assert_eq!(store.high_score("ada"), Some(0));
}

#[test]
fn high_score_updates_only_on_better_wins() {
    let mut store = MemoryStore::new();

    store.record_round("ada", &summary(19, 18));
    assert_eq!(store.high_score("ada"), Some(19));

    // A lower win never lowers the record.
    store.record_round("ada", &summary(18, 17));
    assert_eq!(store.high_score("ada"), Some(19));

    // A higher losing total is not a record.
    store.record_round("ada", &summary(20, 21));
    assert_eq!(store.high_score("ada"), Some(19));

    // Neither is a push.
    store.record_round("ada", &summary(20, 20));
    assert_eq!(store.high_score("ada"), Some(19));

    // A dealer bust counts as a win.
    store.record_round("ada", &summary(20, 22));
    assert_eq!(store.high_score("ada"), Some(20));
}

#[test]
fn leaderboard_sorts_best_first() {
    let mut store = MemoryStore::new();
    store.record_round("ada", &summary(19, 18));
    store.record_round("bob", &summary(21, 18));
    store.record_round("cyd", &summary(17, 19));

    assert_eq!(
        store.leaderboard(),
        vec![
            ("bob".to_owned(), 21),
            ("ada".to_owned(), 19),
            ("cyd".to_owned(), 0),
        ]
    );
}

#[test]
fn history_is_newest_first_and_capped() {
    let mut store = MemoryStore::new();

    for dealer in 0..=12 {
        store.record_round("ada", &summary(20, dealer));
    }
    store.record_round("bob", &summary(18, 17));

    let history = store.history("ada");
    assert_eq!(history.len(), HISTORY_LIMIT);

    // Newest first: the last recorded round for ada leads.
    assert_eq!(history[0].dealer_score, 12);
    assert_eq!(history[9].dealer_score, 3);
    assert!(history.iter().all(|entry| entry.username == "ada"));

    assert_eq!(store.history("bob").len(), 1);
    assert_eq!(store.history("unknown").len(), 0);
}

#[test]
fn history_records_canonical_messages() {
    let mut store = MemoryStore::new();
    store.record_round("ada", &summary(22, 20));
    store.record_round("ada", &summary(20, 22));

    let history = store.history("ada");
    assert_eq!(history[0].result, "Dealer busts! You win!");
    assert_eq!(history[1].result, "BUST! You lose!");
}

#[test]
fn session_sink_records_under_its_identity() {
    let store = Arc::new(Mutex::new(MemoryStore::new()));
    let mut sink = SessionSink::new(Arc::clone(&store), "ada");
    assert_eq!(sink.username(), "ada");

    sink.record(&summary(19, 18)).expect("in-memory sink");

    let store = store.lock().unwrap_or_else(PoisonError::into_inner);
    assert_eq!(store.high_score("ada"), Some(19));
    assert_eq!(store.history("ada").len(), 1);
}

#[test]
fn snapshots_round_trip_through_json() {
    let mut store = MemoryStore::new();
    store.record_round("ada", &summary(19, 18));
    store.record_round("bob", &summary(17, 20));

    let json = serde_json::to_string(&store).expect("serialize store");
    let restored: MemoryStore = serde_json::from_str(&json).expect("deserialize store");

    assert_eq!(restored.high_score("ada"), Some(19));
    assert_eq!(restored.high_score("bob"), Some(0));
    assert_eq!(restored.leaderboard(), store.leaderboard());
    assert_eq!(restored.history("ada"), store.history("ada"));
}

#[test]
fn snapshot_files_save_and_load() {
    let mut store = MemoryStore::new();
    store.record_round("ada", &summary(20, 19));

    let path = std::env::temp_dir().join("twentyone-store-test.json");
    store.save(&path).expect("save snapshot");

    let restored = MemoryStore::load(&path).expect("load snapshot");
    assert_eq!(restored.high_score("ada"), Some(20));

    let _ = std::fs::remove_file(&path);
}
