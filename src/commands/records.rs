//! Records command: print the high-score table

use crate::output::print_records;
use crate::store::ScoreStore;

/// Load every recorded score and print the leaderboard.
pub fn run_records(store: &ScoreStore) {
    let scores = store.load_all();
    log::debug!(
        "loaded {} scores from {}",
        scores.len(),
        store.path().display()
    );
    print_records(&scores);
}
