//! Checkpoint persistence, pair scheduling and aggregation across files.

use mazing::search::{Checkpoint, SearchEngine};
use mazing::{aggregate, maps, unfinished_pairs, Aggregate, Cell, CheckpointStore, GridMap, Mark, Overlay};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn field(rows: usize, cols: usize) -> GridMap {
    let codes = vec![vec![0u8; cols]; rows];
    let layout: Vec<&[u8]> = codes.iter().map(Vec::as_slice).collect();
    GridMap::from_codes(
        "Field",
        &layout,
        &[((0, 0), 1), ((1, 0), 2)],
        &[((rows - 1, cols - 1), 0)],
    )
    .unwrap()
}

proptest! {
    /// Whatever the engine leaves behind survives a save/load unchanged.
    #[test]
    fn prop_mid_search_round_trip(
        rows in 2usize..6,
        cols in 2usize..6,
        steps in 0u64..40,
        second_entry in any::<bool>(),
    ) {
        let dir = TempDir::new().unwrap();
        let store = CheckpointStore::new(dir.path());
        let map = field(rows, cols);
        let entry = if second_entry { Cell::new(1, 0) } else { Cell::new(0, 0) };
        let exit = Cell::new(rows - 1, cols - 1);

        let mut engine = SearchEngine::new(&map, entry, exit).unwrap();
        let mut checkpoint = engine.seed();
        engine.run_steps(&mut checkpoint, steps);

        store.save(&map, entry, exit, &checkpoint).unwrap();
        let loaded = store.load(&map, entry, exit).unwrap();
        prop_assert_eq!(loaded, checkpoint);
    }
}

#[test]
fn test_park_scheduler_samples_unfinished_pairs() {
    let dir = TempDir::new().unwrap();
    let store = CheckpointStore::new(dir.path());
    let park = maps::lookup("Park").unwrap();

    let all = unfinished_pairs(&park, &store, 100, &mut ChaCha8Rng::seed_from_u64(0));
    assert_eq!(all, park.pairs());

    let sample = unfinished_pairs(&park, &store, 5, &mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(sample.len(), 5);
    let known: HashSet<_> = park.pairs().into_iter().collect();
    assert!(sample.iter().all(|p| known.contains(p)));
    assert_eq!(
        sample,
        unfinished_pairs(&park, &store, 5, &mut ChaCha8Rng::seed_from_u64(9))
    );
}

#[test]
fn test_scheduler_treats_corrupt_as_unfinished() {
    let dir = TempDir::new().unwrap();
    let store = CheckpointStore::new(dir.path());
    let map = field(3, 3);
    let pairs = map.pairs();

    store
        .save(&map, pairs[0].0, pairs[0].1, &Checkpoint::default())
        .unwrap();
    fs::write(store.pair_path("Field", pairs[1].0, pairs[1].1), "[[], {").unwrap();

    let pending = unfinished_pairs(&map, &store, 10, &mut ChaCha8Rng::seed_from_u64(1));
    assert_eq!(pending, vec![pairs[1]]);
}

#[test]
fn test_solved_pairs_drop_out_of_the_schedule() {
    let dir = TempDir::new().unwrap();
    let store = CheckpointStore::new(dir.path());
    let map = field(3, 3);

    for (entry, exit) in map.pairs() {
        let mut engine = SearchEngine::new(&map, entry, exit).unwrap();
        let mut checkpoint = engine.seed();
        engine.run_to_completion(&mut checkpoint);
        store.save(&map, entry, exit, &checkpoint).unwrap();
    }

    let pending = unfinished_pairs(&map, &store, 10, &mut ChaCha8Rng::seed_from_u64(1));
    assert!(pending.is_empty());
}

fn strip_path(cols: usize) -> Overlay {
    let mut overlay = Overlay::new(2, 5);
    for col in 0..cols {
        overlay.set(Cell::new(0, col), Mark::PathUsed);
    }
    overlay
}

#[test]
fn test_aggregate_pools_global_maximum() {
    let dir = TempDir::new().unwrap();
    let store = CheckpointStore::new(dir.path());
    let map = GridMap::from_codes(
        "Pool",
        &[&[0, 0, 0, 0, 0], &[0, 0, 0, 0, 0]],
        &[((0, 0), 3), ((1, 0), 1)],
        &[((0, 4), 0), ((1, 4), 2)],
    )
    .unwrap();
    let pairs = map.pairs();
    // offsets: (0,0)->(0,4) 3, (0,0)->(1,4) 5, (1,0)->(0,4) 1, (1,0)->(1,4) 3
    let stores = [
        vec![strip_path(3)],               // 3 + 2 = 5
        vec![strip_path(2), strip_path(2)], // 5 + 1 = 6
        vec![strip_path(4)],               // 1 + 3 = 4
        vec![strip_path(4)],               // 3 + 3 = 6
    ];
    for (&(entry, exit), pair_store) in pairs.iter().zip(&stores) {
        let checkpoint = Checkpoint {
            store: pair_store.clone(),
            stack: Vec::new(),
        };
        store.save(&map, entry, exit, &checkpoint).unwrap();
    }

    let result = aggregate(&pairs, &map, &store);
    assert_eq!(result.best_length, 6);
    assert_eq!(
        result.winning_paths,
        vec![strip_path(2), strip_path(2), strip_path(4)]
    );

    store.save_aggregate("Pool", &result).unwrap();
    assert_eq!(store.load_aggregate("Pool").unwrap(), result);
}

#[test]
fn test_aggregate_of_nothing_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = CheckpointStore::new(dir.path());
    let map = field(3, 3);
    fs::write(store.pair_path("Field", Cell::new(0, 0), Cell::new(2, 2)), "garbage").unwrap();

    assert_eq!(aggregate(&map.pairs(), &map, &store), Aggregate::default());
}

#[test]
fn test_aggregate_file_shape() {
    let dir = TempDir::new().unwrap();
    let store = CheckpointStore::new(dir.path());
    store.save_aggregate("Empty", &Aggregate::default()).unwrap();
    assert_eq!(fs::read_to_string(store.result_path("Empty")).unwrap(), "[0,[]]");
}
