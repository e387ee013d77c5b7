//! Selection of entry/exit pairs that still have search work left

use crate::checkpoint::CheckpointStore;
use crate::grid::{Cell, GridMap};
use rand::Rng;

/// Pairs of `map` whose search is not finished, sampled down to `cap`.
///
/// A pair is unfinished when it has no checkpoint yet, when its checkpoint
/// cannot be read (it will be restarted or reported by its worker), or when
/// its stack still holds pending states. If more than `cap` pairs qualify,
/// a uniform sample of `cap` of them is drawn without replacement from
/// `rng`, so repeated sessions spread their effort over the whole set.
pub fn unfinished_pairs<R: Rng + ?Sized>(
    map: &GridMap,
    checkpoints: &CheckpointStore,
    cap: usize,
    rng: &mut R,
) -> Vec<(Cell, Cell)> {
    let unfinished: Vec<(Cell, Cell)> = map
        .pairs()
        .into_iter()
        .filter(|&(entry, exit)| match checkpoints.load(map, entry, exit) {
            Ok(checkpoint) => !checkpoint.is_finished(),
            Err(_) => true,
        })
        .collect();

    if unfinished.len() <= cap {
        return unfinished;
    }
    sample_without_replacement(unfinished, cap, rng)
}

/// Uniformly choose `amount` items, keeping their original relative order.
fn sample_without_replacement<T, R: Rng + ?Sized>(items: Vec<T>, amount: usize, rng: &mut R) -> Vec<T> {
    let mut chosen = rand::seq::index::sample(rng, items.len(), amount).into_vec();
    chosen.sort_unstable();
    let mut chosen = chosen.into_iter().peekable();
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            if chosen.peek() == Some(&i) {
                chosen.next();
                Some(item)
            } else {
                None
            }
        })
        .collect()
}
