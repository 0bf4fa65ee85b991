//! Route ordering by geographic proximity.
//!
//! Nearest-neighbor greedy ordering: explicitly a heuristic, not an optimal
//! tour. Per-day candidate counts are small (at most six), so determinism
//! and speed matter more than the marginal distance a real TSP solve would
//! save.

use crate::models::Place;
use crate::scheduler::travel::distance_km;

/// Reorder places to minimize sequential travel distance.
///
/// Starts from the first coordinate-bearing place in input order and
/// repeatedly appends the nearest unvisited one, breaking distance ties by
/// original input order. Places without coordinates cannot be ordered; they
/// are appended after the ordered subset in their original relative order.
/// Inputs of two or fewer places (or at most one with coordinates) are
/// returned unchanged, since ordering has no effect.
pub fn order_by_proximity(places: &[Place]) -> Vec<Place> {
    if places.len() <= 2 {
        return places.to_vec();
    }

    let mut with_coords: Vec<(usize, (f64, f64))> = Vec::new();
    let mut without_coords: Vec<usize> = Vec::new();
    for (index, place) in places.iter().enumerate() {
        match place.coords() {
            Some(coords) => with_coords.push((index, coords)),
            None => without_coords.push(index),
        }
    }

    if with_coords.len() <= 1 {
        return places.to_vec();
    }

    let mut ordered: Vec<usize> = Vec::with_capacity(places.len());
    let (first, mut current) = with_coords[0];
    ordered.push(first);
    let mut remaining: Vec<(usize, (f64, f64))> = with_coords.split_off(1);

    while !remaining.is_empty() {
        // Strict less-than keeps the earliest input index on ties.
        let mut best = 0;
        let mut best_distance = distance_km(current, remaining[0].1);
        for (i, &(_, coords)) in remaining.iter().enumerate().skip(1) {
            let d = distance_km(current, coords);
            if d < best_distance {
                best = i;
                best_distance = d;
            }
        }
        let (index, coords) = remaining.remove(best);
        ordered.push(index);
        current = coords;
    }

    ordered.extend(without_coords);
    ordered.into_iter().map(|i| places[i].clone()).collect()
}
