//! Shared skeleton of the weighted searches. Dijkstra, Greedy, A* and CLA
//! differ only in the key used to pick the next node and in the cost formula
//! applied when relaxing an edge.
//!
//! The next node is always the unsettled non-wall node with the smallest key,
//! ties going to the smaller [NodeId] (row-major order). For A* the key is
//! `total_distance` with ties broken by the smaller heuristic first. A binary
//! heap with lazy deletion yields exactly that order: keys only ever decrease,
//! so every stale entry compares greater than the live one of the same node.
use super::{manhattan_distance, Heuristic};
use crate::config::{HEAVY_WEIGHT, START_DIRECTION};
use crate::context::SearchContext;
use crate::direction::{movement, Offset};
use crate::pathing_grid::{NodeId, PathingGrid};
use log::{trace, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Selection key and edge cost of a weighted search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightedVariant {
    /// `distance + weight + step`
    Dijkstra,
    /// `weight + step + manhattan`, ignoring the distance travelled so far.
    Greedy,
    /// `distance + weight + step`, selected by `distance + manhattan`.
    AStar,
    /// `distance + shaped(step, weight, manhattan)`, see [Heuristic].
    Cla(Heuristic),
}

impl WeightedVariant {
    /// Tentative cost of entering `neighbor` from a node settled at `distance`.
    fn candidate(self, distance: f64, step: f64, weight: u32, to_target: usize) -> f64 {
        let weight_cost = weight as f64;
        let h = to_target as f64;
        match self {
            WeightedVariant::Dijkstra | WeightedVariant::AStar => distance + weight_cost + step,
            WeightedVariant::Greedy => weight_cost + step + h,
            WeightedVariant::Cla(heuristic) => {
                let effective = if weight == HEAVY_WEIGHT { 15.0 } else { 1.0 };
                match heuristic {
                    Heuristic::Manhattan => distance + (step + effective) * h,
                    Heuristic::ManhattanSquared => distance + weight_cost + step + h.powi(2),
                    Heuristic::ManhattanPower7 => distance + (step + effective) * h.powi(7),
                }
            }
        }
    }
}

struct SmallestCostHolder {
    key: f64,
    tie_break: f64,
    index: NodeId,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every component: the max-heap pops the smallest key,
        // then the smallest tie break, then the lowest index
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.tie_break.total_cmp(&self.tie_break))
            .then_with(|| other.index.cmp(&self.index))
    }
}

fn holder(context: &SearchContext, variant: WeightedVariant, index: NodeId) -> SmallestCostHolder {
    let record = context.record(index);
    match variant {
        WeightedVariant::AStar => SmallestCostHolder {
            key: record.total_distance,
            tie_break: record.heuristic_distance.unwrap_or(0.0),
            index,
        },
        _ => SmallestCostHolder {
            key: record.distance,
            tie_break: 0.0,
            index,
        },
    }
}

/// Runs a weighted search from the grid's start. Returns the scratch context,
/// the nodes in settle order and whether the finish was reached.
pub fn weighted_search(
    grid: &PathingGrid,
    variant: WeightedVariant,
) -> (SearchContext, Vec<NodeId>, bool) {
    let start = grid.start();
    let target = grid.finish();
    let mut context = SearchContext::for_grid(grid);
    let mut visited = Vec::new();
    {
        let record = context.record_mut(start);
        record.distance = 0.0;
        record.direction = Some(START_DIRECTION);
        if variant == WeightedVariant::AStar {
            record.total_distance = 0.0;
        }
    }

    let mut to_see = BinaryHeap::new();
    to_see.push(holder(&context, variant, start));
    while let Some(SmallestCostHolder { key, index, .. }) = to_see.pop() {
        // A node is pushed again whenever its key improves; skip the
        // outdated entries and anything settled already
        if context.is_visited(index) || key > holder(&context, variant, index).key {
            continue;
        }
        if context.distance(index).is_infinite() {
            break;
        }
        context.mark_visited(index);
        visited.push(index);
        if index == target {
            return (context, visited, true);
        }
        for (neighbor, offset) in grid.neighbors_with_offset(index) {
            if context.is_visited(neighbor) || grid.is_wall(neighbor) {
                continue;
            }
            if relax(grid, &mut context, variant, index, neighbor, offset) {
                to_see.push(holder(&context, variant, neighbor));
            }
        }
    }
    warn!(
        "{:?} exhausted its frontier after {} nodes without reaching the finish",
        variant,
        visited.len()
    );
    (context, visited, false)
}

/// Relaxes the edge `current -> neighbor`. Returns whether the neighbor improved.
/// Ties keep the earlier predecessor.
fn relax(
    grid: &PathingGrid,
    context: &mut SearchContext,
    variant: WeightedVariant,
    current: NodeId,
    neighbor: NodeId,
    offset: Offset,
) -> bool {
    let target = grid.finish();
    let current_record = *context.record(current);
    // Settled nodes always carry a facing: the start is seeded with one and
    // every relaxation records the arrival direction
    debug_assert!(
        current_record.direction.is_some(),
        "settled node {current} has no facing"
    );
    let facing = current_record.direction.unwrap_or(START_DIRECTION);
    let step = movement(facing, offset);
    let to_target = manhattan_distance(grid, neighbor, target);
    let candidate = variant.candidate(
        current_record.distance,
        step.cost,
        grid.weight(neighbor),
        to_target,
    );

    let record = context.record_mut(neighbor);
    if variant == WeightedVariant::AStar && record.heuristic_distance.is_none() {
        record.heuristic_distance = Some(to_target as f64);
    }
    if candidate < record.distance {
        trace!("{neighbor}: {} -> {candidate} via {current}", record.distance);
        record.distance = candidate;
        record.parent = Some(current);
        record.turns = step.turns;
        record.direction = Some(step.direction);
        if let Some(h) = record.heuristic_distance {
            record.total_distance = candidate + h;
        }
        true
    } else {
        false
    }
}
