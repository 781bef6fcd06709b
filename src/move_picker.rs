// Copyright (C) 2020-2026 Andy Kurnia.

use super::movegen;

// Strictly highest score wins, so ties keep the earliest move.
pub fn pick_best(moves: &[movegen::Move]) -> Option<&movegen::Move> {
    let mut best: Option<&movegen::Move> = None;
    for play in moves {
        if best.is_none_or(|best| play.score > best.score) {
            best = Some(play);
        }
    }
    best
}

// Highest scores first. Equal scores stay in the given order.
pub fn top(moves: &[movegen::Move], n: usize) -> Vec<&movegen::Move> {
    let mut sorted = moves.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted.truncate(n);
    sorted
}
