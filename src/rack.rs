// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

// Case-insensitive. Returns the tiles sorted.
pub fn parse_rack(
    alphabet: &alphabet::Alphabet,
    rack: &str,
    rack_size: i8,
) -> Result<Box<[u8]>, error::SolveError> {
    let mut tiles = Vec::with_capacity(rack.len());
    for c in rack.chars() {
        match alphabet.tile_of(c) {
            Some(tile) => tiles.push(tile),
            None => return Err(error::SolveError::InvalidRackTile(c)),
        }
    }
    if tiles.len() > rack_size as usize {
        return Err(error::SolveError::RackTooLong {
            found: tiles.len(),
            max: rack_size as usize,
        });
    }
    tiles.sort_unstable();
    Ok(tiles.into_boxed_slice())
}

// Every distinct ordered arrangement of every distinct non-empty sub-multiset
// of the rack, each exactly once, in lexicographic order.
//
// Picking from a tally instead of from positions is what collapses duplicate
// letters. For 7 distinct tiles this is sum(7!/(7-k)!, k=1..7) = 13699
// arrangements; repeated tiles only make it smaller.
pub fn arrangements(rack: &[u8]) -> Vec<Box<[u8]>> {
    let mut distinct = rack.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    let mut rack_tally = distinct
        .iter()
        .map(|&tile| rack.iter().filter(|&&t| t == tile).count() as u8)
        .collect::<Vec<_>>();

    struct Env<'a> {
        distinct: &'a [u8],
        rack_tally: &'a mut [u8],
        current: Vec<u8>,
        found: Vec<Box<[u8]>>,
    }

    fn arrange(env: &mut Env) {
        for i in 0..env.distinct.len() {
            if env.rack_tally[i] > 0 {
                env.rack_tally[i] -= 1;
                env.current.push(env.distinct[i]);
                env.found.push(env.current[..].into());
                arrange(env);
                env.current.pop();
                env.rack_tally[i] += 1;
            }
        }
    }

    let mut env = Env {
        distinct: &distinct,
        rack_tally: &mut rack_tally,
        current: Vec::with_capacity(rack.len()),
        found: Vec::new(),
    };
    arrange(&mut env);
    env.found
}
