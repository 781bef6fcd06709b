// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, trie};

// Whitespace-delimited tokens, uppercased. Order and duplicates do not matter.
pub fn read_machine_words(
    alphabet: &alphabet::Alphabet,
    giant_string: &str,
) -> error::Returns<Vec<Box<[u8]>>> {
    let mut machine_words = Vec::new();
    let mut v = Vec::new();
    for s in giant_string.split_whitespace() {
        v.clear();
        for c in s.chars() {
            match alphabet.tile_of(c) {
                Some(tile) => v.push(tile),
                None => {
                    return_error!(format!("invalid tile after {:?} in {:?}", v, s));
                }
            }
        }
        machine_words.push(v[..].into());
    }
    Ok(machine_words)
}

pub fn make_trie(alphabet: &alphabet::Alphabet, giant_string: &str) -> error::Returns<trie::Trie> {
    let machine_words = read_machine_words(alphabet, giant_string)?;
    Ok(trie::Trie::from_machine_words(&machine_words))
}

pub fn load_trie(alphabet: &alphabet::Alphabet, filename: &str) -> error::Returns<trie::Trie> {
    let t0 = std::time::Instant::now();
    let giant_string = match std::fs::read_to_string(filename) {
        Ok(x) => x,
        Err(err) => {
            return_error!(format!("cannot read dictionary {}: {}", filename, err));
        }
    };
    let t1 = std::time::Instant::now();
    let trie = make_trie(alphabet, &giant_string)?;
    let t2 = std::time::Instant::now();
    tracing::info!(
        filename,
        bytes = giant_string.len(),
        words = trie.num_words(),
        nodes = trie.num_nodes(),
        read_ns = (t1 - t0).as_nanos() as u64,
        build_ns = (t2 - t1).as_nanos() as u64,
        "loaded dictionary"
    );
    Ok(trie)
}
