// Copyright (C) 2020-2026 Andy Kurnia.

// Prefix tree over tiles 1..=26, stored as an arena.
// Node 0 is the root. A child index of 0 means no child, which works because
// the root is never anyone's child.

use super::alphabet;

pub const NUM_LETTERS: usize = 26;

#[derive(Clone)]
pub struct Node {
    children: [u32; NUM_LETTERS],
    accepts: bool,
}

impl Node {
    #[inline(always)]
    fn new() -> Self {
        Self {
            children: [0; NUM_LETTERS],
            accepts: false,
        }
    }

    #[inline(always)]
    pub fn accepts(&self) -> bool {
        self.accepts
    }

    // tile must be valid.
    #[inline(always)]
    pub fn arc(&self, tile: u8) -> Option<u32> {
        match self.children[tile as usize - 1] {
            0 => None,
            p => Some(p),
        }
    }
}

pub struct Trie {
    nodes: Vec<Node>,
    num_words: u32,
}

impl std::ops::Index<u32> for Trie {
    type Output = Node;

    #[inline(always)]
    fn index(&self, i: u32) -> &Node {
        &self.nodes[i as usize]
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[inline(always)]
fn is_letter(tile: u8) -> bool {
    tile >= 1 && tile as usize <= NUM_LETTERS
}

impl Trie {
    pub const ROOT: u32 = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            num_words: 0,
        }
    }

    pub fn from_machine_words(machine_words: &[Box<[u8]>]) -> Self {
        let mut trie = Self::new();
        for word in machine_words {
            trie.insert(word);
        }
        trie
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    // Returns false (and changes nothing) for an empty word or a non-letter.
    // Re-inserting an existing word is harmless.
    pub fn insert(&mut self, word: &[u8]) -> bool {
        if word.is_empty() || !word.iter().all(|&tile| is_letter(tile)) {
            return false;
        }
        let mut p = Self::ROOT;
        for &tile in word {
            p = match self[p].arc(tile) {
                Some(q) => q,
                None => {
                    let q = self.nodes.len() as u32;
                    self.nodes.push(Node::new());
                    self.nodes[p as usize].children[tile as usize - 1] = q;
                    q
                }
            };
        }
        let node = &mut self.nodes[p as usize];
        if !node.accepts {
            node.accepts = true;
            self.num_words += 1;
        }
        true
    }

    #[inline(always)]
    pub fn seek(&self, p: u32, tile: u8) -> Option<u32> {
        if is_letter(tile) {
            self[p].arc(tile)
        } else {
            None
        }
    }

    pub fn seek_all(&self, mut p: u32, tiles: &[u8]) -> Option<u32> {
        for &tile in tiles {
            p = self.seek(p, tile)?;
        }
        Some(p)
    }

    pub fn contains(&self, word: &[u8]) -> bool {
        !word.is_empty()
            && self
                .seek_all(Self::ROOT, word)
                .is_some_and(|p| self[p].accepts())
    }

    // Case-insensitive. Anything outside the alphabet is not a word.
    pub fn contains_str(&self, alphabet: &alphabet::Alphabet, word: &str) -> bool {
        let mut tiles = Vec::with_capacity(word.len());
        for c in word.chars() {
            match alphabet.tile_of(c) {
                Some(tile) => tiles.push(tile),
                None => return false,
            }
        }
        self.contains(&tiles)
    }
}
