// Copyright (C) 2020-2026 Andy Kurnia.

// Small keyed sets for move dedup. Not resistant to adversarial input.

#[derive(Default)]
pub struct MyHasher(u64);

const MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c15;

impl MyHasher {
    #[inline(always)]
    fn mix(&mut self, x: u64) {
        self.0 = (self.0.rotate_left(5) ^ x).wrapping_mul(MULTIPLIER);
    }
}

impl std::hash::Hasher for MyHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(8);
        for chunk in &mut chunks {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            self.mix(u64::from_le_bytes(word));
        }
        for &b in chunks.remainder() {
            self.mix(b as u64);
        }
    }

    #[inline(always)]
    fn write_u8(&mut self, x: u8) {
        self.mix(x as u64);
    }

    #[inline(always)]
    fn write_usize(&mut self, x: usize) {
        self.mix(x as u64);
    }
}

pub type MyHasherDefault = std::hash::BuildHasherDefault<MyHasher>;
pub type MyHashSet<T> = std::collections::HashSet<T, MyHasherDefault>;
