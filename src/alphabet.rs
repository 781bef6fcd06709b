// Copyright (C) 2020-2026 Andy Kurnia.

pub struct Tile<'a> {
    label: &'a str,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile<'a>],
    num_tiles: u16,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    // includes the empty placeholder at index 0.
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    #[inline(always)]
    fn get(&self, idx: u8) -> &'a Tile<'a> {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        match self {
            Alphabet::Static(x) => x.num_tiles,
        }
    }

    #[inline(always)]
    pub fn is_tile(&self, idx: u8) -> bool {
        idx != 0 && idx < self.len()
    }

    #[inline(always)]
    pub fn from_board(&self, idx: u8) -> Option<&'a str> {
        if self.is_tile(idx) {
            Some(self.get(idx).label)
        } else {
            None
        }
    }

    // 0 for anything that is not a tile.
    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        if self.is_tile(idx) {
            self.get(idx).score
        } else {
            0
        }
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        if self.is_tile(idx) {
            self.get(idx).freq
        } else {
            0
        }
    }

    // Case-insensitive. Labels are single characters.
    pub fn tile_of(&self, c: char) -> Option<u8> {
        let upper = c.to_ascii_uppercase();
        (1..self.len()).find(|&idx| {
            let mut label_chars = self.get(idx).label.chars();
            label_chars.next() == Some(upper) && label_chars.next().is_none()
        })
    }

    pub fn fmt_word(&self, tiles: &[u8]) -> String {
        let mut s = String::with_capacity(tiles.len());
        for &tile in tiles {
            s.push_str(self.from_board(tile).unwrap_or("?"));
        }
        s
    }
}

static ENGLISH_TILES: &[Tile] = &[
    Tile {
        label: "_",
        freq: 0,
        score: 0,
    },
    Tile {
        label: "A",
        freq: 9,
        score: 1,
    },
    Tile {
        label: "B",
        freq: 2,
        score: 3,
    },
    Tile {
        label: "C",
        freq: 2,
        score: 3,
    },
    Tile {
        label: "D",
        freq: 4,
        score: 2,
    },
    Tile {
        label: "E",
        freq: 12,
        score: 1,
    },
    Tile {
        label: "F",
        freq: 2,
        score: 4,
    },
    Tile {
        label: "G",
        freq: 3,
        score: 2,
    },
    Tile {
        label: "H",
        freq: 2,
        score: 4,
    },
    Tile {
        label: "I",
        freq: 9,
        score: 1,
    },
    Tile {
        label: "J",
        freq: 1,
        score: 8,
    },
    Tile {
        label: "K",
        freq: 1,
        score: 5,
    },
    Tile {
        label: "L",
        freq: 4,
        score: 1,
    },
    Tile {
        label: "M",
        freq: 2,
        score: 3,
    },
    Tile {
        label: "N",
        freq: 6,
        score: 1,
    },
    Tile {
        label: "O",
        freq: 8,
        score: 1,
    },
    Tile {
        label: "P",
        freq: 2,
        score: 3,
    },
    Tile {
        label: "Q",
        freq: 1,
        score: 10,
    },
    Tile {
        label: "R",
        freq: 6,
        score: 1,
    },
    Tile {
        label: "S",
        freq: 4,
        score: 1,
    },
    Tile {
        label: "T",
        freq: 6,
        score: 1,
    },
    Tile {
        label: "U",
        freq: 4,
        score: 1,
    },
    Tile {
        label: "V",
        freq: 2,
        score: 4,
    },
    Tile {
        label: "W",
        freq: 2,
        score: 4,
    },
    Tile {
        label: "X",
        freq: 1,
        score: 8,
    },
    Tile {
        label: "Y",
        freq: 2,
        score: 4,
    },
    Tile {
        label: "Z",
        freq: 1,
        score: 10,
    },
];

pub fn make_english_alphabet<'a>() -> Alphabet<'a> {
    Alphabet::Static(StaticAlphabet {
        tiles: ENGLISH_TILES,
        num_tiles: 98,
    })
}
