// Copyright (C) 2020-2026 Andy Kurnia.

pub struct LoadError {
    s: String,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for LoadError {}

pub fn new(s: String) -> LoadError {
    LoadError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Why a board snapshot cannot be searched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Illegality {
    #[error("center square is empty")]
    CenterEmpty,
    #[error("tiles are not all connected")]
    Disconnected,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("board rejected: {0}")]
    IllegalBoard(#[from] Illegality),
    #[error("rack has invalid tile {0:?}")]
    InvalidRackTile(char),
    #[error("rack has {found} tiles, rack size is {max}")]
    RackTooLong { found: usize, max: usize },
}
