pub use self::{grid::*, score::*, share::*, symbol::*};

pub(crate) mod grid;
pub(crate) mod score;
pub(crate) mod share;
pub(crate) mod symbol;
