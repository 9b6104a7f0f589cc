//! Core domain types for flagsprite.
//!
//! - `FlagEntry` - one flag and its offsets in the sprite
//! - `FlagSet` - the ordered flags of one run
//! - `SpriteLayout` - strip geometry derived from the cell size and count

mod flag;
mod layout;

pub use flag::{FlagEntry, FlagSet, IdentifierCollision};
pub use layout::{CellSize, Scale, SpriteLayout};
