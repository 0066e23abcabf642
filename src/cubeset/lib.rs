pub mod cuboid;
pub mod instruction;
pub mod point;
pub mod pointwise;
pub mod set;

pub use cuboid::{Coord, Cuboid, Split};
pub use instruction::{parse_instructions, Instruction, State};
pub use point::Point;
pub use set::CuboidSet;
