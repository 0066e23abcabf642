use rayon::prelude::*;

use super::cuboid::Cuboid;
use super::instruction::{Instruction, State};
use super::point::Point;

/// Count the active cubes inside `region` by checking every unit cube
/// against the instruction list, scanning instructions last-to-first so the
/// latest one touching a cube decides its state. Cost is proportional to
/// the region's volume, so this only suits small regions like the
/// initialization area; x-slices are farmed out to the rayon pool.
pub fn count_active(instructions: &[Instruction], region: &Cuboid) -> u64 {
    let near: Vec<&Instruction> = instructions
        .iter()
        .filter(|instruction| instruction.cuboid.intersects(region))
        .collect();
    log::debug!(
        "{} of {} instructions touch region {}",
        near.len(),
        instructions.len(),
        region
    );
    (region.xmin..=region.xmax)
        .into_par_iter()
        .map(|x| {
            let mut lit = 0u64;
            for y in region.ymin..=region.ymax {
                for z in region.zmin..=region.zmax {
                    let p = Point::new(x, y, z);
                    for instruction in near.iter().rev() {
                        if instruction.cuboid.contains(p) {
                            if instruction.state == State::On {
                                lit += 1;
                            }
                            break;
                        }
                    }
                }
            }
            lit
        })
        .sum()
}
