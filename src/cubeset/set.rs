use std::mem;

use super::cuboid::Cuboid;
use super::instruction::{Instruction, State};

/// Set of active unit cubes, stored as a cover of pairwise-disjoint
/// cuboids. Every operation rewrites overlapping cover members into
/// fragments, so disjointness holds after each `apply` and the total
/// volume is just the sum over the cover.
#[derive(Debug, Default, Clone)]
pub struct CuboidSet {
    cover: Vec<Cuboid>,
}

impl CuboidSet {
    pub fn new() -> CuboidSet {
        CuboidSet::default()
    }

    pub fn cuboids(&self) -> &[Cuboid] {
        &self.cover
    }

    pub fn len(&self) -> usize {
        self.cover.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cover.is_empty()
    }

    /// Total number of active unit cubes.
    pub fn active_volume(&self) -> u64 {
        self.cover.iter().map(Cuboid::volume).sum()
    }

    /// Turn every cube in `target` on or off.
    ///
    /// On: whittle `target` down against each cover member in turn, keeping
    /// only the pieces not already covered, then add those. Off: replace
    /// each cover member overlapping `target` by its fragments outside
    /// `target`. Either way no two cover members ever overlap.
    pub fn apply(&mut self, state: State, target: Cuboid) {
        log::debug!(
            "{} {} against {} existing cuboids",
            state,
            target,
            self.cover.len()
        );
        match state {
            State::On => {
                let mut remaining = vec![target];
                for existing in &self.cover {
                    if remaining.is_empty() {
                        break;
                    }
                    let mut next = Vec::with_capacity(remaining.len());
                    for fragment in remaining {
                        match fragment.split_against(existing) {
                            None => next.push(fragment),
                            Some(split) => next.extend(split.self_fragments),
                        }
                    }
                    remaining = next;
                }
                self.cover.extend(remaining);
            }
            State::Off => {
                let old = mem::take(&mut self.cover);
                for existing in old {
                    match existing.split_against(&target) {
                        None => self.cover.push(existing),
                        Some(split) => self.cover.extend(split.self_fragments),
                    }
                }
            }
        }
    }

    /// Run a whole reboot sequence in order.
    pub fn apply_all(&mut self, instructions: &[Instruction]) {
        for instruction in instructions {
            self.apply(instruction.state, instruction.cuboid);
        }
        log::debug!(
            "cover holds {} cuboids, {} cubes lit",
            self.cover.len(),
            self.active_volume()
        );
    }
}
