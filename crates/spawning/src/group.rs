use bevy::prelude::*;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use util::{random_proportion, random_yaw};
use world::BlockCoord;

//spawning parameters for one actor type, checked once per generated chunk
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct ChunkGenerationSpawnable {
    //percent chance (0-100) that a group is attempted in a chunk
    pub probability: f32,
    //inclusive
    pub min_group_size: u32,
    //inclusive
    pub max_group_size: u32,
    //valid sites the chunk needs per entity. with min_group_size 2 and 10 here, a chunk needs 20 sites
    pub min_ground_per_entity: u32,
}

impl Default for ChunkGenerationSpawnable {
    fn default() -> Self {
        Self {
            probability: 1.0,
            min_group_size: 1,
            max_group_size: 5,
            min_ground_per_entity: 10,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum GroupSizeRule {
    //uniform in [min_group_size, max_count]
    #[default]
    Bounded,
    //random(max_count - min_group_size) + max_group_size. only kept so old spawn tables behave the same.
    //can exceed max_group_size and the number of sites
    Legacy,
    //random(max_count - min_group_size) + min_group_size, how the old zombie spawner sized groups.
    //never reaches max_count and has no single-member shortcut
    LegacyMinOffset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    InvalidGroupSize { min: u32, max: u32 },
    EmptyGroupRange { min: u32, max_count: usize },
    NotEnoughSites { requested: usize, available: usize },
}

impl std::fmt::Display for SpawnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnError::InvalidGroupSize { min, max } => write!(
                f,
                "invalid group size {}..={} (need 1 <= min <= max)",
                min, max
            ),
            SpawnError::EmptyGroupRange { min, max_count } => write!(
                f,
                "legacy group size range is empty (max count {} <= min group size {})",
                max_count, min
            ),
            SpawnError::NotEnoughSites {
                requested,
                available,
            } => write!(
                f,
                "legacy group size {} needs more than the {} valid sites",
                requested, available
            ),
        }
    }
}

impl std::error::Error for SpawnError {}

impl ChunkGenerationSpawnable {
    pub fn validate(&self) -> Result<(), SpawnError> {
        if self.min_group_size == 0 || self.max_group_size < self.min_group_size {
            return Err(SpawnError::InvalidGroupSize {
                min: self.min_group_size,
                max: self.max_group_size,
            });
        }
        Ok(())
    }

    //one roll in [0, 100)
    pub fn passes_gate(&self, rng: &mut impl Rng) -> bool {
        self.probability > random_proportion(rng) * 100.0
    }

    //at least one, even when min_ground_per_entity is 0
    pub fn required_sites(&self) -> usize {
        (self.min_group_size as usize * self.min_ground_per_entity as usize).max(1)
    }

    //how many entities to spawn given `site_count` valid sites. 0 if there isn't enough room.
    //Bounded never asks for more than `site_count`, the legacy rules return an error instead
    pub fn group_size(
        &self,
        site_count: usize,
        rule: GroupSizeRule,
        rng: &mut impl Rng,
    ) -> Result<usize, SpawnError> {
        self.validate()?;
        if site_count < self.required_sites() {
            return Ok(0);
        }
        let min = self.min_group_size as usize;
        let max = self.max_group_size as usize;
        let max_count = max.min(site_count / min);
        let count = match rule {
            GroupSizeRule::Bounded if max == 1 => 1,
            GroupSizeRule::Bounded => {
                if max_count < min {
                    return Ok(0);
                }
                Uniform::new_inclusive(min, max_count).sample(rng)
            }
            GroupSizeRule::Legacy if max == 1 => 1,
            GroupSizeRule::Legacy => self.legacy_offset(max_count, rng)? + max,
            GroupSizeRule::LegacyMinOffset => self.legacy_offset(max_count, rng)? + min,
        };
        if count > site_count {
            return Err(SpawnError::NotEnoughSites {
                requested: count,
                available: site_count,
            });
        }
        Ok(count)
    }

    //random(max_count - min_group_size), which has nothing to pick from when max_count <= min_group_size
    fn legacy_offset(&self, max_count: usize, rng: &mut impl Rng) -> Result<usize, SpawnError> {
        let min = self.min_group_size as usize;
        if max_count <= min {
            return Err(SpawnError::EmptyGroupRange {
                min: self.min_group_size,
                max_count,
            });
        }
        Ok(rng.gen_range(0..max_count - min))
    }
}

//picks a group size, then that many distinct sites. `spawn` gets each site with a random yaw.
//returns how many were spawned
pub fn spawn_group(
    mut sites: Vec<BlockCoord>,
    spawnable: &ChunkGenerationSpawnable,
    rule: GroupSizeRule,
    rng: &mut impl Rng,
    mut spawn: impl FnMut(BlockCoord, Quat),
) -> Result<usize, SpawnError> {
    let count = spawnable.group_size(sites.len(), rule, rng)?;
    for _ in 0..count {
        let site = sites.swap_remove(rng.gen_range(0..sites.len()));
        spawn(site, random_yaw(rng));
    }
    Ok(count)
}
