use bevy::prelude::*;

use crate::BlockName;

use super::chunk::ChunkCoord;

#[derive(Resource)]
pub struct Settings {
    //relative to the working directory
    pub spawnables_path: &'static str,
    //chunks generated around the origin before the level counts as loaded
    pub init_radius: ChunkCoord,
    pub chunks_per_frame: usize,
    pub ground_height: i32,
    pub surface_block: BlockName,
    pub filler_block: BlockName,
    pub decoration_block: Option<BlockName>,
    //seeds the spawners' rngs. None uses entropy
    pub spawn_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spawnables_path: "assets/spawnables.ron",
            init_radius: ChunkCoord::new(4, 1, 4),
            chunks_per_frame: 16,
            ground_height: 0,
            surface_block: BlockName::core("grass"),
            filler_block: BlockName::core("stone"),
            decoration_block: Some(BlockName::core("tall_grass")),
            spawn_seed: None,
        }
    }
}
