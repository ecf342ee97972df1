use util::iterators::Volume;
use world::{chunk::ChunkCoord, level::BlockQuery, BlockCoord, BlockRegistry};

use crate::conditions::SpawnCondition;

//every position in `volume` that passes `is_valid`, scanning from the top layer down.
//each position is visited exactly once, so the result never contains duplicates
pub fn find_spawn_sites(
    volume: Volume,
    mut is_valid: impl FnMut(BlockCoord) -> bool,
) -> Vec<BlockCoord> {
    volume
        .iter_top_down()
        .map(BlockCoord::from)
        .filter(|pos| is_valid(*pos))
        .collect()
}

pub fn find_chunk_spawn_sites(
    chunk: ChunkCoord,
    condition: &(impl SpawnCondition + ?Sized),
    world: &dyn BlockQuery,
    registry: &BlockRegistry,
) -> Vec<BlockCoord> {
    find_spawn_sites(chunk.volume(), |pos| {
        condition.is_valid(pos, world, registry)
    })
}
