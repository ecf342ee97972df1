use bevy::prelude::*;
use dashmap::DashMap;

use crate::{
    chunk::{Chunk, ChunkCoord, ChunkIdx},
    BlockCoord, BlockId,
};

//read-only view of block storage
pub trait BlockQuery {
    //None if the containing chunk isn't loaded
    fn block_at(&self, coord: BlockCoord) -> Option<BlockId>;
}

#[derive(Resource, Default)]
pub struct Level {
    chunks: DashMap<ChunkCoord, Chunk, ahash::RandomState>,
}

impl Level {
    pub fn new() -> Level {
        Level {
            chunks: DashMap::with_hasher(ahash::RandomState::new()),
        }
    }

    //returns the chunk that was replaced, if any
    pub fn add_chunk(&self, chunk: Chunk) -> Option<Chunk> {
        self.chunks.insert(chunk.position, chunk)
    }

    pub fn contains_chunk(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn get_block(&self, coord: BlockCoord) -> Option<BlockId> {
        self.chunks
            .get(&ChunkCoord::from(coord))
            .map(|chunk| chunk[ChunkIdx::from(coord)])
    }

    //returns false if the chunk isn't loaded
    pub fn set_block(&self, coord: BlockCoord, id: BlockId) -> bool {
        match self.chunks.get_mut(&ChunkCoord::from(coord)) {
            Some(mut chunk) => {
                chunk[ChunkIdx::from(coord)] = id;
                true
            }
            None => false,
        }
    }
}

impl BlockQuery for Level {
    fn block_at(&self, coord: BlockCoord) -> Option<BlockId> {
        self.get_block(coord)
    }
}
