use std::ops::{Index, IndexMut};

use bevy::prelude::*;
use util::iterators::Volume;

use crate::{BlockCoord, BlockId};

pub const CHUNK_SIZE: usize = 32;
pub const CHUNK_SIZE_I32: i32 = CHUNK_SIZE as i32;
pub const CHUNK_SIZE_U8: u8 = CHUNK_SIZE as u8;
pub const BLOCKS_PER_CHUNK: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> ChunkCoord {
        ChunkCoord { x, y, z }
    }
    //every block in the chunk
    pub fn volume(self) -> Volume {
        Volume::from_extents(BlockCoord::from(self).into(), IVec3::splat(CHUNK_SIZE_I32))
    }
}

impl From<BlockCoord> for ChunkCoord {
    fn from(v: BlockCoord) -> Self {
        ChunkCoord::new(
            v.x.div_euclid(CHUNK_SIZE_I32),
            v.y.div_euclid(CHUNK_SIZE_I32),
            v.z.div_euclid(CHUNK_SIZE_I32),
        )
    }
}

//position of a block inside its chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkIdx {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl ChunkIdx {
    pub const fn new(x: u8, y: u8, z: u8) -> ChunkIdx {
        ChunkIdx { x, y, z }
    }
    pub fn from_usize(i: usize) -> ChunkIdx {
        let x = i / (CHUNK_SIZE * CHUNK_SIZE);
        let y = (i - x * CHUNK_SIZE * CHUNK_SIZE) / CHUNK_SIZE;
        let z = i - x * CHUNK_SIZE * CHUNK_SIZE - y * CHUNK_SIZE;
        ChunkIdx {
            x: x as u8,
            y: y as u8,
            z: z as u8,
        }
    }
    pub fn to_usize(self) -> usize {
        (self.x as usize) * CHUNK_SIZE * CHUNK_SIZE
            + (self.y as usize) * CHUNK_SIZE
            + (self.z as usize)
    }
}

impl From<BlockCoord> for ChunkIdx {
    fn from(v: BlockCoord) -> Self {
        ChunkIdx::new(
            v.x.rem_euclid(CHUNK_SIZE_I32) as u8,
            v.y.rem_euclid(CHUNK_SIZE_I32) as u8,
            v.z.rem_euclid(CHUNK_SIZE_I32) as u8,
        )
    }
}

#[derive(Clone)]
pub struct Chunk {
    blocks: Box<[BlockId]>,
    pub position: ChunkCoord,
}

impl Chunk {
    //all air
    pub fn new(position: ChunkCoord) -> Chunk {
        Chunk {
            blocks: vec![BlockId::EMPTY; BLOCKS_PER_CHUNK].into_boxed_slice(),
            position,
        }
    }
}

impl Index<ChunkIdx> for Chunk {
    type Output = BlockId;
    fn index(&self, index: ChunkIdx) -> &BlockId {
        &self.blocks[index.to_usize()]
    }
}

impl IndexMut<ChunkIdx> for Chunk {
    fn index_mut(&mut self, index: ChunkIdx) -> &mut BlockId {
        &mut self.blocks[index.to_usize()]
    }
}
