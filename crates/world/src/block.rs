use ahash::HashMap;
use bevy::prelude::*;
use interfaces::components::Id;
use serde::{Deserialize, Serialize};

use crate::chunk::{ChunkCoord, CHUNK_SIZE_I32};

#[derive(Default, Clone, Debug, PartialEq, Eq, Hash, Component, Reflect, Serialize, Deserialize)]
pub struct BlockName {
    pub namespace: String,
    pub name: String,
}

impl BlockName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
    //creates a name for the core namespace
    pub fn core(name: impl Into<String>) -> Self {
        Self::new("core", name)
    }
}

impl std::fmt::Display for BlockName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

//block ids may not be stable across program runs. to get a specific id for a block,
// use block registry
#[derive(
    Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Component, Reflect, Serialize, Deserialize,
)]
pub struct BlockId(pub Id);

impl BlockId {
    //air
    pub const EMPTY: BlockId = BlockId(Id::Empty);
}

impl From<Id> for BlockId {
    fn from(value: Id) -> Self {
        Self(value)
    }
}

impl From<BlockId> for Id {
    fn from(value: BlockId) -> Self {
        value.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum BlockPhysics {
    #[default]
    Solid,
    //actors can stand inside (tall grass, flowers, air)
    Empty,
}

impl BlockPhysics {
    pub fn is_penetrable(self) -> bool {
        matches!(self, BlockPhysics::Empty)
    }
}

#[derive(Resource, Default)]
pub struct BlockRegistry {
    id_map: HashMap<BlockName, BlockId>,
    names: Vec<BlockName>,
    physics: Vec<BlockPhysics>,
}

impl BlockRegistry {
    //returns the existing id if the name was already registered
    pub fn add_basic(&mut self, name: BlockName, physics: BlockPhysics) -> BlockId {
        if let Some(id) = self.id_map.get(&name) {
            warn!("block {} registered twice, keeping the first definition", name);
            return *id;
        }
        let id = BlockId(Id::Basic(self.names.len() as u32));
        self.names.push(name.clone());
        self.physics.push(physics);
        self.id_map.insert(name, id);
        id
    }

    pub fn get_id(&self, name: &BlockName) -> Option<BlockId> {
        self.id_map.get(name).copied()
    }

    pub fn get_name(&self, id: BlockId) -> Option<&BlockName> {
        match id.0 {
            Id::Empty => None,
            Id::Basic(idx) => self.names.get(idx as usize),
        }
    }

    pub fn get_physics(&self, id: BlockId) -> Option<BlockPhysics> {
        match id.0 {
            Id::Empty => Some(BlockPhysics::Empty),
            Id::Basic(idx) => self.physics.get(idx as usize).copied(),
        }
    }

    //unknown ids are treated as solid
    pub fn is_penetrable(&self, id: BlockId) -> bool {
        self.get_physics(id)
            .map(BlockPhysics::is_penetrable)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(
    Component, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize,
)]
pub struct BlockCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> BlockCoord {
        BlockCoord { x, y, z }
    }
    //returns coordinate at negative corner of block
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
    pub fn below(self) -> BlockCoord {
        BlockCoord::new(self.x, self.y - 1, self.z)
    }
    pub fn above(self) -> BlockCoord {
        BlockCoord::new(self.x, self.y + 1, self.z)
    }
}

impl From<Vec3> for BlockCoord {
    fn from(v: Vec3) -> Self {
        BlockCoord::new(v.x.floor() as i32, v.y.floor() as i32, v.z.floor() as i32)
    }
}

impl From<IVec3> for BlockCoord {
    fn from(v: IVec3) -> Self {
        BlockCoord::new(v.x, v.y, v.z)
    }
}

impl From<BlockCoord> for IVec3 {
    fn from(v: BlockCoord) -> Self {
        IVec3::new(v.x, v.y, v.z)
    }
}

//negative corner of the chunk
impl From<ChunkCoord> for BlockCoord {
    fn from(v: ChunkCoord) -> Self {
        BlockCoord::new(
            v.x * CHUNK_SIZE_I32,
            v.y * CHUNK_SIZE_I32,
            v.z * CHUNK_SIZE_I32,
        )
    }
}
