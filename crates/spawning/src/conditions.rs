use world::{level::BlockQuery, BlockCoord, BlockId, BlockRegistry};

//decides whether an actor may be placed at a block position. must only read from the world
pub trait SpawnCondition: Send + Sync {
    fn is_valid(&self, pos: BlockCoord, world: &dyn BlockQuery, registry: &BlockRegistry) -> bool;
}

impl<T: Fn(BlockCoord, &dyn BlockQuery, &BlockRegistry) -> bool + Send + Sync> SpawnCondition
    for T
{
    fn is_valid(&self, pos: BlockCoord, world: &dyn BlockQuery, registry: &BlockRegistry) -> bool {
        self(pos, world, registry)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroundRule {
    //any non-penetrable block
    AnySolid,
    Block(BlockId),
}

//ground below, something the actor can stand in at the position, air above
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceCondition {
    pub ground: GroundRule,
}

impl SurfaceCondition {
    pub fn on_any_solid() -> Self {
        Self {
            ground: GroundRule::AnySolid,
        }
    }

    pub fn on_block(id: BlockId) -> Self {
        Self {
            ground: GroundRule::Block(id),
        }
    }
}

impl SpawnCondition for SurfaceCondition {
    fn is_valid(&self, pos: BlockCoord, world: &dyn BlockQuery, registry: &BlockRegistry) -> bool {
        //unloaded blocks are never valid
        let Some(below) = world.block_at(pos.below()) else {
            return false;
        };
        let on_ground = match self.ground {
            GroundRule::AnySolid => !registry.is_penetrable(below),
            GroundRule::Block(id) => below == id,
        };
        if !on_ground {
            return false;
        }
        let Some(at) = world.block_at(pos) else {
            return false;
        };
        if !registry.is_penetrable(at) {
            return false;
        }
        world.block_at(pos.above()) == Some(BlockId::EMPTY)
    }
}
