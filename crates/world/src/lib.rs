pub mod block;
pub mod chunk;
pub mod events;
pub mod generation;
pub mod level;
pub mod settings;

use bevy::prelude::*;
pub use block::*;

#[cfg(test)]
mod test;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((events::WorldEventsPlugin, generation::WorldGenPlugin))
            .init_resource::<level::Level>()
            .init_resource::<BlockRegistry>()
            .init_resource::<settings::Settings>()
            .add_systems(Startup, register_core_blocks)
            .register_type::<BlockName>()
            .register_type::<BlockId>()
            .register_type::<BlockCoord>()
            .register_type::<chunk::ChunkCoord>();
    }
}

pub fn register_core_blocks(mut registry: ResMut<BlockRegistry>) {
    registry.add_basic(BlockName::core("grass"), BlockPhysics::Solid);
    registry.add_basic(BlockName::core("dirt"), BlockPhysics::Solid);
    registry.add_basic(BlockName::core("stone"), BlockPhysics::Solid);
    registry.add_basic(BlockName::core("tall_grass"), BlockPhysics::Empty);
    info!("registered {} core blocks", registry.len());
}
