use super::chunk::ChunkCoord;
use bevy::prelude::*;

pub struct WorldEventsPlugin;

impl Plugin for WorldEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ChunkGeneratedEvent>();
    }
}

//sent once when a chunk is generated for the first time and added to the level
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkGeneratedEvent {
    pub coord: ChunkCoord,
}
