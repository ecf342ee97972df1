pub mod deer;
pub mod spawning;
pub mod zombie;

use bevy::prelude::*;

pub struct ActorsPlugin;

impl Plugin for ActorsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            spawning::SpawningPlugin,
            zombie::ZombiePlugin,
            deer::DeerPlugin,
        ));
    }
}
