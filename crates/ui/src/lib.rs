pub mod damage_flash;

use bevy::prelude::*;
use interfaces::scheduling::LevelSystemSet;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<damage_flash::DamageFlash>()
            .add_systems(Startup, damage_flash::spawn_overlay)
            .add_systems(
                Update,
                (damage_flash::start_flash, damage_flash::end_flash)
                    .chain()
                    .in_set(LevelSystemSet::Main),
            );
    }
}
