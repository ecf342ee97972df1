pub mod components;
pub mod scheduling;

use bevy::prelude::*;

pub struct InterfacesPlugin;

impl Plugin for InterfacesPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(scheduling::SchedulingPlugin)
            .add_event::<components::DamageTakenEvent>();
    }
}
