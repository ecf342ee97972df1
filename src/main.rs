//disable console window from popping up on windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use actors::ActorsPlugin;
use bevy::prelude::*;
use interfaces::{
    components::{DamageTakenEvent, LocalPlayer},
    scheduling::{GameState, LevelLoadState, LevelSystemSet},
    InterfacesPlugin,
};
use spawning::ChunkSpawnPlugin;
use ui::UIPlugin;
use world::LevelPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins((
            InterfacesPlugin,
            LevelPlugin,
            ActorsPlugin,
            ChunkSpawnPlugin,
            UIPlugin,
        ))
        .add_systems(Startup, init)
        .add_systems(OnEnter(GameState::Game), start_loading)
        .add_systems(Update, debug_damage.in_set(LevelSystemSet::Main))
        .run();
}

fn init(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    commands.spawn((
        Name::new("Camera"),
        Camera3d::default(),
        Transform::from_xyz(0.0, 20.0, 40.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("Player"),
        LocalPlayer,
        Transform::from_xyz(0.0, 1.0, 0.0),
    ));
    next_state.set(GameState::Game);
}

fn start_loading(mut next_state: ResMut<NextState<LevelLoadState>>) {
    info!("generating level");
    next_state.set(LevelLoadState::Loading);
}

//press H to hurt the player
fn debug_damage(
    keys: Res<ButtonInput<KeyCode>>,
    player_query: Query<Entity, With<LocalPlayer>>,
    mut writer: EventWriter<DamageTakenEvent>,
) {
    if !keys.just_pressed(KeyCode::KeyH) {
        return;
    }
    if let Ok(player) = player_query.get_single() {
        writer.send(DamageTakenEvent {
            attacker: None,
            target: player,
            amount: 1.0,
        });
    }
}
