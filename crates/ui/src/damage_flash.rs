use std::time::Duration;

use bevy::prelude::*;
use interfaces::components::{DamageTakenEvent, LocalPlayer};

const FLASH_DURATION: Duration = Duration::from_millis(150);

//red tint over the whole screen while the local player's damage flash is active
#[derive(Component, Clone, Copy)]
#[component(storage = "SparseSet")]
pub struct DamageFlashOverlay;

#[derive(Resource, Clone, Copy, Debug)]
pub struct DamageFlash {
    pub active: bool,
    pub shown_at: Duration,
    pub duration: Duration,
}

impl Default for DamageFlash {
    fn default() -> Self {
        Self {
            active: false,
            shown_at: Duration::ZERO,
            duration: FLASH_DURATION,
        }
    }
}

impl DamageFlash {
    //returns true if this started a new flash. hits during a flash don't extend it
    pub fn on_damaged(&mut self, now: Duration) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.shown_at = now;
        true
    }

    pub fn should_hide(&self, now: Duration) -> bool {
        self.active && self.shown_at + self.duration < now
    }
}

pub fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        Name::new("Damage flash"),
        DamageFlashOverlay,
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::srgba(1.0, 0.0, 0.0, 0.3)),
        Visibility::Hidden,
    ));
}

pub fn start_flash(
    mut reader: EventReader<DamageTakenEvent>,
    player_query: Query<Entity, With<LocalPlayer>>,
    mut overlay_query: Query<&mut Visibility, With<DamageFlashOverlay>>,
    mut flash: ResMut<DamageFlash>,
    time: Res<Time>,
) {
    let Ok(player) = player_query.get_single() else {
        reader.clear();
        return;
    };
    for event in reader.read() {
        if event.target == player && flash.on_damaged(time.elapsed()) {
            for mut vis in overlay_query.iter_mut() {
                *vis = Visibility::Inherited;
            }
        }
    }
}

pub fn end_flash(
    mut overlay_query: Query<&mut Visibility, With<DamageFlashOverlay>>,
    mut flash: ResMut<DamageFlash>,
    time: Res<Time>,
) {
    if flash.should_hide(time.elapsed()) {
        flash.active = false;
        for mut vis in overlay_query.iter_mut() {
            *vis = Visibility::Hidden;
        }
    }
}
