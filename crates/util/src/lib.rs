pub mod iterators;

use std::f32::consts::TAU;

use bevy::{ecs::world::Command, prelude::*};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

#[cfg(test)]
mod test;

//queues an event to be sent when commands are applied
pub struct SendEventCommand<T: Event>(pub T);

impl<T: Event> Command for SendEventCommand<T> {
    fn apply(self, world: &mut World) {
        world.send_event(self.0);
    }
}

//uniform in [0,1)
pub fn random_proportion(rng: &mut impl Rng) -> f32 {
    Uniform::new(0.0, 1.0).sample(rng)
}

//rotation around +Y by a uniform angle in [0, 2pi)
pub fn random_yaw(rng: &mut impl Rng) -> Quat {
    Quat::from_axis_angle(Vec3::Y, random_proportion(rng) * TAU)
}
