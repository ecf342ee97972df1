use std::f32::consts::PI;

use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::{random_proportion, random_yaw};


#[test]
fn test_random_proportion_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let p = random_proportion(&mut rng);
        assert!((0.0..1.0).contains(&p));
    }
}

#[test]
fn test_random_yaw_keeps_up_axis() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let rot = random_yaw(&mut rng);
        assert!((rot * Vec3::Y - Vec3::Y).length() < 0.0001);
        let (axis, angle) = rot.to_axis_angle();
        assert!(angle <= 2.0 * PI + 0.0001);
        if angle > 0.0001 {
            assert!(axis.cross(Vec3::Y).length() < 0.001);
        }
    }
}
