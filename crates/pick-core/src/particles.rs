use crate::color::Rgb;
use crate::constants::{BURST_HALF_EXTENT, BURST_POINT_COUNT, BURST_POINT_SIZE};
use crate::scene::PointCloud;
use glam::Vec3;
use rand::Rng;

/// Burst points scattered uniformly in a cube of half-extent 0.5 around `center`.
pub fn sample_burst<R: Rng>(center: Vec3, rng: &mut R) -> Vec<Vec3> {
    (0..BURST_POINT_COUNT)
        .map(|_| {
            let mut jitter = || (rng.gen::<f32>() - 0.5) * (2.0 * BURST_HALF_EXTENT);
            center + Vec3::new(jitter(), jitter(), jitter())
        })
        .collect()
}

pub fn burst_cloud<R: Rng>(center: Vec3, color: Rgb, rng: &mut R) -> PointCloud {
    PointCloud {
        points: sample_burst(center, rng),
        color,
        size: BURST_POINT_SIZE,
    }
}
