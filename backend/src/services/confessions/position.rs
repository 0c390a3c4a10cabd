use rand::Rng;

// Bounds of the visible starfield volume. x spans the full width of the
// scene, y and z stay closer to the camera plane.
const X_BOUND: f64 = 10.0;
const Y_BOUND: f64 = 5.0;
const Z_BOUND: f64 = 5.0;

/// Samples a star position, each axis independently uniform within its
/// bound. Non-cryptographic randomness; there is no seeding contract.
pub fn random_position() -> [f64; 3] {
    let mut rng = rand::thread_rng();
    [
        rng.gen_range(-X_BOUND..=X_BOUND),
        rng.gen_range(-Y_BOUND..=Y_BOUND),
        rng.gen_range(-Z_BOUND..=Z_BOUND),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_stay_inside_the_starfield_volume() {
        for _ in 0..1000 {
            let [x, y, z] = random_position();
            assert!((-10.0..=10.0).contains(&x));
            assert!((-5.0..=5.0).contains(&y));
            assert!((-5.0..=5.0).contains(&z));
        }
    }
}
