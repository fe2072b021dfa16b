/// One glitter dot on the splash background.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub delay: f64,
    pub duration: f64,
    // Two drift waypoints relative to (x, y), in viewport units.
    pub drift: [(f64, f64); 2],
}

/// Scatters `count` particles across the viewport using `random` (uniform in `[0, 1)`).
pub fn generate_particles(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            x: random() * 100.0,
            y: random() * 100.0,
            size: random() * 8.0 + 2.0,
            delay: random() * 2.0,
            duration: random() * 2.0 + 1.0,
            drift: [
                (random() * 20.0 - 10.0, random() * 20.0 - 10.0),
                (random() * 40.0 - 20.0, random() * 40.0 - 20.0),
            ],
        })
        .collect()
}

impl Particle {
    pub fn style(&self) -> String {
        let [(dx1, dy1), (dx2, dy2)] = self.drift;
        format!(
            "left: {:.2}vw; top: {:.2}vh; width: {:.2}px; height: {:.2}px; \
             animation-delay: {:.2}s; animation-duration: {:.2}s; \
             --dx1: {:.2}vw; --dy1: {:.2}vh; --dx2: {:.2}vw; --dy2: {:.2}vh;",
            self.x, self.y, self.size, self.size, self.delay, self.duration, dx1, dy1, dx2, dy2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_their_ranges() {
        for fixed in [0.0, 0.5, 0.999] {
            for particle in generate_particles(5, || fixed) {
                assert!((0.0..100.0).contains(&particle.x));
                assert!((0.0..100.0).contains(&particle.y));
                assert!((2.0..10.0).contains(&particle.size));
                assert!((0.0..2.0).contains(&particle.delay));
                assert!((1.0..3.0).contains(&particle.duration));
                assert!((-10.0..10.0).contains(&particle.drift[0].0));
                assert!((-20.0..20.0).contains(&particle.drift[1].1));
            }
        }
    }

    #[test]
    fn ids_follow_generation_order() {
        let particles = generate_particles(50, || 0.25);
        assert_eq!(particles.len(), 50);
        assert!(particles.iter().enumerate().all(|(i, p)| p.id == i));
    }

    #[test]
    fn style_carries_position_and_drift() {
        let particle = generate_particles(1, || 0.5).remove(0);
        assert_eq!(
            particle.style(),
            "left: 50.00vw; top: 50.00vh; width: 6.00px; height: 6.00px; \
             animation-delay: 1.00s; animation-duration: 2.00s; \
             --dx1: 0.00vw; --dy1: 0.00vh; --dx2: 0.00vw; --dy2: 0.00vh;"
        );
    }
}
