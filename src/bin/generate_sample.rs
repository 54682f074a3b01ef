use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const DT: f64 = 0.01;
const STEPS: usize = 600;
const PARTICLES: usize = 5;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }
}

/// A disc moving in the box, reflecting elastically off the walls.
struct Particle {
    pos: [f64; 2],
    vel: [f64; 2],
    radius: f64,
}

impl Particle {
    fn step(&mut self, dt: f64) {
        let bounds = [WIDTH, HEIGHT];
        for axis in 0..2 {
            self.pos[axis] += self.vel[axis] * dt;
            let (lo, hi) = (self.radius, bounds[axis] - self.radius);
            if self.pos[axis] < lo {
                self.pos[axis] = 2.0 * lo - self.pos[axis];
                self.vel[axis] = -self.vel[axis];
            } else if self.pos[axis] > hi {
                self.pos[axis] = 2.0 * hi - self.pos[axis];
                self.vel[axis] = -self.vel[axis];
            }
        }
    }
}

fn write_trajectory(dir: &Path, id: usize, particle: &mut Particle) -> Result<PathBuf> {
    let path = dir.join(format!("trayectoria_{id}.txt"));
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    for _ in 0..STEPS {
        particle.step(DT);
        writeln!(out, "{:.3} {:.3}", particle.pos[0], particle.pos[1])?;
    }
    out.flush()?;
    Ok(path)
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);
    for id in 0..PARTICLES {
        let radius = rng.uniform(5.0, 15.0);
        let mut particle = Particle {
            pos: [
                rng.uniform(radius, WIDTH - radius),
                rng.uniform(radius, HEIGHT - radius),
            ],
            vel: [rng.uniform(-300.0, 300.0), rng.uniform(-300.0, 300.0)],
            radius,
        };
        let path = write_trajectory(&dir, id, &mut particle)?;
        println!("Wrote {STEPS} positions to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_stays_inside_the_box() {
        let mut p = Particle {
            pos: [WIDTH - 12.0, 11.0],
            vel: [500.0, -500.0],
            radius: 10.0,
        };
        for _ in 0..1000 {
            p.step(DT);
            assert!(p.pos[0] >= p.radius && p.pos[0] <= WIDTH - p.radius);
            assert!(p.pos[1] >= p.radius && p.pos[1] <= HEIGHT - p.radius);
        }
    }

    #[test]
    fn wall_hit_reverses_velocity() {
        let mut p = Particle {
            pos: [15.0, 300.0],
            vel: [-1000.0, 0.0],
            radius: 10.0,
        };
        p.step(DT);
        assert_eq!(p.vel, [1000.0, 0.0]);
        assert!((p.pos[0] - 15.0).abs() < 1e-9);
    }

    #[test]
    fn output_matches_simulator_format() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut p = Particle {
            pos: [100.0, 100.0],
            vel: [100.0, 50.0],
            radius: 5.0,
        };
        let path = write_trajectory(dir.path(), 3, &mut p).unwrap();
        assert!(path.ends_with("trayectoria_3.txt"));

        let text = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), STEPS);
        assert_eq!(lines[0], "101.000 100.500");
    }
}
