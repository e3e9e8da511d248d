use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Pipe section: 4 ft long, 1 ft across, in metres.
const LENGTH: f64 = 1.2192;
const RADIUS: f64 = 0.1524;
const RINGS: usize = 240;
const POINTS_PER_RING: usize = 90;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

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

    /// Uniform in `[-amplitude, amplitude)`.
    fn jitter(&mut self, amplitude: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        (unit * 2.0 - 1.0) * amplitude
    }
}

/// One scanned point: position on the pipe wall plus return intensity.
/// A dent halfway along pulls the wall inwards and darkens the return.
fn scan_point(ring: usize, step: usize, rng: &mut SimpleRng) -> [f64; 4] {
    let z = LENGTH * ring as f64 / (RINGS - 1) as f64;
    let theta = std::f64::consts::TAU * step as f64 / POINTS_PER_RING as f64;

    let dent = gaussian(z, LENGTH / 2.0, 0.06, 1.0) * gaussian(theta, 1.2, 0.35, 1.0);
    let r = RADIUS - 0.02 * dent + rng.jitter(0.0005);
    let intensity = 0.8 - 0.45 * dent + 0.05 * (theta * 3.0).sin() + rng.jitter(0.02);

    [r * theta.cos(), r * theta.sin(), z, intensity]
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = Path::new("pts/sample.pts");

    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = File::create(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut out = BufWriter::new(file);

    let total = RINGS * POINTS_PER_RING;
    writeln!(out, "{total}")?;
    for ring in 0..RINGS {
        for step in 0..POINTS_PER_RING {
            let [x, y, z, i] = scan_point(ring, step, &mut rng);
            writeln!(out, "{x:.6} {y:.6} {z:.6} {i:.4}")?;
        }
    }
    out.flush().context("writing sample points")?;

    println!(
        "Wrote {total} points ({RINGS} rings × {POINTS_PER_RING}) to {}",
        output_path.display()
    );
    Ok(())
}
