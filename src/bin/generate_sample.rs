//! Writes a synthetic `measure.csv`: a thermal-style measurement frame with
//! an ambient level, a few Gaussian hot spots and sensor noise.

fn gaussian2(row: f64, col: f64, center: (f64, f64), sigma: f64, amplitude: f64) -> f64 {
    let dr = row - center.0;
    let dc = col - center.1;
    amplitude * (-(dr * dr + dc * dc) / (2.0 * sigma * sigma)).exp()
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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let (rows, cols) = (24usize, 32usize);
    let ambient = 20.5;
    let noise_level = 0.08;

    // (center row, center col), spread, peak °C above ambient
    let hot_spots = [
        ((6.0, 8.0), 3.0, 12.5),
        ((15.0, 22.0), 4.5, 8.0),
        ((20.0, 5.0), 2.0, 5.5),
    ];

    let output_path = "measure.csv";
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(output_path)
        .expect("Failed to create output file");

    for row in 0..rows {
        let record: Vec<String> = (0..cols)
            .map(|col| {
                let signal: f64 = hot_spots
                    .iter()
                    .map(|&(center, sigma, amp)| {
                        gaussian2(row as f64, col as f64, center, sigma, amp)
                    })
                    .sum();
                let value = ambient + signal + rng.gauss(0.0, noise_level);
                format!("{value:.3}")
            })
            .collect();
        writer.write_record(&record).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote a {rows} × {cols} measurement frame to {output_path}");
}
