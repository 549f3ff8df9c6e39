//! Writes a deterministic synthetic air-quality dataset to
//! `data/main_data.csv`, shaped like the cleaned station export the
//! dashboard expects: one row per day, columns `year` plus the six
//! pollutant measurements.

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

/// Per-pollutant generation parameters: (name, annual mean, seasonal
/// amplitude, noise std dev). Winter-peaking except O3, which peaks in
/// summer. CO dominates because the station reports it in the same unit
/// as the rest.
const POLLUTANTS: [(&str, f64, f64, f64); 6] = [
    ("PM2.5", 80.0, 30.0, 18.0),
    ("PM10", 105.0, 35.0, 22.0),
    ("SO2", 15.0, 9.0, 4.0),
    ("NO2", 55.0, 15.0, 10.0),
    ("CO", 1250.0, 400.0, 200.0),
    ("O3", 55.0, -30.0, 12.0),
];

const YEARS: std::ops::RangeInclusive<i32> = 2013..=2017;
const DAYS_PER_YEAR: usize = 365;

fn seasonal(day: usize, amplitude: f64) -> f64 {
    // Peak around New Year (winter) for positive amplitudes.
    let phase = day as f64 / DAYS_PER_YEAR as f64 * std::f64::consts::TAU;
    amplitude * phase.cos()
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all("data")?;
    let output_path = "data/main_data.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let mut header = vec!["year"];
    header.extend(POLLUTANTS.iter().map(|&(name, _, _, _)| name));
    writer.write_record(&header)?;

    let mut rows = 0usize;
    for year in YEARS {
        // A mild upward PM2.5 drift so the yearly averages peak in 2017.
        let drift = (year - 2013) as f64 * 4.0;

        for day in 0..DAYS_PER_YEAR {
            let mut row = vec![year.to_string()];
            for &(name, mean, amplitude, noise) in &POLLUTANTS {
                let base = if name == "PM2.5" { mean + drift } else { mean };
                let value = (base + seasonal(day, amplitude) + rng.gauss(0.0, noise)).max(0.0);
                row.push(format!("{value:.1}"));
            }
            writer.write_record(&row)?;
            rows += 1;
        }
    }

    writer.flush()?;
    println!("Wrote {rows} records to {output_path}");
    Ok(())
}
