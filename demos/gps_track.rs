//! Simplifies a synthetic GPS track and prints what was kept.
//!
//! Run with: cargo run --example gps_track

use geosimplify::{Equirectangular, Simplifier};

#[derive(Debug, Clone)]
struct Fix {
    lon: f64,
    lat: f64,
    timestamp: u64,
}

/// A walk north-east through Berlin with a detour and GPS jitter.
fn generate_track() -> Vec<Fix> {
    let mut track = Vec::new();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;

    for i in 0..600u64 {
        let s = i as f64 / 600.0;
        let detour = if (200..350).contains(&i) {
            ((i - 200) as f64 / 150.0 * std::f64::consts::PI).sin() * 0.002
        } else {
            0.0
        };

        // Simple xorshift for deterministic jitter
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let jitter = (state as f64 / u64::MAX as f64 - 0.5) * 0.00004;

        track.push(Fix {
            lon: 13.38 + s * 0.03 + jitter,
            lat: 52.51 + s * 0.01 + detour - jitter,
            timestamp: 1_700_000_000 + i * 5,
        });
    }

    track
}

fn main() {
    let track = generate_track();
    let simplifier = Simplifier::euclidean(Equirectangular::new(
        |f: &Fix| (f.lon, f.lat),
        52.52,
    ));

    for metres in [1.0, 5.0, 20.0, 100.0] {
        let kept = simplifier.simplify(&track, metres);
        println!(
            "tolerance {:>5.1} m: kept {:>3} of {} fixes",
            metres,
            kept.len(),
            track.len()
        );
    }

    let kept = simplifier.simplify(&track, 20.0);
    println!();
    println!("fixes kept at 20 m:");
    for fix in &kept {
        println!("  t={} lon={:.6} lat={:.6}", fix.timestamp, fix.lon, fix.lat);
    }
}
