//! Print a Koch snowflake (or fractal curve) as `x y` lines.
//!
//! Usage:
//!   cargo run -p polyfract --example snowflake -- koch 3
//!   cargo run -p polyfract --example snowflake -- fractal 2
//!
//! Starts from the equilateral triangle inscribed in the unit circle and prints
//! the vertex count per generation to stderr.

use polyfract::rand2::regular_polygon;
use polyfract::rules::Rule;
use polyfract::sequence::CurveGenerator;

fn main() {
    let mut args = std::env::args().skip(1);
    let rule: Rule = match args.next().as_deref().unwrap_or("koch").parse() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: snowflake [koch|fractal] [generations]");
            return;
        }
    };
    let generations: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let triangle = regular_polygon(3, 1.0, std::f64::consts::FRAC_PI_2).expect("triangle");
    let mut gen = CurveGenerator::new(triangle, rule).expect("closed polygon");
    for _ in 0..generations {
        let n = gen.step().expect("generation").len();
        eprintln!("generation {}: {n} vertices", gen.generation());
    }
    for p in gen.vertices() {
        println!("{:.6} {:.6}", p.x, p.y);
    }
}
