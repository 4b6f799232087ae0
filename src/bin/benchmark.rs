//! Performance benchmark comparing serial and parallel generation steps,
//! plus RLE decoding throughput

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use conway_life::{Grid, Placement, rle};

const GOSPER_GUN: &str = include_str!("../../patterns/gosper_glider_gun.rle");

fn seeded_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size).expect("benchmark sizes are positive");
    grid.randomize_with(&mut StdRng::seed_from_u64(size as u64));
    grid
}

fn benchmark_step(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_step_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Tile the Gosper gun across the grid, returning ms per full load pass
fn benchmark_rle_tiling(size: usize, passes: u32) -> (f64, usize) {
    let mut grid = Grid::new(size, size).expect("benchmark sizes are positive");
    let mut placed = 0;

    let start = Instant::now();
    for _ in 0..passes {
        placed = 0;
        for oy in (0..size as i32).step_by(12) {
            for ox in (0..size as i32).step_by(40) {
                let placement = Placement { offset_x: ox, offset_y: oy, clear_before: ox == 0 && oy == 0 };
                placed += rle::load_str(&mut grid, GOSPER_GUN, placement).cells_placed;
            }
        }
    }
    (start.elapsed().as_secs_f64() * 1000.0 / passes as f64, placed)
}

fn main() {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [30, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_step(size, iterations);
        let parallel_ms = benchmark_step_parallel(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== RLE stamping (Gosper gun tiled over 1000x1000) ===\n");

    let (load_ms, placed) = benchmark_rle_tiling(1000, 5);
    println!("{:.2} ms/pass, {} cells placed", load_ms, placed);
}
