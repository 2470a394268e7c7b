//! Rally quickstart: build, edit and store a drill from scratch.
//!
//! Demonstrates:
//!   1. Generating a free sequence that alternates between the two spaces
//!   2. Generating a sequence under a travel-distance window
//!   3. Extending it and appending a manual shot with a neighbour check
//!   4. Writing the drill to the stored record shape and reading it back
//!
//! Run with:
//!   cargo run --example quickstart

use rally_core::{Depth, Horizontal, Position, Side};
use rally_engine::{GeneratorConfig, SequenceGenerator, SequenceRecord};
use rally_field::{DistanceWindow, Field, MirroredCourt};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ─── Drill parameters ───────────────────────────────────────────

const SEED: u64 = 42;
const SHOTS: usize = 8;
const MIN_TRAVEL: f64 = 1.0;
const MAX_TRAVEL: f64 = 4.5;

fn print_sequence(title: &str, generator: &SequenceGenerator, seq: &rally_engine::Sequence) {
    println!("{title}");
    let steps = seq.step_distances(generator.field());
    for (i, shot) in seq.iter().enumerate() {
        match i.checked_sub(1).and_then(|j| steps.get(j)) {
            Some(d) => println!("  {:>2}. {}  (travel {d:.2})", i + 1, shot.position()),
            None => println!("  {:>2}. {}", i + 1, shot.position()),
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let generator = SequenceGenerator::new();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);

    // 1. No window: every shot is an independent draw.
    let free = generator.generate(SHOTS, &DistanceWindow::UNBOUNDED, &mut rng)?;
    print_sequence("Free sequence:", &generator, &free);

    // 2. Constrained: each shot lands within the window of the one before.
    let window = DistanceWindow::new(MIN_TRAVEL, MAX_TRAVEL)?;
    let config = GeneratorConfig {
        shot_count: SHOTS,
        window,
        seed: Some(SEED),
        ..Default::default()
    };
    let mut drill = generator.run(&config)?;
    print_sequence(&format!("Drill within {window}:"), &generator, &drill);

    // 3. Grow it, then try two manual appends.
    generator.extend(&mut drill, 4, &window, &mut rng)?;
    let tail = drill.last().map(|s| s.position()).ok_or("empty drill")?;
    let side = drill.next_side();
    let near = Position::new(tail.horizontal, Depth::Front, side);
    let far = Position::new(Horizontal::Left, Depth::Back, Side::Two);
    for manual in [far, near] {
        match drill.append_checked(&MirroredCourt, manual, &window) {
            Ok(id) => println!("appended {manual} as shot {id}"),
            Err(e) => println!(
                "rejected {manual}: {e} (travel {:.2})",
                MirroredCourt.distance(&tail, &manual)
            ),
        }
    }
    println!();

    // 4. Store and reload.
    let json = SequenceRecord::new(&drill, &window).to_json()?;
    println!("stored: {json}\n");
    let (reloaded, stored_window) = SequenceRecord::from_json(&json)?.load()?;
    assert_eq!(reloaded.len(), drill.len());
    assert_eq!(stored_window, window);
    println!(
        "reloaded {} shots, {} outside {stored_window}",
        reloaded.len(),
        reloaded.out_of_window_steps(&MirroredCourt, &stored_window).len()
    );

    Ok(())
}
