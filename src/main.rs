#![deny(clippy::all, clippy::cargo, clippy::must_use_candidate)]
// I can't do anything about this; fault of the dependencies
#![allow(clippy::multiple_crate_versions)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

use std::time::Instant;

use anyhow::Context;

/// The timing files every run processes, in order.
const INPUT_FILES: [&str; 2] = ["time01.txt", "time_random.txt"];

fn main() -> anyhow::Result<()> {
    let begin = Instant::now();

    for input in INPUT_FILES {
        let outputs = time_graphs::generate_time_graph(input)
            .with_context(|| format!("failed to generate graphs for {input}"))?;
        println!("write {}", outputs.png.display());
        println!("write {}", outputs.tex.display());
    }

    println!("took {:?}", begin.elapsed());
    Ok(())
}
