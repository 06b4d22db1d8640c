//! Basic IntCell usage example
//!
//! Run with an optional initial value: `cargo run --example basic_usage -- -3`

use anyhow::{Context, Result};
use intcell::IntCell;

fn main() -> Result<()> {
    let initial = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<i32>()
            .with_context(|| format!("initial value `{arg}` is not a valid i32"))?,
        None => 5,
    };

    println!("IntCell Basic Usage Example");
    println!("===========================");

    let mut cell = IntCell::new(initial);
    println!("Constructed with: {}", cell.read());

    cell.write(42);
    println!("After write(42):  {}", cell.read());

    for w in [7, -1, i32::MAX] {
        cell.write(w);
    }
    println!("Last write wins:  {}", cell.read());

    let json = serde_json::to_string(&cell).context("serializing cell")?;
    println!("As JSON:          {json}");

    Ok(())
}
