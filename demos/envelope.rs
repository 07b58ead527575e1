//! Example: use the lower envelope directly.
//!
//! Run with:
//! `cargo run --example envelope`

use rect_cht::{LowerEnvelope, QueryCursor};

fn main() -> Result<(), rect_cht::GroupingError> {
    // Slopes strictly decreasing, as the envelope requires.
    let lines = [(8i64, 0i64), (5, 4), (3, 11), (2, 12), (1, 30)];

    let mut env = LowerEnvelope::with_capacity(lines.len());
    for &(k, b) in &lines {
        env.add_line(k, b)?;
        println!(
            "after y = {k}x + {b}: {} of {} lines kept",
            env.len(),
            env.inserted()
        );
    }

    // Queries must be non-decreasing in x.
    let mut cursor = QueryCursor::new();
    for x in [0i64, 1, 2, 4, 8, 16] {
        let (y, origin) = env.query(x, &mut cursor)?;
        println!("min at x = {x:>2}: {y:>3} (line #{origin}, cursor {})", cursor.index());
    }
    Ok(())
}
