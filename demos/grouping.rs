//! Example: group a handful of rectangles and print the optimal partition.
//!
//! Run with:
//! `cargo run --example grouping`

use rect_cht::{GroupingOptimizer, Rectangle};

fn main() {
    let rects = vec![
        Rectangle::new(1u32, 100),
        Rectangle::new(2, 90),
        Rectangle::new(3, 80),
        Rectangle::new(20, 30),
        Rectangle::new(21, 29),
        Rectangle::new(15, 15), // dominated by (20, 30)
        Rectangle::new(60, 5),
        Rectangle::new(61, 4),
        Rectangle::new(100, 1),
    ];

    let optimizer = match GroupingOptimizer::<u32, i64>::new(rects) {
        Ok(optimizer) => optimizer,
        Err(err) => {
            eprintln!("invalid input: {err}");
            std::process::exit(1);
        }
    };
    let (cost, groups) = match optimizer.run() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("optimization failed: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "Frontier: {} rectangles ({} dominated)",
        optimizer.frontier().len(),
        optimizer.dominated()
    );
    println!("Minimum total cost: {cost}");
    for g in &groups {
        let members: Vec<String> = optimizer.frontier()[g.start..g.end]
            .iter()
            .map(|r| format!("{}x{}", r.width, r.height))
            .collect();
        println!(
            "  group [{}..{}) {} -> {}x{} = {}",
            g.start,
            g.end,
            members.join(" "),
            g.width,
            g.height,
            g.cost
        );
    }
}
