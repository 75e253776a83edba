//! One sample drill per selectable category.
//!
//! Run with:
//!   cargo run --example categories
//!
//! Each block shows:
//!   • What the category drills
//!   • The operator set and operand widths it installs
//!   • A handful of generated problems (fixed seed → always the same numbers)

use math_drill_gen::{generate, Category};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── category metadata ─────────────────────────────────────────────────────────

struct CategoryMeta {
    category: Category,
    seed: u64,
    teaches: &'static str,
}

fn categories() -> Vec<CategoryMeta> {
    vec![
        CategoryMeta {
            category: Category::Multiply,
            seed: 1001,
            teaches: "Instant recall of single-digit products: the multiplication \
                      table up to 9 * 9, answered without counting.",
        },
        CategoryMeta {
            category: Category::AddOnes,
            seed: 2002,
            teaches: "Sums and small differences within 20. Both operands stay \
                      single-digit, so every answer lands between 0 and 18.",
        },
        CategoryMeta {
            category: Category::AddOnesAndTens,
            seed: 3003,
            teaches: "Adding a single digit to a two-digit number (with the \
                      matching subtractions), where carrying across a tens \
                      boundary first appears.",
        },
        CategoryMeta {
            category: Category::AddTens,
            seed: 4004,
            teaches: "Full two-digit mental addition and subtraction, worked \
                      left to right with the tens before the ones.",
        },
    ]
}

// ── display helpers ───────────────────────────────────────────────────────────

fn divider(ch: char, n: usize) { println!("{}", ch.to_string().repeat(n)); }

fn print_example(meta: &CategoryMeta) {
    divider('═', 66);
    println!("  CATEGORY : {}", meta.category);
    println!(
        "  SHAPE    : operators {}   digits {}",
        meta.category.operator_set(),
        meta.category.digit_spec()
    );
    divider('─', 66);

    // ── What this category drills ──
    println!();
    println!("  WHAT THIS DRILLS");
    // Wrap at ~60 chars
    let words: Vec<&str> = meta.teaches.split_whitespace().collect();
    let mut line = String::from("    ");
    for word in &words {
        if line.len() + word.len() + 1 > 64 {
            println!("{line}");
            line = format!("    {word}");
        } else {
            if line.len() > 4 { line.push(' '); }
            line.push_str(word);
        }
    }
    if !line.trim().is_empty() { println!("{line}"); }

    // ── Sample problems ──
    println!();
    println!("  SAMPLE PROBLEMS (seed {})", meta.seed);
    let mut rng = StdRng::seed_from_u64(meta.seed);
    for _ in 0..5 {
        let p = generate(
            &mut rng,
            meta.category.operator_set(),
            meta.category.digit_spec(),
        );
        println!("    {:>10}  =  {}", p.text(), p.expected_result);
    }

    println!();
}

// ── entry point ───────────────────────────────────────────────────────────────

fn main() {
    println!();
    println!("  MATH DRILL GENERATOR — One sample per selectable category");
    println!("  Seeds: fixed (deterministic)");
    println!();

    for meta in &categories() {
        print_example(meta);
    }

    divider('═', 66);
    println!("  4 categories shown.  Run 'cargo run --example drill' for the");
    println!("  full session walkthrough.");
    divider('═', 66);
    println!();
}
