//! Full walkthrough of one drill session.
//!
//! Run with: `cargo run --example drill`
//!
//! This example shows how `math_drill_gen` works end to end:
//!
//! 1. **Default drill** — a fresh session starts on single-digit addition and
//!    subtraction; one correct keypad answer finishes the drill.
//! 2. **Category menu** — the finished session renders the four presets with
//!    their completion tallies.
//! 3. **Multiplication run** — selecting a category resets the counters; a
//!    miss bumps the error counter, and the next correct answer finishes the
//!    run and credits the tally.
//! 4. **Client payload** — the JSON a thin client renders verbatim.
//!
//! ## Key concepts demonstrated
//!
//! - `DrillSession::seeded(u64)` makes the whole problem sequence
//!   deterministic; `DrillSession::new()` draws from entropy.
//! - Keypad events: `press_digit`, `press_delete`, `submit`.
//! - `screen_view` switches between the drill screen and the category menu on
//!   its own — the caller never tracks which screen is up.
//! - Tallies count finished drills per category, not answered problems.

use math_drill_gen::{client_payload, screen_view, Category, DrillSession, ScreenView, SubmitResult};

/// Pretty-print whatever the session would show on screen right now.
fn print_screen(session: &DrillSession) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    match screen_view(session) {
        ScreenView::Drilling(drill) => {
            println!(
                "  {}   [score {}/{}  errors {}]",
                drill.prompt, drill.correct_count, drill.target, drill.error_count
            );
            if !drill.pending_input.is_empty() {
                println!("  typed: {}", drill.pending_input);
            }
        }
        ScreenView::CategoryMenu(menu) => {
            println!("  Drill complete — pick the next category:");
            for entry in &menu.entries {
                println!("    • {}", entry.label);
            }
        }
    }
}

/// Press the keypad digits of a value, most significant first.
fn type_value(session: &mut DrillSession, value: i64) {
    for b in value.to_string().bytes() {
        session.press_digit(b - b'0');
    }
}

fn report(typed: i64, outcome: SubmitResult) {
    let verdict = if outcome.correct { "✓ correct" } else { "✗ wrong" };
    println!("  submit {typed} → {verdict}");
}

fn main() {
    // ── Default drill ──────────────────────────────────────────────────────
    // A fresh session is already drilling: single-digit add/subtract, score
    // and error counters at zero.
    println!();
    println!("══ Fresh session: default add/subtract drill ══");
    println!();
    let mut session = DrillSession::seeded(2024);
    print_screen(&session);

    let expected = session.problem().expected_result;
    type_value(&mut session, expected);
    print_screen(&session);
    let outcome = session.submit().expect("keypad is live");
    report(expected, outcome);

    // ── Category menu ──────────────────────────────────────────────────────
    // One correct answer reached the target, so the central area now shows
    // the menu. All tallies read 0: the startup run has no category to credit.
    println!();
    println!("══ Category menu with completion tallies ══");
    println!();
    print_screen(&session);

    // ── Multiplication run ─────────────────────────────────────────────────
    println!();
    println!("══ Multiplication run: one miss, then the answer ══");
    println!();
    session.select_category(Category::Multiply);
    print_screen(&session);

    let wrong = session.problem().expected_result + 1;
    type_value(&mut session, wrong);
    let outcome = session.submit().expect("keypad is live");
    report(wrong, outcome);
    print_screen(&session);

    let expected = session.problem().expected_result;
    type_value(&mut session, expected);
    let outcome = session.submit().expect("keypad is live");
    report(expected, outcome);
    print_screen(&session);

    // ── Client payload ─────────────────────────────────────────────────────
    // The same state as JSON: header counters, screen marker, and controls.
    // A client that renders this needs no arithmetic of its own.
    println!();
    println!("══ Raw client payload for the next run ══");
    println!();
    session.select_category(Category::AddOnesAndTens);
    let payload = client_payload(&session);
    println!("{}", serde_json::to_string_pretty(&payload).expect("payload serializes"));
    println!();
}
