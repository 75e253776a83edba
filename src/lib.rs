//! # math_drill_gen
//!
//! A fully offline, deterministic mental-arithmetic drill engine.
//!
//! This library drives a single-screen arithmetic drill: it generates random
//! problems over a configurable operator set and operand digit widths, checks
//! keypad answers, and keeps score until the session target is reached. Four
//! ready-made category presets (multiplication and three addition tiers) come
//! with per-category completion tallies.
//!
//! ## How it works
//!
//! 1. Create a [`DrillSession`] — it starts on a live problem drawn from the
//!    default configuration (ones-digit addition and subtraction).
//! 2. Feed it keypad events: [`press_digit`](DrillSession::press_digit),
//!    [`press_delete`](DrillSession::press_delete), then
//!    [`submit`](DrillSession::submit). A correct answer bumps the score, a
//!    wrong one bumps the error counter, and either way the next problem is
//!    drawn immediately.
//! 3. Once the score reaches [`TARGET_CORRECT`] the session is finished: the
//!    keypad goes dead and [`screen_view`] switches to the category menu.
//!    Picking a category with [`select_category`](DrillSession::select_category)
//!    resets the counters and starts the next run.
//!
//! Problems can also be generated standalone — build a [`ProblemRequest`] and
//! call [`generate_problem`], no session required.
//!
//! ## Key features
//!
//! - **Deterministic**: seed the session with [`DrillSession::seeded`] (or pass
//!   `rng_seed: Some(u64)` in a [`ProblemRequest`]) to reproduce the exact same
//!   problem sequence every time — useful for tests and scripted demos.
//! - **Never-negative answers**: subtraction draws are redrawn until the result
//!   is non-negative, so every expected answer can be typed on a digit keypad.
//! - **Category tallies**: each finished run credits the category that was
//!   selected for it, and the menu labels carry the running counts — stable
//!   across sessions as long as the [`CategoryTally`] lives.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{client_payload, screen_view, Category, DrillSession, ScreenView};
//!
//! let mut session = DrillSession::seeded(42);
//! println!("Q: {}", session.problem());
//!
//! // Type the expected answer on the keypad and submit:
//! let answer = session.problem().expected_result.to_string();
//! for digit in answer.bytes() {
//!     session.press_digit(digit - b'0');
//! }
//! let outcome = session.submit().expect("keypad is live");
//! assert!(outcome.correct);
//! assert!(outcome.session_complete);
//!
//! // The drill is finished — the central area now shows the category menu:
//! assert!(session.is_finished());
//! if let ScreenView::CategoryMenu(menu) = screen_view(&session) {
//!     for entry in &menu.entries {
//!         println!("[{}] {}", entry.completions, entry.label);
//!     }
//! }
//!
//! // Pick a preset and keep going:
//! session.select_category(Category::Multiply);
//! assert!(!session.is_finished());
//! println!("{}", client_payload(&session));
//! ```

pub mod drill_engine;

// Convenience re-exports so callers can use `math_drill_gen::DrillSession`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    client_payload, generate, generate_problem, screen_view, Category, CategoryTally,
    DigitSpec, DrillSession, DrillSpecError, DrillView, MenuEntry, MenuView, Operator,
    OperatorSet, Problem, ProblemRequest, ScreenView, SubmitResult, DEFAULT_OPERATORS,
    TARGET_CORRECT,
};
