//! Core drill engine — problem generation, answer checking, and session state.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: operators, digit specs, problems, categories |
//! | `generator` | Single entry point `generate()` — draws operands until the result is valid |
//! | `session`   | Keypad-driven session state machine with counters and category tallies |
//! | `view`      | Render model and JSON payload for a client that just draws |

pub mod generator;
pub mod models;
pub mod session;
pub mod view;

// Re-export the public API surface so callers can use
// `drill_engine::DrillSession` without reaching into sub-modules.
pub use generator::{generate, generate_problem, ProblemRequest};
pub use models::{Category, DigitSpec, DrillSpecError, Operator, OperatorSet, Problem};
pub use session::{
    CategoryTally, DrillSession, SubmitResult, DEFAULT_OPERATORS, TARGET_CORRECT,
};
pub use view::{client_payload, screen_view, DrillView, MenuEntry, MenuView, ScreenView};
