//! Session controller: the drilling / category-menu state machine.
//!
//! A [`DrillSession`] owns the live problem, the typed-but-unsubmitted
//! input, the correct/error counters, the active operator and digit
//! configuration, and the per-category completion tally. Every transition
//! runs synchronously on the caller's thread and is total — nothing in here
//! returns an error. A wrong answer is a normal outcome, not a failure.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::drill_engine::generator::generate;
use crate::drill_engine::models::{Category, DigitSpec, OperatorSet, Problem};

/// Correct answers needed to finish a drill and reach the category menu.
///
/// One correct answer per drill is the shipped behavior; the menu tallies
/// count finished drills, not answered problems.
pub const TARGET_CORRECT: u32 = 1;

/// Operator set a fresh session starts with.
///
/// Subtraction is a member even though no menu category drills it alone.
// TODO: confirm whether subtraction belongs in the default set; no menu
// entry ever selects a configuration that differs from a category preset.
pub const DEFAULT_OPERATORS: OperatorSet = OperatorSet::ADD_SUB;

// ---------------------------------------------------------------------------
// Completion tally
// ---------------------------------------------------------------------------

/// Per-category completion counters, alive for as long as the session value.
///
/// A counter moves once per finished drill of its category. Selecting a new
/// category resets the session counters but never the tally; nothing here is
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    completions: [u32; Category::ALL.len()],
}

impl CategoryTally {
    pub fn get(&self, category: Category) -> u32 {
        self.completions[Self::index(category)]
    }

    fn record(&mut self, category: Category) {
        self.completions[Self::index(category)] += 1;
    }

    fn index(category: Category) -> usize {
        match category {
            Category::Multiply => 0,
            Category::AddOnes => 1,
            Category::AddOnesAndTens => 2,
            Category::AddTens => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Session state machine
// ---------------------------------------------------------------------------

/// Outcome of one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitResult {
    /// The parsed input matched the expected result.
    pub correct: bool,
    /// This submit brought the session to the finished state.
    pub session_complete: bool,
}

/// Single-screen drill controller.
///
/// Two coarse states: **drilling** (keypad live) and the **category menu**,
/// the latter derived from [`is_finished`](Self::is_finished) rather than
/// stored. Keypad transitions are ignored while the menu is showing;
/// [`select_category`](Self::select_category) works from anywhere and brings
/// the session back to drilling.
#[derive(Debug)]
pub struct DrillSession {
    problem: Problem,
    pending_input: String,
    correct_count: u32,
    error_count: u32,
    operators: OperatorSet,
    digits: DigitSpec,
    category: Option<Category>,
    tally: CategoryTally,
    rng: StdRng,
}

impl DrillSession {
    /// Start a session with the default configuration and an entropy-seeded
    /// RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Start a session whose whole problem sequence is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let operators = DEFAULT_OPERATORS;
        let digits = DigitSpec::ONES;
        let problem = generate(&mut rng, operators, digits);
        DrillSession {
            problem,
            pending_input: String::new(),
            correct_count: 0,
            error_count: 0,
            operators,
            digits,
            category: None,
            tally: CategoryTally::default(),
            rng,
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Digits typed since the last submit, in press order.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    pub fn operators(&self) -> OperatorSet {
        self.operators
    }

    pub fn digits(&self) -> DigitSpec {
        self.digits
    }

    /// The category picked from the menu, or `None` for the startup
    /// configuration nothing was ever selected for.
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn tally(&self) -> &CategoryTally {
        &self.tally
    }

    /// True once the target number of correct answers has been reached; the
    /// render model shows the category menu while this holds.
    pub fn is_finished(&self) -> bool {
        self.correct_count == TARGET_CORRECT
    }

    /// Append one keypad digit to the pending input. No length cap; ignored
    /// while the menu is showing.
    ///
    /// # Panics
    ///
    /// Panics when `digit` is not `0..=9` — the keypad has no other keys.
    pub fn press_digit(&mut self, digit: u8) {
        assert!(digit <= 9, "keypad digit out of range: {digit}");
        if self.is_finished() {
            return;
        }
        self.pending_input.push(char::from(b'0' + digit));
    }

    /// Remove the last pending digit. No-op on empty input or while the menu
    /// is showing.
    pub fn press_delete(&mut self) {
        if self.is_finished() {
            return;
        }
        self.pending_input.pop();
    }

    /// Check the pending input against the current problem.
    ///
    /// A match bumps the correct counter, and when that increment finishes
    /// the drill the active category's tally moves too — unless the session
    /// still runs the startup configuration, which carries no category.
    /// Anything else (wrong number, empty input, unparseable input) bumps the
    /// error counter. Either way a fresh problem is generated from the
    /// current configuration and the input cleared.
    ///
    /// Returns `None` while the menu is showing.
    pub fn submit(&mut self) -> Option<SubmitResult> {
        if self.is_finished() {
            return None;
        }

        let answer = parse_answer(&self.pending_input);
        let correct = answer == Some(self.problem.expected_result);

        if correct {
            self.correct_count += 1;
            if self.correct_count == TARGET_CORRECT {
                if let Some(category) = self.category {
                    self.tally.record(category);
                }
            }
        } else {
            self.error_count += 1;
        }
        debug!(
            "drill: submit input={:?} expected={} correct={} score={}/{} errors={}",
            self.pending_input,
            self.problem.expected_result,
            correct,
            self.correct_count,
            TARGET_CORRECT,
            self.error_count
        );

        self.problem = generate(&mut self.rng, self.operators, self.digits);
        self.pending_input.clear();

        Some(SubmitResult {
            correct,
            session_complete: self.is_finished(),
        })
    }

    /// Start drilling `category`: both counters and the input reset, the
    /// category's operator set and digit spec installed, a fresh problem
    /// generated. Available at any time. The completion tally is left
    /// untouched.
    pub fn select_category(&mut self, category: Category) {
        self.correct_count = 0;
        self.error_count = 0;
        self.pending_input.clear();
        self.operators = category.operator_set();
        self.digits = category.digit_spec();
        self.category = Some(category);
        self.problem = generate(&mut self.rng, self.operators, self.digits);
        debug!(
            "drill: select_category {category} operators={} digits={}",
            self.operators, self.digits
        );
    }
}

impl Default for DrillSession {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Answer parsing
// ---------------------------------------------------------------------------

/// Parse a typed answer with leading-numeric-prefix semantics: digits are
/// consumed from the front, everything after the first non-digit is ignored,
/// and an empty prefix — or one too large for `i64` — is "not a number",
/// which can never match an expected result.
///
/// Keypad input is all digits by construction; the prefix rule also covers
/// free-text input, where `"12abc"` still counts as 12.
pub(crate) fn parse_answer(input: &str) -> Option<i64> {
    let prefix_len = input.bytes().take_while(|b| b.is_ascii_digit()).count();
    if prefix_len == 0 {
        return None;
    }
    input[..prefix_len].parse::<i64>().ok()
}
