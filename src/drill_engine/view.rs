//! Render model: what a client draws for the current session state.
//!
//! The engine never renders. It hands the hosting widget either a typed
//! [`ScreenView`] for the central area — the problem line while drilling,
//! the category buttons once finished — or the full
//! [`client_payload`] JSON with header counters and control layout included,
//! so a dumb client can draw the whole screen without knowing the rules.

use serde::Serialize;
use serde_json::{json, Value};

use crate::drill_engine::models::Category;
use crate::drill_engine::session::{DrillSession, TARGET_CORRECT};

/// Central-area content, keyed by whether the drill is finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Drilling(DrillView),
    CategoryMenu(MenuView),
}

/// The live-drill screen: question, echoed input, and the header counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrillView {
    /// Question line, e.g. `"7 + 2 = ?"`.
    pub prompt: String,
    /// Digits typed so far, echoed in the input box.
    pub pending_input: String,
    pub correct_count: u32,
    /// Correct answers that finish the drill.
    pub target: u32,
    pub error_count: u32,
}

/// The category menu: one button per category, labeled with its tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub entries: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub category: Category,
    /// Button label with the running tally, e.g. `"Multiplication (3)"`.
    pub label: String,
    pub completions: u32,
}

/// Build the render model for the current state: the drill screen while the
/// keypad is live, the category menu once the drill is finished.
pub fn screen_view(session: &DrillSession) -> ScreenView {
    if session.is_finished() {
        let entries = Category::ALL
            .iter()
            .map(|&category| {
                let completions = session.tally().get(category);
                MenuEntry {
                    category,
                    label: format!("{category} ({completions})"),
                    completions,
                }
            })
            .collect();
        ScreenView::CategoryMenu(MenuView { entries })
    } else {
        ScreenView::Drilling(DrillView {
            prompt: format!("{} = ?", session.problem()),
            pending_input: session.pending_input().to_string(),
            correct_count: session.correct_count(),
            target: TARGET_CORRECT,
            error_count: session.error_count(),
        })
    }
}

// ---------------------------------------------------------------------------
// Client payload
// ---------------------------------------------------------------------------

/// Keypad layout while drilling: three rows of digits, then delete / zero /
/// a blank filler slot.
fn keypad_rows() -> Value {
    json!([
        ["1", "2", "3"],
        ["4", "5", "6"],
        ["7", "8", "9"],
        ["delete", "0", ""],
    ])
}

/// Full JSON payload for a client that just draws what it is told.
///
/// The header counters appear on both screens; the drilling screen adds the
/// prompt, the echoed input, the keypad rows, and the submit control, while
/// the finished screen carries the labeled category buttons.
pub fn client_payload(session: &DrillSession) -> Value {
    let header = json!({
        "correct": session.correct_count(),
        "target": TARGET_CORRECT,
        "errors": session.error_count(),
    });

    match screen_view(session) {
        ScreenView::Drilling(drill) => json!({
            "header": header,
            "screen": "drilling",
            "prompt": drill.prompt,
            "pending_input": drill.pending_input,
            "keypad": keypad_rows(),
            "submit_label": "Check",
        }),
        ScreenView::CategoryMenu(menu) => json!({
            "header": header,
            "screen": "category_menu",
            "buttons": menu
                .entries
                .iter()
                .map(|entry| {
                    json!({
                        "category": entry.category,
                        "label": entry.label,
                    })
                })
                .collect::<Vec<Value>>(),
        }),
    }
}
