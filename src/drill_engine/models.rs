use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    /// All operators in canonical `+ - *` order.
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mul];

    /// Apply the operator with standard integer arithmetic.
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The subset of operators a generated [`Problem`] may use.
///
/// Never empty: [`OperatorSet::new`] rejects the empty set and the preset
/// constants are non-empty by construction. Duplicate entries collapse, so a
/// draw over the set is uniform over its distinct members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorSet {
    add: bool,
    sub: bool,
    mul: bool,
}

impl OperatorSet {
    /// Addition and subtraction together — the set every addition-family
    /// drill runs with.
    pub const ADD_SUB: OperatorSet = OperatorSet {
        add: true,
        sub: true,
        mul: false,
    };

    /// Multiplication alone.
    pub const MULTIPLY: OperatorSet = OperatorSet {
        add: false,
        sub: false,
        mul: true,
    };

    /// Build a set from the listed operators.
    ///
    /// # Errors
    ///
    /// Returns [`DrillSpecError::EmptyOperatorSet`] when `operators` is empty
    /// — there would be nothing to draw.
    pub fn new(operators: &[Operator]) -> Result<Self, DrillSpecError> {
        if operators.is_empty() {
            return Err(DrillSpecError::EmptyOperatorSet);
        }
        let mut set = OperatorSet {
            add: false,
            sub: false,
            mul: false,
        };
        for &op in operators {
            match op {
                Operator::Add => set.add = true,
                Operator::Sub => set.sub = true,
                Operator::Mul => set.mul = true,
            }
        }
        Ok(set)
    }

    pub fn contains(self, op: Operator) -> bool {
        match op {
            Operator::Add => self.add,
            Operator::Sub => self.sub,
            Operator::Mul => self.mul,
        }
    }

    /// Distinct members in canonical order.
    pub fn members(self) -> Vec<Operator> {
        Operator::ALL
            .iter()
            .copied()
            .filter(|&op| self.contains(op))
            .collect()
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<&str> = self.members().iter().map(|op| op.symbol()).collect();
        write!(f, "{{{}}}", symbols.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Digit spec
// ---------------------------------------------------------------------------

/// Digit-count bounds for the two operands of a generated problem.
///
/// A count of `d` bounds the operand to `[10^(d-1), 10^d - 1]`; the
/// degenerate `d = 1` range is `[1, 9]`, so single-digit drills never pose a
/// zero operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitSpec {
    digits1: u32,
    digits2: u32,
}

impl DigitSpec {
    /// Largest supported digit count per operand. Nine digits keeps the
    /// product of two max-width operands inside `i64`.
    pub const MAX_DIGITS: u32 = 9;

    /// Single digit × single digit — the width every fresh session drills.
    pub const ONES: DigitSpec = DigitSpec {
        digits1: 1,
        digits2: 1,
    };

    /// Single digit × two digits.
    pub const ONES_AND_TENS: DigitSpec = DigitSpec {
        digits1: 1,
        digits2: 2,
    };

    /// Two digits × two digits.
    pub const TENS: DigitSpec = DigitSpec {
        digits1: 2,
        digits2: 2,
    };

    /// Build a spec from two digit counts.
    ///
    /// # Errors
    ///
    /// Returns [`DrillSpecError::DigitCountOutOfRange`] when either count is
    /// zero or above [`DigitSpec::MAX_DIGITS`].
    pub fn new(digits1: u32, digits2: u32) -> Result<Self, DrillSpecError> {
        for digits in [digits1, digits2] {
            if digits == 0 || digits > Self::MAX_DIGITS {
                return Err(DrillSpecError::DigitCountOutOfRange { digits });
            }
        }
        Ok(DigitSpec { digits1, digits2 })
    }

    pub fn digits1(self) -> u32 {
        self.digits1
    }

    pub fn digits2(self) -> u32 {
        self.digits2
    }

    /// Inclusive value range for operand 1.
    pub fn range1(self) -> (i64, i64) {
        Self::range(self.digits1)
    }

    /// Inclusive value range for operand 2.
    pub fn range2(self) -> (i64, i64) {
        Self::range(self.digits2)
    }

    fn range(digits: u32) -> (i64, i64) {
        let min = 10i64.pow(digits - 1);
        let max = 10i64.pow(digits) - 1;
        (min, max)
    }
}

impl fmt::Display for DigitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.digits1, self.digits2)
    }
}

// ---------------------------------------------------------------------------
// Problems
// ---------------------------------------------------------------------------

/// A single generated arithmetic question with its known correct answer.
///
/// Created by the generator and replaced — never mutated — on every submit
/// or category change. `expected_result` is non-negative for every generated
/// problem; negative draws are redone before a `Problem` ever exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub operand1: i64,
    pub operator: Operator,
    pub operand2: i64,
    pub expected_result: i64,
}

impl Problem {
    /// The question text a screen shows, e.g. `"7 + 2"`.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operand1, self.operator, self.operand2)
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// One of the four fixed drill configurations selectable from the menu.
///
/// Each category pins an operator set and a digit spec; the menu keeps one
/// completion counter per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Multiply,
    AddOnes,
    AddOnesAndTens,
    AddTens,
}

impl Category {
    /// All categories in menu order, multiplication first.
    pub const ALL: [Category; 4] = [
        Category::Multiply,
        Category::AddOnes,
        Category::AddOnesAndTens,
        Category::AddTens,
    ];

    /// Operator set installed when this category is selected.
    ///
    /// The addition family runs with the full `{+, -}` set, so addition
    /// drills may also pose small subtractions.
    pub fn operator_set(self) -> OperatorSet {
        match self {
            Category::Multiply => OperatorSet::MULTIPLY,
            Category::AddOnes | Category::AddOnesAndTens | Category::AddTens => {
                OperatorSet::ADD_SUB
            }
        }
    }

    /// Digit spec installed when this category is selected.
    pub fn digit_spec(self) -> DigitSpec {
        match self {
            Category::Multiply => DigitSpec::ONES,
            Category::AddOnes => DigitSpec::ONES,
            Category::AddOnesAndTens => DigitSpec::ONES_AND_TENS,
            Category::AddTens => DigitSpec::TENS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Multiply => "Multiplication",
            Category::AddOnes => "Adding ones",
            Category::AddOnesAndTens => "Adding ones and tens",
            Category::AddTens => "Adding tens",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Invalid drill configuration, reported at construction time.
///
/// Once a set and spec exist every generation and session transition is
/// total; these are the only inputs the engine refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrillSpecError {
    #[error("operator set must contain at least one operator")]
    EmptyOperatorSet,

    #[error("digit count {digits} out of range 1..={max}", max = DigitSpec::MAX_DIGITS)]
    DigitCountOutOfRange { digits: u32 },
}
