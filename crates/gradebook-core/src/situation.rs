// ABOUTME: Computes a student's grade average and pass/fail situation.
// ABOUTME: The passing threshold is a fixed policy constant; no rounding is applied before comparison.

use std::fmt;

/// Minimum average (inclusive) required to be approved.
pub const PASSING_AVERAGE: f64 = 7.0;

/// Pass/fail classification derived from the grade average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Situation {
    Approved,
    Failed,
    NoGrades,
}

impl Situation {
    /// Label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Situation::Approved => "Aprovado",
            Situation::Failed => "Reprovado",
            Situation::NoGrades => "Sem notas",
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The result of assessing a grade sequence. `average` is `None` only when
/// there were no grades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub average: Option<f64>,
    pub situation: Situation,
}

impl Assessment {
    /// Average with two decimals, or `0.00` when there are no grades.
    pub fn average_display(&self) -> String {
        format!("{:.2}", self.average.unwrap_or(0.0))
    }
}

/// Assess a grade sequence: plain sum divided by count, compared against
/// [`PASSING_AVERAGE`].
pub fn assess(grades: &[f64]) -> Assessment {
    if grades.is_empty() {
        return Assessment {
            average: None,
            situation: Situation::NoGrades,
        };
    }

    let average = grades.iter().sum::<f64>() / grades.len() as f64;
    let situation = if average >= PASSING_AVERAGE {
        Situation::Approved
    } else {
        Situation::Failed
    };

    Assessment {
        average: Some(average),
        situation,
    }
}
