// ABOUTME: Module root for gradebook report renderers (plain text and delimited table).
// ABOUTME: Re-exports the render functions and holds helpers shared by both formats.

pub mod table;
pub mod text;

pub use table::{TABLE_HEADER, render_table_report};
pub use text::render_text_report;

/// Join grades with `", "` in entry order, e.g. `[8.0, 6.5]` -> `"8, 6.5"`.
///
/// Uses `f64`'s `Display`, which never switches to exponent notation:
/// `1e16` renders as `10000000000000000` and `1e-5` as `0.00001`.
pub fn join_grades(grades: &[f64]) -> String {
    grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
