// ABOUTME: Renders the record collection as a semicolon-delimited table with computed columns.
// ABOUTME: Fixed header row first, then one CRLF-terminated row per record in collection order.

use crate::export::join_grades;
use crate::model::StudentRecord;
use crate::situation::assess;

const DELIMITER: char = ';';
const LINE_END: &str = "\r\n";

/// Column titles, always emitted as the first row.
pub const TABLE_HEADER: [&str; 6] = ["Nome", "Matrícula", "Curso", "Notas", "Média", "Situação"];

/// Render the table: name, enrollment id, course, grades joined by `", "`,
/// average to two decimals (`0.00` without grades) and the situation label.
pub fn render_table_report(records: &[StudentRecord]) -> String {
    let mut out = String::new();
    write_row(&mut out, &TABLE_HEADER);

    for record in records {
        let assessment = assess(&record.grades);
        let grades = join_grades(&record.grades);
        let average = assessment.average_display();
        write_row(
            &mut out,
            &[
                record.name.as_str(),
                record.enrollment_id.as_str(),
                record.course.as_str(),
                grades.as_str(),
                average.as_str(),
                assessment.situation.label(),
            ],
        );
    }

    out
}

fn write_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(&quote_field(field));
    }
    out.push_str(LINE_END);
}

/// Quote a field only when it contains the delimiter, a quote or a line
/// break. Embedded quotes are doubled.
fn quote_field(field: &str) -> String {
    let needs_quotes = field
        .chars()
        .any(|c| c == DELIMITER || c == '"' || c == '\n' || c == '\r');
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
