// ABOUTME: Renders the record collection as a human-readable plain-text report.
// ABOUTME: One block per record in collection order, each closed by a 30-character dash rule.

use std::fmt::Write;

use crate::export::join_grades;
use crate::model::StudentRecord;
use crate::situation::assess;

const TITLE: &str = "RELATÓRIO DE NOTAS";
const RULE_WIDTH: usize = 30;

/// Render every record as a labelled block. Records without grades show
/// `N/A` in place of the grade list.
pub fn render_text_report(records: &[StudentRecord]) -> String {
    let mut out = String::new();
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "{}", TITLE).unwrap();
    writeln!(out).unwrap();

    for record in records {
        let assessment = assess(&record.grades);
        let grades = if record.grades.is_empty() {
            "N/A".to_string()
        } else {
            join_grades(&record.grades)
        };

        writeln!(out, "Nome: {}", record.name).unwrap();
        writeln!(out, "Matrícula: {}", record.enrollment_id).unwrap();
        writeln!(out, "Curso: {}", record.course).unwrap();
        writeln!(out, "Notas: {}", grades).unwrap();
        writeln!(out, "Média: {}", assessment.average_display()).unwrap();
        writeln!(out, "Situação: {}", assessment.situation).unwrap();
        writeln!(out, "{}", rule).unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str, id: &str, course: &str, grades: &[f64]) -> StudentRecord {
        let mut record = StudentRecord::new(name.to_string(), id.to_string(), course.to_string());
        record.grades = grades.to_vec();
        record
    }

    #[test]
    fn renders_one_block_per_record() {
        let records = vec![
            make_record("Ana", "1", "CS", &[8.0, 6.0]),
            make_record("Bruno", "2", "Math", &[5.0]),
        ];

        let report = render_text_report(&records);
        let expected = "\
RELATÓRIO DE NOTAS

Nome: Ana
Matrícula: 1
Curso: CS
Notas: 8, 6
Média: 7.00
Situação: Aprovado
------------------------------
Nome: Bruno
Matrícula: 2
Curso: Math
Notas: 5
Média: 5.00
Situação: Reprovado
------------------------------
";
        assert_eq!(report, expected);
    }

    #[test]
    fn record_without_grades_shows_placeholder() {
        let report = render_text_report(&[make_record("Carla", "3", "Bio", &[])]);

        assert!(report.contains("Notas: N/A\n"));
        assert!(report.contains("Média: 0.00\n"));
        assert!(report.contains("Situação: Sem notas\n"));
    }

    #[test]
    fn rule_is_thirty_dashes() {
        let report = render_text_report(&[make_record("Ana", "1", "CS", &[9.0])]);
        let last = report.lines().last().unwrap();
        assert_eq!(last.len(), 30);
        assert!(last.chars().all(|c| c == '-'));
    }

    #[test]
    fn empty_collection_renders_only_title() {
        assert_eq!(render_text_report(&[]), "RELATÓRIO DE NOTAS\n\n");
    }
}
