//! Assembly of report content into ordered section blocks.
//!
//! The composer treats the medical and forensic documents as two templates
//! that share the hospital header and signature scaffolding.  Everything
//! kind-specific lives in the section list selected per [`ReportKind`], not
//! in duplicated assembly code.

use chrono::NaiveDate;
use rand::Rng;

use crate::cases::CaseRecord;
use crate::model::{Block, HorizontalAlignment, ImageBlock, Section, TextBlock};
use crate::sample;

/// Institution named in the title block of every document.
pub const HOSPITAL_NAME: &str = "CITY GENERAL HOSPITAL";

/// Department named in the title block of every document.
pub const DEPARTMENT_NAME: &str = "Department of Forensic Medicine";

const REPORTING_OFFICER: &str = "Inspector A. Nandan";
const EXAMINER_NAME: &str = "Dr. R. Sharma, MD (Forensic Medicine)";
const SIGNATURE_LINE: &str = "Signature: ______________________";

const TITLE_FONT_SIZE: u8 = 16;

/// Rendered width of the embedded QR code in millimetres.
const QR_WIDTH_MM: f64 = 25.0;

/// Selects which of the two document templates is composed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    /// Medical examination report with narrative and findings sections.
    Medical,
    /// Forensic lab report with categorical test results.
    Forensic,
}

impl ReportKind {
    /// Document title printed under the hospital header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Medical => "Medical Examination Report",
            Self::Forensic => "Forensic Lab Test Report",
        }
    }

    /// Label in front of the examiner name in the signature block.
    pub fn examiner_label(self) -> &'static str {
        match self {
            Self::Medical => "Doctor / Examiner",
            Self::Forensic => "Forensic Officer",
        }
    }

    /// Label of the date line in the patient details section.
    pub fn date_label(self) -> &'static str {
        match self {
            Self::Medical => "Date of Examination",
            Self::Forensic => "Date of Report",
        }
    }
}

/// Composes the full ordered section list for one document.
///
/// Sampled fields are drawn from `rng` during composition, so a seeded
/// generator reproduces the exact same document text.  The QR image bytes are
/// embedded into the signature block.
pub fn compose(
    case: &CaseRecord,
    kind: ReportKind,
    qr_png: &[u8],
    rng: &mut impl Rng,
) -> Vec<Section> {
    let mut sections = vec![header_section(kind), patient_details(case, kind)];

    match kind {
        ReportKind::Medical => {
            sections.push(reason_section());
            sections.push(history_section(sample::incident_time(rng)));
            sections.push(findings_section(
                sample::vital_signs(rng),
                sample::examination_findings(rng),
            ));
            sections.push(investigations_section());
            sections.push(summary_section());
        }
        ReportKind::Forensic => {
            sections.push(lab_results_section(sample::lab_results(rng)));
        }
    }

    sections.push(signature_section(kind, case.exam_date, qr_png));
    sections
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d-%b-%Y").to_string()
}

fn centered(text: impl Into<String>) -> TextBlock {
    TextBlock::new(text).with_alignment(HorizontalAlignment::Center)
}

fn header_section(kind: ReportKind) -> Section {
    Section::untitled()
        .with_block(Block::Text(
            centered(HOSPITAL_NAME).bold().with_font_size(TITLE_FONT_SIZE),
        ))
        .with_block(Block::Text(centered(DEPARTMENT_NAME)))
        .with_block(Block::vspace(0.5))
        .with_block(Block::Text(centered(kind.title())))
        .with_block(Block::vspace(0.5))
}

fn patient_details(case: &CaseRecord, kind: ReportKind) -> Section {
    let mut section = Section::titled("Patient Details:").with_lines([
        format!("Name: {}", case.subject_name),
        format!("Age: {} years", case.age),
        "Gender: Female".to_owned(),
    ]);

    if kind == ReportKind::Medical {
        section = section.with_block(Block::text("Address: [Redacted]"));
    }

    section = section.with_block(Block::text(format!("Case ID: {}", case.case_id)));

    if kind == ReportKind::Medical {
        section = section.with_block(Block::text(format!(
            "Reporting Officer: {}",
            REPORTING_OFFICER
        )));
    }

    section
        .with_block(Block::text(format!(
            "{}: {}",
            kind.date_label(),
            format_date(case.exam_date)
        )))
        .with_block(Block::vspace(0.5))
}

fn reason_section() -> Section {
    Section::titled("Reason for Examination:")
        .with_block(Block::text(
            "Medical examination requested following an alleged sexual harassment incident.",
        ))
        .with_block(Block::vspace(0.5))
}

fn history_section(time: sample::IncidentTime) -> Section {
    Section::titled("History Provided:")
        .with_lines([
            "- Patient reports unwanted physical contact and verbal harassment.".to_owned(),
            "- No prior medical conditions reported.".to_owned(),
            format!("- Time of incident: {}.", time),
        ])
        .with_block(Block::vspace(0.5))
}

fn findings_section(vitals: sample::VitalSigns, findings: sample::FindingsSet) -> Section {
    Section::titled("Examination Findings:")
        .with_lines([
            "General Appearance: Conscious, oriented, no apparent distress.".to_owned(),
            "Vital Signs:".to_owned(),
            format!(
                "  - Blood Pressure: {}/{} mmHg",
                vitals.systolic, vitals.diastolic
            ),
            format!("  - Pulse: {} bpm", vitals.pulse),
            format!("  - Respiratory Rate: {}/min", vitals.respiratory_rate),
            format!("  - Temperature: {:.1}\u{b0}C", vitals.temperature),
            "Physical Examination:".to_owned(),
            format!("  - Skin: {}.", findings.injury),
            format!("  - Limbs: {}.", findings.injury),
            format!("  - Genital Examination: {}.", findings.genital),
            format!("  - Psychological Observation: {}.", findings.psychological),
        ])
        .with_block(Block::vspace(0.5))
}

fn investigations_section() -> Section {
    Section::titled("Investigations Recommended:")
        .with_lines([
            "- Psychological assessment for trauma.",
            "- Documentation of statements for legal proceedings.",
        ])
        .with_block(Block::vspace(0.5))
}

fn summary_section() -> Section {
    Section::titled("Summary / Conclusion:")
        .with_lines([
            "- No physical injuries detected.",
            "- Psychological distress noted.",
            "- Patient advised to follow up for counseling and legal support.",
            "- Report submitted for investigative purposes.",
        ])
        .with_block(Block::vspace(1.0))
}

fn lab_results_section(labs: sample::LabResults) -> Section {
    Section::titled("Lab Test Results:")
        .with_lines([
            format!("- Blood Test: {}", labs.blood),
            format!("- Urine Test: {}", labs.urine),
            format!("- DNA Swab: {}", labs.dna),
            format!("- STI Test: {}", labs.sti),
            format!("- Toxicology: {}", labs.toxicology),
        ])
        .with_block(Block::vspace(1.0))
}

fn signature_section(kind: ReportKind, date: NaiveDate, qr_png: &[u8]) -> Section {
    Section::untitled()
        .with_lines([
            format!("{}: {}", kind.examiner_label(), EXAMINER_NAME),
            SIGNATURE_LINE.to_owned(),
        ])
        .with_block(Block::Image(
            ImageBlock::new(qr_png)
                .with_width_mm(QR_WIDTH_MM)
                .with_alignment(HorizontalAlignment::Right),
        ))
        .with_block(Block::vspace(0.5))
        .with_block(Block::text(format!("Date: {}", format_date(date))))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::cases::CaseRecord;

    fn demo_case() -> CaseRecord {
        CaseRecord::new(
            "SHC-2025-09-01",
            "Ananya S.",
            22,
            NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date"),
        )
    }

    fn all_text(sections: &[Section]) -> String {
        let mut text = String::new();
        for section in sections {
            if let Some(heading) = section.heading() {
                text.push_str(heading);
                text.push('\n');
            }
            for block in section.blocks() {
                if let Block::Text(line) = block {
                    text.push_str(line.text());
                    text.push('\n');
                }
            }
        }
        text
    }

    #[test]
    fn medical_template_contains_its_sections_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let sections = compose(&demo_case(), ReportKind::Medical, &[0; 4], &mut rng);

        let headings: Vec<_> = sections
            .iter()
            .filter_map(|section| section.heading())
            .collect();
        assert_eq!(
            headings,
            [
                "Patient Details:",
                "Reason for Examination:",
                "History Provided:",
                "Examination Findings:",
                "Investigations Recommended:",
                "Summary / Conclusion:",
            ]
        );

        let text = all_text(&sections);
        assert!(text.contains(HOSPITAL_NAME));
        assert!(text.contains("Medical Examination Report"));
        assert!(text.contains("Reporting Officer: Inspector A. Nandan"));
        assert!(text.contains("Date of Examination: 01-Sep-2025"));
        assert!(text.contains(SIGNATURE_LINE));
    }

    #[test]
    fn forensic_template_reuses_scaffolding_without_narrative() {
        let mut rng = StdRng::seed_from_u64(2);
        let sections = compose(&demo_case(), ReportKind::Forensic, &[0; 4], &mut rng);

        let headings: Vec<_> = sections
            .iter()
            .filter_map(|section| section.heading())
            .collect();
        assert_eq!(headings, ["Patient Details:", "Lab Test Results:"]);

        let text = all_text(&sections);
        assert!(text.contains(HOSPITAL_NAME));
        assert!(text.contains("Forensic Lab Test Report"));
        assert!(text.contains("Date of Report: 01-Sep-2025"));
        assert!(!text.contains("Address: [Redacted]"));
        assert!(!text.contains("History Provided:"));
        assert!(text.contains(SIGNATURE_LINE));
    }

    #[test]
    fn forensic_lab_lines_use_declared_option_sets() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = all_text(&compose(
            &demo_case(),
            ReportKind::Forensic,
            &[0; 4],
            &mut rng,
        ));

        let sti_line = text
            .lines()
            .find(|line| line.starts_with("- STI Test: "))
            .expect("STI line present");
        let value = sti_line.trim_start_matches("- STI Test: ");
        assert!(crate::sample::STI_RESULTS.contains(&value));
    }

    #[test]
    fn both_kinds_embed_the_qr_image_in_the_signature_block() {
        let mut rng = StdRng::seed_from_u64(4);
        for kind in [ReportKind::Medical, ReportKind::Forensic] {
            let sections = compose(&demo_case(), kind, &[1, 2, 3], &mut rng);
            let signature = sections.last().expect("signature section");
            let image = signature
                .blocks()
                .iter()
                .find_map(|block| match block {
                    Block::Image(image) => Some(image),
                    _ => None,
                })
                .expect("embedded image");
            assert_eq!(image.png(), &[1u8, 2, 3][..]);
            assert_eq!(image.width_mm(), Some(QR_WIDTH_MM));
            assert_eq!(image.alignment(), HorizontalAlignment::Right);
        }
    }
}
