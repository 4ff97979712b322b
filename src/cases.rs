//! Case synthesis and the demo driving loops.
//!
//! A case bundles the identifying and demographic data for one synthetic
//! subject.  The loops iterate an injected subject roster, synthesize one
//! case id per index, and invoke the generator once (single mode) or twice
//! (paired mode, sharing the case metadata between the medical and forensic
//! documents).

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use genpdf::error::Error;
use rand::Rng;

use crate::compose::{self, ReportKind};
use crate::qr;
use crate::render;

/// One (name, age) roster entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subject {
    /// Display name of the synthetic subject.
    pub name: &'static str,
    /// Age in years.
    pub age: u32,
}

/// The fixed five-entry roster used by the demo binary.
pub const DEMO_SUBJECTS: &[Subject] = &[
    Subject { name: "Ananya S.", age: 22 },
    Subject { name: "Ritika P.", age: 24 },
    Subject { name: "Meera K.", age: 23 },
    Subject { name: "Divya R.", age: 21 },
    Subject { name: "Sneha T.", age: 25 },
];

/// Prefix of every synthesized case identifier.
pub const CASE_ID_PREFIX: &str = "SHC";

/// Output directory for the medical half of a paired run.
pub const MEDICAL_OUTPUT_DIR: &str = "paired_medical_reports";

/// Output directory for the forensic half of a paired run.
pub const FORENSIC_OUTPUT_DIR: &str = "paired_forensic_reports";

/// Identifying and demographic data for one synthetic case.
///
/// Immutable per generation call; in paired mode both documents of a pair
/// share one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseRecord {
    /// Synthesized case identifier, e.g. `SHC-2025-09-01`.
    pub case_id: String,
    /// Subject display name.
    pub subject_name: String,
    /// Subject age in years.
    pub age: u32,
    /// Date printed on the document.
    pub exam_date: NaiveDate,
}

impl CaseRecord {
    /// Creates a new case record.
    pub fn new(
        case_id: impl Into<String>,
        subject_name: impl Into<String>,
        age: u32,
        exam_date: NaiveDate,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            subject_name: subject_name.into(),
            age,
            exam_date,
        }
    }
}

/// Synthesizes a case identifier in the fixed `PREFIX-YYYY-MM-0<index>`
/// format with a 1-based index.
pub fn case_id(prefix: &str, date: NaiveDate, index: usize) -> String {
    format!("{}-{}-{:02}-0{}", prefix, date.year(), date.month(), index)
}

/// Builds one case record per roster entry, sharing the exam date.
pub fn cases_for(subjects: &[Subject], exam_date: NaiveDate) -> Vec<CaseRecord> {
    subjects
        .iter()
        .enumerate()
        .map(|(position, subject)| {
            CaseRecord::new(
                case_id(CASE_ID_PREFIX, exam_date, position + 1),
                subject.name,
                subject.age,
                exam_date,
            )
        })
        .collect()
}

/// Generates one document for a case: QR encoding, composition, rendering,
/// and the `_qr.png` side file next to the written PDF.
pub fn generate_report(
    case: &CaseRecord,
    kind: ReportKind,
    path: &Path,
    rng: &mut impl Rng,
) -> Result<(), Error> {
    let qr_png = qr::encode_png(&qr::payload(&case.case_id))?;
    let sections = compose::compose(case, kind, &qr_png, rng);
    render::write_report(&sections, path)?;
    qr::write_side_file(path, &qr_png)?;
    Ok(())
}

/// Generates one medical report per subject into a single flat directory.
pub fn run_single(
    subjects: &[Subject],
    exam_date: NaiveDate,
    out_dir: &Path,
    rng: &mut impl Rng,
) -> Result<(), Error> {
    for (position, case) in cases_for(subjects, exam_date).iter().enumerate() {
        let path = out_dir.join(format!("demo_medical_report_{}.pdf", position + 1));
        generate_report(case, ReportKind::Medical, &path, rng)?;
    }
    Ok(())
}

/// Generates one medical and one forensic report per subject.
///
/// Both documents of a pair share the case id and subject metadata and are
/// written into separate directories.  The two files are independent
/// artifacts: a failure on the forensic half leaves the medical half on disk.
pub fn run_paired(
    subjects: &[Subject],
    exam_date: NaiveDate,
    medical_dir: &Path,
    forensic_dir: &Path,
    rng: &mut impl Rng,
) -> Result<(), Error> {
    for (position, case) in cases_for(subjects, exam_date).iter().enumerate() {
        let medical_path = medical_dir.join(format!("medical_report_{}.pdf", position + 1));
        generate_report(case, ReportKind::Medical, &medical_path, rng)?;

        let forensic_path = forensic_dir.join(format!("forensic_report_{}.pdf", position + 1));
        generate_report(case, ReportKind::Forensic, &forensic_path, rng)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn september() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 15).expect("valid date")
    }

    #[test]
    fn case_id_uses_the_fixed_format() {
        assert_eq!(case_id("SHC", september(), 1), "SHC-2025-09-01");
        assert_eq!(case_id("SHC", september(), 5), "SHC-2025-09-05");
        // The index is not zero-padded beyond the literal leading zero.
        assert_eq!(case_id("SHC", september(), 10), "SHC-2025-09-010");
    }

    #[test]
    fn cases_share_date_and_carry_roster_data() {
        let cases = cases_for(DEMO_SUBJECTS, september());

        assert_eq!(cases.len(), DEMO_SUBJECTS.len());
        for (case, subject) in cases.iter().zip(DEMO_SUBJECTS) {
            assert_eq!(case.subject_name, subject.name);
            assert_eq!(case.age, subject.age);
            assert_eq!(case.exam_date, september());
        }
        assert_eq!(cases[0].case_id, "SHC-2025-09-01");
        assert_eq!(cases[4].case_id, "SHC-2025-09-05");
    }
}
