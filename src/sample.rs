//! Random field sampling from the fixed demo vocabularies.
//!
//! Every sampling operation draws independently from a constant range or
//! option list and keeps no memory of prior calls.  The random source is an
//! injected [`rand::Rng`] so seeded generators reproduce the exact same
//! sampled values.

use std::fmt;

use rand::Rng;

/// Physical findings reported for the skin and limbs.
pub const INJURY_FINDINGS: &[&str] = &[
    "No visible injuries",
    "Minor bruises on left arm",
    "Redness on neck and shoulder",
    "Small abrasion on right hand",
    "Tenderness on left forearm",
    "Bruises on thigh and knee",
    "Scratch marks on back",
];

/// Psychological observations recorded during the examination.
pub const PSYCHOLOGICAL_STATES: &[&str] = &[
    "Anxious and distressed",
    "Calm but shaken",
    "Highly anxious",
    "Mildly upset",
    "Fearful, requires counseling",
];

/// Genital examination findings.
pub const GENITAL_FINDINGS: &[&str] = &[
    "Normal, no evidence of penetration or trauma",
    "Minor abrasions, no penetration",
    "Signs of trauma, inconclusive for penetration",
    "Evidence of forced contact, trauma present",
];

/// Blood test outcomes used by the forensic report.
pub const BLOOD_RESULTS: &[&str] = &["Normal", "Mild stress markers"];

/// Urine test outcomes used by the forensic report.
pub const URINE_RESULTS: &[&str] = &["Normal", "Traces of stress hormones"];

/// DNA swab outcomes used by the forensic report.
pub const DNA_RESULTS: &[&str] = &["Collected", "Insufficient sample"];

/// STI test outcomes used by the forensic report.
pub const STI_RESULTS: &[&str] = &["Negative", "Inconclusive", "Positive"];

/// Toxicology outcomes used by the forensic report.
pub const TOXICOLOGY_RESULTS: &[&str] = &["Negative", "No abnormal findings"];

/// One set of vital sign measurements.
///
/// Values stay inside the narrow "unremarkable" ranges the demo documents
/// describe; the composer formats them into display strings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VitalSigns {
    /// Systolic blood pressure in mmHg, within [110, 130].
    pub systolic: u32,
    /// Diastolic blood pressure in mmHg, within [70, 85].
    pub diastolic: u32,
    /// Pulse in beats per minute, within [70, 90].
    pub pulse: u32,
    /// Respiratory rate in breaths per minute, within [14, 18].
    pub respiratory_rate: u32,
    /// Body temperature in degrees Celsius, within [36.5, 37.5], one decimal.
    pub temperature: f64,
}

/// One value from each of the three examination finding vocabularies.
///
/// The draws are independent; no correlation between the fields is enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FindingsSet {
    /// Injury description shared by the skin and limb lines.
    pub injury: &'static str,
    /// Psychological observation.
    pub psychological: &'static str,
    /// Genital examination finding.
    pub genital: &'static str,
}

/// The five categorical lab results reported by the forensic variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabResults {
    /// Blood test outcome.
    pub blood: &'static str,
    /// Urine test outcome.
    pub urine: &'static str,
    /// DNA swab outcome.
    pub dna: &'static str,
    /// STI test outcome.
    pub sti: &'static str,
    /// Toxicology outcome.
    pub toxicology: &'static str,
}

/// Time of day interpolated into the incident history narrative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncidentTime {
    /// Hour of day, within [9, 20].
    pub hour: u32,
    /// Minute, within [0, 59].
    pub minute: u32,
}

impl fmt::Display for IncidentTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} hrs", self.hour, self.minute)
    }
}

fn pick(rng: &mut impl Rng, options: &'static [&'static str]) -> &'static str {
    options[rng.gen_range(0..options.len())]
}

/// Samples one full set of vital signs.
pub fn vital_signs(rng: &mut impl Rng) -> VitalSigns {
    VitalSigns {
        systolic: rng.gen_range(110..=130),
        diastolic: rng.gen_range(70..=85),
        pulse: rng.gen_range(70..=90),
        respiratory_rate: rng.gen_range(14..=18),
        temperature: (rng.gen_range(36.5f64..=37.5f64) * 10.0).round() / 10.0,
    }
}

/// Samples one injury, psychological, and genital finding.
pub fn examination_findings(rng: &mut impl Rng) -> FindingsSet {
    FindingsSet {
        injury: pick(rng, INJURY_FINDINGS),
        psychological: pick(rng, PSYCHOLOGICAL_STATES),
        genital: pick(rng, GENITAL_FINDINGS),
    }
}

/// Samples the five forensic lab results.
pub fn lab_results(rng: &mut impl Rng) -> LabResults {
    LabResults {
        blood: pick(rng, BLOOD_RESULTS),
        urine: pick(rng, URINE_RESULTS),
        dna: pick(rng, DNA_RESULTS),
        sti: pick(rng, STI_RESULTS),
        toxicology: pick(rng, TOXICOLOGY_RESULTS),
    }
}

/// Samples the reported time of the incident.
pub fn incident_time(rng: &mut impl Rng) -> IncidentTime {
    IncidentTime {
        hour: rng.gen_range(9..=20),
        minute: rng.gen_range(0..=59),
    }
}
