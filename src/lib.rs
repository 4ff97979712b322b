//! Core entry point for the demo_reports crate.
//!
//! The crate generates synthetic demonstration documents: medical examination
//! reports and forensic lab reports rendered as PDFs, each carrying a QR code
//! derived from its case identifier.  All patient data is randomly sampled
//! from fixed vocabularies and is entirely fictional.

pub mod cases;
pub mod compose;
pub mod fonts;
pub mod model;
pub mod qr;
pub mod render;
pub mod sample;
