//! Scannable code generation and the `_qr.png` side file convention.
//!
//! The payload is derived deterministically from the case identifier, encoded
//! as a QR symbol, and rendered to PNG bytes.  The bytes are embedded into the
//! PDF directly and additionally written to a side file next to the document,
//! which is kept as a deliverable.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use genpdf::error::{Context as _, Error, ErrorKind};
use image::{DynamicImage, ImageOutputFormat, Luma};
use qrcode::{EcLevel, QrCode};

/// Error correction level applied to every generated code.
const QR_EC_LEVEL: EcLevel = EcLevel::M;

/// Pixel edge length of a single QR module in the rendered bitmap.
const QR_MODULE_PX: u32 = 8;

/// File name suffix appended to the document path for the side file.
const QR_SIDE_FILE_SUFFIX: &str = "_qr.png";

/// Builds the verification payload encoded for a case.
///
/// The format is fixed: `CaseID:<id> | Verified:Demo`.
pub fn payload(case_id: &str) -> String {
    format!("CaseID:{} | Verified:Demo", case_id)
}

/// Encodes `payload` as a QR symbol and renders it to PNG bytes.
///
/// The payload is constructed deterministically, so an encoding failure is
/// unexpected and treated as fatal for the document being generated.
pub fn encode_png(payload: &str) -> Result<Vec<u8>, Error> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), QR_EC_LEVEL)
        .map_err(|err| {
            Error::new(
                format!("Failed to encode scannable code payload: {}", err),
                ErrorKind::InvalidData,
            )
        })?;

    let bitmap = code
        .render::<Luma<u8>>()
        .module_dimensions(QR_MODULE_PX, QR_MODULE_PX)
        .build();

    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(bitmap)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .context("Failed to render scannable code to PNG")?;
    Ok(bytes)
}

/// Returns the side file path for the given document path.
///
/// The convention appends `_qr.png` to the full document file name, so
/// `reports/medical_report_1.pdf` maps to
/// `reports/medical_report_1.pdf_qr.png`.
pub fn side_file_path(document_path: &Path) -> PathBuf {
    let mut name = document_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(QR_SIDE_FILE_SUFFIX);
    document_path.with_file_name(name)
}

/// Writes the encoded PNG next to the document it belongs to.
pub fn write_side_file(document_path: &Path, png: &[u8]) -> Result<PathBuf, Error> {
    let path = side_file_path(document_path);
    fs::write(&path, png)
        .with_context(|| format!("Failed to write QR side file {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_fixed_format() {
        assert_eq!(
            payload("SHC-2025-09-01"),
            "CaseID:SHC-2025-09-01 | Verified:Demo"
        );
    }

    #[test]
    fn encode_png_produces_png_bytes() {
        let bytes = encode_png(&payload("SHC-2025-09-01")).expect("encode payload");
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']));
    }

    #[test]
    fn side_file_path_appends_suffix_to_file_name() {
        let path = side_file_path(Path::new("paired_medical_reports/medical_report_1.pdf"));
        assert_eq!(
            path,
            Path::new("paired_medical_reports/medical_report_1.pdf_qr.png")
        );
    }
}
