//! Capture metadata extraction
//!
//! Reads the handful of EXIF tags the lightbox shows. Anything missing or
//! unreadable is simply unknown; extraction never fails.

use std::io::Cursor;
use std::sync::Arc;

use exif::{Exif, In, Tag, Value};

use crate::logic::formatting;

/// Exposure time as the camera recorded it (a rational number of seconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExposureTime {
    pub num: u32,
    pub denom: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureMetadata {
    pub model: Option<String>,
    pub f_stop: Option<f64>,
    pub exposure_time: Option<ExposureTime>,
    pub iso: Option<u32>,
    pub focal_length: Option<f64>,
}

impl CaptureMetadata {
    /// All fields unknown
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::default()
    }

    /// Pull the displayed tags out of a parsed EXIF block
    pub fn from_exif(exif: &Exif) -> Self {
        let model = exif
            .get_field(Tag::Model, In::PRIMARY)
            .and_then(|f| ascii_value(&f.value));

        let f_stop = exif
            .get_field(Tag::FNumber, In::PRIMARY)
            .and_then(|f| rational_value(&f.value));

        let exposure_time = exif
            .get_field(Tag::ExposureTime, In::PRIMARY)
            .and_then(|f| match &f.value {
                Value::Rational(v) => v.first().map(|r| ExposureTime {
                    num: r.num,
                    denom: r.denom,
                }),
                _ => None,
            })
            .filter(|t| t.denom != 0 && t.num != 0);

        let iso = exif
            .get_field(Tag::PhotographicSensitivity, In::PRIMARY)
            .and_then(|f| f.value.get_uint(0))
            .filter(|iso| *iso > 0);

        let focal_length = exif
            .get_field(Tag::FocalLength, In::PRIMARY)
            .and_then(|f| rational_value(&f.value));

        Self {
            model,
            f_stop,
            exposure_time,
            iso,
            focal_length,
        }
    }

    /// Lines shown under the lightbox image
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "Camera Model: {}",
                self.model.as_deref().unwrap_or("Unknown Model")
            ),
            format!(
                "F-stop: {}",
                self.f_stop.map(formatting::format_f_stop).unwrap_or_else(na)
            ),
            format!(
                "Exposure: {}",
                self.exposure_time
                    .and_then(|t| formatting::format_exposure(t.num, t.denom))
                    .unwrap_or_else(na)
            ),
            format!(
                "ISO: {}",
                self.iso.map(|iso| iso.to_string()).unwrap_or_else(na)
            ),
            format!(
                "Focal Length: {}",
                self.focal_length
                    .map(formatting::format_focal_length)
                    .unwrap_or_else(na)
            ),
        ]
    }
}

fn na() -> String {
    "N/A".to_string()
}

fn ascii_value(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts.first().and_then(|bytes| {
            let text = String::from_utf8_lossy(bytes);
            let text = text.trim_matches(|c: char| c == '\0' || c.is_whitespace());
            if text.is_empty() {
                None
            } else {
                Some(text.to_string())
            }
        }),
        _ => None,
    }
}

fn rational_value(value: &Value) -> Option<f64> {
    match value {
        Value::Rational(v) => v
            .first()
            .filter(|r| r.denom != 0 && r.num != 0)
            .map(|r| r.to_f64()),
        _ => None,
    }
}

/// Parse capture metadata out of an image container, synchronously
///
/// Works on any container kamadak-exif understands (JPEG, TIFF-based raw, PNG,
/// WebP, HEIF). Unparseable input gives all-unknown metadata.
pub fn parse_capture_metadata(bytes: &[u8]) -> CaptureMetadata {
    match exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => CaptureMetadata::from_exif(&exif),
        Err(e) => {
            log::debug!("No EXIF data: {}", e);
            CaptureMetadata::unknown()
        }
    }
}

/// Extract capture metadata without blocking the runtime
pub async fn extract_capture_metadata(bytes: Arc<[u8]>) -> CaptureMetadata {
    match tokio::task::spawn_blocking(move || parse_capture_metadata(&bytes)).await {
        Ok(metadata) => metadata,
        Err(e) => {
            log::warn!("Metadata extraction task failed: {}", e);
            CaptureMetadata::unknown()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exif::experimental::Writer;
    use exif::{Field, Rational};

    fn tiff_with(fields: &[Field]) -> Vec<u8> {
        let mut writer = Writer::new();
        for field in fields {
            writer.push_field(field);
        }
        let mut buf = Cursor::new(Vec::new());
        writer.write(&mut buf, false).expect("write tiff");
        buf.into_inner()
    }

    fn field(tag: Tag, value: Value) -> Field {
        Field {
            tag,
            ifd_num: In::PRIMARY,
            value,
        }
    }

    #[test]
    fn test_unparseable_bytes_are_unknown() {
        let metadata = parse_capture_metadata(b"definitely not an image");
        assert!(metadata.is_unknown());
        assert_eq!(
            metadata.lines(),
            vec![
                "Camera Model: Unknown Model",
                "F-stop: N/A",
                "Exposure: N/A",
                "ISO: N/A",
                "Focal Length: N/A",
            ]
        );
    }

    #[test]
    fn test_reads_capture_tags() {
        let bytes = tiff_with(&[
            field(Tag::Model, Value::Ascii(vec![b"Canon EOS R6".to_vec()])),
            field(Tag::FNumber, Value::Rational(vec![Rational { num: 28, denom: 10 }])),
            field(Tag::ExposureTime, Value::Rational(vec![Rational { num: 1, denom: 250 }])),
            field(Tag::PhotographicSensitivity, Value::Short(vec![400])),
            field(Tag::FocalLength, Value::Rational(vec![Rational { num: 50, denom: 1 }])),
        ]);

        let metadata = parse_capture_metadata(&bytes);
        assert_eq!(metadata.model.as_deref(), Some("Canon EOS R6"));
        assert_eq!(metadata.iso, Some(400));
        assert_eq!(
            metadata.lines(),
            vec![
                "Camera Model: Canon EOS R6",
                "F-stop: f/2.8",
                "Exposure: 1/250s",
                "ISO: 400",
                "Focal Length: 50mm",
            ]
        );
    }

    #[test]
    fn test_missing_tags_are_unknown_not_errors() {
        let bytes = tiff_with(&[field(
            Tag::Model,
            Value::Ascii(vec![b"X100V".to_vec()]),
        )]);

        let metadata = parse_capture_metadata(&bytes);
        assert_eq!(metadata.model.as_deref(), Some("X100V"));
        assert!(metadata.f_stop.is_none());
        assert!(metadata.exposure_time.is_none());
        assert!(metadata.iso.is_none());
        assert!(metadata.focal_length.is_none());
    }

    #[test]
    fn test_slow_exposure_line_is_decimal() {
        let metadata = CaptureMetadata {
            exposure_time: Some(ExposureTime { num: 8, denom: 10 }),
            ..CaptureMetadata::unknown()
        };
        assert_eq!(metadata.lines()[2], "Exposure: 0.8s");
    }

    #[tokio::test]
    async fn test_extract_runs_off_the_runtime() {
        let bytes: Arc<[u8]> = Arc::from(&b"\xff\xd8 truncated jpeg"[..]);
        let metadata = extract_capture_metadata(bytes).await;
        assert!(metadata.is_unknown());
    }
}
