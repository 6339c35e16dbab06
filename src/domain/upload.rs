//! Product image uploads: accepted formats, size bound and storage naming.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Uploads must be strictly smaller than this many bytes (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5_242_880;

/// Image formats accepted by the upload pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageMime {
    Png,
    Jpeg,
}

impl ImageMime {
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Extension appended to stored objects, derived only from the mime type.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Jpeg => ".jpeg",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Upload File Required With Maximum File Size 5 MB/File.!")]
    MissingOrTooLarge,
    #[error("Format Allowed: .jpeg, .jpg or .png")]
    UnsupportedFormat,
}

impl TryFrom<&str> for ImageMime {
    type Error = UploadRejection;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "image/png" => Ok(Self::Png),
            "image/jpeg" => Ok(Self::Jpeg),
            _ => Err(UploadRejection::UnsupportedFormat),
        }
    }
}

/// An upload that passed size and format checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedImage {
    pub mime: ImageMime,
    pub bytes: Vec<u8>,
}

impl ValidatedImage {
    /// Checks the declared size first, then the declared mime type.
    ///
    /// An empty file is within bounds; a missing file never gets here.
    pub fn validate(
        bytes: Vec<u8>,
        declared_mime: Option<&str>,
        declared_size: u64,
    ) -> Result<Self, UploadRejection> {
        if declared_size >= MAX_UPLOAD_BYTES {
            return Err(UploadRejection::MissingOrTooLarge);
        }
        let mime = declared_mime
            .ok_or(UploadRejection::UnsupportedFormat)
            .and_then(ImageMime::try_from)?;
        Ok(Self { mime, bytes })
    }
}

/// Storage key `{year}/{month}/{day}/{uuid}{ext}`; month and day are not padded.
pub fn storage_key(date: NaiveDate, mime: ImageMime) -> String {
    format!(
        "{}/{}/{}/{}{}",
        date.year(),
        date.month(),
        date.day(),
        Uuid::new_v4(),
        mime.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_small_png() {
        let image = ValidatedImage::validate(vec![0; 10], Some("image/png"), 100 * 1024).unwrap();
        assert_eq!(image.mime, ImageMime::Png);
    }

    #[test]
    fn rejects_boundary_size() {
        let err = ValidatedImage::validate(vec![], Some("image/png"), MAX_UPLOAD_BYTES).unwrap_err();
        assert_eq!(err, UploadRejection::MissingOrTooLarge);
        assert!(ValidatedImage::validate(vec![], Some("image/png"), MAX_UPLOAD_BYTES - 1).is_ok());
    }

    #[test]
    fn accepts_empty_png() {
        let image = ValidatedImage::validate(vec![], Some("image/png"), 0).unwrap();
        assert_eq!(image.mime, ImageMime::Png);
        assert!(image.bytes.is_empty());
    }

    #[test]
    fn rejects_gif_and_missing_mime() {
        assert_eq!(
            ValidatedImage::validate(vec![1], Some("image/gif"), 1).unwrap_err(),
            UploadRejection::UnsupportedFormat
        );
        assert_eq!(
            ValidatedImage::validate(vec![1], None, 1).unwrap_err(),
            UploadRejection::UnsupportedFormat
        );
    }

    #[test]
    fn storage_key_is_date_partitioned() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let key = storage_key(date, ImageMime::Jpeg);
        assert!(key.starts_with("2026/3/7/"));
        assert!(key.ends_with(".jpeg"));
        let file = key.rsplit('/').next().unwrap();
        assert!(Uuid::parse_str(file.trim_end_matches(".jpeg")).is_ok());
    }

    #[test]
    fn storage_keys_do_not_repeat() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_ne!(
            storage_key(date, ImageMime::Png),
            storage_key(date, ImageMime::Png)
        );
    }
}
