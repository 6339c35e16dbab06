use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use actix_web::error::BlockingError;
use actix_web::web;
use thiserror::Error;

/// Multipart body of the image upload; the file travels in field `data`.
///
/// The extractor limit sits above the 5 MiB rule so oversize files reach
/// validation and are reported like any other invalid input.
#[derive(MultipartForm)]
pub struct ProductImageUploadForm {
    #[multipart(limit = "10MB")]
    pub data: Option<TempFile>,
}

/// Raw upload as declared by the client, not yet validated.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub size: u64,
}

#[derive(Debug, Error)]
pub enum UploadFormError {
    #[error("failed to read uploaded file: {0}")]
    ReadFailed(#[from] std::io::Error),
    #[error("failed to read uploaded file: {0}")]
    Blocking(#[from] BlockingError),
}

impl ProductImageUploadForm {
    /// Read the spooled file back on the blocking pool.
    ///
    /// Returns `None` when the request carried no `data` field.
    pub async fn into_upload(self) -> Result<Option<ImageUpload>, UploadFormError> {
        let Some(TempFile {
            file,
            content_type,
            size,
            ..
        }) = self.data
        else {
            return Ok(None);
        };

        let bytes = web::block(move || std::fs::read(file.path())).await??;

        Ok(Some(ImageUpload {
            bytes,
            content_type: content_type.map(|m| m.essence_str().to_string()),
            size: size as u64,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn spooled(bytes: &[u8]) -> TempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        TempFile {
            file,
            content_type: Some("image/png".parse().unwrap()),
            file_name: Some("dish.png".into()),
            size: bytes.len(),
        }
    }

    #[actix_web::test]
    async fn reads_spooled_file() {
        let form = ProductImageUploadForm {
            data: Some(spooled(&[1, 2, 3])),
        };
        let upload = form.into_upload().await.unwrap().unwrap();
        assert_eq!(upload.bytes, vec![1, 2, 3]);
        assert_eq!(upload.content_type.as_deref(), Some("image/png"));
        assert_eq!(upload.size, 3);
    }

    #[actix_web::test]
    async fn empty_file_is_still_an_upload() {
        let form = ProductImageUploadForm {
            data: Some(spooled(&[])),
        };
        let upload = form.into_upload().await.unwrap().unwrap();
        assert!(upload.bytes.is_empty());
        assert_eq!(upload.size, 0);
    }

    #[actix_web::test]
    async fn missing_field_yields_none() {
        let form = ProductImageUploadForm { data: None };
        assert!(form.into_upload().await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn read_failure_keeps_the_cause() {
        let file = spooled(&[1]);
        std::fs::remove_file(file.file.path()).unwrap();
        let form = ProductImageUploadForm { data: Some(file) };

        let err = form.into_upload().await.unwrap_err();

        assert!(matches!(err, UploadFormError::ReadFailed(_)));
        let message = err.to_string();
        assert!(message.starts_with("failed to read uploaded file: "));
        assert!(message.len() > "failed to read uploaded file: ".len());
    }
}
