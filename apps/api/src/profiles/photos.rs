//! Photo upload to the S3/MinIO bucket. Uploads happen before the profile
//! row is inserted; an upload failure fails the whole submission, so a
//! half-written "profile without its chosen photo" never exists.

use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

const PHOTO_PREFIX: &str = "profile-photos";

/// Uploads one photo and returns its public URL.
pub async fn upload_photo(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    public_base_url: &str,
    filename: &str,
    data: Bytes,
) -> Result<String, AppError> {
    let key = object_key(filename);
    let content_type = content_type_for(&key);

    s3.put_object()
        .bucket(bucket)
        .key(&key)
        .body(ByteStream::from(data))
        .content_type(content_type)
        .send()
        .await
        .map_err(|e| AppError::S3(format!("Photo upload failed: {e}")))?;

    info!("Uploaded photo to s3://{bucket}/{key}");
    Ok(format!(
        "{}/{bucket}/{key}",
        public_base_url.trim_end_matches('/')
    ))
}

/// Unique object key: timestamp + random component, keeping the original
/// file extension so the URL stays recognizable as an image.
fn object_key(filename: &str) -> String {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.len() <= 8)
        .unwrap_or("bin");
    format!(
        "{PHOTO_PREFIX}/{}_{}.{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        ext.to_lowercase()
    )
}

fn content_type_for(key: &str) -> &'static str {
    match key.rsplit_once('.').map(|(_, ext)| ext) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_keeps_extension() {
        let key = object_key("my photo.JPG");
        assert!(key.starts_with("profile-photos/"));
        assert!(key.ends_with(".jpg"));
    }

    #[test]
    fn test_object_key_without_extension_falls_back() {
        assert!(object_key("photo").ends_with(".bin"));
        assert!(object_key("photo.").ends_with(".bin"));
    }

    #[test]
    fn test_object_keys_are_unique() {
        assert_ne!(object_key("a.png"), object_key("a.png"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("x/1.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("x/1.png"), "image/png");
        assert_eq!(content_type_for("x/1.bin"), "application/octet-stream");
    }
}
