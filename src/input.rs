//! 画像読み込み
//!
//! メディアタイプは 明示指定 > 先頭バイト > 拡張子 の順で決める。

use crate::error::{CalMealError, Result};
use calmeal_common::{Error as CommonError, ImageInput, MediaType};
use std::path::Path;

pub fn load_image(path: &Path, media_type: Option<MediaType>) -> Result<ImageInput> {
    if !path.is_file() {
        return Err(CalMealError::MissingInput(path.display().to_string()));
    }

    let data = std::fs::read(path)?;
    if data.is_empty() {
        return Err(CalMealError::MissingInput(format!("{} (空のファイル)", path.display())));
    }

    let media_type = match media_type {
        Some(media_type) => media_type,
        None => detect_media_type(path, &data)?,
    };

    log::debug!("Loaded {} ({} bytes, {})", path.display(), data.len(), media_type);

    Ok(ImageInput::new(data, media_type)?)
}

fn detect_media_type(path: &Path, data: &[u8]) -> Result<MediaType> {
    match image::guess_format(data) {
        Ok(image::ImageFormat::Jpeg) => return Ok(MediaType::Jpeg),
        Ok(image::ImageFormat::Png) => return Ok(MediaType::Png),
        Ok(other) => {
            return Err(CommonError::UnsupportedMediaType(format!("{:?}", other)).into());
        }
        Err(_) => {}
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();

    MediaType::from_extension(&ext)
        .ok_or_else(|| CommonError::UnsupportedMediaType(path.display().to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10];

    #[test]
    fn test_load_missing_file() {
        let result = load_image(Path::new("/nonexistent/meal.jpg"), None);
        assert!(matches!(result, Err(CalMealError::MissingInput(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.jpg");
        std::fs::write(&path, b"").unwrap();

        let result = load_image(&path, None);
        assert!(matches!(result, Err(CalMealError::MissingInput(_))));
    }

    #[test]
    fn test_detect_by_magic_bytes_over_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mislabeled.jpg");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let image = load_image(&path, None).unwrap();
        assert_eq!(image.media_type(), MediaType::Png);
    }

    #[test]
    fn test_detect_jpeg_magic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo");
        std::fs::write(&path, JPEG_MAGIC).unwrap();

        let image = load_image(&path, None).unwrap();
        assert_eq!(image.media_type(), MediaType::Jpeg);
    }

    #[test]
    fn test_detect_by_extension_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meal.JPEG");
        std::fs::write(&path, b"not really an image").unwrap();

        let image = load_image(&path, None).unwrap();
        assert_eq!(image.media_type(), MediaType::Jpeg);
    }

    #[test]
    fn test_explicit_media_type_wins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meal.jpg");
        std::fs::write(&path, JPEG_MAGIC).unwrap();

        let image = load_image(&path, Some(MediaType::Png)).unwrap();
        assert_eq!(image.media_type(), MediaType::Png);
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meal.gif");
        std::fs::write(&path, b"GIF89a\x01\x00\x01\x00").unwrap();

        let result = load_image(&path, None);
        assert!(matches!(
            result,
            Err(CalMealError::Common(CommonError::UnsupportedMediaType(_)))
        ));
    }

    #[test]
    fn test_unknown_bytes_and_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();

        assert!(load_image(&path, None).is_err());
    }
}
