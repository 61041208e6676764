//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 源图片只来自本地文件。在“尽可能早”的阶段拒绝不合格输入：
//! 先查存在性与体积，再看文件签名，然后读图片头拿尺寸，最后才完整解码。
//!
//! ## 实现思路
//!
//! - 文件：存在性 + metadata 体积限制 + 读取。
//! - 签名：`infer` 识别魔数，只拒绝“明确识别为非图片”的内容；
//!   PPM/TGA 这类没有稳定魔数的格式交给 `image` 判断。
//! - 格式：魔数优先，猜不出时退回文件扩展名。
//! - 尺寸：仅解析图片头，按像素上限快速拒绝。
//! - 解码后统一转为 RGBA8，后续合成全部基于 `RgbaImage`。

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader, RgbaImage};

use super::{IconConfig, IconError, IconGenerator};

impl IconGenerator {
    /// 从本地路径加载图片并转换为 RGBA8。
    pub(super) fn load_rgba(&self, path: &Path) -> Result<RgbaImage, IconError> {
        Self::load_rgba_with_limits(path, &self.config)
    }

    pub(super) fn load_rgba_with_limits(
        path: &Path,
        config: &IconConfig,
    ) -> Result<RgbaImage, IconError> {
        log::debug!("📁 开始读取源图片 - 路径: {}", path.display());

        if !path.exists() {
            return Err(IconError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let metadata = fs::metadata(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = fs::read(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(path, &bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let decoded = Self::reader_for(path, &bytes)?
            .decode()
            .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;
        let rgba = decoded.to_rgba8();

        log::debug!(
            "🖼️ 源图片解码成功 - {} 尺寸: {}x{}",
            path.display(),
            rgba.width(),
            rgba.height()
        );

        Ok(rgba)
    }

    /// 通过魔数确认文件内容确实是图片。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
        if bytes.is_empty() {
            return Err(IconError::InvalidFormat("图片内容为空".to_string()));
        }

        let Some(kind) = infer::get(bytes) else {
            log::debug!("🔍 文件签名未知，交给解码器按格式判断");
            return Ok(());
        };

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(IconError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }

    /// 构造内存读取器：扩展名给出初始格式，魔数猜测成功时覆盖它。
    fn reader_for<'a>(
        path: &Path,
        bytes: &'a [u8],
    ) -> Result<ImageReader<Cursor<&'a [u8]>>, IconError> {
        let mut reader = ImageReader::new(Cursor::new(bytes));
        if let Ok(format) = ImageFormat::from_path(path) {
            reader.set_format(format);
        }

        reader
            .with_guessed_format()
            .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))
    }

    /// 仅通过内存中的图片头信息读取宽高。
    fn inspect_dimensions_from_memory(
        path: &Path,
        bytes: &[u8],
    ) -> Result<(u32, u32), IconError> {
        Self::reader_for(path, bytes)?
            .into_dimensions()
            .map_err(|e| IconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(
        config: &IconConfig,
        width: u32,
        height: u32,
    ) -> Result<(), IconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels == 0 {
            return Err(IconError::Decode(format!(
                "图片尺寸为空：{}x{}",
                width, height
            )));
        }

        if pixels > config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use image::{ImageBuffer, ImageFormat, Rgba};

    use super::*;

    fn unique_temp_dir() -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("extension-icons-loader-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgba([(x % 255) as u8, (y % 255) as u8, 90, 255])
        });
        img.save_with_format(path, ImageFormat::Png)
            .expect("failed to encode test image");
    }

    #[test]
    fn loads_png_as_rgba() {
        let dir = unique_temp_dir();
        let path = dir.join("logo.png");
        write_png(&path, 30, 20);

        let image = IconGenerator::load_rgba_with_limits(&path, &IconConfig::default())
            .expect("load should succeed");
        assert_eq!(image.dimensions(), (30, 20));
        assert_eq!(image.get_pixel(3, 4), &Rgba([3, 4, 90, 255]));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn converts_rgb_source_to_opaque_rgba() {
        let dir = unique_temp_dir();
        let path = dir.join("logo_rgb.png");
        let rgb = image::RgbImage::from_pixel(8, 8, image::Rgb([1, 2, 3]));
        rgb.save_with_format(&path, ImageFormat::Png).expect("save rgb");

        let image = IconGenerator::load_rgba_with_limits(&path, &IconConfig::default())
            .expect("load should succeed");
        assert_eq!(image.get_pixel(0, 0), &Rgba([1, 2, 3, 255]));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_is_filesystem_error() {
        let dir = unique_temp_dir();
        let err = IconGenerator::load_rgba_with_limits(&dir.join("nope.png"), &IconConfig::default())
            .expect_err("missing file must fail");
        assert!(matches!(err, IconError::FileSystem(_)));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn non_image_bytes_are_rejected_before_decode() {
        let dir = unique_temp_dir();
        let path = dir.join("logo.png");
        std::fs::write(&path, b"definitely not a png").expect("write junk");

        let err = IconGenerator::load_rgba_with_limits(&path, &IconConfig::default())
            .expect_err("junk must fail");
        assert!(matches!(err, IconError::InvalidFormat(_)));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn loads_ppm_without_known_signature() {
        let dir = unique_temp_dir();
        let path = dir.join("logo.ppm");
        let rgb = image::RgbImage::from_pixel(12, 9, image::Rgb([10, 20, 30]));
        rgb.save_with_format(&path, ImageFormat::Pnm).expect("save ppm");

        let image = IconGenerator::load_rgba_with_limits(&path, &IconConfig::default())
            .expect("ppm should load");
        assert_eq!(image.dimensions(), (12, 9));
        assert_eq!(image.get_pixel(5, 5), &Rgba([10, 20, 30, 255]));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn loads_tga_by_extension() {
        let dir = unique_temp_dir();
        let path = dir.join("logo.tga");
        let rgba = image::RgbaImage::from_pixel(7, 5, Rgba([200, 100, 50, 128]));
        rgba.save_with_format(&path, ImageFormat::Tga).expect("save tga");

        let image = IconGenerator::load_rgba_with_limits(&path, &IconConfig::default())
            .expect("tga should load");
        assert_eq!(image.dimensions(), (7, 5));
        assert_eq!(image.get_pixel(0, 0), &Rgba([200, 100, 50, 128]));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn recognised_non_image_signature_is_rejected() {
        let dir = unique_temp_dir();
        let path = dir.join("logo.png");
        std::fs::write(&path, b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\n")
            .expect("write pdf");

        let err = IconGenerator::load_rgba_with_limits(&path, &IconConfig::default())
            .expect_err("pdf must fail");
        assert!(matches!(err, IconError::InvalidFormat(_)));
        assert!(err.to_string().contains("application/pdf"));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn oversized_file_hits_resource_limit() {
        let dir = unique_temp_dir();
        let path = dir.join("logo.png");
        write_png(&path, 64, 64);

        let config = IconConfig {
            max_file_size: 16,
            ..IconConfig::default()
        };
        let err = IconGenerator::load_rgba_with_limits(&path, &config)
            .expect_err("file size limit must apply");
        assert!(matches!(err, IconError::ResourceLimit(_)));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn too_many_pixels_is_rejected_from_header() {
        let dir = unique_temp_dir();
        let path = dir.join("logo.png");
        write_png(&path, 100, 100);

        let config = IconConfig {
            max_decoded_pixels: 9_999,
            ..IconConfig::default()
        };
        let err = IconGenerator::load_rgba_with_limits(&path, &config)
            .expect_err("pixel limit must apply");
        assert!(err.to_string().contains("图片像素过大"));
        let _ = std::fs::remove_dir_all(dir);
    }
}
