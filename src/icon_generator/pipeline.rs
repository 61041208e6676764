//! # 缩放流水线模块
//!
//! ## 设计思路
//!
//! 所有重采样（logo 缩放、超采样画布降采样、FAB 缩放）都走同一个入口，
//! 保证滤镜一致。优先使用 `fast_image_resize` 的卷积实现，
//! 它在 RGBA 上按预乘 alpha 处理，透明边缘不会渗出黑边。
//!
//! ## 实现思路
//!
//! 1. `RgbaImage` 原始缓冲直接构造 `fr::images::Image`（U8x4）
//! 2. 按配置滤镜映射为卷积算法执行缩放
//! 3. 输出缓冲还原为 `RgbaImage`
//! 4. 任一步失败时记录告警并回退 `image::imageops::resize`

use fast_image_resize as fr;
use image::imageops::{self, FilterType};
use image::RgbaImage;

use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 把图像精确缩放到 `target_width x target_height`（不保持宽高比）。
    pub(crate) fn resize_exact(
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> RgbaImage {
        if image.dimensions() == (target_width, target_height) {
            return image.clone();
        }

        match Self::resize_with_fast_image_resize(image, target_width, target_height, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                    err
                );
                imageops::resize(image, target_width, target_height, filter)
            }
        }
    }

    fn resize_with_fast_image_resize(
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, IconError> {
        let (src_width, src_height) = image.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            image.as_raw().clone(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}
