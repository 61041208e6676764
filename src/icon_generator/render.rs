//! # 图标渲染模块
//!
//! ## 设计思路
//!
//! 每种输出形态对应一个渲染函数，输入是已解码的 RGBA 源图，输出是最终尺寸的图标。
//! 渲染函数不接触文件系统，读写由 `generator` 负责。
//!
//! ## 实现思路
//!
//! - 圆形徽章：按尺寸选超采样倍率 → 透明画布画白圆 → logo 缩到 85% 居中合成 → 整体降采样。
//! - 居中裁剪：取最大居中正方形后缩放。
//! - 透明留白 FAB：裁掉透明边 → 按长边 20% 留白补正方形 → 缩放。
//! - 直接缩放 FAB：源图直接缩到目标尺寸。

use image::imageops::FilterType;
use image::RgbaImage;

use super::compose::{
    self, BADGE_FILL, CIRCLE_MARGIN_RATIO, FAB_MARGIN_RATIO, InscribedCircle, LOGO_SCALE_RATIO,
};
use super::IconGenerator;

impl IconGenerator {
    /// 圆形徽章策略：超采样合成后降到 `size`。
    pub(crate) fn render_circle_badge(
        source: &RgbaImage,
        size: u32,
        filter: FilterType,
    ) -> RgbaImage {
        let canvas = Self::compose_badge_canvas(source, size, filter);
        Self::resize_exact(&canvas, size, size, filter)
    }

    /// 构建降采样之前的超采样画布。
    ///
    /// 圆外且 logo 外的像素保持 alpha = 0。
    pub(crate) fn compose_badge_canvas(
        source: &RgbaImage,
        size: u32,
        filter: FilterType,
    ) -> RgbaImage {
        let canvas_side = size * compose::supersample_scale(size);
        let mut canvas = RgbaImage::new(canvas_side, canvas_side);

        let margin = compose::scaled_length(canvas_side, CIRCLE_MARGIN_RATIO);
        let circle = InscribedCircle::new(canvas_side, margin);
        compose::fill_circle(&mut canvas, &circle, BADGE_FILL);

        let logo_side = compose::scaled_length(canvas_side, LOGO_SCALE_RATIO).max(1);
        let logo = Self::resize_exact(source, logo_side, logo_side, filter);
        compose::overlay_centered(&mut canvas, &logo);

        log::debug!(
            "🎨 徽章画布 {}px（scale={} margin={} logo={}px）",
            canvas_side,
            canvas_side / size,
            margin,
            logo_side
        );

        canvas
    }

    /// 居中裁剪策略：最大居中正方形缩放到 `size`。
    pub(crate) fn render_cropped_square(
        source: &RgbaImage,
        size: u32,
        filter: FilterType,
    ) -> RgbaImage {
        let square = compose::center_square_crop(source);
        Self::resize_exact(&square, size, size, filter)
    }

    /// 透明留白 FAB：裁掉透明边后加留白再缩放。
    pub(crate) fn render_padded_fab(source: RgbaImage, size: u32, filter: FilterType) -> RgbaImage {
        let content = compose::crop_to_content(source);
        let padded = compose::pad_to_square(&content, FAB_MARGIN_RATIO);

        log::debug!(
            "👻 FAB 内容 {}x{} → 留白画布 {}px",
            content.width(),
            content.height(),
            padded.width()
        );

        Self::resize_exact(&padded, size, size, filter)
    }

    /// 直接缩放 FAB：不裁剪、不留白。
    pub(crate) fn render_plain_fab(source: &RgbaImage, size: u32, filter: FilterType) -> RgbaImage {
        Self::resize_exact(source, size, size, filter)
    }
}
