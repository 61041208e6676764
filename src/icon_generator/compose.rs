//! # 几何合成模块
//!
//! ## 设计思路
//!
//! 这里只放不涉及缩放的纯像素操作：居中裁剪、内容包围盒、留白补正方形、
//! 画圆、居中贴图。全部是输入图像到输出图像的纯函数，便于单独测试。
//!
//! ## 实现思路
//!
//! - 包围盒以 alpha != 0 为“有内容”。
//! - 贴图使用 `imageops::overlay`，按 alpha 做 source-over 合成，不会覆盖底图透明度。
//! - 圆形按像素中心是否落在半径内判定，画布其余部分保持 alpha = 0。

use image::imageops;
use image::{Rgba, RgbaImage};

/// 圆形徽章外边距占画布边长的比例。
pub const CIRCLE_MARGIN_RATIO: f64 = 0.02;
/// logo 占画布边长的比例。
pub const LOGO_SCALE_RATIO: f64 = 0.85;
/// FAB 留白占内容长边的比例（每一侧）。
pub const FAB_MARGIN_RATIO: f64 = 0.2;
pub const BADGE_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// 小图标用更高倍率超采样，减少锯齿。
pub fn supersample_scale(target_size: u32) -> u32 {
    if target_size < 64 { 8 } else { 4 }
}

/// 按比例取整（向下）后的像素长度。
pub fn scaled_length(length: u32, ratio: f64) -> u32 {
    (length as f64 * ratio) as u32
}

/// 像素矩形区域。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// 取居中的最大正方形，两侧对称裁掉多余部分。
pub fn center_square_crop(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    imageops::crop_imm(image, left, top, side, side).to_image()
}

/// 计算所有非全透明像素的最小包围矩形；整张图全透明时返回 `None`。
pub fn content_bounds(image: &RgbaImage) -> Option<Bounds> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        found = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    found.then(|| Bounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// 裁掉四周的全透明边；没有任何内容时原样返回。
pub fn crop_to_content(image: RgbaImage) -> RgbaImage {
    match content_bounds(&image) {
        Some(b) if (b.width, b.height) != image.dimensions() => {
            imageops::crop_imm(&image, b.x, b.y, b.width, b.height).to_image()
        }
        _ => image,
    }
}

/// 以长边为基准加 `margin_ratio` 留白，居中放入透明正方形画布。
pub fn pad_to_square(image: &RgbaImage, margin_ratio: f64) -> RgbaImage {
    let (width, height) = image.dimensions();
    let side = width.max(height);
    let margin = scaled_length(side, margin_ratio);
    let canvas_side = side + margin * 2;

    let mut canvas = RgbaImage::new(canvas_side, canvas_side);
    let x = (canvas_side - width) / 2;
    let y = (canvas_side - height) / 2;
    imageops::overlay(&mut canvas, image, x as i64, y as i64);
    canvas
}

/// 正方形画布中的内切圆（带外边距）。
#[derive(Debug, Clone, Copy)]
pub struct InscribedCircle {
    center: f32,
    radius: f32,
}

impl InscribedCircle {
    /// 圆的外接框为 `[margin, canvas_side - margin]`。
    pub fn new(canvas_side: u32, margin: u32) -> Self {
        let diameter = canvas_side.saturating_sub(margin * 2) as f32;
        Self {
            center: canvas_side as f32 / 2.0,
            radius: diameter / 2.0,
        }
    }

    /// 像素 `(x, y)` 的中心是否落在圆内。
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let dx = x as f32 + 0.5 - self.center;
        let dy = y as f32 + 0.5 - self.center;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// 在画布上填充内切圆，圆外像素不做任何修改。
pub fn fill_circle(canvas: &mut RgbaImage, circle: &InscribedCircle, color: Rgba<u8>) {
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        if circle.contains(x, y) {
            *pixel = color;
        }
    }
}

/// 把 `top` 居中合成到 `canvas` 上，返回左上角偏移。
pub fn overlay_centered(canvas: &mut RgbaImage, top: &RgbaImage) -> (i64, i64) {
    let x = (canvas.width() as i64 - top.width() as i64) / 2;
    let y = (canvas.height() as i64 - top.height() as i64) / 2;
    imageops::overlay(canvas, top, x, y);
    (x, y)
}
