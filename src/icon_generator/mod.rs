//! # 图标生成模块（icon_generator）
//!
//! ## 设计思路
//!
//! 把“读取源图 → 几何合成 → 重采样 → 写盘”按职责拆成多个子模块：
//!
//! - `config`：路径、尺寸、策略与资源上限
//! - `task`：任务、单任务结果与整批报告
//! - `generator`：编排整条流程
//! - `loader`：文件加载与安全校验
//! - `compose`：裁剪、包围盒、留白、画圆、贴图
//! - `pipeline`：统一缩放入口
//! - `render`：各输出形态的渲染函数
//!
//! ## 调用链
//!
//! ```text
//! main.rs（固定配置）
//!    ↓
//! generator.rs（校验配置 + 建目录 + 逐任务执行 + 汇总）
//!    ├─ loader.rs（读文件 + 签名/体积/像素校验 + 解码为 RGBA）
//!    ├─ render.rs（徽章 / 居中裁剪 / 留白 FAB / 直接缩放 FAB）
//!    │     ├─ compose.rs
//!    │     └─ pipeline.rs
//!    └─ storage.rs（写 PNG）
//!    ↓
//! GenerationReport
//! ```

mod compose;
mod config;
mod generator;
mod loader;
mod pipeline;
mod render;
mod task;

pub use compose::{
    Bounds, CIRCLE_MARGIN_RATIO, FAB_MARGIN_RATIO, InscribedCircle, LOGO_SCALE_RATIO,
    center_square_crop, content_bounds, crop_to_content, pad_to_square, supersample_scale,
};
pub use config::{
    DEFAULT_FAB_SIZE, DEFAULT_TARGET_SIZES, FabVariant, IconConfig, IconStrategy, MAX_ICON_SIZE,
};
pub use generator::IconGenerator;
pub use task::{FAB_FILE_NAME, GenerationReport, IconTask, TaskOutcome};

pub use crate::error::IconError;
