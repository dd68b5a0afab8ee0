//! 尺码参考数据模型

use serde::Serialize;

use super::catalog::SizeLabel;

/// 目标人群
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Women,
    Men,
}

/// 服装类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentClass {
    Dresses,
    Tops,
    Shirts,
    Trousers,
}

impl GarmentClass {
    /// 标题形式的名称
    pub fn title(&self) -> &'static str {
        match self {
            GarmentClass::Dresses => "Dresses",
            GarmentClass::Tops => "Tops",
            GarmentClass::Shirts => "Shirts",
            GarmentClass::Trousers => "Trousers",
        }
    }
}

/// 单个尺码的量体数据
#[derive(Debug, Clone, Serialize)]
pub struct SizeRow {
    pub label: SizeLabel,
    /// 量体字段 → 文本范围（有序）
    pub measurements: Vec<(&'static str, &'static str)>,
}

/// 某一（人群, 类别）的尺码表
#[derive(Debug, Clone, Serialize)]
pub struct SizeGuideEntry {
    pub audience: Audience,
    pub garment: GarmentClass,
    pub rows: Vec<SizeRow>,
    /// 国际尺码 → 肯尼亚尺码
    pub local_sizes: Option<Vec<(SizeLabel, u32)>>,
}

impl SizeGuideEntry {
    /// 尺码标签（有序）
    pub fn size_labels(&self) -> impl Iterator<Item = &SizeLabel> {
        self.rows.iter().map(|row| &row.label)
    }
}

/// 尺码参考表
#[derive(Debug, Clone, Serialize)]
pub struct SizeChart {
    pub entries: Vec<SizeGuideEntry>,
    pub general_tips: Vec<&'static str>,
}

impl SizeChart {
    /// 查找尺码表
    pub fn entry(&self, audience: Audience, garment: GarmentClass) -> Option<&SizeGuideEntry> {
        self.entries
            .iter()
            .find(|e| e.audience == audience && e.garment == garment)
    }
}
