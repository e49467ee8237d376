// ==========================================
// 绿色燃料展望 - 领域类型定义
// ==========================================
// 职责: 数据集种类 / 分析焦点 / 分组维度
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 数据集种类 (Dataset Kind)
// ==========================================
// 三个规范长表实例, 列名随种类变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatasetKind {
    Transport, // 交通: Country / Year / Category / Value
    Industry,  // 工业: Country / Year / Category / Material / Value
    Combined,  // 综合(PtX): Country / Year / Sector / FuelGroup / Value
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Transport,
        DatasetKind::Industry,
        DatasetKind::Combined,
    ];

    /// 类别列名（交通/工业为 Category，综合为 Sector）
    pub fn category_column(&self) -> &'static str {
        match self {
            DatasetKind::Transport | DatasetKind::Industry => "Category",
            DatasetKind::Combined => "Sector",
        }
    }

    /// 细分列名（交通无细分）
    pub fn group_column(&self) -> Option<&'static str> {
        match self {
            DatasetKind::Transport => None,
            DatasetKind::Industry => Some("Material"),
            DatasetKind::Combined => Some("FuelGroup"),
        }
    }

    /// 部门展示名
    pub fn sector_name(&self) -> &'static str {
        match self {
            DatasetKind::Transport => "Transport",
            DatasetKind::Industry => "Industry",
            DatasetKind::Combined => "Combined",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Transport => write!(f, "TRANSPORT"),
            DatasetKind::Industry => write!(f, "INDUSTRY"),
            DatasetKind::Combined => write!(f, "COMBINED"),
        }
    }
}

// ==========================================
// 分析焦点 (Focus Mode)
// ==========================================
// 封闭枚举: 新增焦点必须在此处登记, 未知标签一律回落到 AllCarriers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FocusMode {
    #[default]
    AllCarriers,          // 全部能源载体（直通）
    GreenOnly,            // 仅绿色燃料
    HydrogenVsOtherGreen, // 氢 vs 其他绿色燃料
    GreenVsFossil,        // 绿色燃料 vs 化石燃料
}

impl FocusMode {
    pub const ALL: [FocusMode; 4] = [
        FocusMode::AllCarriers,
        FocusMode::GreenOnly,
        FocusMode::HydrogenVsOtherGreen,
        FocusMode::GreenVsFossil,
    ];

    /// 界面标签
    pub fn label(&self) -> &'static str {
        match self {
            FocusMode::AllCarriers => "All energy carriers",
            FocusMode::GreenOnly => "Green fuels only",
            FocusMode::HydrogenVsOtherGreen => "Hydrogen vs other Green fuels",
            FocusMode::GreenVsFossil => "Green fuels vs Fossil fuels",
        }
    }

    /// 从界面标签或短名解析
    ///
    /// 无法识别的输入返回 AllCarriers（直通），不报错
    pub fn from_label(value: &str) -> Self {
        let trimmed = value.trim();
        if let Some(mode) = Self::ALL.iter().find(|m| m.label() == trimmed) {
            return *mode;
        }

        match trimmed.to_lowercase().as_str() {
            "green" | "green-only" | "green_only" => FocusMode::GreenOnly,
            "hydrogen" | "hydrogen-vs-green" | "hydrogen_vs_other_green" => {
                FocusMode::HydrogenVsOtherGreen
            }
            "green-vs-fossil" | "green_vs_fossil" => FocusMode::GreenVsFossil,
            "all" | "" => FocusMode::AllCarriers,
            other => {
                tracing::debug!(focus = other, "未知分析焦点, 回落到全部能源载体");
                FocusMode::AllCarriers
            }
        }
    }

    /// 是否为二分对比焦点（输出只含两个燃料组）
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            FocusMode::HydrogenVsOtherGreen | FocusMode::GreenVsFossil
        )
    }
}

impl fmt::Display for FocusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 分组维度 (Dimension)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dim {
    Country,
    Year,
    Category, // Category | Sector
    Group,    // Material | FuelGroup
}

impl Dim {
    /// 解析为指定数据集下的列名
    pub fn column_name(&self, kind: DatasetKind) -> &'static str {
        match self {
            Dim::Country => "Country",
            Dim::Year => "Year",
            Dim::Category => kind.category_column(),
            Dim::Group => kind.group_column().unwrap_or("Group"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_from_label_roundtrip() {
        for mode in FocusMode::ALL {
            assert_eq!(FocusMode::from_label(mode.label()), mode);
        }
    }

    #[test]
    fn test_focus_unknown_label_is_pass_through() {
        assert_eq!(FocusMode::from_label("Hydrogen only"), FocusMode::AllCarriers);
        assert_eq!(FocusMode::from_label("???"), FocusMode::AllCarriers);
    }

    #[test]
    fn test_focus_short_names() {
        assert_eq!(FocusMode::from_label("green"), FocusMode::GreenOnly);
        assert_eq!(FocusMode::from_label("HYDROGEN"), FocusMode::HydrogenVsOtherGreen);
        assert_eq!(FocusMode::from_label("green-vs-fossil"), FocusMode::GreenVsFossil);
    }

    #[test]
    fn test_column_names_per_dataset() {
        assert_eq!(Dim::Category.column_name(DatasetKind::Combined), "Sector");
        assert_eq!(Dim::Group.column_name(DatasetKind::Combined), "FuelGroup");
        assert_eq!(Dim::Group.column_name(DatasetKind::Industry), "Material");
        assert_eq!(Dim::Category.column_name(DatasetKind::Transport), "Category");
    }
}
