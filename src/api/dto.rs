// ==========================================
// 绿色燃料展望 - API 数据传输对象
// ==========================================
// 职责: 用户选择 / 组件包装 / 仪表盘视图
// 约定: 所有表格输出携带精确列名, 供展示层直接消费
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{DatasetKind, FocusMode, GroupedTable, PivotTable};
use crate::engine::{
    ChoroplethMap, FuelBreakdownRow, HeadlineKpis, IndustrySplit, SectorHeadline, TopCountries,
    TransportSubSplit,
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Selection - 用户选择
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub country: String,
    pub year: i32,
    pub focus: FocusMode,
}

impl Selection {
    /// 解析并校验用户选择
    ///
    /// # 规则
    /// - 国家代码非空（去除首尾空白）
    /// - 年份必须在可选年份中
    /// - 焦点标签无法识别时回落到全部能源载体
    pub fn parse(
        country: &str,
        year: i32,
        focus_label: &str,
        selectable_years: &[i32],
    ) -> ApiResult<Self> {
        let country = country.trim();
        if country.is_empty() {
            return Err(ApiError::InvalidInput("国家代码不能为空".to_string()));
        }
        if !selectable_years.contains(&year) {
            return Err(ApiError::InvalidInput(format!(
                "年份 {} 不可选, 可选年份: {:?}",
                year, selectable_years
            )));
        }

        Ok(Self {
            country: country.to_string(),
            year,
            focus: FocusMode::from_label(focus_label),
        })
    }
}

// ==========================================
// Widget - 单个组件
// ==========================================
/// 组件变换失败只降级该组件（显示"无数据"）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Widget<T> {
    Ready(T),
    NoData { reason: String },
}

impl<T> Widget<T> {
    pub fn no_data(reason: impl Into<String>) -> Self {
        Widget::NoData {
            reason: reason.into(),
        }
    }

    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Widget::Ready(value),
            Err(err) => {
                tracing::debug!(reason = %err, "组件降级为无数据");
                Widget::no_data(err.to_string())
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Widget::Ready(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Widget::Ready(value) => Some(value),
            Widget::NoData { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Widget::Ready(_) => None,
            Widget::NoData { reason } => Some(reason),
        }
    }
}

// ==========================================
// DashboardView - 仪表盘视图
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnavailableDataset {
    pub dataset: DatasetKind,
    pub reason: String,
}

/// 焦点后的燃料结构时间序列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusedFuelMix {
    pub focus: FocusMode,
    /// 二分对比焦点（展示层使用对比配色）
    pub comparison: bool,
    pub table: GroupedTable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandHeatmaps {
    pub transport: Widget<ChoroplethMap>,
    pub industry: Widget<ChoroplethMap>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportTab {
    pub main_stack: Widget<PivotTable>,
    pub sub_splits: Vec<Widget<TransportSubSplit>>,
    pub top_category_maps: Widget<Vec<ChoroplethMap>>,
    pub fuel_breakdown: Widget<Vec<FuelBreakdownRow>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryTab {
    pub category_stack: Widget<PivotTable>,
    pub splits: Vec<Widget<IndustrySplit>>,
    pub top_category_maps: Widget<Vec<ChoroplethMap>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCountriesView {
    pub transport: Widget<TopCountries>,
    pub industry: Widget<TopCountries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: Selection,
    /// "<全名> (<代码>)"
    pub country_label: String,
    pub generated_at: DateTime<Local>,

    // ===== 综合（PtX）概览 =====
    pub kpis: Widget<HeadlineKpis>,
    pub fuel_mix: Widget<FocusedFuelMix>,
    pub sector_fuel_mix: Widget<GroupedTable>,
    pub eu_fuel_aggregate: Widget<GroupedTable>,

    // ===== 部门需求 =====
    /// (Sector, Year) → Value, 交通与工业两条序列
    pub sector_demand: Widget<GroupedTable>,
    pub transport_headline: Widget<SectorHeadline>,
    pub industry_headline: Widget<SectorHeadline>,
    pub demand_heatmaps: DemandHeatmaps,

    // ===== 部门分页 =====
    pub transport_tab: TransportTab,
    pub industry_tab: IndustryTab,

    pub top_countries: TopCountriesView,

    /// 加载失败的数据集
    pub unavailable: Vec<UnavailableDataset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEARS: [i32; 3] = [2030, 2040, 2050];

    #[test]
    fn test_selection_parse() {
        let selection = Selection::parse(" DE ", 2040, "green", &YEARS).unwrap();
        assert_eq!(selection.country, "DE");
        assert_eq!(selection.focus, FocusMode::GreenOnly);
    }

    #[test]
    fn test_selection_rejects_unselectable_year() {
        assert!(matches!(
            Selection::parse("DE", 2025, "all", &YEARS),
            Err(ApiError::InvalidInput(_))
        ));
        assert!(Selection::parse("  ", 2030, "all", &YEARS).is_err());
    }

    #[test]
    fn test_selection_unknown_focus_is_pass_through() {
        let selection = Selection::parse("FR", 2050, "Hydrogen only", &YEARS).unwrap();
        assert_eq!(selection.focus, FocusMode::AllCarriers);
    }

    #[test]
    fn test_widget_serialization() {
        let ready: Widget<Vec<i32>> = Widget::Ready(vec![1, 2]);
        let json = serde_json::to_value(&ready).unwrap();
        assert_eq!(json["status"], "READY");
        assert_eq!(json["data"], serde_json::json!([1, 2]));

        let empty: Widget<Vec<i32>> = Widget::no_data("无数据");
        let json = serde_json::to_value(&empty).unwrap();
        assert_eq!(json["status"], "NO_DATA");
        assert_eq!(json["data"]["reason"], "无数据");
    }

    #[test]
    fn test_widget_from_result() {
        let widget: Widget<i32> = Widget::from_result(Err::<i32, _>("boom"));
        assert_eq!(widget.reason(), Some("boom"));
        assert!(!widget.is_ready());
    }
}
