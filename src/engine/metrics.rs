// ==========================================
// 绿色燃料展望 - 指标计算
// ==========================================
// 职责: 占比 / 增长率 / 最大类别 / 年度取值 / 部门头条指标
// 红线: 未定义的计算返回错误, 不得静默产出 NaN 或无穷大
// ==========================================

use crate::domain::{Dim, GroupedTable, LongTable};
use crate::engine::aggregation::{filter_by, group_sum};
use crate::engine::error::{TransformError, TransformResult};
use crate::taxonomy::display_label;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 百分比占比; whole <= 0 时定义为 0
pub fn share(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// 两点之间的增长
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Growth {
    /// 总变化百分比
    pub pct_change: f64,
    /// 年均复合增长率（百分比）
    pub cagr: f64,
}

/// 计算总变化与 CAGR
///
/// # 错误
/// - DivisionUndefined: 基准为 0、年距为 0、或终值/基准为负（CAGR 无实数解）
pub fn growth(value_start: f64, year_start: i32, value_end: f64, year_end: i32) -> TransformResult<Growth> {
    if value_start == 0.0 {
        return Err(TransformError::division(format!(
            "{} 年基准值为 0",
            year_start
        )));
    }
    if year_end == year_start {
        return Err(TransformError::division(format!(
            "起止年份相同: {}",
            year_start
        )));
    }

    let ratio = value_end / value_start;
    if ratio < 0.0 {
        return Err(TransformError::division(format!(
            "终值与基准值符号相反: {} / {}",
            value_end, value_start
        )));
    }

    let pct_change = (value_end - value_start) / value_start * 100.0;
    let cagr = (ratio.powf(1.0 / f64::from(year_end - year_start)) - 1.0) * 100.0;
    if !pct_change.is_finite() || !cagr.is_finite() {
        return Err(TransformError::division("增长率结果非有限值"));
    }

    Ok(Growth { pct_change, cagr })
}

/// 指定年份中需求最大的类别
///
/// 并列时取字典序最小的类别
///
/// # 错误
/// - EmptySelection: 该年份没有任何行
pub fn argmax_category(table: &LongTable, year: i32) -> TransformResult<String> {
    let per_category = group_sum(&filter_by(table, None, Some(year)), &[Dim::Category]);

    let mut best: Option<(&str, f64)> = None;
    for row in per_category.rows() {
        let Some(category) = row.keys.first().and_then(|k| k.as_text()) else {
            continue;
        };
        match best {
            Some((_, value)) if row.value <= value => {}
            _ => best = Some((category, row.value)),
        }
    }

    best.map(|(category, _)| category.to_string())
        .ok_or_else(|| TransformError::empty(format!("{} 年无类别数据", year)))
}

/// 按年份序列取值
///
/// # 错误
/// - EmptySelection: 序列中缺少该年份
pub fn value_at_year(series: &GroupedTable, year: i32) -> TransformResult<f64> {
    series
        .value_for_year(year)
        .ok_or_else(|| TransformError::empty(format!("序列中缺少 {} 年", year)))
}

// ==========================================
// 部门头条指标
// ==========================================

/// 年份上的最大类别（原始路径 + 展示名）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCategory {
    pub year: i32,
    pub category: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorHeadline {
    pub sector: String,
    pub base_year: i32,
    pub horizon_year: i32,
    pub base_value: f64,
    pub horizon_value: f64,
    pub growth: Growth,
    pub top_at_base: TopCategory,
    pub top_at_horizon: TopCategory,
}

fn top_category(table: &LongTable, year: i32) -> TransformResult<TopCategory> {
    let category = argmax_category(table, year)?;
    let label = display_label(&category).to_string();
    Ok(TopCategory {
        year,
        category,
        label,
    })
}

/// 单国单部门头条: 终值、相对基准年的变化与 CAGR、两端的最大类别
#[instrument(skip(country_rows), fields(rows = country_rows.len()))]
pub fn sector_headline(
    country_rows: &LongTable,
    sector: &str,
    base_year: i32,
    horizon_year: i32,
) -> TransformResult<SectorHeadline> {
    let per_year = group_sum(country_rows, &[Dim::Year]);
    let base_value = value_at_year(&per_year, base_year)?;
    let horizon_value = value_at_year(&per_year, horizon_year)?;
    let growth = growth(base_value, base_year, horizon_value, horizon_year)?;

    Ok(SectorHeadline {
        sector: sector.to_string(),
        base_year,
        horizon_year,
        base_value,
        horizon_value,
        growth,
        top_at_base: top_category(country_rows, base_year)?,
        top_at_horizon: top_category(country_rows, horizon_year)?,
    })
}
