// ==========================================
// 绿色燃料展望 - 燃料结构
// ==========================================
// 输入: 综合数据集 (Country / Year / Sector / FuelGroup / Value)
// 职责: 燃料结构时间序列 / 部门燃料结构 / 欧盟汇总 / 头条 KPI
// ==========================================

use crate::domain::{Dim, GroupedTable, KeyValue, LongTable};
use crate::engine::aggregation::{filter_by, group_sum};
use crate::engine::metrics::share;
use crate::taxonomy::{fuel_order_index, is_ptx_carrier};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// 按燃料展示顺序比较两个键; 未登记燃料排在最后并按名称排序
fn fuel_cmp(a: &KeyValue, b: &KeyValue) -> Ordering {
    let name_a = a.as_text().unwrap_or_default();
    let name_b = b.as_text().unwrap_or_default();
    fuel_order_index(name_a)
        .cmp(&fuel_order_index(name_b))
        .then_with(|| name_a.cmp(name_b))
}

/// 末键为 FuelGroup 的分组表: 先按前置键, 再按燃料顺序
fn order_by_fuel(grouped: GroupedTable) -> GroupedTable {
    grouped.sorted_by(|a, b| {
        let n = a.keys.len().saturating_sub(1);
        a.keys[..n]
            .cmp(&b.keys[..n])
            .then_with(|| match (a.keys.get(n), b.keys.get(n)) {
                (Some(fa), Some(fb)) => fuel_cmp(fa, fb),
                _ => Ordering::Equal,
            })
    })
}

/// 单国燃料结构: (Year, FuelGroup) → Value
pub fn fuel_mix(combined: &LongTable, country: &str) -> GroupedTable {
    order_by_fuel(group_sum(
        &filter_by(combined, Some(country), None),
        &[Dim::Year, Dim::Group],
    ))
}

/// 单国单年份部门燃料结构: (Sector, FuelGroup) → Value
pub fn sector_fuel_mix(combined: &LongTable, country: &str, year: i32) -> GroupedTable {
    order_by_fuel(group_sum(
        &filter_by(combined, Some(country), Some(year)),
        &[Dim::Category, Dim::Group],
    ))
}

/// 全部成员国加总: (Country=聚合代码, Year, FuelGroup) → Value
///
/// 聚合代码本身的行不参与加总
pub fn eu_fuel_aggregate(combined: &LongTable, aggregate: &str) -> GroupedTable {
    let members = combined.select(|r| r.country != aggregate);
    order_by_fuel(group_sum(&members, &[Dim::Year, Dim::Group]))
        .with_leading_column("Country", KeyValue::text(aggregate))
}

// ==========================================
// 头条 KPI
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineKpis {
    pub country: String,
    pub year: i32,
    /// 总需求 (EJ)
    pub total_demand: f64,
    /// 绿色燃料需求 (EJ)
    pub green_demand: f64,
    /// 绿色燃料占比 (%)
    pub green_share: f64,
    /// 在聚合总量中的占比 (%)；国家即聚合代码时为 None
    pub share_of_aggregate: Option<f64>,
}

#[instrument(skip(combined), fields(rows = combined.len()))]
pub fn headline_kpis(combined: &LongTable, country: &str, year: i32, aggregate: &str) -> HeadlineKpis {
    let in_year = filter_by(combined, Some(country), Some(year));
    let total_demand = in_year.total();
    let green_demand = in_year
        .select(|r| r.group.as_deref().is_some_and(is_ptx_carrier))
        .total();

    let share_of_aggregate = (country != aggregate).then(|| {
        let aggregate_total = filter_by(combined, Some(aggregate), Some(year)).total();
        share(total_demand, aggregate_total)
    });

    HeadlineKpis {
        country: country.to_string(),
        year,
        total_demand,
        green_demand,
        green_share: share(green_demand, total_demand),
        share_of_aggregate,
    }
}
