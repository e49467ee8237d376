// ==========================================
// 绿色燃料展望 - 地图（分级统计）数据
// ==========================================
// 输出: ISO-3 → 需求, 以及色阶上限 zmax
// 规则: 剔除聚合代码; 无 ISO-3 的代码不参与作图
// ==========================================

use crate::domain::{Dim, LongTable};
use crate::engine::aggregation::{filter_by, group_sum};
use crate::taxonomy::iso_alpha3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethCell {
    pub iso_alpha: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethMap {
    pub year: i32,
    /// None 表示全部类别合计
    pub category: Option<String>,
    pub cells: Vec<ChoroplethCell>,
    /// 色阶上限: 全部年份中单国年度合计的最大值（跨年份可比）
    pub zmax: f64,
}

/// 单年份地图数据
#[instrument(skip(table), fields(rows = table.len()))]
pub fn choropleth(table: &LongTable, year: i32, category: Option<&str>, aggregate: &str) -> ChoroplethMap {
    let scoped = table.select(|r| {
        r.country != aggregate && category.map_or(true, |c| r.category == c)
    });

    let zmax = group_sum(&scoped, &[Dim::Year, Dim::Country])
        .rows()
        .iter()
        .map(|r| r.value)
        .fold(0.0_f64, f64::max);

    let mut by_iso: BTreeMap<&'static str, f64> = BTreeMap::new();
    for record in filter_by(&scoped, None, Some(year)).rows() {
        if let Some(iso) = iso_alpha3(&record.country) {
            *by_iso.entry(iso).or_insert(0.0) += record.value;
        }
    }

    ChoroplethMap {
        year,
        category: category.map(str::to_string),
        cells: by_iso
            .into_iter()
            .map(|(iso, value)| ChoroplethCell {
                iso_alpha: iso.to_string(),
                value,
            })
            .collect(),
        zmax,
    }
}

/// 单类别多年份地图（共享 zmax）
pub fn category_choropleths(
    table: &LongTable,
    category: &str,
    years: &[i32],
    aggregate: &str,
) -> Vec<ChoroplethMap> {
    years
        .iter()
        .map(|year| choropleth(table, *year, Some(category), aggregate))
        .collect()
}
