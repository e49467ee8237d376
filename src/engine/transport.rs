// ==========================================
// 绿色燃料展望 - 交通数据变换
// ==========================================
// 职责: 子类别行 / 燃料拆解 / 主类别堆叠 / 客货运拆分
// ==========================================

use crate::domain::{DemandRecord, Dim, GroupedRow, GroupedTable, KeyValue, LongTable, PivotTable};
use crate::engine::aggregation::{filter_by, group_sum, pivot_with_columns};
use crate::taxonomy::mappings::{TRANSPORT_CATEGORIES, TRANSPORT_FUEL_PATHS, TRANSPORT_MAIN_CATEGORIES};
use crate::taxonomy::{main_category, resolve_main_and_fuel, sub_category_label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// 仅保留 11 个可加子类别的行（其余为汇总或燃料路径）
pub fn category_rows(transport: &LongTable) -> LongTable {
    transport.select(|r| TRANSPORT_CATEGORIES.contains(&r.category.as_str()))
}

/// 燃料拆解行: 类别路径拆为 (主类别, 燃料)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelBreakdownRow {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Category")]
    pub category: String,
    /// 未识别前缀时为 None（保留该行, 由调用方判断）
    #[serde(rename = "MainCategory")]
    pub main_category: Option<String>,
    #[serde(rename = "Fuel")]
    pub fuel: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

/// 燃料路径行按最长前缀拆解
#[instrument(skip(transport), fields(rows = transport.len()))]
pub fn fuel_breakdown(transport: &LongTable) -> Vec<FuelBreakdownRow> {
    transport
        .rows()
        .iter()
        .filter(|r| TRANSPORT_FUEL_PATHS.contains(&r.category.as_str()))
        .map(|r| {
            let (prefix, fuel) = resolve_main_and_fuel(&r.category, TRANSPORT_CATEGORIES);
            FuelBreakdownRow {
                country: r.country.clone(),
                year: r.year,
                category: r.category.clone(),
                main_category: prefix.map(str::to_string),
                fuel: fuel.to_string(),
                value: r.value,
            }
        })
        .collect()
}

/// Year × {Road, Aviation, Rail, Shipping} 堆叠表
///
/// 只输出出现过的主类别, 缺失单元格为 0
pub fn main_category_stack(transport_country: &LongTable) -> PivotTable {
    let relabeled = transport_country.filter_map(|r| {
        let main = main_category(&r.category)?;
        Some(DemandRecord {
            category: main.to_string(),
            ..r.clone()
        })
    });
    let grouped = group_sum(&relabeled, &[Dim::Year, Dim::Category]);

    let present: Vec<String> = TRANSPORT_MAIN_CATEGORIES
        .iter()
        .filter(|main| relabeled.rows().iter().any(|r| r.category == **main))
        .map(|main| main.to_string())
        .collect();
    pivot_with_columns(&grouped, present)
}

/// 客运 / 货运子类别拆分（饼图输入）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportSubSplit {
    pub year: i32,
    pub passenger: GroupedTable,
    pub freight: GroupedTable,
}

pub fn transport_sub_split(transport_country: &LongTable, year: i32) -> TransportSubSplit {
    let mut sums: BTreeMap<&'static str, f64> = BTreeMap::new();
    for record in filter_by(transport_country, None, Some(year)).rows() {
        if let Some(label) = sub_category_label(&record.category) {
            *sums.entry(label).or_insert(0.0) += record.value;
        }
    }

    let pick = |needle: &str| {
        let rows = sums
            .iter()
            .filter(|(label, _)| label.contains(needle))
            .map(|(label, value)| GroupedRow {
                keys: vec![KeyValue::text(*label)],
                value: *value,
            })
            .collect();
        GroupedTable::new(vec!["SubCategory".to_string()], rows)
    };

    TransportSubSplit {
        year,
        passenger: pick("Passenger"),
        freight: pick("Freight"),
    }
}
