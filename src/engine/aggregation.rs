// ==========================================
// 绿色燃料展望 - 聚合引擎
// ==========================================
// 职责: 等值筛选 / 分组求和 / 透视
// 红线: 纯函数, 空输入返回空输出, 不报错
// ==========================================

use crate::domain::{DatasetKind, Dim, GroupedRow, GroupedTable, KeyValue, LongTable, PivotRow, PivotTable};
use std::collections::{BTreeMap, BTreeSet};
use tracing::instrument;

/// 按国家 / 年份等值筛选（None 表示不限）
///
/// 结果可能为空表, 空表是合法结果
pub fn filter_by(table: &LongTable, country: Option<&str>, year: Option<i32>) -> LongTable {
    table.select(|r| {
        country.map_or(true, |c| r.country == c) && year.map_or(true, |y| r.year == y)
    })
}

/// 分组求和
///
/// 每个唯一键组合输出一行, Value 列求和; 行按键升序排列（结果确定）
#[instrument(skip(table), fields(rows = table.len()))]
pub fn group_sum(table: &LongTable, keys: &[Dim]) -> GroupedTable {
    let mut sums: BTreeMap<Vec<KeyValue>, f64> = BTreeMap::new();
    for record in table.rows() {
        let key: Vec<KeyValue> = keys.iter().map(|dim| record.key(*dim)).collect();
        *sums.entry(key).or_insert(0.0) += record.value;
    }

    let rows = sums
        .into_iter()
        .map(|(keys, value)| GroupedRow { keys, value })
        .collect();

    GroupedTable::new(key_columns(table.kind(), keys), rows)
}

/// 维度列名
pub fn key_columns(kind: DatasetKind, keys: &[Dim]) -> Vec<String> {
    keys.iter().map(|d| d.column_name(kind).to_string()).collect()
}

/// 将双键分组表透视为宽表（首键为行索引, 次键为列）
///
/// 列顺序为次键去重升序; 缺失单元格补 0
pub fn pivot(grouped: &GroupedTable) -> PivotTable {
    let columns: Vec<String> = grouped
        .rows()
        .iter()
        .filter_map(|r| r.keys.get(1).map(|k| k.to_string()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    pivot_with_columns(grouped, columns)
}

/// 按给定列顺序透视; 不在列清单中的次键被忽略
pub fn pivot_with_columns(grouped: &GroupedTable, columns: Vec<String>) -> PivotTable {
    let index_name = grouped
        .key_columns()
        .first()
        .cloned()
        .unwrap_or_else(|| "Index".to_string());

    let mut cells: BTreeMap<KeyValue, Vec<f64>> = BTreeMap::new();
    for row in grouped.rows() {
        let (Some(index), Some(column)) = (row.keys.first(), row.keys.get(1)) else {
            continue;
        };
        let values = cells
            .entry(index.clone())
            .or_insert_with(|| vec![0.0; columns.len()]);
        let column = column.to_string();
        if let Some(pos) = columns.iter().position(|c| *c == column) {
            values[pos] += row.value;
        }
    }

    let rows = cells
        .into_iter()
        .map(|(index, values)| PivotRow { index, values })
        .collect();
    PivotTable::new(index_name, columns, rows)
}

/// 单国需求: (该国明细行, 按年汇总并带部门标签的序列)
pub fn country_demand(table: &LongTable, country: &str, sector_label: &str) -> (LongTable, GroupedTable) {
    let rows = filter_by(table, Some(country), None);
    let per_year = group_sum(&rows, &[Dim::Year])
        .with_leading_column("Sector", KeyValue::text(sector_label));
    (rows, per_year)
}
