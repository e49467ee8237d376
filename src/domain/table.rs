// ==========================================
// 绿色燃料展望 - 规范长表
// ==========================================
// 行 = 一条观测: (国家, 年份, 类别/部门, 燃料组/材料) → 需求值 (EJ)
// 红线: 表不可变, 所有变换返回新表; 行值可加, 不得重复计数
// ==========================================

use crate::domain::types::{DatasetKind, Dim};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

// ==========================================
// DemandRecord - 单条需求观测
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub country: String,
    pub year: i32,
    /// Category（交通/工业）或 Sector（综合）
    pub category: String,
    /// Material（工业）或 FuelGroup（综合）；交通为 None
    pub group: Option<String>,
    /// 需求值 (EJ)
    pub value: f64,
}

impl DemandRecord {
    pub fn new(
        country: impl Into<String>,
        year: i32,
        category: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            country: country.into(),
            year,
            category: category.into(),
            group: None,
            value,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn group_or_empty(&self) -> &str {
        self.group.as_deref().unwrap_or("")
    }

    /// 取指定维度的键值
    pub fn key(&self, dim: Dim) -> KeyValue {
        match dim {
            Dim::Country => KeyValue::Text(self.country.clone()),
            Dim::Year => KeyValue::Year(self.year),
            Dim::Category => KeyValue::Text(self.category.clone()),
            Dim::Group => KeyValue::Text(self.group_or_empty().to_string()),
        }
    }
}

// ==========================================
// KeyValue - 分组键
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyValue {
    Year(i32),
    Text(String),
}

impl KeyValue {
    pub fn text(value: impl Into<String>) -> Self {
        KeyValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            KeyValue::Text(s) => Some(s),
            KeyValue::Year(_) => None,
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Year(y) => write!(f, "{}", y),
            KeyValue::Text(s) => write!(f, "{}", s),
        }
    }
}

// ==========================================
// LongTable - 规范长表
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct LongTable {
    kind: DatasetKind,
    rows: Vec<DemandRecord>,
}

impl LongTable {
    pub fn new(kind: DatasetKind, rows: Vec<DemandRecord>) -> Self {
        Self { kind, rows }
    }

    pub fn empty(kind: DatasetKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    pub fn rows(&self) -> &[DemandRecord] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<DemandRecord> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 全表求和
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.value).sum()
    }

    /// 按谓词筛选, 返回新表
    pub fn select<F>(&self, predicate: F) -> LongTable
    where
        F: Fn(&DemandRecord) -> bool,
    {
        let rows = self.rows.iter().filter(|r| predicate(r)).cloned().collect();
        LongTable::new(self.kind, rows)
    }

    /// 逐行筛选并改写, 返回新表
    pub fn filter_map<F>(&self, f: F) -> LongTable
    where
        F: Fn(&DemandRecord) -> Option<DemandRecord>,
    {
        let rows = self.rows.iter().filter_map(f).collect();
        LongTable::new(self.kind, rows)
    }

    /// 去重排序后的国家代码
    pub fn countries(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.country.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 去重排序后的年份
    pub fn years(&self) -> Vec<i32> {
        self.rows
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 展示层依赖的精确列名
    pub fn column_names(&self) -> Vec<&'static str> {
        let mut columns = vec!["Country", "Year", self.kind.category_column()];
        if let Some(group) = self.kind.group_column() {
            columns.push(group);
        }
        columns.push("Value");
        columns
    }
}

struct RecordView<'a> {
    kind: DatasetKind,
    record: &'a DemandRecord,
}

impl Serialize for RecordView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let group_column = self.kind.group_column();
        let len = if group_column.is_some() { 5 } else { 4 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("Country", &self.record.country)?;
        map.serialize_entry("Year", &self.record.year)?;
        map.serialize_entry(self.kind.category_column(), &self.record.category)?;
        if let Some(column) = group_column {
            map.serialize_entry(column, self.record.group_or_empty())?;
        }
        map.serialize_entry("Value", &self.record.value)?;
        map.end()
    }
}

impl Serialize for LongTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<RecordView<'_>> = self
            .rows
            .iter()
            .map(|record| RecordView {
                kind: self.kind,
                record,
            })
            .collect();

        let mut state = serializer.serialize_struct("LongTable", 3)?;
        state.serialize_field("dataset", &self.kind)?;
        state.serialize_field("columns", &self.column_names())?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

// ==========================================
// GroupedTable - 分组求和结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedRow {
    pub keys: Vec<KeyValue>,
    pub value: f64,
}

/// 每个唯一键组合一行; 键列名 + "Value"
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedTable {
    key_columns: Vec<String>,
    rows: Vec<GroupedRow>,
}

impl GroupedTable {
    pub fn new(key_columns: Vec<String>, rows: Vec<GroupedRow>) -> Self {
        Self { key_columns, rows }
    }

    pub fn key_columns(&self) -> &[String] {
        &self.key_columns
    }

    pub fn rows(&self) -> &[GroupedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.value).sum()
    }

    /// 按完整键查找
    pub fn get(&self, keys: &[KeyValue]) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.keys.as_slice() == keys)
            .map(|r| r.value)
    }

    /// 单键 Year 表按年份取值
    pub fn value_for_year(&self, year: i32) -> Option<f64> {
        self.get(&[KeyValue::Year(year)])
    }

    /// 在首列插入常量键列（如部门名）
    pub fn with_leading_column(mut self, name: &str, value: KeyValue) -> Self {
        self.key_columns.insert(0, name.to_string());
        for row in &mut self.rows {
            row.keys.insert(0, value.clone());
        }
        self
    }

    /// 纵向拼接（键列必须一致）
    pub fn append(mut self, other: GroupedTable) -> Self {
        debug_assert_eq!(self.key_columns, other.key_columns);
        self.rows.extend(other.rows);
        self
    }

    /// 按比较函数重排行
    pub fn sorted_by<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&GroupedRow, &GroupedRow) -> std::cmp::Ordering,
    {
        self.rows.sort_by(compare);
        self
    }
}

struct GroupedRowView<'a> {
    columns: &'a [String],
    row: &'a GroupedRow,
}

impl Serialize for GroupedRowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        for (column, key) in self.columns.iter().zip(self.row.keys.iter()) {
            map.serialize_entry(column, key)?;
        }
        map.serialize_entry("Value", &self.row.value)?;
        map.end()
    }
}

impl Serialize for GroupedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut columns: Vec<&str> = self.key_columns.iter().map(String::as_str).collect();
        columns.push("Value");
        let rows: Vec<GroupedRowView<'_>> = self
            .rows
            .iter()
            .map(|row| GroupedRowView {
                columns: &self.key_columns,
                row,
            })
            .collect();

        let mut state = serializer.serialize_struct("GroupedTable", 2)?;
        state.serialize_field("columns", &columns)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

// ==========================================
// PivotTable - 宽表（年份 × 类别）
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub index: KeyValue,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    index_name: String,
    columns: Vec<String>,
    rows: Vec<PivotRow>,
}

impl PivotTable {
    pub fn new(index_name: impl Into<String>, columns: Vec<String>, rows: Vec<PivotRow>) -> Self {
        Self {
            index_name: index_name.into(),
            columns,
            rows,
        }
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[PivotRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 取单元格; 缺失列或缺失行返回 None
    pub fn get(&self, index: &KeyValue, column: &str) -> Option<f64> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows
            .iter()
            .find(|r| &r.index == index)
            .and_then(|r| r.values.get(col).copied())
    }
}

struct PivotRowView<'a> {
    index_name: &'a str,
    columns: &'a [String],
    row: &'a PivotRow,
}

impl Serialize for PivotRowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        map.serialize_entry(self.index_name, &self.row.index)?;
        for (column, value) in self.columns.iter().zip(self.row.values.iter()) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for PivotTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<PivotRowView<'_>> = self
            .rows
            .iter()
            .map(|row| PivotRowView {
                index_name: &self.index_name,
                columns: &self.columns,
                row,
            })
            .collect();

        let mut state = serializer.serialize_struct("PivotTable", 3)?;
        state.serialize_field("index", &self.index_name)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combined_table() -> LongTable {
        LongTable::new(
            DatasetKind::Combined,
            vec![
                DemandRecord::new("DE", 2030, "Road", 1.5).with_group("Hydrogen"),
                DemandRecord::new("FR", 2030, "Road", 0.5).with_group("Fossil Liquids"),
                DemandRecord::new("DE", 2050, "Aviation", 2.0).with_group("Methanol"),
            ],
        )
    }

    #[test]
    fn test_column_names_follow_dataset_kind() {
        let table = combined_table();
        assert_eq!(
            table.column_names(),
            vec!["Country", "Year", "Sector", "FuelGroup", "Value"]
        );

        let transport = LongTable::empty(DatasetKind::Transport);
        assert_eq!(
            transport.column_names(),
            vec!["Country", "Year", "Category", "Value"]
        );
    }

    #[test]
    fn test_serialize_uses_explicit_column_names() {
        let json = serde_json::to_value(combined_table()).unwrap();
        let first = &json["rows"][0];
        assert_eq!(first["Country"], "DE");
        assert_eq!(first["Sector"], "Road");
        assert_eq!(first["FuelGroup"], "Hydrogen");
        assert_eq!(first["Value"], 1.5);
        assert!(first.get("Category").is_none());
    }

    #[test]
    fn test_countries_and_years_sorted_unique() {
        let table = combined_table();
        assert_eq!(table.countries(), vec!["DE".to_string(), "FR".to_string()]);
        assert_eq!(table.years(), vec![2030, 2050]);
    }

    #[test]
    fn test_select_returns_new_table() {
        let table = combined_table();
        let de = table.select(|r| r.country == "DE");
        assert_eq!(de.len(), 2);
        assert_eq!(table.len(), 3);
        assert!((de.total() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_grouped_table_leading_column() {
        let grouped = GroupedTable::new(
            vec!["Year".to_string()],
            vec![GroupedRow {
                keys: vec![KeyValue::Year(2030)],
                value: 1.0,
            }],
        )
        .with_leading_column("Sector", KeyValue::text("Transport"));

        assert_eq!(grouped.key_columns(), &["Sector".to_string(), "Year".to_string()]);
        assert_eq!(
            grouped.get(&[KeyValue::text("Transport"), KeyValue::Year(2030)]),
            Some(1.0)
        );
    }

    #[test]
    fn test_pivot_get() {
        let pivot = PivotTable::new(
            "Year",
            vec!["Road".to_string(), "Rail".to_string()],
            vec![PivotRow {
                index: KeyValue::Year(2030),
                values: vec![1.0, 0.0],
            }],
        );
        assert_eq!(pivot.get(&KeyValue::Year(2030), "Rail"), Some(0.0));
        assert_eq!(pivot.get(&KeyValue::Year(2030), "Shipping"), None);
        assert_eq!(pivot.get(&KeyValue::Year(2040), "Road"), None);
    }
}
