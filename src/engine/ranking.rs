// ==========================================
// 绿色燃料展望 - 国家排名
// ==========================================
// 规则: 剔除聚合代码, 全年份求和, 降序取前 n
// 并列: 按国家代码字典序（结果确定）
// ==========================================

use crate::domain::{Dim, GroupedTable, KeyValue, LongTable};
use crate::engine::aggregation::group_sum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::instrument;

/// 排名结果中的一个国家
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCountry {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Value")]
    pub total: f64,
}

/// 需求最高的 n 个国家
#[instrument(skip(table), fields(rows = table.len()))]
pub fn top_n_by_total(table: &LongTable, n: usize, exclude: &[&str]) -> Vec<RankedCountry> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in table.rows() {
        if exclude.contains(&record.country.as_str()) {
            continue;
        }
        *totals.entry(record.country.as_str()).or_insert(0.0) += record.value;
    }

    let mut ranked: Vec<RankedCountry> = totals
        .into_iter()
        .map(|(country, total)| RankedCountry {
            country: country.to_string(),
            total,
        })
        .collect();

    // BTreeMap 已按国家升序, 稳定排序保证并列时字典序
    ranked.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

/// 前 n 国的逐年需求序列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCountries {
    pub ranking: Vec<RankedCountry>,
    /// (Country, Year) → Value, 按排名再按年份排序
    pub series: GroupedTable,
}

pub fn top_countries_series(table: &LongTable, n: usize, aggregate: &str) -> TopCountries {
    let ranking = top_n_by_total(table, n, &[aggregate]);
    let rank_of = |country: &str| ranking.iter().position(|r| r.country == country);

    let per_country_year = group_sum(
        &table.select(|r| rank_of(&r.country).is_some()),
        &[Dim::Country, Dim::Year],
    );
    let series = per_country_year.sorted_by(|a, b| {
        let ra = a.keys.first().and_then(KeyValue::as_text).and_then(rank_of);
        let rb = b.keys.first().and_then(KeyValue::as_text).and_then(rank_of);
        ra.cmp(&rb).then_with(|| a.keys.cmp(&b.keys))
    });

    TopCountries { ranking, series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DatasetKind, DemandRecord};

    fn table() -> LongTable {
        let data = [
            ("NL", 1.0),
            ("IT", 8.0),
            ("DE", 10.0),
            ("FR", 8.0),
            ("PL", 3.0),
            ("ES", 5.0),
            ("EU27", 35.0),
        ];
        LongTable::new(
            DatasetKind::Transport,
            data.iter()
                .map(|(c, v)| DemandRecord::new(*c, 2030, "Road", *v))
                .collect(),
        )
    }

    #[test]
    fn test_top_n_excludes_aggregate_and_smallest() {
        let top = top_n_by_total(&table(), 5, &["EU27"]);
        let names: Vec<&str> = top.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, vec!["DE", "FR", "IT", "ES", "PL"]);
    }

    #[test]
    fn test_top_n_is_deterministic() {
        let first = top_n_by_total(&table(), 5, &["EU27"]);
        for _ in 0..10 {
            assert_eq!(top_n_by_total(&table(), 5, &["EU27"]), first);
        }
    }

    #[test]
    fn test_top_n_sums_across_years() {
        let mut rows = table().into_rows();
        rows.push(DemandRecord::new("NL", 2050, "Road", 20.0));
        let top = top_n_by_total(&LongTable::new(DatasetKind::Transport, rows), 1, &["EU27"]);
        assert_eq!(top[0].country, "NL");
        assert_eq!(top[0].total, 21.0);
    }

    #[test]
    fn test_series_follows_ranking() {
        let top = top_countries_series(&table(), 2, "EU27");
        let countries: Vec<String> = top
            .series
            .rows()
            .iter()
            .map(|r| r.keys[0].to_string())
            .collect();
        assert_eq!(countries, vec!["DE", "FR"]);
        assert_eq!(top.series.key_columns(), &["Country".to_string(), "Year".to_string()]);
    }
}
