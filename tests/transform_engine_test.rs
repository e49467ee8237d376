// ==========================================
// 变换引擎集成测试
// ==========================================
// 测试范围:
// 1. 加载后的交通数据: 子类别筛选、燃料路径拆解、头条指标
// 2. 加载后的综合数据: 焦点过滤、燃料结构、KPI
// 3. 排名与地图
// ==========================================

mod test_helpers;

use green_fuels_outlook::domain::{FocusMode, LongTable};
use green_fuels_outlook::engine::{
    apply_focus, category_rows, choropleth, eu_fuel_aggregate, filter_by, fuel_breakdown,
    growth, headline_kpis, main_category_stack, sector_headline, share, top_n_by_total,
    TransformError,
};
use green_fuels_outlook::importer::{CombinedLoader, DatasetLoader, TransportLoader};
use green_fuels_outlook::taxonomy::resolve_main_and_fuel;
use green_fuels_outlook::domain::{DatasetKind, DemandRecord};
use test_helpers::*;

fn loaded_transport(root: &TestDataRoot) -> LongTable {
    TransportLoader::new().load(&root.transport_file()).unwrap().table
}

fn loaded_combined(root: &TestDataRoot) -> LongTable {
    CombinedLoader::new().load(&root.combined_dir()).unwrap().table
}

// ==========================================
// 交通
// ==========================================

#[test]
fn test_category_rows_drop_totals_and_fuel_paths() {
    let root = TestDataRoot::new();
    let rows = category_rows(&loaded_transport(&root));

    // 3 个国家 × 5 年 × 4 个子类别
    assert_eq!(rows.len(), 60);
    assert!(rows.rows().iter().all(|r| r.category != "FE|Transport"));
    assert!(rows.rows().iter().all(|r| !r.category.ends_with("|Hydrogen")));
}

#[test]
fn test_fuel_breakdown_uses_longest_prefix() {
    let root = TestDataRoot::new();
    let breakdown = fuel_breakdown(&loaded_transport(&root));

    assert_eq!(breakdown.len(), 15);
    for row in &breakdown {
        assert_eq!(row.main_category.as_deref(), Some(ROAD_HEAVY));
        assert_eq!(row.fuel, "Hydrogen");
    }
}

#[test]
fn test_longest_prefix_wins() {
    let (prefix, remainder) = resolve_main_and_fuel("A|B|C|D", &["A|B", "A|B|C"]);
    assert_eq!(prefix, Some("A|B|C"));
    assert_eq!(remainder, "D");
}

#[test]
fn test_main_category_stack_only_present_categories() {
    let root = TestDataRoot::new();
    let de = filter_by(&category_rows(&loaded_transport(&root)), Some("DE"), None);
    let stack = main_category_stack(&de);

    assert_eq!(stack.columns(), &["Road", "Aviation", "Rail"]);
    assert_eq!(stack.rows().len(), 5);
}

#[test]
fn test_sector_headline_for_country() {
    let root = TestDataRoot::new();
    let de = filter_by(&category_rows(&loaded_transport(&root)), Some("DE"), None);
    let headline = sector_headline(&de, "Transport", 2025, 2050).unwrap();

    // 2025: 8 + 2 + 1 + 4; 2050: 12 + 3 + 1 + 9
    assert!((headline.base_value - 15.0).abs() < 1e-9);
    assert!((headline.horizon_value - 25.0).abs() < 1e-9);
    assert!((headline.growth.pct_change - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(headline.top_at_base.category, ROAD_HEAVY);
    assert_eq!(headline.top_at_horizon.category, ROAD_HEAVY);
}

#[test]
fn test_sector_headline_missing_year_is_empty_selection() {
    let root = TestDataRoot::new();
    let de = filter_by(&category_rows(&loaded_transport(&root)), Some("DE"), None);
    let err = sector_headline(&de, "Transport", 2035, 2050).unwrap_err();
    assert!(matches!(err, TransformError::EmptySelection { .. }));
}

// ==========================================
// 指标
// ==========================================

#[test]
fn test_share_bounds() {
    assert_eq!(share(3.0, 0.0), 0.0);
    for part in [0.0, 0.5, 1.0, 2.0] {
        let s = share(part, 2.0);
        assert!((0.0..=100.0).contains(&s));
    }
}

#[test]
fn test_growth_round_trip() {
    let g = growth(100.0, 2025, 150.0, 2050).unwrap();
    assert!((g.pct_change - 50.0).abs() < 1e-9);
    let recomputed = 100.0 * (1.0 + g.cagr / 100.0).powi(25);
    assert!((recomputed - 150.0).abs() < 1e-6);
}

#[test]
fn test_growth_from_zero_is_undefined() {
    let err = growth(0.0, 2025, 10.0, 2050).unwrap_err();
    assert!(matches!(err, TransformError::DivisionUndefined { .. }));
}

// ==========================================
// 排名
// ==========================================

#[test]
fn test_top_n_deterministic_with_ties() {
    let rows = [("DE", 10.0), ("FR", 8.0), ("IT", 8.0), ("ES", 5.0), ("PL", 3.0), ("NL", 1.0)]
        .iter()
        .map(|(c, v)| DemandRecord::new(*c, 2030, "Road", *v))
        .collect();
    let table = LongTable::new(DatasetKind::Transport, rows);

    let first: Vec<String> = top_n_by_total(&table, 5, &[]).into_iter().map(|r| r.country).collect();
    for _ in 0..10 {
        let again: Vec<String> =
            top_n_by_total(&table, 5, &[]).into_iter().map(|r| r.country).collect();
        assert_eq!(first, again);
    }
    assert_eq!(first, vec!["DE", "FR", "IT", "ES", "PL"]);
}

#[test]
fn test_top_n_excludes_aggregate() {
    let root = TestDataRoot::new();
    let ranking = top_n_by_total(&category_rows(&loaded_transport(&root)), 5, &["EU27"]);

    let countries: Vec<&str> = ranking.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(countries, vec!["DE", "FR"]);
}

// ==========================================
// 综合数据
// ==========================================

#[test]
fn test_green_vs_fossil_focus_is_exhaustive() {
    let root = TestDataRoot::new();
    let combined = loaded_combined(&root);
    let focused = apply_focus(&combined, FocusMode::GreenVsFossil);

    assert!(focused
        .rows()
        .iter()
        .all(|r| matches!(r.group.as_deref(), Some("Green fuels") | Some("Fossil fuels"))));
    // Renewable Energy Carrier 既非绿色也非化石
    let renewable = combined
        .rows()
        .iter()
        .filter(|r| r.group.as_deref() == Some("Renewable Energy Carrier"))
        .count();
    assert_eq!(focused.len(), combined.len() - renewable);
}

#[test]
fn test_focus_all_carriers_is_identity() {
    let root = TestDataRoot::new();
    let combined = loaded_combined(&root);
    assert_eq!(apply_focus(&combined, FocusMode::AllCarriers), combined);
}

#[test]
fn test_headline_kpis_share_of_aggregate() {
    let root = TestDataRoot::new();
    let combined = loaded_combined(&root);

    let de = headline_kpis(&combined, "DE", 2050, "EU27");
    let eu = headline_kpis(&combined, "EU27", 2050, "EU27");

    assert!((de.share_of_aggregate.unwrap() - 10.0).abs() < 1e-9);
    assert!(eu.share_of_aggregate.is_none());
    assert!((0.0..=100.0).contains(&de.green_share));
    assert!(de.green_demand <= de.total_demand);
}

#[test]
fn test_eu_fuel_aggregate_sums_members_only() {
    let root = TestDataRoot::new();
    let combined = loaded_combined(&root);
    let aggregate = eu_fuel_aggregate(&combined, "EU27");

    let member_total: f64 = combined
        .rows()
        .iter()
        .filter(|r| r.country != "EU27")
        .map(|r| r.value)
        .sum();
    assert!((aggregate.total() - member_total).abs() < 1e-9);
    assert_eq!(aggregate.key_columns()[0], "Country");
}

// ==========================================
// 地图
// ==========================================

#[test]
fn test_choropleth_excludes_aggregate() {
    let root = TestDataRoot::new();
    let map = choropleth(&category_rows(&loaded_transport(&root)), 2050, None, "EU27");

    let isos: Vec<&str> = map.cells.iter().map(|c| c.iso_alpha.as_str()).collect();
    assert_eq!(isos, vec!["DEU", "FRA"]);
    assert!((map.zmax - 25.0).abs() < 1e-9);
}
