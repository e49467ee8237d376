// ==========================================
// 配置集成测试
// ==========================================
// 测试范围:
// 1. JSON 配置文件加载与缺省字段
// 2. 环境变量覆写数据根目录
// 3. 配置校验与应用状态装配
// ==========================================

mod test_helpers;

use green_fuels_outlook::app::AppState;
use green_fuels_outlook::config::{env_keys, ConfigError, ConfigManager, DashboardConfig};
use green_fuels_outlook::domain::DatasetKind;
use std::collections::HashMap;
use std::fs;
use test_helpers::*;

#[test]
fn test_load_partial_config_file() {
    let root = TestDataRoot::new();
    let path = root.path().join("dashboard.json");
    fs::write(&path, r#"{ "default_country": "DE", "top_n": 3 }"#).unwrap();

    let manager = ConfigManager::load(&path).unwrap();
    let config = manager.config();
    assert_eq!(config.default_country, "DE");
    assert_eq!(config.top_n, 3);
    assert_eq!(config.selectable_years, vec![2030, 2040, 2050]);
    assert_eq!(manager.source_path(), Some(path.as_path()));
}

#[test]
fn test_load_rejects_invalid_config() {
    let root = TestDataRoot::new();
    let path = root.path().join("dashboard.json");
    fs::write(&path, r#"{ "default_year": 2045 }"#).unwrap();

    let err = ConfigManager::load(&path).err().unwrap();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_load_malformed_json() {
    let root = TestDataRoot::new();
    let path = root.path().join("dashboard.json");
    fs::write(&path, "{ not json").unwrap();

    let err = ConfigManager::load(&path).err().unwrap();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_env_lookup_sets_data_root() {
    let root = TestDataRoot::new();
    let config_path = root.path().join("dashboard.json");
    fs::write(
        &config_path,
        format!(
            r#"{{ "transport_file": "{}", "industry_dir": "{}", "combined_dir": "{}" }}"#,
            TRANSPORT_FILE, INDUSTRY_DIR, COMBINED_DIR
        ),
    )
    .unwrap();

    let env: HashMap<&str, String> = [
        (env_keys::CONFIG_PATH, config_path.display().to_string()),
        (env_keys::DATA_ROOT, root.path().display().to_string()),
    ]
    .into_iter()
    .collect();

    let manager = ConfigManager::from_lookup(|key| env.get(key).cloned()).unwrap();
    assert_eq!(manager.config().transport_file, root.transport_file());
    assert_eq!(manager.config().combined_dir, root.combined_dir());

    let state = AppState::from_manager(manager).unwrap();
    let table = state.repository.get(DatasetKind::Combined).unwrap();
    assert_eq!(table.countries(), vec!["DE", "EU27", "FR"]);
}

#[test]
fn test_snapshot_round_trip() {
    let root = TestDataRoot::new();
    let config = root.config();
    let snapshot = config.snapshot_json().unwrap();
    let restored: DashboardConfig = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(restored, config);
}
