// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 在临时目录中生成交通 / 工业 / 综合数据源, 并构造指向它们的配置
// 说明: 工业数据源为 .xlsx, 测试中只生成空目录或损坏文件
// ==========================================

#![allow(dead_code)]

use green_fuels_outlook::config::DashboardConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TRANSPORT_FILE: &str = "Results_REMIND_JRC.csv";
pub const INDUSTRY_DIR: &str = "Results_per_Country";
pub const COMBINED_DIR: &str = "Outputs";

pub const ROAD_HEAVY: &str = "FE|Transport|Freight|Road|Heavy";
pub const PASS_BUS: &str = "FE|Transport|Pass|Road|Bus";
pub const PASS_AVIATION: &str = "FE|Transport|Pass|Aviation";
pub const PASS_RAIL: &str = "FE|Transport|Pass|Rail";

/// 临时数据根目录（需要保持存活）
pub struct TestDataRoot {
    pub dir: TempDir,
}

impl TestDataRoot {
    /// 生成完整数据源: 交通 CSV + 空工业目录 + 三个国家的综合输出
    pub fn new() -> Self {
        let root = Self::bare();
        root.write_transport(&default_transport_rows());
        fs::create_dir_all(root.industry_dir()).unwrap();
        root.write_combined("DE", &combined_rows(1.0));
        root.write_combined("FR", &combined_rows(0.5));
        root.write_combined("EU27", &combined_rows(10.0));
        root
    }

    /// 只创建根目录, 不生成任何数据源
    pub fn bare() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn transport_file(&self) -> PathBuf {
        self.path().join(TRANSPORT_FILE)
    }

    pub fn industry_dir(&self) -> PathBuf {
        self.path().join(INDUSTRY_DIR)
    }

    pub fn combined_dir(&self) -> PathBuf {
        self.path().join(COMBINED_DIR)
    }

    /// 写入交通 CSV（Model, Country, Year, Category, Value）
    pub fn write_transport(&self, rows: &[(&str, i32, &str, f64)]) {
        let mut content = String::from("Model,Country,Year,Category,Value\n");
        for (country, year, category, value) in rows {
            content.push_str(&format!("REMIND,{},{},{},{}\n", country, year, category, value));
        }
        fs::write(self.transport_file(), content).unwrap();
    }

    /// 写入综合输出宽表 PtX_demand_{country}.csv（FuelGroup, Year, Road, Aviation）
    pub fn write_combined(&self, country: &str, rows: &[(&str, i32, f64, f64)]) {
        let mut content = String::from("FuelGroup,Year,Road,Aviation\n");
        for (fuel, year, road, aviation) in rows {
            content.push_str(&format!("{},{},{},{}\n", fuel, year, road, aviation));
        }
        fs::create_dir_all(self.combined_dir()).unwrap();
        fs::write(
            self.combined_dir().join(format!("PtX_demand_{}.csv", country)),
            content,
        )
        .unwrap();
    }

    /// 指向本目录数据源的配置
    pub fn config(&self) -> DashboardConfig {
        DashboardConfig {
            transport_file: PathBuf::from(TRANSPORT_FILE),
            industry_dir: PathBuf::from(INDUSTRY_DIR),
            combined_dir: PathBuf::from(COMBINED_DIR),
            ..DashboardConfig::default()
        }
        .with_data_root(self.path())
    }
}

/// 交通测试数据: EU27 / DE / FR, 2020-2050, 含汇总行与燃料路径行
pub fn default_transport_rows() -> Vec<(&'static str, i32, &'static str, f64)> {
    let mut rows = Vec::new();
    for (country, scale) in [("EU27", 10.0), ("DE", 2.0), ("FR", 1.0)] {
        for (year, growth) in [(2020, 1.0), (2025, 1.0), (2030, 1.1), (2040, 1.3), (2050, 1.5)] {
            rows.push((country, year, ROAD_HEAVY, 4.0 * scale * growth));
            rows.push((country, year, PASS_BUS, 1.0 * scale * growth));
            rows.push((country, year, PASS_RAIL, 0.5 * scale));
            rows.push((country, year, PASS_AVIATION, 2.0 * scale * growth * growth));
            // 汇总行与燃料路径行不属于 11 个可加子类别
            rows.push((country, year, "FE|Transport", 99.0));
            rows.push((country, year, "FE|Transport|Freight|Road|Heavy|Hydrogen", 0.3 * scale));
        }
    }
    rows
}

/// 综合输出测试数据（含 Overall Demand 汇总行）
pub fn combined_rows(scale: f64) -> Vec<(&'static str, i32, f64, f64)> {
    let mut rows = Vec::new();
    for year in [2030, 2040, 2050] {
        let green = f64::from(year - 2020) / 30.0;
        rows.push(("Fossil Liquids", year, 3.0 * scale * (1.0 - green), 2.0 * scale));
        rows.push(("Hydrogen", year, 1.0 * scale * green, 0.0));
        rows.push(("Synthetic Liquids", year, 0.0, 1.0 * scale * green));
        rows.push(("Renewable Energy Carrier", year, 0.5 * scale, 0.0));
        rows.push(("Overall Demand", year, 100.0, 100.0));
    }
    rows
}
