// ==========================================
// 绿色燃料展望 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、校验、快照
// 存储: JSON 文件（全部字段可缺省）
// ==========================================

use crate::config::error::ConfigError;
use crate::repository::DatasetSources;
use crate::taxonomy::mappings::EU27;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ==========================================
// DashboardConfig - 仪表盘配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    // ===== 数据源 =====
    /// 交通宽表 CSV
    pub transport_file: PathBuf,
    /// 工业目录（{year}_{country}.xlsx）
    pub industry_dir: PathBuf,
    /// 综合输出目录（*_{country}.csv|xlsx）
    pub combined_dir: PathBuf,

    // ===== 选择器默认值 =====
    pub default_country: String,
    pub selectable_years: Vec<i32>,
    pub default_year: i32,

    // ===== 变换参数 =====
    pub top_n: usize,
    /// 聚合代码（排名与地图中剔除）
    pub aggregate_code: String,
    /// 交通头条指标基准年
    pub transport_base_year: i32,
    /// 工业头条指标基准年
    pub industry_base_year: i32,
    /// 头条指标终点年
    pub horizon_year: i32,
    /// 交通最大类别地图年份
    pub transport_map_years: Vec<i32>,
    /// 工业最大类别地图年份
    pub industry_map_years: Vec<i32>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            transport_file: Path::new("REMIND").join("Results_REMIND_JRC.csv"),
            industry_dir: PathBuf::from("Results_per_Country"),
            combined_dir: PathBuf::from("Outputs"),
            default_country: EU27.to_string(),
            selectable_years: vec![2030, 2040, 2050],
            default_year: 2050,
            top_n: 5,
            aggregate_code: EU27.to_string(),
            transport_base_year: 2025,
            industry_base_year: 2030,
            horizon_year: 2050,
            transport_map_years: vec![2020, 2050],
            industry_map_years: vec![2030, 2050],
        }
    }
}

impl DashboardConfig {
    /// 将相对数据源路径挂到指定根目录下（绝对路径保持不变）
    pub fn with_data_root(mut self, root: &Path) -> Self {
        for path in [
            &mut self.transport_file,
            &mut self.industry_dir,
            &mut self.combined_dir,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        self
    }

    /// 三个数据集的源路径
    pub fn sources(&self) -> DatasetSources {
        DatasetSources {
            transport: self.transport_file.clone(),
            industry: self.industry_dir.clone(),
            combined: self.combined_dir.clone(),
        }
    }

    /// 校验配置一致性
    ///
    /// # 规则
    /// - selectable_years 非空, default_year 必须可选
    /// - top_n > 0
    /// - 聚合代码与基准年/终点年合法
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selectable_years.is_empty() {
            return Err(ConfigError::invalid("selectable_years", "可选年份不能为空"));
        }
        if !self.selectable_years.contains(&self.default_year) {
            return Err(ConfigError::invalid(
                "default_year",
                format!(
                    "默认年份 {} 不在可选年份 {:?} 中",
                    self.default_year, self.selectable_years
                ),
            ));
        }
        if self.top_n == 0 {
            return Err(ConfigError::invalid("top_n", "必须大于 0"));
        }
        if self.aggregate_code.trim().is_empty() {
            return Err(ConfigError::invalid("aggregate_code", "不能为空"));
        }
        if self.default_country.trim().is_empty() {
            return Err(ConfigError::invalid("default_country", "不能为空"));
        }
        for (field, base) in [
            ("transport_base_year", self.transport_base_year),
            ("industry_base_year", self.industry_base_year),
        ] {
            if base >= self.horizon_year {
                return Err(ConfigError::invalid(
                    field,
                    format!("基准年 {} 必须早于终点年 {}", base, self.horizon_year),
                ));
            }
        }
        Ok(())
    }

    /// 配置快照（JSON）
    pub fn snapshot_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<snapshot>"),
            source,
        })
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: DashboardConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用给定配置创建（会先校验）
    pub fn with_config(config: DashboardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            source: None,
        })
    }

    /// 从 JSON 文件加载
    ///
    /// # 返回
    /// - Ok: 已校验的配置
    /// - Err: 文件不可读 / JSON 格式错误 / 校验失败
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: DashboardConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        tracing::info!(path = %path.display(), "配置文件已加载");
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 从环境变量构建
    ///
    /// - GREEN_FUELS_CONFIG: 配置文件路径（缺省使用默认配置）
    /// - GREEN_FUELS_DATA_ROOT: 相对数据源路径的根目录
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 以自定义查找函数读取环境变量
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut manager = match lookup(env_keys::CONFIG_PATH).filter(|v| !v.trim().is_empty()) {
            Some(path) => Self::load(Path::new(&path))?,
            None => Self::with_config(DashboardConfig::default())?,
        };

        if let Some(root) = lookup(env_keys::DATA_ROOT).filter(|v| !v.trim().is_empty()) {
            tracing::debug!(root = %root, "数据根目录覆写");
            manager.config = manager.config.with_data_root(Path::new(&root));
        }
        Ok(manager)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn into_config(self) -> DashboardConfig {
        self.config
    }

    /// 配置来源文件（默认配置时为 None）
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

// ==========================================
// 环境变量键
// ==========================================
pub mod env_keys {
    pub const CONFIG_PATH: &str = "GREEN_FUELS_CONFIG";
    pub const DATA_ROOT: &str = "GREEN_FUELS_DATA_ROOT";
    pub const PERF: &str = "GREEN_FUELS_PERF";
    pub const LOG_FORMAT: &str = "GREEN_FUELS_LOG_FORMAT";
}
