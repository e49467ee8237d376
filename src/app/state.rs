// ==========================================
// 绿色燃料展望 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 装配: 配置 → 数据集仓储（单实例缓存）→ 仪表盘 API
// ==========================================

use std::sync::Arc;

use crate::api::{ApiResult, DashboardApi};
use crate::config::{ConfigManager, DashboardConfig};
use crate::repository::DatasetRepository;

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 生效配置
    pub config: DashboardConfig,

    /// 数据集仓储（进程内唯一的加载缓存）
    pub repository: Arc<DatasetRepository>,

    /// 仪表盘API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 使用给定配置创建AppState（会先校验配置）
    pub fn new(config: DashboardConfig) -> ApiResult<Self> {
        config.validate()?;

        tracing::info!(
            transport = %config.transport_file.display(),
            industry = %config.industry_dir.display(),
            combined = %config.combined_dir.display(),
            "初始化应用状态"
        );

        let repository = Arc::new(DatasetRepository::new(config.sources()));
        let dashboard_api = Arc::new(DashboardApi::new(Arc::clone(&repository), config.clone()));

        Ok(Self {
            config,
            repository,
            dashboard_api,
        })
    }

    /// 从配置管理器创建
    pub fn from_manager(manager: ConfigManager) -> ApiResult<Self> {
        Self::new(manager.into_config())
    }

    /// 从环境变量创建（GREEN_FUELS_CONFIG / GREEN_FUELS_DATA_ROOT）
    pub fn from_env() -> ApiResult<Self> {
        Self::from_manager(ConfigManager::from_env()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = DashboardConfig {
            top_n: 0,
            ..DashboardConfig::default()
        };
        assert!(AppState::new(config).is_err());
    }

    #[test]
    fn test_new_shares_repository() {
        let state = AppState::new(DashboardConfig::default()).unwrap();
        assert_eq!(Arc::strong_count(&state.repository), 2);
        assert_eq!(state.repository.cached_count().unwrap(), 0);
    }
}
