// ==========================================
// 绿色燃料展望 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::DatasetKind;
use crate::importer::ImportError;
use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 数据源错误 =====
    #[error("数据集 {dataset} 加载失败: {source}")]
    Load {
        dataset: DatasetKind,
        #[source]
        source: ImportError,
    },

    #[error("数据集 {0} 未配置加载器")]
    LoaderMissing(DatasetKind),

    // ===== 并发控制错误 =====
    #[error("缓存锁获取失败: {0}")]
    LockError(String),
}

impl RepositoryError {
    /// 是否为数据源缺失/不可读类错误（仪表盘降级为"无数据"）
    pub fn is_unavailable(&self) -> bool {
        match self {
            RepositoryError::Load { source, .. } => source.is_data_source_error(),
            _ => false,
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
