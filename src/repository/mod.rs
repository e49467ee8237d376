// ==========================================
// 绿色燃料展望 - 数据仓储层
// ==========================================
// 红线: Repository 不含变换逻辑
// ==========================================
// 职责: 提供数据集访问接口, 屏蔽文件加载与缓存细节
// ==========================================

pub mod dataset_repo;
pub mod error;
pub mod fingerprint;

// 重导出核心仓储
pub use dataset_repo::{DatasetRepository, DatasetSources};
pub use error::{RepositoryError, RepositoryResult};
pub use fingerprint::{fingerprint_source, SourceFingerprint};
