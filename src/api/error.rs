// ==========================================
// 绿色燃料展望 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换下层错误为用户友好的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::domain::DatasetKind;
use crate::engine::TransformError;
use crate::importer::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 数据源错误
    // ==========================================
    /// 数据集缺失/不可读（该数据集的全部组件降级）
    #[error("数据集不可用: {dataset}: {reason}")]
    DatasetUnavailable { dataset: DatasetKind, reason: String },

    #[error("数据导入失败: {0}")]
    Import(#[from] ImportError),

    // ==========================================
    // 变换错误
    // ==========================================
    #[error("数据变换失败: {0}")]
    Transform(#[from] TransformError),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Load { dataset, source } => {
                if source.is_data_source_error() {
                    ApiError::DatasetUnavailable {
                        dataset,
                        reason: source.to_string(),
                    }
                } else {
                    ApiError::Import(source)
                }
            }
            RepositoryError::LoaderMissing(dataset) => {
                ApiError::Internal(format!("数据集 {} 未配置加载器", dataset))
            }
            RepositoryError::LockError(msg) => ApiError::Internal(format!("缓存锁获取失败: {}", msg)),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_maps_to_unavailable() {
        let err: ApiError = RepositoryError::Load {
            dataset: DatasetKind::Industry,
            source: ImportError::DirectoryNotFound("/x".to_string()),
        }
        .into();
        assert!(matches!(
            err,
            ApiError::DatasetUnavailable {
                dataset: DatasetKind::Industry,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_name_maps_to_import() {
        let err: ApiError = RepositoryError::Load {
            dataset: DatasetKind::Industry,
            source: ImportError::MalformedFileName {
                file_name: "bad.xlsx".to_string(),
                message: "缺少年份".to_string(),
            },
        }
        .into();
        assert!(matches!(err, ApiError::Import(_)));
    }

    #[test]
    fn test_transform_error_conversion() {
        let err: ApiError = TransformError::empty("2030").into();
        assert!(err.to_string().contains("2030"));
    }
}
