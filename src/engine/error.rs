// ==========================================
// 绿色燃料展望 - 变换层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 变换层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// 增长率等计算的基准无效（零基准、零年距、负比值）
    #[error("计算未定义: {reason}")]
    DivisionUndefined { reason: String },

    /// 需要结果的聚合命中了零行
    #[error("选择结果为空: {what}")]
    EmptySelection { what: String },
}

impl TransformError {
    pub fn division(reason: impl Into<String>) -> Self {
        TransformError::DivisionUndefined {
            reason: reason.into(),
        }
    }

    pub fn empty(what: impl Into<String>) -> Self {
        TransformError::EmptySelection { what: what.into() }
    }
}

/// Result 类型别名
pub type TransformResult<T> = Result<T, TransformError>;
