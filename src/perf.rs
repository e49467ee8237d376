// ==========================================
// 绿色燃料展望 - 性能统计
// ==========================================
// 开关:
// - Debug 默认开启; Release 默认关闭
// - `GREEN_FUELS_PERF=1` 强制开启, `GREEN_FUELS_PERF=0` 强制关闭
// ==========================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use std::time::Instant;

static PERF_ENABLED: AtomicBool = AtomicBool::new(false);
static PERF_INIT: Once = Once::new();

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 读取环境变量决定是否输出性能日志（仅首次调用生效）
pub fn perf_enabled() -> bool {
    PERF_INIT.call_once(|| {
        let enabled = match std::env::var(crate::config::env_keys::PERF) {
            Ok(v) => is_true(&v),
            Err(_) => cfg!(debug_assertions),
        };
        PERF_ENABLED.store(enabled, Ordering::Relaxed);
    });
    PERF_ENABLED.load(Ordering::Relaxed)
}

/// 性能统计 Guard：记录 elapsed_ms + 产出行数
///
/// 使用方式：
/// ```ignore
/// let mut perf = green_fuels_outlook::perf::PerfGuard::new("dataset_load");
/// // do work...
/// perf.record_rows(table.len());
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    rows: usize,
    cache_hit: bool,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            rows: 0,
            cache_hit: false,
        }
    }

    pub fn record_rows(&mut self, rows: usize) {
        self.rows = rows;
    }

    pub fn mark_cache_hit(&mut self) {
        self.cache_hit = true;
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !perf_enabled() {
            return;
        }

        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            rows = self.rows,
            cache_hit = self.cache_hit,
            "done"
        );
    }
}
