// ==========================================
// 绿色燃料展望 - 命令行入口
// ==========================================
// 输出: 仪表盘视图 JSON（stdout），日志走 stderr
// 退出码: 0 成功 / 1 配置错误 / 2 渲染失败
// ==========================================

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use green_fuels_outlook::app::AppState;
use green_fuels_outlook::config::ConfigManager;
use green_fuels_outlook::{logging, APP_NAME, VERSION};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG_ERROR: i32 = 1;
const EXIT_RENDER_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "green-fuels-outlook", version, about = "Green fuels and energy demand outlook")]
struct Cli {
    /// 配置文件路径（缺省读取 GREEN_FUELS_CONFIG, 再缺省使用默认配置）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 国家代码（ISO-2 或 EU27）
    #[arg(long)]
    country: Option<String>,

    /// 目标年份（必须在可选年份中）
    #[arg(long)]
    year: Option<i32>,

    /// 分析焦点: all | green | hydrogen | green-vs-fossil
    #[arg(long)]
    focus: Option<String>,

    /// 只输出可选国家列表
    #[arg(long)]
    list_countries: bool,

    /// 格式化 JSON 输出
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    tracing::info!("{} v{}", APP_NAME, VERSION);

    let manager = match &cli.config {
        Some(path) => ConfigManager::load(path),
        None => ConfigManager::from_env(),
    };
    let state = match manager.map_err(anyhow::Error::from).and_then(|m| {
        AppState::from_manager(m).context("初始化应用状态失败")
    }) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("配置错误: {e:#}");
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let exit_code = match run(&cli, &state) {
        Ok(output) => {
            println!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("渲染失败: {e:#}");
            EXIT_RENDER_ERROR
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli, state: &AppState) -> anyhow::Result<String> {
    let api = &state.dashboard_api;

    if cli.list_countries {
        let countries = api.available_countries()?;
        return to_json(&countries, cli.pretty);
    }

    let selection = api.resolve_selection(cli.country.as_deref(), cli.year, cli.focus.as_deref())?;
    let view = api
        .render(&selection)
        .with_context(|| format!("渲染 {} / {} 失败", selection.country, selection.year))?;
    to_json(&view, cli.pretty)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
