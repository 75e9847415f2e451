use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
mod config;
mod error;
mod events;
mod mappings;
mod quadrants;
mod services;
mod utils;

use config::Config;
use mappings::KeyNameToKey;
use quadrants::QuadrantColorMap;
use services::{create_display, QuadrantController};

#[derive(Parser, Debug)]
#[command(name = "quads")]
#[command(about = "Полноэкранный 4-квадрантный кликер: 1-4 подсвечивают квадранты, пробел сбрасывает, Esc выходит")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "quads.toml")]
    config: String,

    /// Режим сухого запуска (без окна, события из --script)
    #[arg(long)]
    dry_run: bool,

    /// Сценарий клавиш для dry-run, например "1,2,space,3,esc"
    #[arg(long)]
    script: Option<String>,

    /// Фильтр логирования (перекрывает logging.filter из конфигурации)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Загрузка конфигурации
    let config = Config::load(&args.config)?;

    // Инициализация системы логирования
    init_tracing(&config, args.log_level.as_deref())?;

    info!("Запуск quads v{}", env!("CARGO_PKG_VERSION"));
    info!("Конфигурация загружена из: {}", args.config);

    let script = match args.script.as_deref() {
        Some(script) if !args.dry_run => {
            warn!("--script учитывается только вместе с --dry-run: {}", script);
            Vec::new()
        }
        Some(script) => KeyNameToKey::parse_script(script).context("Некорректный --script")?,
        None => Vec::new(),
    };

    if args.dry_run {
        warn!("Режим сухого запуска - окно не создаётся");
    }

    let palette = QuadrantColorMap::from_config(&config.palette)?;

    // Все ресурсы платформы освобождаются в Drop, в том числе при ошибке на полпути
    let mut display = create_display(&config, args.dry_run, script).map_err(|e| {
        error!("Инициализация дисплея не удалась: {}", e);
        e
    })?;

    let mut controller = QuadrantController::new(palette);
    let summary = controller.run(display.as_mut())?;

    info!("Завершение работы...");
    drop(display);

    if summary.final_state.is_all_inactive() {
        info!("Все квадранты погашены");
    } else {
        let active: Vec<String> = summary
            .final_state
            .active_quadrants()
            .map(|q| q.to_string())
            .collect();
        info!("Активные квадранты при выходе: {}", active.join(", "));
    }

    info!("quads завершил работу, кадров: {}", summary.frames_rendered);
    Ok(())
}

fn init_tracing(config: &Config, cli_filter: Option<&str>) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    // RUST_LOG > --log-level > logging.level + logging.filter
    let directive = cli_filter
        .map(str::to_string)
        .unwrap_or_else(|| config.logging.directive());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directive))
        .with_context(|| format!("Некорректный фильтр логирования: {}", directive))?;

    // stdout не используется, весь вывод в stderr
    let (pretty, compact) = if config.logging.format == "pretty" {
        (Some(fmt::layer().pretty().with_writer(std::io::stderr)), None)
    } else {
        (None, Some(fmt::layer().compact().with_writer(std::io::stderr)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(compact)
        .init();

    Ok(())
}
