use std::fs::File;

use clap::Parser;
use raylib::prelude::*;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};

mod app;
mod assets;
mod camera;
mod event;
mod gamestate;
mod level;

use app::App;
use gamestate::Mode;

#[derive(Parser, Debug)]
#[command(name = "klotz", about = "2D grid block-fitting puzzle toolkit")]
struct Args {
    /// Level name under assets/levels/, or a path to a .toml file
    #[arg(default_value = "intro")]
    level: String,
    /// Assets root directory (overrides KLOTZ_ASSETS and the search path)
    #[arg(long)]
    assets: Option<String>,
    /// Start in authoring mode instead of interactive play
    #[arg(long)]
    authoring: bool,
    /// Watch the level file and block catalog for changes
    #[arg(long, default_value_t = true)]
    watch: bool,
    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<String>,
    /// Log verbosity: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(args: &Args) {
    let level = match args.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = &args.log_file {
        match File::create(path) {
            Ok(f) => loggers.push(WriteLogger::new(level, config, f)),
            Err(e) => eprintln!("could not open log file {}: {}", path, e),
        }
    }
    let _ = CombinedLogger::init(loggers);
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    let assets_root = assets::resolve_assets_root(args.assets.clone());
    log::info!("assets root: {}", assets_root.display());

    let catalog_path = assets::catalog_path(&assets_root);
    let catalog = match klotz_blocks::BlockCatalog::load_from_path(&catalog_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("failed to load block catalog {}: {}", catalog_path.display(), e);
            std::process::exit(1);
        }
    };
    log::info!("block catalog: {} kind(s)", catalog.kinds.len());

    let mode = if args.authoring {
        Mode::Authoring
    } else {
        Mode::Interactive
    };
    let level_path = assets::level_path(&assets_root, &args.level);
    let gs = match level::load_level(&level_path, catalog, mode) {
        Ok(gs) => gs,
        Err(e) => {
            log::error!("failed to load level {}: {}", level_path.display(), e);
            std::process::exit(1);
        }
    };

    let (mut rl, thread) = raylib::init()
        .size(1280, 720)
        .title("klotz")
        .resizable()
        .build();
    rl.set_target_fps(60);

    let mut app = App::new(gs, assets_root, level_path, catalog_path, args.watch);

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        app.step(&mut rl, &thread, dt);
        app.render(&mut rl, &thread);
    }
}
