use anyhow::{Context, Result};
use clap::Parser;

use bunnymark_harness::bootstrap::{RendererSession, SessionConfig};
use bunnymark_harness::loader::Loader;
use bunnymark_harness::logging::{init_logging, LoggingConfig};
use bunnymark_harness::prefs::{self, PrefStore};
use bunnymark_harness::probe::FrameProbe;
use bunnymark_harness::scene::registry;
use bunnymark_harness::shim;
use bunnymark_harness::version::VersionRegistry;
use bunnymark_harness::window::{Runtime, RuntimeConfig};

mod cli;

/// Object count for a fresh run with no stored preference.
const DEFAULT_COUNT: usize = 100;

/// Base the shareable run link is built on.
const SHARE_BASE: &str = "bunnymark://run";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args = cli::Args::parse();

    if args.list_scenes {
        for scene in registry::builtin() {
            let info = scene.info();
            println!("{:<28} {}", info.id, info.title);
        }
        return Ok(());
    }

    if args.list_versions {
        for version in VersionRegistry::builtin().versions() {
            println!("{version}");
        }
        return Ok(());
    }

    let mut store = PrefStore::open_default();

    // CLI flags win over stored preferences; either way the resolved choice
    // is persisted so the next bare run repeats it.
    let versions = VersionRegistry::builtin();
    let version = {
        let requested = args.engine.as_deref().or_else(|| store.get(prefs::KEY_VERSION));
        versions.resolve(requested)
    };

    let scene = {
        let requested = args.scene.as_deref().or_else(|| store.get(prefs::KEY_SCENE));
        registry::select(registry::builtin(), requested)
    };
    store.set(prefs::KEY_SCENE, scene.info().id);

    let count = args
        .count
        .or_else(|| store.get(prefs::KEY_COUNT).and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_COUNT);
    store.set(prefs::KEY_COUNT, &count.to_string());

    let mut loader = Loader::new();
    let mut library = loader
        .load(&mut store, &version)
        .with_context(|| format!("loading engine {version}"))?;
    shim::apply(&mut library);

    let config = SessionConfig {
        seed: args.seed,
        ..SessionConfig::default()
    };
    let window_config = RuntimeConfig {
        title: format!("bunnymark {version}"),
        initial_size: winit_size(&config),
        resizable: false,
    };
    let context = config.context.clone();
    let governor = config.governor;

    let mut session = RendererSession::bootstrap(
        &library,
        config,
        Box::new(FrameProbe::new()),
        &args.asset_root,
    )?;

    log::info!("share this run: {}", store.share_url(SHARE_BASE));

    let title = scene.info().title;
    session.start_scene(scene, count);
    log::info!("running '{title}' with {count} objects; Escape to quit");

    Runtime::run(window_config, context, governor, session)
}

fn winit_size(config: &SessionConfig) -> winit::dpi::LogicalSize<f64> {
    winit::dpi::LogicalSize::new(config.screen.width as f64, config.screen.height as f64)
}
