use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::runtime::Runtime;

use pradowrites::Cli;
use pradowrites::config::PERSISTENCE;
use pradowrites::content::{body_sources, fetch_post_index, render_markdown};
use pradowrites::engine::{AppState, DashboardEngine, StateMessage, Theme, ThemePreference};
use pradowrites::utils::time_utils::epoch_ms_to_utc;

fn main() -> Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Theme preference (read once at startup)
    let theme = ThemePreference::load_or_default(Path::new(PERSISTENCE.theme_state_path)).theme;

    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    rt.block_on(run(args, theme))
}

async fn run(args: Cli, theme: Theme) -> Result<()> {
    // D. Post index (source chain: remote -> local dir -> embedded)
    let (posts, index_source) = fetch_post_index(&args).await?;
    log::info!("Loaded {} posts via {}.", posts.len(), index_source);

    let mut engine = DashboardEngine::new(AppState::new(posts, index_source, theme), args.offline);

    if let Some(query) = &args.query {
        engine.apply_message(StateMessage::SetQuery(query.clone()));
    }

    // E. Open the newest post once so the blog side is exercised too
    if let Some(post) = engine.app.posts.posts.first().cloned() {
        let body = body_sources(&args).load_post_body(&post).await;
        engine.apply_message(StateMessage::BodyLoaded {
            slug: post.slug.clone(),
            body,
        });
        engine.apply_message(StateMessage::OpenPost(post.slug.clone()));
    }

    // F. THE LOOP. Pump the engine; report after each completed cycle.
    let mut reported_cycles = 0u64;
    loop {
        let busy = engine.update();

        if engine.dashboard.completed_cycles > reported_cycles {
            reported_cycles = engine.dashboard.completed_cycles;
            report_cycle(&engine);
            if args.once {
                break;
            }
        }

        // A failed cycle already went to the log; --once should still exit
        if args.once && !busy && engine.dashboard.last_error.is_some() {
            break;
        }

        // Short sleep while a cycle is in flight, longer when idle
        let pause_ms = if busy { 50 } else { 500 };
        tokio::time::sleep(Duration::from_millis(pause_ms)).await;
    }

    Ok(())
}

fn report_cycle(engine: &DashboardEngine) {
    let Some(data) = engine.current_data() else {
        return;
    };

    log::info!(
        "BTC {:.0} USD ({:+.2}% 24h) [{}] | Fear&Greed {:.0} ({}) [{}] | MVRV {:.2} [{}]",
        data.quote.value.usd,
        data.quote.value.change_24h_pct,
        data.quote.origin,
        data.sentiment.value.value,
        data.sentiment.value.classification,
        data.sentiment.origin,
        data.mvrv.value.current,
        data.mvrv.origin,
    );
    log::info!(
        "Chart: {} merged points, {} ticks, MVRV axis {:.1}..{:.1}, history {} -> {}",
        data.merged.len(),
        data.ticks.len(),
        data.mvrv_domain.0,
        data.mvrv_domain.1,
        data.price_history
            .value
            .first()
            .map(|p| epoch_ms_to_utc(p.t))
            .unwrap_or_default(),
        data.price_history
            .value
            .last()
            .map(|p| epoch_ms_to_utc(p.t))
            .unwrap_or_default(),
    );

    if data.alerts.is_empty() {
        log::info!("No active alerts.");
    } else {
        for alert in &data.alerts {
            log::warn!("[{}] {}: {}", alert.level, alert.title, alert.description);
        }
    }

    let visible = engine.visible_posts();
    log::info!(
        "{} of {} posts visible for query '{}' ({} tags, theme: {})",
        visible.len(),
        engine.app.posts.len(),
        engine.app.query,
        engine.app.posts.unique_tags().len(),
        engine.app.theme,
    );

    if let Some(post) = engine.app.active_post() {
        if let Some(body) = engine.app.body_for(&post.slug) {
            let html = render_markdown(body);
            log::info!("Active post '{}' renders to {} HTML chars", post.title, html.len());
        }
    }
}
