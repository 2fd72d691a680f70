use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use friends_core::SocialStore;
use friends_tui::cli::Args;
use friends_tui::runtime::run_app;
use friends_tui::tracing_setup::init_tracing;
use friends_tui::{demo, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.core_config();

    if let Some(log_path) = init_tracing()? {
        eprintln!("File logging enabled: {}", log_path);
    }

    let mut created = false;
    if !config.snapshot_path.exists() {
        SocialStore::write_snapshot(&config.snapshot_path, &demo::sample_snapshot())?;
        tracing::info!("Wrote sample snapshot to {}", config.snapshot_path.display());
        created = true;
    }
    let store = SocialStore::load(&config.snapshot_path)?;

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before showing panic
        let _ = ui::restore_terminal();
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let mut app = ui::App::new(store, config.snapshot_path.clone());
    if created {
        app.set_status(&format!(
            "Created sample snapshot at {}",
            config.snapshot_path.display()
        ));
    }

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app, Duration::from_millis(args.poll_ms.max(1))).await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
