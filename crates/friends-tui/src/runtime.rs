use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

/// Frame pump period
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run_app(terminal: &mut Tui, app: &mut App, poll_interval: Duration) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut frame_interval = tokio::time::interval(FRAME_INTERVAL);
    let mut snapshot_interval = tokio::time::interval(poll_interval);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key(app, key);
                        // Selections are handled in the same wake-up so the next draw shows them
                        app.run_frame();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => app.quit(),
                }
            }

            _ = frame_interval.tick() => {
                app.run_frame();
            }

            // Presence changes arrive as edits to the snapshot file
            _ = snapshot_interval.tick() => {
                app.check_for_snapshot_updates();
            }
        }
    }
    Ok(())
}
