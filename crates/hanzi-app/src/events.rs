use std::sync::Arc;

use hanzi_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod generate;

use generate::handle_generate;

/// App's main loop, one trigger at a time
pub async fn event_loop(
    state: Arc<AppState>,
    input_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_output_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!(
        "[EVENT_LOOP] Starting main loop with sources {:?}",
        state.resolver.source_names()
    );

    loop {
        let event = input_to_app_rx.recv().await?;

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        match event {
            AppEvent::Generate(text) => {
                handle_generate(&state, text, &app_to_output_tx).await?;
            }
            AppEvent::InputClosed => {
                let session = state.status.snapshot().await;
                tracing::info!(
                    "Session finished: {} generated, {} not found, {} rejected",
                    session.generated,
                    session.not_found,
                    session.rejected
                );
                app_to_output_tx.send(AppEvent::InputClosed).await?;
                break;
            }
            AppEvent::ShowWorksheet(_) | AppEvent::StatusUpdate(_) => {
                // Output-only events
            }
        }
    }

    Ok(())
}
