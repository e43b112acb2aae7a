use hanzi_core::LookupError;
use hanzi_core::worksheet::build_worksheet;
use hanzi_types::{AppEvent, Status};
use kanal::AsyncSender;

use crate::state::AppState;

/// Resolve the entered text and hand a worksheet (or a status message) to the output side
pub async fn handle_generate(
    state: &AppState,
    text: String,
    app_to_output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_output_tx
        .send(AppEvent::StatusUpdate(Status::Loading))
        .await?;

    let status = match state.resolver.resolve(&text).await {
        Err(LookupError::InputInvalid) => {
            tracing::debug!("Rejected empty input");
            Status::EmptyInput
        }
        Ok(None) => Status::NotFound(text.trim().to_string()),
        Ok(Some(resolved)) => {
            tracing::debug!(
                "Resolved '{}' via {:?}",
                resolved.record.character,
                resolved.origin
            );

            let worksheet = {
                let config = state.config.read().await;
                build_worksheet(&resolved.record, resolved.origin, &config.worksheet)
            };
            app_to_output_tx
                .send(AppEvent::ShowWorksheet(Box::new(worksheet)))
                .await?;

            Status::Ready(resolved.record.character.clone())
        }
    };

    state.status.record(&status).await;
    app_to_output_tx.send(AppEvent::StatusUpdate(status)).await?;

    Ok(())
}
