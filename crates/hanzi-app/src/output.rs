use hanzi_types::{AppEvent, Status, Worksheet};
use kanal::AsyncReceiver;
use tokio::io::AsyncWriteExt;

/// Presentation side: worksheets as JSON on stdout, status messages on stderr
pub async fn output_loop(app_to_output_rx: AsyncReceiver<AppEvent>, pretty: bool) -> anyhow::Result<()> {
    let show_progress = atty::is(atty::Stream::Stderr);
    let mut stdout = tokio::io::stdout();

    loop {
        match app_to_output_rx.recv().await? {
            AppEvent::ShowWorksheet(worksheet) => match render(&worksheet, pretty) {
                Ok(json) => {
                    stdout.write_all(json.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                    stdout.flush().await?;
                }
                Err(e) => {
                    tracing::error!("Failed to serialize worksheet: {}", e);
                    eprintln!("{}", Status::LoadFailed);
                }
            },
            AppEvent::StatusUpdate(status) => match status {
                Status::Loading if !show_progress => {}
                Status::Ready(_) => tracing::info!("{}", status),
                status => eprintln!("{status}"),
            },
            AppEvent::InputClosed => break,
            AppEvent::Generate(_) => {
                // Input-only event
            }
        }
    }

    Ok(())
}

pub fn render(worksheet: &Worksheet, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(worksheet)
    } else {
        serde_json::to_string(worksheet)
    }
}
