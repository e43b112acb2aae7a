use hanzi_types::AppEvent;
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Where generate triggers come from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Characters given on the command line, one trigger each
    Args(Vec<String>),
    /// One trigger per line; pressing Enter generates
    Stdin,
}

impl InputSource {
    pub fn from_args(characters: Vec<String>) -> Self {
        if characters.is_empty() {
            InputSource::Stdin
        } else {
            InputSource::Args(characters)
        }
    }
}

/// Feed generate triggers to the app, then signal that input is closed
pub async fn input_io(
    source: InputSource,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match source {
        InputSource::Args(characters) => {
            for text in characters {
                if cancel.is_cancelled() {
                    break;
                }
                event_tx.send(AppEvent::Generate(text)).await?;
            }
        }
        InputSource::Stdin => {
            let interactive = atty::is(atty::Stream::Stdin);
            let mut lines = BufReader::new(tokio::io::stdin()).lines();

            loop {
                if interactive {
                    prompt().await;
                }

                tokio::select! {
                    line = lines.next_line() => match line? {
                        Some(text) => event_tx.send(AppEvent::Generate(text)).await?,
                        None => break,
                    },
                    _ = cancel.cancelled() => {
                        tracing::info!("Input reader stopping");
                        break;
                    }
                }
            }
        }
    }

    event_tx.send(AppEvent::InputClosed).await?;
    Ok(())
}

async fn prompt() {
    let mut stderr = tokio::io::stderr();
    let _ = stderr.write_all("Zeichen> ".as_bytes()).await;
    let _ = stderr.flush().await;
}
