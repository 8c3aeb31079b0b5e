//! JSON-lines event loop over stdin and stdout.
//!
//! Each input line holds one [`Request`]; every [`Response`] it produces is
//! written back as one JSON object per line. Lines that do not parse produce
//! an `error` event and the loop carries on. The loop ends on end of input or
//! after emitting `end_application`.

use anyhow::{Context, Result};
use atlas_core::{Request, Response, Session};
use log::{debug, info, warn};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Serves requests from stdin until the client quits or closes the stream.
pub async fn run_stdio(session: Session) -> Result<()> {
    info!("Serving request events on stdin");
    run(session, BufReader::new(io::stdin()), io::stdout()).await
}

pub async fn run<R, W>(mut session: Session, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.context("Failed to read request")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let responses = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                debug!("Received {request:?}");
                session.process(request).await
            }
            Err(err) => {
                warn!("Ignoring malformed request: {err}");
                vec![Response::Error {
                    message: format!("Invalid request: {err}"),
                }]
            }
        };

        let mut finished = false;
        for response in &responses {
            write_response(&mut writer, response).await?;
            finished |= matches!(response, Response::EndApplication);
        }
        if finished {
            info!("Client requested shutdown");
            break;
        }
    }

    Ok(())
}

async fn write_response<W: AsyncWrite + Unpin>(writer: &mut W, response: &Response) -> Result<()> {
    let mut line = serde_json::to_string(response).context("Failed to encode response")?;
    line.push('\n');
    writer
        .write_all(line.as_bytes())
        .await
        .context("Failed to write response")?;
    writer.flush().await.context("Failed to flush response")
}
