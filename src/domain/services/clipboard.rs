use anyhow::anyhow;
use anyhow::Result;
use once_cell::sync::OnceCell;
use tokio::sync::mpsc;

static SENDER: OnceCell<mpsc::UnboundedSender<String>> = OnceCell::new();

/// Owns the system clipboard on a dedicated task. Other parts of the app hand
/// it text through `set`.
pub struct ClipboardService {}

impl ClipboardService {
    pub async fn start() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        if SENDER.set(tx).is_err() {
            return Err(anyhow!("Clipboard service is already running."));
        }
        let mut clipboard = arboard::Clipboard::new()?;

        while let Some(text) = rx.recv().await {
            if let Err(err) = clipboard.set_text(text) {
                tracing::error!(error = ?err, "Failed to write to clipboard");
            }
        }

        return Ok(());
    }

    pub fn healthcheck() -> Result<()> {
        if SENDER.get().is_some() {
            return Ok(());
        }

        arboard::Clipboard::new()?;
        return Ok(());
    }

    pub fn set(text: String) -> Result<()> {
        if let Some(tx) = SENDER.get() {
            tx.send(text)?;
            return Ok(());
        }

        return Err(anyhow!("Clipboard is not available in this terminal."));
    }
}
