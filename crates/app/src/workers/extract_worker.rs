use std::path::PathBuf;
use std::sync::mpsc;

use easyclip_media::extract::{self, ExtractJob, ExtractSettings};

pub struct ExtractRequest {
    pub job: ExtractJob,
    pub settings: ExtractSettings,
}

pub enum ExtractEvent {
    /// Microseconds of output written so far.
    Progress(i64),
    Finished(anyhow::Result<PathBuf>),
}

pub struct ExtractWorkerChannels {
    pub req_tx: mpsc::Sender<ExtractRequest>,
    pub event_rx: mpsc::Receiver<ExtractEvent>,
}

/// Runs one extraction at a time, in request order.
pub fn spawn_extract_worker() -> ExtractWorkerChannels {
    let (req_tx, req_rx) = mpsc::channel::<ExtractRequest>();
    let (event_tx, event_rx) = mpsc::channel::<ExtractEvent>();

    std::thread::spawn(move || {
        while let Ok(req) = req_rx.recv() {
            let progress_tx = event_tx.clone();
            let result = extract::run(&req.job, &req.settings, |time_us| {
                let _ = progress_tx.send(ExtractEvent::Progress(time_us));
            });
            if let Err(e) = &result {
                tracing::warn!(input = %req.job.input.display(), "extraction failed: {e:#}");
            }
            if event_tx.send(ExtractEvent::Finished(result)).is_err() {
                return;
            }
        }
    });

    ExtractWorkerChannels { req_tx, event_rx }
}
