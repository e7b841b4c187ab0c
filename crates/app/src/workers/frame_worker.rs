use std::path::PathBuf;
use std::sync::mpsc;

use easyclip_media::frame::{frame_at, FRAME_HEIGHT, FRAME_WIDTH};

/// Frames closer together than this are treated as the same frame.
pub const FRAME_BUCKETS_PER_SEC: f64 = 10.0;

pub struct FrameRequest {
    pub session: u64,
    pub path: PathBuf,
    pub time_seconds: f64,
}

pub struct FrameResult {
    pub session: u64,
    pub image: Option<image::RgbaImage>,
}

pub struct FrameWorkerChannels {
    pub req_tx: mpsc::Sender<FrameRequest>,
    pub result_rx: mpsc::Receiver<FrameResult>,
}

pub fn frame_bucket(time_seconds: f64) -> i64 {
    (time_seconds * FRAME_BUCKETS_PER_SEC).round() as i64
}

pub fn spawn_frame_worker() -> FrameWorkerChannels {
    let (req_tx, req_rx) = mpsc::channel::<FrameRequest>();
    let (result_tx, result_rx) = mpsc::channel::<FrameResult>();

    std::thread::spawn(move || {
        let mut last_emitted: Option<(u64, i64)> = None;
        loop {
            let Ok(mut req) = req_rx.recv() else {
                return;
            };
            while let Ok(next) = req_rx.try_recv() {
                req = next;
            }

            let bucket = frame_bucket(req.time_seconds);
            if last_emitted == Some((req.session, bucket)) {
                continue;
            }

            let image = frame_at(&req.path, req.time_seconds, FRAME_WIDTH, FRAME_HEIGHT);
            if result_tx
                .send(FrameResult {
                    session: req.session,
                    image,
                })
                .is_err()
            {
                return;
            }
            last_emitted = Some((req.session, bucket));
        }
    });

    FrameWorkerChannels { req_tx, result_rx }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_times_share_a_bucket() {
        assert_eq!(frame_bucket(1.02), frame_bucket(0.98));
        assert_ne!(frame_bucket(1.0), frame_bucket(1.1));
    }
}
