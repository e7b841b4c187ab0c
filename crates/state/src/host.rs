/// Notifications from the media player. Payload-free: the receiver reads the
/// current time back from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Loaded,
    Seeked,
    TimeUpdate,
}

pub trait MediaHost {
    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
    fn seek(&mut self, to: f64);
    fn play(&mut self);
    fn pause(&mut self);
    fn paused(&self) -> bool;

    fn toggle_play(&mut self) {
        if self.paused() {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Events raised since the last call, oldest first. Hosts that deliver
    /// events some other way leave this empty.
    fn take_events(&mut self) -> Vec<HostEvent> {
        Vec::new()
    }
}
