use std::collections::VecDeque;

use crate::host::{HostEvent, MediaHost};

pub const PLAYBACK_RATES: [f64; 6] = [0.5, 1.0, 1.5, 2.0, 3.0, 4.0];
pub const SKIP_SECONDS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

#[derive(Debug, Clone)]
pub struct PreviewPlayer {
    pub state: PlaybackState,
    position: f64,
    duration: f64,
    speed: f64,
    events: VecDeque<HostEvent>,
}

impl Default for PreviewPlayer {
    fn default() -> Self {
        Self {
            state: PlaybackState::Paused,
            position: 0.0,
            duration: 0.0,
            speed: 1.0,
            events: VecDeque::new(),
        }
    }
}

impl PreviewPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, duration: f64) {
        *self = Self {
            duration: if duration.is_finite() {
                duration.max(0.0)
            } else {
                0.0
            },
            ..Self::default()
        };
        self.events.push_back(HostEvent::Loaded);
    }

    pub fn is_loaded(&self) -> bool {
        self.duration > 0.0
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() && speed > 0.0 {
            self.speed = speed;
        }
    }

    pub fn skip(&mut self, delta: f64) {
        self.seek(self.position + delta);
    }

    pub fn advance(&mut self, dt: f64) {
        if self.state != PlaybackState::Playing || dt <= 0.0 {
            return;
        }
        self.position += dt * self.speed;
        if self.position >= self.duration {
            self.position = self.duration;
            self.state = PlaybackState::Paused;
        }
        self.events.push_back(HostEvent::TimeUpdate);
    }
}

impl MediaHost for PreviewPlayer {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn seek(&mut self, to: f64) {
        self.position = if to.is_finite() {
            to.clamp(0.0, self.duration)
        } else {
            0.0
        };
        self.events.push_back(HostEvent::Seeked);
    }

    fn play(&mut self) {
        if !self.is_loaded() {
            return;
        }
        if self.position >= self.duration {
            self.position = 0.0;
            self.events.push_back(HostEvent::Seeked);
        }
        self.state = PlaybackState::Playing;
    }

    fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    fn paused(&self) -> bool {
        self.state != PlaybackState::Playing
    }

    fn take_events(&mut self) -> Vec<HostEvent> {
        self.events.drain(..).collect()
    }
}
