use crate::player::{PlaybackSim, Tick, Ticker};
use crossbeam_channel::{Receiver, Sender, bounded};
use log::debug;
use std::time::Instant;

// Full pulse swing, out and back
const PULSE_PERIOD_MS: u64 = 800;
const PULSE_MAX: f32 = 0.15;

/// Everything the audio player widget owns while the profile screen is
/// up. Dropping it takes the ticker down with it, which is what cancels
/// the recurring tick when the user leaves the screen mid-listen.
pub struct PlayerState {
    sim: PlaybackSim,
    ticker: Option<Ticker>,
    epoch: u64,
    tick_tx: Sender<Tick>,
    tick_rx: Receiver<Tick>,
    playing_since: Option<Instant>,
}

impl PlayerState {
    pub fn new() -> Self {
        // One slot: an unconsumed tick blocks further sends, so ticks
        // reach the app strictly one at a time
        let (tick_tx, tick_rx) = bounded(1);

        PlayerState {
            sim: PlaybackSim::new(),
            ticker: None,
            epoch: 0,
            tick_tx,
            tick_rx,
            playing_since: None,
        }
    }

    pub fn toggle(&mut self) {
        self.sim.toggle();
        self.epoch += 1;

        match self.sim.is_playing() {
            true => {
                self.ticker = Some(Ticker::spawn(self.tick_tx.clone(), self.epoch));
                self.playing_since = Some(Instant::now());
                debug!("playback started (epoch {})", self.epoch);
            }
            false => {
                self.retire_ticker();
                debug!("playback paused at {:.3}", self.sim.progress());
            }
        }
    }

    /// Apply one tick from the ticker thread. Ticks sent by a ticker
    /// that has since been replaced or dropped are discarded here.
    pub fn handle_tick(&mut self, tick: Tick) {
        if tick.epoch != self.epoch {
            debug!("stale tick discarded (epoch {} != {})", tick.epoch, self.epoch);
            return;
        }

        self.sim.advance();

        if !self.sim.is_playing() {
            // Clip ran out
            self.retire_ticker();
            debug!("clip finished, playhead reset");
        }
    }

    fn retire_ticker(&mut self) {
        self.ticker = None;
        self.playing_since = None;
    }

    pub fn is_playing(&self) -> bool {
        self.sim.is_playing()
    }

    pub fn progress(&self) -> f32 {
        self.sim.progress()
    }

    pub fn segment_active(&self, index: usize, segment_count: usize) -> bool {
        self.sim.segment_active(index, segment_count)
    }

    pub fn tick_receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Scale factor for the play button, `1.0..=1.15`. Swells and falls
    /// in a triangle wave while playing, sits at rest otherwise.
    pub fn pulse_scale(&self, now: Instant) -> f32 {
        let Some(origin) = self.playing_since else {
            return 1.0;
        };

        let phase = (now.duration_since(origin).as_millis() as u64 % PULSE_PERIOD_MS) as f32
            / PULSE_PERIOD_MS as f32;

        match phase < 0.5 {
            true => 1.0 + PULSE_MAX * (phase * 2.0),
            false => 1.0 + PULSE_MAX * (2.0 - phase * 2.0),
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
