mod sim;
mod state;
mod ticker;

pub use sim::PlaybackSim;
pub use state::PlayerState;
pub use ticker::{Tick, Ticker};

use std::time::Duration;

/// One simulated second of the clip per tick; the take runs out after
/// this many of them. The 0:45 printed on the card is a label, not a
/// measurement.
pub const TOTAL_STEPS: u32 = 43;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How far ahead of the playhead a waveform bar may light up early
/// while the clip is playing.
pub const LEAD_EPSILON: f32 = 0.05;
