use crate::player::{LEAD_EPSILON, TOTAL_STEPS};

/// Play/pause state and the playhead for the simulated voice clip.
///
/// The playhead is quantized: it only ever rests on one of
/// `TOTAL_STEPS` evenly spaced stops, so a full listen is exactly
/// `TOTAL_STEPS` ticks and completion never hinges on float drift.
pub struct PlaybackSim {
    playing: bool,
    step: u32,
}

impl PlaybackSim {
    pub fn new() -> Self {
        PlaybackSim {
            playing: false,
            step: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Fraction of the clip behind the playhead, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.step as f32 / TOTAL_STEPS as f32
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Move the playhead forward one step. The step that would land on
    /// the end instead rewinds to the start and stops playback; nothing
    /// moves while paused, so a tick that raced a pause is inert.
    pub fn advance(&mut self) {
        if !self.playing {
            return;
        }

        match self.step + 1 >= TOTAL_STEPS {
            true => {
                self.step = 0;
                self.playing = false;
            }
            false => self.step += 1,
        }
    }

    /// Whether waveform bar `index` of `segment_count` should light up.
    /// Bars at or behind the playhead are lit; while playing, bars
    /// within `LEAD_EPSILON` of it glow slightly early.
    pub fn segment_active(&self, index: usize, segment_count: usize) -> bool {
        let position = index as f32 / segment_count as f32;

        position <= self.progress()
            || (self.playing && (position - self.progress()).abs() < LEAD_EPSILON)
    }
}

impl Default for PlaybackSim {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 1.0 / TOTAL_STEPS as f32;

    #[test]
    fn test_starts_paused_at_zero() {
        let sim = PlaybackSim::new();
        assert!(!sim.is_playing());
        assert_eq!(sim.progress(), 0.0);
    }

    #[test]
    fn test_progress_stays_in_bounds() {
        let mut sim = PlaybackSim::new();
        for _ in 0..100 {
            if !sim.is_playing() {
                sim.toggle();
            }
            sim.advance();
            assert!(sim.progress() >= 0.0);
            assert!(sim.progress() <= 1.0);
        }
    }

    #[test]
    fn test_each_tick_adds_one_step() {
        let mut sim = PlaybackSim::new();
        sim.toggle();

        let mut last = sim.progress();
        for _ in 0..42 {
            sim.advance();
            assert!((sim.progress() - last - STEP).abs() < 1e-4);
            last = sim.progress();
        }
    }

    #[test]
    fn test_full_listen_takes_exactly_43_ticks() {
        let mut sim = PlaybackSim::new();
        sim.toggle();

        for _ in 0..42 {
            sim.advance();
            assert!(sim.is_playing());
        }

        sim.advance();
        assert!(!sim.is_playing());
        assert_eq!(sim.progress(), 0.0);
    }

    #[test]
    fn test_final_step_rewinds_and_stops() {
        let mut sim = PlaybackSim {
            playing: true,
            step: TOTAL_STEPS - 1,
        };

        sim.advance();
        assert_eq!(sim.progress(), 0.0);
        assert!(!sim.is_playing());
    }

    #[test]
    fn test_pause_and_resume_keep_the_playhead() {
        let mut sim = PlaybackSim::new();
        sim.toggle();
        for _ in 0..10 {
            sim.advance();
        }
        let before = sim.progress();

        sim.toggle();
        assert!(!sim.is_playing());
        assert_eq!(sim.progress(), before);

        sim.toggle();
        assert!(sim.is_playing());
        assert_eq!(sim.progress(), before);
    }

    #[test]
    fn test_toggle_twice_from_rest_changes_nothing() {
        let mut sim = PlaybackSim::new();
        sim.toggle();
        sim.toggle();
        assert!(!sim.is_playing());
        assert_eq!(sim.progress(), 0.0);
    }

    #[test]
    fn test_tick_while_paused_is_inert() {
        let mut sim = PlaybackSim::new();
        sim.advance();
        assert_eq!(sim.progress(), 0.0);
        assert!(!sim.is_playing());
    }

    #[test]
    fn test_reached_segments_light_up() {
        // 11 steps in, the playhead sits just past a quarter
        let sim = PlaybackSim {
            playing: true,
            step: 11,
        };

        assert!(sim.segment_active(5, 28));
        assert!(sim.segment_active(0, 28));
        assert!(!sim.segment_active(27, 28));
    }

    #[test]
    fn test_leading_edge_glows_only_while_playing() {
        let playing = PlaybackSim {
            playing: true,
            step: 11,
        };
        let paused = PlaybackSim {
            playing: false,
            step: 11,
        };

        // Bar 8 of 28 sits just ahead of the playhead
        assert!(playing.segment_active(8, 28));
        assert!(!paused.segment_active(8, 28));

        // Bar 10 is too far out even while playing
        assert!(!playing.segment_active(10, 28));
    }

    #[test]
    fn test_first_segment_is_lit_at_rest() {
        let sim = PlaybackSim::new();
        assert!(sim.segment_active(0, 28));
        assert!(!sim.segment_active(1, 28));
    }
}
