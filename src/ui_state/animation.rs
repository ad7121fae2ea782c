use std::time::{Duration, Instant};

// Three loading dots share one loop of rise, fall and rest
const DOT_RISE_MS: u64 = 280;
const DOT_STAGGER_MS: u64 = 160;
const DOT_REST_MS: u64 = 500;
const DOT_CYCLE_MS: u64 = DOT_STAGGER_MS * 2 + DOT_RISE_MS * 2 + DOT_REST_MS;

// Cue indices per screen, in mount order
pub const MATCH_HEADING: usize = 0;
pub const MATCH_TAG_FIRST: usize = 1;
pub const MATCH_DOODLE: usize = 6;

pub const INTRO_TITLE: usize = 0;
pub const INTRO_SUBTITLE: usize = 1;
pub const INTRO_DOODLE: usize = 2;
pub const INTRO_BUTTON: usize = 3;

pub const PROFILE_ENTER: usize = 0;

pub enum Easing {
    Linear,
    EaseOut,
    Spring,
}

impl Easing {
    fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            // Underdamped settle with a small overshoot past 1.0
            Easing::Spring => 1.0 - (-4.0 * t).exp() * (7.0 * t).cos(),
        }
    }
}

/// One entrance effect: wait `delay`, then run for `duration` under an
/// easing curve.
pub struct Cue {
    delay: Duration,
    duration: Duration,
    easing: Easing,
}

impl Cue {
    pub fn new(delay_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Cue {
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
            easing,
        }
    }
}

/// The entrance choreography of the screen currently up. Restarted from
/// scratch every time a screen mounts.
pub struct Timeline {
    started: Instant,
    cues: Vec<Cue>,
}

impl Timeline {
    pub fn start(cues: Vec<Cue>, now: Instant) -> Self {
        Timeline { started: now, cues }
    }

    pub fn origin(&self) -> Instant {
        self.started
    }

    /// Eased progress of cue `idx` at `now`. Rests at 0.0 until the
    /// cue's delay has passed and settles at exactly 1.0 once its
    /// duration is spent; springs overshoot in between.
    pub fn value(&self, idx: usize, now: Instant) -> f32 {
        let Some(cue) = self.cues.get(idx) else {
            return 1.0;
        };

        let elapsed = now.duration_since(self.started);
        if elapsed <= cue.delay {
            return 0.0;
        }

        let t = (elapsed - cue.delay).as_secs_f32() / cue.duration.as_secs_f32();
        match t >= 1.0 {
            true => 1.0,
            false => cue.easing.apply(t),
        }
    }
}

// Heading settles first, then the tags stagger in, then the doodle
pub fn matching_cues() -> Vec<Cue> {
    let mut cues = vec![Cue::new(0, 600, Easing::Spring)];
    for i in 0..5 {
        cues.push(Cue::new(600 + 180 * i, 450, Easing::Spring));
    }
    let tags_done = 600 + 180 * 4 + 450;
    cues.push(Cue::new(tags_done + 200, 500, Easing::Linear));
    cues
}

// Title first; subtitle and doodle together; button last
pub fn intro_cues() -> Vec<Cue> {
    vec![
        Cue::new(0, 500, Easing::Spring),
        Cue::new(500, 400, Easing::Linear),
        Cue::new(500, 600, Easing::Spring),
        Cue::new(500 + 600 + 200, 300, Easing::EaseOut),
    ]
}

pub fn profile_cues() -> Vec<Cue> {
    vec![Cue::new(0, 400, Easing::Spring)]
}

/// Bounce height of loading dot `index`, in `0.0..=1.0`. The dots rise
/// and fall in turn, then rest together before the loop repeats.
pub fn dot_bounce(index: usize, origin: Instant, now: Instant) -> f32 {
    let t = now.duration_since(origin).as_millis() as u64 % DOT_CYCLE_MS;

    let start = DOT_STAGGER_MS * index as u64;
    if t < start {
        return 0.0;
    }

    let local = t - start;
    if local < DOT_RISE_MS {
        local as f32 / DOT_RISE_MS as f32
    } else if local < DOT_RISE_MS * 2 {
        1.0 - (local - DOT_RISE_MS) as f32 / DOT_RISE_MS as f32
    } else {
        0.0
    }
}
