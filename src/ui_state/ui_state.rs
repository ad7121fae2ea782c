use crate::{
    domain::{MENTOR, MentorProfile},
    key_handler::Director,
    player::{PlayerState, Tick},
    ui_state::{
        animation::{Timeline, intro_cues, matching_cues, profile_cues},
        screen::{Route, Router},
        theme::Theme,
    },
};
use crossbeam_channel::Receiver;
use log::info;
use std::time::{Duration, Instant};

/// How long the matching screen holds before moving itself along
const MATCH_HOLD: Duration = Duration::from_millis(4200);

pub struct UiState {
    router: Router,
    pub(crate) theme: Theme,
    pub(crate) entrance: Timeline,
    pub(crate) mentor: &'static MentorProfile,
    pub(crate) player: Option<PlayerState>,
    auto_advance: Option<Instant>,
    pub(crate) profile_scroll: usize,
    profile_max_scroll: usize,
    quit: bool,
}

impl UiState {
    pub fn new() -> Self {
        let now = Instant::now();

        UiState {
            router: Router::new(),
            theme: Theme::load(),
            entrance: Timeline::start(matching_cues(), now),
            mentor: &MENTOR,
            player: None,
            auto_advance: Some(now + MATCH_HOLD),
            profile_scroll: 0,
            profile_max_scroll: 0,
            quit: false,
        }
    }

    pub fn current_route(&self) -> Route {
        self.router.current()
    }
}

// ===============
//   NAVIGATION
// ===============

impl UiState {
    /// Push a screen and run the mount/unmount bookkeeping that comes
    /// with it. Leaving the profile drops the player state, and any
    /// tick still in flight with it.
    pub fn navigate(&mut self, route: Route) {
        info!("navigating to {route}");

        self.unmount_current();
        self.router.push(route);
        self.mount(route);
    }

    fn unmount_current(&mut self) {
        self.player = None;
        self.auto_advance = None;
        self.profile_scroll = 0;
        self.profile_max_scroll = 0;
    }

    fn mount(&mut self, route: Route) {
        let now = Instant::now();

        match route {
            Route::Matching => {
                self.entrance = Timeline::start(matching_cues(), now);
                self.auto_advance = Some(now + MATCH_HOLD);
            }
            Route::MentorIntro => {
                self.entrance = Timeline::start(intro_cues(), now);
            }
            Route::MentorProfile => {
                self.entrance = Timeline::start(profile_cues(), now);
                self.player = Some(PlayerState::new());
            }
        }
    }

    /// The matching screen advances on its own once its hold expires.
    /// Navigation clears the deadline, so this fires at most once per
    /// mount.
    pub fn poll_auto_advance(&mut self, now: Instant) {
        if let Some(deadline) = self.auto_advance {
            if now >= deadline {
                self.navigate(Route::MentorIntro);
            }
        }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

// ===============
//    PLAYBACK
// ===============

impl UiState {
    /// No-op off the profile screen; the player only exists there.
    pub fn toggle_playback(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.toggle();
        }
    }

    pub fn handle_tick(&mut self, tick: Tick) {
        if let Some(player) = self.player.as_mut() {
            player.handle_tick(tick);
        }
    }

    pub fn tick_receiver(&self) -> Option<&Receiver<Tick>> {
        self.player.as_ref().map(PlayerState::tick_receiver)
    }
}

// ===============
//    SCROLLING
// ===============

impl UiState {
    pub fn scroll(&mut self, director: Director) {
        if self.current_route() != Route::MentorProfile {
            return;
        }

        self.profile_scroll = match director {
            Director::Up(n) => self.profile_scroll.saturating_sub(n),
            Director::Down(n) => (self.profile_scroll + n).min(self.profile_max_scroll),
            Director::Top => 0,
            Director::Bottom => self.profile_max_scroll,
        };
    }

    /// The renderer reports how far the body can scroll once it has
    /// measured the section text against the viewport.
    pub fn set_profile_scroll_bounds(&mut self, max: usize) {
        self.profile_max_scroll = max;
        self.profile_scroll = self.profile_scroll.min(max);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_opens_on_matching_with_hold_armed() {
        let ui = UiState::new();
        assert_eq!(ui.current_route(), Route::Matching);
        assert!(ui.auto_advance.is_some());
        assert!(ui.player.is_none());
    }

    #[test]
    fn test_profile_mount_creates_player() {
        let mut ui = UiState::new();
        ui.navigate(Route::MentorProfile);
        assert!(ui.player.is_some());
    }

    #[test]
    fn test_leaving_profile_drops_player() {
        let mut ui = UiState::new();
        ui.navigate(Route::MentorProfile);
        ui.toggle_playback();

        ui.navigate(Route::Matching);
        assert!(ui.player.is_none());
        assert!(ui.tick_receiver().is_none());
    }

    #[test]
    fn test_auto_advance_fires_once() {
        let mut ui = UiState::new();
        let deadline = ui.auto_advance.unwrap();

        ui.poll_auto_advance(deadline - Duration::from_millis(1));
        assert_eq!(ui.current_route(), Route::Matching);

        ui.poll_auto_advance(deadline);
        assert_eq!(ui.current_route(), Route::MentorIntro);
        assert!(ui.auto_advance.is_none());

        ui.poll_auto_advance(deadline + Duration::from_secs(10));
        assert_eq!(ui.current_route(), Route::MentorIntro);
    }

    #[test]
    fn test_returning_to_matching_rearms_the_hold() {
        let mut ui = UiState::new();
        ui.navigate(Route::MentorIntro);
        assert!(ui.auto_advance.is_none());

        ui.navigate(Route::Matching);
        assert!(ui.auto_advance.is_some());
    }

    #[test]
    fn test_toggle_off_profile_is_inert() {
        let mut ui = UiState::new();
        ui.toggle_playback();
        assert!(ui.player.is_none());
    }

    #[test]
    fn test_scroll_clamps_to_measured_bounds() {
        let mut ui = UiState::new();
        ui.navigate(Route::MentorProfile);
        ui.set_profile_scroll_bounds(10);

        ui.scroll(Director::Down(3));
        assert_eq!(ui.profile_scroll, 3);

        ui.scroll(Director::Down(100));
        assert_eq!(ui.profile_scroll, 10);

        ui.scroll(Director::Up(100));
        assert_eq!(ui.profile_scroll, 0);

        ui.scroll(Director::Bottom);
        assert_eq!(ui.profile_scroll, 10);

        ui.scroll(Director::Top);
        assert_eq!(ui.profile_scroll, 0);
    }

    #[test]
    fn test_scroll_ignored_off_profile() {
        let mut ui = UiState::new();
        ui.scroll(Director::Down(3));
        assert_eq!(ui.profile_scroll, 0);
    }

    #[test]
    fn test_leaving_profile_restarts_the_flow() {
        let mut ui = UiState::new();
        ui.navigate(Route::MentorIntro);
        ui.navigate(Route::MentorProfile);

        ui.navigate(Route::Matching);
        assert_eq!(ui.current_route(), Route::Matching);
        assert!(ui.player.is_none());
    }
}
