use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Matching,
    MentorIntro,
    MentorProfile,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::Matching => "matching",
            Route::MentorIntro => "mentor-intro",
            Route::MentorProfile => "mentor-profile",
        };
        write!(f, "{name}")
    }
}

/// Thin route stack. The flow only ever pushes, even when it loops back
/// to the start; back pops to the previous screen and stays put at the
/// root.
pub struct Router {
    stack: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Router {
            stack: vec![Route::Matching],
        }
    }

    pub fn current(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::Matching)
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    pub fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_opens_on_matching() {
        let router = Router::new();
        assert_eq!(router.current(), Route::Matching);
    }

    #[test]
    fn test_push_changes_current() {
        let mut router = Router::new();
        router.push(Route::MentorIntro);
        assert_eq!(router.current(), Route::MentorIntro);

        router.push(Route::MentorProfile);
        assert_eq!(router.current(), Route::MentorProfile);
    }

    #[test]
    fn test_back_pops_to_previous() {
        let mut router = Router::new();
        router.push(Route::MentorIntro);
        router.back();
        assert_eq!(router.current(), Route::Matching);
    }

    #[test]
    fn test_back_at_root_stays_put() {
        let mut router = Router::new();
        router.back();
        assert_eq!(router.current(), Route::Matching);
    }
}
