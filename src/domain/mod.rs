mod mentor;

pub use mentor::{Listening, MENTOR, MentorProfile, TraitLine};
