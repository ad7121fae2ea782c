/// An icon glyph plus a short line, as listed in the traits and topics
/// sections of the profile.
pub struct TraitLine {
    pub icon: &'static str,
    pub label: &'static str,
}

pub struct Listening {
    pub song: &'static str,
    pub artist: &'static str,
}

/// The one mentor this build ships with. Everything on the profile
/// screen reads from here; nothing is fetched.
pub struct MentorProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub audio_title: &'static str,
    pub audio_duration: &'static str,
    pub shared_traits: [TraitLine; 4],
    pub working_on: &'static str,
    pub topics: [TraitLine; 4],
    pub advice: &'static str,
    pub listening: Listening,
    pub whats_up: &'static str,
    pub weekend: &'static str,
}

pub const MENTOR: MentorProfile = MentorProfile {
    id: "sam-01",
    name: "Sam",
    tagline: "We think you'll really click.",
    audio_title: "Why I became a mentor...",
    audio_duration: "0:45",
    shared_traits: [
        TraitLine {
            icon: "󰖔",
            label: "Are night owls",
        },
        TraitLine {
            icon: "󰌪",
            label: "Value being in nature",
        },
        TraitLine {
            icon: "󰝚",
            label: "Find comfort in music",
        },
        TraitLine {
            icon: "󰡉",
            label: "Know what it feels like when family life is complicated",
        },
    ],
    working_on: "Figuring out who I am, managing anxiety, and learning how to ask for help when I need it.",
    topics: [
        TraitLine {
            icon: "󰄀",
            label: "Photography",
        },
        TraitLine {
            icon: "󰡱",
            label: "Sports",
        },
        TraitLine {
            icon: "󰗲",
            label: "I love food / cooking",
        },
        TraitLine {
            icon: "󰝚",
            label: "Music",
        },
    ],
    advice: "You don't have to look a certain way to be worthy. You already are.",
    listening: Listening {
        song: "I Love You, I'm Sorry",
        artist: "Gracie Abrams",
    },
    whats_up: "Currently in grad school, studying Psychology, trying to be a grown-up but feel like a kid!",
    weekend: "There's a trail that I absolutely love near my home!",
};
