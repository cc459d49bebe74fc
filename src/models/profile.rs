//! Owner profile shown on the home screen.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Site owner, used in terminal titles and the navigation header.
pub const OWNER_NAME: &str = "Fernando Rocha";

/// Contact address shown on the home screen.
pub const OWNER_EMAIL: &str = "hello@frocha.net";

/// An external profile link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Glyph rendered before the link name
    pub icon: String,
}

/// Static profile data for the home screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    /// Free-form summary; blank lines separate paragraphs
    pub summary: String,
    pub call_to_action: String,
    pub social_links: Vec<SocialLink>,
}

impl Profile {
    /// Summary split into non-empty paragraphs.
    pub fn summary_paragraphs(&self) -> Vec<&str> {
        self.summary
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .collect()
    }
}

/// The single profile instance.
pub static PROFILE: Lazy<Profile> = Lazy::new(|| Profile {
    name: OWNER_NAME.to_string(),
    email: OWNER_EMAIL.to_string(),
    summary: "\u{1f44b} Ol\u{e1}, I'm Fernando, a software engineer and developer based in Porto.\n\
I'm fluent in Portuguese, French, and English.\n\n\
I have experience developing full stack web applications and integrating them with external services and APIs, \
always focusing on clean architecture, performance, and scalability.\n\
Beyond web development, I'm deeply passionate about games and interactive systems, which fuel my curiosity \
and drive to explore new technologies and ways of creating engaging user experiences.\n\n\
I'm constantly learning and experimenting, whether it's mastering a new framework, optimizing backend logic, \
or finding innovative ways to connect ideas through code. For me, innovation starts with curiosity, \
and I never stop being curious."
        .to_string(),
    call_to_action: "Feel free to reach out to me".to_string(),
    social_links: vec![
        SocialLink {
            name: "GitHub".to_string(),
            url: "https://github.com/Fernando-A-Rocha".to_string(),
            icon: "\u{f09b}".to_string(),
        },
        SocialLink {
            name: "LinkedIn".to_string(),
            url: "https://linkedin.com/in/fernandorocha51".to_string(),
            icon: "\u{f08c}".to_string(),
        },
    ],
});
