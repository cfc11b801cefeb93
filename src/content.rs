//! Static portfolio content
//!
//! Everything shown on the page that is not interaction state.

pub const OWNER_BRAND: &str = "JARVIS";

/// Typewriter phrases, revealed in order and looped
pub const PHRASES: [&str; 3] = [
    "Dhananjai | Full stack web developer",
    "Dhananjai | Innovator",
    "Dhananjai | Problem Solver",
];

pub const HERO_TAGLINE: &str = "a place where you will get to know more about me and my work";
pub const HERO_CTA: &str = "Engage Systems";

pub const ABOUT_TITLE: &str = "Core Systems";
pub const ABOUT_TEXT: &str = "I am a full stack web developer, I specialize in innovative web design \
and creative solutions for the problems we face";

pub const SKILLS_TITLE: &str = "Tech Matrix";
pub const SKILLS: [&str; 8] = [
    "React",
    "Tailwind CSS",
    "Socket.IO",
    "MongoDB",
    "Node.js",
    "JavaScript",
    "HTML5",
    "CSS3",
];

pub const PROJECTS_TITLE: &str = "Operational Modules";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Campus Cravings",
        description: "An ecommerce food platform inside a campus using Socket.IO, MongoDB, \
and for frontend React and Tailwind CSS.",
    },
    Project {
        title: "Neon Dashboard",
        description: "A responsive analytics dashboard built with Tailwind CSS for real-time \
data visualization.",
    },
    Project {
        title: "AI Nexus",
        description: "An AI-driven automation tool with a sci-fi interface, powered by machine \
learning algorithms.",
    },
];

pub const CONTACT_TITLE: &str = "Open Comm Link";
pub const CONTACT_INTRO: &str =
    "Connect for collaborations or inquiries. Systems are fully operational.";
pub const CONTACT_SUBMIT: &str = "Transmit Signal";

/// (label, target) pairs shown under the contact form
pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/dhananjaiyadav1234"),
    ("LinkedIn", "https://www.linkedin.com/in/dhananjai-yadav-220162307/"),
    ("Email", "mailto:dhananjaiyadav2006@gmail.com"),
];
