//! Static portfolio content shared by the content apps.

/// Portfolio owner.
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub avatar: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Jordan Avery",
    role: "Software Engineer",
    location: "Remote",
    email: "hello@jordanavery.dev",
    github_url: "https://github.com/jordan-avery",
    linkedin_url: "https://www.linkedin.com/in/jordan-avery",
    avatar: "/avatar.png",
    summary: "I build fast, dependable tools for the web and the terminal. Most of my work \
              sits where systems programming meets product: routing engines, sync services \
              and the interfaces people use to drive them.",
    highlights: &[
        "7 years shipping production software",
        "Rust and WebAssembly in production since 2020",
        "Maintainer of two open-source developer tools",
    ],
};

/// Showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repo_url: &'static str,
    pub live_url: Option<&'static str>,
    pub year: u16,
    pub color: &'static str,
}

pub const PROJECTS: [Project; 5] = [
    Project {
        id: "tidepool",
        name: "Tidepool",
        tagline: "Streaming log search",
        description: "Indexes structured logs as they arrive and answers ad-hoc queries in \
                      well under a second, with a WebAssembly query console.",
        tech: &["Rust", "Tokio", "Tantivy", "WebAssembly"],
        repo_url: "https://github.com/jordan-avery/tidepool",
        live_url: Some("https://tidepool.jordanavery.dev"),
        year: 2025,
        color: "#007aff",
    },
    Project {
        id: "lanternfs",
        name: "LanternFS",
        tagline: "Content-addressed file sync",
        description: "Deduplicating sync for small teams with offline-first conflict \
                      handling and resumable transfers over QUIC.",
        tech: &["Rust", "SQLite", "QUIC"],
        repo_url: "https://github.com/jordan-avery/lanternfs",
        live_url: None,
        year: 2024,
        color: "#34c759",
    },
    Project {
        id: "sprout",
        name: "Sprout",
        tagline: "Garden planner",
        description: "Plans crop rotation and watering schedules from local climate data \
                      and sends reminders before the first frost.",
        tech: &["TypeScript", "React", "PostgreSQL"],
        repo_url: "https://github.com/jordan-avery/sprout",
        live_url: Some("https://sprout.jordanavery.dev"),
        year: 2023,
        color: "#af52de",
    },
    Project {
        id: "railyard",
        name: "Railyard",
        tagline: "CI pipeline visualizer",
        description: "Turns CI workflow files into an interactive dependency graph and \
                      highlights the critical path of every run.",
        tech: &["Go", "GraphQL", "D3"],
        repo_url: "https://github.com/jordan-avery/railyard",
        live_url: None,
        year: 2022,
        color: "#ff9500",
    },
    Project {
        id: "desktop",
        name: "Portfolio Desktop",
        tagline: "This site",
        description: "A desktop-style portfolio with a window manager, dock, spotlight and \
                      terminal, written in Rust with Leptos.",
        tech: &["Rust", "Leptos", "WebAssembly", "CSS"],
        repo_url: "https://github.com/jordan-avery/desktop",
        live_url: None,
        year: 2026,
        color: "#5ac8fa",
    },
];

/// Skill with a self-assessed proficiency percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// Named group of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Languages",
        skills: &[
            skill("Rust", 95),
            skill("TypeScript", 85),
            skill("Go", 75),
            skill("Python", 70),
            skill("SQL", 80),
        ],
    },
    SkillGroup {
        title: "Frontend",
        skills: &[
            skill("Leptos", 90),
            skill("React", 80),
            skill("CSS", 75),
            skill("WebAssembly", 90),
        ],
    },
    SkillGroup {
        title: "Backend",
        skills: &[
            skill("Axum", 90),
            skill("Tokio", 90),
            skill("PostgreSQL", 80),
            skill("Redis", 70),
        ],
    },
    SkillGroup {
        title: "Infrastructure",
        skills: &[
            skill("Docker", 85),
            skill("Kubernetes", 65),
            skill("Terraform", 60),
            skill("GitHub Actions", 85),
        ],
    },
];

/// Position in the work history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub company: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub points: &'static [&'static str],
    pub tech: &'static [&'static str],
}

pub const EXPERIENCE: [Role; 3] = [
    Role {
        company: "Harborline Logistics",
        title: "Senior Software Engineer",
        period: "2022 - Present",
        location: "Remote",
        points: &[
            "Own the routing engine and its WebAssembly planner UI.",
            "Cut p99 quote latency from 900ms to 120ms.",
            "Mentor four engineers through the Rust migration.",
        ],
        tech: &["Rust", "Axum", "PostgreSQL", "Leptos"],
    },
    Role {
        company: "Quillworks",
        title: "Software Engineer",
        period: "2019 - 2022",
        location: "Lisbon",
        points: &[
            "Built the collaborative editor sync service.",
            "Led the move from REST polling to WebSockets.",
        ],
        tech: &["TypeScript", "Node.js", "Redis"],
    },
    Role {
        company: "Fernleaf Studio",
        title: "Junior Developer",
        period: "2017 - 2019",
        location: "Porto",
        points: &["Shipped client sites and an internal asset pipeline."],
        tech: &["JavaScript", "PHP", "MySQL"],
    },
];

/// Education and certificates shown on the resume.
pub const EDUCATION: [(&str, &str, &str); 2] = [
    ("BSc Computer Science", "University of Porto", "2013 - 2017"),
    ("Rust Systems Programming", "Open course certificate", "2020"),
];

/// Resume document path, served next to the site.
pub const RESUME_PDF: &str = "/resume.pdf";

/// Photo shown in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub id: &'static str,
    pub title: &'static str,
    pub src: &'static str,
    pub album: &'static str,
}

pub const GALLERY: [Photo; 8] = [
    Photo { id: "harbor", title: "Harbor at dawn", src: "/gallery/harbor.jpg", album: "Travel" },
    Photo { id: "ridge", title: "Ridge line", src: "/gallery/ridge.jpg", album: "Nature" },
    Photo { id: "desk", title: "Desk setup", src: "/gallery/desk.jpg", album: "Work" },
    Photo { id: "tram", title: "Yellow tram", src: "/gallery/tram.jpg", album: "Travel" },
    Photo { id: "fern", title: "Fern close-up", src: "/gallery/fern.jpg", album: "Nature" },
    Photo { id: "meetup", title: "Rust meetup talk", src: "/gallery/meetup.jpg", album: "Work" },
    Photo { id: "dunes", title: "Dunes", src: "/gallery/dunes.jpg", album: "Nature" },
    Photo { id: "market", title: "Night market", src: "/gallery/market.jpg", album: "Travel" },
];

/// Spotify playlist embedded by the Spotify app.
pub const SPOTIFY_PLAYLIST_EMBED: &str =
    "https://open.spotify.com/embed/playlist/37i9dQZF1DX8Uebhn9wzrS";

/// Youtube videos offered by the Youtube app as `(video id, title)`.
pub const YOUTUBE_VIDEOS: [(&str, &str); 3] = [
    ("jA7vR1sT0k1", "Conference talk: shipping Rust to the browser"),
    ("jA7vR1sT0k2", "Live coding a window manager"),
    ("jA7vR1sT0k3", "Async Rust in ten minutes"),
];
