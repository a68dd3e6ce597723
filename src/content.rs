//! Static site content: copy, skills, timeline entries.
//!
//! Everything here is compiled in. Owner identity lives in
//! [`crate::branding`]; this module holds the longer-form material the
//! sections lay out.

/// An anchor link in the navbar and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Visible label
    pub label: &'static str,
    /// Target element id
    pub anchor: &'static str,
}

/// Navbar/footer anchors in page order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Skills", anchor: "skills" },
    NavLink { label: "Projects", anchor: "projects" },
    NavLink { label: "Resume", anchor: "resume" },
    NavLink { label: "Contact", anchor: "contact" },
];

/// Social network a profile link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    /// Twitter / X
    Twitter,
    /// Instagram
    Instagram,
    /// GitHub
    GitHub,
}

impl SocialKind {
    /// Accessible label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::GitHub => "GitHub",
        }
    }
}

/// A social profile link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    /// Network
    pub kind: SocialKind,
    /// Profile URL
    pub href: String,
}

/// Social links for a GitHub user, in display order.
#[must_use]
pub fn social_links(github_user: &str) -> Vec<SocialLink> {
    use crate::branding::{github_profile_url, INSTAGRAM_URL, TWITTER_URL};

    vec![
        SocialLink {
            kind: SocialKind::Twitter,
            href: TWITTER_URL.to_string(),
        },
        SocialLink {
            kind: SocialKind::Instagram,
            href: INSTAGRAM_URL.to_string(),
        },
        SocialLink {
            kind: SocialKind::GitHub,
            href: github_profile_url(github_user),
        },
    ]
}

// ============================================================================
// Hero
// ============================================================================

/// Hero introduction paragraph.
pub const HERO_INTRO: &str = "Engineering student from Jaipur, Rajasthan, passionate about \
    building end-to-end web applications. I design clean UIs on the frontend and architect \
    robust systems on the backend. From algorithms in C/C++ to full-stack apps with React & \
    Node.js, I turn ideas into real products.";

/// Skill tags under the hero intro.
pub const HERO_TAGS: &[&str] = &[
    "C", "C++", "Java", "Python", "React", "Node.js", "MongoDB", "SQL", "DBMS",
];

/// Text running around the circular hero badge.
pub const HERO_BADGE_TEXT: &str = "OPEN TO WORK ★ FULL STACK DEV ★";

/// A headline number in the hero stats row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// Figure, e.g. "10+"
    pub value: &'static str,
    /// Caption
    pub label: &'static str,
}

/// Hero stats row.
pub const HERO_STATS: &[Stat] = &[
    Stat { value: "2", label: "Languages" },
    Stat { value: "10+", label: "Projects" },
    Stat { value: "3+", label: "Yrs Learning" },
];

// ============================================================================
// About
// ============================================================================

/// About section paragraph.
pub const ABOUT_BLURB: &str = "I love turning ideas into clean, functional web applications, \
    from pixel-perfect frontends to reliable backend systems. I'm always learning and building \
    new things to sharpen my full-stack skills.";

/// A highlight card in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    /// Card title
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// About section highlight cards.
pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Frontend",
        description: "React, HTML/CSS, Tailwind, responsive UIs",
    },
    Highlight {
        title: "Backend",
        description: "Node.js, Express, REST APIs, authentication",
    },
    Highlight {
        title: "Database",
        description: "MongoDB, SQL, data modelling, CRUD",
    },
    Highlight {
        title: "DSA & Core",
        description: "C, C++, Java, Python, algorithms, DBMS",
    },
];

// ============================================================================
// Skills
// ============================================================================

/// A single skill and proficiency (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Skill name
    pub name: &'static str,
    /// Proficiency percentage
    pub level: u8,
}

/// A titled group of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    /// Category title
    pub title: &'static str,
    /// Skills in display order
    pub skills: &'static [Skill],
}

/// Skills section intro.
pub const SKILLS_INTRO: &str = "From low-level programming in C/C++ to modern full-stack \
    development with React & Node.js, here's what I bring to the table.";

/// Skill categories.
pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        skills: &[
            Skill { name: "C", level: 100 },
            Skill { name: "C++", level: 100 },
            Skill { name: "Java", level: 100 },
            Skill { name: "Python", level: 100 },
            Skill { name: "JavaScript", level: 100 },
        ],
    },
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "React.js", level: 100 },
            Skill { name: "HTML5", level: 100 },
            Skill { name: "CSS3 / Tailwind", level: 100 },
            Skill { name: "Framer Motion", level: 100 },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 100 },
            Skill { name: "Express.js", level: 100 },
            Skill { name: "REST APIs", level: 100 },
        ],
    },
    SkillCategory {
        title: "Database & Tools",
        skills: &[
            Skill { name: "MongoDB", level: 100 },
            Skill { name: "SQL / MySQL", level: 100 },
            Skill { name: "Git / GitHub", level: 100 },
            Skill { name: "DBMS Concepts", level: 100 },
        ],
    },
];

// ============================================================================
// Resume
// ============================================================================

/// Resume section intro.
pub const RESUME_INTRO: &str = "A snapshot of my professional journey, education, and the \
    skills I've built along the way.";

/// One entry on the experience or education timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Date range, e.g. "2023 – 2024"
    pub period: &'static str,
    /// Role or degree
    pub title: &'static str,
    /// Company or institute
    pub subtitle: &'static str,
    /// Summary
    pub description: &'static str,
}

/// Work experience, newest first.
pub const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2024 – Present",
        title: "Full Stack Developer",
        subtitle: "Freelance / Personal Projects",
        description: "Building modern web applications using React, Node.js, Express, and \
            MongoDB. Focused on clean UI/UX and scalable backend architecture.",
    },
    TimelineEntry {
        period: "2023 – 2024",
        title: "Frontend Developer Intern",
        subtitle: "Self-Initiated Projects",
        description: "Developed responsive web interfaces, practiced component-based \
            architecture with React, and implemented REST API integrations.",
    },
];

/// Education, newest first.
pub const EDUCATION: &[TimelineEntry] = &[TimelineEntry {
    period: "2021 – 2025",
    title: "B.Tech in Computer Science",
    subtitle: "University",
    description: "Core subjects: DSA, DBMS, OS, Computer Networks. Active in coding contests \
        and open-source contributions.",
}];

// ============================================================================
// Contact
// ============================================================================

/// Contact section intro.
pub const CONTACT_INTRO: &str = "Have a project idea or want to work together? Drop me a \
    message and I'll get back to you as soon as possible!";
