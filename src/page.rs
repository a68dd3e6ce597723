//! Full page assembly.
//!
//! Stitches every section together in page order and emits both token sets as
//! CSS custom properties keyed by the `data-theme` attribute. Sections only
//! reference those properties, so the toggle script flips the attribute and
//! the whole page follows.

use std::fmt::Write as _;

use chrono::Datelike;
use maud::{html, PreEscaped, DOCTYPE};

use crate::branding::{
    github_profile_url, github_repositories_url, owner_map_url, owner_mailto, ACCENT,
    ACCENT_CYAN, ACCENT_PINK, OWNER_EMAIL, OWNER_LOCATION, OWNER_NAME, OWNER_PHONE_DISPLAY,
    OWNER_PHONE_TEL, OWNER_TITLE, RESUME_PATH,
};
use crate::content::{
    social_links, ABOUT_BLURB, CONTACT_INTRO, EDUCATION, EXPERIENCE, HERO_BADGE_TEXT, HERO_INTRO,
    HERO_STATS, HERO_TAGS, HIGHLIGHTS, NAV_LINKS, RESUME_INTRO, SKILLS_INTRO, SKILL_CATEGORIES,
};
use crate::sections::contact::ContactInfo;
use crate::sections::{
    about, contact, footer, hero, navbar, projects, resume, skills, AboutProps, ContactForm,
    ContactProps, FooterProps, HeroProps, NavbarProps, ProjectsProps, ProjectsState,
    RenderContext, ResumeProps, SkillsProps,
};
use crate::theme::{AppearanceMode, DocumentRoot, StyleTokens, THEME_ATTRIBUTE};

/// Path the contact form posts to.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Flips `data-theme` on the document root and remembers the choice under
/// the same key the theme store uses.
const TOGGLE_SCRIPT: &str = "document.addEventListener('click', (event) => {\n\
  const button = event.target.closest('.theme-toggle');\n\
  if (!button) return;\n\
  const next = button.dataset.nextTheme;\n\
  document.documentElement.dataset.theme = next;\n\
  localStorage.setItem('portfolio-theme', next);\n\
  button.dataset.nextTheme = next === 'dark' ? 'light' : 'dark';\n\
  button.textContent = next === 'dark' ? '\\u2600' : '\\u263E';\n\
});\n";

/// Everything a page render needs beyond the static content.
#[derive(Debug, Clone)]
pub struct PageInput<'a> {
    /// Viewport classification and active theme
    pub ctx: RenderContext,
    /// Document attributes to put on `<html>`
    pub document: &'a DocumentRoot,
    /// Repository listing state
    pub projects: &'a ProjectsState,
    /// GitHub account the listing came from
    pub github_user: &'a str,
    /// Contact form state
    pub form: &'a ContactForm,
    /// Copyright year
    pub year: i32,
}

/// Current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Info cards shown next to the contact form.
#[must_use]
pub fn contact_info() -> Vec<ContactInfo> {
    vec![
        ContactInfo {
            title: "EMAIL",
            value: OWNER_EMAIL.to_string(),
            href: owner_mailto(),
        },
        ContactInfo {
            title: "PHONE",
            value: OWNER_PHONE_DISPLAY.to_string(),
            href: format!("tel:{OWNER_PHONE_TEL}"),
        },
        ContactInfo {
            title: "LOCATION",
            value: OWNER_LOCATION.to_string(),
            href: owner_map_url(),
        },
    ]
}

/// Renders the token sets as a stylesheet of CSS custom properties.
#[must_use]
pub fn theme_stylesheet() -> String {
    let mut css = String::new();
    for mode in [AppearanceMode::Light, AppearanceMode::Dark] {
        let selector = match mode {
            AppearanceMode::Light => format!(":root[{THEME_ATTRIBUTE}=\"light\"], :root"),
            AppearanceMode::Dark => format!(":root[{THEME_ATTRIBUTE}=\"dark\"]"),
        };
        let _ = writeln!(css, "{selector} {{");
        write_properties(&mut css, mode.tokens());
        css.push_str("}\n");
    }
    css
}

fn write_properties(css: &mut String, tokens: &StyleTokens) {
    for (name, value) in tokens.entries() {
        let _ = writeln!(css, "  --{name}: {value};");
    }
}

/// Page-wide rules: accent colors plus both token sets.
fn page_stylesheet() -> String {
    format!(
        ":root {{ --accent: {ACCENT}; --accent-pink: {ACCENT_PINK}; --accent-cyan: {ACCENT_CYAN}; }}\n\
         {}body {{ margin: 0; color: var(--text); background: var(--section-bg); }}\n\
         a {{ color: var(--accent); }}\n",
        theme_stylesheet()
    )
}

/// Renders the complete HTML document.
#[must_use]
pub fn render_page(input: &PageInput<'_>) -> String {
    let ctx = &input.ctx;
    let socials = social_links(input.github_user);
    let info = contact_info();
    let profile_url = github_repositories_url(input.github_user);
    let hire_href = format!("tel:{OWNER_PHONE_TEL}");

    let navbar = navbar::render(
        ctx,
        &NavbarProps {
            owner_name: OWNER_NAME,
            links: NAV_LINKS,
            socials: &socials,
        },
    );
    let hero = hero::render(
        ctx,
        &HeroProps {
            owner_name: OWNER_NAME,
            owner_title: OWNER_TITLE,
            intro: HERO_INTRO,
            tags: HERO_TAGS,
            stats: HERO_STATS,
            badge_text: HERO_BADGE_TEXT,
            projects_href: "#projects",
            hire_href: &hire_href,
        },
    );
    let about = about::render(
        ctx,
        &AboutProps {
            owner_name: OWNER_NAME,
            location: OWNER_LOCATION,
            blurb: ABOUT_BLURB,
            highlights: HIGHLIGHTS,
        },
    );
    let skills = skills::render(
        ctx,
        &SkillsProps {
            intro: SKILLS_INTRO,
            categories: SKILL_CATEGORIES,
        },
    );
    let projects = projects::render(
        ctx,
        &ProjectsProps {
            state: input.projects,
            profile_url: &profile_url,
        },
    );
    let resume = resume::render(
        ctx,
        &ResumeProps {
            intro: RESUME_INTRO,
            experience: EXPERIENCE,
            education: EDUCATION,
            resume_href: RESUME_PATH,
        },
    );
    let contact = contact::render(
        ctx,
        &ContactProps {
            intro: CONTACT_INTRO,
            info: &info,
            form: input.form,
            action: CONTACT_ENDPOINT,
        },
    );
    let footer = footer::render(
        ctx,
        &FooterProps {
            owner_name: OWNER_NAME,
            links: NAV_LINKS,
            socials: &socials,
            year: input.year,
        },
    );

    html! {
        (DOCTYPE)
        html lang="en" data-theme=[input.document.attribute(THEME_ATTRIBUTE)] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (OWNER_NAME) " | " (OWNER_TITLE) }
                link rel="me" href=(github_profile_url(input.github_user));
                // Generated from static tokens only
                style { (PreEscaped(page_stylesheet())) }
            }
            body {
                (navbar)
                main { (hero) (about) (skills) (projects) (resume) (contact) }
                (footer)
                script { (PreEscaped(TOGGLE_SCRIPT)) }
            }
        }
    }
    .into_string()
}
