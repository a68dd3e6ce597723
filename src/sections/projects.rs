//! Projects section fed by the GitHub repository listing.

use maud::{html, Markup};

use super::{external_link, section_header, vars, RenderContext};
use crate::branding::ACCENT;
use crate::github::{language_color, Repository};

/// Shown when the listing could not be fetched.
const FAILED_MESSAGE: &str = "Could not load projects. Please try again later.";

/// Loading state of the repository listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsState {
    /// Fetch still in flight
    Loading,
    /// Fetch failed; details stay in the logs
    Failed,
    /// Curated repositories, already filtered and sorted
    Loaded(Vec<Repository>),
}

/// Projects inputs.
#[derive(Debug, Clone)]
pub struct ProjectsProps<'a> {
    /// Listing state
    pub state: &'a ProjectsState,
    /// "View all" target
    pub profile_url: &'a str,
}

/// Renders the projects section.
pub fn render(ctx: &RenderContext, props: &ProjectsProps<'_>) -> Markup {
    html! {
        section #projects style={
            "background:" (vars::SECTION_BG_GRADIENT3) ";padding:" (ctx.section_padding())
        } {
            (section_header(
                "MY PROJECTS",
                "Things I've",
                "built",
                Some("All projects are fetched directly from my GitHub. Click on any project to \
                      see the source code or live demo."),
            ))
            @match props.state {
                ProjectsState::Loading => {
                    div.spinner role="status" aria-label="Loading projects" style={
                        "border-color:" (vars::CARD_BORDER) ";border-top-color:" (ACCENT)
                    } {}
                }
                ProjectsState::Failed => {
                    p.error style="color:#EF4444" { (FAILED_MESSAGE) }
                }
                ProjectsState::Loaded(repos) if repos.is_empty() => {
                    p.empty style={ "color:" (vars::TEXT_LIGHT) } { "No projects found." }
                }
                ProjectsState::Loaded(repos) => {
                    div.grid style={ "grid-template-columns:" (ctx.grid_columns(2, 3)) } {
                        @for repo in repos {
                            (render_card(repo))
                        }
                    }
                    a.btn.primary href=(props.profile_url) target="_blank" rel="noopener noreferrer"
                        style={ "background:" (ACCENT) ";color:#fff" } {
                        "View All on GitHub"
                    }
                }
            }
        }
    }
}

fn render_card(repo: &Repository) -> Markup {
    html! {
        article.card.project data-repo-id=(repo.id) style={
            "background:" (vars::CARD_BG) ";border:1px solid " (vars::CARD_BORDER)
            ";box-shadow:" (vars::CARD_SHADOW)
        } {
            div.counts {
                @if repo.stargazers_count > 0 {
                    span style={ "color:" (vars::TEXT_LIGHT) } { "★ " (repo.stargazers_count) }
                }
                @if repo.forks_count > 0 {
                    span style={ "color:" (vars::TEXT_LIGHT) } { "⑂ " (repo.forks_count) }
                }
            }
            h3 style={ "color:" (vars::HEADING) } { (repo.display_title()) }
            p style={ "color:" (vars::TEXT_MUTED) } { (repo.description_or_fallback()) }
            div.card-footer {
                @if let Some(language) = repo.language.as_deref() {
                    span.language {
                        span.dot style={ "background:" (language_color(language)) } {}
                        span style={ "color:" (vars::TEXT_MUTED) } { (language) }
                    }
                }
                (external_link(&repo.html_url, "Source"))
                @if let Some(live) = repo.live_url() {
                    (external_link(live, "Live"))
                }
            }
        }
    }
}
