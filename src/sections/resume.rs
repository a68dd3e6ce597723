//! Resume section: experience and education timelines plus resume links.

use maud::{html, Markup};

use super::{section_header, vars, RenderContext};
use crate::branding::ACCENT;
use crate::content::TimelineEntry;

/// Resume inputs.
#[derive(Debug, Clone)]
pub struct ResumeProps<'a> {
    /// Intro under the heading
    pub intro: &'a str,
    /// Work experience entries
    pub experience: &'a [TimelineEntry],
    /// Education entries
    pub education: &'a [TimelineEntry],
    /// Resume document link
    pub resume_href: &'a str,
}

/// Renders the resume section.
pub fn render(ctx: &RenderContext, props: &ResumeProps<'_>) -> Markup {
    // Side by side on wide screens, stacked on mobile
    let columns = if ctx.viewport.is_single_column() {
        "1fr"
    } else {
        "repeat(auto-fit, minmax(400px, 1fr))"
    };

    html! {
        section #resume style={
            "background:" (vars::SECTION_BG_GRADIENT5) ";padding:" (ctx.section_padding())
        } {
            (section_header("MY RESUME", "Experience &", "education", Some(props.intro)))
            div.resume-actions {
                a.btn.primary href=(props.resume_href) download
                    style={ "background:" (ACCENT) ";color:#fff" } { "Download Resume" }
                a.btn.outline href=(props.resume_href) target="_blank" rel="noopener noreferrer"
                    style={ "border-color:" (ACCENT) ";color:" (ACCENT) } { "View Resume" }
            }
            div.grid style={ "grid-template-columns:" (columns) } {
                (render_timeline("Experience", props.experience))
                (render_timeline("Education", props.education))
            }
        }
    }
}

fn render_timeline(heading: &str, entries: &[TimelineEntry]) -> Markup {
    html! {
        div.timeline {
            h3 style={ "color:" (vars::HEADING) } { (heading) }
            @for entry in entries {
                div.timeline-item {
                    span.period style={ "background:" (vars::TAG_BG) ";color:" (ACCENT) } {
                        (entry.period)
                    }
                    h4 style={ "color:" (vars::HEADING) } { (entry.title) }
                    p.subtitle style={ "color:" (vars::TEXT_LIGHT) } { (entry.subtitle) }
                    p style={ "color:" (vars::TEXT_SECONDARY) } { (entry.description) }
                }
            }
        }
    }
}
