//! Page footer.

use maud::{html, Markup};

use super::{social_buttons, vars, RenderContext};
use crate::branding::{ACCENT, ACCENT_PINK};
use crate::content::{NavLink, SocialLink};

/// Footer inputs.
#[derive(Debug, Clone)]
pub struct FooterProps<'a> {
    /// Name shown in the brand line and credit
    pub owner_name: &'a str,
    /// Quick links
    pub links: &'a [NavLink],
    /// Social buttons
    pub socials: &'a [SocialLink],
    /// Copyright year
    pub year: i32,
}

/// Renders the footer.
pub fn render(ctx: &RenderContext, props: &FooterProps<'_>) -> Markup {
    let padding = if ctx.viewport.is_mobile {
        "40px 16px 24px"
    } else {
        "60px 60px 30px"
    };

    html! {
        footer style={
            "background:" (vars::FOOTER_BG) ";border-top:1px solid " (vars::FOOTER_BORDER)
            ";padding:" (padding)
        } {
            div.footer-brand {
                a href="#home" style={ "color:" (vars::HEADING) } {
                    (props.owner_name)
                    span style={ "color:" (ACCENT) } { "." }
                }
            }
            nav.footer-links {
                @for link in props.links {
                    a href={ "#" (link.anchor) } style={ "color:" (vars::FOOTER_TEXT) } { (link.label) }
                }
            }
            div.footer-socials { (social_buttons(props.socials)) }
            p.copyright style={ "color:" (vars::FOOTER_COPYRIGHT) } {
                "Made with " span style={ "color:" (ACCENT_PINK) } { "♥" }
                " by " (props.owner_name) " • © " (props.year)
            }
        }
    }
}
