//! Fixed top navigation bar.

use maud::{html, Markup};

use super::{social_buttons, vars, RenderContext};
use crate::branding::ACCENT;
use crate::content::{NavLink, SocialLink};

/// Navbar inputs.
#[derive(Debug, Clone)]
pub struct NavbarProps<'a> {
    /// Logo text
    pub owner_name: &'a str,
    /// Anchor links; the first is marked active
    pub links: &'a [NavLink],
    /// Social buttons (hidden on mobile)
    pub socials: &'a [SocialLink],
}

/// Renders the navbar.
pub fn render(ctx: &RenderContext, props: &NavbarProps<'_>) -> Markup {
    let mobile = ctx.viewport.is_mobile;
    let mode = ctx.theme.mode;
    let next = mode.toggled();

    let links = html! {
        @for (index, link) in props.links.iter().enumerate() {
            @let color = if index == 0 { ACCENT } else { vars::NAV_LINK };
            a href={ "#" (link.anchor) } style={ "color:" (color) } { (link.label) }
        }
    };

    html! {
        nav.navbar style={
            "background:" (vars::NAV_BG) ";border-bottom:1px solid " (vars::NAV_BORDER)
            ";padding:" (if mobile { "0 16px" } else { "0 60px" })
        } {
            a.logo href="#home" style={ "color:" (vars::HEADING) } {
                (props.owner_name)
                span style={ "color:" (ACCENT) } { "." }
            }
            @if mobile {
                // Socials move to the footer on small screens
                details.nav-menu {
                    summary aria-label="Menu" { "☰" }
                    div.nav-links style={ "background:" (vars::GLASS_BG_STRONG) } { (links) }
                }
            } @else {
                div.nav-links { (links) }
            }
            div.nav-actions {
                @if !mobile {
                    (social_buttons(props.socials))
                }
                button.theme-toggle type="button" data-next-theme=(next.as_str())
                    aria-label={ "Switch to " (next.as_str()) " mode" }
                    style={ "color:" (vars::HEADING) } {
                    (if mode.is_dark() { "☀" } else { "☾" })
                }
            }
        }
    }
}
