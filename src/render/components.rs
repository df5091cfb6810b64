//! Themed building blocks.
//!
//! Every component reads its colors from the scope's
//! [`ColorSchemeContext`](crate::theme::ColorSchemeContext), so a scheme
//! change shows up everywhere on the next render.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::branding::SITE_DISPLAY_NAME;
use crate::content::{Cta, CtaAction};
use crate::focus::KeyValueStore;
use crate::scope::{ContextError, Providers};
use crate::theme::{route_prefix, ColorScheme};

/// Primary navigation, as (path, label).
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/software-development", "Software"),
    ("/ai-automation", "AI & Automation"),
    ("/digital-marketing-seo", "Marketing"),
    ("/crm", "CRM"),
    ("/dentists", "For Dentists"),
];

/// CSS custom properties for a scheme, scoped to `:root`.
#[must_use]
pub fn css_variables(scheme: &ColorScheme) -> String {
    let rgb = scheme.rgb();
    format!(
        ":root {{ --color-primary: {}; --color-secondary: {}; --color-accent: {}; --color-dark: {}; \
         --color-primary-rgb: {}; --color-secondary-rgb: {}; --color-accent-rgb: {}; --color-dark-rgb: {}; \
         --color-primary-hover: {}; }}",
        scheme.primary,
        scheme.secondary,
        scheme.accent,
        scheme.dark,
        rgb.primary,
        rgb.secondary,
        rgb.accent,
        rgb.dark,
        scheme.primary.dim(85),
    )
}

/// Site header with brand mark and navigation.
///
/// The link whose first segment equals that of `current_path` is marked
/// with `aria-current`.
pub fn site_header<S: KeyValueStore>(
    scope: &Providers<S>,
    current_path: &str,
) -> Result<String, ContextError> {
    let scheme = scope.color_scheme()?.scheme();
    let section = route_prefix(current_path);

    let links: String = NAV_LINKS
        .iter()
        .map(|(href, label)| {
            let current = if section.is_some() && route_prefix(href) == section {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}" style="color: {}"{}>{}</a>"#,
                attr(href),
                scheme.dark,
                current,
                text(label)
            )
        })
        .collect();

    Ok(format!(
        r#"<header class="site-header" data-scheme="{}" style="border-bottom: 1px solid {}"><a class="brand" href="/" style="color: {}">{}</a><nav>{}</nav></header>"#,
        scheme.key,
        scheme.primary.rgba(0.2),
        scheme.primary,
        text(SITE_DISPLAY_NAME),
        links
    ))
}

/// Hero band with a gradient background.
pub fn hero_band<S: KeyValueStore>(
    scope: &Providers<S>,
    heading: &str,
    subline: &str,
) -> Result<String, ContextError> {
    let scheme = scope.color_scheme()?.scheme();

    Ok(format!(
        r#"<section class="hero bg-gradient-to-r {}" style="background: linear-gradient(135deg, {} 0%, {} 100%)"><h1>{}</h1><p class="hero-subline" style="color: {}">{}</p></section>"#,
        attr(scheme.gradient_token),
        scheme.primary,
        scheme.secondary,
        text(heading),
        scheme.accent,
        text(subline)
    ))
}

/// Call-to-action link.
///
/// Scheduling CTAs carry `data-scheduler-popup` for the widget script and
/// open in a new tab when the widget is unavailable. An empty `href` on a
/// scheduling CTA falls back to `scheduling_url`.
pub fn cta_button<S: KeyValueStore>(
    scope: &Providers<S>,
    cta: &Cta,
    scheduling_url: &str,
) -> Result<String, ContextError> {
    let scheme = scope.color_scheme()?.scheme();
    let style = format!(
        "background: {}; box-shadow: 0 4px 14px {}",
        scheme.primary,
        scheme.primary.rgba(0.35)
    );

    let html = match cta.action {
        CtaAction::Link => format!(
            r#"<a class="cta" href="{}" style="{}">{}</a>"#,
            attr(&cta.href),
            style,
            text(&cta.label)
        ),
        CtaAction::Schedule => {
            let url = if cta.href.trim().is_empty() {
                scheduling_url
            } else {
                cta.href.as_str()
            };
            format!(
                r#"<a class="cta cta-schedule" href="{url}" target="_blank" rel="noopener" data-scheduler-popup="{url}" style="{}">{}</a>"#,
                style,
                text(&cta.label),
                url = attr(url),
            )
        }
    };

    Ok(html)
}
