//! Generic focus content surface and the focus picker.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

use super::components::cta_button;
use super::icons::Icon;
use crate::content::{ContentLibrary, FocusContent};
use crate::focus::{FocusKey, KeyValueStore};
use crate::scope::{ContextError, Providers};

/// Renders the section for the scope's current focus.
///
/// Returns an empty string when there is no focus or the focus has no
/// bundle.
pub fn focus_section<S: KeyValueStore>(
    scope: &Providers<S>,
    library: &ContentLibrary,
    scheduling_url: &str,
) -> Result<String, ContextError> {
    let focus = scope.focus()?.focus();
    match library.resolve(focus) {
        Some(content) => render_content(scope, content, scheduling_url),
        None => Ok(String::new()),
    }
}

fn render_content<S: KeyValueStore>(
    scope: &Providers<S>,
    content: &FocusContent,
    scheduling_url: &str,
) -> Result<String, ContextError> {
    let scheme = scope.color_scheme()?.scheme();
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<section class="focus-section" data-focus="{}"><p class="focus-subline">{}</p><div class="focus-ctas">"#,
        content.focus,
        text(&content.hero.subline)
    );
    html.push_str(&cta_button(scope, &content.hero.primary_cta, scheduling_url)?);
    if let Some(secondary) = &content.hero.secondary_cta {
        html.push_str(&cta_button(scope, secondary, scheduling_url)?);
    }
    html.push_str("</div>");

    if !content.bullets.is_empty() {
        html.push_str(r#"<ul class="focus-bullets">"#);
        for bullet in &content.bullets {
            let _ = write!(
                html,
                r#"<li><span class="bullet-dot" style="background: {}"></span>{}</li>"#,
                scheme.primary,
                text(bullet)
            );
        }
        html.push_str("</ul>");
    }

    if !content.capabilities.is_empty() {
        html.push_str(r#"<div class="capabilities">"#);
        for tile in &content.capabilities {
            let _ = write!(
                html,
                r#"<article class="capability" style="border-color: {}"><span class="capability-icon" style="color: {}; background: {}">{}</span><h3>{}</h3><p>{}</p>"#,
                scheme.primary.rgba(0.25),
                scheme.primary,
                scheme.accent.rgba(0.15),
                Icon::from_name(&tile.icon).svg(),
                text(&tile.title),
                text(&tile.summary)
            );
            if !tile.badges.is_empty() {
                html.push_str(r#"<ul class="badges">"#);
                for badge in &tile.badges {
                    let _ = write!(
                        html,
                        r#"<li style="color: {}; background: {}">{}</li>"#,
                        scheme.dark,
                        scheme.accent.rgba(0.3),
                        text(badge)
                    );
                }
                html.push_str("</ul>");
            }
            html.push_str("</article>");
        }
        html.push_str("</div>");
    }

    if !content.outcomes.is_empty() {
        html.push_str(r#"<div class="outcomes">"#);
        for outcome in &content.outcomes {
            let _ = write!(
                html,
                r#"<div class="outcome"><strong style="color: {}">{}{}</strong><span class="timeframe">{}</span><p>{}</p></div>"#,
                scheme.primary,
                text(&outcome.value),
                outcome
                    .unit
                    .as_deref()
                    .map(|unit| format!("<small>{}</small>", text(unit)))
                    .unwrap_or_default(),
                text(&outcome.timeframe),
                text(&outcome.description)
            );
        }
        html.push_str("</div>");
    }

    html.push_str("</section>");
    Ok(html)
}

/// Form letting the visitor pick or clear a focus.
///
/// Posts to `/focus` and `/focus/clear`; the selected option carries
/// `aria-pressed="true"`.
pub fn focus_picker<S: KeyValueStore>(scope: &Providers<S>) -> Result<String, ContextError> {
    let current = scope.focus()?.focus();
    let scheme = scope.color_scheme()?.scheme();

    let mut html = String::from(
        r#"<form class="focus-picker" method="post" action="/focus"><span>What brings you here?</span>"#,
    );
    for key in FocusKey::ALL {
        let selected = current == Some(key);
        let style = if selected {
            format!("background: {}; color: #FFFFFF", scheme.primary)
        } else {
            format!("border-color: {}; color: {}", scheme.primary, scheme.dark)
        };
        let _ = write!(
            html,
            r#"<button type="submit" name="focus" value="{}" aria-pressed="{}" style="{}">{}</button>"#,
            key,
            selected,
            attr(&style),
            text(key.label())
        );
    }
    html.push_str("</form>");

    if current.is_some() {
        html.push_str(
            r#"<form class="focus-clear" method="post" action="/focus/clear"><button type="submit">Show everything</button></form>"#,
        );
    }

    Ok(html)
}
