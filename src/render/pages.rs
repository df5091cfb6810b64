//! Page table and full-document rendering.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::components::{css_variables, hero_band, site_header};
use super::focus_section::{focus_picker, focus_section};
use super::RenderOptions;
use crate::branding::{page_title, SITE_TAGLINE};
use crate::content::ContentLibrary;
use crate::focus::KeyValueStore;
use crate::scope::{ContextError, Providers};

/// A routable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Canonical path, without trailing slash
    pub path: &'static str,
    /// Section name used in the document title
    pub title: &'static str,
    /// Hero heading
    pub heading: &'static str,
    /// Hero subline
    pub intro: &'static str,
}

/// Every page the site serves.
pub const PAGES: &[Page] = &[
    Page {
        path: "/",
        title: "",
        heading: "Software that fits the way you work",
        intro: "Custom software, automation and marketing for service businesses.",
    },
    Page {
        path: "/software-development",
        title: "Software Development",
        heading: "Custom software, built to last",
        intro: "Web apps, portals and integrations designed around your operations.",
    },
    Page {
        path: "/ai-automation",
        title: "AI & Automation",
        heading: "Automation that pays for itself",
        intro: "Put repetitive work on autopilot and keep people on the judgment calls.",
    },
    Page {
        path: "/digital-marketing-seo",
        title: "Digital Marketing & SEO",
        heading: "Be the first name people find",
        intro: "Search, content and paid campaigns measured against real leads.",
    },
    Page {
        path: "/crm",
        title: "CRM",
        heading: "A CRM your team will actually use",
        intro: "Pipelines, follow-up and reporting built around your sales process.",
    },
    Page {
        path: "/tee-sheet",
        title: "Tee Sheet",
        heading: "Run a fuller tee sheet",
        intro: "Booking, pricing and member tools for golf courses.",
    },
    Page {
        path: "/dentists",
        title: "For Dentists",
        heading: "More booked chairs, less front-desk juggling",
        intro: "Online scheduling, recall campaigns and local search for dental practices.",
    },
    Page {
        path: "/about",
        title: "About",
        heading: "A small team that ships",
        intro: "Engineers and marketers who have run service businesses themselves.",
    },
];

/// Rendered for unknown paths.
pub const NOT_FOUND_PAGE: Page = Page {
    path: "/404",
    title: "Page not found",
    heading: "We couldn't find that page",
    intro: "The link may be out of date. Try one of the sections above.",
};

impl Page {
    /// Finds the page for a request path.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    #[must_use]
    pub fn find(path: &str) -> Option<&'static Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        PAGES.iter().find(|page| page.path == normalized)
    }
}

/// Renders a complete HTML document for `page` at `request_path`.
///
/// The scope must already be synced to `request_path` (see
/// [`RouteThemeSync`](crate::theme::RouteThemeSync)).
pub fn render_page<S: KeyValueStore>(
    page: &Page,
    request_path: &str,
    scope: &Providers<S>,
    library: &ContentLibrary,
    options: &RenderOptions,
) -> Result<String, ContextError> {
    let scheme = scope.color_scheme()?.scheme();
    let focus = scope.focus()?.focus();
    let content = library.resolve(focus);

    let description = content.map_or(SITE_TAGLINE, |c| c.seo.description.as_str());

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en" data-scheme="{scheme_key}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="theme-color" content="{primary}">
<link rel="icon" href="/assets/favicon.svg" type="image/svg+xml">
<link rel="stylesheet" href="/assets/site.css">
<style>{css}</style>
</head>
<body>
{header}
<main>
{hero}
{picker}
{section}
</main>
<footer class="site-footer" style="background: {dark}; color: {accent}">{tagline}</footer>
<script src="/assets/scheduler.js" defer></script>
</body>
</html>
"#,
        scheme_key = scheme.key,
        title = text(&page_title(page.title)),
        description = attr(description),
        primary = scheme.primary,
        css = css_variables(scheme),
        header = site_header(scope, request_path)?,
        hero = hero_band(scope, page.heading, page.intro)?,
        picker = focus_picker(scope)?,
        section = focus_section(scope, library, &options.scheduling_url)?,
        dark = scheme.dark,
        accent = scheme.accent,
        tagline = text(SITE_TAGLINE),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::{FocusContext, FocusKey, FocusStorage, MemoryStore};
    use crate::theme::{ColorSchemeContext, RouteThemeSync};

    #[test]
    fn test_find_normalizes_paths() {
        assert_eq!(Page::find("/").unwrap().path, "/");
        assert_eq!(Page::find("").unwrap().path, "/");
        assert_eq!(Page::find("/crm/").unwrap().path, "/crm");
        assert_eq!(Page::find("/dentists?ref=ad").unwrap().path, "/dentists");
        assert!(Page::find("/crm/pipeline").is_none());
        assert!(Page::find("/nope").is_none());
    }

    #[test]
    fn test_every_page_path_is_unique() {
        for (i, a) in PAGES.iter().enumerate() {
            for b in &PAGES[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_render_page_themes_and_personalizes() {
        let library = ContentLibrary::embedded().unwrap();
        let mut focus = FocusContext::hydrated(FocusStorage::new(MemoryStore::new()));
        focus.set_focus(FocusKey::Crm);

        let mut scope = Providers::new()
            .with_color_scheme(ColorSchemeContext::new())
            .with_focus(focus);
        RouteThemeSync::new().navigate("/dentists", scope.color_scheme_mut().unwrap());

        let page = Page::find("/dentists").unwrap();
        let html = render_page(page, "/dentists", &scope, &library, &RenderOptions::default())
            .unwrap();

        assert!(html.contains(r#"data-scheme="brand""#));
        assert!(html.contains("--color-primary: #F97316;"));
        assert!(html.contains("<title>For Dentists | Lumen Works</title>"));
        assert!(html.contains(r#"data-focus="crm""#));
        assert!(html.contains("Custom CRM builds and integrations"));
    }

    #[test]
    fn test_render_page_requires_both_providers() {
        let library = ContentLibrary::embedded().unwrap();
        let scope = Providers::<MemoryStore>::new().with_color_scheme(ColorSchemeContext::new());
        let result = render_page(
            &PAGES[0],
            "/",
            &scope,
            &library,
            &RenderOptions::default(),
        );
        assert!(result.is_err());
    }
}
