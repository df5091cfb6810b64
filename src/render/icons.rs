//! Icon lookup by name.
//!
//! Content bundles refer to icons by string. Names resolve through a fixed
//! table; anything unresolvable renders as [`Icon::FALLBACK`].

/// Icons available to capability tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// People / leads
    Users,
    /// Booking and scheduling
    Calendar,
    /// Assistants and AI
    Bot,
    /// Reporting
    Chart,
    /// Automation flows
    Workflow,
    /// Security and privacy
    Shield,
    /// Integrations
    Plug,
    /// Generic highlight, also the fallback
    Sparkles,
    /// Time savings
    Clock,
    /// Records and data
    Database,
}

impl Icon {
    /// Rendered when a name does not resolve.
    pub const FALLBACK: Self = Self::Sparkles;

    /// Every icon, in table order.
    pub const ALL: [Self; 10] = [
        Self::Users,
        Self::Calendar,
        Self::Bot,
        Self::Chart,
        Self::Workflow,
        Self::Shield,
        Self::Plug,
        Self::Sparkles,
        Self::Clock,
        Self::Database,
    ];

    /// Name used in content bundles.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Calendar => "calendar",
            Self::Bot => "bot",
            Self::Chart => "chart",
            Self::Workflow => "workflow",
            Self::Shield => "shield",
            Self::Plug => "plug",
            Self::Sparkles => "sparkles",
            Self::Clock => "clock",
            Self::Database => "database",
        }
    }

    /// Looks a name up, returning `None` when it is not in the table.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|icon| icon.name().eq_ignore_ascii_case(name))
    }

    /// Looks a name up, falling back to [`Icon::FALLBACK`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or(Self::FALLBACK)
    }

    /// SVG path data on a 24x24 stroke grid.
    #[must_use]
    pub const fn path_data(self) -> &'static str {
        match self {
            Self::Users => "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75",
            Self::Calendar => "M3 6a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2zM16 2v4M8 2v4M3 10h18",
            Self::Bot => "M12 8V4H8M4 10a2 2 0 0 1 2-2h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2zM9 13v2M15 13v2",
            Self::Chart => "M3 3v18h18M7 16v-5M12 16V8M17 16v-9",
            Self::Workflow => "M3 3h6v6H3zM15 15h6v6h-6zM6 9v3a3 3 0 0 0 3 3h6",
            Self::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
            Self::Plug => "M12 22v-5M9 8V2M15 8V2M6 8h12v4a6 6 0 0 1-12 0z",
            Self::Sparkles => "M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9zM19 17l.9 2.1L22 20l-2.1.9L19 23l-.9-2.1L16 20l2.1-.9z",
            Self::Clock => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2",
            Self::Database => "M4 5c0-1.7 3.6-3 8-3s8 1.3 8 3-3.6 3-8 3-8-1.3-8-3zM4 5v14c0 1.7 3.6 3 8 3s8-1.3 8-3V5M4 12c0 1.7 3.6 3 8 3s8-1.3 8-3",
        }
    }

    /// Inline SVG markup, stroked with the current text color.
    #[must_use]
    pub fn svg(self) -> String {
        format!(
            r#"<svg class="icon icon-{}" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="{}"/></svg>"#,
            self.name(),
            self.path_data()
        )
    }
}
