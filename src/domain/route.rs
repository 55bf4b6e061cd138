//! Static navigation table.

use std::fmt;
use std::str::FromStr;

use crate::domain::resource::ResourceKind;

/// A navigable view of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Landing view.
    #[default]
    Home,
    /// One of the five resource screens.
    Resource(ResourceKind),
}

impl Route {
    /// Every route in header order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Resource(ResourceKind::Book),
        Self::Resource(ResourceKind::Author),
        Self::Resource(ResourceKind::Publisher),
        Self::Resource(ResourceKind::Category),
        Self::Resource(ResourceKind::Borrowing),
    ];

    /// Path of the route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Resource(ResourceKind::Book) => "/books",
            Self::Resource(ResourceKind::Author) => "/authors",
            Self::Resource(ResourceKind::Publisher) => "/publishers",
            Self::Resource(ResourceKind::Category) => "/categories",
            Self::Resource(ResourceKind::Borrowing) => "/borrowing",
        }
    }

    /// Label shown in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Resource(kind) => kind.title(),
        }
    }

    /// Resolves a path, ignoring a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Returns the route after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Returns the route before this one, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Error returned when a path matches no route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route '{0}'")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s).ok_or_else(|| UnknownRoute(s.to_string()))
    }
}
