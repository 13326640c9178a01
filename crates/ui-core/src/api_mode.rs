//! Deciding which call convention a root component is serving.
//!
//! Roots look at the identities of their direct children. Any child that
//! matches one of the family's markers puts the root in composable mode;
//! otherwise the root renders its deprecated declarative props. Callers
//! may skip inspection entirely by passing an explicit [`ApiMode`].

/// The two call conventions a compound root understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// Sub-component children share state through the root's context.
    Composable,
    /// The root builds its own markup from a props bag.
    Declarative,
}

impl ApiMode {
    pub fn is_composable(&self) -> bool {
        matches!(self, ApiMode::Composable)
    }
}

/// A rule matching a child component identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Exact(&'static str),
    Prefix(&'static str),
}

impl Marker {
    pub fn matches(&self, identity: &str) -> bool {
        match self {
            Marker::Exact(name) => identity == *name,
            Marker::Prefix(prefix) => identity.starts_with(prefix),
        }
    }
}

/// Everything a root needs to know about its family for detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    /// Root component name, used as the warning prefix.
    pub root: &'static str,
    pub markers: &'static [Marker],
    /// Human readable replacement for the deprecated props.
    pub replacement: &'static str,
    /// Sub-components listed in the declarative deprecation notice.
    pub parts: &'static str,
}

impl Family {
    /// Structural detection over a flat list of child identities.
    pub fn detect<'a>(&self, children: impl IntoIterator<Item = &'a str>) -> ApiMode {
        let composable = children
            .into_iter()
            .any(|identity| self.markers.iter().any(|marker| marker.matches(identity)));
        if composable {
            ApiMode::Composable
        } else {
            ApiMode::Declarative
        }
    }

    /// Full resolution: explicit mode first, then structural detection.
    ///
    /// `legacy` lists the deprecated props the caller actually supplied.
    pub fn resolve<'a>(
        &self,
        explicit: Option<ApiMode>,
        children: impl IntoIterator<Item = &'a str>,
        legacy: &[&'static str],
    ) -> Detection {
        let mode = explicit.unwrap_or_else(|| self.detect(children));
        Detection {
            mode,
            legacy: legacy.to_vec(),
        }
    }
}

/// Result of one detection pass. Recomputed every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub mode: ApiMode,
    /// Deprecated props supplied by the caller.
    pub legacy: Vec<&'static str>,
}

impl Detection {
    /// Legacy props present while composable children win.
    pub fn ignored_legacy(&self) -> &[&'static str] {
        if self.mode.is_composable() {
            &self.legacy
        } else {
            &[]
        }
    }

    pub fn is_mixed(&self) -> bool {
        self.mode.is_composable() && !self.legacy.is_empty()
    }
}

/// Build the list of legacy prop names that were supplied.
pub fn supplied(props: &[(&'static str, bool)]) -> Vec<&'static str> {
    props
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect()
}
