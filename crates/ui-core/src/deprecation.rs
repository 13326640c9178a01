use std::fmt;

use crate::api_mode::{ApiMode, Detection, Family};
use crate::config::WarningPolicy;

/// Where the migration instructions live. Downstream tooling greps for it.
pub const MIGRATION_GUIDE: &str = "docs/migrations/composable-migration.md";

/// Tracing target for every deprecation notice.
pub const DEPRECATION_TARGET: &str = "ui_kit::deprecation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Legacy props passed next to composable children.
    MixedWithComposable,
    /// The declarative API itself is in use.
    DeclarativeApi,
}

/// A single deprecation warning, formatted verbatim on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    pub kind: NoticeKind,
    pub root: &'static str,
    pub props: Vec<&'static str>,
    pub replacement: &'static str,
    pub parts: &'static str,
}

impl DeprecationNotice {
    /// The notice a detection pass calls for, if any.
    pub fn for_detection(family: &Family, detection: &Detection) -> Option<Self> {
        if detection.legacy.is_empty() {
            return None;
        }
        let kind = match detection.mode {
            ApiMode::Composable => NoticeKind::MixedWithComposable,
            ApiMode::Declarative => NoticeKind::DeclarativeApi,
        };
        Some(Self {
            kind,
            root: family.root,
            props: detection.legacy.clone(),
            replacement: family.replacement,
            parts: family.parts,
        })
    }
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = self.props.join(", ");
        match self.kind {
            NoticeKind::MixedWithComposable => write!(
                f,
                "{}: Using deprecated props ({}) with composable API. Please use {} instead. See migration guide: {}",
                self.root, props, self.replacement, MIGRATION_GUIDE
            ),
            NoticeKind::DeclarativeApi => {
                let noun = if self.props.len() == 1 { "prop" } else { "props" };
                write!(
                    f,
                    "{}: Declarative API ({} {}) is deprecated. Please migrate to composable API using {} components. See migration guide: {}",
                    self.root, props, noun, self.parts, MIGRATION_GUIDE
                )
            }
        }
    }
}

/// Send a notice to the log when the policy allows it.
///
/// Returns whether anything was emitted.
pub fn emit(notice: &DeprecationNotice, policy: WarningPolicy) -> bool {
    if !policy.enabled() {
        return false;
    }
    tracing::warn!(
        target: DEPRECATION_TARGET,
        component = notice.root,
        "{notice}"
    );
    true
}
