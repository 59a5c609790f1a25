//! Per-component bump overrides from `<name>@<bump>` labels

use crate::types::Label;
use std::fmt;
use tracing::debug;

/// Bump requested for a single component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideBump {
    /// `@major`
    Major,
    /// `@minor`
    Minor,
    /// `@patch`
    Patch,
    /// `@auto` - let the release tool decide
    Auto,
}

impl OverrideBump {
    /// Suffix keyword after the `@`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for OverrideBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A component that gets its own bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentOverride {
    /// Component id, taken from the label description
    pub component: String,
    /// Requested bump
    pub bump: OverrideBump,
}

impl ComponentOverride {
    /// Argument token for the tag command, wrapped in literal double quotes
    ///
    /// `@auto` renders as the bare component id.
    pub fn token(&self) -> String {
        match self.bump {
            OverrideBump::Auto => format!("\"{}\"", self.component),
            bump => format!("\"{}@{bump}\"", self.component),
        }
    }
}

/// Parse the override suffix of a label name (`…@major|minor|patch|auto`,
/// case-sensitive, anchored at the end)
pub fn parse_override_suffix(name: &str) -> Option<OverrideBump> {
    let (_, suffix) = name.rsplit_once('@')?;
    match suffix {
        "major" => Some(OverrideBump::Major),
        "minor" => Some(OverrideBump::Minor),
        "patch" => Some(OverrideBump::Patch),
        "auto" => Some(OverrideBump::Auto),
        _ => None,
    }
}

/// Extract one override per matching label, in label order
///
/// Overrides are not deduplicated: two labels naming the same component both
/// produce a token. A label with no description falls back to the part of
/// its name before the `@`.
pub fn extract_overrides(labels: &[Label]) -> Vec<ComponentOverride> {
    labels
        .iter()
        .filter_map(|label| {
            let bump = parse_override_suffix(&label.name)?;
            let component = label
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .or_else(|| label.name.rsplit_once('@').map(|(prefix, _)| prefix))
                .unwrap_or_default()
                .to_string();
            debug!(label = %label.name, %component, %bump, "component override");
            Some(ComponentOverride { component, bump })
        })
        .collect()
}
