//! Role Model

use super::actor::Actor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role label attached to an actor
///
/// The label is informational for the rendering layer. Elevated access is
/// decided by [`RoleContext::is_super_admin`], which comes from the
/// registry's elevated-privilege set, never from this label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleName {
    #[default]
    Editor,
    Admin,
    #[serde(alias = "super_admin")]
    Superadmin,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }

    /// Parse a stored role label. Unknown labels fall back to `editor`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "superadmin" | "super_admin" => Self::Superadmin,
            _ => Self::Editor,
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored role row for an actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub actor_id: String,
    pub role: RoleName,
    /// Last administrative change (unix millis)
    pub updated_at: i64,
}

/// Resolved privilege snapshot for an actor
///
/// Built fresh on every view load and never cached across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleContext {
    pub actor: Actor,
    pub role: RoleName,
    pub is_super_admin: bool,
}

impl RoleContext {
    pub fn new(actor: Actor, role: RoleName, is_super_admin: bool) -> Self {
        Self {
            actor,
            role,
            is_super_admin,
        }
    }

    /// Permissive default used when no role record exists or the lookup fails:
    /// plain editor without elevation.
    pub fn editor(actor: Actor) -> Self {
        Self::new(actor, RoleName::Editor, false)
    }

    pub fn actor_id(&self) -> &str {
        &self.actor.id
    }
}
