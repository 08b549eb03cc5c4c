//! Domain value objects: ProjectType and Framework.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO compatibility logic. Which frameworks are valid for which
//! project type lives in `compatibility.rs`. This file's only job is to
//! define the types, their wire/display representations, and their
//! `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `label`, and `FromStr` arms here
//! 3. Add a compatibility entry in `compatibility.rs`
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectType ──────────────────────────────────────────────────────────────

/// The kind of Go project to request from the generator service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Microservice,
    CliApp,
    ApiServer,
    SimpleProject,
}

impl ProjectType {
    /// Wire representation, matching the generator service's JSON values.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Microservice => "microservice",
            Self::CliApp => "cli-app",
            Self::ApiServer => "api-server",
            Self::SimpleProject => "simple-project",
        }
    }

    /// Human-readable label for menus and summaries.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Microservice => "Microservice",
            Self::CliApp => "CLI App",
            Self::ApiServer => "API Server",
            Self::SimpleProject => "Simple Project",
        }
    }

    /// All project types, in presentation order.
    pub const ALL: [ProjectType; 4] = [
        Self::Microservice,
        Self::CliApp,
        Self::ApiServer,
        Self::SimpleProject,
    ];
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "microservice" | "service" => Ok(Self::Microservice),
            "cli-app" | "cli" | "cliapp" => Ok(Self::CliApp),
            "api-server" | "api" | "apiserver" => Ok(Self::ApiServer),
            "simple-project" | "simple" => Ok(Self::SimpleProject),
            other => Err(DomainError::UnknownProjectType(other.to_string())),
        }
    }
}

// ── Framework ────────────────────────────────────────────────────────────────

/// A Go framework/dependency offered by the generator service.
///
/// The variants span all project types; `compatibility.rs` decides which
/// subset is offered for a given [`ProjectType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Golly,
    Gin,
    Echo,
    Fiber,
    GoKit,
    Chi,
    Cobra,
    Urfave,
    Kingpin,
}

impl Framework {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Golly => "golly",
            Self::Gin => "gin",
            Self::Echo => "echo",
            Self::Fiber => "fiber",
            Self::GoKit => "gokit",
            Self::Chi => "chi",
            Self::Cobra => "cobra",
            Self::Urfave => "urfave",
            Self::Kingpin => "kingpin",
        }
    }

    /// Display label. Golly is the recommended default everywhere, and its
    /// label says so.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Golly => "golly (recommended)",
            Self::Gin => "Gin",
            Self::Echo => "Echo",
            Self::Fiber => "Fiber",
            Self::GoKit => "Go kit",
            Self::Chi => "Chi",
            Self::Cobra => "Cobra",
            Self::Urfave => "urfave/cli",
            Self::Kingpin => "Kingpin",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "golly" => Ok(Self::Golly),
            "gin" => Ok(Self::Gin),
            "echo" => Ok(Self::Echo),
            "fiber" => Ok(Self::Fiber),
            "gokit" | "go-kit" | "go_kit" => Ok(Self::GoKit),
            "chi" => Ok(Self::Chi),
            "cobra" => Ok(Self::Cobra),
            "urfave" | "urfave/cli" => Ok(Self::Urfave),
            "kingpin" => Ok(Self::Kingpin),
            other => Err(DomainError::UnknownFramework(other.to_string())),
        }
    }
}
