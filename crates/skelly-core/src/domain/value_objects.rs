//! Domain value objects: BackendStack, FrontendStack, ArchitectureKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They name the entries of the strategy catalog. `ProjectConfig` stores the
//! display labels as plain strings; these enums are how callers (the CLI,
//! the factory) pick a strategy without string matching.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and its `ALL` entry here
//! 2. Add the `as_str`, `label` and `FromStr` arms here
//! 3. Add a factory arm in `strategies::factory` and a catalog entry in
//!    `catalog.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── BackendStack ─────────────────────────────────────────────────────────────

/// A supported backend stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStack {
    Java,
    Express,
    Django,
}

impl BackendStack {
    pub const ALL: [BackendStack; 3] = [Self::Java, Self::Express, Self::Django];

    /// Machine key used on the command line and in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Express => "express",
            Self::Django => "django",
        }
    }

    /// Display label stored in `ProjectConfig::backend_stack`.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Java => "Java",
            Self::Express => "Express",
            Self::Django => "Django",
        }
    }
}

impl fmt::Display for BackendStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BackendStack {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" | "spring" | "java-spring" => Ok(Self::Java),
            "express" | "express.js" | "node" => Ok(Self::Express),
            "django" => Ok(Self::Django),
            other => Err(DomainError::UnknownBackendStack(other.to_string())),
        }
    }
}

// ── FrontendStack ────────────────────────────────────────────────────────────

/// A supported frontend stack. `None` produces a backend-only project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontendStack {
    React,
    Lit,
    Angular,
    None,
}

impl FrontendStack {
    pub const ALL: [FrontendStack; 4] = [Self::React, Self::Lit, Self::Angular, Self::None];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Lit => "lit",
            Self::Angular => "angular",
            Self::None => "none",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Lit => "Lit",
            Self::Angular => "Angular",
            Self::None => "None (Backend only)",
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for FrontendStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FrontendStack {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "react" => Ok(Self::React),
            "lit" => Ok(Self::Lit),
            "angular" => Ok(Self::Angular),
            "none" | "" => Ok(Self::None),
            other => Err(DomainError::UnknownFrontendStack(other.to_string())),
        }
    }
}

// ── ArchitectureKind ─────────────────────────────────────────────────────────

/// The architecture strategies the catalog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchitectureKind {
    Hexagonal,
    Layered,
    Custom,
}

impl ArchitectureKind {
    pub const ALL: [ArchitectureKind; 3] = [Self::Hexagonal, Self::Layered, Self::Custom];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hexagonal => "hexagonal",
            Self::Layered => "layered",
            Self::Custom => "custom",
        }
    }

    /// Display name, identical to the owning strategy's `name()`.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hexagonal => "Hexagonal Architecture",
            Self::Layered => "Layered Architecture",
            Self::Custom => "Custom Architecture",
        }
    }

    /// Exact match against a display label such as
    /// `ProjectConfig::architecture`. No case folding or trimming.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for ArchitectureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ArchitectureKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hexagonal" | "hex" | "ports-and-adapters" => Ok(Self::Hexagonal),
            "layered" => Ok(Self::Layered),
            "custom" => Ok(Self::Custom),
            other => Err(DomainError::UnknownArchitecture(other.to_string())),
        }
    }
}
