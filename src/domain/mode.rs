use serde::{Deserialize, Serialize};

/// Which path produced a stage's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "mock")]
    Mock,
    #[serde(rename = "real")]
    Live,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Mock => "mock",
            Mode::Live => "real",
        }
    }

    /// Label used in progress output
    pub fn banner(&self) -> &'static str {
        match self {
            Mode::Mock => "[MOCK] Running in MOCK mode (deterministic)",
            Mode::Live => "[REAL] Running in REAL mode",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a requested live path was not taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    MissingCredential(&'static str),
    NotImplemented(String),
}

impl std::fmt::Display for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fallback::MissingCredential(var) => write!(f, "{} not set", var),
            Fallback::NotImplemented(what) => write!(f, "{} not implemented yet", what),
        }
    }
}

/// A value tagged with the mode that actually produced it.
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub value: T,
    pub mode: Mode,
    pub fallback: Option<Fallback>,
}

impl<T> Sourced<T> {
    pub fn mock(value: T) -> Self {
        Self {
            value,
            mode: Mode::Mock,
            fallback: None,
        }
    }

    pub fn fell_back(value: T, reason: Fallback) -> Self {
        Self {
            value,
            mode: Mode::Mock,
            fallback: Some(reason),
        }
    }
}
