use std::fmt;

/// Where data-fetching operations resolve from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeFlag {
    /// Local mock producers; the network is never touched.
    Mock,
    /// Live HTTP calls.
    #[default]
    Real,
}

impl ModeFlag {
    /// Parse a boolean-ish "use mock" value. Anything unrecognized is `Real`.
    pub fn from_flag(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_lowercase()) {
            Some(v) if matches!(v.as_str(), "true" | "1" | "yes" | "on") => Self::Mock,
            _ => Self::Real,
        }
    }

    pub fn is_mock(self) -> bool {
        matches!(self, Self::Mock)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Real => "real",
        }
    }
}

impl From<bool> for ModeFlag {
    fn from(mock: bool) -> Self {
        if mock { Self::Mock } else { Self::Real }
    }
}

impl fmt::Display for ModeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_values_select_mock() {
        for v in ["true", "TRUE", " 1 ", "yes", "On"] {
            assert_eq!(ModeFlag::from_flag(Some(v)), ModeFlag::Mock, "{v}");
        }
    }

    #[test]
    fn absent_or_malformed_defaults_to_real() {
        for v in [None, Some(""), Some("false"), Some("0"), Some("maybe"), Some("truthy")] {
            assert_eq!(ModeFlag::from_flag(v), ModeFlag::Real, "{v:?}");
        }
        assert_eq!(ModeFlag::default(), ModeFlag::Real);
    }
}
