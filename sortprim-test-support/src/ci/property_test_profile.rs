//! Property-test run profile read from the environment.
//!
//! Every proptest suite in the workspace builds its runner configuration
//! from this profile, so CI can scale case counts or enable forking in one
//! place.

use std::env;
use std::fmt;

/// Environment variable overriding the number of proptest cases.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const SORTPRIM_PBT_FORK_ENV_KEY: &str = "SORTPRIM_PBT_FORK";

/// Reason an override was ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverrideError {
    /// The value did not parse as an unsigned integer.
    NotANumber(String),
    /// The case count parsed as zero.
    ZeroCases,
    /// The value was not a recognised boolean spelling.
    NotABool,
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(detail) => write!(f, "parse error: {detail}"),
            Self::ZeroCases => f.write_str("cases must be > 0"),
            Self::NotABool => f.write_str("expected one of: true/false/1/0/yes/no/on/off"),
        }
    }
}

/// Case count and fork flag for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads [`PROGTEST_CASES_ENV_KEY`] and [`SORTPRIM_PBT_FORK_ENV_KEY`],
    /// keeping the supplied defaults for unset or malformed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortprim_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(SORTPRIM_PBT_FORK_ENV_KEY, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(
    key: &'static str,
    default: T,
    parse: impl Fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(error) => Err(OverrideError::NotANumber(error.to_string())),
    }
}

fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool),
    }
}
