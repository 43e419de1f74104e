//! Options accepted by the transpiler.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ECMAScript version the transpiled output must run on.
///
/// Syntax newer than the target is lowered by the OXC transformer.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    /// ECMAScript 2015 (ES6)
    ///
    /// Maximum compatibility. Classes, arrow functions and let/const are
    /// the newest syntax left untouched.
    #[default]
    Es2015,
    /// ECMAScript 2016
    Es2016,
    /// ECMAScript 2017
    Es2017,
    /// ECMAScript 2018
    Es2018,
    /// ECMAScript 2019
    Es2019,
    /// ECMAScript 2020
    ///
    /// Keeps optional chaining and nullish coalescing.
    Es2020,
    /// ECMAScript 2021
    Es2021,
    /// ECMAScript 2022
    Es2022,
    /// Latest ECMAScript features, no syntax lowering.
    Esnext,
}

impl EsTarget {
    /// All targets, oldest first.
    pub const ALL: [Self; 9] = [
        Self::Es2015,
        Self::Es2016,
        Self::Es2017,
        Self::Es2018,
        Self::Es2019,
        Self::Es2020,
        Self::Es2021,
        Self::Es2022,
        Self::Esnext,
    ];

    /// Target name as understood by `oxc_transformer::TransformOptions::from_target`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Es2015 => "es2015",
            Self::Es2016 => "es2016",
            Self::Es2017 => "es2017",
            Self::Es2018 => "es2018",
            Self::Es2019 => "es2019",
            Self::Es2020 => "es2020",
            Self::Es2021 => "es2021",
            Self::Es2022 => "es2022",
            Self::Esnext => "esnext",
        }
    }
}

impl fmt::Display for EsTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EsTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|target| target.as_str() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                format!("unknown target '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// Per-file transpile options.
///
/// The defaults request an external source map and keep every comment,
/// which is what the build pipeline always asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspileOptions {
    /// Syntax level of the output
    pub target: EsTarget,
    /// Generate a source map alongside the code
    pub source_maps: bool,
    /// Preserve comments from the input
    pub comments: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            target: EsTarget::default(),
            source_maps: true,
            comments: true,
        }
    }
}

impl TranspileOptions {
    /// Set the output target.
    pub fn with_target(mut self, target: EsTarget) -> Self {
        self.target = target;
        self
    }
}
