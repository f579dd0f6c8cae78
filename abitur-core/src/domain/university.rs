//! University catalog domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Institution type, used for catalog filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniversityKind {
    Academy,
    Institute,
    School,
}

impl UniversityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniversityKind::Academy => "academy",
            UniversityKind::Institute => "institute",
            UniversityKind::School => "school",
        }
    }
}

impl fmt::Display for UniversityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UniversityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "academy" => Ok(UniversityKind::Academy),
            "institute" => Ok(UniversityKind::Institute),
            "school" => Ok(UniversityKind::School),
            other => Err(format!(
                "unknown university kind '{}' (expected academy, institute, or school)",
                other
            )),
        }
    }
}

/// A catalog entry for one institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub kind: UniversityKind,
    /// Lowest combined score admitted in the most recent intake
    pub min_score: u32,
    #[serde(default)]
    pub description: String,
}

impl University {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        city: impl Into<String>,
        kind: UniversityKind,
        min_score: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city: city.into(),
            kind,
            min_score,
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!(
            "Academy".parse::<UniversityKind>().unwrap(),
            UniversityKind::Academy
        );
        assert_eq!(
            " institute ".parse::<UniversityKind>().unwrap(),
            UniversityKind::Institute
        );
        assert!("college".parse::<UniversityKind>().is_err());
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            UniversityKind::Academy,
            UniversityKind::Institute,
            UniversityKind::School,
        ] {
            assert_eq!(kind.to_string().parse::<UniversityKind>().unwrap(), kind);
        }
    }
}
