//! Engine settings loaded from TOML.
//!
//! - `Settings::default()` parses the embedded `default_settings.toml`
//! - `parse_settings_toml(content)` parses and validates caller-supplied TOML
//! - Settings are a plain value handed to [`crate::Engine::with_parts`]; there is
//!   no process-wide instance

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub distance: DistanceSettings,
    pub candidates: CandidateSettings,
    #[serde(default)]
    pub ranker: RankerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    }
}

/// Edit costs for the chunked phonetic distance.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceSettings {
    /// Substitution between two chunks of the same confusable group.
    pub near_substitution: f64,
    pub substitution: f64,
    /// Insertion or deletion of one chunk.
    pub indel: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateSettings {
    pub default_top_k: usize,
    pub max_variants: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankerSettings {
    #[serde(default)]
    pub rules: Vec<RankRule>,
}

/// One ordered (predicate, weight) adjustment.
///
/// Fires when any of `query` matches the query and `candidate` matches the
/// native candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct RankRule {
    pub name: String,
    pub query: Vec<Pattern>,
    pub candidate: Pattern,
    pub weight: f64,
}

impl RankRule {
    pub fn applies(&self, query: &str, candidate: &str) -> bool {
        self.query.iter().any(|p| p.matches(query)) && self.candidate.matches(candidate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    EndsWith(String),
    StartsWith(String),
    Contains(String),
}

impl Pattern {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::EndsWith(s) => text.ends_with(s.as_str()),
            Pattern::StartsWith(s) => text.starts_with(s.as_str()),
            Pattern::Contains(s) => text.contains(s.as_str()),
        }
    }

    fn needle(&self) -> &str {
        match self {
            Pattern::EndsWith(s) | Pattern::StartsWith(s) | Pattern::Contains(s) => s,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: impl Into<String>, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.into(),
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if s.$section.$field < 0.0 || s.$section.$field.is_nan() {
                return Err(invalid(
                    concat!(stringify!($section), ".", stringify!($field)),
                    "must be non-negative",
                ));
            }
        };
    }
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(invalid(
                    concat!(stringify!($section), ".", stringify!($field)),
                    "must be positive",
                ));
            }
        };
    }

    check_non_negative!(distance.near_substitution);
    check_non_negative!(distance.substitution);
    check_non_negative!(distance.indel);
    if s.distance.indel == 0.0 {
        return Err(invalid("distance.indel", "must be positive"));
    }
    if s.distance.near_substitution > s.distance.substitution {
        return Err(invalid(
            "distance.near_substitution",
            "must not exceed distance.substitution",
        ));
    }

    check_positive_usize!(candidates.default_top_k);
    check_positive_usize!(candidates.max_variants);

    for (i, rule) in s.ranker.rules.iter().enumerate() {
        if rule.name.is_empty() {
            return Err(invalid(format!("ranker.rules[{i}].name"), "must not be empty"));
        }
        if rule.query.is_empty() {
            return Err(invalid(
                format!("ranker.rules.{}.query", rule.name),
                "needs at least one pattern",
            ));
        }
        let mut patterns = rule.query.iter().chain(std::iter::once(&rule.candidate));
        if patterns.any(|p| p.needle().is_empty()) {
            return Err(invalid(
                format!("ranker.rules.{}", rule.name),
                "patterns must not be empty",
            ));
        }
        if !rule.weight.is_finite() {
            return Err(invalid(
                format!("ranker.rules.{}.weight", rule.name),
                "must be finite",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
[distance]
near_substitution = 0.25
substitution = 1.0
indel = 1.0

[candidates]
default_top_k = 5
max_variants = 16
"#;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!((s.distance.near_substitution - 0.25).abs() < f64::EPSILON);
        assert!((s.distance.substitution - 1.0).abs() < f64::EPSILON);
        assert!((s.distance.indel - 1.0).abs() < f64::EPSILON);
        assert_eq!(s.candidates.default_top_k, 5);
        assert_eq!(s.candidates.max_variants, 16);
        let names: Vec<&str> = s.ranker.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "nasal_retroflex",
                "nasal_dental",
                "aspirate_retroflex",
                "aspirate_dental",
                "final_retroflex"
            ]
        );
    }

    #[test]
    fn default_matches_embedded() {
        let s = Settings::default();
        assert_eq!(s.ranker.rules.len(), 5);
        assert_eq!(default_toml(), DEFAULT_SETTINGS_TOML);
    }

    #[test]
    fn rules_section_is_optional() {
        let s = parse_settings_toml(BASE).unwrap();
        assert!(s.ranker.rules.is_empty());
    }

    #[test]
    fn rule_patterns() {
        let s = Settings::default();
        let rule = &s.ranker.rules[0];
        assert!(rule.applies("thand", "ठंड"));
        assert!(rule.applies("bandar", "बंडर"));
        assert!(!rule.applies("thand", "ठंद"));
        assert!(!rule.applies("thik", "ठंड"));

        assert!(Pattern::StartsWith("th".into()).matches("thand"));
        assert!(!Pattern::StartsWith("nd".into()).matches("thand"));
    }

    #[test]
    fn parse_custom_rule() {
        let toml = format!(
            "{BASE}\n[[ranker.rules]]\nname = \"x\"\nquery = [{{ starts_with = \"kh\" }}]\ncandidate = {{ contains = \"ख\" }}\nweight = 0.2\n"
        );
        let s = parse_settings_toml(&toml).unwrap();
        assert_eq!(s.ranker.rules[0].query, vec![Pattern::StartsWith("kh".into())]);
        assert!((s.ranker.rules[0].weight - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn error_negative_cost() {
        let toml = BASE.replace("substitution = 1.0", "substitution = -1.0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("distance.substitution"));
    }

    #[test]
    fn error_near_exceeds_substitution() {
        let toml = BASE.replace("near_substitution = 0.25", "near_substitution = 2.0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("distance.near_substitution"));
    }

    #[test]
    fn error_zero_indel() {
        let toml = BASE.replace("indel = 1.0", "indel = 0.0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("distance.indel"));
    }

    #[test]
    fn error_zero_top_k() {
        let toml = BASE.replace("default_top_k = 5", "default_top_k = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("candidates.default_top_k"));
    }

    #[test]
    fn error_empty_rule_name() {
        let toml = format!(
            "{BASE}\n[[ranker.rules]]\nname = \"\"\nquery = [{{ contains = \"a\" }}]\ncandidate = {{ contains = \"ा\" }}\nweight = 0.1\n"
        );
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("ranker.rules[0].name"));
    }

    #[test]
    fn error_empty_pattern() {
        let toml = format!(
            "{BASE}\n[[ranker.rules]]\nname = \"r\"\nquery = [{{ contains = \"\" }}]\ncandidate = {{ contains = \"ा\" }}\nweight = 0.1\n"
        );
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("ranker.rules.r"));
    }

    #[test]
    fn error_unknown_pattern_kind() {
        let toml = format!(
            "{BASE}\n[[ranker.rules]]\nname = \"r\"\nquery = [{{ regex = \"a\" }}]\ncandidate = {{ contains = \"ा\" }}\nweight = 0.1\n"
        );
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[distance]\nnear_substitution = 0.25\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
