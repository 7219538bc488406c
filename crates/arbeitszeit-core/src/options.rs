use crate::error::ArbeitszeitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// What to do with the first qualifying day row of a document.
///
/// Some report layouts repeat the last day of the previous month at the top
/// of the table; older exports also leaked a header remnant into the first
/// data row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FirstRowPolicy {
    /// Keep every qualifying row.
    #[default]
    Keep,
    /// Always drop the first qualifying row.
    DropFirst,
    /// Drop the first qualifying row only if its day of month is 28–31.
    DropPreviousMonth,
}

impl fmt::Display for FirstRowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirstRowPolicy::Keep => write!(f, "keep"),
            FirstRowPolicy::DropFirst => write!(f, "drop-first"),
            FirstRowPolicy::DropPreviousMonth => write!(f, "drop-previous-month"),
        }
    }
}

impl FromStr for FirstRowPolicy {
    type Err = ArbeitszeitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(FirstRowPolicy::Keep),
            "drop-first" => Ok(FirstRowPolicy::DropFirst),
            "drop-previous-month" => Ok(FirstRowPolicy::DropPreviousMonth),
            other => Err(ArbeitszeitError::OptionsInvalid(format!(
                "unknown first-row policy '{}' (expected keep, drop-first or drop-previous-month)",
                other
            ))),
        }
    }
}

/// Keywords that identify the header line of the timesheet table.
pub fn default_header_keywords() -> Vec<String> {
    [
        "datum", "tag", "von", "bis", "kommen", "gehen", "beginn", "ende", "pause", "soll",
        "ist", "saldo",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub first_row_policy: FirstRowPolicy,
    pub header_keywords: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            first_row_policy: FirstRowPolicy::default(),
            header_keywords: default_header_keywords(),
        }
    }
}

/// Load extraction options from a JSON file.
pub fn load_options(path: &Path) -> Result<ExtractOptions, ArbeitszeitError> {
    let content = std::fs::read_to_string(path).map_err(|e| ArbeitszeitError::OptionsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_options(&content, path)
}

/// Parse extraction options from a JSON string. Missing fields take their
/// defaults.
pub fn parse_options(json: &str, source: &Path) -> Result<ExtractOptions, ArbeitszeitError> {
    let options: ExtractOptions =
        serde_json::from_str(json).map_err(|e| ArbeitszeitError::OptionsLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_options(&options)?;
    Ok(options)
}

pub fn validate_options(options: &ExtractOptions) -> Result<(), ArbeitszeitError> {
    if options.header_keywords.len() < 2 {
        return Err(ArbeitszeitError::OptionsInvalid(
            "header_keywords needs at least two entries".into(),
        ));
    }

    if let Some(kw) = options
        .header_keywords
        .iter()
        .find(|kw| kw.trim().is_empty() || kw.contains(char::is_whitespace))
    {
        return Err(ArbeitszeitError::OptionsInvalid(format!(
            "header keyword '{}' must be a single non-empty word",
            kw
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.first_row_policy, FirstRowPolicy::Keep);
        assert!(opts.header_keywords.contains(&"datum".to_string()));
        assert!(validate_options(&opts).is_ok());
    }

    #[test]
    fn test_parse_partial_json_uses_defaults() {
        let opts =
            parse_options(r#"{"first_row_policy": "drop-previous-month"}"#, Path::new("x.json"))
                .unwrap();
        assert_eq!(opts.first_row_policy, FirstRowPolicy::DropPreviousMonth);
        assert_eq!(opts.header_keywords, default_header_keywords());
    }

    #[test]
    fn test_parse_unknown_policy_fails() {
        let err = parse_options(r#"{"first_row_policy": "drop-all"}"#, Path::new("x.json"));
        assert!(matches!(err, Err(ArbeitszeitError::OptionsLoad { .. })));
    }

    #[test]
    fn test_too_few_keywords_rejected() {
        let err = parse_options(r#"{"header_keywords": ["datum"]}"#, Path::new("x.json"));
        assert!(matches!(err, Err(ArbeitszeitError::OptionsInvalid(_))));
    }

    #[test]
    fn test_multi_word_keyword_rejected() {
        let opts = ExtractOptions {
            header_keywords: vec!["datum".into(), "von bis".into()],
            ..Default::default()
        };
        assert!(validate_options(&opts).is_err());
    }

    #[test]
    fn test_policy_from_str_round_trips_display() {
        for p in [
            FirstRowPolicy::Keep,
            FirstRowPolicy::DropFirst,
            FirstRowPolicy::DropPreviousMonth,
        ] {
            assert_eq!(p.to_string().parse::<FirstRowPolicy>().unwrap(), p);
        }
        assert!("nope".parse::<FirstRowPolicy>().is_err());
    }
}
