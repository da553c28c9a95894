//! Output formatter implementations.

use serde_json::json;

use super::{ExistenceReport, OutputFormatter};
use crate::Result;

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn existence(&self, report: &ExistenceReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn paths(&self, paths: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(paths)?)
    }

    fn path(&self, path: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(&json!({ "path": path }))?)
    }
}

/// Formatter for plain text.
///
/// Lists print one path per line so the output can be piped into
/// line-oriented tools; an empty list prints nothing.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn existence(&self, report: &ExistenceReport) -> Result<String> {
        Ok(format!("exists={} dir={}", report.exists, report.is_dir))
    }

    fn paths(&self, paths: &[String]) -> Result<String> {
        Ok(paths.join("\n"))
    }

    fn path(&self, path: &str) -> Result<String> {
        Ok(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(exists: bool, is_dir: bool) -> ExistenceReport {
        ExistenceReport {
            path: "/some/path".to_string(),
            exists,
            is_dir,
        }
    }

    #[test]
    fn test_human_existence() {
        let output = HumanFormatter.existence(&report(true, false)).unwrap();
        assert_eq!(output, "exists=true dir=false");
    }

    #[test]
    fn test_human_paths() {
        let paths = vec!["a".to_string(), "b/c".to_string()];
        assert_eq!(HumanFormatter.paths(&paths).unwrap(), "a\nb/c");
        assert_eq!(HumanFormatter.paths(&[]).unwrap(), "");
    }

    #[test]
    fn test_json_existence() {
        let output = JsonFormatter.existence(&report(true, true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["path"], "/some/path");
        assert_eq!(value["exists"], true);
        assert_eq!(value["is_dir"], true);
    }

    #[test]
    fn test_json_paths() {
        let paths = vec!["a".to_string(), ".".to_string()];
        let output = JsonFormatter.paths(&paths).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, paths);

        let output = JsonFormatter.paths(&[]).unwrap();
        assert_eq!(output.trim(), "[]");
    }

    #[test]
    fn test_json_path() {
        let output = JsonFormatter.path("/resolved").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["path"], "/resolved");
    }

    #[test]
    fn test_create_formatter() {
        use crate::config::OutputFormat;

        let human = OutputFormat::Human.create_formatter();
        assert_eq!(human.path("x").unwrap(), "x");
        let json = OutputFormat::Json.create_formatter();
        assert!(json.path("x").unwrap().contains("\"path\""));
    }
}
