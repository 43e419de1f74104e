//! Schema command implementation.

use crate::config::DualpackConfig;
use crate::error::Result;

/// Print the JSON Schema for `dualpack.config.json` to stdout.
///
/// Point an editor at the output to get completion and validation:
///
/// ```text
/// dualpack schema > dualpack.schema.json
/// ```
pub fn execute() -> Result<()> {
    println!("{}", render()?);
    Ok(())
}

/// Pretty-printed schema document.
pub fn render() -> Result<String> {
    let schema = DualpackConfig::json_schema()?;
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_valid_json() {
        let rendered = render().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value.get("properties").is_some());
        assert!(rendered.contains("\"transpile\""));
    }

    #[test]
    fn test_render_is_an_object_schema() {
        let rendered = render().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value.is_object());
        assert_ne!(rendered.trim(), "null");
        assert_eq!(value["type"], "object");
    }
}
