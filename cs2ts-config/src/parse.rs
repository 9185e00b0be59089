//! Settings parsing from strings.

use cs2ts_core::Config;

use crate::{Result, error::SourceContext, validate::validate_config};

/// Parse settings from `content`, reporting errors against `filename`.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_empty_file_is_default() {
        let config = parse_config("", "cs2ts.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_all_keys() {
        let content = r#"
propertiesToCamelCase = true
trimPostfixes = ["Dto", "Model"]
recursiveTrimPostfixes = true
"#;
        let config = parse_config(content, "cs2ts.toml").unwrap();
        assert!(config.properties_to_camel_case);
        assert_eq!(config.trim_postfixes, vec!["Dto", "Model"]);
        assert!(config.recursive_trim_postfixes);
    }

    #[test]
    fn test_single_postfix_string() {
        let config = parse_config(r#"trimPostfixes = "Dto""#, "cs2ts.toml").unwrap();
        assert_eq!(config.trim_postfixes, vec!["Dto"]);
    }

    #[test]
    fn test_wrong_value_type_is_parse_error() {
        let err = parse_config("propertiesToCamelCase = \"yes\"", "cs2ts.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = parse_config("trimPostfixes = [", "cs2ts.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_validation_runs_after_parse() {
        let err = parse_config(r#"trimPostfixes = ["Dto", ""]"#, "cs2ts.toml").unwrap_err();
        assert_eq!(
            err.validation_message(),
            Some("trim postfixes cannot be empty strings")
        );
    }
}
