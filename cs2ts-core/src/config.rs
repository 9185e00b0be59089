//! Conversion configuration.

use serde::{Deserialize, Deserializer};

/// Options controlling a single conversion call.
///
/// The value is read-only for the duration of a conversion. Keys use the
/// camelCase spelling of the editor settings they originate from, so a
/// settings file can be deserialized straight into this struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Lower-case the first character of converted property names
    pub properties_to_camel_case: bool,

    /// Postfixes stripped from type and member names, in priority order.
    /// A bare string is accepted as a single postfix.
    #[serde(deserialize_with = "one_or_many")]
    pub trim_postfixes: Vec<String>,

    /// Keep stripping postfixes until none of them matches
    pub recursive_trim_postfixes: bool,
}

impl Config {
    /// Create a configuration with every option disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether property names are camel-cased.
    pub fn with_camel_case(mut self, enabled: bool) -> Self {
        self.properties_to_camel_case = enabled;
        self
    }

    /// Replace the postfix list.
    pub fn with_trim_postfixes<I, S>(mut self, postfixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trim_postfixes = postfixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether postfix trimming runs to a fixpoint.
    pub fn with_recursive_trim(mut self, enabled: bool) -> Self {
        self.recursive_trim_postfixes = enabled;
        self
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(postfix) => vec![postfix],
        OneOrMany::Many(postfixes) => postfixes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Config {
        toml::from_str(content).expect("Failed to parse test config")
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.properties_to_camel_case);
        assert!(config.trim_postfixes.is_empty());
        assert!(!config.recursive_trim_postfixes);
    }

    #[test]
    fn test_deserialize_postfix_list() {
        let config = parse(
            r#"
            propertiesToCamelCase = true
            trimPostfixes = ["Dto", "Model"]
            recursiveTrimPostfixes = true
            "#,
        );

        assert!(config.properties_to_camel_case);
        assert_eq!(config.trim_postfixes, vec!["Dto", "Model"]);
        assert!(config.recursive_trim_postfixes);
    }

    #[test]
    fn test_deserialize_bare_postfix_string() {
        let config = parse(r#"trimPostfixes = "Dto""#);
        assert_eq!(config.trim_postfixes, vec!["Dto"]);
        assert!(!config.properties_to_camel_case);
    }

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_camel_case(true)
            .with_trim_postfixes(["Dto"])
            .with_recursive_trim(true);

        assert_eq!(
            config,
            Config {
                properties_to_camel_case: true,
                trim_postfixes: vec!["Dto".to_string()],
                recursive_trim_postfixes: true,
            }
        );
    }
}
