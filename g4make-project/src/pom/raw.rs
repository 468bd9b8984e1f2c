//! Serde mirror of the parts of a Maven `pom.xml` g4make reads.
//!
//! Everything else in the file is ignored.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPom {
    pub artifact_id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub build: RawBuild,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawBuild {
    #[serde(default)]
    pub plugins: RawPlugins,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPlugins {
    #[serde(default)]
    pub plugin: Vec<RawPlugin>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPlugin {
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub configuration: RawConfiguration,
}

/// Union of the `antlr4-maven-plugin` and `antlr4test-maven-plugin`
/// configuration elements.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawConfiguration {
    // antlr4-maven-plugin
    pub source_directory: Option<String>,
    pub grammars: Option<String>,
    pub includes: Option<RawIncludes>,

    // antlr4test-maven-plugin
    pub grammar_name: Option<String>,
    pub entry_point: Option<String>,
    pub case_insensitive_type: Option<String>,
    pub example_files: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawIncludes {
    #[serde(default)]
    pub include: Vec<String>,
}

/// Trimmed, non-empty text of an optional element.
pub(crate) fn text(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
