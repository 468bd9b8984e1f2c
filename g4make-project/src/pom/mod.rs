//! Loading a project from a Maven `pom.xml` descriptor.
//!
//! Grammar metadata lives in the configuration of two plugins: the
//! `antlr4-maven-plugin` declares the grammar sources, and the
//! `antlr4test-maven-plugin` declares the grammar name, entry rule, case mode
//! and example inputs.

mod raw;

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use g4make_core::is_go_identifier;
use raw::{RawConfiguration, RawPom, text};

use crate::{CaseFolding, Error, Project, Result, error::SourceContext};

pub(crate) const ANTLR_PLUGIN: &str = "antlr4-maven-plugin";
pub(crate) const TEST_PLUGIN: &str = "antlr4test-maven-plugin";

const BASEDIR: &str = "${basedir}";
const DEFAULT_EXAMPLES: &str = "examples";

/// Sidecar files next to examples holding expected output, not input.
const SIDECAR_EXTENSIONS: &[&str] = &["errors", "tree"];

/// A parsed project descriptor.
#[derive(Debug)]
pub struct Pom {
    path: PathBuf,
    artifact_id: Option<String>,
    name: Option<String>,
    grammar_name: String,
    entry_point: Option<String>,
    case_insensitive: CaseFolding,
    example_files: String,
    grammars: Vec<String>,
    includes: Vec<String>,
}

impl FromStr for Pom {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "pom.xml")
    }
}

impl Pom {
    /// Open and parse a descriptor file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a descriptor from memory.
    ///
    /// `filename` is used for error reporting and as the base for every
    /// relative path the descriptor declares.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawPom = quick_xml::de::from_str(content).map_err(|e| ctx.parse_error(e))?;

        let antlr = raw.plugin(ANTLR_PLUGIN);
        let test = raw.plugin(TEST_PLUGIN);

        let grammar_name = test
            .and_then(|c| text(&c.grammar_name))
            .ok_or_else(|| ctx.missing_grammar_name_error())?;
        if !is_go_identifier(grammar_name) {
            return Err(ctx.invalid_identifier_error(grammar_name, "grammarName"));
        }

        let entry_point = test.and_then(|c| text(&c.entry_point));
        if let Some(entry_point) = entry_point.filter(|e| !is_go_identifier(e)) {
            return Err(ctx.invalid_identifier_error(entry_point, "entryPoint"));
        }

        let base_dir = Path::new(filename)
            .parent()
            .map(|p| p.display().to_string().replace('\\', "/"))
            .unwrap_or_default();

        let source_dir = antlr
            .and_then(|c| text(&c.source_directory))
            .map(|dir| resolve(&base_dir, dir))
            .unwrap_or_else(|| base_dir.clone());

        let grammars = antlr
            .and_then(|c| text(&c.grammars))
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .map(|g| resolve(&source_dir, g))
                    .collect()
            })
            .unwrap_or_default();

        let includes = antlr
            .and_then(|c| c.includes.as_ref())
            .map(|inc| {
                inc.include
                    .iter()
                    .map(|i| i.trim())
                    .filter(|i| !i.is_empty())
                    .map(|i| resolve(&source_dir, i))
                    .collect()
            })
            .unwrap_or_default();

        let example_files = resolve(
            &base_dir,
            test.and_then(|c| text(&c.example_files))
                .unwrap_or(DEFAULT_EXAMPLES),
        );

        let case_insensitive = test
            .and_then(|c| text(&c.case_insensitive_type))
            .map(CaseFolding::from_value)
            .unwrap_or_default();

        Ok(Self {
            path: PathBuf::from(filename),
            grammar_name: grammar_name.to_string(),
            entry_point: entry_point.map(str::to_string),
            artifact_id: text(&raw.artifact_id).map(str::to_string),
            name: text(&raw.name).map(str::to_string),
            case_insensitive,
            example_files,
            grammars,
            includes,
        })
    }

    pub fn grammar_name(&self) -> &str {
        &self.grammar_name
    }

    /// Where example inputs are looked up, relative to the working directory.
    pub fn example_files(&self) -> &str {
        &self.example_files
    }

    /// Build the base project this descriptor declares.
    ///
    /// Example inputs are resolved by listing `exampleFiles`; a missing
    /// location only yields an empty example list.
    pub fn project(&self) -> Project {
        let package_name = self
            .artifact_id
            .as_deref()
            .filter(|id| is_go_identifier(id))
            .unwrap_or(&self.grammar_name)
            .to_lowercase();

        let mut project = Project::new(package_name, &self.grammar_name);
        if let Some(name) = &self.name {
            project.long_name = long_name(name);
        }
        if let Some(entry_point) = &self.entry_point {
            project.entry_point = entry_point.clone();
            project.has_parser = true;
        }
        project.case_insensitive = self.case_insensitive;
        project.examples = list_examples(&self.example_files);
        project.includes = self.includes.clone();
        project.grammars = self.grammars.clone();

        log::debug!(
            "{}: grammar {} with {} examples (parser: {})",
            self.path.display(),
            self.grammar_name,
            project.examples.len(),
            project.has_parser,
        );

        project
    }
}

impl RawPom {
    fn plugin(&self, artifact_id: &str) -> Option<&RawConfiguration> {
        self.build
            .plugins
            .plugin
            .iter()
            .find(|p| text(&p.artifact_id) == Some(artifact_id))
            .map(|p| &p.configuration)
    }
}

/// `JSON grammar` -> `JSON`
fn long_name(name: &str) -> String {
    let name = name.trim();
    name.strip_suffix(" grammar")
        .or_else(|| name.strip_suffix(" Grammar"))
        .unwrap_or(name)
        .trim()
        .to_string()
}

/// Resolve a descriptor path against `base`, expanding `${basedir}`.
fn resolve(base: &str, value: &str) -> String {
    let value = value.trim();
    if let Some(rest) = value.strip_prefix(BASEDIR) {
        return join(base, rest.trim_start_matches(['/', '\\']));
    }
    if Path::new(value).is_absolute() {
        return value.to_string();
    }
    join(base, value)
}

fn join(base: &str, rel: &str) -> String {
    let rel = rel.trim_start_matches("./").trim_end_matches('/');
    let base = base.trim_end_matches('/');
    match (base.is_empty(), rel.is_empty() || rel == ".") {
        (true, _) => rel.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{rel}"),
    }
}

/// List the example inputs at `location`, sorted by path.
fn list_examples(location: &str) -> Vec<String> {
    let path = Path::new(if location.is_empty() { "." } else { location });

    if path.is_file() {
        return vec![location.to_string()];
    }

    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("no examples found at {location:?}: {e}");
            return Vec::new();
        }
    };

    let mut examples: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| is_example(name))
        .map(|name| join(location, &name))
        .collect();
    examples.sort();
    examples
}

fn is_example(file_name: &str) -> bool {
    if file_name.starts_with('.') {
        return false;
    }
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => !SIDECAR_EXTENSIONS.contains(&ext),
        None => true,
    }
}
