//! Go type, const and var declarations.

use g4make_codegen::{CodeFragment, Renderable};
use g4make_core::quote_go_string;

fn doc_fragments(doc: &Option<String>) -> Vec<CodeFragment> {
    doc.iter().map(|d| CodeFragment::comment(d.as_str())).collect()
}

/// `const NAME = value`
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "const {} = {}",
            self.name, self.value
        ))]
    }
}

/// A package level `var` initialized with a `[]string` literal.
#[derive(Debug, Clone)]
pub struct Var {
    name: String,
    values: Vec<String>,
}

impl Var {
    pub fn strings(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|v| quote_go_string(v.as_ref()))
                .collect(),
        }
    }
}

impl Renderable for Var {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.values.is_empty() {
            return vec![CodeFragment::line(format!(
                "var {} = []string{{}}",
                self.name
            ))];
        }
        vec![CodeFragment::braced(
            format!("var {} = []string{{", self.name),
            self.values
                .iter()
                .map(|v| CodeFragment::line(format!("{},", v)))
                .collect(),
        )]
    }
}

/// Builder for Go struct types.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    fields: Vec<String>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a field line (`name Type`, or just `*Type` to embed).
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = doc_fragments(&self.doc);
        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("type {} struct{{}}", self.name)));
        } else {
            fragments.push(CodeFragment::braced(
                format!("type {} struct {{", self.name),
                self.fields
                    .iter()
                    .map(|f| CodeFragment::line(f.as_str()))
                    .collect(),
            ));
        }
        fragments
    }
}

/// A method in a Go interface.
#[derive(Debug, Clone)]
pub struct Method {
    pub doc: Option<String>,
    pub signature: String,
}

impl Method {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            doc: None,
            signature: signature.into(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Builder for Go interface types.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    embeds: Vec<String>,
    methods: Vec<Method>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            embeds: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn embed(mut self, ty: impl Into<String>) -> Self {
        self.embeds.push(ty.into());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> = self
            .embeds
            .iter()
            .map(|e| CodeFragment::line(e.as_str()))
            .collect();

        // One blank line before every method
        for method in &self.methods {
            if !body.is_empty() {
                body.push(CodeFragment::blank());
            }
            body.extend(doc_fragments(&method.doc));
            body.push(CodeFragment::line(method.signature.as_str()));
        }

        let mut fragments = doc_fragments(&self.doc);
        fragments.push(CodeFragment::braced(
            format!("type {} interface {{", self.name),
            body,
        ));
        fragments
    }
}
