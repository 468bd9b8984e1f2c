//! Writer turning fragments into tab-indented Go source.

use super::{CodeFragment, Renderable};

/// One level of indentation, as `gofmt` writes it.
const INDENT: &str = "\t";

/// Accumulates generated source, tracking the current indentation.
///
/// ```
/// use g4make_codegen::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::go();
/// builder.push_comment("Package json is generated.").push_line("package json");
/// builder.emit(&CodeFragment::braced("func init() {", vec![CodeFragment::line("setup()")]));
/// assert_eq!(
///     builder.build(),
///     "// Package json is generated.\npackage json\nfunc init() {\n\tsetup()\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn go() -> Self {
        Self::default()
    }

    /// Add a line at the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add text verbatim: no indentation and no trailing newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add a `//` comment at the current indentation.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("//");
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Write every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.depth += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.depth -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
    }
}
