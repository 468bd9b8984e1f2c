//! Go function builder.

use g4make_codegen::{CodeFragment, Renderable};

/// Builder for Go functions and methods.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    doc: Vec<String>,
    receiver: Option<String>,
    params: Vec<String>,
    returns: Option<String>,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            receiver: None,
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    /// Add a line to the doc comment.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    /// Make this a method, e.g. `receiver("l *exampleListener")`.
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Add a parameter, written as `name type`.
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Add a statement line to the body.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a blank line to the body.
    pub fn blank(mut self) -> Self {
        self.body.push(CodeFragment::blank());
        self
    }

    /// Add a comment line to the body.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.body.push(CodeFragment::comment(text));
        self
    }

    /// Add arbitrary fragments (nested blocks, loops) to the body.
    pub fn fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    fn signature(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| format!("({}) ", r))
            .unwrap_or_default();
        let returns = self
            .returns
            .as_ref()
            .map(|r| format!(" {}", r))
            .unwrap_or_default();
        format!(
            "func {}{}({}){}",
            receiver,
            self.name,
            self.params.join(", "),
            returns
        )
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .doc
            .iter()
            .map(|line| CodeFragment::comment(line.as_str()))
            .collect();

        if self.body.is_empty() {
            fragments.push(CodeFragment::line(format!("{} {{}}", self.signature())));
        } else {
            fragments.push(CodeFragment::braced(
                format!("{} {{", self.signature()),
                self.body.clone(),
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use g4make_codegen::CodeBuilder;

    use super::*;

    fn render(func: &Func) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(func);
        builder.build()
    }

    #[test]
    fn test_simple_function() {
        let func = Func::new("Example").line("return");
        assert_eq!(render(&func), "func Example() {\n\treturn\n}\n");
    }

    #[test]
    fn test_params_and_returns() {
        let func = Func::new("newCharStream")
            .param("filename string")
            .returns("(antlr.CharStream, error)")
            .line("return nil, nil");
        assert_eq!(
            render(&func),
            "func newCharStream(filename string) (antlr.CharStream, error) {\n\treturn nil, nil\n}\n"
        );
    }

    #[test]
    fn test_method_with_doc() {
        let func = Func::new("EnterEveryRule")
            .doc("EnterEveryRule prints every rule.")
            .receiver("l *exampleListener")
            .param("ctx antlr.ParserRuleContext")
            .line("fmt.Println(ctx.GetText())");
        assert_eq!(
            render(&func),
            "// EnterEveryRule prints every rule.\n\
             func (l *exampleListener) EnterEveryRule(ctx antlr.ParserRuleContext) {\n\
             \tfmt.Println(ctx.GetText())\n\
             }\n"
        );
    }

    #[test]
    fn test_empty_body_is_one_line() {
        let func = Func::new("VisitTerminal")
            .receiver("s *BaseJSONListener")
            .param("node antlr.TerminalNode");
        assert_eq!(
            render(&func),
            "func (s *BaseJSONListener) VisitTerminal(node antlr.TerminalNode) {}\n"
        );
    }

    #[test]
    fn test_body_comments_and_blocks() {
        let func = Func::new("f")
            .comment("Loop forever")
            .fragments([CodeFragment::braced("for {", vec![CodeFragment::line("break")])])
            .blank()
            .line("return");
        assert_eq!(
            render(&func),
            "func f() {\n\t// Loop forever\n\tfor {\n\t\tbreak\n\t}\n\n\treturn\n}\n"
        );
    }
}
