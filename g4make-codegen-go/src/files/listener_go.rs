use std::path::{Path, PathBuf};

use g4make_codegen::CodeFragment;
use g4make_core::title;

use super::GoTemplate;
use crate::{
    GoFile, RenderError,
    ast::{Func, Interface, Method, Struct},
    error::require_identifier,
    features::ANTLR_RUNTIME,
};

const TEMPLATE: &str = "listener";

/// The `<grammar>_listener.go` file: a listener interface with an
/// `Enter`/`Exit` pair for every parser rule.
#[derive(Debug, Clone)]
pub struct ListenerGo {
    package_name: String,
    grammar_name: String,
    rules: Vec<String>,
}

impl ListenerGo {
    pub fn new(
        package_name: impl Into<String>,
        grammar_name: impl Into<String>,
        rules: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            grammar_name: grammar_name.into(),
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    /// The no-op implementation of this listener.
    pub fn base(&self) -> BaseListenerGo<'_> {
        BaseListenerGo { listener: self }
    }

    fn listener_name(&self) -> String {
        format!("{}Listener", self.grammar_name)
    }

    fn parser_name(&self) -> String {
        format!("{}Parser", self.grammar_name)
    }

    fn validate(&self) -> Result<(), RenderError> {
        require_identifier(TEMPLATE, "package name", &self.package_name)?;
        require_identifier(TEMPLATE, "grammar name", &self.grammar_name)?;
        if self.rules.is_empty() {
            return Err(RenderError::MissingField {
                template: TEMPLATE,
                field: "rules",
            });
        }
        for rule in &self.rules {
            require_identifier(TEMPLATE, "rule", rule)?;
        }
        Ok(())
    }

    /// Header, package clause and runtime import shared by both files.
    fn go_file(&self) -> GoFile {
        GoFile::new(&self.package_name)
            .header(format!(
                "// Code generated from {}.g4 by g4make. DO NOT EDIT.",
                self.grammar_name
            ))
            .package_comment(&self.grammar_name)
            .import(ANTLR_RUNTIME)
    }

    fn file_stem(&self) -> String {
        self.grammar_name.to_lowercase()
    }
}

/// `(Enter|Exit)<Rule>` and `<Rule>Context` for a rule.
fn rule_names(rule: &str) -> (String, String) {
    let rule = title(rule);
    let context = format!("{rule}Context");
    (rule, context)
}

impl GoTemplate for ListenerGo {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}_listener.go", self.file_stem()))
    }

    fn render(&self) -> Result<String, RenderError> {
        self.validate()?;

        let listener = self.listener_name();
        let mut interface = Interface::new(&listener)
            .doc(format!(
                "{listener} is a complete listener for a parse tree produced by {}.",
                self.parser_name()
            ))
            .embed("antlr.ParseTreeListener");

        for rule in &self.rules {
            let (name, context) = rule_names(rule);
            interface = interface.method(
                Method::new(format!("Enter{name}(c *{context})"))
                    .doc(format!("Enter{name} is called when entering the {rule} production.")),
            );
        }
        for rule in &self.rules {
            let (name, context) = rule_names(rule);
            interface = interface.method(
                Method::new(format!("Exit{name}(c *{context})"))
                    .doc(format!("Exit{name} is called when exiting the {rule} production.")),
            );
        }

        Ok(self.go_file().add(interface).render())
    }
}

/// The `<grammar>_base_listener.go` file: an empty implementation of the
/// listener interface to embed and override selectively.
#[derive(Debug, Clone, Copy)]
pub struct BaseListenerGo<'a> {
    listener: &'a ListenerGo,
}

impl BaseListenerGo<'_> {
    fn base_name(&self) -> String {
        format!("Base{}", self.listener.listener_name())
    }

    fn method(&self, name: &str, param: &str, doc: &str) -> Func {
        Func::new(name)
            .doc(format!("{name} {doc}"))
            .receiver(format!("s *{}", self.base_name()))
            .param(param)
    }
}

impl GoTemplate for BaseListenerGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}_base_listener.go", self.listener.file_stem()))
    }

    fn render(&self) -> Result<String, RenderError> {
        self.listener.validate()?;

        let base = self.base_name();
        let mut file = self
            .listener
            .go_file()
            .add(Struct::new(&base).doc(format!(
                "{base} is a complete listener for a parse tree produced by {}.",
                self.listener.parser_name()
            )))
            .add(CodeFragment::line(format!(
                "var _ {} = &{base}{{}}",
                self.listener.listener_name()
            )))
            .add(self.method(
                "VisitTerminal",
                "node antlr.TerminalNode",
                "is called when a terminal node is visited.",
            ))
            .add(self.method(
                "VisitErrorNode",
                "node antlr.ErrorNode",
                "is called when an error node is visited.",
            ))
            .add(self.method(
                "EnterEveryRule",
                "ctx antlr.ParserRuleContext",
                "is called when any rule is entered.",
            ))
            .add(self.method(
                "ExitEveryRule",
                "ctx antlr.ParserRuleContext",
                "is called when any rule is exited.",
            ));

        for rule in &self.listener.rules {
            let (name, context) = rule_names(rule);
            let param = format!("ctx *{context}");
            file = file
                .add(self.method(
                    &format!("Enter{name}"),
                    &param,
                    &format!("is called when production {rule} is entered."),
                ))
                .add(self.method(
                    &format!("Exit{name}"),
                    &param,
                    &format!("is called when production {rule} is exited."),
                ));
        }

        Ok(file.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brainfuck() -> ListenerGo {
        ListenerGo::new("brainfuck", "brainfuck", ["file", "statement", "opcode"])
    }

    #[test]
    fn test_paths() {
        let listener = ListenerGo::new("json", "JSON", ["json"]);
        assert_eq!(
            listener.path(Path::new("json")),
            PathBuf::from("json/json_listener.go")
        );
        assert_eq!(
            listener.base().path(Path::new("json")),
            PathBuf::from("json/json_base_listener.go")
        );
    }

    #[test]
    fn test_listener_interface() {
        let code = brainfuck().render().unwrap();
        assert!(code.starts_with(
            "// Code generated from brainfuck.g4 by g4make. DO NOT EDIT.\n\
             \n\
             package brainfuck // brainfuck\n\
             \n\
             import \"github.com/antlr/antlr4/runtime/Go/antlr\"\n"
        ));
        assert!(code.contains(
            "// brainfuckListener is a complete listener for a parse tree produced by brainfuckParser.\n\
             type brainfuckListener interface {\n\
             \tantlr.ParseTreeListener\n\
             \n\
             \t// EnterFile is called when entering the file production.\n\
             \tEnterFile(c *FileContext)\n"
        ));
        assert!(code.ends_with(
            "\t// ExitOpcode is called when exiting the opcode production.\n\
             \tExitOpcode(c *OpcodeContext)\n\
             }\n"
        ));
    }

    #[test]
    fn test_enter_methods_precede_exit_methods() {
        let code = brainfuck().render().unwrap();
        let position = |needle: &str| code.find(needle).unwrap();

        assert!(position("EnterFile(") < position("EnterStatement("));
        assert!(position("EnterStatement(") < position("EnterOpcode("));
        assert!(position("EnterOpcode(") < position("ExitFile("));
        assert!(position("ExitFile(") < position("ExitStatement("));
        assert!(position("ExitStatement(") < position("ExitOpcode("));
    }

    #[test]
    fn test_base_listener() {
        let code = ListenerGo::new("json", "JSON", ["json", "value"])
            .base()
            .render()
            .unwrap();
        assert!(code.contains("type BaseJSONListener struct{}\n\nvar _ JSONListener = &BaseJSONListener{}\n"));
        assert!(code.contains(
            "func (s *BaseJSONListener) VisitTerminal(node antlr.TerminalNode) {}\n"
        ));
        assert!(code.contains(
            "// EnterValue is called when production value is entered.\n\
             func (s *BaseJSONListener) EnterValue(ctx *ValueContext) {}\n"
        ));
        assert!(code.contains("func (s *BaseJSONListener) ExitJson(ctx *JsonContext) {}\n"));
    }

    #[test]
    fn test_requires_rules() {
        let listener = ListenerGo::new("json", "JSON", Vec::<String>::new());
        assert_eq!(
            listener.render().unwrap_err(),
            RenderError::MissingField {
                template: "listener",
                field: "rules"
            }
        );
        assert!(listener.base().render().is_err());
    }

    #[test]
    fn test_invalid_rule() {
        let listener = ListenerGo::new("json", "JSON", ["json", "2bad"]);
        assert!(matches!(
            listener.render(),
            Err(RenderError::InvalidIdentifier { field: "rule", .. })
        ));
    }
}
