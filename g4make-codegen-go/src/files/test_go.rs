use std::path::{Path, PathBuf};

use g4make_codegen::{CodeFragment, Renderable};
use g4make_core::title;
use g4make_project::{CaseFolding, Project};

use super::{COPYRIGHT, GoTemplate, TemplateData};
use crate::{
    Features, GoFile, RenderError,
    ast::{Const, Func, Struct, Var},
    error::require_identifier,
};

const TEMPLATE: &str = "test";

/// Upper bound on tokens read from one example before the lexer is assumed
/// to be stuck.
pub const MAX_TOKENS: u32 = 1_000_000;

/// The `<pkg>_test.go` smoke test run against the grammar's example inputs.
#[derive(Debug, Clone)]
pub struct TestGo<'a> {
    package_name: &'a str,
    import_path: String,
    module: &'a str,
    project: &'a Project,
    features: Features,
}

impl<'a> TestGo<'a> {
    pub fn new(data: &'a TemplateData<'a>) -> Result<Self, RenderError> {
        let project = data
            .project
            .ok_or(RenderError::MissingProject { template: TEMPLATE })?;
        Ok(Self {
            package_name: &data.package_name,
            import_path: data.import_path(),
            module: &data.module,
            project,
            features: Features::of(project),
        })
    }

    fn validate(&self) -> Result<(), RenderError> {
        require_identifier(TEMPLATE, "package name", self.package_name)?;
        require_identifier(TEMPLATE, "lexer name", &self.project.lexer_name)?;
        if self.features.parser {
            require_identifier(TEMPLATE, "parser name", &self.project.parser_name)?;
            require_identifier(TEMPLATE, "listener name", &self.project.listener_name)?;
            require_identifier(TEMPLATE, "entry point", &self.project.entry_point)?;
        }
        Ok(())
    }

    /// Grammar name used in the package documentation.
    fn display_name(&self) -> &str {
        if self.project.long_name.is_empty() {
            self.package_name
        } else {
            &self.project.long_name
        }
    }

    fn new_lexer(&self, input: &str) -> String {
        format!(
            "lexer := {}.New{}({input})",
            self.package_name, self.project.lexer_name
        )
    }

    fn new_parser(&self) -> String {
        format!(
            "p := {}.New{}(stream)",
            self.package_name, self.project.parser_name
        )
    }

    fn entry_rule(&self) -> String {
        format!("p.{}()", title(&self.project.entry_point))
    }

    fn example_listener(&self) -> Vec<CodeFragment> {
        let listener = Struct::new("exampleListener").field(format!(
            "*{}.Base{}",
            self.package_name, self.project.listener_name
        ));
        let enter = Func::new("EnterEveryRule")
            .receiver("l *exampleListener")
            .param("ctx antlr.ParserRuleContext")
            .line("fmt.Println(ctx.GetText())");

        let mut fragments = listener.to_fragments();
        fragments.push(CodeFragment::blank());
        fragments.extend(enter.to_fragments());
        fragments
    }

    fn example(&self) -> Func {
        const TEXT: &str = "\"...some text to parse...\"";

        let func = match self.features.case {
            CaseFolding::Upper => Func::new("Example")
                .comment("Setup the input (which this parser expects to be uppercased).")
                .line(format!("is := antlr.NewInputStream(strings.ToUpper({TEXT}))")),
            CaseFolding::Lower => Func::new("Example")
                .comment("Setup the input (which this parser expects to be lowercased).")
                .line(format!("is := antlr.NewInputStream(strings.ToLower({TEXT}))")),
            CaseFolding::None => Func::new("Example")
                .comment("Setup the input")
                .line(format!("is := antlr.NewInputStream({TEXT})")),
        };

        let func = func
            .blank()
            .comment("Create the Lexer")
            .line(self.new_lexer("is"));

        if self.features.parser {
            func.line("stream := antlr.NewCommonTokenStream(lexer, antlr.TokenDefaultChannel)")
                .blank()
                .comment("Create the Parser")
                .line(self.new_parser())
                .line("p.BuildParseTrees = true")
                .line("p.AddErrorListener(antlr.NewDiagnosticErrorListener(true))")
                .blank()
                .comment("Finally walk the tree")
                .line(format!("tree := {}", self.entry_rule()))
                .line("antlr.ParseTreeWalkerDefault.Walk(&exampleListener{}, tree)")
        } else {
            func.blank()
                .comment(format!(
                    "There is no {} Parser so instead use the Lexer to read tokens.",
                    self.package_name
                ))
                .line("tok := lexer.NextToken()")
                .fragments([CodeFragment::braced(
                    "for tok.GetTokenType() != antlr.TokenEOF {",
                    vec![
                        CodeFragment::comment("Do something with the token"),
                        CodeFragment::line("tok = lexer.NextToken()"),
                    ],
                )])
        }
    }

    fn new_char_stream(&self) -> Func {
        let func = Func::new("newCharStream")
            .param("filename string")
            .returns("(antlr.CharStream, error)")
            .line("var input antlr.CharStream")
            .line("input, err := antlr.NewFileStream(filepath.Join(\"..\", filename))")
            .fragments([CodeFragment::braced(
                "if err != nil {",
                vec![CodeFragment::line("return nil, err")],
            )])
            .blank();

        let func = match self.features.case {
            CaseFolding::Upper => func
                .line("input = internal.NewCaseChangingStream(input, true)")
                .blank(),
            CaseFolding::Lower => func
                .line("input = internal.NewCaseChangingStream(input, false)")
                .blank(),
            CaseFolding::None => func,
        };

        func.line("return input, nil")
    }

    /// Opens each example, reporting a failure and moving on when it can't.
    fn open_example() -> Vec<CodeFragment> {
        vec![
            CodeFragment::line("input, err := newCharStream(file)"),
            CodeFragment::braced(
                "if err != nil {",
                vec![
                    CodeFragment::line("t.Errorf(\"Failed to open example file: %s\", err)"),
                    CodeFragment::line("continue"),
                ],
            ),
            CodeFragment::blank(),
            CodeFragment::comment("Create the Lexer"),
        ]
    }

    fn lexer_test(&self) -> Func {
        let mut body = Self::open_example();
        body.extend([
            CodeFragment::line(self.new_lexer("input")),
            CodeFragment::blank(),
            CodeFragment::comment("Try and read all tokens"),
            CodeFragment::line("i := 0"),
            CodeFragment::braced(
                "for ; i < MAX_TOKENS; i++ {",
                vec![
                    CodeFragment::line("tok := lexer.NextToken()"),
                    CodeFragment::braced(
                        "if tok.GetTokenType() == antlr.TokenEOF {",
                        vec![CodeFragment::line("break")],
                    ),
                ],
            ),
            CodeFragment::blank(),
            CodeFragment::comment(
                "If we read too many tokens, then perhaps there is a problem with the lexer.",
            ),
            CodeFragment::braced(
                "if i >= MAX_TOKENS {",
                vec![CodeFragment::line(format!(
                    "t.Errorf(\"New{}(%q) read %d tokens without finding EOF\", file, i)",
                    self.project.lexer_name
                ))],
            ),
        ]);

        Func::new(format!("Test{}", title(&self.project.lexer_name)))
            .param("t *testing.T")
            .fragments([CodeFragment::braced("for _, file := range examples {", body)])
    }

    fn parser_test(&self) -> Func {
        let mut body = Self::open_example();
        body.extend([
            CodeFragment::line(self.new_lexer("input")),
            CodeFragment::line(
                "stream := antlr.NewCommonTokenStream(lexer, antlr.TokenDefaultChannel)",
            ),
            CodeFragment::blank(),
            CodeFragment::comment("Create the Parser"),
            CodeFragment::line(self.new_parser()),
            CodeFragment::line("p.BuildParseTrees = true"),
            CodeFragment::line("p.AddErrorListener(internal.NewTestingErrorListener(t, file))"),
            CodeFragment::blank(),
            CodeFragment::comment("Finally test"),
            CodeFragment::line(self.entry_rule()),
        ]);

        Func::new(format!("Test{}", title(&self.project.parser_name)))
            .param("t *testing.T")
            .fragments([CodeFragment::braced("for _, file := range examples {", body)])
    }
}

impl GoTemplate for TestGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}_test.go", self.package_name))
    }

    fn render(&self) -> Result<String, RenderError> {
        self.validate()?;

        log::debug!(
            "rendering {} test with parser={} case={:?} and {} examples",
            self.import_path,
            self.features.parser,
            self.features.case,
            self.project.examples.len()
        );

        let file = GoFile::new(format!("{}_test", self.package_name))
            .header(COPYRIGHT)
            .doc(format!(
                "Package {}_test contains tests for the {} grammar.",
                self.package_name,
                self.display_name()
            ))
            .doc("The tests should be run with the -timeout flag, to ensure the parser doesn't")
            .doc("get stuck.")
            .doc("")
            .doc("Do not edit this file, it is generated by g4make.")
            .imports(
                self.features
                    .test_imports(self.module, self.package_name),
            )
            .add(Const::new("MAX_TOKENS", MAX_TOKENS.to_string()))
            .add(Var::strings("examples", &self.project.examples))
            .add_if(self.features.parser, || self.example_listener())
            .add(self.example())
            .add(self.new_char_stream())
            .add(self.lexer_test())
            .add_if(self.features.parser, || self.parser_test());

        Ok(file.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json() -> Project {
        let mut project = Project::new("json", "JSON");
        project.entry_point = "json".to_string();
        project.has_parser = true;
        project.examples = vec!["json/examples/example1.json".to_string()];
        project
    }

    fn render(project: &Project) -> Result<String, RenderError> {
        let data = TemplateData::new("json").with_project(project);
        TestGo::new(&data)?.render()
    }

    #[test]
    fn test_missing_project() {
        let data = TemplateData::new("json");
        assert_eq!(
            TestGo::new(&data).unwrap_err(),
            RenderError::MissingProject { template: "test" }
        );
    }

    #[test]
    fn test_path() {
        let project = json();
        let data = TemplateData::new("json").with_project(&project);
        let test = TestGo::new(&data).unwrap();
        assert_eq!(test.path(Path::new("json")), PathBuf::from("json/json_test.go"));
    }

    #[test]
    fn test_entry_rule_is_titled() {
        let code = render(&json()).unwrap();
        assert!(code.contains("\ttree := p.Json()\n"));
        assert!(code.contains("\t\tp.Json()\n"));
    }

    #[test]
    fn test_parser_without_entry_point() {
        let mut project = json();
        project.entry_point.clear();
        assert_eq!(
            render(&project).unwrap_err(),
            RenderError::MissingField {
                template: "test",
                field: "entry point"
            }
        );
    }

    #[test]
    fn test_lexer_only_ignores_parser_names() {
        let mut project = json();
        project.has_parser = false;
        project.entry_point.clear();
        project.parser_name.clear();

        let code = render(&project).unwrap();
        assert!(!code.contains("Parser("));
        assert!(code.contains("There is no json Parser"));
    }

    #[test]
    fn test_invalid_lexer_name() {
        let mut project = json();
        project.lexer_name = "JSON Lexer".to_string();
        assert!(matches!(
            render(&project),
            Err(RenderError::InvalidIdentifier {
                field: "lexer name",
                ..
            })
        ));
    }

    #[test]
    fn test_display_name_falls_back_to_package() {
        let mut project = json();
        project.long_name.clear();
        let code = render(&project).unwrap();
        assert!(code.contains("// Package json_test contains tests for the json grammar.\n"));
    }

    #[test]
    fn test_open_failure_skips_the_example() {
        let code = render(&json()).unwrap();
        assert!(code.contains(
            "\t\t\tt.Errorf(\"Failed to open example file: %s\", err)\n\t\t\tcontinue\n"
        ));
    }
}
