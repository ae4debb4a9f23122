//! Top-level declarations: `import` and `fun`.

use std::rc::Rc;

use lull_diagnostic::{ErrorKind, ScriptError, ScriptResult};
use lull_ir::{Function, ImportDecl, TokenKind};

use crate::{ParseOutput, Parser};

impl Parser<'_> {
    /// Parse items until end of input.
    pub fn parse_program(&mut self) -> ScriptResult<ParseOutput> {
        let mut output = ParseOutput::default();
        while !self.cursor.is_at_end() {
            match self.current_kind() {
                TokenKind::Import => {
                    let import = self.parse_import(&output.imports)?;
                    output.imports.push(import);
                }
                TokenKind::Fun => {
                    let function = self.parse_function(&output)?;
                    output
                        .functions
                        .insert(function.name.clone(), Rc::new(function));
                }
                _ => {
                    return Err(self.error(ErrorKind::ExpectedItem {
                        found: self.found(),
                    }))
                }
            }
        }
        Ok(output)
    }

    /// `import module.name [as alias]`, positioned at `name`.
    fn parse_import(&mut self, seen: &[ImportDecl]) -> ScriptResult<ImportDecl> {
        self.expect(TokenKind::Import)?;
        let module = self.expect_ident()?;
        if !self.check(TokenKind::Dot) {
            return Err(self.error(ErrorKind::MalformedImport {
                found: self.found(),
            }));
        }
        self.advance()?;
        let name = self.expect_ident()?;

        let alias = if self.eat(TokenKind::As)? {
            let alias = self.expect_ident()?;
            if alias.text == name.text {
                return Err(ScriptError::new(
                    ErrorKind::AliasSameAsName { name: alias.text },
                    alias.position,
                ));
            }
            alias.text
        } else {
            name.text.clone()
        };

        let import = ImportDecl {
            module: module.text,
            name: name.text,
            alias,
            position: name.position,
        };
        if seen.iter().any(|prior| prior.is_redundant_with(&import)) {
            return Err(ScriptError::new(
                ErrorKind::DuplicateImport {
                    module: import.module,
                    name: import.name,
                },
                import.position,
            ));
        }
        Ok(import)
    }

    /// `fun name(params) { body }`, positioned at `name`.
    fn parse_function(&mut self, output: &ParseOutput) -> ScriptResult<Function> {
        self.expect(TokenKind::Fun)?;
        let name = self.expect_ident()?;
        if output.functions.contains_key(&name.text) {
            return Err(ScriptError::new(
                ErrorKind::DuplicateFunction { name: name.text },
                name.position,
            ));
        }

        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            params.push(self.expect_ident()?.text);
            while self.eat(TokenKind::Comma)? {
                params.push(self.expect_ident()?.text);
            }
        }
        self.expect(TokenKind::RParen)?;

        let body = self.parse_block()?;
        Ok(Function {
            name: name.text,
            params,
            body,
            position: name.position,
        })
    }
}
