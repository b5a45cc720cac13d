//! Recursive-descent parser for XDR interface definitions.
//!
//! Accepts the RFC 4506 language plus RFC 5531 program blocks and produces
//! the declaration model in [`crate::types`].

use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::program::{ProcedureDef, ProgramDef, VersionDef};
use crate::types::{Arm, ConstDef, Decl, EnumDef, EnumTag, Qualifier, StructDef, Symbol, UnionDef};

/// Parses XDR source text into top-level symbols, in source order.
///
/// # Errors
/// Returns `ParseError` on lexical or grammar errors.
pub fn parse_xdr(source: &str) -> Result<Vec<Symbol>, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    let mut parser = Parser { tokens, pos: 0 };

    let mut symbols = Vec::new();
    while !parser.at_eof() {
        symbols.push(parser.parse_definition()?);
    }
    Ok(symbols)
}

/// Parser state over a token stream ending in `Eof`.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn at_eof(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Returns the current token and moves past it. Never moves past `Eof`.
    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn error_at(token: &Token, expected: &str) -> ParseError {
        if token.kind == TokenKind::Eof {
            ParseError::UnexpectedEof {
                expected: expected.to_string(),
            }
        } else {
            ParseError::unexpected(token.line, token.column, expected, token.kind.to_string())
        }
    }

    fn error(&self, expected: &str) -> ParseError {
        Self::error_at(self.peek(), expected)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error(&kind.to_string()))
        }
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(&self.peek().kind, TokenKind::Ident(word) if word == keyword)
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.peek_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error(&format!("'{keyword}'")))
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<String, ParseError> {
        match &self.peek().kind {
            TokenKind::Ident(word) if !is_reserved(word) => {
                let word = word.clone();
                self.advance();
                Ok(word)
            }
            _ => Err(self.error(what)),
        }
    }

    /// Parses a constant or identifier value.
    fn parse_value(&mut self) -> Result<String, ParseError> {
        match &self.peek().kind {
            TokenKind::Number(n) => {
                let n = n.clone();
                self.advance();
                Ok(n)
            }
            TokenKind::Ident(word) if !is_reserved(word) => {
                let word = word.clone();
                self.advance();
                Ok(word)
            }
            _ => Err(self.error("constant or identifier")),
        }
    }

    fn parse_definition(&mut self) -> Result<Symbol, ParseError> {
        let token = self.advance();
        let TokenKind::Ident(keyword) = &token.kind else {
            return Err(Self::error_at(&token, "definition"));
        };

        let symbol = match keyword.as_str() {
            "const" => {
                let id = self.expect_ident("constant name")?;
                self.expect(&TokenKind::Equals)?;
                let value = self.parse_value()?;
                Symbol::Const(ConstDef { id, value })
            }
            "typedef" => {
                let decl = self.parse_declaration()?;
                if decl.is_void() {
                    return Err(Self::error_at(&token, "non-void typedef"));
                }
                Symbol::Typedef(decl)
            }
            "enum" => {
                let id = self.expect_ident("enum name")?;
                let tags = self.parse_enum_body()?;
                Symbol::Enum(EnumDef { id, tags })
            }
            "struct" => {
                let id = self.expect_ident("struct name")?;
                let fields = self.parse_struct_body()?;
                Symbol::Struct(StructDef { id, fields })
            }
            "union" => {
                let id = self.expect_ident("union name")?;
                Symbol::Union(self.parse_union_body(id)?)
            }
            "program" => Symbol::Program(self.parse_program()?),
            _ => return Err(Self::error_at(&token, "definition")),
        };

        self.expect(&TokenKind::Semicolon)?;
        Ok(symbol)
    }

    fn parse_enum_body(&mut self) -> Result<Vec<EnumTag>, ParseError> {
        self.expect(&TokenKind::LeftBrace)?;
        let mut tags = Vec::new();
        loop {
            let id = self.expect_ident("enum tag")?;
            self.expect(&TokenKind::Equals)?;
            let value = self.parse_value()?;
            tags.push(EnumTag { id, value });
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightBrace)?;
        Ok(tags)
    }

    fn parse_struct_body(&mut self) -> Result<Vec<Decl>, ParseError> {
        self.expect(&TokenKind::LeftBrace)?;
        let mut fields = Vec::new();
        loop {
            let decl = self.parse_declaration()?;
            self.expect(&TokenKind::Semicolon)?;
            if !decl.is_void() {
                fields.push(decl);
            }
            if self.eat(&TokenKind::RightBrace) {
                return Ok(fields);
            }
        }
    }

    fn parse_union_body(&mut self, id: String) -> Result<UnionDef, ParseError> {
        self.expect_keyword("switch")?;
        self.expect(&TokenKind::LeftParen)?;
        let start = self.peek().clone();
        let tag = self.parse_declaration()?;
        if tag.is_void() || tag.is_inline() || tag.qualifier != Qualifier::Scalar {
            return Err(ParseError::unsupported(
                start.line,
                start.column,
                "union discriminant",
            ));
        }
        self.expect(&TokenKind::RightParen)?;
        self.expect(&TokenKind::LeftBrace)?;

        let mut union = UnionDef {
            id,
            tag_id: tag.id,
            tag_type: tag.type_name,
            ..UnionDef::default()
        };

        loop {
            if self.eat_keyword("default") {
                self.expect(&TokenKind::Colon)?;
                let decl = self.parse_declaration()?;
                self.expect(&TokenKind::Semicolon)?;
                union.has_default = true;
                union.arms.push(Arm {
                    cases: Vec::new(),
                    is_default: true,
                    decl,
                });
            } else if self.peek_keyword("case") {
                let mut cases = Vec::new();
                while self.eat_keyword("case") {
                    cases.push(self.parse_value()?);
                    self.expect(&TokenKind::Colon)?;
                }
                let decl = self.parse_declaration()?;
                self.expect(&TokenKind::Semicolon)?;
                union.arms.push(Arm {
                    cases,
                    is_default: false,
                    decl,
                });
            } else if !union.arms.is_empty() && self.eat(&TokenKind::RightBrace) {
                return Ok(union);
            } else {
                return Err(self.error("'case' or 'default'"));
            }
        }
    }

    /// Parses one declaration (struct field, typedef body, union arm).
    fn parse_declaration(&mut self) -> Result<Decl, ParseError> {
        if self.eat_keyword("void") {
            return Ok(Decl::void());
        }

        if self.eat_keyword("opaque") {
            let id = self.expect_ident("field name")?;
            let qualifier = if self.eat(&TokenKind::LeftBracket) {
                Qualifier::Array
            } else if self.eat(&TokenKind::LeftAngle) {
                Qualifier::Vec
            } else {
                return Err(self.error("'[' or '<'"));
            };
            let bound = self.parse_bound(qualifier)?;
            return Ok(Decl::new(id, "opaque")
                .with_qualifier(qualifier)
                .with_bound(bound));
        }

        if self.eat_keyword("string") {
            let id = self.expect_ident("field name")?;
            self.expect(&TokenKind::LeftAngle)?;
            let bound = self.parse_bound(Qualifier::Vec)?;
            return Ok(Decl::new(id, "string").with_bound(bound));
        }

        let (type_name, inline) = self.parse_type_spec()?;
        let mut decl = Decl {
            type_name,
            inline,
            ..Decl::default()
        };

        if self.eat(&TokenKind::Star) {
            decl.id = self.expect_ident("field name")?;
            decl.qualifier = Qualifier::Ptr;
            return Ok(decl);
        }

        decl.id = self.expect_ident("field name")?;
        if self.eat(&TokenKind::LeftBracket) {
            decl.qualifier = Qualifier::Array;
        } else if self.eat(&TokenKind::LeftAngle) {
            decl.qualifier = Qualifier::Vec;
        } else {
            return Ok(decl);
        }
        decl.bound = self.parse_bound(decl.qualifier)?;
        Ok(decl)
    }

    /// Parses the length after `[` or `<`, including the closing bracket.
    ///
    /// Fixed arrays require a length; variable ones may leave it empty.
    fn parse_bound(&mut self, qualifier: Qualifier) -> Result<String, ParseError> {
        if qualifier == Qualifier::Array {
            let bound = self.parse_value()?;
            self.expect(&TokenKind::RightBracket)?;
            return Ok(bound);
        }
        if self.eat(&TokenKind::RightAngle) {
            return Ok(String::new());
        }
        let bound = self.parse_value()?;
        self.expect(&TokenKind::RightAngle)?;
        Ok(bound)
    }

    /// Parses a type specifier, returning the type name or an inline body.
    fn parse_type_spec(&mut self) -> Result<(String, Option<Box<Symbol>>), ParseError> {
        let token = self.advance();
        let TokenKind::Ident(word) = &token.kind else {
            return Err(Self::error_at(&token, "type"));
        };

        let name = match word.as_str() {
            "unsigned" => {
                if self.eat_keyword("hyper") {
                    "unsigned hyper".to_string()
                } else {
                    self.eat_keyword("int");
                    "unsigned int".to_string()
                }
            }
            "int" | "hyper" | "float" | "double" | "bool" => word.clone(),
            "quadruple" => {
                return Err(ParseError::unsupported(
                    token.line,
                    token.column,
                    "type 'quadruple'",
                ));
            }
            "enum" => {
                if self.peek().kind == TokenKind::LeftBrace {
                    let tags = self.parse_enum_body()?;
                    let inline = Symbol::Enum(EnumDef {
                        id: String::new(),
                        tags,
                    });
                    return Ok((String::new(), Some(Box::new(inline))));
                }
                self.expect_ident("enum name")?
            }
            "struct" => {
                if self.peek().kind == TokenKind::LeftBrace {
                    let fields = self.parse_struct_body()?;
                    let inline = Symbol::Struct(StructDef {
                        id: String::new(),
                        fields,
                    });
                    return Ok((String::new(), Some(Box::new(inline))));
                }
                self.expect_ident("struct name")?
            }
            "union" => {
                if self.peek_keyword("switch") {
                    let inline = Symbol::Union(self.parse_union_body(String::new())?);
                    return Ok((String::new(), Some(Box::new(inline))));
                }
                self.expect_ident("union name")?
            }
            w if is_reserved(w) => return Err(Self::error_at(&token, "type")),
            w => w.to_string(),
        };
        Ok((name, None))
    }

    fn parse_program(&mut self) -> Result<ProgramDef, ParseError> {
        let id = self.expect_ident("program name")?;
        self.expect(&TokenKind::LeftBrace)?;
        let mut versions = Vec::new();
        loop {
            versions.push(self.parse_version()?);
            if self.eat(&TokenKind::RightBrace) {
                break;
            }
        }
        self.expect(&TokenKind::Equals)?;
        let number = self.parse_value()?;

        let mut program = ProgramDef::new(id, number);
        program.versions = versions;
        Ok(program)
    }

    fn parse_version(&mut self) -> Result<VersionDef, ParseError> {
        self.expect_keyword("version")?;
        let id = self.expect_ident("version name")?;
        self.expect(&TokenKind::LeftBrace)?;
        let mut procedures = Vec::new();
        loop {
            procedures.push(self.parse_procedure()?);
            if self.eat(&TokenKind::RightBrace) {
                break;
            }
        }
        self.expect(&TokenKind::Equals)?;
        let number = self.parse_value()?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(VersionDef {
            id,
            number,
            procedures,
        })
    }

    fn parse_procedure(&mut self) -> Result<ProcedureDef, ParseError> {
        let result = self.parse_procedure_type()?;
        let id = self.expect_ident("procedure name")?;
        self.expect(&TokenKind::LeftParen)?;
        let mut args = Vec::new();
        loop {
            args.push(self.parse_procedure_type()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        self.expect(&TokenKind::Equals)?;
        let number = self.parse_value()?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(ProcedureDef {
            id,
            number,
            result,
            args,
        })
    }

    fn parse_procedure_type(&mut self) -> Result<String, ParseError> {
        if self.eat_keyword("void") {
            return Ok("void".to_string());
        }
        let start = self.peek().clone();
        match self.parse_type_spec()? {
            (name, None) => Ok(name),
            (_, Some(_)) => Err(ParseError::unsupported(
                start.line,
                start.column,
                "inline type in procedure",
            )),
        }
    }
}

/// Words that cannot be used as identifiers.
fn is_reserved(word: &str) -> bool {
    matches!(
        word,
        "bool"
            | "case"
            | "const"
            | "default"
            | "double"
            | "quadruple"
            | "enum"
            | "float"
            | "hyper"
            | "int"
            | "opaque"
            | "string"
            | "struct"
            | "switch"
            | "typedef"
            | "union"
            | "unsigned"
            | "void"
            | "program"
            | "version"
    )
}
