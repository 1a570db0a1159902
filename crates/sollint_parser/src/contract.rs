//! Structural parser for Solidity source files.
//!
//! [`ContractParser`] recovers the brace-and-semicolon structure of a file:
//! pragma/import statements, contract/library/interface bodies, function and
//! modifier bodies, and `;`-terminated statements, each with faithful byte
//! spans. That is the granularity line-oriented rules attribute findings at.
//!
//! It is deliberately not a grammar-complete Solidity parser: expressions are
//! opaque, and control-flow blocks inside function bodies are not modeled.
//! Comments and string literals are skipped so structural characters inside
//! them do not confuse the scan.

use sollint_ast::{AstArena, NodeKind, SolNode, Span};

use crate::{ParseError, Parser};

/// Structural parser producing statement-granularity syntax trees.
#[derive(Debug, Default)]
pub struct ContractParser;

impl ContractParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl Parser for ContractParser {
    fn name(&self) -> &str {
        "contract"
    }

    fn extensions(&self) -> &[&str] {
        &["sol"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<SolNode<'a>, ParseError> {
        let children = parse_region(arena, source, 0, source.len(), Scope::TopLevel)?;
        Ok(SolNode::new_parent(
            NodeKind::SourceUnit,
            Span::new(0, source.len() as u32),
            children,
        ))
    }
}

/// Which body a region belongs to; decides how bare statements classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    TopLevel,
    ContractBody,
    FunctionBody,
}

impl Scope {
    fn statement_kind(self) -> NodeKind {
        match self {
            Scope::ContractBody => NodeKind::StateVariableDeclaration,
            Scope::TopLevel | Scope::FunctionBody => NodeKind::ExpressionStatement,
        }
    }
}

fn parse_region<'a>(
    arena: &'a AstArena,
    source: &str,
    start: usize,
    end: usize,
    scope: Scope,
) -> Result<&'a [SolNode<'a>], ParseError> {
    let bytes = source.as_bytes();
    let mut nodes: Vec<SolNode<'a>> = Vec::new();
    let mut pos = start;

    'region: loop {
        // Skip whitespace and comments between constructs.
        loop {
            while pos < end && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            if pos >= end {
                break 'region;
            }
            let skipped = skip_comment(source, pos, end)?;
            if skipped == pos {
                break;
            }
            pos = skipped;
        }

        let stmt_start = pos;
        let word = read_word(source, pos, end);

        let node = match word {
            "pragma" => terminated_statement(source, stmt_start, end, NodeKind::PragmaStatement)?,
            "import" => terminated_statement(source, stmt_start, end, NodeKind::ImportStatement)?,
            "contract" => braced_declaration(
                arena,
                source,
                stmt_start,
                end,
                word,
                NodeKind::ContractStatement,
                Scope::ContractBody,
            )?,
            "library" => braced_declaration(
                arena,
                source,
                stmt_start,
                end,
                word,
                NodeKind::LibraryStatement,
                Scope::ContractBody,
            )?,
            "interface" => braced_declaration(
                arena,
                source,
                stmt_start,
                end,
                word,
                NodeKind::InterfaceStatement,
                Scope::ContractBody,
            )?,
            "function" => braced_declaration(
                arena,
                source,
                stmt_start,
                end,
                word,
                NodeKind::FunctionDeclaration,
                Scope::FunctionBody,
            )?,
            "modifier" => braced_declaration(
                arena,
                source,
                stmt_start,
                end,
                word,
                NodeKind::ModifierDeclaration,
                Scope::FunctionBody,
            )?,
            _ => terminated_statement(source, stmt_start, end, scope.statement_kind())?,
        };

        pos = node.span.end as usize;
        nodes.push(node);
    }

    Ok(arena.alloc_slice(&nodes))
}

/// Parses a `;`-terminated construct starting at `start`.
fn terminated_statement<'a>(
    source: &str,
    start: usize,
    end: usize,
    kind: NodeKind,
) -> Result<SolNode<'a>, ParseError> {
    match find_first_of(source, start, end, b";")? {
        Some(semi) => Ok(SolNode::new(kind, Span::new(start as u32, semi as u32 + 1))),
        None => Err(ParseError::invalid_source_at(
            "statement is missing a terminating `;`",
            start,
        )),
    }
}

/// Parses a named construct with a braced body (or a `;`-terminated
/// body-less form, as in abstract functions).
fn braced_declaration<'a>(
    arena: &'a AstArena,
    source: &str,
    start: usize,
    end: usize,
    keyword: &str,
    kind: NodeKind,
    body_scope: Scope,
) -> Result<SolNode<'a>, ParseError> {
    let bytes = source.as_bytes();

    let mut name_pos = start + keyword.len();
    while name_pos < end && bytes[name_pos].is_ascii_whitespace() {
        name_pos += 1;
    }
    let name_word = read_word(source, name_pos, end);
    let name = if name_word.is_empty() {
        None
    } else {
        Some(arena.alloc_str(name_word))
    };

    let node = match find_first_of(source, start, end, b"{;")? {
        Some(open) if bytes[open] == b'{' => {
            let close = find_matching_brace(source, open, end)?;
            let children = parse_region(arena, source, open + 1, close, body_scope)?;
            SolNode::new_parent(kind, Span::new(start as u32, close as u32 + 1), children)
        }
        Some(semi) => SolNode::new(kind, Span::new(start as u32, semi as u32 + 1)),
        None => {
            return Err(ParseError::invalid_source_at(
                format!("`{keyword}` declaration has no body"),
                start,
            ));
        }
    };

    Ok(match name {
        Some(name) => node.named(name),
        None => node,
    })
}

/// Reads an identifier-shaped word at `pos`; empty if none starts there.
fn read_word(source: &str, pos: usize, end: usize) -> &str {
    let bytes = source.as_bytes();
    let mut p = pos;
    while p < end && (bytes[p].is_ascii_alphanumeric() || bytes[p] == b'_' || bytes[p] == b'$') {
        p += 1;
    }
    &source[pos..p]
}

/// Finds the first of `targets` at or after `pos`, skipping comments and
/// string literals.
fn find_first_of(
    source: &str,
    mut pos: usize,
    end: usize,
    targets: &[u8],
) -> Result<Option<usize>, ParseError> {
    let bytes = source.as_bytes();
    while pos < end {
        let skipped = skip_opaque(source, pos, end)?;
        if skipped != pos {
            pos = skipped;
            continue;
        }
        if targets.contains(&bytes[pos]) {
            return Ok(Some(pos));
        }
        pos += 1;
    }
    Ok(None)
}

/// Finds the `}` matching the `{` at `open`, skipping comments and strings.
fn find_matching_brace(source: &str, open: usize, end: usize) -> Result<usize, ParseError> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut pos = open;
    while pos < end {
        let skipped = skip_opaque(source, pos, end)?;
        if skipped != pos {
            pos = skipped;
            continue;
        }
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(pos);
                }
            }
            _ => {}
        }
        pos += 1;
    }
    Err(ParseError::invalid_source_at("unbalanced braces", open))
}

fn skip_opaque(source: &str, pos: usize, end: usize) -> Result<usize, ParseError> {
    let skipped = skip_comment(source, pos, end)?;
    if skipped != pos {
        return Ok(skipped);
    }
    skip_string(source, pos, end)
}

fn skip_comment(source: &str, pos: usize, end: usize) -> Result<usize, ParseError> {
    let bytes = source.as_bytes();
    if bytes[pos] != b'/' || pos + 1 >= end {
        return Ok(pos);
    }
    match bytes[pos + 1] {
        b'/' => {
            let mut p = pos + 2;
            while p < end && bytes[p] != b'\n' {
                p += 1;
            }
            Ok(p)
        }
        b'*' => {
            let mut p = pos + 2;
            while p + 1 < end {
                if bytes[p] == b'*' && bytes[p + 1] == b'/' {
                    return Ok(p + 2);
                }
                p += 1;
            }
            Err(ParseError::invalid_source_at("unterminated block comment", pos))
        }
        _ => Ok(pos),
    }
}

fn skip_string(source: &str, pos: usize, end: usize) -> Result<usize, ParseError> {
    let bytes = source.as_bytes();
    let quote = bytes[pos];
    if quote != b'"' && quote != b'\'' {
        return Ok(pos);
    }
    let mut p = pos + 1;
    while p < end {
        match bytes[p] {
            b'\\' => p += 2,
            q if q == quote => return Ok(p + 1),
            _ => p += 1,
        }
    }
    Err(ParseError::invalid_source_at("unterminated string literal", pos))
}
