//! Parser trait definition.

use sollint_ast::{AstArena, SolNode};

use crate::ParseError;

/// Trait for parsing source text into a syntax tree.
///
/// The lint engine is generic over this trait; any component able to
/// produce [`SolNode`] trees with faithful byte spans can drive the rules.
///
/// # Example
///
/// ```rust,ignore
/// use sollint_parser::Parser;
/// use sollint_ast::AstArena;
///
/// struct MyParser;
///
/// impl Parser for MyParser {
///     fn name(&self) -> &str {
///         "my-parser"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["sol"]
///     }
///
///     fn parse<'a>(
///         &self,
///         arena: &'a AstArena,
///         source: &str,
///     ) -> Result<SolNode<'a>, ParseError> {
///         // Parse implementation
///         todo!()
///     }
/// }
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["sol"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text into a syntax tree.
    ///
    /// # Arguments
    ///
    /// * `arena` - The arena allocator for AST nodes
    /// * `source` - The source text to parse
    ///
    /// # Returns
    ///
    /// The root [`SolNode`] of the parsed tree, or an error if parsing fails.
    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<SolNode<'a>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
