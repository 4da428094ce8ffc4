//! CST extraction for PHP source code

use symdoc_extractor_api::{ExtractError, ExtractorConfig, RawUnit, SourceUnit};
use tree_sitter::Parser;

use crate::visitor::PhpVisitor;

/// Extract raw declarations from one PHP source unit.
///
/// A unit whose tree contains error or missing nodes is not rejected;
/// the declarations that did parse are kept and the unit is flagged
/// truncated.
pub fn extract(unit: &SourceUnit, config: &ExtractorConfig) -> Result<RawUnit, ExtractError> {
    let mut parser = Parser::new();
    let language = tree_sitter_php::language_php();
    parser
        .set_language(&language)
        .map_err(|e| ExtractError::Grammar {
            language: unit.language,
            origin: unit.origin.clone(),
            message: e.to_string(),
        })?;

    let tree = parser
        .parse(&unit.text, None)
        .ok_or_else(|| ExtractError::Parse(unit.origin.clone()))?;

    let root_node = tree.root_node();

    let mut visitor = PhpVisitor::new(&unit.text, config.clone());
    visitor.visit_node(root_node);

    Ok(RawUnit {
        declarations: visitor.declarations,
        truncated: root_node.has_error(),
    })
}
