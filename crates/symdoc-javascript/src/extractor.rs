//! CST extraction for JavaScript source code

use symdoc_extractor_api::{ExtractError, ExtractorConfig, RawUnit, SourceUnit};
use tree_sitter::Parser;

use crate::visitor::JavaScriptVisitor;

/// Extract raw declarations from one JavaScript source unit.
///
/// Error or missing nodes in the tree never reject the unit; the
/// declarations that did parse are kept and the unit is flagged
/// truncated.
pub fn extract(unit: &SourceUnit, config: &ExtractorConfig) -> Result<RawUnit, ExtractError> {
    let mut parser = Parser::new();
    let language = tree_sitter_javascript::language();
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

    let mut visitor = JavaScriptVisitor::new(&unit.text, config.clone());
    visitor.visit_node(root_node);
    visitor.finish();

    Ok(RawUnit {
        declarations: visitor.declarations,
        truncated: root_node.has_error(),
    })
}
