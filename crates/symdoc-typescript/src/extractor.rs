//! CST extraction for TypeScript/TSX source code

use symdoc_extractor_api::{ExtractError, ExtractorConfig, RawUnit, SourceUnit};
use tree_sitter::Parser;

use crate::visitor::TypeScriptVisitor;

/// Pick the grammar by origin extension: TSX for `.tsx`/`.jsx`, plain
/// TypeScript otherwise. The plain grammar rejects JSX, so the origin
/// has to tell them apart.
fn grammar_for(origin: &str) -> tree_sitter::Language {
    if origin.ends_with(".tsx") || origin.ends_with(".jsx") {
        tree_sitter_typescript::language_tsx()
    } else {
        tree_sitter_typescript::language_typescript()
    }
}

/// Extract raw declarations from one TypeScript source unit.
///
/// Error or missing nodes in the tree never reject the unit; the
/// declarations that did parse are kept and the unit is flagged
/// truncated.
pub fn extract(unit: &SourceUnit, config: &ExtractorConfig) -> Result<RawUnit, ExtractError> {
    let mut parser = Parser::new();
    parser
        .set_language(&grammar_for(&unit.origin))
        .map_err(|e| ExtractError::Grammar {
            language: unit.language,
            origin: unit.origin.clone(),
            message: e.to_string(),
        })?;

    let tree = parser
        .parse(&unit.text, None)
        .ok_or_else(|| ExtractError::Parse(unit.origin.clone()))?;

    let root_node = tree.root_node();

    let mut visitor = TypeScriptVisitor::new(&unit.text, config.clone());
    visitor.visit_node(root_node);
    visitor.finish();

    Ok(RawUnit {
        declarations: visitor.declarations,
        truncated: root_node.has_error(),
    })
}
