//! Integration tests for symdoc-javascript

use std::fs;
use std::path::Path;

use symdoc_extractor_api::{Extraction, Modifier, SymbolKind};
use symdoc_javascript::JavaScriptExtractor;
use symdoc_javascript::{ExtractorConfig, Language, SourceUnit, SymbolExtractor};

fn fixtures_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

fn load_unit(name: &str) -> SourceUnit {
    let text = fs::read_to_string(fixtures_path().join(name)).unwrap();
    SourceUnit::new(Language::Javascript, text, name)
}

fn extract_with(name: &str, config: ExtractorConfig) -> Extraction {
    let extractor = JavaScriptExtractor::with_config(config);
    extractor.extract_unit(&load_unit(name)).unwrap()
}

#[test]
fn test_module_fixture_shapes() {
    let extraction = extract_with("module.js", ExtractorConfig::default());
    let registry = &extraction.registry;

    assert!(!extraction.truncated);
    // formatName, renderRow, handler, EventBus + 2 methods
    assert_eq!(extraction.symbol_count(), 6);

    let format = registry.by_qualified_name("formatName").unwrap();
    assert_eq!(format.kind, SymbolKind::Function);
    assert!(format.modifiers.contains(Modifier::Exported));
    assert_eq!(format.doc, "Format a display name from its parts.");
    assert_eq!(format.parameters.len(), 3);
    assert!(format.parameters[2].has_default);
    assert_eq!(format.parameters[2].default_text.as_deref(), Some("' '"));

    let row = registry.by_qualified_name("renderRow").unwrap();
    // Lowercase arrow binding stays a function
    assert_eq!(row.kind, SymbolKind::Function);
    assert_eq!(row.parameters[0].name, "{ id, label }");
    assert_eq!(row.doc, "Arrow binding with a destructured parameter");

    let handler = registry.by_qualified_name("handler").unwrap();
    assert_eq!(handler.kind, SymbolKind::Function);
    assert!(handler.modifiers.is_empty());
}

#[test]
fn test_trailing_default_export_class() {
    let extraction = extract_with("module.js", ExtractorConfig::default());
    let registry = &extraction.registry;

    let bus = registry.by_qualified_name("EventBus").unwrap();
    assert_eq!(bus.kind, SymbolKind::Class);
    assert!(bus.modifiers.contains(Modifier::DefaultExport));

    let shared = registry.by_qualified_name("EventBus.shared").unwrap();
    assert_eq!(shared.kind, SymbolKind::Method);
    assert!(shared.modifiers.contains(Modifier::Static));
}

#[test]
fn test_suite_suppressed_by_default() {
    let extraction = extract_with("suite.js", ExtractorConfig::default());
    assert_eq!(extraction.symbol_count(), 0);
    assert!(extraction.errors.is_empty());
}

#[test]
fn test_suite_extracted_when_enabled() {
    let config = ExtractorConfig {
        include_test_callbacks: true,
        ..Default::default()
    };
    let extraction = extract_with("suite.js", config);
    let registry = &extraction.registry;

    assert_eq!(extraction.symbol_count(), 2);

    let suite = registry
        .by_qualified_name("when the clown sleeps, the giraffe is awake")
        .unwrap();
    assert_eq!(suite.kind, SymbolKind::Function);

    // Nested by call structure: the wrapped it() hangs off the describe
    let case = registry
        .by_qualified_name(
            "when the clown sleeps, the giraffe is awake.Only cowards run from the circus",
        )
        .unwrap();
    assert_eq!(case.kind, SymbolKind::Function);
    assert_eq!(registry.parent_of(case).unwrap().qualified_name, suite.qualified_name);
}

#[test]
fn test_truncated_unit_partial_extraction() {
    let extractor = JavaScriptExtractor::new();
    let source = "function ok() {}\nconst s = 'unterminated";
    let unit = SourceUnit::new(Language::Javascript, source, "broken.js");

    let extraction = extractor.extract_unit(&unit).unwrap();
    assert!(extraction.truncated);
    assert!(!extraction.errors.is_empty());
    assert!(extraction.registry.by_qualified_name("ok").is_some());
}

#[test]
fn test_batch_extraction() {
    let extractor = JavaScriptExtractor::new();
    let units = vec![load_unit("module.js"), load_unit("suite.js")];

    let batch = extractor.extract_units(&units);
    assert_eq!(batch.total_units(), 2);
    assert_eq!(batch.failed_units.len(), 0);
    assert_eq!(batch.total_symbols, 6);
}

#[test]
fn test_symbols_serialize() {
    let extraction = extract_with("module.js", ExtractorConfig::default());
    let json = serde_json::to_string(&extraction.registry).unwrap();
    assert!(json.contains("\"qualified_name\":\"formatName\""));
    assert!(json.contains("\"exported\""));
}
