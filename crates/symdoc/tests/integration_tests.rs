//! Integration tests for the symdoc facade

use symdoc::{
    ExtractError, ExtractorConfig, Language, Modifier, SourceUnit, Symdoc, SymbolKind,
};

fn php_unit() -> SourceUnit {
    SourceUnit::new(
        Language::Php,
        "<?php\nnamespace MyApp;\nclass ExampleClass {\n    public function exampleFunction(): int { return 1; }\n}",
        "Example.php",
    )
}

fn tsx_unit() -> SourceUnit {
    SourceUnit::new(
        Language::Typescript,
        "// Main app component\nexport default function App({ title }: AppProps) { return <h1>{title}</h1>; }",
        "App.tsx",
    )
}

fn js_unit() -> SourceUnit {
    SourceUnit::new(
        Language::Javascript,
        "function formatName(first, last) { return first + ' ' + last; }",
        "format.js",
    )
}

#[test]
fn test_mixed_language_batch() {
    let symdoc = Symdoc::new();
    let units = vec![php_unit(), tsx_unit(), js_unit()];

    let batch = symdoc.extract_units(&units);
    assert_eq!(batch.total_units(), 3);
    assert_eq!(batch.failed_units.len(), 0);
    assert_eq!(batch.success_rate(), 1.0);

    // Results keep input order
    assert_eq!(batch.extractions[0].language, Language::Php);
    assert_eq!(batch.extractions[1].language, Language::Typescript);
    assert_eq!(batch.extractions[2].language, Language::Javascript);

    let method = batch.extractions[0]
        .registry
        .by_qualified_name("MyApp\\ExampleClass.exampleFunction")
        .unwrap();
    assert_eq!(method.kind, SymbolKind::Method);
    assert!(method.modifiers.contains(Modifier::Public));

    let app = batch.extractions[1].registry.by_qualified_name("App").unwrap();
    assert!(app.modifiers.contains(Modifier::DefaultExport));
    assert_eq!(app.doc, "Main app component");
}

#[test]
fn test_failed_unit_does_not_block_batch() {
    let symdoc = Symdoc::with_config(ExtractorConfig::default().with_max_unit_size(110));
    let oversized = SourceUnit::new(
        Language::Javascript,
        "x".repeat(128),
        "big.js",
    );
    let units = vec![js_unit(), oversized, php_unit()];

    let batch = symdoc.extract_units(&units);
    assert_eq!(batch.extractions.len(), 2);
    assert_eq!(batch.failed_units.len(), 1);
    assert_eq!(batch.failed_units[0].0, "big.js");
    let origins: Vec<_> = batch.extractions.iter().map(|e| e.origin.as_str()).collect();
    assert_eq!(origins, ["format.js", "Example.php"]);
}

#[test]
fn test_parallel_batch_matches_sequential() {
    let units: Vec<SourceUnit> = (0..16)
        .map(|i| {
            SourceUnit::new(
                Language::Javascript,
                format!("function f{}() {{}}", i),
                format!("f{}.js", i),
            )
        })
        .collect();

    let sequential = Symdoc::new().extract_units(&units);
    let parallel = Symdoc::with_config(ExtractorConfig::default().with_parallel(true))
        .extract_units(&units);

    assert_eq!(sequential.total_symbols, parallel.total_symbols);
    assert_eq!(parallel.failed_units.len(), 0);
    let seq_origins: Vec<_> = sequential.extractions.iter().map(|e| &e.origin).collect();
    let par_origins: Vec<_> = parallel.extractions.iter().map(|e| &e.origin).collect();
    assert_eq!(seq_origins, par_origins);
}

#[test]
fn test_parallel_worker_count() {
    let config = ExtractorConfig {
        parallel: true,
        parallel_workers: Some(2),
        ..Default::default()
    };
    let symdoc = Symdoc::with_config(config);
    let units = vec![php_unit(), tsx_unit(), js_unit()];

    let batch = symdoc.extract_units(&units);
    assert_eq!(batch.extractions.len(), 3);
}

#[test]
fn test_language_mismatch_is_per_unit_failure() {
    let symdoc = Symdoc::new();
    // Tagged PHP but handed to the facade as TypeScript text: the PHP
    // extractor still parses it (tolerantly) since the tag decides routing
    let mistagged = SourceUnit::new(Language::Php, "const x = 1;", "x.ts");
    let extraction = symdoc.extract_unit(&mistagged).unwrap();
    assert_eq!(extraction.symbol_count(), 0);

    // Direct use of a single-language extractor rejects foreign tags
    let err = symdoc
        .extractor_for(Language::Typescript)
        .extract_unit(&mistagged)
        .unwrap_err();
    assert!(matches!(err, ExtractError::LanguageMismatch { .. }));
}

#[test]
fn test_aggregate_metrics() {
    let symdoc = Symdoc::new();
    symdoc.extract_unit(&php_unit()).unwrap();
    symdoc.extract_unit(&tsx_unit()).unwrap();
    symdoc.extract_unit(&js_unit()).unwrap();

    let metrics = symdoc.metrics();
    assert_eq!(metrics.units_attempted, 3);
    assert_eq!(metrics.units_succeeded, 3);
    assert_eq!(metrics.success_rate(), 1.0);
    assert!(metrics.total_symbols >= 4);
}

#[test]
fn test_truncated_unit_in_batch_is_partial_not_failed() {
    let symdoc = Symdoc::new();
    let units = vec![SourceUnit::new(
        Language::Javascript,
        "function ok() {}\nconst s = 'unterminated",
        "partial.js",
    )];

    let batch = symdoc.extract_units(&units);
    assert_eq!(batch.failed_units.len(), 0);
    assert!(batch.extractions[0].truncated);
    assert_eq!(batch.extractions[0].symbol_count(), 1);
}
