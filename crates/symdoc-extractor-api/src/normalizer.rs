//! Normalizer: maps language-specific raw declarations into the unified
//! symbol model.
//!
//! This is the explicit reconciliation layer between the three grammars:
//! modifier vocabulary differences, visibility defaulting, qualified-name
//! construction and the default-implies-optional parameter invariant all
//! live here, so no per-language notion leaks into `Symbol`.

use crate::config::ExtractorConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::raw::{RawDeclaration, RawKind, RawUnit};
use crate::symbol::{Modifier, ModifierSet, ParameterDescriptor, Symbol, SymbolKind};
use crate::traits::Extraction;
use crate::unit::{Language, SourceUnit};
use log::{debug, warn};

/// Normalize one raw declaration into a `Symbol`.
///
/// `enclosing` is the qualified name of the enclosing symbol (class or
/// retained callback), or `None` at top level.
pub fn normalize(
    raw: &RawDeclaration,
    enclosing: Option<&str>,
    language: Language,
    config: &ExtractorConfig,
) -> ExtractResult<Symbol> {
    let qualified_name = match enclosing {
        Some(parent) => format!("{}.{}", parent, raw.name),
        None => raw.name.clone(),
    };

    let modifiers = normalize_modifiers(raw, language)?;
    let kind = normalize_kind(raw);

    let parameters = raw
        .parameters
        .iter()
        .map(|p| ParameterDescriptor {
            name: p.name.clone(),
            type_text: if config.extract_types {
                p.type_text.clone()
            } else {
                None
            },
            nullable: p.nullable,
            has_default: p.default_text.is_some(),
            default_text: p.default_text.clone(),
            // Invariant: a defaulted parameter is always optional
            optional: p.optional || p.default_text.is_some(),
        })
        .collect();

    let return_type = if config.extract_types {
        raw.return_type.clone()
    } else {
        None
    };

    let doc = if config.include_docs {
        raw.doc.clone().unwrap_or_default()
    } else {
        String::new()
    };

    Ok(Symbol {
        qualified_name,
        name: raw.name.clone(),
        kind,
        modifiers,
        parameters,
        return_type,
        doc,
        language,
        span: raw.span,
        truncated: raw.truncated,
    })
}

fn normalize_modifiers(
    raw: &RawDeclaration,
    language: Language,
) -> ExtractResult<ModifierSet> {
    let mut modifiers = ModifierSet::new();

    for token in &raw.modifiers {
        let Some(modifier) = Modifier::from_raw(token) else {
            debug!("dropping modifier token `{}` on `{}`", token, raw.name);
            continue;
        };
        modifiers
            .insert(modifier)
            .map_err(|(first, second)| ExtractError::ConflictingModifiers {
                name: raw.name.clone(),
                first: first.as_str().to_string(),
                second: second.as_str().to_string(),
            })?;
    }

    // PHP declarations default to public; visibility is not a keyword-level
    // concept in TypeScript/JavaScript.
    if language == Language::Php && modifiers.visibility().is_none() {
        // Checked above: no visibility present, insert cannot conflict
        let _ = modifiers.insert(Modifier::Public);
    }

    if raw.default_export {
        let _ = modifiers.insert(Modifier::DefaultExport);
    } else if raw.exported {
        let _ = modifiers.insert(Modifier::Exported);
    }

    Ok(modifiers)
}

fn normalize_kind(raw: &RawDeclaration) -> SymbolKind {
    match raw.kind {
        RawKind::Function => SymbolKind::Function,
        RawKind::Method => SymbolKind::Method,
        RawKind::Class => SymbolKind::Class,
        // Capitalized arrow bindings follow the React component convention
        RawKind::ArrowBinding => {
            if raw.name.chars().next().is_some_and(char::is_uppercase) {
                SymbolKind::Component
            } else {
                SymbolKind::Function
            }
        }
    }
}

/// Normalize a whole raw unit into an `Extraction`, registering symbols in
/// declaration order.
///
/// Duplicates are recorded as recoverable errors (first registration wins;
/// members of an unregistered declaration are not registered). Truncation
/// is carried over from the raw unit as a flag plus a recoverable
/// `TruncatedInput` entry.
pub fn build_extraction(
    raw_unit: &RawUnit,
    unit: &SourceUnit,
    config: &ExtractorConfig,
) -> ExtractResult<Extraction> {
    let mut extraction = Extraction::for_unit(unit);
    extraction.truncated = raw_unit.truncated;
    if raw_unit.truncated {
        warn!("truncated input in {}", unit.origin);
        extraction
            .errors
            .push(ExtractError::TruncatedInput(unit.origin.clone()));
    }

    register_tree(
        &raw_unit.declarations,
        None,
        unit.language,
        config,
        &mut extraction,
    )?;

    Ok(extraction)
}

fn register_tree(
    declarations: &[RawDeclaration],
    enclosing: Option<&str>,
    language: Language,
    config: &ExtractorConfig,
    extraction: &mut Extraction,
) -> ExtractResult<()> {
    for raw in declarations {
        let symbol = normalize(raw, enclosing, language, config)?;

        if config.skip_private && symbol.modifiers.contains(Modifier::Private) {
            debug!("skipping private symbol `{}`", symbol.qualified_name);
            continue;
        }

        let qualified_name = symbol.qualified_name.clone();
        match extraction.registry.register(symbol) {
            Ok(()) => {
                register_tree(
                    &raw.members,
                    Some(&qualified_name),
                    language,
                    config,
                    extraction,
                )?;
            }
            Err(e) => {
                warn!("{} in {}", e, extraction.origin);
                extraction.errors.push(e);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawParameter;
    use crate::symbol::Span;

    fn raw(kind: RawKind, name: &str) -> RawDeclaration {
        RawDeclaration::new(kind, name, Span::default())
    }

    #[test]
    fn test_php_visibility_defaults_to_public() {
        let decl = raw(RawKind::Method, "m");
        let symbol =
            normalize(&decl, Some("C"), Language::Php, &ExtractorConfig::default()).unwrap();
        assert!(symbol.modifiers.contains(Modifier::Public));
        assert_eq!(symbol.qualified_name, "C.m");
    }

    #[test]
    fn test_typescript_gets_no_visibility() {
        let decl = raw(RawKind::Function, "f");
        let symbol = normalize(
            &decl,
            None,
            Language::Typescript,
            &ExtractorConfig::default(),
        )
        .unwrap();
        assert!(symbol.modifiers.visibility().is_none());
    }

    #[test]
    fn test_default_implies_optional() {
        let mut decl = raw(RawKind::Function, "f");
        decl.parameters
            .push(RawParameter::new("$p").with_default("1"));
        let symbol =
            normalize(&decl, None, Language::Php, &ExtractorConfig::default()).unwrap();
        assert!(symbol.parameters[0].has_default);
        assert!(symbol.parameters[0].optional);
    }

    #[test]
    fn test_conflicting_modifiers_rejected() {
        let mut decl = raw(RawKind::Method, "m");
        decl.modifiers = vec!["public".to_string(), "private".to_string()];
        let err = normalize(&decl, None, Language::Php, &ExtractorConfig::default())
            .unwrap_err();
        assert!(matches!(err, ExtractError::ConflictingModifiers { .. }));
    }

    #[test]
    fn test_unknown_modifier_tokens_dropped() {
        let mut decl = raw(RawKind::Method, "m");
        decl.modifiers = vec!["abstract".to_string(), "static".to_string()];
        let symbol =
            normalize(&decl, None, Language::Php, &ExtractorConfig::default()).unwrap();
        assert!(symbol.modifiers.contains(Modifier::Static));
        assert!(symbol.modifiers.contains(Modifier::Public));
        assert_eq!(symbol.modifiers.len(), 2);
    }

    #[test]
    fn test_arrow_binding_component_convention() {
        let card = raw(RawKind::ArrowBinding, "Card");
        let add = raw(RawKind::ArrowBinding, "add");
        let config = ExtractorConfig::default();
        assert_eq!(
            normalize(&card, None, Language::Typescript, &config)
                .unwrap()
                .kind,
            SymbolKind::Component
        );
        assert_eq!(
            normalize(&add, None, Language::Typescript, &config)
                .unwrap()
                .kind,
            SymbolKind::Function
        );
    }

    #[test]
    fn test_default_export_flag() {
        let mut decl = raw(RawKind::Function, "App");
        decl.exported = true;
        decl.default_export = true;
        let symbol = normalize(
            &decl,
            None,
            Language::Typescript,
            &ExtractorConfig::default(),
        )
        .unwrap();
        assert!(symbol.modifiers.contains(Modifier::DefaultExport));
        assert!(!symbol.modifiers.contains(Modifier::Exported));
    }

    #[test]
    fn test_missing_doc_becomes_empty_string() {
        let decl = raw(RawKind::Function, "f");
        let symbol =
            normalize(&decl, None, Language::Javascript, &ExtractorConfig::default()).unwrap();
        assert_eq!(symbol.doc, "");
        assert!(!symbol.has_doc());
    }

    #[test]
    fn test_build_extraction_duplicate_recorded() {
        let unit = SourceUnit::new(Language::Php, "<?php", "dup.php");
        let raw_unit = RawUnit {
            declarations: vec![raw(RawKind::Function, "f"), raw(RawKind::Function, "f")],
            truncated: false,
        };
        let extraction =
            build_extraction(&raw_unit, &unit, &ExtractorConfig::default()).unwrap();
        assert_eq!(extraction.symbol_count(), 1);
        assert_eq!(
            extraction.errors,
            vec![ExtractError::DuplicateSymbol("f".to_string())]
        );
    }

    #[test]
    fn test_build_extraction_nested_members() {
        let unit = SourceUnit::new(Language::Php, "<?php", "c.php");
        let mut class = raw(RawKind::Class, "App\\C");
        class.members.push(raw(RawKind::Method, "m"));
        let raw_unit = RawUnit {
            declarations: vec![class],
            truncated: false,
        };
        let extraction =
            build_extraction(&raw_unit, &unit, &ExtractorConfig::default()).unwrap();
        assert_eq!(extraction.symbol_count(), 2);
        let method = extraction.registry.by_qualified_name("App\\C.m").unwrap();
        assert_eq!(method.kind, SymbolKind::Method);
        assert_eq!(
            extraction.registry.parent_of(method).unwrap().qualified_name,
            "App\\C"
        );
    }

    #[test]
    fn test_build_extraction_truncated_flag() {
        let unit = SourceUnit::new(Language::Javascript, "/* open", "t.js");
        let raw_unit = RawUnit {
            declarations: Vec::new(),
            truncated: true,
        };
        let extraction =
            build_extraction(&raw_unit, &unit, &ExtractorConfig::default()).unwrap();
        assert!(extraction.truncated);
        assert_eq!(
            extraction.errors,
            vec![ExtractError::TruncatedInput("t.js".to_string())]
        );
    }

    #[test]
    fn test_skip_private() {
        let unit = SourceUnit::new(Language::Php, "<?php", "p.php");
        let mut class = raw(RawKind::Class, "C");
        let mut private_method = raw(RawKind::Method, "hidden");
        private_method.modifiers = vec!["private".to_string()];
        class.members.push(private_method);
        class.members.push(raw(RawKind::Method, "visible"));
        let raw_unit = RawUnit {
            declarations: vec![class],
            truncated: false,
        };
        let config = ExtractorConfig {
            skip_private: true,
            ..Default::default()
        };
        let extraction = build_extraction(&raw_unit, &unit, &config).unwrap();
        assert!(extraction.registry.by_qualified_name("C.hidden").is_none());
        assert!(extraction.registry.by_qualified_name("C.visible").is_some());
    }
}
