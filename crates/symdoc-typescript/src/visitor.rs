//! CST visitor for extracting raw TypeScript/TSX declarations

use log::debug;
use symdoc_extractor_api::doc_comment;
use symdoc_extractor_api::{ExtractorConfig, RawDeclaration, RawKind, RawParameter, Span};
use tree_sitter::Node;

/// Export context threaded from an `export_statement` down to the
/// declaration it wraps. `doc_anchor` is the byte offset the doc scanner
/// starts from; for exported declarations the comment sits above the
/// `export` keyword, not the declaration.
#[derive(Clone, Copy, Default)]
struct ExportContext {
    exported: bool,
    default_export: bool,
    doc_anchor: Option<usize>,
}

pub struct TypeScriptVisitor<'a> {
    pub source: &'a str,
    pub config: ExtractorConfig,
    pub declarations: Vec<RawDeclaration>,
    /// Names from trailing `export default Name;` statements, applied
    /// after the walk
    pending_default_exports: Vec<String>,
}

impl<'a> TypeScriptVisitor<'a> {
    pub fn new(source: &'a str, config: ExtractorConfig) -> Self {
        Self {
            source,
            config,
            declarations: Vec::new(),
            pending_default_exports: Vec::new(),
        }
    }

    fn node_text(&self, node: Node) -> String {
        node.utf8_text(self.source.as_bytes())
            .unwrap_or("")
            .to_string()
    }

    pub fn visit_node(&mut self, node: Node) {
        let should_recurse = match node.kind() {
            "export_statement" => {
                self.visit_export(node);
                false
            }
            "function_declaration" => {
                self.visit_function(node, ExportContext::default());
                false // Function bodies are opaque
            }
            "class_declaration" => {
                self.visit_class(node, ExportContext::default());
                false
            }
            "lexical_declaration" | "variable_declaration" => {
                self.visit_variable_declaration(node, ExportContext::default());
                false
            }
            "arrow_function" | "function_expression" | "generator_function" => false,
            _ => true,
        };

        if should_recurse {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                self.visit_node(child);
            }
        }
    }

    /// Apply trailing `export default Name;` statements to the matching
    /// declaration. Call once after the walk.
    pub fn finish(&mut self) {
        for name in std::mem::take(&mut self.pending_default_exports) {
            match self.declarations.iter_mut().find(|d| d.name == name) {
                Some(decl) => {
                    decl.exported = true;
                    decl.default_export = true;
                }
                None => debug!("export default references undeclared `{}`", name),
            }
        }
    }

    fn visit_export(&mut self, node: Node) {
        let context = ExportContext {
            exported: true,
            default_export: node
                .children(&mut node.walk())
                .any(|c| c.kind() == "default"),
            doc_anchor: Some(node.start_byte()),
        };

        if let Some(declaration) = node.child_by_field_name("declaration") {
            match declaration.kind() {
                "function_declaration" => self.visit_function(declaration, context),
                "class_declaration" => self.visit_class(declaration, context),
                "lexical_declaration" | "variable_declaration" => {
                    self.visit_variable_declaration(declaration, context)
                }
                _ => {}
            }
            return;
        }

        // `export default Name;` - the declaration appears elsewhere
        if context.default_export {
            if let Some(value) = node.child_by_field_name("value") {
                if value.kind() == "identifier" {
                    self.pending_default_exports.push(self.node_text(value));
                }
            }
        }
    }

    fn visit_function(&mut self, node: Node, context: ExportContext) {
        let Some(name_node) = node.child_by_field_name("name") else {
            debug!("skipping unnamed function candidate");
            return;
        };

        let mut decl =
            RawDeclaration::new(RawKind::Function, self.node_text(name_node), self.span(node));
        decl.parameters = self.extract_parameters(node);
        decl.return_type = self.extract_return_type(node);
        decl.exported = context.exported;
        decl.default_export = context.default_export;
        decl.doc = self.extract_doc(context.doc_anchor.unwrap_or(node.start_byte()));
        decl.truncated = node.has_error();

        self.declarations.push(decl);
    }

    fn visit_class(&mut self, node: Node, context: ExportContext) {
        let Some(name_node) = node.child_by_field_name("name") else {
            debug!("skipping unnamed class candidate");
            return;
        };

        let mut decl =
            RawDeclaration::new(RawKind::Class, self.node_text(name_node), self.span(node));
        decl.exported = context.exported;
        decl.default_export = context.default_export;
        decl.doc = self.extract_doc(context.doc_anchor.unwrap_or(node.start_byte()));
        decl.truncated = node.has_error();

        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            for child in body.children(&mut cursor) {
                if child.kind() == "method_definition" {
                    if let Some(method) = self.build_method(child) {
                        decl.members.push(method);
                    }
                }
            }
        }

        self.declarations.push(decl);
    }

    fn build_method(&self, node: Node) -> Option<RawDeclaration> {
        let name_node = node.child_by_field_name("name")?;

        let mut decl =
            RawDeclaration::new(RawKind::Method, self.node_text(name_node), self.span(node));
        // `static` is the only modifier keyword carried over; `async`,
        // accessibility annotations and decorators stay out of the model
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "static" {
                decl.modifiers.push("static".to_string());
            }
        }
        decl.parameters = self.extract_parameters(node);
        decl.return_type = self.extract_return_type(node);
        decl.doc = self.extract_doc(node.start_byte());
        decl.truncated = node.has_error();

        Some(decl)
    }

    fn visit_variable_declaration(&mut self, node: Node, context: ExportContext) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() != "variable_declarator" {
                continue;
            }
            let Some(name_node) = child.child_by_field_name("name") else {
                continue;
            };
            // Destructuring bindings are not declaration candidates
            if name_node.kind() != "identifier" {
                continue;
            }
            let Some(value) = child.child_by_field_name("value") else {
                continue;
            };
            if !matches!(value.kind(), "arrow_function" | "function_expression") {
                continue;
            }

            let mut decl = RawDeclaration::new(
                RawKind::ArrowBinding,
                self.node_text(name_node),
                self.span(node),
            );
            decl.parameters = self.extract_parameters(value);
            decl.return_type = self.extract_return_type(value);
            decl.exported = context.exported;
            decl.default_export = context.default_export;
            decl.doc = self.extract_doc(context.doc_anchor.unwrap_or(node.start_byte()));
            decl.truncated = child.has_error();

            self.declarations.push(decl);
        }
    }

    fn extract_parameters(&self, node: Node) -> Vec<RawParameter> {
        let mut params = Vec::new();
        let Some(params_node) = node.child_by_field_name("parameters") else {
            // Single-parameter arrow shorthand: `x => ...`
            if let Some(single) = node.child_by_field_name("parameter") {
                params.push(RawParameter::new(self.node_text(single)));
            }
            return params;
        };

        let mut cursor = params_node.walk();
        for child in params_node.children(&mut cursor) {
            match child.kind() {
                "required_parameter" | "optional_parameter" => {
                    let Some(pattern) = child.child_by_field_name("pattern") else {
                        continue;
                    };
                    // Destructured patterns keep their literal text as
                    // the parameter name
                    let mut param = RawParameter::new(self.node_text(pattern));

                    if child.kind() == "optional_parameter" {
                        param = param.optional();
                    }
                    if let Some(type_node) = child.child_by_field_name("type") {
                        param = param.with_type(self.type_text(type_node));
                    }
                    if let Some(value) = child.child_by_field_name("value") {
                        param = param.with_default(self.node_text(value));
                    }

                    params.push(param);
                }
                "identifier" => {
                    // Untyped JS-style parameter inside a TS unit
                    params.push(RawParameter::new(self.node_text(child)));
                }
                _ => {}
            }
        }
        params
    }

    fn extract_return_type(&self, node: Node) -> Option<String> {
        node.child_by_field_name("return_type")
            .map(|n| self.type_text(n))
    }

    /// Annotation text with the leading `:` stripped; the type itself
    /// stays verbatim and opaque
    fn type_text(&self, node: Node) -> String {
        self.node_text(node)
            .trim_start_matches(':')
            .trim()
            .to_string()
    }

    fn extract_doc(&self, anchor: usize) -> Option<String> {
        if !self.config.include_docs {
            return None;
        }
        doc_comment::scan(self.source, anchor)
    }

    fn span(&self, node: Node) -> Span {
        Span::new(
            node.start_position().row + 1,
            node.end_position().row + 1,
            node.start_byte(),
            node.end_byte(),
        )
    }
}
