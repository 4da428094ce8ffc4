//! CST visitor for extracting raw JavaScript declarations

use log::debug;
use symdoc_extractor_api::doc_comment;
use symdoc_extractor_api::{ExtractorConfig, RawDeclaration, RawKind, RawParameter, Span};
use tree_sitter::Node;

/// Export context threaded from an `export_statement` down to the
/// declaration it wraps.
#[derive(Clone, Copy, Default)]
struct ExportContext {
    exported: bool,
    default_export: bool,
    doc_anchor: Option<usize>,
}

pub struct JavaScriptVisitor<'a> {
    pub source: &'a str,
    pub config: ExtractorConfig,
    pub declarations: Vec<RawDeclaration>,
    pending_default_exports: Vec<String>,
}

impl<'a> JavaScriptVisitor<'a> {
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
        let mut out = std::mem::take(&mut self.declarations);
        self.collect(node, &mut out);
        self.declarations = out;
    }

    /// Apply trailing `export default Name;` statements. Call once after
    /// the walk.
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

    fn collect(&mut self, node: Node, out: &mut Vec<RawDeclaration>) {
        let should_recurse = match node.kind() {
            "export_statement" => {
                self.collect_export(node, out);
                false
            }
            "function_declaration" => {
                if let Some(decl) = self.build_function(node, ExportContext::default()) {
                    out.push(decl);
                }
                false // Function bodies are opaque
            }
            "class_declaration" => {
                if let Some(decl) = self.build_class(node, ExportContext::default()) {
                    out.push(decl);
                }
                false
            }
            "lexical_declaration" | "variable_declaration" => {
                self.collect_variable_declaration(node, ExportContext::default(), out);
                false
            }
            "call_expression" => {
                self.collect_call(node, out);
                false
            }
            "arrow_function" | "function_expression" | "function" | "generator_function" => false,
            _ => true,
        };

        if should_recurse {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                self.collect(child, out);
            }
        }
    }

    fn collect_export(&mut self, node: Node, out: &mut Vec<RawDeclaration>) {
        let context = ExportContext {
            exported: true,
            default_export: node
                .children(&mut node.walk())
                .any(|c| c.kind() == "default"),
            doc_anchor: Some(node.start_byte()),
        };

        if let Some(declaration) = node.child_by_field_name("declaration") {
            match declaration.kind() {
                "function_declaration" => {
                    if let Some(decl) = self.build_function(declaration, context) {
                        out.push(decl);
                    }
                }
                "class_declaration" => {
                    if let Some(decl) = self.build_class(declaration, context) {
                        out.push(decl);
                    }
                }
                "lexical_declaration" | "variable_declaration" => {
                    self.collect_variable_declaration(declaration, context, out)
                }
                _ => {}
            }
            return;
        }

        if context.default_export {
            if let Some(value) = node.child_by_field_name("value") {
                if value.kind() == "identifier" {
                    self.pending_default_exports.push(self.node_text(value));
                }
            }
        }
    }

    fn build_function(&self, node: Node, context: ExportContext) -> Option<RawDeclaration> {
        let name_node = node.child_by_field_name("name")?;

        let mut decl =
            RawDeclaration::new(RawKind::Function, self.node_text(name_node), self.span(node));
        decl.parameters = self.extract_parameters(node);
        decl.exported = context.exported;
        decl.default_export = context.default_export;
        decl.doc = self.extract_doc(context.doc_anchor.unwrap_or(node.start_byte()));
        decl.truncated = node.has_error();

        Some(decl)
    }

    fn build_class(&self, node: Node, context: ExportContext) -> Option<RawDeclaration> {
        let name_node = node.child_by_field_name("name")?;

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

        Some(decl)
    }

    fn build_method(&self, node: Node) -> Option<RawDeclaration> {
        let name_node = node.child_by_field_name("name")?;

        let mut decl =
            RawDeclaration::new(RawKind::Method, self.node_text(name_node), self.span(node));
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "static" {
                decl.modifiers.push("static".to_string());
            }
        }
        decl.parameters = self.extract_parameters(node);
        decl.doc = self.extract_doc(node.start_byte());
        decl.truncated = node.has_error();

        Some(decl)
    }

    fn collect_variable_declaration(
        &mut self,
        node: Node,
        context: ExportContext,
        out: &mut Vec<RawDeclaration>,
    ) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() != "variable_declarator" {
                continue;
            }
            let Some(name_node) = child.child_by_field_name("name") else {
                continue;
            };
            if name_node.kind() != "identifier" {
                continue;
            }
            let Some(value) = child.child_by_field_name("value") else {
                continue;
            };
            if !matches!(
                value.kind(),
                "arrow_function" | "function_expression" | "function"
            ) {
                continue;
            }

            let mut decl = RawDeclaration::new(
                RawKind::ArrowBinding,
                self.node_text(name_node),
                self.span(node),
            );
            decl.parameters = self.extract_parameters(value);
            decl.exported = context.exported;
            decl.default_export = context.default_export;
            decl.doc = self.extract_doc(context.doc_anchor.unwrap_or(node.start_byte()));
            decl.truncated = child.has_error();

            out.push(decl);
        }
    }

    /// Handle a statement-level or nested call expression.
    ///
    /// Named function expressions in the arguments are always extracted.
    /// Anonymous callbacks are extracted only when `include_test_callbacks`
    /// is set and the call carries a string first argument (the
    /// `describe`/`it` convention); the string names the symbol and nested
    /// calls inside the callback body become its members.
    fn collect_call(&mut self, node: Node, out: &mut Vec<RawDeclaration>) {
        let Some(arguments) = node.child_by_field_name("arguments") else {
            return;
        };

        let description = self.call_description(arguments);

        let mut functions = Vec::new();
        let mut cursor = arguments.walk();
        for arg in arguments.children(&mut cursor) {
            self.gather_functions(arg, &mut functions);
        }

        for function in functions {
            let name_node = function.child_by_field_name("name");
            let body = function.child_by_field_name("body");

            let mut body_members = Vec::new();
            if let Some(body) = body {
                let mut body_cursor = body.walk();
                for child in body.children(&mut body_cursor) {
                    self.collect(child, &mut body_members);
                }
            }

            if let Some(name_node) = name_node {
                // Named function expression: always a symbol
                let mut decl = RawDeclaration::new(
                    RawKind::Function,
                    self.node_text(name_node),
                    self.span(function),
                );
                decl.parameters = self.extract_parameters(function);
                decl.members = body_members;
                out.push(decl);
            } else if self.config.include_test_callbacks {
                if let Some(description) = description.as_deref() {
                    let mut decl = RawDeclaration::new(
                        RawKind::Function,
                        description,
                        self.span(node),
                    );
                    decl.members = body_members;
                    out.push(decl);
                } else {
                    // Anonymous callback on a non-test call: surface what
                    // its body declares
                    out.append(&mut body_members);
                }
            } else {
                out.append(&mut body_members);
            }
        }
    }

    /// Description string of a test-style call: the content of its first
    /// string or template literal argument
    fn call_description(&self, arguments: Node) -> Option<String> {
        let mut cursor = arguments.walk();
        let literal = arguments
            .children(&mut cursor)
            .find(|c| matches!(c.kind(), "string" | "template_string"));
        literal.map(|c| {
            let text = self.node_text(c);
            text.trim_matches(|ch| matches!(ch, '\'' | '"' | '`')).to_string()
        })
    }

    /// Descend through nested calls and parenthesized wrappers to the
    /// function nodes in a call argument (`wc(function () { ... })`)
    fn gather_functions<'t>(&self, node: Node<'t>, out: &mut Vec<Node<'t>>) {
        match node.kind() {
            "arrow_function" | "function_expression" | "function" => {
                out.push(node);
            }
            "call_expression" => {
                if let Some(arguments) = node.child_by_field_name("arguments") {
                    let mut cursor = arguments.walk();
                    for child in arguments.children(&mut cursor) {
                        self.gather_functions(child, out);
                    }
                }
            }
            "parenthesized_expression" => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    self.gather_functions(child, out);
                }
            }
            _ => {}
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
                "identifier" => {
                    params.push(RawParameter::new(self.node_text(child)));
                }
                "assignment_pattern" => {
                    let Some(left) = child.child_by_field_name("left") else {
                        continue;
                    };
                    let mut param = RawParameter::new(self.node_text(left));
                    if let Some(right) = child.child_by_field_name("right") {
                        param = param.with_default(self.node_text(right));
                    }
                    params.push(param);
                }
                // Destructured patterns keep their literal text
                "object_pattern" | "array_pattern" | "rest_pattern" => {
                    params.push(RawParameter::new(self.node_text(child)));
                }
                _ => {}
            }
        }
        params
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
