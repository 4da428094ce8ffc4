//! CST visitor for extracting raw PHP declarations

use log::debug;
use symdoc_extractor_api::doc_comment;
use symdoc_extractor_api::{ExtractorConfig, RawDeclaration, RawKind, RawParameter, Span};
use tree_sitter::Node;

pub struct PhpVisitor<'a> {
    pub source: &'a str,
    pub config: ExtractorConfig,
    pub declarations: Vec<RawDeclaration>,
    current_namespace: Option<String>,
}

impl<'a> PhpVisitor<'a> {
    pub fn new(source: &'a str, config: ExtractorConfig) -> Self {
        Self {
            source,
            config,
            declarations: Vec::new(),
            current_namespace: None,
        }
    }

    fn node_text(&self, node: Node) -> String {
        node.utf8_text(self.source.as_bytes())
            .unwrap_or("")
            .to_string()
    }

    pub fn visit_node(&mut self, node: Node) {
        // Track whether we should recurse into children
        let should_recurse = match node.kind() {
            "function_definition" => {
                self.visit_function(node);
                false // Function bodies are opaque
            }
            "class_declaration" => {
                self.visit_class(node);
                false // visit_class handles the body itself
            }
            "namespace_definition" => {
                self.visit_namespace(node);
                true // Declarations follow as siblings or nested statements
            }
            "method_declaration" => {
                // Only reachable outside a class context; not a candidate
                false
            }
            "anonymous_function_creation_expression" | "arrow_function" => false,
            _ => true,
        };

        if should_recurse {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                self.visit_node(child);
            }
        }
    }

    fn visit_function(&mut self, node: Node) {
        let Some(name_node) = node.child_by_field_name("name") else {
            debug!("skipping unnamed function candidate");
            return;
        };
        let name = self.qualify_name(&self.node_text(name_node));

        let mut decl = RawDeclaration::new(RawKind::Function, name, self.span(node));
        decl.parameters = self.extract_parameters(node);
        decl.return_type = self.extract_return_type(node);
        decl.doc = self.extract_doc(node);
        decl.truncated = node.has_error();

        self.declarations.push(decl);
    }

    fn visit_class(&mut self, node: Node) {
        let Some(name_node) = node.child_by_field_name("name") else {
            debug!("skipping unnamed class candidate");
            return;
        };
        let name = self.qualify_name(&self.node_text(name_node));

        let mut decl = RawDeclaration::new(RawKind::Class, name, self.span(node));
        decl.modifiers = self.extract_modifiers(node);
        decl.doc = self.extract_doc(node);
        decl.truncated = node.has_error();

        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            for child in body.children(&mut cursor) {
                if child.kind() == "method_declaration" {
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
        let name = self.node_text(name_node);

        let mut decl = RawDeclaration::new(RawKind::Method, name, self.span(node));
        decl.modifiers = self.extract_modifiers(node);
        decl.parameters = self.extract_parameters(node);
        decl.return_type = self.extract_return_type(node);
        decl.doc = self.extract_doc(node);
        decl.truncated = node.has_error();

        Some(decl)
    }

    fn visit_namespace(&mut self, node: Node) {
        self.current_namespace = node.child_by_field_name("name").map(|n| self.node_text(n));
    }

    /// Collect raw modifier tokens in source order
    fn extract_modifiers(&self, node: Node) -> Vec<String> {
        let mut modifiers = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "visibility_modifier"
                | "static_modifier"
                | "final_modifier"
                | "abstract_modifier"
                | "readonly_modifier" => {
                    modifiers.push(self.node_text(child));
                }
                _ => {}
            }
        }
        modifiers
    }

    fn extract_parameters(&self, node: Node) -> Vec<RawParameter> {
        let mut params = Vec::new();
        let Some(params_node) = node.child_by_field_name("parameters") else {
            return params;
        };

        let mut cursor = params_node.walk();
        for child in params_node.children(&mut cursor) {
            match child.kind() {
                // Promoted constructor parameters still yield ordinary
                // parameters; the implicit property is out of model scope.
                "simple_parameter" | "variadic_parameter" | "property_promotion_parameter" => {
                    let Some(name_node) = child.child_by_field_name("name") else {
                        continue;
                    };
                    let mut param = RawParameter::new(self.node_text(name_node));

                    if let Some(type_node) = child.child_by_field_name("type") {
                        let type_text = self.node_text(type_node);
                        // A leading `?` is the nullable marker, not part of
                        // the type text
                        match type_text.strip_prefix('?') {
                            Some(bare) => {
                                param = param.with_type(bare.trim().to_string()).nullable();
                            }
                            None => {
                                param = param.with_type(type_text);
                            }
                        }
                    }

                    if let Some(default_node) = child.child_by_field_name("default_value") {
                        param = param.with_default(self.node_text(default_node));
                    }

                    params.push(param);
                }
                _ => {}
            }
        }
        params
    }

    /// Return type text, kept verbatim (`?int`, unions and array shapes
    /// stay opaque)
    fn extract_return_type(&self, node: Node) -> Option<String> {
        node.child_by_field_name("return_type").map(|n| {
            self.node_text(n)
                .trim_start_matches(':')
                .trim()
                .to_string()
        })
    }

    fn extract_doc(&self, node: Node) -> Option<String> {
        if !self.config.include_docs {
            return None;
        }
        doc_comment::scan(self.source, node.start_byte())
    }

    fn span(&self, node: Node) -> Span {
        Span::new(
            node.start_position().row + 1,
            node.end_position().row + 1,
            node.start_byte(),
            node.end_byte(),
        )
    }

    fn qualify_name(&self, name: &str) -> String {
        match &self.current_namespace {
            Some(ns) => format!("{}\\{}", ns, name),
            None => name.to_string(),
        }
    }
}
