use super::Printer;
use crate::ast::{
    Class, ClassBody, Expression, ExpressionKind, ExportDefaultDeclaration,
    ExportNamedDeclaration, Function, ImportDeclaration, ImportSpecifier, Literal,
    MethodDefinition, MethodKind,
};
use crate::error::PrintError;

impl<'a> Printer<'a> {
    // =========================================================================
    // Functions, classes and modules
    // =========================================================================

    /// Shared by function declarations and function expressions.
    pub(super) fn print_function(&mut self, function: &Function) -> Result<(), PrintError> {
        if function.is_async {
            self.write("async ")?;
        }
        self.write(if function.is_generator { "function* " } else { "function " })?;
        if let Some(id) = &function.id {
            self.write(&id.name)?;
        }
        self.print_sequence(&function.params)?;
        self.write(" ")?;
        self.print_block(&function.body)
    }

    /// Shared by class declarations and class expressions.
    pub(super) fn print_class(&mut self, class: &Class) -> Result<(), PrintError> {
        self.write("class ")?;
        if let Some(id) = &class.id {
            self.write(&id.name)?;
            self.write(" ")?;
        }
        if let Some(super_class) = &class.super_class {
            self.write("extends ")?;
            self.print_expression(super_class)?;
            self.write(" ")?;
        }
        self.print_class_body(&class.body)
    }

    /// Class member list, with the same brace and indent layout as a block.
    fn print_class_body(&mut self, body: &ClassBody) -> Result<(), PrintError> {
        self.write("{")?;
        self.indent_level += 1;
        if !body.body.is_empty() {
            self.write_line_end()?;
            let member_indent = self.indent_at(self.indent_level);
            if self.write_comments && !body.comments.is_empty() {
                self.format_comments(&body.comments, &member_indent)?;
            }
            for method in &body.body {
                if self.write_comments && !method.comments.is_empty() {
                    self.format_comments(&method.comments, &member_indent)?;
                }
                self.write(&member_indent)?;
                self.print_method_definition(method)?;
                self.write_line_end()?;
            }
            if self.write_comments && !body.trailing_comments.is_empty() {
                self.format_comments(&body.trailing_comments, &member_indent)?;
            }
            self.indent_level -= 1;
            self.write_indent()?;
        } else if self.write_comments
            && !(body.comments.is_empty() && body.trailing_comments.is_empty())
        {
            self.write_line_end()?;
            let member_indent = self.indent_at(self.indent_level);
            self.format_comments(&body.comments, &member_indent)?;
            self.format_comments(&body.trailing_comments, &member_indent)?;
            self.indent_level -= 1;
            self.write_indent()?;
        } else {
            self.indent_level -= 1;
        }
        self.write("}")
    }

    pub(super) fn print_method_definition(
        &mut self,
        method: &MethodDefinition,
    ) -> Result<(), PrintError> {
        if method.is_static {
            self.write("static ")?;
        }
        match method.kind {
            MethodKind::Get => self.write("get ")?,
            MethodKind::Set => self.write("set ")?,
            MethodKind::Constructor | MethodKind::Method => {}
        }
        self.print_method_tail(&method.key, &method.value, method.computed)
    }

    /// `async`/`*`/key/params/body — shared by class methods and object
    /// literal methods, getters and setters.
    pub(super) fn print_method_tail(
        &mut self,
        key: &Expression,
        value: &Function,
        computed: bool,
    ) -> Result<(), PrintError> {
        if value.is_async {
            self.write("async ")?;
        }
        if value.is_generator {
            self.write("*")?;
        }
        if computed {
            self.write("[")?;
            self.print_expression(key)?;
            self.write("]")?;
        } else {
            self.print_expression(key)?;
        }
        self.print_sequence(&value.params)?;
        self.write(" ")?;
        self.print_block(&value.body)
    }

    pub(super) fn print_import(
        &mut self,
        declaration: &ImportDeclaration,
    ) -> Result<(), PrintError> {
        self.write("import ")?;
        let specifiers = &declaration.specifiers;
        if !specifiers.is_empty() {
            // Default and namespace specifiers print bare, in order, until
            // the named group starts.
            let mut i = 0;
            while i < specifiers.len() {
                if i > 0 {
                    self.write(", ")?;
                }
                match &specifiers[i] {
                    ImportSpecifier::Default(local) => {
                        self.write(&local.name)?;
                        i += 1;
                    }
                    ImportSpecifier::Namespace(local) => {
                        self.write("* as ")?;
                        self.write(&local.name)?;
                        i += 1;
                    }
                    ImportSpecifier::Named { .. } => break,
                }
            }
            if i < specifiers.len() {
                self.write("{ ")?;
                loop {
                    let ImportSpecifier::Named { imported, local } = &specifiers[i] else {
                        return Err(PrintError::InvalidNode(
                            "default and namespace import specifiers must precede named ones"
                                .to_string(),
                        ));
                    };
                    self.write(&imported.name)?;
                    if imported.name != local.name {
                        self.write(" as ")?;
                        self.write(&local.name)?;
                    }
                    i += 1;
                    if i < specifiers.len() {
                        self.write(", ")?;
                    } else {
                        break;
                    }
                }
                self.write(" }")?;
            }
            self.write(" from ")?;
        }
        self.print_literal(&declaration.source)?;
        self.write(";")
    }

    pub(super) fn print_export_named(
        &mut self,
        declaration: &ExportNamedDeclaration,
    ) -> Result<(), PrintError> {
        if let Some(inner) = &declaration.declaration {
            self.write("export ")?;
            return self.print_statement(inner);
        }
        self.write("export {")?;
        let specifiers = &declaration.specifiers;
        if !specifiers.is_empty() {
            self.write(" ")?;
            for (i, specifier) in specifiers.iter().enumerate() {
                if i > 0 {
                    self.write(", ")?;
                }
                self.write(&specifier.local.name)?;
                if specifier.local.name != specifier.exported.name {
                    self.write(" as ")?;
                    self.write(&specifier.exported.name)?;
                }
            }
            self.write(" ")?;
        }
        self.write("}")?;
        if let Some(source) = &declaration.source {
            self.write(" from ")?;
            self.print_literal(source)?;
        }
        self.write(";")
    }

    pub(super) fn print_export_default(
        &mut self,
        declaration: &ExportDefaultDeclaration,
    ) -> Result<(), PrintError> {
        self.write("export default ")?;
        match declaration {
            ExportDefaultDeclaration::Function(function) => self.print_function(function),
            ExportDefaultDeclaration::Class(class) => self.print_class(class),
            ExportDefaultDeclaration::Expression(expression) => {
                self.print_expression(expression)?;
                // Function expressions read as declarations here and take
                // no terminator.
                if !matches!(expression.kind, ExpressionKind::Function(_)) {
                    self.write(";")?;
                }
                Ok(())
            }
        }
    }

    pub(super) fn print_export_all(&mut self, source: &Literal) -> Result<(), PrintError> {
        self.write("export * from ")?;
        self.print_literal(source)?;
        self.write(";")
    }
}
