use super::{PrintNode, Printer};
use crate::ast::{
    ArrayPattern, ArrowFunction, ArrowFunctionBody, AssignmentOperator, Expression,
    ExpressionKind, ObjectExpression, ObjectPattern, Pattern, PatternProperty, Property,
    PropertyKind, UnaryOperator, UpdateOperator,
};
use crate::error::PrintError;
use crate::precedence::{expression_precedence, needs_parentheses};

impl<'a> Printer<'a> {
    // =========================================================================
    // Expressions
    // =========================================================================

    /// An operand of a binary or logical expression, wrapped when the
    /// precedence oracle says evaluation order would change otherwise.
    fn print_binary_operand(
        &mut self,
        operand: &Expression,
        parent: &ExpressionKind,
        is_right: bool,
    ) -> Result<(), PrintError> {
        if needs_parentheses(operand, parent, is_right) {
            self.write("(")?;
            self.print_expression(operand)?;
            self.write(")")
        } else {
            self.print_expression(operand)
        }
    }

    /// Shared by binary and logical expressions. `wrap` is set for the
    /// `in` operator, whose keyword would otherwise be misread inside a
    /// `for` header.
    pub(super) fn print_binary_like(
        &mut self,
        parent: &ExpressionKind,
        operator: &str,
        wrap: bool,
        left: &Expression,
        right: &Expression,
    ) -> Result<(), PrintError> {
        if wrap {
            self.write("(")?;
        }
        self.print_binary_operand(left, parent, false)?;
        self.write(" ")?;
        self.write(operator)?;
        self.write(" ")?;
        self.print_binary_operand(right, parent, true)?;
        if wrap {
            self.write(")")?;
        }
        Ok(())
    }

    pub(super) fn print_unary(
        &mut self,
        parent: &ExpressionKind,
        operator: UnaryOperator,
        argument: &Expression,
    ) -> Result<(), PrintError> {
        self.write(operator.as_str())?;
        if operator.is_keyword() {
            self.write(" ")?;
        }
        if expression_precedence(&argument.kind) < expression_precedence(parent) {
            self.write("(")?;
            self.print_expression(argument)?;
            self.write(")")
        } else {
            self.print_expression(argument)
        }
    }

    /// The operand of an update expression is never parenthesized.
    pub(super) fn print_update(
        &mut self,
        operator: UpdateOperator,
        argument: &Expression,
        prefix: bool,
    ) -> Result<(), PrintError> {
        if prefix {
            self.write(operator.as_str())?;
            self.print_expression(argument)
        } else {
            self.print_expression(argument)?;
            self.write(operator.as_str())
        }
    }

    pub(super) fn print_assignment(
        &mut self,
        operator: AssignmentOperator,
        left: &Pattern,
        right: &Expression,
    ) -> Result<(), PrintError> {
        self.print_pattern(left)?;
        self.write(" ")?;
        self.write(operator.as_str())?;
        self.write(" ")?;
        self.print_expression(right)
    }

    pub(super) fn print_conditional(
        &mut self,
        parent: &ExpressionKind,
        test: &Expression,
        consequent: &Expression,
        alternate: &Expression,
    ) -> Result<(), PrintError> {
        if expression_precedence(&test.kind) > expression_precedence(parent) {
            self.print_expression(test)?;
        } else {
            self.write("(")?;
            self.print_expression(test)?;
            self.write(")")?;
        }
        self.write(" ? ")?;
        self.print_expression(consequent)?;
        self.write(" : ")?;
        self.print_expression(alternate)
    }

    pub(super) fn print_call(
        &mut self,
        parent: &ExpressionKind,
        callee: &Expression,
        arguments: &[Expression],
    ) -> Result<(), PrintError> {
        if expression_precedence(&callee.kind) < expression_precedence(parent) {
            self.write("(")?;
            self.print_expression(callee)?;
            self.write(")")?;
        } else {
            self.print_expression(callee)?;
        }
        self.print_sequence(arguments)
    }

    pub(super) fn print_new(
        &mut self,
        callee: &Expression,
        arguments: &[Expression],
    ) -> Result<(), PrintError> {
        self.write("new ")?;
        // A callee containing a call must be wrapped: `new (a().b)` and
        // `new a().b` name different constructors.
        let call_precedence = 19;
        if expression_precedence(&callee.kind) < call_precedence || has_call_expression(callee) {
            self.write("(")?;
            self.print_expression(callee)?;
            self.write(")")?;
        } else {
            self.print_expression(callee)?;
        }
        self.print_sequence(arguments)
    }

    pub(super) fn print_member(
        &mut self,
        parent: &ExpressionKind,
        object: &Expression,
        property: &Expression,
        computed: bool,
    ) -> Result<(), PrintError> {
        if expression_precedence(&object.kind) < expression_precedence(parent) {
            self.write("(")?;
            self.print_expression(object)?;
            self.write(")")?;
        } else {
            self.print_expression(object)?;
        }
        if computed {
            self.write("[")?;
            self.print_expression(property)?;
            self.write("]")
        } else {
            self.write(".")?;
            self.print_expression(property)
        }
    }

    pub(super) fn print_arrow_function(&mut self, arrow: &ArrowFunction) -> Result<(), PrintError> {
        if arrow.is_async {
            self.write("async ")?;
        }
        match arrow.params.as_slice() {
            // A single plain identifier parameter prints bare.
            [Pattern::Identifier(identifier)] => self.write(&identifier.name)?,
            params => self.print_sequence(params)?,
        }
        self.write(" => ")?;
        match &arrow.body {
            ArrowFunctionBody::Expression(body) => {
                // An object literal body would parse as a block.
                if matches!(body.kind, ExpressionKind::Object(_)) {
                    self.write("(")?;
                    self.print_expression(body)?;
                    self.write(")")
                } else {
                    self.print_expression(body)
                }
            }
            ArrowFunctionBody::Block(block) => self.print_block(block),
        }
    }

    pub(super) fn print_yield(
        &mut self,
        argument: Option<&Expression>,
        delegate: bool,
    ) -> Result<(), PrintError> {
        self.write(if delegate { "yield*" } else { "yield" })?;
        if let Some(argument) = argument {
            self.write(" ")?;
            self.print_expression(argument)?;
        }
        Ok(())
    }

    /// Bracketed element list shared by array expressions and array
    /// patterns. A trailing comma is kept only when the last slot is an
    /// elision.
    pub(super) fn print_array_elements<T: PrintNode>(
        &mut self,
        elements: &[Option<T>],
    ) -> Result<(), PrintError> {
        self.write("[")?;
        let len = elements.len();
        for (i, element) in elements.iter().enumerate() {
            if let Some(element) = element {
                element.print(self)?;
            }
            if i + 1 < len {
                self.write(", ")?;
            } else if element.is_none() {
                self.write(", ")?;
            }
        }
        self.write("]")
    }

    /// Object literal: one property per line at one extra indent.
    pub(super) fn print_object(&mut self, object: &ObjectExpression) -> Result<(), PrintError> {
        let indent = self.indent_at(self.indent_level);
        self.indent_level += 1;
        let property_indent = self.indent_at(self.indent_level);
        self.write("{")?;
        if !object.properties.is_empty() {
            self.write_line_end()?;
            if self.write_comments && !object.comments.is_empty() {
                self.format_comments(&object.comments, &property_indent)?;
            }
            let len = object.properties.len();
            for (i, property) in object.properties.iter().enumerate() {
                if self.write_comments && !property.comments.is_empty() {
                    self.format_comments(&property.comments, &property_indent)?;
                }
                self.write(&property_indent)?;
                self.print_property(property)?;
                if i + 1 < len {
                    self.write(",")?;
                }
                self.write_line_end()?;
            }
            if self.write_comments && !object.trailing_comments.is_empty() {
                self.format_comments(&object.trailing_comments, &property_indent)?;
            }
            self.write(&indent)?;
            self.write("}")?;
        } else if self.write_comments && !object.comments.is_empty() {
            // Keep the expanded form so the comments have a home.
            self.write_line_end()?;
            self.format_comments(&object.comments, &property_indent)?;
            self.write(&indent)?;
            self.write("}")?;
        } else {
            self.write("}")?;
        }
        self.indent_level -= 1;
        Ok(())
    }

    fn print_property(&mut self, property: &Property) -> Result<(), PrintError> {
        if property.method || property.kind != PropertyKind::Init {
            match property.kind {
                PropertyKind::Get => self.write("get ")?,
                PropertyKind::Set => self.write("set ")?,
                PropertyKind::Init => {}
            }
            let ExpressionKind::Function(function) = &property.value.kind else {
                return Err(PrintError::InvalidNode(
                    "object method, getter or setter value must be a function expression"
                        .to_string(),
                ));
            };
            return self.print_method_tail(&property.key, function, property.computed);
        }
        if !property.shorthand {
            if property.computed {
                self.write("[")?;
                self.print_expression(&property.key)?;
                self.write("]")?;
            } else {
                self.print_expression(&property.key)?;
            }
            self.write(": ")?;
        }
        self.print_expression(&property.value)
    }

    // =========================================================================
    // Patterns
    // =========================================================================

    pub fn print_pattern(&mut self, pattern: &Pattern) -> Result<(), PrintError> {
        match pattern {
            Pattern::Identifier(identifier) => self.write(&identifier.name),
            Pattern::Object(object) => self.print_object_pattern(object),
            Pattern::Array(array) => self.print_array_pattern(array),
            Pattern::Rest(argument) => {
                self.write("...")?;
                self.print_pattern(argument)
            }
            Pattern::Assignment { left, right } => {
                self.print_pattern(left)?;
                self.write(" = ")?;
                self.print_expression(right)
            }
            Pattern::Expression(expression) => self.print_expression(expression),
        }
    }

    /// Object patterns print single-line, without indentation.
    fn print_object_pattern(&mut self, pattern: &ObjectPattern) -> Result<(), PrintError> {
        self.write("{")?;
        if !pattern.properties.is_empty() {
            self.write(" ")?;
            for (i, property) in pattern.properties.iter().enumerate() {
                if i > 0 {
                    self.write(", ")?;
                }
                self.print_pattern_property(property)?;
            }
            self.write(" ")?;
        }
        self.write("}")
    }

    fn print_pattern_property(&mut self, property: &PatternProperty) -> Result<(), PrintError> {
        if !property.shorthand {
            if property.computed {
                self.write("[")?;
                self.print_expression(&property.key)?;
                self.write("]")?;
            } else {
                self.print_expression(&property.key)?;
            }
            self.write(": ")?;
        }
        self.print_pattern(&property.value)
    }

    fn print_array_pattern(&mut self, pattern: &ArrayPattern) -> Result<(), PrintError> {
        self.print_array_elements(&pattern.elements)
    }
}

/// Whether the expression contains a call anywhere along its member
/// `object` chain.
fn has_call_expression(expression: &Expression) -> bool {
    let mut current = expression;
    loop {
        match &current.kind {
            ExpressionKind::Call { .. } => return true,
            ExpressionKind::Member { object, .. } => current = object,
            _ => return false,
        }
    }
}
