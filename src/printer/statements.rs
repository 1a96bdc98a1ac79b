use super::Printer;
use crate::ast::{
    BlockStatement, CatchClause, Expression, ExpressionKind, ForInit, ForTarget, Identifier,
    Pattern, Statement, SwitchCase, VariableDeclaration,
};
use crate::error::PrintError;

impl<'a> Printer<'a> {
    // =========================================================================
    // Statements
    // =========================================================================

    /// Expression statements whose head would parse as something else are
    /// wrapped: object, function, class and arrow expressions, and
    /// assignments destructuring into an object pattern.
    pub(super) fn print_expression_statement(
        &mut self,
        expression: &Expression,
    ) -> Result<(), PrintError> {
        let wrap = match &expression.kind {
            ExpressionKind::Object(_)
            | ExpressionKind::Function(_)
            | ExpressionKind::Class(_)
            | ExpressionKind::ArrowFunction(_) => true,
            ExpressionKind::Assignment { left, .. } => matches!(left.as_ref(), Pattern::Object(_)),
            _ => false,
        };
        if wrap {
            self.write("(")?;
            self.print_expression(expression)?;
            self.write(")")?;
        } else {
            self.print_expression(expression)?;
        }
        self.write(";")
    }

    pub(super) fn print_block(&mut self, block: &BlockStatement) -> Result<(), PrintError> {
        self.write("{")?;
        self.indent_level += 1;
        if !block.body.is_empty() {
            self.write_line_end()?;
            let statement_indent = self.indent_at(self.indent_level);
            if self.write_comments && !block.comments.is_empty() {
                self.format_comments(&block.comments, &statement_indent)?;
            }
            for statement in &block.body {
                if self.write_comments && !statement.comments.is_empty() {
                    self.format_comments(&statement.comments, &statement_indent)?;
                }
                self.write(&statement_indent)?;
                self.print_statement(statement)?;
                self.write_line_end()?;
            }
            if self.write_comments && !block.trailing_comments.is_empty() {
                self.format_comments(&block.trailing_comments, &statement_indent)?;
            }
            self.indent_level -= 1;
            self.write_indent()?;
        } else if self.write_comments
            && !(block.comments.is_empty() && block.trailing_comments.is_empty())
        {
            // An empty block still expands to hold its comments.
            self.write_line_end()?;
            let statement_indent = self.indent_at(self.indent_level);
            self.format_comments(&block.comments, &statement_indent)?;
            self.format_comments(&block.trailing_comments, &statement_indent)?;
            self.indent_level -= 1;
            self.write_indent()?;
        } else {
            self.indent_level -= 1;
        }
        self.write("}")
    }

    pub(super) fn print_return(&mut self, argument: Option<&Expression>) -> Result<(), PrintError> {
        self.write("return")?;
        if let Some(argument) = argument {
            self.write(" ")?;
            self.print_expression(argument)?;
        }
        self.write(";")
    }

    pub(super) fn print_throw(&mut self, argument: &Expression) -> Result<(), PrintError> {
        self.write("throw ")?;
        self.print_expression(argument)?;
        self.write(";")
    }

    /// `break` and `continue`, with their optional label.
    pub(super) fn print_jump(
        &mut self,
        keyword: &str,
        label: Option<&Identifier>,
    ) -> Result<(), PrintError> {
        self.write(keyword)?;
        if let Some(label) = label {
            self.write(" ")?;
            self.write(&label.name)?;
        }
        self.write(";")
    }

    pub(super) fn print_labeled(
        &mut self,
        label: &Identifier,
        body: &Statement,
    ) -> Result<(), PrintError> {
        self.write(&label.name)?;
        self.write(": ")?;
        self.print_statement(body)
    }

    pub(super) fn print_if(
        &mut self,
        test: &Expression,
        consequent: &Statement,
        alternate: Option<&Statement>,
    ) -> Result<(), PrintError> {
        self.write("if (")?;
        self.print_expression(test)?;
        self.write(") ")?;
        self.print_statement(consequent)?;
        if let Some(alternate) = alternate {
            self.write(" else ")?;
            self.print_statement(alternate)?;
        }
        Ok(())
    }

    pub(super) fn print_switch(
        &mut self,
        discriminant: &Expression,
        cases: &[SwitchCase],
    ) -> Result<(), PrintError> {
        let indent = self.indent_at(self.indent_level);
        self.indent_level += 2;
        let case_indent = self.indent_at(self.indent_level - 1);
        let statement_indent = self.indent_at(self.indent_level);
        self.write("switch (")?;
        self.print_expression(discriminant)?;
        self.write(") {")?;
        self.write_line_end()?;
        for case in cases {
            if self.write_comments && !case.comments.is_empty() {
                self.format_comments(&case.comments, &case_indent)?;
            }
            self.write(&case_indent)?;
            match &case.test {
                Some(test) => {
                    self.write("case ")?;
                    self.print_expression(test)?;
                    self.write(":")?;
                }
                None => self.write("default:")?,
            }
            self.write_line_end()?;
            for statement in &case.consequent {
                if self.write_comments && !statement.comments.is_empty() {
                    self.format_comments(&statement.comments, &statement_indent)?;
                }
                self.write(&statement_indent)?;
                self.print_statement(statement)?;
                self.write_line_end()?;
            }
        }
        self.indent_level -= 2;
        self.write(&indent)?;
        self.write("}")
    }

    pub(super) fn print_while(
        &mut self,
        test: &Expression,
        body: &Statement,
    ) -> Result<(), PrintError> {
        self.write("while (")?;
        self.print_expression(test)?;
        self.write(") ")?;
        self.print_statement(body)
    }

    pub(super) fn print_do_while(
        &mut self,
        body: &Statement,
        test: &Expression,
    ) -> Result<(), PrintError> {
        self.write("do ")?;
        self.print_statement(body)?;
        self.write(" while (")?;
        self.print_expression(test)?;
        self.write(");")
    }

    pub(super) fn print_for(
        &mut self,
        init: Option<&ForInit>,
        test: Option<&Expression>,
        update: Option<&Expression>,
        body: &Statement,
    ) -> Result<(), PrintError> {
        self.write("for (")?;
        if let Some(init) = init {
            match init {
                ForInit::Declaration(declaration) => {
                    self.print_header_declaration(declaration)?;
                }
                ForInit::Expression(expression) => self.print_expression(expression)?,
            }
        }
        self.write("; ")?;
        if let Some(test) = test {
            self.print_expression(test)?;
        }
        self.write("; ")?;
        if let Some(update) = update {
            self.print_expression(update)?;
        }
        self.write(") ")?;
        self.print_statement(body)
    }

    /// Shared `for-in` / `for-of` formatter; only the keyword differs.
    pub(super) fn print_for_in_of(
        &mut self,
        keyword: &str,
        left: &ForTarget,
        right: &Expression,
        body: &Statement,
    ) -> Result<(), PrintError> {
        self.write("for (")?;
        match left {
            ForTarget::Declaration(declaration) => self.print_header_declaration(declaration)?,
            ForTarget::Pattern(pattern) => self.print_pattern(pattern)?,
        }
        self.write(keyword)?;
        self.print_expression(right)?;
        self.write(") ")?;
        self.print_statement(body)
    }

    /// A variable declaration inside a `for` header: the trailing
    /// semicolon is suppressed for the duration and the flag restored
    /// before returning.
    fn print_header_declaration(
        &mut self,
        declaration: &VariableDeclaration,
    ) -> Result<(), PrintError> {
        let prev = self.no_trailing_semicolon;
        self.no_trailing_semicolon = true;
        let result = self.print_variable_declaration(declaration);
        self.no_trailing_semicolon = prev;
        result
    }

    pub(super) fn print_try(
        &mut self,
        block: &BlockStatement,
        handler: Option<&CatchClause>,
        finalizer: Option<&BlockStatement>,
    ) -> Result<(), PrintError> {
        self.write("try ")?;
        self.print_block(block)?;
        if let Some(handler) = handler {
            match &handler.param {
                Some(param) => {
                    self.write(" catch (")?;
                    self.print_pattern(param)?;
                    self.write(") ")?;
                }
                None => self.write(" catch ")?,
            }
            self.print_block(&handler.body)?;
        }
        if let Some(finalizer) = finalizer {
            self.write(" finally ")?;
            self.print_block(finalizer)?;
        }
        Ok(())
    }

    pub(super) fn print_with(
        &mut self,
        object: &Expression,
        body: &Statement,
    ) -> Result<(), PrintError> {
        self.write("with (")?;
        self.print_expression(object)?;
        self.write(") ")?;
        self.print_statement(body)
    }

    pub(super) fn print_variable_declaration(
        &mut self,
        declaration: &VariableDeclaration,
    ) -> Result<(), PrintError> {
        self.write(declaration.kind.as_str())?;
        self.write(" ")?;
        for (i, declarator) in declaration.declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ")?;
            }
            self.print_pattern(&declarator.id)?;
            if let Some(init) = &declarator.init {
                self.write(" = ")?;
                self.print_expression(init)?;
            }
        }
        if !self.no_trailing_semicolon {
            self.write(";")?;
        }
        Ok(())
    }
}
