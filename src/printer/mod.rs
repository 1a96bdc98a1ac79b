//! JavaScript printer: emission state, dispatch and shared helpers.
//!
//! The printer walks the tree depth-first, left to right, writing each
//! node's textual form through [`SourceWriter`]. Formatters for the
//! individual node families live in the submodules; they all hang off
//! [`Printer`] so state threading stays implicit.

mod comments;
mod declarations;
mod expressions;
mod literals;
mod statements;

use std::rc::Rc;

use crate::ast::{Expression, ExpressionKind, Program, Statement, StatementKind};
use crate::error::PrintError;
use crate::source_map::SourceMapSink;
use crate::source_writer::{Output, SourceWriter};

/// Formatting options for the printer.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Indentation unit.
    pub indent: String,
    /// Line terminator.
    pub line_end: String,
    /// Indent depth of top-level statements.
    pub starting_indent_level: u32,
    /// Whether attached comments are written.
    pub comments: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            line_end: "\n".to_string(),
            starting_indent_level: 0,
            comments: false,
        }
    }
}

impl PrintOptions {
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_line_end(mut self, line_end: impl Into<String>) -> Self {
        self.line_end = line_end.into();
        self
    }

    pub fn with_starting_indent_level(mut self, level: u32) -> Self {
        self.starting_indent_level = level;
        self
    }

    pub fn with_comments(mut self) -> Self {
        self.comments = true;
        self
    }
}

/// Overrides for individual node formatters.
///
/// Dispatch offers every statement and expression to the overlay before
/// the built-in formatter runs; returning `Ok(false)` falls through to the
/// default. Recursive dispatch goes through the overlay as well, so an
/// override is observed at any depth, including below nodes the overlay
/// handled itself. Methods take `&self`: an overlay is a formatter table,
/// not a traversal state holder.
pub trait Overlay {
    fn statement(&self, printer: &mut Printer<'_>, statement: &Statement) -> Result<bool, PrintError> {
        let _ = (printer, statement);
        Ok(false)
    }

    fn expression(&self, printer: &mut Printer<'_>, expression: &Expression) -> Result<bool, PrintError> {
        let _ = (printer, expression);
        Ok(false)
    }
}

/// Dispatch seam for comma-separated node lists: parameters, call
/// arguments and sequence expressions all print through it.
pub(crate) trait PrintNode {
    fn print(&self, printer: &mut Printer<'_>) -> Result<(), PrintError>;
}

impl PrintNode for Expression {
    fn print(&self, printer: &mut Printer<'_>) -> Result<(), PrintError> {
        printer.print_expression(self)
    }
}

impl PrintNode for crate::ast::Pattern {
    fn print(&self, printer: &mut Printer<'_>) -> Result<(), PrintError> {
        printer.print_pattern(self)
    }
}

/// The emitter. Owns the traversal state; the output sink, source map
/// collector and overlay belong to the caller.
pub struct Printer<'a> {
    pub(crate) writer: SourceWriter<'a>,
    pub(crate) indent: String,
    pub(crate) line_end: String,
    pub(crate) indent_level: u32,
    pub(crate) no_trailing_semicolon: bool,
    pub(crate) write_comments: bool,
    overlay: Option<Rc<dyn Overlay + 'a>>,
}

impl<'a> Printer<'a> {
    pub fn new(output: &'a mut dyn Output, options: &PrintOptions) -> Self {
        Self {
            writer: SourceWriter::new(output),
            indent: options.indent.clone(),
            line_end: options.line_end.clone(),
            indent_level: options.starting_indent_level,
            no_trailing_semicolon: false,
            write_comments: options.comments,
            overlay: None,
        }
    }

    /// Like [`Printer::new`], with a source map collector attached. Every
    /// node carrying a location is reported at its first generated
    /// character.
    pub fn with_source_map(
        output: &'a mut dyn Output,
        source_map: &'a mut dyn SourceMapSink,
        options: &PrintOptions,
    ) -> Self {
        Self {
            writer: SourceWriter::with_source_map(output, source_map),
            indent: options.indent.clone(),
            line_end: options.line_end.clone(),
            indent_level: options.starting_indent_level,
            no_trailing_semicolon: false,
            write_comments: options.comments,
            overlay: None,
        }
    }

    pub fn set_overlay(&mut self, overlay: Rc<dyn Overlay + 'a>) {
        self.overlay = Some(overlay);
    }

    /// Print a whole program: leading comments, each statement on its own
    /// line at the starting indent, trailing comments at the end.
    pub fn print_program(&mut self, program: &Program) -> Result<(), PrintError> {
        if let Some(loc) = &program.loc {
            self.writer.map(loc);
        }
        let indent = self.indent_at(self.indent_level);
        if self.write_comments && !program.comments.is_empty() {
            self.format_comments(&program.comments, &indent)?;
        }
        for statement in &program.body {
            if self.write_comments && !statement.comments.is_empty() {
                self.format_comments(&statement.comments, &indent)?;
            }
            self.write(&indent)?;
            self.print_statement(statement)?;
            self.write_line_end()?;
        }
        if self.write_comments && !program.trailing_comments.is_empty() {
            self.format_comments(&program.trailing_comments, &indent)?;
        }
        Ok(())
    }

    /// Print a single statement at the current position.
    pub fn print_statement(&mut self, statement: &Statement) -> Result<(), PrintError> {
        if let Some(loc) = &statement.loc {
            self.writer.map(loc);
        }
        if let Some(overlay) = self.overlay.clone() {
            if overlay.statement(self, statement)? {
                return Ok(());
            }
        }
        match &statement.kind {
            StatementKind::Expression(expression) => self.print_expression_statement(expression),
            StatementKind::Block(block) => self.print_block(block),
            StatementKind::Empty => self.write(";"),
            StatementKind::Debugger => self.write("debugger;"),
            StatementKind::Return(argument) => self.print_return(argument.as_ref()),
            StatementKind::Throw(argument) => self.print_throw(argument),
            StatementKind::Break(label) => self.print_jump("break", label.as_ref()),
            StatementKind::Continue(label) => self.print_jump("continue", label.as_ref()),
            StatementKind::Labeled { label, body } => self.print_labeled(label, body),
            StatementKind::If { test, consequent, alternate } => {
                self.print_if(test, consequent, alternate.as_deref())
            }
            StatementKind::Switch { discriminant, cases } => self.print_switch(discriminant, cases),
            StatementKind::While { test, body } => self.print_while(test, body),
            StatementKind::DoWhile { body, test } => self.print_do_while(body, test),
            StatementKind::For { init, test, update, body } => {
                self.print_for(init.as_ref(), test.as_ref(), update.as_ref(), body)
            }
            StatementKind::ForIn { left, right, body } => {
                self.print_for_in_of(" in ", left, right, body)
            }
            StatementKind::ForOf { left, right, body } => {
                self.print_for_in_of(" of ", left, right, body)
            }
            StatementKind::Try { block, handler, finalizer } => {
                self.print_try(block, handler.as_ref(), finalizer.as_ref())
            }
            StatementKind::With { object, body } => self.print_with(object, body),
            StatementKind::VariableDeclaration(declaration) => {
                self.print_variable_declaration(declaration)
            }
            StatementKind::FunctionDeclaration(function) => self.print_function(function),
            StatementKind::ClassDeclaration(class) => self.print_class(class),
            StatementKind::Import(declaration) => self.print_import(declaration),
            StatementKind::ExportNamed(declaration) => self.print_export_named(declaration),
            StatementKind::ExportDefault(declaration) => self.print_export_default(declaration),
            StatementKind::ExportAll { source } => self.print_export_all(source),
        }
    }

    /// Print a single expression at the current position.
    pub fn print_expression(&mut self, expression: &Expression) -> Result<(), PrintError> {
        if let Some(loc) = &expression.loc {
            self.writer.map(loc);
        }
        if let Some(overlay) = self.overlay.clone() {
            if overlay.expression(self, expression)? {
                return Ok(());
            }
        }
        match &expression.kind {
            ExpressionKind::Identifier(identifier) => self.write(&identifier.name),
            ExpressionKind::Literal(literal) => self.print_literal(literal),
            ExpressionKind::TemplateLiteral(template) => self.print_template_literal(template),
            ExpressionKind::TaggedTemplate { tag, quasi } => {
                self.print_expression(tag)?;
                self.print_template_literal(quasi)
            }
            ExpressionKind::This => self.write("this"),
            ExpressionKind::Super => self.write("super"),
            ExpressionKind::Array { elements } => self.print_array_elements(elements),
            ExpressionKind::Object(object) => self.print_object(object),
            ExpressionKind::Unary { operator, argument } => {
                self.print_unary(&expression.kind, *operator, argument)
            }
            ExpressionKind::Update { operator, argument, prefix } => {
                self.print_update(*operator, argument, *prefix)
            }
            ExpressionKind::Binary { operator, left, right } => self.print_binary_like(
                &expression.kind,
                operator.as_str(),
                *operator == crate::ast::BinaryOperator::In,
                left,
                right,
            ),
            ExpressionKind::Logical { operator, left, right } => {
                self.print_binary_like(&expression.kind, operator.as_str(), false, left, right)
            }
            ExpressionKind::Assignment { operator, left, right } => {
                self.print_assignment(*operator, left, right)
            }
            ExpressionKind::Conditional { test, consequent, alternate } => {
                self.print_conditional(&expression.kind, test, consequent, alternate)
            }
            ExpressionKind::Call { callee, arguments } => {
                self.print_call(&expression.kind, callee, arguments)
            }
            ExpressionKind::New { callee, arguments } => self.print_new(callee, arguments),
            ExpressionKind::Member { object, property, computed } => {
                self.print_member(&expression.kind, object, property, *computed)
            }
            ExpressionKind::MetaProperty { meta, property } => {
                self.write(&meta.name)?;
                self.write(".")?;
                self.write(&property.name)
            }
            ExpressionKind::ArrowFunction(arrow) => self.print_arrow_function(arrow),
            ExpressionKind::Function(function) => self.print_function(function),
            ExpressionKind::Class(class) => self.print_class(class),
            ExpressionKind::Yield { argument, delegate } => {
                self.print_yield(argument.as_deref(), *delegate)
            }
            ExpressionKind::Await(argument) => {
                self.write("await ")?;
                self.print_expression(argument)
            }
            ExpressionKind::Sequence(expressions) => self.print_sequence(expressions),
            ExpressionKind::Spread(argument) => {
                self.write("...")?;
                self.print_expression(argument)
            }
        }
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    /// Write raw output text. Public so overlays can emit their own form.
    pub fn write(&mut self, text: &str) -> Result<(), PrintError> {
        self.writer.write(text)
    }

    pub(crate) fn write_line_end(&mut self) -> Result<(), PrintError> {
        self.writer.write(&self.line_end)
    }

    /// Write the indent unit `self.indent_level` times.
    pub(crate) fn write_indent(&mut self) -> Result<(), PrintError> {
        for _ in 0..self.indent_level {
            self.writer.write(&self.indent)?;
        }
        Ok(())
    }

    /// The indentation string for the given depth.
    pub(crate) fn indent_at(&self, level: u32) -> String {
        self.indent.repeat(level as usize)
    }

    /// Write `(a, b, c)`: no space after `(` or before `)`, `, ` between
    /// elements, `()` when empty.
    pub(crate) fn print_sequence<T: PrintNode>(&mut self, nodes: &[T]) -> Result<(), PrintError> {
        self.write("(")?;
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ")?;
            }
            node.print(self)?;
        }
        self.write(")")
    }
}
