//! ESTree-to-JavaScript code generator.
//!
//! This crate provides:
//! - A typed ESTree node model ([`ast`])
//! - JavaScript emission with precedence-driven parenthesization
//! - Comment interleaving and indentation control
//! - Source map generation ([`source_map`])
//!
//! The printed output re-parses to a tree structurally equivalent to the
//! input, up to comment attachment and source positions.
//!
//! ```
//! use esprint::ast::*;
//! use esprint::{print_to_string, PrintOptions};
//!
//! let program = Program::new(vec![Statement::new(StatementKind::VariableDeclaration(
//!     VariableDeclaration {
//!         kind: VariableKind::Let,
//!         declarations: vec![VariableDeclarator {
//!             id: Pattern::ident("x"),
//!             init: Some(Expression::new(ExpressionKind::Literal(Literal::raw("42")))),
//!         }],
//!     },
//! ))]);
//!
//! let output = print_to_string(&program, &PrintOptions::default()).unwrap();
//! assert_eq!(output, "let x = 42;\n");
//! ```

pub mod ast;
pub mod error;
mod precedence;
pub mod printer;
pub mod source_map;
pub mod source_writer;

pub use error::PrintError;
pub use printer::{Overlay, PrintOptions, Printer};
pub use source_map::{SourceMapGenerator, SourceMapSink};
pub use source_writer::{IoOutput, Output};

use ast::Program;

/// Print a program into a fresh string.
pub fn print_to_string(program: &Program, options: &PrintOptions) -> Result<String, PrintError> {
    tracing::debug!(statements = program.body.len(), "printing program");
    let mut output = String::new();
    let mut printer = Printer::new(&mut output, options);
    printer.print_program(program)?;
    drop(printer);
    Ok(output)
}

/// Print a program into a caller-supplied sink. The sink is neither
/// flushed nor closed; on error, already-written text is left as-is.
pub fn print_to(
    program: &Program,
    output: &mut dyn Output,
    options: &PrintOptions,
) -> Result<(), PrintError> {
    tracing::debug!(statements = program.body.len(), "printing program to sink");
    let mut printer = Printer::new(output, options);
    printer.print_program(program)
}
