//! Shared AST builders for the integration tests.

#![allow(dead_code)]

use esprint::ast::*;
use esprint::{PrintOptions, print_to_string};

pub fn print(program: &Program) -> String {
    print_to_string(program, &PrintOptions::default()).unwrap()
}

pub fn print_with_comments(program: &Program) -> String {
    print_to_string(program, &PrintOptions::default().with_comments()).unwrap()
}

/// Print a single statement with default options and strip the final
/// newline for terser assertions.
pub fn print_statement(statement: Statement) -> String {
    let mut output = print(&Program::new(vec![statement]));
    assert!(output.ends_with('\n'));
    output.pop();
    output
}

/// Print a bare expression through the expression-level entry point.
pub fn print_expression(expression: Expression) -> String {
    let mut output = String::new();
    let options = PrintOptions::default();
    let mut printer = esprint::Printer::new(&mut output, &options);
    printer.print_expression(&expression).unwrap();
    drop(printer);
    output
}

pub fn stmt(kind: StatementKind) -> Statement {
    Statement::new(kind)
}

pub fn expr_statement(expression: Expression) -> Statement {
    Statement::new(StatementKind::Expression(expression))
}

pub fn ident(name: &str) -> Expression {
    Expression::new(ExpressionKind::Identifier(Identifier::new(name)))
}

pub fn raw(text: &str) -> Expression {
    Expression::new(ExpressionKind::Literal(Literal::raw(text)))
}

pub fn string(value: &str) -> Literal {
    Literal::raw(format!("\"{value}\""))
}

pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::new(ExpressionKind::Binary {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn logical(operator: LogicalOperator, left: Expression, right: Expression) -> Expression {
    Expression::new(ExpressionKind::Logical {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn assign(left: Pattern, right: Expression) -> Expression {
    Expression::new(ExpressionKind::Assignment {
        operator: AssignmentOperator::Assign,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::new(ExpressionKind::Call { callee: Box::new(callee), arguments })
}

pub fn member(object: Expression, property: &str) -> Expression {
    Expression::new(ExpressionKind::Member {
        object: Box::new(object),
        property: Box::new(ident(property)),
        computed: false,
    })
}

pub fn object(properties: Vec<Property>) -> Expression {
    Expression::new(ExpressionKind::Object(ObjectExpression::new(properties)))
}

pub fn property(key: &str, value: Expression) -> Property {
    Property {
        key: ident(key),
        value,
        kind: PropertyKind::Init,
        computed: false,
        shorthand: false,
        method: false,
        comments: Vec::new(),
    }
}

pub fn declaration(kind: VariableKind, name: &str, init: Option<Expression>) -> Statement {
    Statement::new(StatementKind::VariableDeclaration(VariableDeclaration {
        kind,
        declarations: vec![VariableDeclarator { id: Pattern::ident(name), init }],
    }))
}

pub fn block(body: Vec<Statement>) -> Statement {
    Statement::new(StatementKind::Block(BlockStatement::new(body)))
}

pub fn function(name: Option<&str>, params: Vec<Pattern>, body: Vec<Statement>) -> Function {
    Function {
        id: name.map(Identifier::new),
        params,
        body: BlockStatement::new(body),
        is_async: false,
        is_generator: false,
    }
}

pub fn arrow(params: Vec<Pattern>, body: ArrowFunctionBody) -> Expression {
    Expression::new(ExpressionKind::ArrowFunction(ArrowFunction {
        params,
        body,
        is_async: false,
    }))
}

pub fn method(key: &str, kind: MethodKind, value: Function) -> MethodDefinition {
    MethodDefinition {
        key: ident(key),
        value,
        kind,
        is_static: false,
        computed: false,
        comments: Vec::new(),
    }
}
