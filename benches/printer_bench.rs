//! Printer Benchmark
//!
//! Measures emission throughput (bytes/sec) over synthetic programs of
//! increasing size.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use esprint::ast::*;
use esprint::{PrintOptions, print_to_string};

fn ident(name: &str) -> Expression {
    Expression::new(ExpressionKind::Identifier(Identifier::new(name)))
}

fn number(value: u64) -> Expression {
    Expression::new(ExpressionKind::Literal(Literal::raw(value.to_string())))
}

fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::new(ExpressionKind::Binary {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// `function f<i>(a, b) { return a + b * <i>; }`
fn function_declaration(index: u64) -> Statement {
    let body = BlockStatement::new(vec![Statement::new(StatementKind::Return(Some(binary(
        BinaryOperator::Add,
        ident("a"),
        binary(BinaryOperator::Multiply, ident("b"), number(index)),
    ))))]);
    Statement::new(StatementKind::FunctionDeclaration(Function {
        id: Some(Identifier::new(format!("f{index}"))),
        params: vec![Pattern::ident("a"), Pattern::ident("b")],
        body,
        is_async: false,
        is_generator: false,
    }))
}

/// `const r<i> = f<i>(<i>, <i> + 1);`
fn call_declaration(index: u64) -> Statement {
    let call = Expression::new(ExpressionKind::Call {
        callee: Box::new(ident(&format!("f{index}"))),
        arguments: vec![
            number(index),
            binary(BinaryOperator::Add, number(index), number(1)),
        ],
    });
    Statement::new(StatementKind::VariableDeclaration(VariableDeclaration {
        kind: VariableKind::Const,
        declarations: vec![VariableDeclarator {
            id: Pattern::ident(format!("r{index}")),
            init: Some(call),
        }],
    }))
}

fn build_program(functions: u64) -> Program {
    let mut body = Vec::new();
    for index in 0..functions {
        body.push(function_declaration(index));
        body.push(call_declaration(index));
    }
    Program::new(body)
}

fn bench_printer(c: &mut Criterion) {
    let options = PrintOptions::default();
    let mut group = c.benchmark_group("printer");
    for size in [10u64, 100, 1000] {
        let program = build_program(size);
        let bytes = print_to_string(&program, &options).unwrap().len() as u64;
        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(BenchmarkId::from_parameter(size), &program, |b, program| {
            b.iter(|| print_to_string(black_box(program), &options).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_printer);
criterion_main!(benches);
