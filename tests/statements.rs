//! Statement-level formatting scenarios.

mod common;

use common::*;
use esprint::ast::*;

#[test]
fn let_declaration_with_empty_object() {
    let statement = declaration(VariableKind::Let, "x", Some(object(vec![])));
    assert_eq!(print_statement(statement), "let x = {};");
}

#[test]
fn multiple_declarators_share_one_keyword() {
    let statement = Statement::new(StatementKind::VariableDeclaration(VariableDeclaration {
        kind: VariableKind::Var,
        declarations: vec![
            VariableDeclarator { id: Pattern::ident("a"), init: Some(raw("1")) },
            VariableDeclarator { id: Pattern::ident("b"), init: None },
        ],
    }));
    assert_eq!(print_statement(statement), "var a = 1, b;");
}

#[test]
fn if_without_alternate() {
    let statement = stmt(StatementKind::If {
        test: ident("a"),
        consequent: Box::new(block(vec![expr_statement(call(ident("f"), vec![]))])),
        alternate: None,
    });
    assert_eq!(print_statement(statement), "if (a) {\n\tf();\n}");
}

#[test]
fn if_else_chain() {
    let inner = stmt(StatementKind::If {
        test: ident("b"),
        consequent: Box::new(block(vec![])),
        alternate: Some(Box::new(block(vec![]))),
    });
    let statement = stmt(StatementKind::If {
        test: ident("a"),
        consequent: Box::new(block(vec![])),
        alternate: Some(Box::new(inner)),
    });
    assert_eq!(print_statement(statement), "if (a) {} else if (b) {} else {}");
}

#[test]
fn if_with_unbraced_consequent() {
    let statement = stmt(StatementKind::If {
        test: ident("a"),
        consequent: Box::new(expr_statement(call(ident("f"), vec![]))),
        alternate: None,
    });
    assert_eq!(print_statement(statement), "if (a) f();");
}

#[test]
fn classic_for_loop() {
    let init = ForInit::Declaration(VariableDeclaration {
        kind: VariableKind::Let,
        declarations: vec![VariableDeclarator { id: Pattern::ident("i"), init: Some(raw("0")) }],
    });
    let statement = stmt(StatementKind::For {
        init: Some(init),
        test: Some(binary(BinaryOperator::LessThan, ident("i"), raw("10"))),
        update: Some(Expression::new(ExpressionKind::Update {
            operator: UpdateOperator::Increment,
            argument: Box::new(ident("i")),
            prefix: false,
        })),
        body: Box::new(block(vec![])),
    });
    assert_eq!(print_statement(statement), "for (let i = 0; i < 10; i++) {}");
}

#[test]
fn for_loop_with_empty_header() {
    let statement = stmt(StatementKind::For {
        init: None,
        test: None,
        update: None,
        body: Box::new(block(vec![])),
    });
    assert_eq!(print_statement(statement), "for (; ; ) {}");
}

#[test]
fn for_in_loop() {
    let left = ForTarget::Declaration(VariableDeclaration {
        kind: VariableKind::Const,
        declarations: vec![VariableDeclarator { id: Pattern::ident("key"), init: None }],
    });
    let statement = stmt(StatementKind::ForIn {
        left,
        right: ident("obj"),
        body: Box::new(block(vec![])),
    });
    assert_eq!(print_statement(statement), "for (const key in obj) {}");
}

#[test]
fn for_of_loop_with_pattern_target() {
    let statement = stmt(StatementKind::ForOf {
        left: ForTarget::Pattern(Pattern::ident("item")),
        right: ident("items"),
        body: Box::new(expr_statement(call(ident("use"), vec![ident("item")]))),
    });
    assert_eq!(print_statement(statement), "for (item of items) use(item);");
}

#[test]
fn while_loop() {
    let statement = stmt(StatementKind::While {
        test: ident("running"),
        body: Box::new(block(vec![expr_statement(call(ident("tick"), vec![]))])),
    });
    assert_eq!(print_statement(statement), "while (running) {\n\ttick();\n}");
}

#[test]
fn do_while_loop() {
    let statement = stmt(StatementKind::DoWhile {
        body: Box::new(block(vec![expr_statement(call(ident("step"), vec![]))])),
        test: ident("more"),
    });
    assert_eq!(print_statement(statement), "do {\n\tstep();\n} while (more);");
}

#[test]
fn switch_indents_cases_and_consequents() {
    let statement = stmt(StatementKind::Switch {
        discriminant: ident("x"),
        cases: vec![
            SwitchCase::new(
                Some(raw("1")),
                vec![
                    expr_statement(call(ident("f"), vec![ident("x")])),
                    stmt(StatementKind::Break(None)),
                ],
            ),
            SwitchCase::new(None, vec![expr_statement(call(ident("g"), vec![]))]),
        ],
    });
    assert_eq!(
        print_statement(statement),
        "switch (x) {\n\tcase 1:\n\t\tf(x);\n\t\tbreak;\n\tdefault:\n\t\tg();\n}"
    );
}

#[test]
fn try_catch_finally() {
    let statement = stmt(StatementKind::Try {
        block: BlockStatement::new(vec![expr_statement(call(ident("risky"), vec![]))]),
        handler: Some(CatchClause {
            param: Some(Pattern::ident("error")),
            body: BlockStatement::new(vec![expr_statement(call(
                ident("report"),
                vec![ident("error")],
            ))]),
        }),
        finalizer: Some(BlockStatement::new(vec![expr_statement(call(
            ident("cleanup"),
            vec![],
        ))])),
    });
    assert_eq!(
        print_statement(statement),
        "try {\n\trisky();\n} catch (error) {\n\treport(error);\n} finally {\n\tcleanup();\n}"
    );
}

#[test]
fn catch_without_binding() {
    let statement = stmt(StatementKind::Try {
        block: BlockStatement::default(),
        handler: Some(CatchClause { param: None, body: BlockStatement::default() }),
        finalizer: None,
    });
    assert_eq!(print_statement(statement), "try {} catch {}");
}

#[test]
fn return_with_and_without_argument() {
    assert_eq!(print_statement(stmt(StatementKind::Return(None))), "return;");
    assert_eq!(
        print_statement(stmt(StatementKind::Return(Some(binary(
            BinaryOperator::Add,
            ident("a"),
            ident("b")
        ))))),
        "return a + b;"
    );
}

#[test]
fn throw_statement() {
    let argument = Expression::new(ExpressionKind::New {
        callee: Box::new(ident("Error")),
        arguments: vec![Expression::new(ExpressionKind::Literal(string("boom")))],
    });
    assert_eq!(print_statement(stmt(StatementKind::Throw(argument))), "throw new Error(\"boom\");");
}

#[test]
fn labeled_break_and_continue() {
    let body = block(vec![
        stmt(StatementKind::Break(Some(Identifier::new("outer")))),
        stmt(StatementKind::Continue(None)),
    ]);
    let statement = stmt(StatementKind::Labeled {
        label: Identifier::new("outer"),
        body: Box::new(stmt(StatementKind::While { test: ident("x"), body: Box::new(body) })),
    });
    assert_eq!(
        print_statement(statement),
        "outer: while (x) {\n\tbreak outer;\n\tcontinue;\n}"
    );
}

#[test]
fn with_statement() {
    let statement = stmt(StatementKind::With {
        object: ident("env"),
        body: Box::new(block(vec![])),
    });
    assert_eq!(print_statement(statement), "with (env) {}");
}

#[test]
fn empty_and_debugger_statements() {
    assert_eq!(print_statement(stmt(StatementKind::Empty)), ";");
    assert_eq!(print_statement(stmt(StatementKind::Debugger)), "debugger;");
}

#[test]
fn nested_blocks_indent_each_level() {
    let inner = block(vec![expr_statement(call(ident("f"), vec![]))]);
    let statement = block(vec![inner]);
    assert_eq!(print_statement(statement), "{\n\t{\n\t\tf();\n\t}\n}");
}

#[test]
fn function_declaration_variants() {
    let plain = stmt(StatementKind::FunctionDeclaration(function(
        Some("f"),
        vec![Pattern::ident("a"), Pattern::ident("b")],
        vec![stmt(StatementKind::Return(Some(ident("a"))))],
    )));
    assert_eq!(print_statement(plain), "function f(a, b) {\n\treturn a;\n}");

    let generator = stmt(StatementKind::FunctionDeclaration(Function {
        id: Some(Identifier::new("gen")),
        params: vec![],
        body: BlockStatement::default(),
        is_async: false,
        is_generator: true,
    }));
    assert_eq!(print_statement(generator), "function* gen() {}");

    let async_function = stmt(StatementKind::FunctionDeclaration(Function {
        id: Some(Identifier::new("load")),
        params: vec![],
        body: BlockStatement::default(),
        is_async: true,
        is_generator: false,
    }));
    assert_eq!(print_statement(async_function), "async function load() {}");
}

#[test]
fn rest_parameter_in_function() {
    let statement = stmt(StatementKind::FunctionDeclaration(function(
        Some("f"),
        vec![Pattern::ident("a"), Pattern::Rest(Box::new(Pattern::ident("rest")))],
        vec![],
    )));
    assert_eq!(print_statement(statement), "function f(a, ...rest) {}");
}

#[test]
fn default_parameter_in_function() {
    let statement = stmt(StatementKind::FunctionDeclaration(function(
        Some("f"),
        vec![Pattern::Assignment {
            left: Box::new(Pattern::ident("a")),
            right: Box::new(raw("1")),
        }],
        vec![],
    )));
    assert_eq!(print_statement(statement), "function f(a = 1) {}");
}
