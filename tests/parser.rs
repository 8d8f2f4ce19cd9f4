use std::rc::Rc;

use linecalc::{
    ast::{AdditiveOperator, Factor, MultiplicativeOperator, NumberLiteral, Statement},
    error::ParseError,
    interpreter::{
        dispatcher::Interpreter,
        environment::Environment,
        lexer::{MAX_NESTING_DEPTH, Token, TokenStream, tokenize},
        parser::{
            core::parse_expression,
            statement::{parse_assignment, parse_standalone_expression},
        },
    },
};

fn stream(line: &str) -> TokenStream {
    TokenStream::from_line(line).unwrap()
}

#[test]
fn tokenize_one_token_per_character() {
    assert_eq!(tokenize("ab1.(,)"),
               vec![Token::Letter('a'),
                    Token::Letter('b'),
                    Token::Digit('1'),
                    Token::Dot,
                    Token::LParen,
                    Token::Comma,
                    Token::RParen]);
    assert_eq!(tokenize("+-*/="),
               vec![Token::Plus, Token::Minus, Token::Star, Token::Slash, Token::Equals]);
}

#[test]
fn tokenize_keeps_unknown_characters() {
    assert_eq!(tokenize("1%€"),
               vec![Token::Digit('1'), Token::Unknown('%'), Token::Unknown('€')]);
}

#[test]
fn tokenize_accepts_letters_of_any_script() {
    assert_eq!(tokenize("éλ"), vec![Token::Letter('é'), Token::Letter('λ')]);
}

#[test]
fn token_stream_rejects_empty_input() {
    assert_eq!(TokenStream::new(Vec::new()).unwrap_err(), ParseError::EmptyInput);
    assert_eq!(TokenStream::from_line("").unwrap_err(), ParseError::EmptyInput);
}

#[test]
fn token_stream_consume() {
    let mut tokens = stream("(1");
    assert_eq!(tokens.peek(), Some(Token::LParen));
    tokens.consume(Token::LParen).unwrap();
    assert_eq!(tokens.position(), 1);

    let err = tokens.consume(Token::RParen).unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedToken { expected: Token::RParen,
                                             found:    Some(Token::Digit('1')),
                                             position: 1, });
    assert_eq!(tokens.position(), 1, "a failed consume must not advance");

    assert_eq!(tokens.advance(), Some(Token::Digit('1')));
    assert!(tokens.is_at_end());
    assert_eq!(tokens.peek(), None);

    let err = tokens.consume(Token::RParen).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { found: None, .. }));

    tokens.reset();
    assert_eq!(tokens.peek(), Some(Token::LParen));
}

#[test]
fn token_stream_nesting_limit() {
    let mut tokens = stream("1");
    for _ in 0..MAX_NESTING_DEPTH {
        tokens.descend().unwrap();
    }
    assert_eq!(tokens.descend().unwrap_err(),
               ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                            position: 0, });

    tokens.ascend();
    assert!(tokens.descend().is_ok());

    tokens.reset();
    for _ in 0..MAX_NESTING_DEPTH {
        tokens.descend().unwrap();
    }
}

#[test]
fn nesting_limit_is_a_syntax_error() {
    let env = Environment::new();
    let line = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    let err = parse_standalone_expression(&mut stream(&line), &env).unwrap_err();
    assert_eq!(err,
               ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                            position: MAX_NESTING_DEPTH, });
    assert!(err.is_syntax_error());

    let line = format!("{}1{}",
                       "(".repeat(MAX_NESTING_DEPTH - 1),
                       ")".repeat(MAX_NESTING_DEPTH - 1));
    assert!(parse_standalone_expression(&mut stream(&line), &env).is_ok());
}

#[test]
fn chains_are_left_to_right() {
    let env = Environment::new();
    let expr = parse_expression(&mut stream("8-3-2"), &env).unwrap();

    assert!(expr.chain.is_empty());
    let ops = expr.first.rest.iter().map(|(op, _)| *op).collect::<Vec<_>>();
    assert_eq!(ops, vec![AdditiveOperator::Sub, AdditiveOperator::Sub]);

    let expr = parse_expression(&mut stream("2*3/4+1"), &env).unwrap();
    let ops = expr.first.first.rest.iter().map(|(op, _)| *op).collect::<Vec<_>>();
    assert_eq!(ops, vec![MultiplicativeOperator::Mul, MultiplicativeOperator::Div]);
    assert_eq!(expr.first.rest.len(), 1);
}

#[test]
fn equality_chain() {
    let env = Environment::new();
    let expr = parse_expression(&mut stream("1==2==3"), &env).unwrap();
    assert_eq!(expr.chain.len(), 2);
}

#[test]
fn numerals_are_kept_verbatim() {
    let env = Environment::new();
    for (line, negative, digits) in [("12.50", false, "12.50"), ("-3", true, "3"), ("1.2.3", false, "1.2.3"),
                                     ("-", true, "")]
    {
        let expr = parse_standalone_expression(&mut stream(line), &env).unwrap();
        assert_eq!(expr.first.first.first,
                   Factor::Number(NumberLiteral::new(negative, digits)),
                   "{line:?}");
    }
}

#[test]
fn builtin_call_forms() {
    let env = Environment::new();

    let expr = parse_standalone_expression(&mut stream("max()"), &env).unwrap();
    assert!(matches!(&expr.first.first.first,
                     Factor::BuiltinCall { name, arguments } if name == "max" && arguments.is_empty()));

    let expr = parse_standalone_expression(&mut stream("max(1,2+3,(4))"), &env).unwrap();
    assert!(matches!(&expr.first.first.first,
                     Factor::BuiltinCall { arguments, .. } if arguments.len() == 3));

    // Unknown names still parse as calls.
    assert!(parse_standalone_expression(&mut stream("nope(1)"), &env).is_ok());
}

#[test]
fn variable_reference_captures_definition() {
    let mut env = Environment::new();
    let definition = parse_expression(&mut stream("1+2"), &env).unwrap();
    env.define("x", definition);

    let expr = parse_standalone_expression(&mut stream("x"), &env).unwrap();
    let Factor::Variable { name, bound } = &expr.first.first.first else {
        panic!("expected a variable reference");
    };
    assert_eq!(name, "x");
    assert!(Rc::ptr_eq(bound, &env.lookup("x").unwrap()));

    env.define("x", parse_expression(&mut stream("5"), &env).unwrap());
    assert!(!Rc::ptr_eq(bound, &env.lookup("x").unwrap()));
    assert_eq!(env.evaluate(&expr), Ok(3.0));
}

#[test]
fn undefined_variable_is_reported_at_parse_time() {
    let env = Environment::new();
    let err = parse_standalone_expression(&mut stream("1+zz"), &env).unwrap_err();
    assert_eq!(err,
               ParseError::UndefinedVariable { name:     "zz".to_string(),
                                               position: 4, });
    assert!(!err.is_syntax_error());
}

#[test]
fn assignment_requires_name_and_single_equals() {
    let env = Environment::new();

    let statement = parse_assignment(&mut stream("abc = 1 + 2"), &env).unwrap();
    assert!(matches!(statement, Statement::Assignment { ref name, .. } if name == "abc"));

    let err = parse_assignment(&mut stream("1 = 2"), &env).unwrap_err();
    assert!(matches!(err, ParseError::ExpectedIdentifier { .. }));

    let err = parse_assignment(&mut stream("a + 1"), &env).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { expected: Token::Equals, .. }));

    let err = parse_assignment(&mut stream("a == 1"), &env).unwrap_err();
    assert!(err.is_syntax_error());
}

#[test]
fn dispatcher_falls_back_to_expression() {
    let mut interpreter = Interpreter::new();
    interpreter.execute_line("a = 2").unwrap();

    assert!(matches!(interpreter.parse_line("a = 3").unwrap(), Statement::Assignment { .. }));
    assert!(matches!(interpreter.parse_line("a == 3").unwrap(), Statement::Expression(_)));
    assert!(matches!(interpreter.parse_line("max(a, 1)").unwrap(), Statement::Expression(_)));
}

#[test]
fn display_renders_source() {
    let mut interpreter = Interpreter::new();
    interpreter.execute_line("x=1").unwrap();

    for (line, rendered) in [("(2+3)*4", "(2 + 3) * 4"),
                             ("max(x,-2)==1", "max(x, -2) == 1"),
                             ("y=x/2-1", "y = x / 2 - 1"),
                             ("f()", "f()")]
    {
        let statement = interpreter.parse_line(line).unwrap();
        assert_eq!(statement.to_string(), rendered);
    }
}

#[test]
fn evaluation_is_idempotent() {
    let mut interpreter = Interpreter::new();
    interpreter.execute_line("x = 1 / 3").unwrap();
    interpreter.execute_line("y = max(x, 0.25) * 7 - x").unwrap();

    let Statement::Expression(expr) = interpreter.parse_line("y / x + x == y / x + x").unwrap()
    else {
        panic!("expected an expression");
    };
    let env = interpreter.environment();
    let first = env.evaluate(&expr).unwrap();
    let second = env.evaluate(&expr).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(first, 1.0);
}
