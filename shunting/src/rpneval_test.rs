use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::EvalErr;
use lexers::MathToken;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

fn eval(expr: &str, x: f64) -> Result<f64, EvalErr> {
    ShuntingParser::parse_str(expr).unwrap().eval(x)
}

#[test]
fn test_eval1() {
    fuzzy_eq!(eval("3+4*2/(1-5)^2^3", 0.0).unwrap(), 3.0001220703125);
}

#[test]
fn test_eval2() {
    fuzzy_eq!(eval("(1+9^2) / (1 + 6^2)^0.5", 0.0).unwrap(), 13.480716959039299);
}

#[test]
fn test_eval3() {
    fuzzy_eq!(eval("sin(0.345)^2 + cos(0.345)^2", 0.0).unwrap(), 1.0);
    fuzzy_eq!(eval("sin(x)^2 + cos(x)^2", 12.5).unwrap(), 1.0);
}

#[test]
fn test_eval4() {
    fuzzy_eq!(eval("(3+4)*3", 0.0).unwrap(), 21.0);
    fuzzy_eq!(eval("(3+4)3", 0.0).unwrap(), 21.0);
    fuzzy_eq!(eval("3(3+4)", 0.0).unwrap(), 21.0);
}

#[test]
fn powers() {
    fuzzy_eq!(eval("2^3", 0.0).unwrap(), 8.0);
    fuzzy_eq!(eval("2^3^2", 0.0).unwrap(), 512.0);
    fuzzy_eq!(eval("(2^3)^2", 0.0).unwrap(), 64.0);
    fuzzy_eq!(eval("x^0.5", 2.25).unwrap(), 1.5);
    assert!(eval("x^0.5", -4.0).unwrap().is_nan());
}

#[test]
fn bound_variable() {
    fuzzy_eq!(eval("x^2-4*x-10", 0.0).unwrap(), -10.0);
    fuzzy_eq!(eval("x^2-4*x-10", 1.0).unwrap(), -13.0);
    // any name is the same variable
    fuzzy_eq!(eval("y+1", 2.0).unwrap(), 3.0);
    fuzzy_eq!(eval("x*y*abc", 2.0).unwrap(), 8.0);
}

#[test]
fn ieee_degenerates() {
    assert_eq!(eval("1/x", 0.0).unwrap(), f64::INFINITY);
    assert_eq!(eval("-1/x", 0.0), Err(EvalErr::StackUnderflow));
    assert_eq!(eval("(0-1)/x", 0.0).unwrap(), f64::NEG_INFINITY);
    assert!(eval("x/x", 0.0).unwrap().is_nan());
}

#[test]
fn underflow() {
    assert_eq!(eval("-x", 1.0), Err(EvalErr::StackUnderflow));
    assert_eq!(eval("2*", 1.0), Err(EvalErr::StackUnderflow));
    let rpn = RPNExpr(vec![MathToken::Function(format!("sin"))]);
    assert_eq!(rpn.eval(1.0), Err(EvalErr::StackUnderflow));
}

#[test]
fn result_arity() {
    assert_eq!(eval("", 1.0), Err(EvalErr::ResultArity(0)));
    assert_eq!(eval("()", 1.0), Err(EvalErr::ResultArity(0)));
    let rpn = RPNExpr(vec![MathToken::Number(format!("1")), MathToken::Variable(format!("x"))]);
    assert_eq!(rpn.eval(1.0), Err(EvalErr::ResultArity(2)));
}

#[test]
fn number_prefixes() {
    fuzzy_eq!(eval("1.2.3", 0.0).unwrap(), 1.2);
    fuzzy_eq!(eval("2*1.5.0", 0.0).unwrap(), 3.0);
    fuzzy_eq!(eval("3.", 0.0).unwrap(), 3.0);
    fuzzy_eq!(eval(".5", 0.0).unwrap(), 0.5);
    fuzzy_eq!(eval("1..5", 0.0).unwrap(), 1.0);
    fuzzy_eq!(eval("2.5.x", 2.0).unwrap(), 5.0);
}

#[test]
fn malformed_tokens() {
    assert_eq!(eval(".", 0.0), Err(EvalErr::BadNumber(format!("."))));
    assert_eq!(eval("..", 0.0), Err(EvalErr::BadNumber(format!(".."))));
    let rpn = RPNExpr(vec![MathToken::Number(String::new())]);
    assert_eq!(rpn.eval(0.0), Err(EvalErr::BadNumber(String::new())));

    let rpn = RPNExpr(vec![MathToken::Variable(format!("x")), MathToken::Function(format!("tan"))]);
    assert_eq!(rpn.eval(1.0), Err(EvalErr::UnknownFunction(format!("tan"))));
    let rpn = RPNExpr(vec![
        MathToken::Number(format!("7")),
        MathToken::Number(format!("2")),
        MathToken::Op(format!("%")),
    ]);
    assert_eq!(rpn.eval(1.0), Err(EvalErr::BadOperator(format!("%"))));
    let rpn = RPNExpr(vec![MathToken::OParen]);
    assert_eq!(rpn.eval(1.0), Err(EvalErr::BadToken(format!("("))));
}
