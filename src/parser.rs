//! Text front end for building expressions: `+ - * /`, unary minus, parentheses,
//! integer literals, identifiers and small non-negative integer powers.

use crate::error::{CasError, Result};
use crate::expr::{Expr, fraction, neg, product, sub, sum};
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{alpha1, alphanumeric0, char, digit1, multispace0};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::error::VerboseError;
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded};
use num_bigint::BigInt;

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(e) => Err(CasError::Parse(format!("{e:?}"))),
    }
}

/// Parse `lhs = rhs` into `lhs - rhs`, the form the solvers expect. A bare
/// expression is read as `expr = 0`.
pub fn parse_equation(input: &str) -> Result<Expr> {
    let equation = pair(
        ws(parse_add_sub),
        opt(preceded(char('='), ws(parse_add_sub))),
    );
    match all_consuming(equation)(input) {
        Ok((_, (lhs, Some(rhs)))) => Ok(sub(lhs, rhs)),
        Ok((_, (lhs, None))) => Ok(lhs),
        Err(e) => Err(CasError::Parse(format!("{e:?}"))),
    }
}

fn parse_add_sub(input: &str) -> ParseResult<'_, Expr> {
    let (rest, first) = parse_mul_div(input)?;
    let (rest, mut terms) = fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_mul_div),
        Vec::new,
        |mut terms: Vec<Expr>, (op, rhs)| {
            terms.push(if op == '-' { neg(rhs) } else { rhs });
            terms
        },
    )(rest)?;
    if terms.is_empty() {
        Ok((rest, first))
    } else {
        terms.insert(0, first);
        Ok((rest, sum(terms)))
    }
}

fn parse_mul_div(input: &str) -> ParseResult<'_, Expr> {
    let (rest, init) = parse_pow(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), parse_pow),
        move || init.clone(),
        |acc, (op, rhs)| {
            if op == '/' {
                fraction(acc, rhs)
            } else {
                product(vec![acc, rhs])
            }
        },
    )(rest)
}

fn parse_pow(input: &str) -> ParseResult<'_, Expr> {
    let (rest, base) = parse_unary(input)?;
    let mut exponent = preceded(ws(char('^')), map_res(ws(digit1), |s: &str| s.parse::<u8>()));
    match exponent(rest) {
        Ok((next, exp)) => Ok((next, product(vec![base; usize::from(exp)]))),
        Err(_) => Ok((rest, base)),
    }
}

fn parse_unary(input: &str) -> ParseResult<'_, Expr> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_unary)(input) {
        Ok((rest, neg(expr)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: &str) -> ParseResult<'_, Expr> {
    alt((parse_parens, parse_number, parse_identifier))(input)
}

fn parse_parens(input: &str) -> ParseResult<'_, Expr> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_number(input: &str) -> ParseResult<'_, Expr> {
    map(map_res(ws(digit1), |s: &str| s.parse::<BigInt>()), |n| {
        Expr::integer(n)
    })(input)
}

fn parse_identifier(input: &str) -> ParseResult<'_, Expr> {
    map(ws(recognize(pair(alpha1, alphanumeric0))), |s: &str| {
        Expr::var(s)
    })(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}
