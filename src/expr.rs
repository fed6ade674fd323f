use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{CasError, Result};
use crate::rational::Rational;

pub type Assignment = BTreeMap<String, Rational>;

/// Bare constants and bare variables are degenerate products: `{c, [], []}` and
/// `{1, [name], []}`. The tree is only canonical after [`crate::normalize`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Expr {
    Sum(Vec<Expr>),
    Product(Product),
    Fraction(Box<Expr>, Box<Expr>),
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Product {
    pub constant: Rational,
    pub variables: Vec<String>,
    pub factors: Vec<Expr>,
}

impl Product {
    pub fn new(constant: Rational, variables: Vec<String>, factors: Vec<Expr>) -> Self {
        Product {
            constant,
            variables,
            factors,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.variables.is_empty() && self.factors.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Add,
    Mul,
    Div,
    Neg,
}

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Neg => '-',
        }
    }
}

impl TryFrom<char> for Op {
    type Error = CasError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(Op::Add),
            '*' => Ok(Op::Mul),
            '/' => Ok(Op::Div),
            '-' => Ok(Op::Neg),
            other => Err(CasError::UnknownOperator(other)),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Atom {
    Expr(Expr),
    Rational(Rational),
    Integer(i64),
    Variable(String),
}

impl From<Expr> for Atom {
    fn from(expr: Expr) -> Self {
        Atom::Expr(expr)
    }
}

impl From<Rational> for Atom {
    fn from(value: Rational) -> Self {
        Atom::Rational(value)
    }
}

impl From<i64> for Atom {
    fn from(value: i64) -> Self {
        Atom::Integer(value)
    }
}

impl From<i32> for Atom {
    fn from(value: i32) -> Self {
        Atom::Integer(value.into())
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Atom::Variable(name.to_string())
    }
}

impl From<String> for Atom {
    fn from(name: String) -> Self {
        Atom::Variable(name)
    }
}

impl From<Atom> for Expr {
    fn from(atom: Atom) -> Self {
        match atom {
            Atom::Expr(expr) => expr,
            Atom::Rational(value) => Expr::constant(value),
            Atom::Integer(value) => Expr::integer(value),
            Atom::Variable(name) => Expr::var(name),
        }
    }
}

impl Expr {
    /// Build without simplifying. `/` takes exactly two operands and `-` one.
    pub fn build<I, A>(op: Op, atoms: I) -> Result<Expr>
    where
        I: IntoIterator<Item = A>,
        A: Into<Atom>,
    {
        let operands: Vec<Expr> = atoms
            .into_iter()
            .map(|atom| {
                let atom: Atom = atom.into();
                Expr::from(atom)
            })
            .collect();
        match op {
            Op::Add => Ok(Expr::Sum(operands)),
            Op::Mul => Ok(Expr::Product(Product::new(
                Rational::one(),
                Vec::new(),
                operands,
            ))),
            Op::Div => {
                let [numerator, denominator] = exact_operands::<2>(op, operands)?;
                Ok(fraction(numerator, denominator))
            }
            Op::Neg => {
                let [operand] = exact_operands::<1>(op, operands)?;
                Ok(neg(operand))
            }
        }
    }

    pub fn constant(value: Rational) -> Self {
        Expr::Product(Product::new(value, Vec::new(), Vec::new()))
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Expr::constant(Rational::integer(value))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Product(Product::new(Rational::one(), vec![name.into()], Vec::new()))
    }

    pub fn zero() -> Self {
        Expr::constant(Rational::zero())
    }

    pub fn one() -> Self {
        Expr::constant(Rational::one())
    }

    pub fn as_constant(&self) -> Option<&Rational> {
        match self {
            Expr::Product(p) if p.is_constant() => Some(&p.constant),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Expr::Product(p)
                if p.constant.is_one() && p.factors.is_empty() && p.variables.len() == 1 =>
            {
                Some(&p.variables[0])
            }
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_constant().is_some_and(Zero::is_zero)
    }

    pub fn is_one(&self) -> bool {
        self.as_constant().is_some_and(One::is_one)
    }

    pub fn has_variable(&self, name: &str) -> bool {
        match self {
            Expr::Sum(addends) => addends.iter().any(|a| a.has_variable(name)),
            Expr::Product(p) => {
                p.variables.iter().any(|v| v == name)
                    || p.factors.iter().any(|f| f.has_variable(name))
            }
            Expr::Fraction(n, d) => n.has_variable(name) || d.has_variable(name),
        }
    }

    pub fn first_variable(&self) -> Option<&str> {
        match self {
            Expr::Sum(addends) => addends.iter().find_map(Expr::first_variable),
            Expr::Product(p) => p
                .variables
                .first()
                .map(String::as_str)
                .or_else(|| p.factors.iter().find_map(Expr::first_variable)),
            Expr::Fraction(n, d) => n.first_variable().or_else(|| d.first_variable()),
        }
    }

    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Sum(addends) => addends.iter().for_each(|a| a.collect_variables(names)),
            Expr::Product(p) => {
                names.extend(p.variables.iter().map(String::as_str));
                p.factors.iter().for_each(|f| f.collect_variables(names));
            }
            Expr::Fraction(n, d) => {
                n.collect_variables(names);
                d.collect_variables(names);
            }
        }
    }

    pub fn eval(&self, values: &Assignment) -> Result<Rational> {
        match self {
            Expr::Sum(addends) => addends.iter().try_fold(Rational::zero(), |acc, a| {
                Ok(acc + a.eval(values)?)
            }),
            Expr::Product(p) => {
                let mut result = p.constant.clone();
                for name in &p.variables {
                    let value = values
                        .get(name)
                        .ok_or_else(|| CasError::UnboundVariable(name.clone()))?;
                    result *= value;
                }
                for factor in &p.factors {
                    result *= factor.eval(values)?;
                }
                Ok(result)
            }
            Expr::Fraction(n, d) => {
                let numerator = n.eval(values)?;
                numerator.checked_div(&d.eval(values)?)
            }
        }
    }

    pub fn scaled(self, factor: &Rational) -> Expr {
        match self {
            Expr::Product(mut p) => {
                p.constant *= factor;
                Expr::Product(p)
            }
            other => Expr::Product(Product::new(factor.clone(), Vec::new(), vec![other])),
        }
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

fn exact_operands<const N: usize>(op: Op, operands: Vec<Expr>) -> Result<[Expr; N]> {
    let found = operands.len();
    <[Expr; N]>::try_from(operands).map_err(|_| CasError::Arity {
        op: op.symbol(),
        expected: N,
        found,
    })
}

impl From<Rational> for Expr {
    fn from(value: Rational) -> Self {
        Expr::constant(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::integer(value)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::var(name)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::pretty(self))
    }
}

pub fn var(name: impl Into<String>) -> Expr {
    Expr::var(name)
}

pub fn integer(value: i64) -> Expr {
    Expr::integer(value)
}

pub fn sum(addends: Vec<Expr>) -> Expr {
    Expr::Sum(addends)
}

pub fn product(factors: Vec<Expr>) -> Expr {
    Expr::Product(Product::new(Rational::one(), Vec::new(), factors))
}

pub fn fraction(numerator: Expr, denominator: Expr) -> Expr {
    Expr::Fraction(numerator.boxed(), denominator.boxed())
}

pub fn neg(a: Expr) -> Expr {
    Expr::Product(Product::new(-Rational::one(), Vec::new(), vec![a]))
}

pub fn sub(a: Expr, b: Expr) -> Expr {
    Expr::Sum(vec![a, neg(b)])
}
