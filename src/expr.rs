//! A small stack-machine expression evaluator: infix to postfix
//! conversion, postfix evaluation, and a parse-tree builder/evaluator for
//! fully parenthesized expressions.
//!
//! The conversion routines work on whitespace-separated tokens (operands
//! are alphanumeric, operators single characters); the parse-tree builder
//! brings its own character-level scanner, so `((10+5)*3)` and
//! `( ( 10 + 5 ) * 3 )` are the same expression. Arithmetic is `f64`
//! throughout: division is real division, never truncation.

use crate::errors::TreeError;
use crate::node::ExprNode;
use crate::stack::Stack;
use itertools::Itertools;
use tracing::{debug, instrument};

/// A parse-tree value: either a numeric operand or a binary operator.
/// `Empty` marks a node whose value was never assigned; it only survives
/// parsing for malformed input and is rejected during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Symbol {
    #[default]
    Empty,
    Operand(f64),
    Operator(char),
}

fn precedence(token: &str) -> Option<u8> {
    match token {
        "*" | "/" => Some(3),
        "+" | "-" => Some(2),
        "(" => Some(1),
        _ => None,
    }
}

fn apply(op: char, lhs: f64, rhs: f64) -> Result<f64, TreeError> {
    match op {
        '+' => Ok(lhs + rhs),
        '-' => Ok(lhs - rhs),
        '*' => Ok(lhs * rhs),
        '/' => {
            if rhs == 0.0 {
                Err(TreeError::DivisionByZero)
            } else {
                Ok(lhs / rhs)
            }
        }
        _ => Err(TreeError::UnknownOperator(op)),
    }
}

/// Converts a whitespace-tokenized infix expression to postfix with the
/// shunting-yard algorithm (precedence: `*`, `/` over `+`, `-`).
///
/// Operands are emitted as met; an operator first pops every stacked
/// operator of equal or higher precedence. A `)` with no matching `(`, or
/// a `(` never closed, is [`TreeError::UnbalancedParentheses`].
#[instrument(level = "debug")]
pub fn infix_to_postfix(infix: &str) -> Result<String, TreeError> {
    let mut operators: Stack<&str> = Stack::new();
    let mut output: Vec<&str> = Vec::new();

    for token in infix.split_whitespace() {
        if token.chars().all(|c| c.is_ascii_alphanumeric()) {
            output.push(token);
        } else if token == "(" {
            operators.push(token);
        } else if token == ")" {
            loop {
                match operators.pop() {
                    Some("(") => break,
                    Some(op) => output.push(op),
                    None => return Err(TreeError::UnbalancedParentheses),
                }
            }
        } else {
            let Some(prec) = precedence(token) else {
                return Err(match token.chars().exactly_one() {
                    Ok(c) => TreeError::UnknownOperator(c),
                    Err(_) => {
                        TreeError::MalformedExpression(format!("unrecognized token '{token}'"))
                    }
                });
            };
            // A stacked `(` has precedence 1 and operators start at 2, so
            // it is never popped here.
            while operators
                .peek()
                .and_then(|top| precedence(top))
                .is_some_and(|top_prec| top_prec >= prec)
            {
                if let Some(op) = operators.pop() {
                    output.push(op);
                }
            }
            operators.push(token);
        }
    }

    while let Some(op) = operators.pop() {
        if op == "(" {
            return Err(TreeError::UnbalancedParentheses);
        }
        output.push(op);
    }

    let postfix = output.join(" ");
    debug!(%postfix, "converted infix expression");
    Ok(postfix)
}

/// Evaluates a whitespace-tokenized postfix expression.
///
/// Numeric tokens are pushed; an operator pops the right operand first,
/// then the left, and pushes `left OP right`. Underflow and leftover
/// operands are [`TreeError::MalformedExpression`].
pub fn eval_postfix(postfix: &str) -> Result<f64, TreeError> {
    let mut operands: Stack<f64> = Stack::new();

    for token in postfix.split_whitespace() {
        if let Ok(value) = token.parse::<f64>() {
            operands.push(value);
            continue;
        }
        let op = token
            .chars()
            .exactly_one()
            .map_err(|_| TreeError::MalformedExpression(format!("unrecognized token '{token}'")))?;
        let rhs = operands
            .pop()
            .ok_or_else(|| missing_operand(op))?;
        let lhs = operands
            .pop()
            .ok_or_else(|| missing_operand(op))?;
        operands.push(apply(op, lhs, rhs)?);
    }

    let result = operands
        .pop()
        .ok_or_else(|| TreeError::MalformedExpression("empty expression".into()))?;
    if !operands.is_empty() {
        return Err(TreeError::MalformedExpression(format!(
            "{} operand(s) left unconsumed",
            operands.len()
        )));
    }
    Ok(result)
}

fn missing_operand(op: char) -> TreeError {
    TreeError::MalformedExpression(format!("operator '{op}' is missing an operand"))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Open,
    Close,
    Operand(f64),
    Operator(char),
}

/// Character-level scanner: whitespace is skipped and a run of digits
/// forms a single operand token.
fn scan(expr: &str) -> Result<Vec<Token>, TreeError> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                tokens.push(Token::Open);
                chars.next();
            }
            ')' => {
                tokens.push(Token::Close);
                chars.next();
            }
            '+' | '-' | '*' | '/' => {
                tokens.push(Token::Operator(c));
                chars.next();
            }
            c if c.is_ascii_digit() => {
                let mut value = 0.0;
                while let Some(digit) = chars.peek().and_then(|&(_, d)| d.to_digit(10)) {
                    value = value * 10.0 + f64::from(digit);
                    chars.next();
                }
                tokens.push(Token::Operand(value));
            }
            _ => {
                return Err(TreeError::MalformedExpression(format!(
                    "unexpected character '{c}' at position {pos}"
                )))
            }
        }
    }
    Ok(tokens)
}

/// A parse-tree node under construction. Children are arena indices so the
/// builder can hop back to a parent without aliasing mutable references;
/// the finished arena is reified into an owned [`ExprNode`] tree.
#[derive(Debug, Default)]
struct Slot {
    value: Symbol,
    left: Option<usize>,
    right: Option<usize>,
}

/// Builds a parse tree from a fully parenthesized expression.
///
/// The builder keeps a stack of return points: `(` opens a left-child
/// scope, an operand fills the current node and returns to the parent, an
/// operator fills the current node and opens a right-child scope, and `)`
/// returns to the parent.
#[instrument(level = "debug")]
pub fn parse_tree(expr: &str) -> Result<ExprNode<Symbol>, TreeError> {
    let tokens = scan(expr)?;
    if tokens.is_empty() {
        return Err(TreeError::MalformedExpression("empty expression".into()));
    }

    let mut slots = vec![Slot::default()];
    let mut parents: Stack<usize> = Stack::new();
    let mut current = 0;
    parents.push(current);

    for token in tokens {
        match token {
            Token::Open => {
                let child = slots.len();
                slots.push(Slot::default());
                slots[current].left = Some(child);
                parents.push(current);
                current = child;
            }
            Token::Operand(value) => {
                slots[current].value = Symbol::Operand(value);
                current = parents.pop().ok_or_else(|| {
                    TreeError::MalformedExpression("operand outside any expression".into())
                })?;
            }
            Token::Operator(op) => {
                slots[current].value = Symbol::Operator(op);
                let child = slots.len();
                slots.push(Slot::default());
                slots[current].right = Some(child);
                parents.push(current);
                current = child;
            }
            Token::Close => {
                current = parents.pop().ok_or(TreeError::UnbalancedParentheses)?;
            }
        }
    }

    if !parents.is_empty() {
        return Err(TreeError::UnbalancedParentheses);
    }
    Ok(reify(&slots, 0))
}

fn reify(slots: &[Slot], index: usize) -> ExprNode<Symbol> {
    ExprNode {
        value: slots[index].value,
        left: slots[index].left.map(|i| Box::new(reify(slots, i))),
        right: slots[index].right.map(|i| Box::new(reify(slots, i))),
    }
}

/// Evaluates a parse tree post-order: a leaf is its operand, an internal
/// node applies its operator to the evaluated children. Fails without
/// producing a partial result on unassigned values, missing operands and
/// division by zero.
pub fn evaluate(tree: &ExprNode<Symbol>) -> Result<f64, TreeError> {
    match tree.value {
        Symbol::Operand(value) => Ok(value),
        Symbol::Operator(op) => match (&tree.left, &tree.right) {
            (Some(left), Some(right)) => apply(op, evaluate(left)?, evaluate(right)?),
            _ => Err(missing_operand(op)),
        },
        Symbol::Empty => Err(TreeError::MalformedExpression(
            "node without a value".into(),
        )),
    }
}
