use quickcheck::{Arbitrary, Gen, QuickCheck};

use regex_splice::{compile, Nfa};

/// A randomly generated regular expression, kept both as a syntax tree (so
/// the combinators can be driven directly) and as a pattern string (so the
/// parser can be exercised on the same language).
#[derive(Clone, Debug)]
enum Ast {
    Empty,
    Sym(char),
    Wild,
    Cat(Box<Ast>, Box<Ast>),
    Alt(Box<Ast>, Box<Ast>),
    Star(Box<Ast>),
    Plus(Box<Ast>),
}

impl Ast {
    fn to_nfa(&self) -> Nfa<usize> {
        match *self {
            Ast::Empty => compile::empty(),
            Ast::Sym(ch) => compile::symbol(ch),
            Ast::Wild => compile::wildcard(),
            Ast::Cat(ref l, ref r) => compile::concat(l.to_nfa(), r.to_nfa()),
            Ast::Alt(ref l, ref r) => {
                compile::alternate(l.to_nfa(), r.to_nfa())
            }
            Ast::Star(ref x) => compile::zero_or_more(x.to_nfa()),
            Ast::Plus(ref x) => compile::one_or_more(x.to_nfa()),
        }
    }

    /// Render a pattern string parsing back to this tree's shape. Children
    /// are parenthesized throughout, which keeps precedence out of the
    /// picture.
    fn to_pattern(&self) -> String {
        match *self {
            Ast::Empty => "()".to_string(),
            Ast::Sym(ch) => ch.to_string(),
            Ast::Wild => ".".to_string(),
            Ast::Cat(ref l, ref r) => {
                format!("({})({})", l.to_pattern(), r.to_pattern())
            }
            Ast::Alt(ref l, ref r) => {
                format!("({})|({})", l.to_pattern(), r.to_pattern())
            }
            Ast::Star(ref x) => format!("({})*", x.to_pattern()),
            Ast::Plus(ref x) => format!("({})+", x.to_pattern()),
        }
    }
}

fn gen_ast(g: &mut Gen, depth: usize) -> Ast {
    let leaves_only = depth == 0;
    let choices = if leaves_only { 3 } else { 7 };
    match usize::arbitrary(g) % choices {
        0 => Ast::Empty,
        1 => Ast::Sym(*g.choose(&['a', 'b', 'c']).unwrap()),
        2 => Ast::Wild,
        3 => Ast::Cat(
            Box::new(gen_ast(g, depth - 1)),
            Box::new(gen_ast(g, depth - 1)),
        ),
        4 => Ast::Alt(
            Box::new(gen_ast(g, depth - 1)),
            Box::new(gen_ast(g, depth - 1)),
        ),
        5 => Ast::Star(Box::new(gen_ast(g, depth - 1))),
        _ => Ast::Plus(Box::new(gen_ast(g, depth - 1))),
    }
}

impl Arbitrary for Ast {
    fn arbitrary(g: &mut Gen) -> Ast {
        gen_ast(g, 3)
    }
}

/// A short input over a slightly larger alphabet than the patterns use, so
/// both accepting and rejecting runs show up.
#[derive(Clone, Debug)]
struct Input(String);

impl Arbitrary for Input {
    fn arbitrary(g: &mut Gen) -> Input {
        let len = usize::arbitrary(g) % 8;
        let mut input = String::with_capacity(len);
        for _ in 0..len {
            input.push(*g.choose(&['a', 'b', 'c', 'd']).unwrap());
        }
        Input(input)
    }
}

fn check<A>(prop: A)
where
    A: quickcheck::Testable,
{
    QuickCheck::new().tests(300).quickcheck(prop);
}

#[test]
fn nfa_and_dfa_agree() {
    fn prop(ast: Ast, input: Input) -> bool {
        let nfa = ast.to_nfa();
        let dfa = nfa.to_deterministic();
        let normalized = dfa.normalize();
        let expected = nfa.is_match(&input.0);
        expected == dfa.is_match(&input.0)
            && expected == normalized.is_match(&input.0)
    }
    check(prop as fn(Ast, Input) -> bool);
}

#[test]
fn parser_agrees_with_the_combinators() {
    fn prop(ast: Ast, input: Input) -> bool {
        let direct = ast.to_nfa();
        let parsed = Nfa::from_pattern(&ast.to_pattern()).unwrap();
        direct.is_match(&input.0) == parsed.is_match(&input.0)
    }
    check(prop as fn(Ast, Input) -> bool);
}

#[test]
fn normalization_is_idempotent() {
    fn prop(ast: Ast) -> bool {
        let dfa = ast.to_nfa().to_deterministic().normalize();
        dfa == dfa.normalize()
    }
    check(prop as fn(Ast) -> bool);
}

#[test]
fn zero_or_more_always_matches_empty() {
    fn prop(ast: Ast) -> bool {
        compile::zero_or_more(ast.to_nfa()).is_match("")
    }
    check(prop as fn(Ast) -> bool);
}

#[test]
fn one_or_more_on_empty_input_behaves_like_its_operand() {
    fn prop(ast: Ast) -> bool {
        let nfa = ast.to_nfa();
        compile::one_or_more(nfa.clone()).is_match("") == nfa.is_match("")
    }
    check(prop as fn(Ast) -> bool);
}

#[test]
fn alternation_is_semantically_commutative() {
    fn prop(a: Ast, b: Ast, input: Input) -> bool {
        let ab = compile::alternate(a.to_nfa(), b.to_nfa());
        let ba = compile::alternate(b.to_nfa(), a.to_nfa());
        ab.is_match(&input.0) == ba.is_match(&input.0)
    }
    check(prop as fn(Ast, Ast, Input) -> bool);
}

#[test]
fn concatenation_is_semantically_associative() {
    fn prop(a: Ast, b: Ast, c: Ast, input: Input) -> bool {
        let left = compile::concat(
            compile::concat(a.to_nfa(), b.to_nfa()),
            c.to_nfa(),
        );
        let right = compile::concat(
            a.to_nfa(),
            compile::concat(b.to_nfa(), c.to_nfa()),
        );
        left.is_match(&input.0) == right.is_match(&input.0)
    }
    check(prop as fn(Ast, Ast, Ast, Input) -> bool);
}
