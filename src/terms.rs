use crate::{DemoError, Variable};
use std::cmp::Ordering;

/// Largest exponent accepted in a power
const MAX_EXPONENT: u32 = 64;

/// Holds a single term `coeff · x^px · y^py`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monomial {
    pub coeff: f64,
    pub px: u32,
    pub py: u32,
}

impl Monomial {
    /// Returns the total degree px + py
    pub fn degree(&self) -> u32 {
        self.px + self.py
    }

    /// Returns the exponent of the given variable
    pub fn exponent(&self, var: Variable) -> u32 {
        match var {
            Variable::X => self.px,
            Variable::Y => self.py,
        }
    }

    /// Returns true if the term has no variables
    pub fn is_constant(&self) -> bool {
        self.degree() == 0
    }

    /// Evaluates the term at (x, y)
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        self.coeff * f64::powi(x, self.px as i32) * f64::powi(y, self.py as i32)
    }

    // canonical order: total degree descending, then x-exponent descending
    fn order(&self, other: &Monomial) -> Ordering {
        (other.degree(), other.px).cmp(&(self.degree(), self.px))
    }

    fn times(&self, other: &Monomial) -> Monomial {
        Monomial {
            coeff: self.coeff * other.coeff,
            px: self.px + other.px,
            py: self.py + other.py,
        }
    }
}

/// Lists the terms of a polynomial in x and y, as they are displayed
///
/// The list keeps the written order unless [Terms::canonical] is called:
///
/// ```text
/// -0.4 x² - 0.2 y² + 0.5 x y + 5     (as written)
/// -0.4 x² + 0.5 x y - 0.2 y² + 5     (canonical)
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Terms {
    list: Vec<Monomial>,
}

impl Terms {
    /// Reads a sum of monomials
    ///
    /// Accepts `*` or juxtaposition for products, `^` or `**` for powers, division by numbers,
    /// and parentheses, e.g., `-0.4*x**2 + 0.5*x*y + 5` or `0.5y - 0.8x`. Terms with a zero
    /// coefficient are dropped; everything else stays in the written order.
    pub fn read(text: &str) -> Result<Self, DemoError> {
        let tokens = tokenize(text)?;
        let mut reader = Reader { tokens, pos: 0 };
        let mut list = reader.sum()?;
        if let Some(token) = reader.current() {
            return Err(DemoError::Setup(format!("unexpected {} in '{}'", token, text)));
        }
        list.retain(|t| t.coeff != 0.0);
        Ok(Terms { list })
    }

    /// Merges like terms and sorts by total degree, then by the exponent of x (descending)
    pub fn canonical(self) -> Self {
        let mut sorted = self.list;
        sorted.sort_by(|a, b| a.order(b));
        let mut list: Vec<Monomial> = Vec::with_capacity(sorted.len());
        for t in sorted {
            match list.last_mut() {
                Some(last) if last.px == t.px && last.py == t.py => last.coeff += t.coeff,
                _ => list.push(t),
            }
        }
        list.retain(|t| t.coeff != 0.0);
        Terms { list }
    }

    /// Returns the terms
    pub fn as_slice(&self) -> &[Monomial] {
        &self.list
    }

    /// Returns the LaTeX representation, e.g., `-0.4 x^{2} + 0.5 x y`
    pub fn to_latex(&self) -> String {
        if self.list.is_empty() {
            return "0".to_string();
        }
        let mut buffer = String::new();
        for (i, t) in self.list.iter().enumerate() {
            let negative = t.coeff < 0.0;
            if i == 0 {
                if negative {
                    buffer.push('-');
                }
            } else {
                buffer.push_str(if negative { " - " } else { " + " });
            }
            let mut factors = Vec::new();
            let abs = f64::abs(t.coeff);
            if abs != 1.0 || t.is_constant() {
                factors.push(format!("{}", abs));
            }
            for (var, e) in [(Variable::X, t.px), (Variable::Y, t.py)] {
                match e {
                    0 => (),
                    1 => factors.push(var.name().to_string()),
                    _ => factors.push(format!("{}^{{{}}}", var.name(), e)),
                }
            }
            buffer.push_str(&factors.join(" "));
        }
        buffer
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Number(f64),
    Symbol(Variable),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Open,
    Close,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(v) => write!(f, "'{}'", v),
            Token::Symbol(var) => write!(f, "'{}'", var.name()),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Caret => write!(f, "'^'"),
            Token::Open => write!(f, "'('"),
            Token::Close => write!(f, "')'"),
        }
    }
}

fn tokenize(text: &str) -> Result<Vec<Token>, DemoError> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' => (),
            '+' => tokens.push(Token::Plus),
            '-' => tokens.push(Token::Minus),
            '/' => tokens.push(Token::Slash),
            '^' => tokens.push(Token::Caret),
            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::Caret);
                    i += 1;
                } else {
                    tokens.push(Token::Star);
                }
            }
            '0'..='9' | '.' => {
                let start = i;
                while i + 1 < chars.len() && (chars[i + 1].is_ascii_digit() || chars[i + 1] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..=i].iter().collect();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| DemoError::Setup(format!("invalid number '{}'", literal)))?;
                tokens.push(Token::Number(value));
            }
            _ => match Variable::from_name(&c.to_string()) {
                Some(var) => tokens.push(Token::Symbol(var)),
                None => return Err(DemoError::Setup(format!("unknown symbol '{}' in '{}'", c, text))),
            },
        }
        i += 1;
    }
    Ok(tokens)
}

struct Reader {
    tokens: Vec<Token>,
    pos: usize,
}

impl Reader {
    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.current();
        self.pos += 1;
        token
    }

    // sum := ['+'|'-'] product (('+'|'-') product)*
    fn sum(&mut self) -> Result<Vec<Monomial>, DemoError> {
        let mut list = Vec::new();
        let mut sign = match self.current() {
            Some(Token::Minus) => {
                self.advance();
                -1.0
            }
            Some(Token::Plus) => {
                self.advance();
                1.0
            }
            _ => 1.0,
        };
        loop {
            list.extend(self.product()?.into_iter().map(|t| Monomial {
                coeff: sign * t.coeff,
                ..t
            }));
            sign = match self.current() {
                Some(Token::Plus) => 1.0,
                Some(Token::Minus) => -1.0,
                _ => return Ok(list),
            };
            self.advance();
        }
    }

    // product := power (['*'|'/'] power | power)*
    fn product(&mut self) -> Result<Vec<Monomial>, DemoError> {
        let mut list = self.power()?;
        loop {
            match self.current() {
                Some(Token::Star) => {
                    self.advance();
                    let rhs = self.power()?;
                    list = multiply(&list, &rhs);
                }
                Some(Token::Slash) => {
                    self.advance();
                    let den_terms = Terms { list: self.power()? }.canonical();
                    let den = match den_terms.as_slice() {
                        [] => 0.0,
                        [t] if t.is_constant() => t.coeff,
                        _ => return Err(DemoError::Setup("division by a variable is not a polynomial".to_string())),
                    };
                    if den == 0.0 {
                        return Err(DemoError::Setup("division by zero".to_string()));
                    }
                    for t in list.iter_mut() {
                        t.coeff /= den;
                    }
                }
                Some(Token::Number(_)) | Some(Token::Symbol(_)) | Some(Token::Open) => {
                    let rhs = self.power()?;
                    list = multiply(&list, &rhs);
                }
                _ => return Ok(list),
            }
        }
    }

    // power := atom ['^' exponent]
    fn power(&mut self) -> Result<Vec<Monomial>, DemoError> {
        let base = self.atom()?;
        if self.current() != Some(Token::Caret) {
            return Ok(base);
        }
        self.advance();
        let n = self.exponent()?;
        let mut res = vec![Monomial {
            coeff: 1.0,
            px: 0,
            py: 0,
        }];
        for _ in 0..n {
            res = multiply(&res, &base);
        }
        Ok(res)
    }

    // exponent := number | '(' number ')'
    fn exponent(&mut self) -> Result<u32, DemoError> {
        let value = match self.advance() {
            Some(Token::Number(v)) => v,
            Some(Token::Open) => {
                let sign = if self.current() == Some(Token::Minus) {
                    self.advance();
                    -1.0
                } else {
                    1.0
                };
                let v = match self.advance() {
                    Some(Token::Number(v)) => sign * v,
                    _ => return Err(DemoError::Setup("exponent must be a constant".to_string())),
                };
                if self.advance() != Some(Token::Close) {
                    return Err(DemoError::Setup("missing ')' after exponent".to_string()));
                }
                v
            }
            Some(Token::Minus) => match self.advance() {
                Some(Token::Number(v)) => -v,
                _ => return Err(DemoError::Setup("exponent must be a constant".to_string())),
            },
            _ => return Err(DemoError::Setup("exponent must be a constant".to_string())),
        };
        if value < 0.0 || value.fract() != 0.0 || value > MAX_EXPONENT as f64 {
            return Err(DemoError::Setup(format!(
                "exponent {} is not a non-negative integer up to {}",
                value, MAX_EXPONENT
            )));
        }
        Ok(value as u32)
    }

    // atom := number | symbol | '(' sum ')'
    fn atom(&mut self) -> Result<Vec<Monomial>, DemoError> {
        match self.advance() {
            Some(Token::Number(v)) => Ok(vec![Monomial { coeff: v, px: 0, py: 0 }]),
            Some(Token::Symbol(Variable::X)) => Ok(vec![Monomial { coeff: 1.0, px: 1, py: 0 }]),
            Some(Token::Symbol(Variable::Y)) => Ok(vec![Monomial { coeff: 1.0, px: 0, py: 1 }]),
            Some(Token::Open) => {
                let inner = self.sum()?;
                if self.advance() != Some(Token::Close) {
                    return Err(DemoError::Setup("missing ')'".to_string()));
                }
                Ok(inner)
            }
            Some(token) => Err(DemoError::Setup(format!("unexpected {}", token))),
            None => Err(DemoError::Setup("unexpected end of formula".to_string())),
        }
    }
}

fn multiply(a: &[Monomial], b: &[Monomial]) -> Vec<Monomial> {
    let mut list = Vec::with_capacity(a.len() * b.len());
    for p in a {
        for q in b {
            list.push(p.times(q));
        }
    }
    list
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
