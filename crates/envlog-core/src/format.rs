//! printf-style message formatting
//!
//! Placeholders:
//! - `%s`: any argument, displayed as-is
//! - `%d`: number (integers exact, floats as numbers, numeric strings accepted)
//! - `%i`: integer, truncating floats
//! - `%f`: floating point number
//! - `%j`, `%o`, `%O`: JSON
//! - `%%`: a literal `%`
//!
//! Any other `%x` is copied through unchanged. Arguments left over after the
//! last placeholder are appended, separated by spaces. A template given with
//! no arguments at all is returned verbatim.

use std::fmt;

use thiserror::Error;

/// A positional formatting argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Json(serde_json::Value),
}

impl Arg {
    /// Short name of the argument kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) | Arg::UInt(_) => "integer",
            Arg::Float(_) => "float",
            Arg::Bool(_) => "bool",
            Arg::Json(_) => "json",
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Arg::Int(v) => Some(*v as f64),
            Arg::UInt(v) => Some(*v as f64),
            Arg::Float(v) => Some(*v),
            Arg::Str(s) => s.trim().parse::<f64>().ok(),
            Arg::Json(value) => value.as_f64(),
            Arg::Bool(_) => None,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Arg::Str(s) => serde_json::Value::from(s.as_str()),
            Arg::Int(v) => serde_json::Value::from(*v),
            Arg::UInt(v) => serde_json::Value::from(*v),
            Arg::Float(v) => serde_json::Value::from(*v),
            Arg::Bool(v) => serde_json::Value::from(*v),
            Arg::Json(value) => value.clone(),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(v) => write!(f, "{}", v),
            Arg::UInt(v) => write!(f, "{}", v),
            Arg::Float(v) => write!(f, "{}", v),
            Arg::Bool(v) => write!(f, "{}", v),
            Arg::Json(serde_json::Value::String(s)) => f.write_str(s),
            Arg::Json(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(value as f64)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<serde_json::Value> for Arg {
    fn from(value: serde_json::Value) -> Self {
        Arg::Json(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64: u8, u16, u32, u64, usize);

/// Errors from [`format_message`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// More placeholders than arguments
    #[error("missing argument {index}")]
    MissingArgument { index: usize },

    /// Argument cannot be rendered by its placeholder
    #[error("argument {index} ({found}) does not fit %{spec}")]
    TypeMismatch {
        index: usize,
        spec: char,
        found: &'static str,
    },
}

/// Substitute `args` into `template`
pub fn format_message(template: &str, args: &[Arg]) -> Result<String, FormatError> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(spec @ ('s' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O')) => {
                chars.next();
                let arg = args
                    .get(next)
                    .ok_or(FormatError::MissingArgument { index: next })?;
                render(&mut out, spec, arg, next)?;
                next += 1;
            }
            _ => out.push('%'),
        }
    }

    for arg in &args[next..] {
        out.push(' ');
        out.push_str(&arg.to_string());
    }

    Ok(out)
}

/// Like [`format_message`], but falls back to the raw template
///
/// The fallback carries a `[format error: ...]` suffix naming the problem.
pub fn format_or_raw(template: &str, args: &[Arg]) -> String {
    match format_message(template, args) {
        Ok(text) => text,
        Err(e) => format!("{} [format error: {}]", template, e),
    }
}

fn render(out: &mut String, spec: char, arg: &Arg, index: usize) -> Result<(), FormatError> {
    use std::fmt::Write;

    let mismatch = || FormatError::TypeMismatch {
        index,
        spec,
        found: arg.kind(),
    };

    // Writing to a String cannot fail
    let _ = match spec {
        's' => write!(out, "{}", arg),
        'd' => match arg {
            Arg::Int(v) => write!(out, "{}", v),
            Arg::UInt(v) => write!(out, "{}", v),
            _ => write!(out, "{}", number(arg.as_f64().ok_or_else(mismatch)?)),
        },
        'i' => match arg {
            Arg::Int(v) => write!(out, "{}", v),
            Arg::UInt(v) => write!(out, "{}", v),
            _ => write!(out, "{}", arg.as_f64().ok_or_else(mismatch)?.trunc() as i64),
        },
        'f' => write!(out, "{}", arg.as_f64().ok_or_else(mismatch)?),
        _ => write!(out, "{}", arg.to_json()),
    };

    Ok(())
}

/// Integral floats print without a fractional part
fn number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
