/// A placeholder argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ArgValue {
    fn push_to(&self, out: &mut String) {
        match self {
            ArgValue::Str(s) => out.push_str(s),
            ArgValue::Int(i) => out.push_str(&i.to_string()),
            ArgValue::Float(f) => {
                // Trim trailing zeros so ratings read `8.8`, not `8.80`.
                let mut s = f.to_string();
                if s.contains('.') {
                    while s.ends_with('0') {
                        s.pop();
                    }
                    if s.ends_with('.') {
                        s.pop();
                    }
                }
                out.push_str(&s);
            }
            ArgValue::Bool(b) => out.push_str(&b.to_string()),
        }
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u64> for ArgValue {
    fn from(v: u64) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for ArgValue {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for ArgValue {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Very small placeholder engine: replaces `{name}` tokens.
///
/// - Escaped braces: `{{` -> `{`, `}}` -> `}`.
/// - Unknown placeholders stay visible as `{name}` so a missing argument
///   shows up on screen instead of vanishing.
/// - A `{` without a closing brace keeps the rest as literal text.
pub(crate) fn apply_placeholders(tmpl: &str, args: &[(&str, ArgValue)]) -> String {
    if !tmpl.contains('{') && !tmpl.contains('}') {
        return tmpl.to_string();
    }

    let mut out = String::with_capacity(tmpl.len() + 8);
    let mut chars = tmpl.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '}' {
            if chars.peek() == Some(&'}') {
                chars.next();
            }
            out.push('}');
            continue;
        }
        if c != '{' {
            out.push(c);
            continue;
        }

        if chars.peek() == Some(&'{') {
            chars.next();
            out.push('{');
            continue;
        }

        // Read until `}`.
        let mut key = String::new();
        let mut closed = false;
        for n in chars.by_ref() {
            if n == '}' {
                closed = true;
                break;
            }
            key.push(n);
        }

        if !closed {
            out.push('{');
            out.push_str(&key);
            break;
        }

        let key = key.trim();
        if key.is_empty() {
            out.push_str("{}");
            continue;
        }

        match args.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => value.push_to(&mut out),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
    }

    out
}
