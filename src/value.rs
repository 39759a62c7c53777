use std::fmt;

/// The payload of a successful parse.
///
/// A literal-character parser yields a single `Char`. Sequencing pairs the payloads of
/// its two halves into a `List`, so a sequence folded over many parsers nests lists
/// inside lists. [`flatten`](crate::flatten) reduces any such shape to one flat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Char(char),
    List(Vec<Value>),
}

impl Value {
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::Char(_) => None,
            Value::List(vs) => Some(vs),
        }
    }

    /// the leaf characters, depth-first and left-to-right
    pub fn leaves(&self) -> Vec<char> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<char>) {
        match self {
            Value::Char(c) => out.push(*c),
            Value::List(vs) => vs.iter().for_each(|v| v.collect_leaves(out)),
        }
    }

    /// A single flat list of `Char` leaves. A lone `Char` becomes a one element list.
    pub fn into_flat(self) -> Value {
        if let Value::List(vs) = &self {
            if vs.iter().all(|v| matches!(v, Value::Char(_))) {
                return self;
            }
        }
        Value::List(self.leaves().into_iter().map(Value::Char).collect())
    }

    pub fn to_text(&self) -> String {
        self.leaves().into_iter().collect()
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<Vec<Value>> for Value {
    fn from(vs: Vec<Value>) -> Self {
        Value::List(vs)
    }
}

impl From<&str> for Value {
    /// a flat list of the characters of `s`
    fn from(s: &str) -> Self {
        Value::List(s.chars().map(Value::Char).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Char(c) => write!(f, "'{}'", c.escape_default())?,
            Value::List(vs) => {
                write!(f, "[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")?;
            }
        };
        Ok(())
    }
}
