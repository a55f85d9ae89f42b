//! Frontmatter parsing for content files.
//!
//! Content files start with a header block between two `---` markers,
//! followed by a free-text body:
//!
//! ```text
//! ---
//! title: "Attention Mechanisms in Deep RL"
//! year: 2024
//! featured: true
//! authors:
//!   - "Achraf Hsain"
//!   - "Jane Collaborator"
//! bibtex: |
//!   @inproceedings{hsain2024attention,
//!     year={2024}
//!   }
//! ---
//! Body text.
//! ```
//!
//! Only a small, flat subset of YAML is understood:
//!
//! - `key: value` scalars, with one layer of matching `"` or `'` quotes stripped,
//!   then coerced to a boolean (`true`/`false`, any case), a float (contains `.`),
//!   an integer, or left as text.
//! - `key:` with an empty value starts a list; following `  - item` lines append.
//! - `key: |` starts a multiline string; following lines are kept verbatim
//!   until a line with no leading whitespace that contains a colon.
//!
//! Anything deeper (nested maps, lists of maps, flow syntax) is not supported.
//! Indented lines that are not list items are ignored, so `meta:` followed by
//! `  nested: value` yields an empty list for `meta`.
//!
//! Parsing never fails. A file that does not start with `---`, or whose header
//! is never closed, yields no fields and the whole text as the body.
//!
//! ## Scanner
//!
//! The header is scanned line by line by a small state machine. Each line is
//! fed to [`step`] together with the current [`State`]; it returns the next
//! state and the [`Effect`]s to apply to the field map.

use crate::types::{FieldValue, Fields, Number};

/// Marker line opening and closing the header block.
pub const DELIMITER: &str = "---";

/// Prefix of a list item line.
const LIST_MARKER: &str = "  - ";

/// Split `content` into frontmatter fields and body.
pub fn parse(content: &str) -> (Fields, String) {
    let Some(rest) = content.strip_prefix(DELIMITER) else {
        return (Fields::new(), content.to_string());
    };
    let Some((header, body)) = rest.split_once(DELIMITER) else {
        return (Fields::new(), content.to_string());
    };

    (parse_header(header.trim()), body.trim().to_string())
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    ReadingKey,
    /// Last key had an empty value; `  - item` lines append to it.
    CapturingList(String),
    CapturingMultiline { key: String, lines: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
enum Effect {
    Set(String, FieldValue),
    Push(String, String),
}

fn parse_header(header: &str) -> Fields {
    let mut fields = Fields::new();
    let mut state = State::ReadingKey;

    for line in header.split('\n') {
        let (next, effects) = step(state, line);
        for effect in effects {
            apply(&mut fields, effect);
        }
        state = next;
    }

    if let State::CapturingMultiline { key, lines } = state {
        apply(&mut fields, Effect::Set(key, FieldValue::Multiline(lines.join("\n"))));
    }
    fields
}

fn apply(fields: &mut Fields, effect: Effect) {
    match effect {
        Effect::Set(key, value) => {
            fields.insert(key, value);
        }
        Effect::Push(key, item) => {
            if let Some(FieldValue::List(items)) = fields.get_mut(&key) {
                items.push(item);
            }
        }
    }
}

/// Transition function: consume one header line.
fn step(state: State, line: &str) -> (State, Vec<Effect>) {
    if let State::CapturingMultiline { key, mut lines } = state {
        if !starts_key(line) {
            lines.push(line.to_string());
            return (State::CapturingMultiline { key, lines }, Vec::new());
        }
        // The closing line is itself a key line
        let (next, mut effects) = step(State::ReadingKey, line);
        effects.insert(0, Effect::Set(key, FieldValue::Multiline(lines.join("\n"))));
        return (next, effects);
    }

    if line.trim().is_empty() {
        return (state, Vec::new());
    }

    if let Some(item) = line.strip_prefix(LIST_MARKER) {
        return match state {
            State::CapturingList(key) => {
                let push = Effect::Push(key.clone(), unquote(item.trim()).to_string());
                (State::CapturingList(key), vec![push])
            }
            other => (other, Vec::new()),
        };
    }

    let Some((key, value)) = line.split_once(':').filter(|_| starts_key(line)) else {
        return (state, Vec::new());
    };
    let key = key.trim().to_string();
    let value = value.trim();

    match value {
        "|" => (
            State::CapturingMultiline {
                key,
                lines: Vec::new(),
            },
            Vec::new(),
        ),
        "" => (
            State::CapturingList(key.clone()),
            vec![Effect::Set(key, FieldValue::List(Vec::new()))],
        ),
        _ => (State::ReadingKey, vec![Effect::Set(key, coerce(value))]),
    }
}

/// A key line has no leading whitespace and contains a colon.
fn starts_key(line: &str) -> bool {
    line.chars().next().is_some_and(|c| !c.is_whitespace()) && line.contains(':')
}

/// Strip one layer of matching double or single quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn coerce(raw: &str) -> FieldValue {
    let value = unquote(raw);

    if value.eq_ignore_ascii_case("true") {
        return FieldValue::Boolean(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return FieldValue::Boolean(false);
    }

    let number = if value.contains('.') {
        value.parse::<f64>().ok().map(Number::Float)
    } else {
        value.parse::<i64>().ok().map(Number::Integer)
    };

    match number {
        Some(n) => FieldValue::Number(n),
        None => FieldValue::Text(value.to_string()),
    }
}
