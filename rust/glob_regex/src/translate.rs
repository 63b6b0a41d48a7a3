//! Glob-to-regex translation.
//!
//! `translate()` rewrites a shell-style glob into regex syntax in a single
//! forward pass. The only lookahead is the character after a `\`.
//!
//! | Glob            | Regex                          |
//! |-----------------|--------------------------------|
//! | `*`             | `.*` (literal `*` in a class)  |
//! | `?`             | `.` (literal `?` in a class)   |
//! | `[!...]`        | `[^...]`                       |
//! | `{a,b}`         | `(a\|b)`                       |
//! | `\,`            | `,` (never an alternation)     |
//! | `.()+\|^$@%`    | escaped outside a class        |
//!
//! The output is unanchored; see [`anchor`].

use std::str::CharIndices;

/// Scan state for one translation.
///
/// The counters are signed: a stray `]` or `}` drives them below zero, and
/// only `in_class == 0` counts as "outside a class".
struct Scanner<'a> {
    chars: CharIndices<'a>,
    out: String,
    in_class: isize,
    in_group: isize,
    /// Byte offset just past the most recent `[`.
    class_start: Option<usize>,
}

impl<'a> Scanner<'a> {
    fn new(glob: &'a str) -> Self {
        Self {
            chars: glob.char_indices(),
            // Most globs grow by a handful of escapes.
            out: String::with_capacity(glob.len() + glob.len() / 2 + 2),
            in_class: 0,
            in_group: 0,
            class_start: None,
        }
    }

    fn run(mut self) -> String {
        while let Some((i, ch)) = self.chars.next() {
            self.step(i, ch);
        }
        self.out
    }

    fn at_class_start(&self, i: usize) -> bool {
        self.class_start == Some(i)
    }

    fn step(&mut self, i: usize, ch: char) {
        match ch {
            '\\' => self.escape(),
            '*' => {
                if self.in_class == 0 {
                    self.out.push_str(".*");
                } else {
                    self.out.push('*');
                }
            }
            '?' => {
                if self.in_class == 0 {
                    self.out.push('.');
                } else {
                    self.out.push('?');
                }
            }
            '[' => {
                // Also taken inside an open class: the counter grows and the
                // class start moves to this bracket.
                self.in_class += 1;
                self.class_start = Some(i + 1);
                self.out.push('[');
            }
            ']' => {
                self.in_class -= 1;
                self.out.push(']');
            }
            '.' | '(' | ')' | '+' | '|' | '^' | '$' | '@' | '%' => {
                if self.in_class == 0 || (ch == '^' && self.at_class_start(i)) {
                    self.out.push('\\');
                }
                self.out.push(ch);
            }
            '!' => {
                if self.at_class_start(i) {
                    self.out.push('^');
                } else {
                    self.out.push('!');
                }
            }
            '{' => {
                self.in_group += 1;
                self.out.push('(');
            }
            '}' => {
                self.in_group -= 1;
                self.out.push(')');
            }
            ',' => {
                if self.in_group > 0 {
                    self.out.push('|');
                } else {
                    self.out.push(',');
                }
            }
            _ => self.out.push(ch),
        }
    }

    /// Consume the character after a `\`.
    fn escape(&mut self) {
        match self.chars.next() {
            // Trailing backslash is kept as-is.
            None => self.out.push('\\'),
            Some((_, ',')) => self.out.push(','),
            Some((_, next @ ('Q' | 'E'))) => {
                self.out.push_str("\\\\");
                self.out.push(next);
            }
            Some((_, next)) => {
                self.out.push('\\');
                self.out.push(next);
            }
        }
    }
}

/// Translate a glob pattern into an unanchored regex pattern.
///
/// Never fails; whether the result compiles is up to the regex engine.
pub fn translate(glob: &str) -> String {
    Scanner::new(glob).run()
}

/// Wrap a translated pattern so it must match the whole candidate.
///
/// The non-capturing group keeps any top-level alternation inside the
/// anchors.
pub fn anchor(translated: &str) -> String {
    format!("^(?:{})$", translated)
}

/// Check if a glob has no wildcard, class, group or escape syntax.
/// Such a glob matches exactly itself.
pub fn is_literal_glob(glob: &str) -> bool {
    !glob
        .chars()
        .any(|c| matches!(c, '\\' | '*' | '?' | '[' | ']' | '{' | '}'))
}
