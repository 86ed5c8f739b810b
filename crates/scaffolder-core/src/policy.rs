//! Request body validation policy
//!
//! The generated `validateBody` middleware serializes the request body, query
//! and route parameters into one string and rejects the request on the first
//! detection pattern that matches. The pattern list lives here once: the
//! middleware template renders it as JavaScript regex literals, and
//! [`BodyValidationPolicy`] compiles the same sources so the policy can be
//! exercised from Rust.
//!
//! The middleware runs the sources as JavaScript regexes without the `u`
//! flag, so the compiled form keeps those semantics: ASCII word boundaries,
//! ASCII-only case folding, the JavaScript whitespace set, and a `.` that
//! stops at every line terminator.
//!
//! This is a blocklist heuristic. Its false positives and false negatives are
//! part of the contract, so the set, the order and first-match-wins must stay
//! exactly as they are.

use regex::Regex;
use serde_json::{json, Value};

/// HTTP status sent when a pattern matches
pub const REJECT_STATUS: u16 = 400;

/// Response message sent when a pattern matches
pub const REJECT_MESSAGE: &str = "🚨 Malicious content detected in request data";

/// What a detection pattern is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternCategory {
    /// A SQL verb followed later by a target clause
    SqlStatement,
    /// Boolean bypass idioms and comment/terminator tokens
    SqlBypass,
    /// MongoDB query operator keys
    OperatorInjection,
    /// Script tags and DOM access
    ScriptInjection,
    DestructiveCommand,
    ShellUtility,
}

/// A detection pattern, stored as JavaScript regex source (flags `gi`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionPattern {
    pub category: PatternCategory,
    pub source: &'static str,
}

impl DetectionPattern {
    /// Regex literal as it appears in generated JavaScript
    pub fn js_literal(&self) -> String {
        format!("/{}/gi", self.source)
    }

    /// Translate the JS source (flags `gi`, no `u`) into `regex` syntax.
    ///
    /// Handles the constructs the detection sources use: escapes, `.` and
    /// bare letters. Character classes are not translated.
    fn rust_source(&self) -> String {
        let mut out = String::with_capacity(self.source.len() * 3);
        let mut chars = self.source.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some('b') => out.push_str(r"(?-u:\b)"),
                    Some('s') => out.push_str(JS_WHITESPACE),
                    Some('/') => out.push('/'),
                    Some(escaped) => {
                        out.push('\\');
                        out.push(escaped);
                    }
                    None => out.push_str(r"\\"),
                },
                '.' => out.push_str(JS_DOT),
                c if c.is_ascii_alphabetic() => {
                    out.push('[');
                    out.push(c.to_ascii_lowercase());
                    out.push(c.to_ascii_uppercase());
                    out.push(']');
                }
                c => out.push(c),
            }
        }
        out
    }
}

/// JavaScript `\s`: ECMAScript WhiteSpace plus LineTerminator
const JS_WHITESPACE: &str = r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// JavaScript `.` without the `s` flag
const JS_DOT: &str = r"[^\n\r\x{2028}\x{2029}]";

/// Evaluation order matters: the first match decides the category
pub const DETECTION_PATTERNS: [DetectionPattern; 6] = [
    DetectionPattern {
        category: PatternCategory::SqlStatement,
        source: r"(\b(SELECT|INSERT|UPDATE|DELETE|DROP|TRUNCATE|ALTER|CREATE|EXEC|UNION|LOAD_FILE|OUTFILE)\b.*\b(FROM|INTO|TABLE|DATABASE)\b)",
    },
    DetectionPattern {
        category: PatternCategory::SqlBypass,
        source: r"\b(OR 1=1|AND 1=1|OR '1'='1'|--|#|\/\*|\*\/|;|\bUNION\b.*?\bSELECT\b)",
    },
    DetectionPattern {
        category: PatternCategory::OperatorInjection,
        source: r"\b(\$where|\$ne|\$gt|\$lt|\$regex|\$exists|\$not|\$or|\$and)\b",
    },
    DetectionPattern {
        category: PatternCategory::ScriptInjection,
        source: r"(<script|<\/script>|document\.cookie|eval\(|alert\(|javascript:|onerror=|onmouseover=)",
    },
    DetectionPattern {
        category: PatternCategory::DestructiveCommand,
        source: r"(\bexec\s*xp_cmdshell|\bshutdown\b|\bdrop\s+database|\bdelete\s+from)",
    },
    DetectionPattern {
        category: PatternCategory::ShellUtility,
        source: r"(\b(base64_decode|cmd|powershell|wget|curl|rm -rf|nc -e|perl -e|python -c)\b)",
    },
];

/// Outcome of evaluating one serialized request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Reject { category: PatternCategory },
}

impl Verdict {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Verdict::Reject { .. })
    }

    /// Status the middleware answers with, `None` when the request proceeds
    pub fn status(&self) -> Option<u16> {
        match self {
            Verdict::Allow => None,
            Verdict::Reject { .. } => Some(REJECT_STATUS),
        }
    }
}

/// Compiled form of [`DETECTION_PATTERNS`]
#[derive(Debug, Clone)]
pub struct BodyValidationPolicy {
    rules: Vec<(PatternCategory, Regex)>,
}

impl BodyValidationPolicy {
    pub fn new() -> Result<Self, regex::Error> {
        let rules = DETECTION_PATTERNS
            .iter()
            .map(|pattern| Regex::new(&pattern.rust_source()).map(|re| (pattern.category, re)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Check `data` against each pattern in order, stopping at the first hit
    pub fn evaluate(&self, data: &str) -> Verdict {
        self.rules
            .iter()
            .find(|(_, re)| re.is_match(data))
            .map_or(Verdict::Allow, |(category, _)| Verdict::Reject {
                category: *category,
            })
    }

    /// Serialize and evaluate a request the way the middleware does
    pub fn evaluate_request(&self, body: &Value, query: &Value, params: &Value) -> Verdict {
        self.evaluate(&serialize_request(body, query, params))
    }
}

/// Same shape and key order as `JSON.stringify({ body, query, params })`
pub fn serialize_request(body: &Value, query: &Value, params: &Value) -> String {
    json!({ "body": body, "query": query, "params": params }).to_string()
}
