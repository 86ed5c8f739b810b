//! Global middleware templates: body validation, not-found, error handler

use super::{params, EXPRESS_TYPES_IMPORT};
use crate::config::Variant;
use crate::policy::{DETECTION_PATTERNS, REJECT_MESSAGE, REJECT_STATUS};

/// Marker sent instead of the stack trace in production
pub const STACK_REDACTION_MARKER: &str = "🥞";

fn header(variant: Variant) -> &'static str {
    if variant.is_typed() {
        EXPRESS_TYPES_IMPORT
    } else {
        ""
    }
}

const HANDLER_PARAMS: [(&str, &str); 3] = [
    ("req", "Request"),
    ("res", "Response"),
    ("next", "NextFunction"),
];

pub fn validate_body(variant: Variant) -> String {
    let patterns: String = DETECTION_PATTERNS
        .iter()
        .map(|p| format!("    {},\n", p.js_literal()))
        .collect();

    format!(
        r#"{header}export function validateBody({params}) {{
  const data = JSON.stringify({{ body: req.body, query: req.query, params: req.params }});
  const dangerousPatterns = [
{patterns}  ];
  for (const pattern of dangerousPatterns) {{
    if (pattern.test(data)) {{
      console.warn(`❌ Suspicious input detected: ${{data}}`);
      return res.status({status}).json({{ message: '{message}' }});
    }}
  }}
  next();
}}
"#,
        header = header(variant),
        params = params(variant, &HANDLER_PARAMS),
        patterns = patterns,
        status = REJECT_STATUS,
        message = REJECT_MESSAGE,
    )
}

pub fn not_found(variant: Variant) -> String {
    format!(
        r#"{header}export function notFound({params}) {{
  res.status(404);
  const error = new Error(`🔍 Not Found - ${{req.originalUrl}}`);
  next(error);
}}
"#,
        header = header(variant),
        params = params(variant, &HANDLER_PARAMS),
    )
}

pub fn error_handler(variant: Variant) -> String {
    let header = if variant.is_typed() {
        "import { Request, Response, NextFunction } from 'express';\n\
         import { ErrorResponse } from '../../interfaces/ErrorResponse';\n\n"
    } else {
        ""
    };
    let handler_params = params(
        variant,
        &[
            ("err", "Error"),
            ("req", "Request"),
            ("res", "Response<ErrorResponse>"),
            ("next", "NextFunction"),
        ],
    );

    format!(
        r#"{header}export function errorHandler({handler_params}) {{
  const statusCode = res.statusCode !== 200 ? res.statusCode : 500;
  const shortStack = err.stack ? err.stack.split('\n')[0] : '';
  res.status(statusCode).json({{
    message: err.message,
    stack: process.env.NODE_ENV === 'production' ? '{marker}' : shortStack,
  }});
}}
"#,
        marker = STACK_REDACTION_MARKER,
    )
}
