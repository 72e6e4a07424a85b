//! Read-only catalogue queries

use anyhow::{Context, Result};
use jeb_catalogue::CompletionScope;
use serde_json::json;

use super::{require, Session};

/// Print the qualified name of a type
pub fn resolve(session: &Session, name: &str) -> Result<()> {
    let index = session.index();
    println!("{}", require(&index, name)?);
    Ok(())
}

/// Print a type's record as JSON
pub fn info(session: &Session, name: &str) -> Result<()> {
    let index = session.index();
    let qualified = require(&index, name)?;
    let record = index
        .record(qualified)
        .with_context(|| format!("No record for {qualified}"))?;

    let output = json!({
        "record": record,
        "documentation": index.documentation_url(qualified),
        "import": index.import_statement(qualified),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print completion candidates for a cursor in `line`
pub fn complete(session: &Session, line: &str, offset: Option<usize>, json: bool) -> Result<()> {
    let offset = offset.unwrap_or(line.len());
    let scope = CompletionScope::at(line, offset);
    let index = session.index();
    let candidates = index.candidates_for(scope);

    if json {
        let output = json!({ "scope": scope, "candidates": candidates });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for candidate in candidates {
            println!("{}", candidate.label());
        }
    }
    Ok(())
}
