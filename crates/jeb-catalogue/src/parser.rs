//! Catalogue text parser
//!
//! The catalogue is line oriented. Each record line carries ten `;`-separated
//! fields:
//!
//! ```text
//! kind;groupId;simpleName;packageName;qualifiedName;superType;interfaces;constructors;methods;fields
//! ```
//!
//! The last four fields are `|`-separated lists. Blank lines and lines starting
//! with `#` are skipped. Any malformed record fails the whole parse.

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::error::{CatalogueError, CatalogueResult, CorruptEntry};
use crate::model::{MethodSignature, TypeKind, TypeRecord};

/// Field separator within a record
pub const FIELD_SEPARATOR: char = ';';
/// Separator inside list fields
pub const LIST_SEPARATOR: char = '|';
/// Separator between method arguments
pub const ARG_SEPARATOR: char = ',';

const FIELD_COUNT: usize = 10;

/// Output of a successful parse
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalogue {
    /// Records in catalogue order
    pub records: Vec<TypeRecord>,
    /// Unique method signatures in first-seen order
    pub signatures: IndexSet<MethodSignature>,
}

/// Split a list field; an empty field is an empty list
pub fn split_list(field: &str, separator: char) -> Vec<String> {
    if field.is_empty() {
        Vec::new()
    } else {
        field.split(separator).map(str::to_string).collect()
    }
}

/// Parse a raw `name(arg:type,...)` string
///
/// Returns `None` when the string has no opening parenthesis.
pub fn parse_method(raw: &str, owner_simple_name: &str) -> Option<MethodSignature> {
    let open = raw.find('(')?;
    let name = &raw[..open];
    let after = &raw[open + 1..];
    let inner = after.find(')').map_or(after, |close| &after[..close]);

    let args = split_list(inner, ARG_SEPARATOR)
        .into_iter()
        .map(|arg| match arg.split_once(':') {
            Some((arg_name, _)) => arg_name.to_string(),
            None => arg,
        })
        .collect();

    Some(MethodSignature::new(name, args, owner_simple_name))
}

/// Parse the whole catalogue text
pub fn parse_catalogue(text: &str) -> CatalogueResult<ParsedCatalogue> {
    let mut parsed = ParsedCatalogue::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = idx + 1;

        let record = parse_record(line).map_err(|reason| CatalogueError::corrupt(line_no, reason))?;

        for raw in record.methods.iter().chain(&record.constructors) {
            let signature = parse_method(raw, &record.simple_name).ok_or_else(|| {
                CatalogueError::corrupt(line_no, CorruptEntry::MissingParen(raw.clone()))
            })?;
            parsed.signatures.insert(signature);
        }

        trace!(line = line_no, name = %record.qualified_name, "parsed record");
        parsed.records.push(record);
    }

    debug!(
        records = parsed.records.len(),
        signatures = parsed.signatures.len(),
        "catalogue parsed"
    );
    Ok(parsed)
}

fn parse_record(line: &str) -> Result<TypeRecord, CorruptEntry> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < FIELD_COUNT {
        return Err(CorruptEntry::MissingFields(fields.len()));
    }

    let kind = TypeKind::from(fields[0]);
    let group_id = fields[1]
        .trim()
        .parse::<i64>()
        .map_err(|_| CorruptEntry::InvalidGroupId(fields[1].to_string()))?;
    let super_type = Some(fields[5])
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(TypeRecord {
        kind,
        group_id,
        simple_name: fields[2].to_string(),
        package_name: fields[3].to_string(),
        qualified_name: fields[4].to_string(),
        super_type,
        interfaces: split_list(fields[6], LIST_SEPARATOR),
        constructors: split_list(fields[7], LIST_SEPARATOR),
        methods: split_list(fields[8], LIST_SEPARATOR),
        fields: split_list(fields[9], LIST_SEPARATOR),
    })
}
