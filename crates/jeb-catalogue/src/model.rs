//! Catalogue records and derived completion entries

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Namespace prefix hidden from completion hints
pub const COMMON_NAMESPACE_PREFIX: &str = "com.pnfsoftware.jeb.";

/// Separator between a candidate's trigger and its annotation
pub const HINT_SEPARATOR: char = '\t';

/// Category of a catalogue type
///
/// Tags outside the known set are kept verbatim in [`TypeKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeKind {
    /// Concrete or abstract class
    Class,
    /// Interface
    Interface,
    /// Enumeration
    Enum,
    /// Annotation type
    Annotation,
    /// Any other tag, as written in the catalogue
    Other(String),
}

impl TypeKind {
    /// Catalogue spelling of the tag
    pub fn as_str(&self) -> &str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Annotation => "annotation",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for TypeKind {
    fn from(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "class" => Self::Class,
            "interface" => Self::Interface,
            "enum" => Self::Enum,
            "annotation" => Self::Annotation,
            _ => Self::Other(tag.to_string()),
        }
    }
}

impl From<String> for TypeKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl FromStr for TypeKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<TypeKind> for String {
    fn from(kind: TypeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalogue entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    /// Category tag
    pub kind: TypeKind,
    /// Opaque library classification code
    pub group_id: i64,
    /// Unqualified name, e.g. `IScript`
    pub simple_name: String,
    /// Dotted namespace
    pub package_name: String,
    /// Package plus local (possibly nested) name
    pub qualified_name: String,
    /// Parent type, if any
    pub super_type: Option<String>,
    /// Implemented interfaces in catalogue order
    pub interfaces: Vec<String>,
    /// Raw constructor signatures
    pub constructors: Vec<String>,
    /// Raw method signatures
    pub methods: Vec<String>,
    /// Raw field descriptors, kept but not indexed
    pub fields: Vec<String>,
}

impl TypeRecord {
    /// Type name relative to its package; nested types keep their dotted path
    pub fn local_name(&self) -> &str {
        self.qualified_name
            .strip_prefix(self.package_name.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(&self.qualified_name)
    }

    /// Qualified name with the common JEB prefix removed
    pub fn display_hint(&self) -> &str {
        self.qualified_name
            .strip_prefix(COMMON_NAMESPACE_PREFIX)
            .unwrap_or(&self.qualified_name)
    }
}

/// A constructor or method reduced to what completion needs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    /// Method identifier
    pub name: String,
    /// Argument names, types dropped
    pub args: Vec<String>,
    /// Simple name of the declaring type
    pub owner_simple_name: String,
    /// `name(a, b)`
    pub display_signature: String,
    /// `name(${1:a}, ${2:b})`
    pub template_signature: String,
}

impl MethodSignature {
    /// Build a signature from its parsed parts
    pub fn new(name: &str, args: Vec<String>, owner_simple_name: &str) -> Self {
        let display_signature = format!("{name}({})", args.join(", "));
        let placeholders: Vec<String> = args
            .iter()
            .enumerate()
            .map(|(i, arg)| format!("${{{}:{arg}}}", i + 1))
            .collect();
        let template_signature = format!("{name}({})", placeholders.join(", "));

        Self {
            name: name.to_string(),
            args,
            owner_simple_name: owner_simple_name.to_string(),
            display_signature,
            template_signature,
        }
    }

    /// Deduplication key
    pub fn key(&self) -> (&str, &str, &str) {
        (
            &self.display_signature,
            &self.template_signature,
            &self.owner_simple_name,
        )
    }
}

/// A single completion suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Text the user sees and types against
    pub trigger: String,
    /// Right-hand hint (type path or owner)
    pub annotation: String,
    /// Text inserted on acceptance
    pub insertion: String,
    /// Insertion contains `${n:..}` placeholders
    pub is_snippet: bool,
}

impl Candidate {
    /// Completion entry for a type
    pub fn for_type(record: &TypeRecord) -> Self {
        Self {
            trigger: record.simple_name.clone(),
            annotation: record.display_hint().to_string(),
            insertion: record.simple_name.clone(),
            is_snippet: false,
        }
    }

    /// Completion entry for a method signature
    pub fn for_method(signature: &MethodSignature) -> Self {
        Self {
            trigger: signature.display_signature.clone(),
            annotation: signature.owner_simple_name.clone(),
            insertion: signature.template_signature.clone(),
            is_snippet: true,
        }
    }

    /// `trigger<TAB>annotation`, the flat label form
    pub fn label(&self) -> String {
        format!("{}{HINT_SEPARATOR}{}", self.trigger, self.annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(package: &str, qualified: &str) -> TypeRecord {
        TypeRecord {
            kind: TypeKind::Interface,
            group_id: 0,
            simple_name: "Inner".to_string(),
            package_name: package.to_string(),
            qualified_name: qualified.to_string(),
            super_type: None,
            interfaces: vec![],
            constructors: vec![],
            methods: vec![],
            fields: vec![],
        }
    }

    #[test]
    fn test_local_name_keeps_nesting() {
        let r = record("com.example", "com.example.Outer.Inner");
        assert_eq!(r.local_name(), "Outer.Inner");
    }

    #[test]
    fn test_display_hint_strips_prefix() {
        let r = record("com.pnfsoftware.jeb.core", "com.pnfsoftware.jeb.core.Inner");
        assert_eq!(r.display_hint(), "core.Inner");

        let other = record("org.example", "org.example.Inner");
        assert_eq!(other.display_hint(), "org.example.Inner");
    }

    #[test]
    fn test_method_signature_rendering() {
        let sig = MethodSignature::new("foo", vec!["bar".into(), "baz".into()], "Owner");
        assert_eq!(sig.display_signature, "foo(bar, baz)");
        assert_eq!(sig.template_signature, "foo(${1:bar}, ${2:baz})");

        let empty = MethodSignature::new("run", vec![], "Owner");
        assert_eq!(empty.display_signature, "run()");
        assert_eq!(empty.template_signature, "run()");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Interface".parse::<TypeKind>(), Ok(TypeKind::Interface));
        assert_eq!(
            "record".parse::<TypeKind>(),
            Ok(TypeKind::Other("record".into()))
        );
        assert_eq!(TypeKind::Other("record".into()).to_string(), "record");
    }

    #[test]
    fn test_record_json_keeps_kind_tag() {
        let mut record = record("com.example", "com.example.Inner");
        record.kind = TypeKind::Other("record".into());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "record");
        assert_eq!(json["super_type"], serde_json::Value::Null);

        let back: TypeRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_candidate_label() {
        let sig = MethodSignature::new("run", vec!["ctx".into()], "IScript");
        let c = Candidate::for_method(&sig);
        assert_eq!(c.label(), "run(ctx)\tIScript");
        assert_eq!(c.insertion, "run(${1:ctx})");
        assert!(c.is_snippet);
    }
}
