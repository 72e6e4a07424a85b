//! End-to-end tests: catalogue text in, editor answers out

use jeb_catalogue::{
    import_edit, word_at, CatalogueContext, CatalogueError, CatalogueIndex, CatalogueOrigin,
    CatalogueSource, CompletionScope, CorruptEntry, Direction, TypeKind, CATALOGUE_FILE_NAME,
};

const CATALOGUE: &str = "\
# JEB API
interface;1;IScript;com.pnfsoftware.jeb.client.api;com.pnfsoftware.jeb.client.api.IScript;;;;run(ctx:IClientContext);

interface;1;IClientContext;com.pnfsoftware.jeb.client.api;com.pnfsoftware.jeb.client.api.IClientContext;;;;getMainProject()|executeAsync(taskName:String,runnable:Runnable);
   # indented comment
class;2;Entry;com.example;com.example.Entry;;;;;
class;2;Entry;com.pnfsoftware.jeb.util;com.pnfsoftware.jeb.util.Entry;java.lang.Object;java.lang.Comparable|java.io.Serializable;Entry(k:Object);getKey();key:Object|value:Object
";

fn index() -> CatalogueIndex {
    CatalogueIndex::build(CATALOGUE).expect("catalogue should parse")
}

#[test]
fn test_comments_and_blanks_skipped() {
    assert_eq!(index().len(), 4);
}

#[test]
fn test_record_fields() {
    let idx = index();
    let entry = idx.record("com.pnfsoftware.jeb.util.Entry").unwrap();
    assert_eq!(entry.kind, TypeKind::Class);
    assert_eq!(entry.group_id, 2);
    assert_eq!(entry.super_type.as_deref(), Some("java.lang.Object"));
    assert_eq!(entry.interfaces, vec!["java.lang.Comparable", "java.io.Serializable"]);
    assert_eq!(entry.constructors, vec!["Entry(k:Object)"]);
    assert_eq!(entry.methods, vec!["getKey()"]);
    assert_eq!(entry.fields, vec!["key:Object", "value:Object"]);

    let plain = idx.record("com.example.Entry").unwrap();
    assert!(plain.interfaces.is_empty());
    assert!(plain.constructors.is_empty());
    assert!(plain.methods.is_empty());
    assert!(plain.fields.is_empty());
}

#[test]
fn test_unfamiliar_kind_does_not_abort_load() {
    let idx = CatalogueIndex::build("record;1;Pt;p;p.Pt;;;;x();\nclass;1;Foo;p;p.Foo;;;;;").unwrap();
    assert_eq!(idx.len(), 2);
    assert_eq!(idx.resolve_simple_name("Pt"), Some("p.Pt"));
    assert_eq!(idx.record("p.Pt").unwrap().kind.as_str(), "record");
    assert_eq!(idx.import_statement("p.Pt").as_deref(), Some("from p import Pt"));
}

#[test]
fn test_later_simple_name_wins() {
    assert_eq!(
        index().resolve_simple_name("Entry"),
        Some("com.pnfsoftware.jeb.util.Entry")
    );
}

#[test]
fn test_import_and_docs_for_iscript() {
    let idx = index();
    let qualified = "com.pnfsoftware.jeb.client.api.IScript";
    assert_eq!(
        idx.import_statement(qualified).as_deref(),
        Some("from com.pnfsoftware.jeb.client.api import IScript")
    );
    let url = idx.documentation_url(qualified).unwrap();
    assert!(url.ends_with("/reference/com/pnfsoftware/jeb/client/api/IScript.html"));
}

#[test]
fn test_unresolvable_names_are_absent() {
    let idx = index();
    assert_eq!(idx.import_for_word("IMissing"), None);
    assert_eq!(idx.documentation_url_for_word("IMissing"), None);
    assert!(idx.record_for_simple_name("IMissing").is_none());
}

#[test]
fn test_method_candidates() {
    let idx = index();
    let labels: Vec<String> = idx.method_candidates().iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        vec![
            "run(ctx)\tIScript",
            "getMainProject()\tIClientContext",
            "executeAsync(taskName, runnable)\tIClientContext",
            "getKey()\tEntry",
            "Entry(k)\tEntry",
        ]
    );
    assert_eq!(
        idx.method_candidates()[2].insertion,
        "executeAsync(${1:taskName}, ${2:runnable})"
    );
}

#[test]
fn test_corrupt_catalogue_aborts_load() {
    let text = format!("{CATALOGUE}class;9;Bad;p;p.Bad;;;;noParen;\n");
    match CatalogueIndex::build(&text) {
        Err(CatalogueError::Corrupt { reason, .. }) => {
            assert_eq!(reason, CorruptEntry::MissingParen("noParen".into()));
        }
        other => panic!("expected corrupt catalogue, got {other:?}"),
    }
}

#[test]
fn test_context_keeps_index_on_corrupt_reload() {
    let ctx = CatalogueContext::new(index());
    let before = ctx.snapshot();
    assert!(ctx.reload_from_text("class;1;X;p;p.X;;;;x;\n").is_err());
    assert_eq!(*ctx.snapshot(), *before);
}

#[test]
fn test_source_override_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CATALOGUE_FILE_NAME);
    let source = CatalogueSource::new(Some(path.clone()));

    let ctx = CatalogueContext::load(&source, None).unwrap();
    assert!(ctx.snapshot().resolve_simple_name("IDexUnit").is_some());

    std::fs::write(&path, CATALOGUE).unwrap();
    assert_eq!(ctx.reload(&source).unwrap(), CatalogueOrigin::User(path));
    assert_eq!(ctx.snapshot().len(), 4);
}

#[test]
fn test_word_to_import_flow() {
    let idx = index();
    let line = "class Dump(IScript):";
    let word = word_at(line, 14, Direction::Both);
    assert_eq!(word, "IScript");

    let import = idx.import_for_word(word).unwrap();
    let buffer = "# -*- coding: utf-8 -*-\n\nclass Dump(IScript):\n\tpass\n";
    let edit = import_edit(buffer, &import).unwrap();
    assert_eq!(
        edit.apply(buffer),
        "# -*- coding: utf-8 -*-\n\nfrom com.pnfsoftware.jeb.client.api import IScript\nclass Dump(IScript):\n\tpass\n"
    );

    let updated = edit.apply(buffer);
    assert_eq!(import_edit(&updated, &import), None);
}

#[test]
fn test_completion_lists_by_scope() {
    let idx = index();
    let scope = CompletionScope::at("ctx.getM", 8);
    assert_eq!(scope, CompletionScope::Members);
    assert_eq!(idx.candidates_for(scope).len(), 5);
    assert_eq!(idx.candidates_for(CompletionScope::at("x = IS", 6)).len(), 4);
}
