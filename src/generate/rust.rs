use super::{check_keywords, push_indent, translate_types, Joiner, Options};
use crate::{
    ast::{Field, Modifiers, TypeDecl},
    diag::Result,
};

pub static KEYWORDS: phf::Set<&'static str> = phf::phf_set! {
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "async", "await", "dyn",
};

/// Renders the type table as Rust structs with an `impl` block of panicking
/// method stubs. Nullable fields become `Option<T>`.
pub fn generate(types: &mut [TypeDecl], options: &Options, path: &str) -> Result<String> {
    check_keywords(types, &KEYWORDS, "rust", path)?;
    translate_types(types, map_type);

    let mut out = String::new();
    let mut joiner = Joiner::new();
    for t in types.iter() {
        if joiner.join() {
            out.push('\n');
        }
        out.push_str("struct ");
        out.push_str(&t.name);
        out.push_str(" {\n");
        write_fields(&t.fields, options, &mut out);
        out.push_str("}\n");

        if !t.methods.is_empty() {
            out.push_str("impl ");
            out.push_str(&t.name);
            out.push_str(" {\n");
            write_methods(t, options, &mut out);
            out.push_str("}\n");
        }
    }
    Ok(out)
}

fn write_fields(fields: &[Field], options: &Options, out: &mut String) {
    for field in fields {
        push_indent(out, options.indent);
        out.push_str(&field.var_name);
        out.push_str(": ");
        write_field_type(field, out);
        out.push_str(",\n");
    }
}

fn write_field_type(field: &Field, out: &mut String) {
    let is_list = field.modifiers.contains(Modifiers::ARRAY);
    let is_nullable = field.modifiers.contains(Modifiers::NULLABLE);
    if is_list {
        out.push_str("Vec<");
    }
    if is_nullable {
        out.push_str("Option<");
    }
    out.push_str(&field.type_name);
    if is_nullable {
        out.push('>');
    }
    if is_list {
        out.push('>');
    }
}

fn write_methods(t: &TypeDecl, options: &Options, out: &mut String) {
    for method in &t.methods {
        push_indent(out, options.indent);
        out.push_str("fn ");
        out.push_str(&method.name);
        out.push_str("(&self");
        for param in &method.params {
            out.push_str(", ");
            out.push_str(&param.var_name);
            out.push_str(": ");
            write_field_type(param, out);
        }
        out.push_str(") ");
        if let Some(return_type) = &method.return_type {
            out.push_str("-> ");
            out.push_str(&return_type.name);
            out.push(' ');
        }
        out.push_str("{\n");
        push_indent(out, 2 * options.indent);
        out.push_str("panic!(\"TODO: Unimplemented method\")\n");
        push_indent(out, options.indent);
        out.push_str("}\n");
    }
}

pub(crate) fn map_type(type_name: &str) -> Option<&'static str> {
    match type_name {
        "string" => Some("String"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::parse;
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn cat_struct_and_impl() {
        let mut types = parse(include_str!("../../demos/cat.tg"));
        let out = generate(&mut types, &Options::default(), "cat.tg").unwrap();
        assert_eq!(
            out,
            indoc! {r#"
                struct Cat {
                    name: String,
                    age: u32,
                }
                impl Cat {
                    fn meow(&self, sound: String, volume: u32) -> String {
                        panic!("TODO: Unimplemented method")
                    }
                }
            "#}
        );
    }

    #[test]
    fn only_string_is_translated() {
        // The schema's scalar names are already Rust spellings; only
        // `string` needs mapping.
        assert_eq!(map_type("string"), Some("String"));
        for name in ["i8", "u8", "u32", "i64", "f64", "char", "bool"] {
            assert_eq!(map_type(name), None, "name: {name}");
        }

        let mut types = parse("type Stats { u32 count; i64 total; }");
        let out = generate(&mut types, &Options::default(), "stats.tg").unwrap();
        assert!(out.contains("count: u32,\n"), "output: {out}");
        assert!(out.contains("total: i64,\n"), "output: {out}");
    }

    #[test]
    fn nullable_list_field_uses_option() {
        let mut types = parse("type Bag { [string?] items; }");
        let out = generate(&mut types, &Options::default(), "bag.tg").unwrap();
        assert!(out.contains("items: Vec<Option<String>>,"), "output: {out}");
    }

    #[test]
    fn keyword_collision_fails() {
        let mut types = parse("type Machine { bool match; }");
        let err = generate(&mut types, &Options::default(), "m.tg").unwrap_err();
        assert_eq!(
            err.message(),
            "ERROR @ m.tg:1:21 field name 'match' is a rust keyword."
        );
    }
}
