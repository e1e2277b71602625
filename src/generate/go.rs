use super::{check_keywords, push_indent, translate_types, Joiner, Options};
use crate::{
    ast::{Field, Modifiers, TypeDecl},
    diag::Result,
};

pub static KEYWORDS: phf::Set<&'static str> = phf::phf_set! {
    "break", "default", "func", "interface", "select",
    "case", "defer", "go", "map", "struct",
    "chan", "else", "goto", "package", "switch",
    "const", "fallthrough", "if", "range", "type",
    "continue", "for", "import", "return", "var",
};

/// Renders the type table as Go struct and method-stub definitions.
pub fn generate(types: &mut [TypeDecl], options: &Options, path: &str) -> Result<String> {
    check_keywords(types, &KEYWORDS, "go", path)?;
    translate_types(types, map_type);

    let mut out = String::new();
    out.push_str("package ");
    out.push_str(&options.package_name);
    out.push_str("\n\n");

    let mut joiner = Joiner::new();
    for t in types.iter() {
        if joiner.join() {
            out.push('\n');
        }
        out.push_str("type ");
        out.push_str(&t.name);
        out.push_str(" struct {\n");
        for field in &t.fields {
            push_indent(&mut out, options.indent);
            write_field(field, &mut out);
            out.push('\n');
        }
        out.push_str("}\n");
        write_methods(t, options, &mut out);
    }
    Ok(out)
}

fn write_field(field: &Field, out: &mut String) {
    out.push_str(&field.var_name);
    out.push(' ');
    if field.modifiers.contains(Modifiers::ARRAY) {
        out.push_str("[]");
    }
    out.push_str(&field.type_name);
}

fn write_methods(t: &TypeDecl, options: &Options, out: &mut String) {
    for method in &t.methods {
        let receiver = receiver_name(&t.name, options);
        out.push_str("func (");
        out.push_str(&receiver);
        out.push_str(" *");
        out.push_str(&t.name);
        out.push_str(") ");
        out.push_str(&method.name);
        out.push('(');

        let mut joiner = Joiner::new();
        for param in &method.params {
            if joiner.join() {
                out.push_str(", ");
            }
            write_field(param, out);
        }
        out.push_str(") ");
        if let Some(ret) = &method.return_type {
            out.push_str(&ret.name);
            out.push(' ');
        }
        out.push_str("{\n");
        push_indent(out, options.indent);
        out.push_str("panic(\"TODO: Unimplemented method\")\n}\n");
    }
}

/// Derives a receiver name by lowercasing the type name's first letter.
/// Falls back for non-ASCII-letter starts and keyword collisions.
fn receiver_name(name: &str, options: &Options) -> String {
    let Some(first) = name.as_bytes().first() else {
        return options.receiver_fallback.clone();
    };
    if !first.is_ascii_alphabetic() {
        // Only ASCII letters make for a sensible receiver.
        return options.receiver_fallback.clone();
    }
    let receiver = format!("{}{}", first.to_ascii_lowercase() as char, &name[1..]);
    if KEYWORDS.contains(receiver.as_str()) {
        return options.receiver_fallback.clone();
    }
    receiver
}

pub(crate) fn map_type(type_name: &str) -> Option<&'static str> {
    let mapped = match type_name {
        "i8" => "int8",
        "i16" => "int16",
        "i32" => "int32",
        "i64" => "int64",
        "u8" => "uint8",
        "u16" => "uint16",
        "u32" => "uint32",
        "u64" => "uint64",
        "f32" => "float32",
        "f64" => "float64",
        "string" => "string",
        "char" => "rune",
        "bool" => "bool",
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::super::tests::parse;
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn cat_struct_and_method_stub() {
        let mut types = parse(include_str!("../../demos/cat.tg"));
        let out = generate(&mut types, &Options::default(), "cat.tg").unwrap();
        assert_eq!(
            out,
            indoc! {r#"
                package main

                type Cat struct {
                    name string
                    age uint32
                }
                func (cat *Cat) meow(sound string, volume uint32) string {
                    panic("TODO: Unimplemented method")
                }
            "#}
        );
    }

    #[test]
    fn array_field_rendering() {
        let mut types = parse("type Bag { [u8] bytes; }");
        let out = generate(&mut types, &Options::default(), "bag.tg").unwrap();
        assert!(out.contains("bytes []uint8\n"), "output: {out}");
    }

    #[test]
    fn receiver_falls_back_for_keyword_and_non_ascii() {
        let options = Options::default();
        assert_eq!(receiver_name("Cat", &options), "cat");
        assert_eq!(receiver_name("HTTP", &options), "hTTP");
        // "If" lowercases to the keyword "if".
        assert_eq!(receiver_name("If", &options), "this");
        assert_eq!(receiver_name("Żaba", &options), "this");
    }

    #[test]
    fn keyword_collision_fails() {
        let mut types = parse("type T { u32 range; }");
        let err = generate(&mut types, &Options::default(), "t.tg").unwrap_err();
        assert_eq!(
            err.message(),
            "ERROR @ t.tg:1:14 field name 'range' is a go keyword."
        );
    }
}
