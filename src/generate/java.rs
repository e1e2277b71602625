use super::{check_keywords, push_indent, translate_types, Joiner, Options};
use crate::{
    ast::{Field, Modifiers, TypeDecl},
    diag::Result,
};

pub static KEYWORDS: phf::Set<&'static str> = phf::phf_set! {
    "abstract", "continue", "for", "new", "switch",
    "assert", "default", "goto", "package", "synchronized",
    "boolean", "do", "if", "private", "this",
    "break", "double", "implements", "protected", "throw",
    "byte", "else", "import", "public", "throws",
    "case", "enum", "instanceof", "return", "transient",
    "catch", "extends", "int", "short", "try",
    "char", "final", "interface", "static", "void",
    "class", "finally", "long", "strictfp", "volatile",
    "const", "float", "native", "super", "while",
};

/// Renders the type table as Java classes with a full-argument constructor
/// and throwing method stubs.
pub fn generate(types: &mut [TypeDecl], options: &Options, path: &str) -> Result<String> {
    check_keywords(types, &KEYWORDS, "java", path)?;
    translate_types(types, map_type);

    let mut out = String::new();
    let mut joiner = Joiner::new();
    for t in types.iter() {
        if joiner.join() {
            out.push('\n');
        }
        out.push_str("class ");
        out.push_str(&t.name);
        out.push_str(" {\n");

        write_fields(&t.fields, options, &mut out);
        if !t.fields.is_empty() {
            out.push('\n');
        }
        write_constructor(t, options, &mut out);
        write_methods(t, options, &mut out);
        out.push_str("}\n");
    }
    Ok(out)
}

fn write_fields(fields: &[Field], options: &Options, out: &mut String) {
    for field in fields {
        push_indent(out, options.indent);
        if field.modifiers.contains(Modifiers::CONST) {
            out.push_str("final ");
        }
        write_field(field, out);
        out.push_str(";\n");
    }
}

/// `T[] name` style, used for both declarations and parameters.
fn write_field(field: &Field, out: &mut String) {
    out.push_str(&field.type_name);
    if field.modifiers.contains(Modifiers::ARRAY) {
        out.push_str("[]");
    }
    out.push(' ');
    out.push_str(&field.var_name);
}

fn write_constructor(t: &TypeDecl, options: &Options, out: &mut String) {
    push_indent(out, options.indent);
    out.push_str(&t.name);
    out.push('(');
    let mut joiner = Joiner::new();
    for field in &t.fields {
        if joiner.join() {
            out.push_str(", ");
        }
        write_field(field, out);
    }
    out.push_str(") {\n");
    for field in &t.fields {
        push_indent(out, 2 * options.indent);
        out.push_str("this.");
        out.push_str(&field.var_name);
        out.push_str(" = ");
        out.push_str(&field.var_name);
        out.push_str(";\n");
    }
    push_indent(out, options.indent);
    out.push_str("}\n");
}

fn write_methods(t: &TypeDecl, options: &Options, out: &mut String) {
    for method in &t.methods {
        push_indent(out, options.indent);
        let return_type = method.return_type.as_ref().map_or("void", |r| r.name.as_str());
        out.push_str(return_type);
        out.push(' ');
        out.push_str(&method.name);

        out.push('(');
        let mut joiner = Joiner::new();
        for param in &method.params {
            if joiner.join() {
                out.push_str(", ");
            }
            write_field(param, out);
        }
        out.push_str(") {\n");
        push_indent(out, 2 * options.indent);
        out.push_str("throw new RuntimeException(\"TODO: Unimplemented method\");\n");
        push_indent(out, options.indent);
        out.push_str("}\n");
    }
}

pub(crate) fn map_type(type_name: &str) -> Option<&'static str> {
    let mapped = match type_name {
        "i8" | "u8" => "byte",
        "i16" | "u16" => "short",
        "i32" | "u32" => "int",
        "i64" | "u64" => "long",
        "f32" => "float",
        "f64" => "double",
        "string" => "String",
        "char" => "char",
        "bool" => "boolean",
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
    fn cat_class() {
        let mut types = parse(include_str!("../../demos/cat.tg"));
        let out = generate(&mut types, &Options::default(), "cat.tg").unwrap();
        assert_eq!(
            out,
            indoc! {r#"
                class Cat {
                    final String name;
                    int age;

                    Cat(String name, int age) {
                        this.name = name;
                        this.age = age;
                    }
                    String meow(String sound, int volume) {
                        throw new RuntimeException("TODO: Unimplemented method");
                    }
                }
            "#}
        );
    }

    #[test]
    fn void_return_and_array_parameter() {
        let mut types = parse("type Sink { func drain([u8] data); }");
        let out = generate(&mut types, &Options::default(), "sink.tg").unwrap();
        assert!(out.contains("void drain(byte[] data) {\n"), "output: {out}");
    }

    #[test]
    fn keyword_collision_fails() {
        let mut types = parse("type T { func new(); }");
        let err = generate(&mut types, &Options::default(), "t.tg").unwrap_err();
        assert_eq!(
            err.message(),
            "ERROR @ t.tg:1:15 method name 'new' is a java keyword."
        );
    }
}
