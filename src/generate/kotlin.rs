use super::{check_keywords, push_indent, translate_types, Joiner, Options};
use crate::{
    ast::{Field, Modifiers, TypeDecl},
    diag::Result,
};

pub static KEYWORDS: phf::Set<&'static str> = phf::phf_set! {
    "abstract", "annotation", "as", "break", "class",
    "companion", "continue", "crossinline", "data", "do",
    "dynamic", "else", "enum", "external", "false",
    "final", "finally", "for", "fun", "if",
    "import", "in", "inline", "internal", "is",
    "lateinit", "native", "new", "null", "object",
    "open", "operator", "or", "package", "protected",
    "public", "reified", "return", "sealed", "super",
    "suspend", "this", "throw", "trait", "true",
    "typealias", "typeof", "val", "var", "when",
    "while", "with", "where", "by", "get", "set", "it",
};

/// Renders the type table as Kotlin data classes. Types without fields fall
/// back to a plain `class`, since data classes cannot be empty.
pub fn generate(types: &mut [TypeDecl], options: &Options, path: &str) -> Result<String> {
    check_keywords(types, &KEYWORDS, "kotlin", path)?;
    translate_types(types, map_type);

    let mut out = String::new();
    let mut joiner = Joiner::new();
    for t in types.iter() {
        if joiner.join() {
            out.push('\n');
        }
        if !t.fields.is_empty() {
            out.push_str("data ");
        }
        out.push_str("class ");
        out.push_str(&t.name);

        if !t.fields.is_empty() {
            write_constructor(t, options, &mut out);
        }
        if !t.methods.is_empty() {
            out.push_str(" {\n");
            write_methods(t, options, &mut out);
            out.push_str("}\n");
        }
    }
    Ok(out)
}

fn write_constructor(t: &TypeDecl, options: &Options, out: &mut String) {
    out.push_str("(\n");
    let mut joiner = Joiner::new();
    for field in &t.fields {
        if joiner.join() {
            out.push_str(",\n");
        }
        push_indent(out, options.indent);
        out.push_str(if field.modifiers.contains(Modifiers::CONST) {
            "val "
        } else {
            "var "
        });
        out.push_str(&field.var_name);
        out.push_str(": ");
        write_field_type(field, out);
    }
    out.push_str("\n)");
}

fn write_field_type(field: &Field, out: &mut String) {
    let is_list = field.modifiers.contains(Modifiers::ARRAY);
    if is_list {
        out.push_str("List<");
    }
    out.push_str(&field.type_name);
    if field.modifiers.contains(Modifiers::NULLABLE) {
        out.push('?');
    }
    if is_list {
        out.push('>');
    }
}

fn write_methods(t: &TypeDecl, options: &Options, out: &mut String) {
    for method in &t.methods {
        push_indent(out, options.indent);
        out.push_str("fun ");
        out.push_str(&method.name);
        out.push('(');
        let mut joiner = Joiner::new();
        for param in &method.params {
            if joiner.join() {
                out.push_str(", ");
            }
            out.push_str(&param.var_name);
            out.push_str(": ");
            write_field_type(param, out);
        }
        out.push(')');
        if let Some(return_type) = &method.return_type {
            out.push_str(": ");
            out.push_str(&return_type.name);
        }
        out.push_str(" {\n");
        push_indent(out, 2 * options.indent);
        out.push_str("throw RuntimeException(\"TODO: Unimplemented method\")\n");
        push_indent(out, options.indent);
        out.push_str("}\n");
    }
}

pub(crate) fn map_type(type_name: &str) -> Option<&'static str> {
    let mapped = match type_name {
        "i8" | "u8" => "Byte",
        "i16" | "u16" => "Short",
        "i32" | "u32" => "Int",
        "i64" | "u64" => "Long",
        "f32" => "Float",
        "f64" => "Double",
        "string" => "String",
        "char" => "Char",
        "bool" => "Boolean",
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
    fn cat_data_class() {
        let mut types = parse(include_str!("../../demos/cat.tg"));
        let out = generate(&mut types, &Options::default(), "cat.tg").unwrap();
        assert_eq!(
            out,
            indoc! {r#"
                data class Cat(
                    val name: String,
                    var age: Int
                ) {
                    fun meow(sound: String, volume: Int): String {
                        throw RuntimeException("TODO: Unimplemented method")
                    }
                }
            "#}
        );
    }

    #[test]
    fn empty_type_is_a_plain_class() {
        let mut types = parse("type Marker {}");
        let out = generate(&mut types, &Options::default(), "marker.tg").unwrap();
        assert_eq!(out, "class Marker");
    }

    #[test]
    fn nullable_list_field() {
        let mut types = parse("type Bag { [string?] items; }");
        let out = generate(&mut types, &Options::default(), "bag.tg").unwrap();
        assert!(out.contains("var items: List<String?>"), "output: {out}");
    }

    #[test]
    fn keyword_collision_fails() {
        let mut types = parse("type T { bool when; }");
        let err = generate(&mut types, &Options::default(), "t.tg").unwrap_err();
        assert_eq!(
            err.message(),
            "ERROR @ t.tg:1:15 field name 'when' is a kotlin keyword."
        );
    }
}
