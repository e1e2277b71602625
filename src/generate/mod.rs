pub mod go;
pub mod java;
pub mod javascript;
pub mod kotlin;
pub mod rust;

use crate::{
    ast::{Field, TypeDecl},
    diag::{Diagnostic, Result},
    token::Pos,
};

/// Knobs shared by every generator.
#[derive(Clone, Debug)]
pub struct Options {
    pub indent: usize,
    pub package_name: String,
    /// Used by the Go generator when a receiver name cannot be derived from
    /// the type name.
    pub receiver_fallback: String,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            indent: 4,
            package_name: "main".to_string(),
            receiver_fallback: "this".to_string(),
        }
    }
}

/// Rejects schema names which collide with a reserved word of the target
/// language. Runs over type, field, method and parameter names.
fn check_keywords(
    types: &[TypeDecl],
    keywords: &phf::Set<&'static str>,
    language: &str,
    path: &str,
) -> Result<()> {
    let collision = |decl: &str, name: &str, pos: Pos| {
        Diagnostic::new(
            path,
            pos,
            format_args!("{decl} name '{name}' is a {language} keyword."),
        )
    };

    for t in types {
        if keywords.contains(t.name.as_str()) {
            return Err(collision("type", &t.name, t.name_pos));
        }
        for field in &t.fields {
            if keywords.contains(field.var_name.as_str()) {
                return Err(collision("field", &field.var_name, field.var_pos));
            }
        }
        for method in &t.methods {
            if keywords.contains(method.name.as_str()) {
                return Err(collision("method", &method.name, method.pos));
            }
            for param in &method.params {
                if keywords.contains(param.var_name.as_str()) {
                    return Err(collision("parameter", &param.var_name, param.var_pos));
                }
            }
        }
    }
    Ok(())
}

/// Rewrites every type name in the table to the target language's spelling.
/// Names the mapper does not know pass through unchanged.
fn translate_types(types: &mut [TypeDecl], convert: fn(&str) -> Option<&'static str>) {
    let translate_field = |field: &mut Field| {
        if let Some(mapped) = convert(&field.type_name) {
            field.type_name = mapped.to_string();
        }
    };

    for t in types {
        t.fields.iter_mut().for_each(translate_field);
        for method in &mut t.methods {
            if let Some(ret) = &mut method.return_type {
                if let Some(mapped) = convert(&ret.name) {
                    ret.name = mapped.to_string();
                }
            }
            method.params.iter_mut().for_each(translate_field);
        }
    }
}

/// Tracks separator placement across loop iterations: rejects the first call
/// and allows every subsequent one.
struct Joiner {
    first_call: bool,
}

impl Joiner {
    fn new() -> Joiner {
        Joiner { first_call: true }
    }

    fn join(&mut self) -> bool {
        if self.first_call {
            self.first_call = false;
            return false;
        }
        true
    }
}

fn push_indent(out: &mut String, width: usize) {
    for _ in 0..width {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use pretty_assertions::assert_eq;

    pub(crate) fn parse(src: &str) -> Vec<TypeDecl> {
        parser::parse_file("test.tg", src.as_bytes()).expect("failed to parse")
    }

    #[test]
    fn joiner_rejects_only_first_call() {
        let mut joiner = Joiner::new();
        assert!(!joiner.join());
        assert!(joiner.join());
        assert!(joiner.join());
    }

    #[test]
    fn keyword_collision_reports_declaration_site() {
        let types = parse("type T {\n    u32 range;\n}");
        let err = check_keywords(&types, &go::KEYWORDS, "go", "test.tg")
            .expect_err("expected collision");
        assert_eq!(
            err.message(),
            "ERROR @ test.tg:2:9 field name 'range' is a go keyword."
        );
    }

    #[test]
    fn translate_rewrites_known_names_in_place() {
        let mut types = parse("type T {\n    u32 age;\n    func f(string s) char;\n}");
        translate_types(&mut types, go::map_type);

        assert_eq!(types[0].fields[0].type_name, "uint32");
        assert_eq!(types[0].methods[0].params[0].type_name, "string");
        assert_eq!(types[0].methods[0].return_type.as_ref().unwrap().name, "rune");

        // Unknown names are identity-mapped.
        let mut types = parse("type T { Custom c; }");
        translate_types(&mut types, go::map_type);
        assert_eq!(types[0].fields[0].type_name, "Custom");
    }
}
