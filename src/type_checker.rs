use std::collections::HashMap;

use crate::{
    ast::{Field, Modifiers, TypeDecl},
    diag::{Diagnostic, Result},
    token::Pos,
};

/// The closed set of built-in scalar type names. These need no declaration
/// and may not be redeclared.
pub static PRIMITIVES: phf::Set<&'static str> = phf::phf_set! {
    "i8", "i16", "i32", "i64",
    "u8", "u16", "u32", "u64",
    "f32", "f64",
    "string", "char", "bool",
};

/// Validates a fully parsed file in two passes and annotates primitive-typed
/// fields in place.
///
/// Pass 1 registers every declared type name, rejecting primitive-name
/// collisions and duplicate declarations. Pass 2 validates every field,
/// parameter and return type against the registered names. Checking halts at
/// the first violation.
pub fn check_file(path: &str, types: &mut [TypeDecl]) -> Result<()> {
    let declared = check_type_names(path, types)?;
    check_members(path, types, &declared)
}

fn check_type_names(path: &str, types: &[TypeDecl]) -> Result<HashMap<String, Pos>> {
    let mut declared: HashMap<String, Pos> = HashMap::with_capacity(types.len());
    for decl in types {
        if PRIMITIVES.contains(decl.name.as_str()) {
            return Err(Diagnostic::new(
                path,
                decl.name_pos,
                format_args!("Type name '{}' is a reserved primitive name.", decl.name),
            ));
        }
        if let Some(&first) = declared.get(decl.name.as_str()) {
            let error = Diagnostic::new(
                path,
                decl.name_pos,
                format_args!("Type '{}' was declared twice.", decl.name),
            );
            return Err(error.with_note(path, first, "first declared"));
        }
        declared.insert(decl.name.clone(), decl.name_pos);
    }
    Ok(declared)
}

fn check_members(
    path: &str,
    types: &mut [TypeDecl],
    declared: &HashMap<String, Pos>,
) -> Result<()> {
    for decl in types.iter_mut() {
        let type_name = decl.name.clone();

        let mut seen = HashMap::new();
        for field in &mut decl.fields {
            let scope = Scope::Type(&type_name);
            check_field(path, &scope, field, declared, &mut seen)?;
        }

        for method in &mut decl.methods {
            let method_name = method.name.clone();
            if let Some(ret) = &method.return_type {
                if !PRIMITIVES.contains(ret.name.as_str()) && !declared.contains_key(&ret.name) {
                    return Err(Diagnostic::new(
                        path,
                        ret.pos,
                        format_args!(
                            "Return type '{}' of method '{type_name}::{method_name}' was never declared.",
                            ret.name
                        ),
                    ));
                }
            }

            let mut seen = HashMap::new();
            for param in &mut method.params {
                let scope = Scope::Method(&type_name, &method_name);
                check_field(path, &scope, param, declared, &mut seen)?;
            }
        }
    }
    Ok(())
}

/// The name scope a field lives in, for diagnostics.
enum Scope<'a> {
    Type(&'a str),
    Method(&'a str, &'a str),
}

fn check_field(
    path: &str,
    scope: &Scope<'_>,
    field: &mut Field,
    declared: &HashMap<String, Pos>,
    seen: &mut HashMap<String, Pos>,
) -> Result<()> {
    if PRIMITIVES.contains(field.type_name.as_str()) {
        field.modifiers |= Modifiers::PRIMITIVE;
    } else if !declared.contains_key(field.type_name.as_str()) {
        let place = match scope {
            Scope::Type(ty) => format!("field '{}' of type '{ty}'", field.var_name),
            Scope::Method(ty, method) => {
                format!("parameter '{}' of method '{ty}::{method}'", field.var_name)
            }
        };
        return Err(Diagnostic::new(
            path,
            field.type_pos,
            format_args!("Type '{}' of {place} was never declared.", field.type_name),
        ));
    }

    if let Some(&first) = seen.get(field.var_name.as_str()) {
        let message = match scope {
            Scope::Type(ty) => {
                format!("Field '{}' was declared twice within type '{ty}'.", field.var_name)
            }
            Scope::Method(ty, method) => format!(
                "Parameter '{}' was declared twice in method '{ty}::{method}'.",
                field.var_name
            ),
        };
        let error = Diagnostic::new(path, field.var_pos, message);
        return Err(error.with_note(path, first, "first declared"));
    }
    seen.insert(field.var_name.clone(), field.var_pos);

    Ok(())
}
