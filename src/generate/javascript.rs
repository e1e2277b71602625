use super::{push_indent, Joiner, Options};
use crate::ast::{Field, FuncDecl, TypeDecl};

/// Renders the type table as JavaScript classes.
///
/// JavaScript is untyped, so no type translation happens and no reserved-word
/// check is performed; fields surface only through the generated constructor.
pub fn generate(types: &[TypeDecl], options: &Options) -> String {
    let mut out = String::new();
    let mut joiner = Joiner::new();
    for t in types {
        if joiner.join() {
            out.push('\n');
        }
        out.push_str("class ");
        out.push_str(&t.name);
        out.push_str(" {\n");

        push_indent(&mut out, options.indent);
        write_constructor(&t.fields, options, &mut out);
        write_methods(&t.methods, options, &mut out);
        out.push_str("}\n");
    }
    out
}

fn write_constructor(fields: &[Field], options: &Options, out: &mut String) {
    out.push_str("constructor(");
    let mut joiner = Joiner::new();
    for field in fields {
        if joiner.join() {
            out.push_str(", ");
        }
        out.push_str(&field.var_name);
    }
    out.push_str(") {\n");
    for field in fields {
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

fn write_methods(methods: &[FuncDecl], options: &Options, out: &mut String) {
    for method in methods {
        push_indent(out, options.indent);
        out.push_str(&method.name);
        out.push('(');

        let mut joiner = Joiner::new();
        for param in &method.params {
            if joiner.join() {
                out.push_str(", ");
            }
            out.push_str(&param.var_name);
        }
        out.push_str(") {}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::parse;
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn cat_class() {
        let types = parse(include_str!("../../demos/cat.tg"));
        let out = generate(&types, &Options::default());
        assert_eq!(
            out,
            indoc! {"
                class Cat {
                    constructor(name, age) {
                        this.name = name;
                        this.age = age;
                    }
                    meow(sound, volume) {}
                }
            "}
        );
    }

    #[test]
    fn two_classes_are_separated_by_a_blank_line() {
        let types = parse("type A {}\ntype B {}");
        let out = generate(&types, &Options::default());
        assert_eq!(
            out,
            indoc! {"
                class A {
                    constructor() {
                    }
                }

                class B {
                    constructor() {
                    }
                }
            "}
        );
    }
}
