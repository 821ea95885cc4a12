//! Snapshot tests for Java code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use jwrap_codegen::{
    builder::{
        ClassModel, ClassName, CodeModel, DocComment, FieldModel, Indent, MethodModel, TypeRef,
        Visibility,
    },
    generation::JavaFile,
    lower::lower,
};
use jwrap_manifest::Manifest;

/// Lower a manifest and render every file, keyed by relative path.
fn generate_files(manifest_toml: &str) -> Vec<(String, String)> {
    let manifest: Manifest = manifest_toml.parse().expect("Failed to parse manifest");
    let lowered = lower(&manifest).expect("Failed to lower manifest");

    lowered
        .files
        .iter()
        .map(|file| {
            (
                file.relative_path().display().to_string(),
                file.render(lowered.indent),
            )
        })
        .collect()
}

#[test]
fn test_greeter_class() {
    let files = generate_files(
        r#"
[generator]
header = "Generated by jwrap. Do not edit."

[[classes]]
name = "com.example.Greeter"
implements = ["java.lang.Runnable"]
doc = ["Greets people.\n", "\n", "Wraps a ", { link = "java.lang.Runnable" }, ", see ", { member = "com.example.Greeter#greet" }, ".\n"]

[[classes.fields]]
name = "target"
type = "java.lang.Runnable"
final = true

[[classes.fields]]
name = "names"
type = { type = "java.util.List", args = ["java.lang.String"] }
final = true
init = ["new ", { type = "java.util.ArrayList" }, "<>()"]

[[classes.constructors]]
args = [{ name = "target", type = "java.lang.Runnable" }]
body = ["this.target = target;"]

[[classes.methods]]
name = "greet"
returns = "java.lang.String"
args = [{ name = "id", type = "int" }, { type = "long" }]
throws = ["java.sql.SQLException"]
doc = ["Looks up a name.\n"]
body = [
    { block = "if (id < 0 || id >= names.size())", body = [
        { line = ["throw new ", { type = "java.sql.SQLException" }, "(\"no name \" + id);"] },
    ] },
    "return names.get(id);",
]

[[classes.methods]]
name = "run"
annotations = ["java.lang.Override"]
body = ["target.run();"]
"#,
    );

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, "com/example/Greeter.java");
    insta::assert_snapshot!(files[0].1, @r#"
    // Generated by jwrap. Do not edit.

    package com.example;

    import java.util.List;
    import java.util.ArrayList;
    import java.sql.SQLException;

    /**
     * Greets people.
     *
     * Wraps a {@link Runnable}, see {@link Greeter#greet(int, long)}.
     */
    public class Greeter implements Runnable {
        private final Runnable target;
        private final List<String> names = new ArrayList<>();

        public Greeter(Runnable target) {
            this.target = target;
        }

        /**
         * Looks up a name.
         */
        public String greet(int id, long arg1) throws SQLException {
            if (id < 0 || id >= names.size()) {
                throw new SQLException("no name " + id);
            }
            return names.get(id);
        }

        @Override
        public void run() {
            target.run();
        }
    }
    "#);
}

#[test]
fn test_colliding_simple_names() {
    let files = generate_files(
        r#"
[[classes]]
name = "com.example.Dates"

[[classes.methods]]
name = "convert"
returns = "java.util.Date"
args = [{ name = "value", type = "java.sql.Date" }]
doc = ["Converts a ", { link = "java.sql.Date" }, ".\n"]
body = [{ line = ["return new ", { type = "java.util.Date" }, "(value.getTime());"] }]
"#,
    );

    insta::assert_snapshot!(files[0].1, @r#"
    package com.example;

    import java.util.Date;

    public class Dates {
        /**
         * Converts a {@link java.sql.Date}.
         */
        public Date convert(java.sql.Date value) {
            return new Date(value.getTime());
        }
    }
    "#);
}

#[test]
fn test_builder_api_with_tabs() {
    let mut doc = DocComment::new();
    doc.text("Number of rows.\n");

    let mut init = CodeModel::new();
    init.text("0");

    let class = ClassModel::new("org.demo.Counter")
        .final_()
        .annotated(ClassName::parse("javax.annotation.processing.Generated"))
        .field(
            FieldModel::new("count", TypeRef::long())
                .visibility(Visibility::Package)
                .init(init)
                .doc(doc),
        )
        .method(
            MethodModel::new("increment")
                .with_visibility(Visibility::Protected)
                .final_()
                .returns(TypeRef::long())
                .line("return ++count;"),
        );

    let rendered = JavaFile::new(class).render(Indent::Tab);
    insta::assert_snapshot!(rendered, @r#"
    package org.demo;

    import javax.annotation.processing.Generated;

    @Generated
    public final class Counter {
    	/**
    	 * Number of rows.
    	 */
    	long count = 0;

    	protected final long increment() {
    		return ++count;
    	}
    }
    "#);
}
