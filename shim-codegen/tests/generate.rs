use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use typeshim_codegen::{Error, Generator, GeneratorConfig};
use typeshim_core::FormatStyle;

const JSON_BUILDER: &str = "\
export declare class JsonTypeBuilder {
    Object(props: TProperties): TObject;
}
";

const JAVASCRIPT_BUILDER: &str = "\
export declare class JavaScriptTypeBuilder extends JsonTypeBuilder {
    Object(props: TProperties, options?: ObjectOptions): TObject;
    Number(): TNumber;
}
";

const BUILDERS: [&str; 2] = ["JsonTypeBuilder", "JavaScriptTypeBuilder"];

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn config(&self, files: &[&str]) -> GeneratorConfig {
        GeneratorConfig::new(files.iter().map(|f| self.path(f)), BUILDERS)
    }
}

fn builders_fixture() -> Fixture {
    Fixture::new(&[
        ("json.d.ts", JSON_BUILDER),
        ("javascript.d.ts", JAVASCRIPT_BUILDER),
    ])
}

#[test]
fn merges_overloads_across_builder_classes() {
    let fixture = builders_fixture();
    let generator = Generator::new(fixture.config(&["json.d.ts", "javascript.d.ts"])).unwrap();

    assert_eq!(generator.builders().len(), 2);
    let names: Vec<_> = generator.methods().iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["Number", "Object"]);
    let object = &generator.methods()[1];
    assert_eq!(
        object.parameter_names().collect::<Vec<_>>(),
        vec!["props", "options"]
    );
    assert_eq!(object.overloads().len(), 2);
    assert_eq!(generator.warnings().count(), 0);
}

#[test]
fn generated_module() {
    let fixture = builders_fixture();
    let generator = Generator::new(fixture.config(&["json.d.ts", "javascript.d.ts"])).unwrap();

    let output = generator.output(&FormatStyle::default()).unwrap();

    insta::assert_snapshot!(output, @r"
    /*--------------------------------------------------------------------------
     * This file is generated by typeshim. Do not edit by hand.
     *-------------------------------------------------------------------------*/

    import * as TypeBox from '@sinclair/typebox'
    import { Type } from '@sinclair/typebox'

    /**
     * Creates a schema for a `Number` type.
     */
    export function Number(): TypeBox.TNumber
    export function Number() {
      return Type.Number()
    }

    /**
     * Creates a schema for a `Object` type.
     */
    export function Object(props: TypeBox.TProperties): TypeBox.TObject
    export function Object(props: TypeBox.TProperties, options?: ObjectOptions): TypeBox.TObject
    export function Object(props, options) {
      return Type.Object(props, options)
    }
    ");
}

#[test]
fn no_matching_builders_yields_empty_module() {
    let fixture = Fixture::new(&[("other.d.ts", "export declare class Other {\n    A(): void;\n}\n")]);
    let generator = Generator::new(fixture.config(&["other.d.ts"])).unwrap();

    assert!(generator.builders().is_empty());
    assert!(generator.methods().is_empty());
    assert!(generator.warnings().count() > 0);

    let output = generator.output(&FormatStyle::default()).unwrap();
    assert!(output.contains("import { Type } from '@sinclair/typebox'"));
    assert!(!output.contains("export function"));
}

#[test]
fn options_tokens_are_registered_and_patched() {
    let source = "\
export interface FooOptions extends SchemaOptions {}
export interface BarOptions extends FooOptions {}
export declare class JsonTypeBuilder {
    Foo(options: FooOptions): TFoo;
    Bar(options: BarOptions): TBar;
}
";
    let fixture = Fixture::new(&[("json.d.ts", source)]);
    let generator = Generator::new(fixture.config(&["json.d.ts"])).unwrap();

    assert!(generator.internal_types().contains("FooOptions"));
    assert!(generator.internal_types().contains("BarOptions"));
    let patcher = generator.patcher();
    assert_eq!(
        patcher.patch("FooOptions | BarOptions"),
        "TypeBox.FooOptions | TypeBox.BarOptions"
    );

    let data = generator.template_data();
    assert_eq!(data[0].signatures, vec!["Bar(options: TypeBox.BarOptions): TypeBox.TBar"]);
    assert_eq!(data[1].signatures, vec!["Foo(options: TypeBox.FooOptions): TypeBox.TFoo"]);
}

#[test]
fn type_parameters_named_like_the_namespace() {
    let source = "\
export declare class JsonTypeBuilder {
    Tuple<Types extends TSchema[]>(types: [...Types], options?: SchemaOptions): TTuple<Types>;
}
";
    let fixture = Fixture::new(&[("json.d.ts", source)]);
    let config = GeneratorConfig::new([fixture.path("json.d.ts")], ["JsonTypeBuilder"]);

    let generator = Generator::new(config.clone()).unwrap();
    assert_eq!(generator.warnings().count(), 0);
    assert_eq!(
        generator.template_data()[0].signatures,
        vec![
            "Tuple<Types extends TypeBox.TSchema[]>(types: [...Types], options?: TypeBox.SchemaOptions): TypeBox.TTuple<Types>"
        ]
    );

    let shadowed = Generator::new(config.with_namespace("Types")).unwrap();
    let warnings: Vec<_> = shadowed.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].location.as_deref(), Some("Tuple"));
}

#[test]
fn output_is_deterministic() {
    let fixture = builders_fixture();
    let config = fixture.config(&["json.d.ts", "javascript.d.ts"]);

    let first = Generator::new(config.clone()).unwrap().render().unwrap();
    let second = Generator::new(config).unwrap().render().unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_source_fails_to_load() {
    let fixture = builders_fixture();
    let err = Generator::new(fixture.config(&["json.d.ts", "missing.d.ts"])).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::SourceLoad(_))
    ));
}

#[test]
fn unparsable_source_fails_to_load() {
    let fixture = Fixture::new(&[("broken.d.ts", "export declare class {{ ;")]);
    let err = Generator::new(fixture.config(&["broken.d.ts"])).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::SourceLoad(_))
    ));
}

#[test]
fn custom_template() {
    let fixture = builders_fixture();
    fs::write(
        fixture.path("names.jinja"),
        "[% for method in methods %][[ method.name ]]:[[ method.parameters ]]\n[% endfor %]",
    )
    .unwrap();
    let config = fixture
        .config(&["json.d.ts", "javascript.d.ts"])
        .with_template(fixture.path("names.jinja"));

    let rendered = Generator::new(config).unwrap().render().unwrap();

    assert_eq!(rendered, "Number:\nObject:props, options\n");
}

#[test]
fn missing_template_is_a_render_error() {
    let fixture = builders_fixture();
    let config = fixture
        .config(&["json.d.ts"])
        .with_template(fixture.path("missing.jinja"));

    let err = Generator::new(config).unwrap().render().unwrap_err();

    assert!(matches!(err, Error::TemplateRead { .. }));
}

#[test]
fn write_to_file_overwrites_and_uses_project_style() {
    let fixture = builders_fixture();
    fs::write(fixture.path(".prettierrc"), r#"{ "tabWidth": 4 }"#).unwrap();
    let out = fixture.path("builders.ts");
    fs::write(&out, "stale").unwrap();
    let generator = Generator::new(fixture.config(&["json.d.ts", "javascript.d.ts"])).unwrap();

    generator.write_to_file(&out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(!written.contains("stale"));
    assert!(written.contains("export function Number() {\n    return Type.Number()\n}\n"));
}

#[test]
fn write_to_file_does_not_create_directories() {
    let fixture = builders_fixture();
    let out = fixture.path("missing/builders.ts");
    let generator = Generator::new(fixture.config(&["json.d.ts"])).unwrap();

    let err = generator.write_to_file(&out).unwrap_err();

    match err {
        Error::Write { path, .. } => assert_eq!(path, out),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!Path::new(&out).exists());
}
