#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const ENTRY_SOURCE: &str = r#"
import { app } from "electron";
import { formatGreeting } from "./greeting";

export class PlaywrightState {
    name: string;

    constructor(name: string) {
        this.name = name;
    }
}

export function describeApp(): string {
    return formatGreeting(app.getName());
}
"#;

pub const GREETING_SOURCE: &str = r#"
export function formatGreeting(target: string): string {
    return `Hello, ${target}`;
}
"#;

pub const BROKEN_SOURCE: &str = r#"
export function broken( {
    return
"#;

/// A repository root containing the wrapper sources.
pub fn create_wrapper_project() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    write_entry(dir.path(), ENTRY_SOURCE);
    fs::write(wrapper_src(dir.path()).join("greeting.ts"), GREETING_SOURCE)
        .expect("write greeting.ts");
    dir
}

pub fn write_entry(root: &Path, source: &str) {
    let src = wrapper_src(root);
    fs::create_dir_all(&src).expect("create wrapper src");
    fs::write(src.join("index.ts"), source).expect("write index.ts");
}

pub fn wrapper_src(root: &Path) -> PathBuf {
    root.join("node").join("playwright-wrapper")
}

pub fn outfile(root: &Path) -> PathBuf {
    root.join("Browser").join("wrapper").join("index.js")
}

/// Entry importing two classes that share the name `Foo`, forcing a rename.
pub const COLLIDING_ENTRY_SOURCE: &str = r#"
import { Foo as FooA } from "./a";
import { Foo as FooB } from "./b";

export { FooA, FooB };
"#;

/// Entry importing a package that ships both `main` and `module` builds.
pub const DUAL_PACKAGE_ENTRY_SOURCE: &str = r#"
import { marker } from "dual";

export const source = marker;
"#;

/// A wrapper whose entry bundles two distinct `class Foo` declarations.
pub fn create_colliding_names_project() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    write_entry(dir.path(), COLLIDING_ENTRY_SOURCE);
    let src = wrapper_src(dir.path());
    fs::write(src.join("a.ts"), "export class Foo { side = \"a\"; }\n").expect("write a.ts");
    fs::write(src.join("b.ts"), "export class Foo { side = \"b\"; }\n").expect("write b.ts");
    dir
}

/// A wrapper depending on `dual`, whose `main` and `module` fields point at
/// different files.
pub fn create_dual_package_project() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    write_entry(dir.path(), DUAL_PACKAGE_ENTRY_SOURCE);

    let package = dir.path().join("node_modules").join("dual");
    fs::create_dir_all(&package).expect("create node_modules/dual");
    fs::write(
        package.join("package.json"),
        r#"{"name":"dual","main":"main.js","module":"module.js"}"#,
    )
    .expect("write package.json");
    fs::write(package.join("main.js"), "exports.marker = \"FROM_MAIN\";\n").expect("write main.js");
    fs::write(package.join("module.js"), "export const marker = \"FROM_MODULE\";\n")
        .expect("write module.js");
    dir
}
