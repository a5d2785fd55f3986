//! Steps generating the pooled default module.

use anyhow::{Result, anyhow, ensure};
use koin_codegen::generate_default_module_to_string;
use koin_codegen::model::{Definition, Keyword, Module};
use rstest_bdd_macros::{given, then, when};
use test_helpers::model::{class_at, module_at, scoped_class_at, split_path};
use test_helpers::text::{is_ascending, normalize_scalar, positions};

use super::helpers::{config, output, record, update};
use crate::behaviour::fixtures::CodegenContext;

fn add_to_source(
    codegen_context: &CodegenContext,
    source: &str,
    definition: Definition,
) -> Result<()> {
    update(&codegen_context.sources, "default sources", |mut sources| {
        match sources.iter_mut().find(|module| module.path() == source) {
            Some(module) => module.definitions.push(definition),
            None => sources.push(module_at(source).with_definition(definition)),
        }
        sources
    })
}

#[given("no default sources")]
fn no_sources(codegen_context: &CodegenContext) {
    codegen_context.sources.set(Vec::<Module>::new());
}

#[given("a default source {source} with unscoped class {path}")]
fn source_with_class(codegen_context: &CodegenContext, source: String, path: String) -> Result<()> {
    if codegen_context.sources.is_empty() {
        codegen_context.sources.set(Vec::new());
    }
    add_to_source(
        codegen_context,
        &normalize_scalar(&source),
        class_at(&normalize_scalar(&path)),
    )
}

#[given("the source {source} has class {path} in scope {scope}")]
fn source_with_scoped_class(
    codegen_context: &CodegenContext,
    source: String,
    path: String,
    scope: String,
) -> Result<()> {
    add_to_source(
        codegen_context,
        &normalize_scalar(&source),
        scoped_class_at(&normalize_scalar(&path), &normalize_scalar(&scope)),
    )
}

#[given("the source {source} has class-bound function {path}")]
fn source_with_class_function(
    codegen_context: &CodegenContext,
    source: String,
    path: String,
) -> Result<()> {
    let qualified = normalize_scalar(&path);
    let (package, name) = split_path(&qualified);
    add_to_source(
        codegen_context,
        &normalize_scalar(&source),
        Definition::function(package, name, Keyword::new("single")).member_of_module(),
    )
}

#[when("the default module is generated")]
fn generate(codegen_context: &CodegenContext) -> Result<()> {
    let sources = codegen_context
        .sources
        .get()
        .ok_or_else(|| anyhow!("default sources must be set up first"))?;
    record(
        codegen_context,
        generate_default_module_to_string(&sources, &config(codegen_context)),
    );
    Ok(())
}

#[then("the statements appear in order {paths}")]
fn statements_in_order(codegen_context: &CodegenContext, paths: String) -> Result<()> {
    let text = output(codegen_context)?;
    let calls: Vec<String> = normalize_scalar(&paths)
        .split(',')
        .map(|path| format!("{}()", path.trim()))
        .collect();
    let needles: Vec<&str> = calls.iter().map(String::as_str).collect();
    let found = positions(&text, &needles)
        .ok_or_else(|| anyhow!("not every statement of {needles:?} was emitted"))?;
    ensure!(is_ascending(&found), "statements out of order: {needles:?}");
    Ok(())
}

#[then("the default module opens {count} scope blocks")]
fn scope_block_count(codegen_context: &CodegenContext, count: usize) -> Result<()> {
    let text = output(codegen_context)?;
    let opened = ["\n\t\t\t\tscope(", "\n\t\t\t\tscope<"]
        .iter()
        .map(|opening| text.matches(opening).count())
        .sum::<usize>();
    ensure!(opened == count, "expected {count} scope blocks, found {opened}");
    Ok(())
}

#[then("the default module declares {count} registrations")]
fn registration_count(codegen_context: &CodegenContext, count: usize) -> Result<()> {
    let text = output(codegen_context)?;
    let registered = text.matches("() { ").count();
    ensure!(registered == count, "expected {count} registrations, found {registered}");
    Ok(())
}
