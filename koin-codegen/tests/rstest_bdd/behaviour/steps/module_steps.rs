//! Steps generating declared modules.

use std::num::NonZeroUsize;

use anyhow::{Context as _, Result, anyhow, ensure};
use koin_codegen::model::{Definition, Keyword, Scope};
use koin_codegen::{GeneratorConfig, generate_module_to_string};
use rstest_bdd_macros::{given, then, when};
use test_helpers::model::{class_at, function_at, module_at, split_path};
use test_helpers::text::{
    dispatcher_calls, is_ascending, normalize_scalar, positions, routine_bodies,
};

use super::helpers::{config, output, record, update};
use crate::behaviour::fixtures::CodegenContext;

fn add_definition(codegen_context: &CodegenContext, definition: Definition) -> Result<()> {
    update(&codegen_context.module, "module", |module| {
        module.with_definition(definition)
    })
}

fn field_name(codegen_context: &CodegenContext) -> Result<String> {
    codegen_context
        .module
        .with_ref(koin_codegen::Module::field_name)
        .ok_or_else(|| anyhow!("module must be set up first"))
}

#[given("a module {path} with rows per routine {capacity}")]
fn module_with_capacity(
    codegen_context: &CodegenContext,
    path: String,
    capacity: usize,
) -> Result<()> {
    let rows_per_routine =
        NonZeroUsize::new(capacity).context("rows per routine must be positive")?;
    codegen_context.module.set(module_at(&normalize_scalar(&path)));
    codegen_context
        .config
        .set(GeneratorConfig::default().with_rows_per_routine(rows_per_routine));
    Ok(())
}

#[given("an unscoped function {path}")]
fn unscoped_function(codegen_context: &CodegenContext, path: String) -> Result<()> {
    add_definition(codegen_context, function_at(&normalize_scalar(&path)))
}

#[given("an unscoped class {path}")]
fn unscoped_class(codegen_context: &CodegenContext, path: String) -> Result<()> {
    add_definition(codegen_context, class_at(&normalize_scalar(&path)))
}

#[given("a function {path} in scope {scope}")]
fn scoped_function(codegen_context: &CodegenContext, path: String, scope: String) -> Result<()> {
    let named = Scope::Named(normalize_scalar(&scope));
    add_definition(codegen_context, function_at(&normalize_scalar(&path)).in_scope(named))
}

#[given("a class {path} in scope {scope}")]
fn scoped_class(codegen_context: &CodegenContext, path: String, scope: String) -> Result<()> {
    let named = Scope::Named(normalize_scalar(&scope));
    add_definition(codegen_context, class_at(&normalize_scalar(&path)).in_scope(named))
}

#[given("a class-bound function {path}")]
fn class_bound_function(codegen_context: &CodegenContext, path: String) -> Result<()> {
    let qualified = normalize_scalar(&path);
    let (package, name) = split_path(&qualified);
    add_definition(
        codegen_context,
        Definition::function(package, name, Keyword::new("single")).member_of_module(),
    )
}

#[when("the module is generated")]
fn generate(codegen_context: &CodegenContext) -> Result<()> {
    let module = codegen_context
        .module
        .get()
        .ok_or_else(|| anyhow!("module must be set up first"))?;
    record(
        codegen_context,
        generate_module_to_string(&module, &config(codegen_context)),
    );
    Ok(())
}

#[then("{count} dispatcher calls are emitted")]
fn dispatcher_count(codegen_context: &CodegenContext, count: usize) -> Result<()> {
    let text = output(codegen_context)?;
    let calls = dispatcher_calls(&text, &field_name(codegen_context)?);
    ensure!(calls.len() == count, "expected {count} dispatcher calls, got {calls:?}");
    Ok(())
}

#[then("{count} routines are opened")]
fn routine_count(codegen_context: &CodegenContext, count: usize) -> Result<()> {
    let text = output(codegen_context)?;
    let bodies = routine_bodies(&text, &field_name(codegen_context)?);
    ensure!(bodies.len() == count, "expected {count} routines, got {}", bodies.len());
    Ok(())
}

#[then("routine {index} calls {path}")]
fn routine_holds(codegen_context: &CodegenContext, index: usize, path: String) -> Result<()> {
    let text = output(codegen_context)?;
    let bodies = routine_bodies(&text, &field_name(codegen_context)?);
    let body = bodies
        .get(index)
        .ok_or_else(|| anyhow!("routine {index} was not opened"))?;
    let call = format!("{}()", normalize_scalar(&path));
    ensure!(body.contains(&call), "routine {index} does not call {call}: {body}");
    Ok(())
}

#[then("routine {index} holds the scope block {scope}")]
fn routine_holds_scope(
    codegen_context: &CodegenContext,
    index: usize,
    scope: String,
) -> Result<()> {
    let text = output(codegen_context)?;
    let bodies = routine_bodies(&text, &field_name(codegen_context)?);
    let body = bodies
        .get(index)
        .ok_or_else(|| anyhow!("routine {index} was not opened"))?;
    let opening = format!("named(\"{}\")) {{", normalize_scalar(&scope));
    ensure!(body.contains(&opening), "routine {index} lacks scope {opening}: {body}");
    Ok(())
}

#[then("the module instance is built once before the first dispatcher call")]
fn module_instance_first(codegen_context: &CodegenContext) -> Result<()> {
    let text = output(codegen_context)?;
    let field = field_name(codegen_context)?;
    ensure!(
        text.matches("val moduleInstance = ").count() == 1,
        "module instance must be built exactly once"
    );
    let found = positions(&text, &["val moduleInstance = ", &format!("\t{field}0(")])
        .ok_or_else(|| anyhow!("module instance or dispatcher call missing"))?;
    ensure!(is_ascending(&found), "module instance must precede dispatch");
    Ok(())
}

#[then("the accessor exposes {path} as the module field")]
fn accessor_exposes(codegen_context: &CodegenContext, path: String) -> Result<()> {
    let text = output(codegen_context)?;
    let field = field_name(codegen_context)?;
    let accessor = format!(
        "\npublic val {}.module : org.koin.core.module.Module get() = {field}",
        normalize_scalar(&path)
    );
    ensure!(text.ends_with(&accessor), "accessor missing from:\n{text}");
    Ok(())
}

#[then("generation fails naming {name}")]
fn generation_fails(codegen_context: &CodegenContext, name: String) -> Result<()> {
    let expected = normalize_scalar(&name);
    let failure = codegen_context
        .failure
        .get()
        .ok_or_else(|| anyhow!("generation unexpectedly succeeded"))?;
    ensure!(failure.contains(&expected), "failure does not name {expected}: {failure}");
    Ok(())
}
