use minijinja::{Environment, Value, context};

use luagen_core::ir::{IrOperation, IrRequestBody, SdkContext};

use crate::literal::to_lua;

/// Emit the Lua client module for a render-context.
pub fn emit_client(ctx: &SdkContext, base_url: &str) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template("client.lua.j2", include_str!("../../templates/client.lua.j2"))?;
    let tmpl = env.get_template("client.lua.j2")?;

    let operations: Vec<Value> = ctx.operations.iter().map(operation_context).collect();
    let request_bodies: Vec<Value> = ctx
        .request_bodies
        .iter()
        .filter_map(request_body_context)
        .collect();

    tmpl.render(context! {
        title => ctx.info.title.clone(),
        version => ctx.info.version.clone(),
        description => ctx.info.description.clone(),
        base_url => base_url,
        operations => operations,
        request_bodies => request_bodies,
    })
}

fn operation_context(op: &IrOperation) -> Value {
    let body_literal = op.request_body.as_ref().map(|rb| to_lua(&rb.example));
    context! {
        id => op.id.clone(),
        method => op.method.as_str(),
        path => op.path.clone(),
        description => op.description.clone(),
        parameters => Value::from_serialize(&op.parameters),
        security => Value::from_serialize(&op.security),
        body_literal => body_literal,
    }
}

/// Only named component bodies land in the examples table; inline bodies are
/// already embedded in their operation.
fn request_body_context(rb: &IrRequestBody) -> Option<Value> {
    let id = rb.id.as_ref()?;
    Some(context! {
        id => id.clone(),
        description => rb.description.clone(),
        literal => to_lua(&rb.example),
    })
}
