use thiserror::Error;

use luagen_core::config::LuagenConfig;
use luagen_core::ir::SdkContext;
use luagen_core::{CodeGenerator, GeneratedFile};

use crate::emitters;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// Lua client code generator.
pub struct LuaClientGenerator;

impl CodeGenerator for LuaClientGenerator {
    type Config = LuagenConfig;
    type Error = EmitError;

    fn generate(
        &self,
        context: &SdkContext,
        config: &LuagenConfig,
    ) -> Result<Vec<GeneratedFile>, EmitError> {
        let module = config.module_name(&context.info.title);
        let base_url = config.base_url.as_deref().unwrap_or("");
        let content = emitters::client::emit_client(context, base_url)?;
        Ok(vec![GeneratedFile {
            path: format!("{module}.lua"),
            content,
        }])
    }
}
