//! Lua adapter for the callback-environment seam.
//!
//! Wraps an `mlua` table (typically a per-object environment table) as a
//! [`CallbackEnvironment`]. Callbacks are plain functions stored in the
//! table by name; each invocation receives a single Lua table built from
//! the trigger's parameter bag:
//!
//! ```lua
//! environment.on_spawn = function(params)
//!     engine_log("spawning " .. params.count .. " enemies")
//! end
//! ```

use mlua::prelude::*;

use super::{CallbackEnvironment, EnvironmentId, ScriptError};
use crate::triggers::{ParameterBag, ParameterValue};

impl IntoLua for ParameterValue {
    fn into_lua(self, lua: &Lua) -> LuaResult<LuaValue> {
        match self {
            ParameterValue::Bool(value) => value.into_lua(lua),
            ParameterValue::Integer(value) => value.into_lua(lua),
            ParameterValue::Scalar(value) => value.into_lua(lua),
            ParameterValue::String(value) => value.into_lua(lua),
        }
    }
}

/// A Lua environment table usable as a trigger callback target.
///
/// Cloning is cheap: both the interpreter handle and the table are
/// reference-counted, and clones report the same [`env_id`](CallbackEnvironment::env_id).
#[derive(Clone)]
pub struct LuaEnvironment {
    lua: Lua,
    table: LuaTable,
}

impl LuaEnvironment {
    /// Wrap an existing environment table.
    pub fn new(lua: Lua, table: LuaTable) -> Self {
        Self { lua, table }
    }

    /// Create a fresh empty environment table on the given interpreter.
    pub fn fresh(lua: &Lua) -> LuaResult<Self> {
        let table = lua.create_table()?;
        Ok(Self {
            lua: lua.clone(),
            table,
        })
    }

    /// The underlying environment table.
    pub fn table(&self) -> &LuaTable {
        &self.table
    }

    fn parameters_table(&self, parameters: &ParameterBag) -> LuaResult<LuaTable> {
        let table = self.lua.create_table()?;
        for (key, value) in parameters.iter() {
            table.set(key.as_str(), value.clone())?;
        }
        Ok(table)
    }
}

impl CallbackEnvironment for LuaEnvironment {
    fn env_id(&self) -> EnvironmentId {
        self.table.to_pointer() as EnvironmentId
    }

    fn invoke(&self, callback: &str, parameters: &ParameterBag) -> Result<(), ScriptError> {
        let function: LuaFunction = self
            .table
            .get(callback)
            .map_err(|err| ScriptError::new(callback, err.to_string()))?;
        let arguments = self
            .parameters_table(parameters)
            .map_err(|err| ScriptError::new(callback, err.to_string()))?;
        function
            .call::<()>(arguments)
            .map_err(|err| ScriptError::new(callback, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_environment_identity() {
        let lua = Lua::new();
        let env = LuaEnvironment::fresh(&lua).unwrap();
        let clone = env.clone();
        assert_eq!(env.env_id(), clone.env_id());
        let other = LuaEnvironment::fresh(&lua).unwrap();
        assert_ne!(env.env_id(), other.env_id());
    }

    #[test]
    fn test_invoke_passes_parameter_bag() {
        let lua = Lua::new();
        let env = LuaEnvironment::fresh(&lua).unwrap();
        env.table()
            .set(
                "on_fire",
                lua.create_function(|lua: &Lua, params: LuaTable| {
                    let count: i64 = params.get("count")?;
                    lua.globals().set("seen_count", count)
                })
                .unwrap(),
            )
            .unwrap();

        let mut bag = ParameterBag::new();
        bag.set("count", 3);
        env.invoke("on_fire", &bag).unwrap();
        assert_eq!(lua.globals().get::<i64>("seen_count").unwrap(), 3);
    }

    #[test]
    fn test_invoke_missing_callback_reports_script_error() {
        let lua = Lua::new();
        let env = LuaEnvironment::fresh(&lua).unwrap();
        let err = env.invoke("absent", &ParameterBag::new()).unwrap_err();
        assert_eq!(err.callback, "absent");
    }
}
