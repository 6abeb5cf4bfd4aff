//! Rhai engine wrapper with script caching

use super::modules::register_all_modules;
use crate::config::SugarConfig;
use crate::error::{Result, SugarError};
use crate::random::SharedRng;
use rhai::{Dynamic, Engine, FuncArgs, Position, Scope, AST};
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

fn located(file: &str, position: Position, error: impl Display) -> SugarError {
    SugarError::Script(format!(
        "{}:{}:{} - {}",
        file,
        position.line().unwrap_or(0),
        position.position().unwrap_or(0),
        error
    ))
}

/// Script engine with the sugar modules registered and a compiled-script
/// cache keyed by script name
pub struct ScriptEngine {
    /// The Rhai engine instance
    pub engine: Arc<Engine>,
    cache: Arc<RwLock<HashMap<String, AST>>>,
    config: SugarConfig,
    rng: SharedRng,
}

impl ScriptEngine {
    /// Create a new script engine with default configuration
    pub fn new() -> Self {
        Self::with_config(SugarConfig::default())
    }

    /// Create a new script engine with custom configuration
    pub fn with_config(config: SugarConfig) -> Self {
        let mut engine = Engine::new();

        let limits = &config.limits;
        engine.set_max_expr_depths(limits.max_expr_depth, limits.max_expr_depth);
        engine.set_max_call_levels(limits.max_call_levels);
        engine.set_max_operations(limits.max_operations);
        engine.set_max_string_size(limits.max_string_size);
        engine.set_max_array_size(limits.max_array_size);
        engine.set_max_map_size(limits.max_map_size);

        engine.disable_symbol("eval");

        engine.on_print(|text| info!(target: "script", "{text}"));
        engine.on_debug(|text, source, position| {
            debug!(target: "script", source = ?source, position = %position, "{text}");
        });

        let rng = SharedRng::from_optional_seed(config.rng_seed);
        register_all_modules(&mut engine, &rng);

        Self {
            engine: Arc::new(engine),
            cache: Arc::new(RwLock::new(HashMap::new())),
            config,
            rng,
        }
    }

    /// Generator shared with every random function the scripts can call
    pub fn rng(&self) -> &SharedRng {
        &self.rng
    }

    pub fn config(&self) -> &SugarConfig {
        &self.config
    }

    /// Get a mutable reference to the engine for extra registrations.
    /// Only available before the engine handle has been cloned.
    pub fn engine_mut(&mut self) -> Option<&mut Engine> {
        Arc::get_mut(&mut self.engine)
    }

    /// Load and compile a script by name from the configured scripts directory
    pub fn load_script_by_name(&self, script_name: &str) -> Result<()> {
        let script_path = self.config.script_path(script_name)?;
        self.load_script(script_name, &script_path)
    }

    /// Load and compile a script from a file path
    pub fn load_script(&self, script_name: &str, script_path: &Path) -> Result<()> {
        debug!(script_name = script_name, path = ?script_path, "Loading script");

        if self.is_loaded(script_name) {
            debug!(script_name = script_name, "Script already cached");
            return Ok(());
        }

        let script_content = std::fs::read_to_string(script_path)
            .map_err(|e| SugarError::io(script_path, e))?;

        let ast = self
            .engine
            .compile(&script_content)
            .map_err(|e| located(&script_path.display().to_string(), e.position(), &e))?;

        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(script_name.to_string(), ast);

        Ok(())
    }

    /// Load a script by name if needed and evaluate its top level
    pub fn run_script(&self, script_name: &str) -> Result<Dynamic> {
        let mut scope = Scope::new();
        self.run_script_with_scope(script_name, &mut scope)
    }

    /// Like [`ScriptEngine::run_script`], keeping top-level variables in `scope`
    pub fn run_script_with_scope(&self, script_name: &str, scope: &mut Scope) -> Result<Dynamic> {
        let ast = self.cached_ast(script_name)?;
        debug!(script_name = script_name, "Running script");
        self.engine
            .eval_ast_with_scope::<Dynamic>(scope, &ast)
            .map_err(|e| located(script_name, e.position(), &e))
    }

    /// Call a function defined in a script
    pub fn call_fn<T>(
        &self,
        script_name: &str,
        scope: &mut Scope,
        fn_name: &str,
        args: impl FuncArgs,
    ) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let ast = self.cached_ast(script_name)?;
        self.engine
            .call_fn::<T>(scope, &ast, fn_name, args)
            .map_err(|e| located(script_name, e.position(), &e))
    }

    /// Evaluate a one-off snippet without caching it
    pub fn eval<T>(&self, source: &str) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.engine
            .eval::<T>(source)
            .map_err(|e| located("<eval>", e.position(), &e))
    }

    fn cached_ast(&self, script_name: &str) -> Result<AST> {
        self.load_script_by_name(script_name)?;
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(script_name)
            .cloned()
            .ok_or_else(|| SugarError::Script(format!("{script_name}: script not loaded")))
    }

    /// Check if a script is loaded in the cache
    pub fn is_loaded(&self, script_name: &str) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(script_name)
    }

    /// Clear the script cache
    pub fn clear_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Get the number of cached scripts
    pub fn cache_size(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for ScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScriptLimits;
    use std::fs;
    use std::path::PathBuf;

    fn engine_with_scripts(scripts: &[(&str, &str)]) -> (tempfile::TempDir, ScriptEngine) {
        let dir = tempfile::tempdir().unwrap();
        let scripts_dir = dir.path().join("scripts");
        fs::create_dir_all(&scripts_dir).unwrap();
        for (name, source) in scripts {
            fs::write(scripts_dir.join(format!("{name}.rhai")), source).unwrap();
        }

        let config = SugarConfig {
            asset_root: dir.path().to_path_buf(),
            rng_seed: Some(99),
            ..Default::default()
        };
        (dir, ScriptEngine::with_config(config))
    }

    #[test]
    fn test_script_engine_creation() {
        let engine = ScriptEngine::new();
        assert_eq!(engine.cache_size(), 0);
    }

    #[test]
    fn test_script_loading_is_cached() {
        let (_dir, engine) = engine_with_scripts(&[("hello", "40 + 2")]);

        engine.load_script_by_name("hello").unwrap();
        assert!(engine.is_loaded("hello"));
        engine.load_script_by_name("hello").unwrap();
        assert_eq!(engine.cache_size(), 1);

        engine.clear_cache();
        assert_eq!(engine.cache_size(), 0);
    }

    #[test]
    fn test_run_script_uses_sugar_modules() {
        let (_dir, engine) = engine_with_scripts(&[(
            "loot",
            r#"
                let table = [#{ item: "gold", weight: 1 }, #{ item: "junk", weight: 0 }];
                table.pick_weighted(|entry| entry.weight).item
            "#,
        )]);

        let result = engine.run_script("loot").unwrap();
        assert_eq!(result.into_string().unwrap(), "gold");
    }

    #[test]
    fn test_call_fn() {
        let (_dir, engine) = engine_with_scripts(&[(
            "clamp",
            "fn clamp_health(value) { math::clamp(value, 0.0, 100.0) }",
        )]);

        let mut scope = Scope::new();
        let result: f64 = engine
            .call_fn("clamp", &mut scope, "clamp_health", (250.0_f64,))
            .unwrap();
        assert_eq!(result, 100.0);
    }

    #[test]
    fn test_call_fn_and_eval_return_registered_types() {
        let (_dir, engine) = engine_with_scripts(&[(
            "lift",
            "fn lift(v) { v + Vec3::create(0.0, 1.0, 0.0) }",
        )]);

        let mut scope = Scope::new();
        let result: glam::Vec3 = engine
            .call_fn("lift", &mut scope, "lift", (glam::Vec3::new(1.0, 0.0, 2.0),))
            .unwrap();
        assert_eq!(result, glam::Vec3::new(1.0, 1.0, 2.0));

        let result: glam::Vec2 = engine.eval("Vec2::create(3.0, 4.0)").unwrap();
        assert_eq!(result, glam::Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_compile_error_reports_position() {
        let (dir, engine) = engine_with_scripts(&[("broken", "let x = ;")]);

        let err = engine.load_script_by_name("broken").unwrap_err();
        let message = err.to_string();
        let expected_path: PathBuf = dir.path().join("scripts").join("broken.rhai");
        assert!(message.contains(&expected_path.display().to_string()));
        assert!(message.contains(":1:"));
        assert!(!engine.is_loaded("broken"));
    }

    #[test]
    fn test_missing_script_and_bad_name() {
        let (_dir, engine) = engine_with_scripts(&[]);

        assert!(matches!(
            engine.run_script("absent"),
            Err(SugarError::Io { .. })
        ));
        assert!(matches!(
            engine.run_script("../absent"),
            Err(SugarError::InvalidName(_))
        ));
    }

    #[test]
    fn test_limits_stop_runaway_scripts() {
        let config = SugarConfig {
            limits: ScriptLimits {
                max_operations: 1_000,
                ..Default::default()
            },
            ..Default::default()
        };
        let engine = ScriptEngine::with_config(config);

        let result = engine.eval::<Dynamic>("let i = 0; loop { i += 1; }");
        assert!(matches!(result, Err(SugarError::Script(_))));
    }

    #[test]
    fn test_eval_is_disabled() {
        let engine = ScriptEngine::new();
        assert!(engine.eval::<Dynamic>(r#"eval("1 + 1")"#).is_err());
    }
}
