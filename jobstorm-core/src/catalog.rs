//! Built-in job scripts
//!
//! Stress clients pick one of these uniformly at random. The list is fixed;
//! it is not influenced by any shared state between clients.

use rand::Rng;

/// Interpreter invocations a stress client may submit
pub const BUILTIN_SCRIPTS: [&str; 4] = [
    r#"python -c "print('Hello World')""#,
    r#"python -c "import time; time.sleep(2); print('Done')""#,
    r#"lua -e "print('Lua script running')""#,
    r#"python -c "for i in range(3): print(f'Line {i}')""#,
];

/// Pick a script from the built-in catalog
pub fn pick_script<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    BUILTIN_SCRIPTS[rng.gen_range(0..BUILTIN_SCRIPTS.len())]
}

/// Whether `script` is one of the built-in entries
pub fn is_builtin(script: &str) -> bool {
    BUILTIN_SCRIPTS.contains(&script)
}
