//! Shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use hash_router::dispatch::HandlerRegistry;
use hash_router::routing::RouteParams;

/// Handler invocations as `(handler name, params)`.
pub type Calls = Arc<Mutex<Vec<(String, RouteParams)>>>;

/// A registry whose handlers record each call and render `name:params`.
pub fn recording_registry(names: &[&str]) -> (HandlerRegistry<Option<String>>, Calls) {
    let calls = Calls::default();
    let mut registry = HandlerRegistry::new();

    for name in names {
        let calls = calls.clone();
        let label = name.to_string();
        registry.register(*name, move |params: &RouteParams| {
            calls.lock().unwrap().push((label.clone(), params.clone()));
            let rendered: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            Some(format!("{}:{}", label, rendered.join(",")))
        });
    }

    (registry, calls)
}

/// Handler names in call order.
#[allow(dead_code)]
pub fn called_names(calls: &Calls) -> Vec<String> {
    calls.lock().unwrap().iter().map(|(name, _)| name.clone()).collect()
}

/// Write `contents` to a fresh file under the system temp dir.
#[allow(dead_code)]
pub fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hash-router-{}-{}", std::process::id(), name));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("routes.toml");
    std::fs::write(&path, contents).unwrap();
    path
}
