//! Event-driven routing loop.
//!
//! # Responsibilities
//! - Route the current URL once at startup
//! - Route every hash change, in order
//! - Render handler output into the content target
//! - Swap routes when a reloaded config arrives
//! - Stop on shutdown, dropping the hash-change subscription
//!
//! # Design Decisions
//! - One task owns the router, so matches never overlap
//! - Initial routing is synchronous; there is no startup delay
//! - Queued hash changes are drained before shutdown is observed
//! - Callers that let other tasks navigate subscribe first and hand the
//!   subscription to `run_subscribed`, so no early change is lost

use tokio::sync::{broadcast, mpsc};

use crate::config::RouterConfig;
use crate::dispatch::{Handler, HandlerRegistry, NamedRouter};
use crate::driver::location::{HashChanges, HashLocation};
use crate::driver::target::ContentTarget;
use crate::error::RouterResult;

/// A handler that may produce content for the target.
pub type Controller = Handler<Option<String>>;

/// Called after every routing attempt with the URL and whether it matched.
pub type RouteCallback = Box<dyn FnMut(&str, bool) + Send>;

/// Called with each reloaded config before its routes are installed.
pub type ReloadHook = Box<dyn FnMut(&RouterConfig, &mut HandlerRegistry<Option<String>>) + Send>;

/// Router state: routes, content target and callback.
pub struct HashDriver {
    router: NamedRouter<Option<String>>,
    target: Option<Box<dyn ContentTarget>>,
    on_route: Option<RouteCallback>,
    on_reload: Option<ReloadHook>,
}

impl HashDriver {
    pub fn new(router: NamedRouter<Option<String>>) -> Self {
        Self {
            router,
            target: None,
            on_route: None,
            on_reload: None,
        }
    }

    pub fn with_target(mut self, target: impl ContentTarget + 'static) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str, bool) + Send + 'static,
    {
        self.on_route = Some(Box::new(callback));
        self
    }

    /// Let reloads register handlers for names the new routes introduce.
    pub fn with_reload_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&RouterConfig, &mut HandlerRegistry<Option<String>>) + Send + 'static,
    {
        self.on_reload = Some(Box::new(hook));
        self
    }

    /// Replace the content target. `None` makes rendering a no-op.
    pub fn set_target(&mut self, target: Option<Box<dyn ContentTarget>>) {
        self.target = target;
    }

    pub fn router(&self) -> &NamedRouter<Option<String>> {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut NamedRouter<Option<String>> {
        &mut self.router
    }

    /// Send content to the target, if there is one.
    pub fn render(&mut self, content: &str) {
        if let Some(target) = self.target.as_mut() {
            target.set_content(content);
        }
    }

    /// Route a single URL. Returns whether a handler ran.
    pub fn handle(&mut self, url: &str) -> bool {
        let outcome = self.router.dispatch(url);
        let matched = outcome.is_some();

        if let Some(Some(content)) = outcome {
            self.render(&content);
        }
        if !matched {
            tracing::debug!(%url, "no route for url");
        }
        if let Some(callback) = self.on_route.as_mut() {
            callback(url, matched);
        }
        matched
    }

    /// Replace the routes with those of a reloaded config.
    pub fn reload(&mut self, config: &RouterConfig) {
        if let Some(hook) = self.on_reload.as_mut() {
            hook(config, self.router.registry_mut());
        }
        self.router.set_routes(config.route_pairs());
        tracing::info!(routes = config.routes.len(), "Routes reloaded");
    }

    /// Run until shutdown.
    ///
    /// Subscribes to `location`, routes its current URL, then routes each
    /// change. Returns the driver so its state can be inspected or reused.
    pub async fn run(
        self,
        location: &HashLocation,
        reloads: Option<mpsc::UnboundedReceiver<RouterConfig>>,
        shutdown: broadcast::Receiver<()>,
    ) -> RouterResult<Self> {
        let (initial, changes) = location.subscribe()?;
        Ok(self.run_subscribed(initial, changes, reloads, shutdown).await)
    }

    /// Run until shutdown on a subscription taken with
    /// [`HashLocation::subscribe`].
    ///
    /// `initial` is routed first, then every change queued on `changes`,
    /// including those made before this future is first polled.
    pub async fn run_subscribed(
        mut self,
        initial: String,
        mut changes: HashChanges,
        mut reloads: Option<mpsc::UnboundedReceiver<RouterConfig>>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Self {
        tracing::info!(url = %initial, "Routing initial url");
        self.handle(&initial);

        loop {
            tokio::select! {
                biased;

                change = changes.recv() => match change {
                    Some(url) => {
                        self.handle(&url);
                    }
                    None => break,
                },
                Some(config) = next_reload(&mut reloads) => self.reload(&config),
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received, stopping driver");
                    break;
                }
            }
        }

        self
    }
}

async fn next_reload(
    reloads: &mut Option<mpsc::UnboundedReceiver<RouterConfig>>,
) -> Option<RouterConfig> {
    match reloads {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::HandlerRegistry;
    use crate::driver::target::MemoryTarget;
    use crate::routing::RouteParams;

    fn driver() -> HashDriver {
        let registry = HandlerRegistry::new()
            .with("home", |_: &RouteParams| Some("home".to_string()))
            .with("user", |p: &RouteParams| {
                Some(format!("user {}", p.get("id").unwrap_or_default()))
            })
            .with("silent", |_: &RouteParams| None);
        HashDriver::new(NamedRouter::new(
            [("", "home"), ("users/{id}", "user"), ("quiet", "silent")],
            registry,
        ))
    }

    #[test]
    fn test_handle_renders_into_target() {
        let target = MemoryTarget::new();
        let mut driver = driver().with_target(target.clone());

        assert!(driver.handle("#/users/3"));
        assert!(driver.handle("#/quiet"));
        assert!(!driver.handle("#/nowhere"));

        assert_eq!(target.history(), vec!["user 3"]);
    }

    #[test]
    fn test_render_without_target_is_noop() {
        let mut driver = driver();
        driver.render("ignored");
        assert!(driver.handle("#/"));
    }

    #[test]
    fn test_callback_sees_every_attempt() {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut driver = driver().with_callback(move |url, matched| {
            sink.lock().unwrap().push((url.to_string(), matched));
        });

        driver.handle("#/");
        driver.handle("#/missing");

        assert_eq!(
            *seen.lock().unwrap(),
            vec![("#/".to_string(), true), ("#/missing".to_string(), false)]
        );
    }

    #[test]
    fn test_reload_replaces_routes() {
        let mut driver = driver();
        let config: RouterConfig = toml::from_str(
            r#"
            [[routes]]
            pattern = "people/{id}"
            handler = "user"
            "#,
        )
        .unwrap();

        driver.reload(&config);
        assert!(driver.handle("#/people/1"));
        assert!(!driver.handle("#/users/1"));
    }

    #[test]
    fn test_reload_hook_registers_new_handlers() {
        let target = MemoryTarget::new();
        let mut driver = driver()
            .with_target(target.clone())
            .with_reload_hook(|config, registry| {
                for route in &config.routes {
                    if !registry.contains(&route.handler) {
                        let name = route.handler.clone();
                        registry.register(route.handler.clone(), move |_: &RouteParams| {
                            Some(name.clone())
                        });
                    }
                }
            });
        let config: RouterConfig = toml::from_str(
            r#"
            [[routes]]
            pattern = "help"
            handler = "help"

            [[routes]]
            pattern = "users/{id}"
            handler = "user"
            "#,
        )
        .unwrap();

        driver.reload(&config);
        assert!(driver.handle("#/help"));
        assert!(driver.handle("#/users/4"));
        assert_eq!(target.history(), vec!["help", "user 4"]);
        assert_eq!(driver.router().registry().len(), 4);
    }
}
