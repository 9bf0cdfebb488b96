//! End-to-end scenarios against a scripted engine.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use forestage::{
    Client, Config, EnvironmentAddress, RendererBackend, WaitRegistration, MARKER_ATTR,
};
use serde_json::json;

/// Test engine that records wait registrations and answers every capability.
#[derive(Default)]
struct ScriptedEngine {
    registrations: Mutex<Vec<WaitRegistration>>,
}

impl RendererBackend for ScriptedEngine {
    fn register_wait(&self, registration: WaitRegistration) -> bool {
        self.registrations.lock().unwrap().push(registration);
        true
    }

    fn onion_address(&self) -> Option<EnvironmentAddress> {
        Some(EnvironmentAddress {
            domain: "example2f7x.onion".into(),
            hostname: "shop.example2f7x.onion".into(),
        })
    }
}

#[test]
fn configure_accumulates_across_calls() {
    let client = Client::with_backend(Arc::new(ScriptedEngine::default()));

    client.configure(
        Config::default()
            .with_status(200)
            .remove_node("nav")
            .export_global("A", json!(1)),
    );
    let merged = client.configure(
        Config::default()
            .with_status(404)
            .remove_node("footer")
            .export_global("B", json!(2)),
    );

    assert_eq!(merged.status, Some(404));
    assert_eq!(merged.remove_nodes, vec!["nav", "footer"]);
    assert_eq!(merged.globals["A"], json!(1));
    assert_eq!(merged.globals["B"], json!(2));
    assert_eq!(client.config(), merged);
}

#[test]
fn wait_registers_marker_timeout_and_handle_with_the_engine() {
    let engine = Arc::new(ScriptedEngine::default());
    let client = Client::with_backend(engine.clone());

    let token = client.wait_with_timeout(Duration::from_millis(5000));
    assert!(!token.is_inert());
    assert_eq!(client.pending_waits(), 1);

    let registrations = engine.registrations.lock().unwrap();
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].marker, token.marker());
    assert_eq!(registrations[0].timeout_hint, Duration::from_millis(5000));

    // Rendered-element props carry the fixed attribute contract.
    assert_eq!(token.props()[MARKER_ATTR], token.marker());
}

#[test]
fn wait_race_resolves_exactly_once() {
    let engine = Arc::new(ScriptedEngine::default());
    let client = Client::with_backend(engine.clone());

    let token = client.wait_with_timeout(Duration::from_millis(5000));
    let engine_handle = engine.registrations.lock().unwrap()[0].handle.clone();

    // t=10ms: explicit resolution wins.
    assert!(token.resolve());
    // t=20ms: DOM-marker match for the same token — silent no-op.
    assert!(!client.resolve_marker(token.marker()));
    // Later still: the engine's timeout fires — also a no-op.
    assert!(!engine_handle.resolve());

    assert!(token.is_resolved());
    assert_eq!(client.pending_waits(), 0);
}

#[test]
fn engine_timeout_is_a_designed_fallback_not_an_error() {
    let engine = Arc::new(ScriptedEngine::default());
    let client = Client::with_backend(engine.clone());

    let token = client.wait();
    let engine_handle = engine.registrations.lock().unwrap()[0].handle.clone();

    // The marker never appears; the engine gives up. Nothing surfaces to
    // the page, the token just transitions.
    assert!(engine_handle.resolve());
    assert!(token.is_resolved());
    assert!(!token.resolve());
    assert_eq!(client.pending_waits(), 0);
}

#[test]
fn render_gate_waits_for_every_pending_token() {
    let engine = Arc::new(ScriptedEngine::default());
    let client = Client::with_backend(engine.clone());

    let first = client.wait();
    let second = client.wait();
    assert_eq!(client.pending_waits(), 2);

    first.resolve();
    assert_eq!(client.pending_waits(), 1);

    assert!(client.resolve_marker(second.marker()));
    assert_eq!(client.pending_waits(), 0);
}

#[test]
fn environment_address_comes_from_the_engine() {
    let client = Client::with_backend(Arc::new(ScriptedEngine::default()));
    let addr = client.environment_address().unwrap();
    assert_eq!(addr.domain, "example2f7x.onion");
    assert_eq!(addr.hostname, "shop.example2f7x.onion");
}

#[test]
fn disabling_gates_every_subsequent_operation() {
    let engine = Arc::new(ScriptedEngine::default());
    let client = Client::with_backend(engine.clone());

    client.configure(Config::default().with_disabled(true));
    assert!(!client.is_enabled());
    assert!(!client.is_available());

    let patch = Config::default().with_status(404);
    assert_eq!(client.configure(patch.clone()), patch);
    assert_eq!(client.config().status, None);

    assert!(client.wait().is_inert());
    assert!(client.environment_address().is_none());
}
