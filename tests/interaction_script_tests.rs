//! Behavior tests for the embedded interaction script.
//!
//! The script runs under `node` against a small DOM stand-in that supports
//! the calls it makes: attribute selectors, `classList`, `contains`,
//! `closest`, `remove` and click bubbling up to `document`. The script is
//! loaded twice, as it would be when two pages' worth of markup include
//! it. Tests are skipped when `node` is not installed.

use edu_admin_views::views::script::INTERACTION_SCRIPT;
use std::process::Command;
use tempfile::TempDir;

const DOM_FIXTURE: &str = r##"
"use strict";
const assert = require("assert");

function El(attrs, children) {
  this.attributes = Object.assign({}, attrs || {});
  this.children = [];
  this.parent = null;
  this.listeners = {};
  this.type = this.attributes.type;
  const classes = new Set((this.attributes["class"] || "").split(/\s+/).filter(Boolean));
  this.classList = {
    contains: (c) => classes.has(c),
    add: (c) => classes.add(c),
    remove: (c) => classes.delete(c),
    toggle: (c, force) => {
      const on = force === undefined ? !classes.has(c) : force;
      if (on) classes.add(c); else classes.delete(c);
      return on;
    },
  };
  (children || []).forEach((child) => this.append(child));
}
El.prototype.append = function (child) { child.parent = this; this.children.push(child); };
El.prototype.getAttribute = function (name) {
  return name in this.attributes ? this.attributes[name] : null;
};
El.prototype.setAttribute = function (name, value) { this.attributes[name] = String(value); };
El.prototype.matches = function (selector) {
  const m = /^\[([\w-]+)(?:="([^"]*)")?\]$/.exec(selector);
  if (!m) throw new Error("unsupported selector " + selector);
  if (!(m[1] in this.attributes)) return false;
  return m[2] === undefined || this.attributes[m[1]] === m[2];
};
El.prototype.querySelectorAll = function (selector) {
  const out = [];
  const walk = (node) => node.children.forEach((child) => {
    if (child.matches(selector)) out.push(child);
    walk(child);
  });
  walk(this);
  return out;
};
El.prototype.querySelector = function (selector) { return this.querySelectorAll(selector)[0] || null; };
El.prototype.contains = function (node) {
  for (let n = node; n; n = n.parent) if (n === this) return true;
  return false;
};
El.prototype.closest = function (selector) {
  for (let n = this; n; n = n.parent) if (n.matches(selector)) return n;
  return null;
};
El.prototype.remove = function () {
  if (!this.parent) return;
  this.parent.children = this.parent.children.filter((c) => c !== this);
  this.parent = null;
};
function addListener(target, type, fn) { (target.listeners[type] = target.listeners[type] || []).push(fn); }
function removeListener(target, type, fn) {
  target.listeners[type] = (target.listeners[type] || []).filter((f) => f !== fn);
}
El.prototype.addEventListener = function (type, fn) { addListener(this, type, fn); };
El.prototype.removeEventListener = function (type, fn) { removeListener(this, type, fn); };

const bellIcon = new El({ class: "fas fa-bell" });
const bellToggle = new El({ "data-dropdown-toggle": "", "aria-expanded": "false" }, [bellIcon]);
const notificationLink = new El({ href: "/admin/notifications/1/read" });
const notificationsMenu = new El({ "data-dropdown-menu": "", class: "hidden" }, [notificationLink]);
const header = new El({ "data-component": "admin-header" }, [
  new El({ "data-dropdown": "notifications" }, [bellToggle, notificationsMenu]),
]);

const passwordInput = new El({ "data-password-input": "", type: "password" });
const passwordIcon = new El({ "data-password-icon": "", class: "fas fa-eye" });
const passwordToggle = new El({ "data-password-toggle": "", "aria-pressed": "false" }, [passwordIcon]);
const dismissButton = new El({ "data-dismiss": "" });
const expiredBanner = new El({ "data-session-expired": "", "data-dismissable": "" }, [dismissButton]);
const login = new El({ "data-component": "login" }, [
  expiredBanner,
  new El({ "data-password-field": "" }, [passwordInput, passwordToggle]),
]);

const elsewhere = new El({ class: "page-body" });
const body = new El({}, [header, login, elsewhere]);

const documentListeners = { listeners: {} };
globalThis.window = globalThis;
globalThis.document = {
  readyState: "complete",
  listeners: documentListeners.listeners,
  addEventListener: (type, fn) => addListener(documentListeners, type, fn),
  removeEventListener: (type, fn) => removeListener(documentListeners, type, fn),
  querySelectorAll: (selector) => body.querySelectorAll(selector),
};

function click(target) {
  const event = { type: "click", target: target, preventDefault: () => {} };
  for (let n = target; n; n = n.parent) (n.listeners.click || []).slice().forEach((fn) => fn(event));
  (documentListeners.listeners.click || []).slice().forEach((fn) => fn(event));
}
function isOpen(menu) { return !menu.classList.contains("hidden"); }
"##;

fn node_available() -> bool {
    Command::new("node")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Run `scenario` after the fixture and two copies of the script.
/// Returns `None` when node is unavailable.
fn run_scenario(scenario: &str) -> Option<String> {
    if !node_available() {
        eprintln!("node not found, skipping interaction script test");
        return None;
    }
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenario.js");
    let source = format!(
        "{DOM_FIXTURE}\n{INTERACTION_SCRIPT}\n{INTERACTION_SCRIPT}\n{scenario}\nconsole.log(\"done\");\n"
    );
    std::fs::write(&path, source).unwrap();

    let out = Command::new("node").arg(&path).output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    assert!(
        out.status.success(),
        "scenario failed:\n{}\n{}",
        stdout,
        String::from_utf8_lossy(&out.stderr)
    );
    Some(stdout)
}

#[test]
fn password_toggle_twice_restores_masked_state() {
    let Some(stdout) = run_scenario(
        r#"
assert.strictEqual(passwordInput.type, "password");
click(passwordToggle);
assert.strictEqual(passwordInput.type, "text");
assert.ok(passwordIcon.classList.contains("fa-eye-slash"));
assert.ok(!passwordIcon.classList.contains("fa-eye"));
assert.strictEqual(passwordToggle.getAttribute("aria-pressed"), "true");
click(passwordIcon);
assert.strictEqual(passwordInput.type, "password");
assert.ok(passwordIcon.classList.contains("fa-eye"));
assert.ok(!passwordIcon.classList.contains("fa-eye-slash"));
assert.strictEqual(passwordToggle.getAttribute("aria-pressed"), "false");
"#,
    ) else {
        return;
    };
    assert!(stdout.contains("done"));
}

#[test]
fn outside_click_closes_menu_and_inside_click_does_not() {
    let Some(stdout) = run_scenario(
        r#"
assert.ok(!isOpen(notificationsMenu));
click(bellIcon);
assert.ok(isOpen(notificationsMenu));
assert.strictEqual(bellToggle.getAttribute("aria-expanded"), "true");
click(notificationLink);
assert.ok(isOpen(notificationsMenu));
click(elsewhere);
assert.ok(!isOpen(notificationsMenu));
assert.strictEqual(bellToggle.getAttribute("aria-expanded"), "false");
"#,
    ) else {
        return;
    };
    assert!(stdout.contains("done"));
}

#[test]
fn toggle_closes_open_menu() {
    let Some(stdout) = run_scenario(
        r#"
click(bellToggle);
assert.ok(isOpen(notificationsMenu));
click(bellToggle);
assert.ok(!isOpen(notificationsMenu));
"#,
    ) else {
        return;
    };
    assert!(stdout.contains("done"));
}

#[test]
fn dismiss_removes_expired_banner() {
    let Some(stdout) = run_scenario(
        r#"
assert.strictEqual(login.querySelectorAll("[data-session-expired]").length, 1);
click(dismissButton);
assert.strictEqual(login.querySelectorAll("[data-session-expired]").length, 0);
"#,
    ) else {
        return;
    };
    assert!(stdout.contains("done"));
}

#[test]
fn unmount_detaches_handlers() {
    let Some(stdout) = run_scenario(
        r#"
window.EduAdmin.unmount(header);
click(bellToggle);
assert.ok(!isOpen(notificationsMenu));
window.EduAdmin.mount(header);
click(bellToggle);
assert.ok(isOpen(notificationsMenu));
"#,
    ) else {
        return;
    };
    assert!(stdout.contains("done"));
}
