//! Template predicate helpers for conditional rendering.
//!
//! `getKeys` is a block helper: `{{#getKeys labels}}…{{else}}…{{/getKeys}}`
//! renders the main block when `labels` has at least one key.  `hasKeys`
//! returns the same test as a boolean, e.g. `{{#if (hasKeys labels)}}`.
//! A missing or `null` argument counts as an empty mapping.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
    Renderable, ScopedJson,
};
use serde_json::Value;

use crate::constants::{HELPER_GET_KEYS, HELPER_HAS_KEYS};

/// Number of keys `Object.keys` would report for `value`.
///
/// Objects count their fields, arrays their elements and strings their
/// UTF-16 code units; `null`, booleans and numbers have none.
pub fn key_count(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        Value::String(s) => s.encode_utf16().count(),
        Value::Null | Value::Bool(_) | Value::Number(_) => 0,
    }
}

pub fn has_keys(value: Option<&Value>) -> bool {
    value.map_or(false, |v| key_count(v) > 0)
}

fn first_param_has_keys(h: &Helper<'_>) -> bool {
    has_keys(h.param(0).map(|p| p.value()))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetKeysHelper;

impl HelperDef for GetKeysHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let branch = if first_param_has_keys(h) {
            h.template()
        } else {
            h.inverse()
        };
        match branch {
            Some(t) => t.render(r, ctx, rc, out),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HasKeysHelper;

impl HelperDef for HasKeysHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        Ok(ScopedJson::Derived(Value::Bool(first_param_has_keys(h))))
    }
}

/// Register `getKeys` and `hasKeys` in `registry`.
pub fn register_helpers(registry: &mut Handlebars<'_>) {
    registry.register_helper(HELPER_GET_KEYS, Box::new(GetKeysHelper));
    registry.register_helper(HELPER_HAS_KEYS, Box::new(HasKeysHelper));
}
