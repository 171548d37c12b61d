//! Dispatch over the active alternative of a oneof.
//!
//! A oneof `body` of message `Post` is held as `Option<post::Body>`, where
//! `post::Body` has one variant per alternative. Callers guard the unset
//! state themselves; this module only emits the `match` over a set value.

use super::context::{CodeWriter, EmitContext, Operand};
use super::naming::{field_ident, to_camel_case, to_pascal_case, to_snake_case};
use protodump_core::{Field, GeneratorResult, MessageType, Oneof};

/// Path of the oneof enum as seen from the message's own module.
///
/// The module name is escaped like a field identifier, so `Type` and
/// `Crate` land in `r#type` and `crate_`.
pub fn enum_path(message: &MessageType, oneof: &Oneof) -> String {
    format!(
        "{}::{}",
        field_ident(&to_snake_case(&message.name)),
        to_pascal_case(&oneof.name)
    )
}

/// Enum variant holding `alternative`.
pub fn variant_name(alternative: &Field) -> String {
    to_pascal_case(&alternative.name)
}

/// Key under which the oneof appears in JSON output.
pub fn json_key(oneof: &Oneof) -> String {
    to_camel_case(&oneof.name)
}

/// Opening line of the guard binding the active value, if any.
pub fn guard(ctx: &EmitContext<'_>, oneof: &Oneof) -> String {
    format!(
        "if let Some({}) = &{} {{",
        ctx.locals.selected,
        ctx.member(&field_ident(&oneof.name))
    )
}

/// Emit a `match` over the active alternative of `oneof`.
///
/// `arm` is called once per alternative, in declaration order, with the
/// alternative and the operand bound to its value. Every arm is built before
/// any text is written, so an unsupported alternative emits nothing. The
/// enum is closed, so no fallback arm is generated.
pub fn emit_oneof_dispatch<F>(
    ctx: &EmitContext<'_>,
    message: &MessageType,
    oneof: &Oneof,
    mut arm: F,
) -> GeneratorResult<CodeWriter>
where
    F: FnMut(&Field, &Operand) -> GeneratorResult<CodeWriter>,
{
    let bound = Operand::Borrowed(ctx.locals.value.to_string());
    let arms = message
        .alternatives(oneof)
        .map(|alternative| Ok((alternative, arm(alternative, &bound)?)))
        .collect::<GeneratorResult<Vec<_>>>()?;

    let path = enum_path(message, oneof);
    let mut w = CodeWriter::new();
    w.open(&format!("match {} {{", ctx.locals.selected));
    for (alternative, body) in arms {
        w.open(&format!(
            "{path}::{}({}) => {{",
            variant_name(alternative),
            bound.expr()
        ));
        w.append(body);
        w.close("}");
    }
    w.close("}");

    Ok(w)
}
