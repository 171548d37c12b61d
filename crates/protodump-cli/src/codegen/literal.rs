//! Emission of the literal dump method.
//!
//! Each set field renders as one `"<indent><name>: <value>,\n"` line. Nested
//! messages open a `Type{` block under the field label and render their own
//! fields one indent unit deeper.

use super::context::{CodeWriter, EmitContext, Operand};
use super::naming::field_ident;
use super::oneof;
use super::types;
use protodump_core::{
    EmitPath, Field, FieldKind, GeneratorError, GeneratorResult, MessageType, Oneof,
};

/// Emit the literal method of `message`.
pub fn emit_literal(ctx: &EmitContext<'_>, message: &MessageType) -> GeneratorResult<CodeWriter> {
    let locals = ctx.locals;

    let mut body = CodeWriter::new();
    for field in message.standalone_fields() {
        body.append(emit_field(ctx, message, field)?);
    }
    for group in &message.oneofs {
        body.append(emit_oneof(ctx, message, group)?);
    }

    let mut w = CodeWriter::new();
    w.line(&format!(
        "/// Renders this `{}` as an indented literal, one field per line.",
        message.name
    ));
    w.open(&format!(
        "pub fn {}(&{}, {}: &str) -> String {{",
        ctx.config.literal_method, locals.instance, locals.indent
    ));
    if body.is_empty() {
        w.line(&format!("let _ = {};", locals.indent));
        w.line("String::new()");
    } else {
        w.line(&format!("let mut {} = String::new();", locals.out));
        w.append(body);
        w.line(locals.out);
    }
    w.close("}");

    Ok(w)
}

fn emit_field(
    ctx: &EmitContext<'_>,
    message: &MessageType,
    field: &Field,
) -> GeneratorResult<CodeWriter> {
    check_supported(message, field)?;

    let ty = types::resolve(message, field)?;
    let member = ctx.member(&field_ident(&field.name));
    let guarded = ty.nullable || matches!(field.kind, FieldKind::Message(_));
    let operand = if guarded {
        Operand::Borrowed(ctx.locals.value.to_string())
    } else {
        Operand::Place(member.clone())
    };

    let lines = render_value(ctx, message, field, &field.name, &operand, "")?;

    let mut w = CodeWriter::new();
    if guarded {
        w.open(&format!("if let Some({}) = &{member} {{", ctx.locals.value));
        w.append(lines);
        w.close("}");
    } else {
        w.append(lines);
    }

    Ok(w)
}

fn emit_oneof(
    ctx: &EmitContext<'_>,
    message: &MessageType,
    group: &Oneof,
) -> GeneratorResult<CodeWriter> {
    let dispatch = oneof::emit_oneof_dispatch(ctx, message, group, |alternative, value| {
        check_supported(message, alternative)?;
        types::resolve(message, alternative)?;

        let variant = oneof::variant_name(alternative);
        render_value(ctx, message, alternative, &group.name, value, &variant)
    })?;

    let mut w = CodeWriter::new();
    w.open(&oneof::guard(ctx, group));
    w.append(dispatch);
    w.close("}");

    Ok(w)
}

/// Reject kinds the literal path cannot render, before any text is written.
fn check_supported(message: &MessageType, field: &Field) -> GeneratorResult<()> {
    if field.weak {
        return Err(GeneratorError::WeakField {
            message: message.name.clone(),
            field: field.name.clone(),
        });
    }

    match &field.kind {
        FieldKind::Bytes | FieldKind::Enum(_) | FieldKind::List(_) | FieldKind::Map { .. } => {
            Err(GeneratorError::UnsupportedKind {
                message: message.name.clone(),
                field: field.name.clone(),
                kind: field.kind.name().to_string(),
                path: EmitPath::Literal,
            })
        }
        _ => Ok(()),
    }
}

/// Lines rendering one value under `label`.
///
/// A non-empty `wrapper` encloses the value as `Wrapper(...)`, which is how
/// oneof alternatives name their variant.
fn render_value(
    ctx: &EmitContext<'_>,
    message: &MessageType,
    field: &Field,
    label: &str,
    operand: &Operand,
    wrapper: &str,
) -> GeneratorResult<CodeWriter> {
    let locals = ctx.locals;
    let (open, close) = if wrapper.is_empty() {
        (String::new(), "")
    } else {
        (format!("{wrapper}("), ")")
    };

    let verb = match &field.kind {
        FieldKind::Bool
        | FieldKind::Int32
        | FieldKind::Sint32
        | FieldKind::Sfixed32
        | FieldKind::Uint32
        | FieldKind::Fixed32
        | FieldKind::Int64
        | FieldKind::Sint64
        | FieldKind::Sfixed64
        | FieldKind::Uint64
        | FieldKind::Fixed64
        | FieldKind::Float
        | FieldKind::Double => "{}",
        FieldKind::String => "{:?}",
        FieldKind::Message(target) => {
            let mut w = CodeWriter::new();
            w.line(&format!(
                "{}.push_str(&format!(\"{{}}{label}: {open}{target}{{{{\\n\", {}));",
                locals.out, locals.indent
            ));
            w.line(&format!(
                "{}.push_str(&{}.{}(&[{}, {:?}].concat()));",
                locals.out,
                operand.expr(),
                ctx.config.literal_method,
                locals.indent,
                ctx.config.indent_unit
            ));
            w.line(&format!(
                "{}.push_str(&format!(\"{{}}}}}}{close},\\n\", {}));",
                locals.out, locals.indent
            ));
            return Ok(w);
        }
        FieldKind::Bytes | FieldKind::Enum(_) | FieldKind::List(_) | FieldKind::Map { .. } => {
            return Err(GeneratorError::UnsupportedKind {
                message: message.name.clone(),
                field: field.name.clone(),
                kind: field.kind.name().to_string(),
                path: EmitPath::Literal,
            });
        }
    };

    let mut w = CodeWriter::new();
    w.line(&format!(
        "{}.push_str(&format!(\"{{}}{label}: {open}{verb}{close},\\n\", {}, {}));",
        locals.out,
        locals.indent,
        operand.expr()
    ));
    Ok(w)
}
