//! Emission of the JSON node tree method.
//!
//! Scalars map onto `serde_json::Value` as follows:
//!
//! - `bool` becomes a boolean node
//! - 32-bit integers, `float` and `double` become numbers via `f64::from`
//! - 64-bit integers become base-10 strings, since JSON numbers only carry
//!   53 bits of mantissa
//! - `string` becomes a string node
//!
//! Message fields recurse into the target's own method. Absent message
//! fields, unset scalars with presence and unset oneofs contribute no key.

use super::context::{CodeWriter, EmitContext, Operand};
use super::naming::field_ident;
use super::oneof;
use super::types;
use protodump_core::{
    EmitPath, Field, FieldKind, GeneratorError, GeneratorResult, MessageType, Oneof,
};

/// Emit the JSON method of `message`.
pub fn emit_json(ctx: &EmitContext<'_>, message: &MessageType) -> GeneratorResult<CodeWriter> {
    let json = ctx.json();
    let locals = ctx.locals;

    let mut body = CodeWriter::new();
    for field in message.standalone_fields() {
        body.append(emit_field(ctx, message, field)?);
    }
    for group in &message.oneofs {
        body.append(emit_oneof(ctx, message, group)?);
    }

    let mut w = CodeWriter::new();
    w.line(&format!("/// Builds the JSON node tree of this `{}`.", message.name));
    w.open(&format!(
        "pub fn {}(&{}) -> {json}::Value {{",
        ctx.config.json_method, locals.instance
    ));
    if body.is_empty() {
        w.line(&format!("{json}::Value::Object({json}::Map::new())"));
    } else {
        w.line(&format!("let mut {} = {json}::Map::new();", locals.fields));
        w.append(body);
        w.line(&format!("{json}::Value::Object({})", locals.fields));
    }
    w.close("}");

    Ok(w)
}

fn emit_field(
    ctx: &EmitContext<'_>,
    message: &MessageType,
    field: &Field,
) -> GeneratorResult<CodeWriter> {
    if field.weak {
        return Err(GeneratorError::WeakField {
            message: message.name.clone(),
            field: field.name.clone(),
        });
    }

    let ty = types::resolve(message, field)?;
    let member = ctx.member(&field_ident(&field.name));
    let guarded = ty.nullable || matches!(field.kind, FieldKind::Message(_));
    let operand = if guarded {
        Operand::Borrowed(ctx.locals.value.to_string())
    } else {
        Operand::Place(member.clone())
    };

    let insert = format!(
        "{}.insert({:?}.to_string(), {});",
        ctx.locals.fields,
        field.json_name,
        value_expr(ctx, message, field, &operand)?
    );

    let mut w = CodeWriter::new();
    if guarded {
        w.open(&format!("if let Some({}) = &{member} {{", ctx.locals.value));
        w.line(&insert);
        w.close("}");
    } else {
        w.line(&insert);
    }

    Ok(w)
}

fn emit_oneof(
    ctx: &EmitContext<'_>,
    message: &MessageType,
    group: &Oneof,
) -> GeneratorResult<CodeWriter> {
    let json = ctx.json();
    let entry = ctx.locals.entry;

    let dispatch = oneof::emit_oneof_dispatch(ctx, message, group, |alternative, value| {
        if alternative.weak {
            return Err(GeneratorError::WeakField {
                message: message.name.clone(),
                field: alternative.name.clone(),
            });
        }
        types::resolve(message, alternative)?;

        let mut arm = CodeWriter::new();
        arm.line(&format!(
            "{entry}.insert(\"case\".to_string(), {json}::Value::String({:?}.to_string()));",
            alternative.json_name
        ));
        arm.line(&format!(
            "{entry}.insert(\"value\".to_string(), {});",
            value_expr(ctx, message, alternative, value)?
        ));
        Ok(arm)
    })?;

    let mut w = CodeWriter::new();
    w.open(&oneof::guard(ctx, group));
    w.line(&format!("let mut {entry} = {json}::Map::new();"));
    w.append(dispatch);
    w.line(&format!(
        "{}.insert({:?}.to_string(), {json}::Value::Object({entry}));",
        ctx.locals.fields,
        oneof::json_key(group)
    ));
    w.close("}");

    Ok(w)
}

/// Expression producing the JSON node of one value of `field`.
fn value_expr(
    ctx: &EmitContext<'_>,
    message: &MessageType,
    field: &Field,
    operand: &Operand,
) -> GeneratorResult<String> {
    let json = ctx.json();

    let expr = match &field.kind {
        FieldKind::Bool => format!("{json}::Value::Bool({})", operand.copied()),
        FieldKind::Int32
        | FieldKind::Sint32
        | FieldKind::Sfixed32
        | FieldKind::Uint32
        | FieldKind::Fixed32
        | FieldKind::Float
        | FieldKind::Double => format!("{json}::Value::from(f64::from({}))", operand.copied()),
        FieldKind::Int64
        | FieldKind::Sint64
        | FieldKind::Sfixed64
        | FieldKind::Uint64
        | FieldKind::Fixed64 => format!("{json}::Value::String({}.to_string())", operand.expr()),
        FieldKind::String => format!("{json}::Value::String({}.clone())", operand.expr()),
        FieldKind::Message(_) => format!("{}.{}()", operand.expr(), ctx.config.json_method),
        FieldKind::Bytes | FieldKind::Enum(_) | FieldKind::List(_) | FieldKind::Map { .. } => {
            return Err(GeneratorError::UnsupportedKind {
                message: message.name.clone(),
                field: field.name.clone(),
                kind: field.kind.name().to_string(),
                path: EmitPath::Json,
            });
        }
    };

    Ok(expr)
}
