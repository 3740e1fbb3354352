use regex::Captures;

use crate::pattern::CompiledTemplate;
use crate::vartype::{Arguments, ConversionResult};

/// Coerces the named captures of `template` in variable order.
pub(crate) fn coerce_captures(
    template: &CompiledTemplate,
    captures: &Captures<'_>,
) -> ConversionResult<Arguments> {
    let mut args = Arguments::with_capacity(template.variables().len());
    for var in template.variables() {
        let raw = captures.name(&var.key).map_or("", |m| m.as_str());
        args.push(&var.key, var.ty.coerce(&var.key, raw)?);
    }
    Ok(args)
}
