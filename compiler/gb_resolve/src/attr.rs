//! Typed reads of node attributes.

use std::num::ParseIntError;
use std::str::FromStr;

use gb_symtab::{NodeId, NodeIndex};

use crate::ResolveError;

/// Raw value of `attr` on `node`.
pub(crate) fn raw<'t>(
    index: &NodeIndex<'t>,
    node: NodeId,
    attr: &str,
) -> Result<&'t str, ResolveError> {
    let record = index.record(node);
    record
        .attr(attr)
        .ok_or_else(|| ResolveError::MissingAttribute {
            node: record.name().to_owned(),
            attr: attr.to_owned(),
        })
}

/// Decimal integer `attr` on `node`, parsed into the field's width.
pub(crate) fn int<T>(index: &NodeIndex<'_>, node: NodeId, attr: &str) -> Result<T, ResolveError>
where
    T: FromStr<Err = ParseIntError>,
{
    let value = raw(index, node, attr)?;
    value
        .parse()
        .map_err(|source| ResolveError::InvalidInteger {
            node: index.record(node).name().to_owned(),
            attr: attr.to_owned(),
            value: value.to_owned(),
            source,
        })
}

/// String literal `attr` on `node`, with one pair of surrounding double
/// quotes removed. Escapes inside the literal are kept verbatim.
pub(crate) fn string(
    index: &NodeIndex<'_>,
    node: NodeId,
    attr: &str,
) -> Result<String, ResolveError> {
    let value = raw(index, node, attr)?;
    Ok(unquote(value).to_owned())
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
