//! Column-aligned text report.

use std::io::{self, Write};

use super::{Decode, COLUMN_WIDTH};
use crate::value::{ResultSet, Value};

/// Writes one section per host, hosts in sorted order.
///
/// Fields keep their record order and blank fields are skipped. Map entries
/// are sorted by raw key and printed under the field name with their decoded
/// key; list items are printed one per line.
pub(crate) fn write_text<W: Write + ?Sized>(
    out: &mut W,
    results: &ResultSet,
    decode: Decode<'_>,
) -> io::Result<()> {
    for (host, record) in results {
        writeln!(out, "{host}:")?;

        for (field, value) in record.iter() {
            if value.is_blank() {
                continue;
            }

            match value {
                Value::Map(entries) => {
                    writeln!(out, "\t{field}:")?;
                    for (key, scalar) in entries {
                        writeln!(
                            out,
                            "\t\t{:<width$}: {:<width$}",
                            decode(key, false),
                            scalar,
                            width = COLUMN_WIDTH
                        )?;
                    }
                }
                Value::List(items) => {
                    writeln!(out, "\t{field}:")?;
                    for item in items {
                        writeln!(out, "\t\t{item:<width$}", width = COLUMN_WIDTH)?;
                    }
                }
                Value::Scalar(scalar) => {
                    writeln!(
                        out,
                        "\t{field:<width$}: {scalar:<width$}",
                        width = COLUMN_WIDTH
                    )?;
                }
                Value::Null => {}
            }
        }
    }

    Ok(())
}
