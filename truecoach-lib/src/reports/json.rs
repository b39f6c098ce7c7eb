use crate::Result;
use core::fmt::Write;
use ohno::IntoAppError;
use serde::Serialize;

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn generate<T: Serialize + ?Sized, W: Write>(value: &T, writer: &mut W) -> Result<()> {
    let text = serde_json::to_string_pretty(value).into_app_err("unable to serialize report")?;
    writeln!(writer, "{text}")?;
    Ok(())
}
