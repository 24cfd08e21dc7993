use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::action::ResultItem;
use crate::error::Result;

/// Prints `items` to stdout, either as a numbered list or as a JSON array
/// for hosts that render results themselves.
pub fn print_items(items: &[ResultItem], json: bool) -> Result<()> {
    if json {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        write_json(&mut stdout, items)?;
    } else {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        write_list(&mut stdout, items)?;
    }

    Ok(())
}

/// One numbered line per item, followed by the command it would run.
pub fn write_list<W>(out: &mut W, items: &[ResultItem]) -> io::Result<()>
where
    W: WriteColor,
{
    let width = items.len().to_string().len();

    for (i, item) in items.iter().enumerate() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "{:>width$} ", i + 1, width = width)?;
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", item.name)?;
        out.reset()?;
        if item.description != item.name {
            write!(out, "  {}", item.description)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "{:width$} {}",
            "",
            item.on_enter.to_shell(),
            width = width
        )?;
    }

    out.flush()
}

/// The whole list as one line of JSON.
pub fn write_json<W>(out: &mut W, items: &[ResultItem]) -> Result<()>
where
    W: Write,
{
    serde_json::to_writer(&mut *out, items)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
