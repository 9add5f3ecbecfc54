use std::io::{BufRead, Write};

use error_chain::bail;
use tracing::debug;

use crate::errors::*;
use crate::units::{ColumnsCount, RowsCount};

pub const PROMPT: &str = "Enter the dimensions of the maze (m, n): ";
pub const RETRY_MESSAGE: &str = "Dimensions must be two integers greater than 1";

/// Parse a line such as `5, 7` into logical maze dimensions.
///
/// Both numbers must be non-negative integers separated by a single comma. Dimensions
/// below the minimum maze size are reported as `InvalidDimension`, anything else that
/// does not fit the format as `MalformedDimensions`.
pub fn parse_dimensions(line: &str) -> Result<(RowsCount, ColumnsCount)> {
    let malformed = || Error::from(ErrorKind::MalformedDimensions(line.trim().to_owned()));

    let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
    if fields.len() != 2 {
        return Err(malformed());
    }

    let rows = fields[0].parse::<usize>().map_err(|_| malformed())?;
    let columns = fields[1].parse::<usize>().map_err(|_| malformed())?;
    validate_dimensions(rows, columns)?;

    Ok((RowsCount(rows), ColumnsCount(columns)))
}

/// Dimensions from the `--rows` and `--columns` flags: `None` when neither was given so the
/// caller should prompt, an `IncompleteDimensions` error when only one was.
pub fn dimensions_from_flags(rows: Option<usize>,
                             columns: Option<usize>)
                             -> Result<Option<(RowsCount, ColumnsCount)>> {
    match (rows, columns) {
        (Some(rows), Some(columns)) => {
            validate_dimensions(rows, columns)?;
            Ok(Some((RowsCount(rows), ColumnsCount(columns))))
        }
        (Some(_), None) => bail!(ErrorKind::IncompleteDimensions("--rows", "--columns")),
        (None, Some(_)) => bail!(ErrorKind::IncompleteDimensions("--columns", "--rows")),
        (None, None) => Ok(None),
    }
}

/// Ask for `m, n` on `writer` until a usable pair is read from `reader`.
///
/// Unusable lines are answered with `RETRY_MESSAGE` and the prompt is repeated. Fails only
/// on I/O errors or with `EndOfInput` when the reader runs dry.
pub fn prompt_for_dimensions<R: BufRead + ?Sized, W: Write + ?Sized>(reader: &mut R,
                                                                     writer: &mut W)
                                                                     -> Result<(RowsCount, ColumnsCount)> {
    loop {
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            bail!(ErrorKind::EndOfInput);
        }

        match parse_dimensions(&line) {
            Ok(dimensions) => return Ok(dimensions),
            Err(e) => {
                debug!("Rejected maze dimensions: {}", e);
                writeln!(writer, "{}", RETRY_MESSAGE)?;
            }
        }
    }
}
