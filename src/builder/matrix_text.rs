use std::io::BufRead;

use crate::{
    context::Context,
    db::headline::{Attribute, Headline},
    misc::log::targets::{self},
    structures::{row::Row, value::Value},
    types::err::{self, ErrorKind},
};

/// Reads a matrix in the group-label line format into `context`, returning the number of rows read.
///
/// The arity of the run is fixed by the first well-formed line.
/// Later lines of a different width, and lines with unparsable values, are noted and skipped.
pub fn read_matrix(context: &mut Context, mut reader: impl BufRead) -> Result<usize, ErrorKind> {
    let mut buffer = String::with_capacity(1024);

    let mut line_counter = 0;
    let mut row_counter = 0;
    let mut skip_counter = 0;
    let mut arity: Option<usize> = None;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(ErrorKind::from(err::DataError::Line(line_counter))),
        }

        let mut tokens = buffer.split_whitespace();
        let label = match tokens.next() {
            Some(label) => label,
            None => continue,
        };

        let mut values: Vec<Value> = Vec::default();
        let mut parsed = true;
        for token in tokens {
            match token.parse::<Value>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    parsed = false;
                    break;
                }
            }
        }

        if !parsed || values.is_empty() {
            log::warn!(target: targets::PARSE, "Skipped unparsable line {line_counter}");
            skip_counter += 1;
            continue;
        }

        match arity {
            None => arity = Some(values.len()),
            Some(expected) if expected != values.len() => {
                log::warn!(
                    target: targets::PARSE,
                    "Skipped line {line_counter}: expected {expected} values, found {}",
                    values.len()
                );
                skip_counter += 1;
                continue;
            }
            Some(_) => {}
        }

        context.add_row(label, Row::from(values))?;
        row_counter += 1;
    }

    if skip_counter > 0 {
        log::warn!(target: targets::PARSE, "Skipped {skip_counter} of {line_counter} lines");
    }

    match row_counter {
        0 => Err(ErrorKind::from(err::DataError::Empty)),
        _ => Ok(row_counter),
    }
}

/// Reads a headline file: one line per coordinate, a name followed by the greatest value of the domain.
pub fn read_headline(mut reader: impl BufRead) -> Result<Headline, ErrorKind> {
    let mut buffer = String::with_capacity(1024);

    let mut attributes: Vec<Attribute> = Vec::default();
    let mut line_counter = 0;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(ErrorKind::from(err::DataError::Line(line_counter))),
        }

        let mut tokens = buffer.split_whitespace();
        let name = match tokens.next() {
            Some(name) => name.to_owned(),
            None => continue,
        };

        let dmax: Value = match tokens.next().and_then(|token| token.parse().ok()) {
            Some(dmax) => dmax,
            None => return Err(ErrorKind::from(err::DataError::Value(line_counter))),
        };

        attributes.push(Attribute { name, dmax });
    }

    match attributes.is_empty() {
        true => Err(ErrorKind::from(err::DataError::Empty)),
        false => Ok(Headline::from_attributes(attributes)),
    }
}
