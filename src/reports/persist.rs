/*!
The persistence format for learned formulas.

A stored formula is line-oriented:

- A header line `<label> <arity> <width> <offset>`, where arity is the width of the unrestricted examples and width the number of kept coordinates.
- A line of the kept coordinate indices, 1-based and shifted by the offset.
- One line per clause: literals `[-]<var>[:<value>]` terminated by a lone `0`.

A literal's sign fixes its direction --- negative for an upper bound, positive for a lower bound --- and the `:value` carries the bound, mandatory whenever the coordinate's domain is not boolean.
A both literal is written as its two halves, one of each sign, on the same variable.

Reloading validates every variable against the declared kept set: a clause naming a variable outside the set is rejected and noted, clause by clause.
*/

use std::io::{BufRead, Write};

use crate::{
    db::headline::Headline,
    misc::log::targets::{self},
    reports::TaskReport,
    structures::{clause::Clause, formula::Formula, literal::Literal, value::Value},
    types::err::{self, ErrorKind},
};

/// A formula reloaded from its stored form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredFormula {
    /// The label of the task the formula was learned for.
    pub label: String,

    /// The arity of the unrestricted examples.
    pub arity: usize,

    /// The shift applied to the stored coordinate indices.
    pub offset: usize,

    /// The kept coordinates, as original indices.
    pub kept: Vec<usize>,

    /// The formula, over the kept coordinates.
    pub formula: Formula,
}

/// Writes the learned formula of `report`, if any, in the persistence format.
pub fn write_formula(
    writer: &mut impl Write,
    report: &TaskReport,
    headline: &Headline,
    offset: usize,
) -> Result<(), ErrorKind> {
    let Some(formula) = report.formula() else {
        return Ok(());
    };

    let io_err = |_| ErrorKind::from(err::ReportError::Io);

    writeln!(
        writer,
        "{} {} {} {}",
        report.label,
        report.arity,
        report.kept.len(),
        offset
    )
    .map_err(io_err)?;

    let kept_line: Vec<String> = report
        .kept
        .iter()
        .map(|coordinate| (coordinate + 1 + offset).to_string())
        .collect();
    writeln!(writer, "{}", kept_line.join(" ")).map_err(io_err)?;

    for clause in formula.clauses() {
        let mut tokens: Vec<String> = Vec::default();
        for (position, literal) in clause.present_literals() {
            let coordinate = report.kept[position];
            let variable = coordinate + 1 + offset;
            let boolean = headline.dmax(coordinate) == 1;
            let (leq, geq) = literal.bounds();

            if let Some(n) = leq {
                match boolean && n == 0 {
                    true => tokens.push(format!("-{variable}")),
                    false => tokens.push(format!("-{variable}:{n}")),
                }
            }
            if let Some(p) = geq {
                match boolean && p == 1 {
                    true => tokens.push(format!("{variable}")),
                    false => tokens.push(format!("{variable}:{p}")),
                }
            }
        }
        tokens.push("0".to_string());
        writeln!(writer, "{}", tokens.join(" ")).map_err(io_err)?;
    }

    Ok(())
}

/// Reads a stored formula.
///
/// Clauses naming a variable outside the declared kept set are rejected and noted.
pub fn read_formula(mut reader: impl BufRead) -> Result<StoredFormula, ErrorKind> {
    let mut buffer = String::with_capacity(1024);

    // Header.
    if read_content_line(&mut reader, &mut buffer).is_none() {
        return Err(ErrorKind::from(err::ReportError::Header));
    }
    let mut header = buffer.split_whitespace();
    let label = match header.next() {
        Some(label) => label.to_owned(),
        None => return Err(ErrorKind::from(err::ReportError::Header)),
    };
    let arity: usize = parse_header_field(header.next())?;
    let width: usize = parse_header_field(header.next())?;
    let offset: usize = parse_header_field(header.next())?;

    // Kept coordinates.
    buffer.clear();
    if read_content_line(&mut reader, &mut buffer).is_none() {
        return Err(ErrorKind::from(err::ReportError::KeptCoordinates));
    }
    let mut kept: Vec<usize> = Vec::with_capacity(width);
    for token in buffer.split_whitespace() {
        let stored: usize = token
            .parse()
            .map_err(|_| ErrorKind::from(err::ReportError::KeptCoordinates))?;
        let coordinate = stored
            .checked_sub(1 + offset)
            .ok_or(ErrorKind::from(err::ReportError::KeptCoordinates))?;
        if coordinate >= arity {
            return Err(ErrorKind::from(err::DataError::VariableOutOfBounds {
                variable: stored,
            }));
        }
        kept.push(coordinate);
    }
    if kept.len() != width {
        return Err(ErrorKind::from(err::ReportError::KeptCoordinates));
    }

    // Clauses, to the end of the input.
    let mut formula = Formula::new(width);
    let mut line_counter = 2;
    loop {
        buffer.clear();
        match read_content_line(&mut reader, &mut buffer) {
            None => break,
            Some(()) => line_counter += 1,
        }

        match parse_clause(&buffer, &kept, offset) {
            Ok(clause) => formula.push(clause),
            Err(rejection) => {
                log::warn!(target: targets::PARSE, "Rejected clause at line {line_counter}: {rejection:?}");
            }
        }
    }

    Ok(StoredFormula {
        label,
        arity,
        offset,
        kept,
        formula,
    })
}

fn parse_header_field(token: Option<&str>) -> Result<usize, ErrorKind> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or(ErrorKind::from(err::ReportError::Header))
}

/// Reads the next non-empty line into `buffer`, or nothing at the end of the input.
fn read_content_line(reader: &mut impl BufRead, buffer: &mut String) -> Option<()> {
    loop {
        buffer.clear();
        match reader.read_line(buffer) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {
                if !buffer.trim().is_empty() {
                    return Some(());
                }
            }
        }
    }
}

/// Parses one clause line against the declared kept set.
fn parse_clause(line: &str, kept: &[usize], offset: usize) -> Result<Clause, ErrorKind> {
    let mut clause = Clause::fresh(kept.len());

    for token in line.split_whitespace() {
        if token == "0" {
            break;
        }

        let (negative, token) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token),
        };

        let (variable, bound) = match token.split_once(':') {
            Some((variable, bound)) => {
                let bound: Value = bound
                    .parse()
                    .map_err(|_| ErrorKind::from(err::DataError::Line(0)))?;
                (variable, Some(bound))
            }
            None => (token, None),
        };

        let stored: usize = variable
            .parse()
            .map_err(|_| ErrorKind::from(err::DataError::Line(0)))?;
        let coordinate = stored
            .checked_sub(1 + offset)
            .ok_or(ErrorKind::from(err::DataError::VariableOutOfBounds {
                variable: stored,
            }))?;

        let position = kept.iter().position(|k| *k == coordinate).ok_or(
            ErrorKind::from(err::DataError::VariableOutOfBounds { variable: stored }),
        )?;

        // Boolean defaults: a bare positive literal is a lower bound at one, a bare negative an upper bound at zero.
        let literal = match negative {
            true => Literal::Leq(bound.unwrap_or(0)),
            false => Literal::Geq(bound.unwrap_or(1)),
        };

        let merged = clause.literal(position).or(literal);
        clause.set_literal(position, merged);
    }

    Ok(clause)
}
