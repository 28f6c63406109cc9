//! The accumulation-buffer state machine for the flat record format.
//!
//! Pipeline:
//!   raw &str
//!     └─ parse_str()    → physical lines
//!          └─ parse_lines() → accumulate, split, emit or discard

use motley_core::person::Person;

/// Parse records from raw text. Line endings may be LF or CRLF.
pub fn parse_str(input: &str) -> Vec<Person> {
  parse_lines(input.lines())
}

/// Parse records from an in-order sequence of physical lines.
///
/// The machine is a single buffer: empty → accumulating → emit or discard.
/// A line that completes a well-formed record emits it and clears the
/// buffer; a non-integer color field discards the whole buffer; a record
/// still incomplete at end of input is dropped without a trace.
///
/// Ids are assigned sequentially starting at 1, in emission order.
pub fn parse_lines<'a, I>(lines: I) -> Vec<Person>
where
  I: IntoIterator<Item = &'a str>,
{
  let mut records = Vec::new();
  let mut buffer = String::new();
  let mut next_id = 1i64;

  for line in lines {
    // Blank lines never start or extend an accumulation.
    if line.trim().is_empty() {
      continue;
    }

    buffer.push_str(line);

    let fields: Vec<&str> = buffer.split(',').map(str::trim).collect();

    if fields.len() < 4 {
      // Still incomplete. Leave a boundary so the next physical line
      // cannot fuse into the last field.
      buffer.push(' ');
      continue;
    }

    // A field count can only reach 4 with a parseable color; anything else
    // throws the whole accumulated record away. Note the field is not
    // checked against the catalog here — out-of-set codes are stored as-is
    // and render as the unknown sentinel.
    let Ok(color_id) = fields[3].parse::<i64>() else {
      buffer.clear();
      continue;
    };

    // Field 3 is "zipCode city", split on the first space. A value with no
    // space is all zip code.
    let (zip_code, city) = match fields[2].split_once(' ') {
      Some((zip, rest)) => (zip.to_owned(), rest.to_owned()),
      None => (fields[2].to_owned(), String::new()),
    };

    records.push(Person {
      id: next_id,
      last_name: fields[0].to_owned(),
      name: fields[1].to_owned(),
      zip_code,
      city,
      color_id,
    });
    next_id += 1;
    buffer.clear();
  }

  records
}
