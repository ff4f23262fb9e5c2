/*!
Reading example matrices and headlines into a context.

The input matrix is a plain text format: one row per line, a group label followed by the row's values.

```text
a 1 1 0
a 1 0 0
b 0 1 1
```

The optional headline file carries one line per coordinate: a name and the greatest value of the coordinate's domain.

```text
fever 1
temperature 3
```

Lines which fail to parse are noted and skipped, line by line; an input yielding no rows at all is an error.
*/

mod matrix_text;

use std::io::BufRead;

use crate::{
    context::Context,
    db::headline::Headline,
    types::err::ErrorKind,
};

impl Context {
    /// Reads a matrix in the group-label line format into the context.
    ///
    /// ```rust
    /// # use otter_learn::config::Config;
    /// # use otter_learn::context::Context;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut matrix = vec![];
    /// let _ = matrix.write(b"
    /// a 1 1 0
    /// a 1 0 0
    /// b 0 1 1
    /// ");
    ///
    /// assert!(the_context.read_matrix(matrix.as_slice()).is_ok());
    /// assert_eq!(the_context.groups.group_count(), 2);
    /// ```
    pub fn read_matrix(&mut self, reader: impl BufRead) -> Result<usize, ErrorKind> {
        matrix_text::read_matrix(self, reader)
    }

    /// Reads a headline file and fixes the result as the headline of the run.
    pub fn read_headline(&mut self, reader: impl BufRead) -> Result<(), ErrorKind> {
        let headline: Headline = matrix_text::read_headline(reader)?;
        self.set_headline(headline);
        Ok(())
    }
}
