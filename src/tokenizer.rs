/// Index of the first `,` at or after `offset`, `None` once the sentence ends.
pub fn next_field(sentence: &[u8], offset: usize) -> Option<usize> {
    sentence
        .get(offset..)?
        .iter()
        .position(|&byte| byte == b',')
        .map(|position| offset + position)
}

/// Lazily splits a sentence into comma separated fields.
///
/// Yields `(field index, raw bytes)`. Two delimiters in a row yield an empty
/// slice rather than being skipped.
pub struct Fields<'a> {
    sentence: &'a [u8],
    offset: usize,
    index: usize,
    done: bool,
}

impl<'a> Fields<'a> {
    pub fn new(sentence: &'a [u8]) -> Self {
        Self::starting_at(sentence, 0)
    }

    /// Resumes splitting at `offset`, which must be the start of a field.
    /// The first field yielded has index 0.
    pub fn starting_at(sentence: &'a [u8], offset: usize) -> Self {
        Self {
            sentence,
            offset,
            index: 0,
            done: offset > sentence.len(),
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = (usize, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let start = self.offset;
        let end = match next_field(self.sentence, start) {
            Some(delimiter) => {
                self.offset = delimiter + 1;
                delimiter
            }
            None => {
                self.done = true;
                self.sentence.len()
            }
        };

        let index = self.index;
        self.index += 1;
        Some((index, &self.sentence[start..end]))
    }
}
