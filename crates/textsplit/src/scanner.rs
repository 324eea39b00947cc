//! Region-aware reassembly of fragments into segments.
//!
//! The [`Scanner`] walks the fragments produced by [`Fragments`] left to
//! right. Open delimiters start a region that runs to its matching close,
//! separators flush the accumulated text, and everything else is collected
//! into the current segment.

use smallvec::{SmallVec, smallvec};

use crate::error::SplitError;
use crate::fragments::Fragments;
use crate::options::{OpenCloseCharacter, SplitOptions};

/// Fragments before a candidate delimiter that the ignore pattern sees.
/// The window ends `CONTEXT_WINDOW - 1` fragments after it.
const CONTEXT_WINDOW: usize = 3;

/// A single pass over the fragments of one text.
///
/// Most callers want [`split_text`], which also recovers from unbalanced
/// close delimiters. `Scanner` exposes the raw pass, which reports them.
///
/// # Examples
///
/// ```
/// use textsplit::{Scanner, SplitError, SplitOptions};
///
/// let options = SplitOptions::from(",");
/// let scanner = Scanner::new("a), b", &options);
/// assert!(matches!(scanner.scan(), Err(SplitError::UnbalancedClose { pair: 0, .. })));
/// ```
pub struct Scanner<'a> {
    options: &'a SplitOptions,
    pairs: &'a [OpenCloseCharacter],
    fragments: Vec<&'a str>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, options: &'a SplitOptions) -> Self {
        Self::with_pairs(text, options, &options.open_close_characters)
    }

    pub(crate) fn with_pairs(
        text: &'a str,
        options: &'a SplitOptions,
        pairs: &'a [OpenCloseCharacter],
    ) -> Self {
        let fragments: Vec<&str> = Fragments::with_pairs(text, options, pairs).collect();
        log::trace!(
            "split: {} fragments, {} delimiter pairs",
            fragments.len(),
            pairs.len()
        );

        Self {
            options,
            pairs,
            fragments,
        }
    }

    /// The fragments this scanner walks over.
    pub fn fragments(&self) -> &[&'a str] {
        &self.fragments
    }

    /// Runs the pass, failing on the first bare close delimiter.
    pub fn scan(&self) -> Result<Vec<String>, SplitError> {
        let separate_open_close = self.options.is_separate_open_close();
        let separate_first = self.options.separate_first;
        let len = self.fragments.len();
        let mut segments = Vec::new();
        let mut buffer = String::new();
        let mut index = 0;

        while index < len {
            let fragment = self.fragments[index].trim();

            if let Some(pair) = self.open_pair(fragment) {
                if self.is_ignored(pair, index) {
                    buffer.push_str(self.fragments[index]);
                    index += 1;
                    continue;
                }

                let close = self.find_close(index, pair);

                match close {
                    Some(close) if separate_open_close => {
                        if flush(&mut segments, &mut buffer) && separate_first {
                            break;
                        }
                        segments.push(self.join(index, close));
                        if separate_first {
                            break;
                        }
                    }
                    Some(close) => buffer.push_str(&self.join(index, close)),
                    // Unterminated regions run to the end of the text.
                    None => buffer.push_str(&self.join(index, len - 1)),
                }
                index = close.map_or(len, |close| close + 1);
                continue;
            }

            if let Some(pair) = self.close_pair(fragment) {
                if !self.is_ignored(pair, index) {
                    return Err(SplitError::UnbalancedClose {
                        pair,
                        close: fragment.to_string(),
                        position: index,
                    });
                }
            }

            if !self.options.separate_only_open_close && self.options.is_separator(fragment) {
                flush(&mut segments, &mut buffer);
                if separate_first {
                    break;
                }
            } else {
                buffer.push_str(self.fragments[index]);
            }
            index += 1;
        }

        flush(&mut segments, &mut buffer);
        Ok(segments)
    }

    fn open_pair(&self, fragment: &str) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.open == fragment)
    }

    fn close_pair(&self, fragment: &str) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.close == fragment)
    }

    /// Whether the pair's ignore pattern matches the context around `index`.
    fn is_ignored(&self, pair: usize, index: usize) -> bool {
        let Some(pattern) = &self.pairs[pair].ignore else {
            return false;
        };
        let start = index.saturating_sub(CONTEXT_WINDOW);
        let end = (index + CONTEXT_WINDOW).min(self.fragments.len());

        pattern.is_match(&self.fragments[start..end].concat())
    }

    /// Index of the close matching the open at `open_index`.
    ///
    /// Regions of any registered pair may nest inside; only the innermost
    /// region's close is recognized. `None` when the region never closes.
    fn find_close(&self, open_index: usize, pair: usize) -> Option<usize> {
        let mut stack: SmallVec<[usize; 8]> = smallvec![pair];

        for index in open_index + 1..self.fragments.len() {
            let fragment = self.fragments[index].trim();
            let innermost = *stack.last()?;

            if fragment == self.pairs[innermost].close && !self.is_ignored(innermost, index) {
                stack.pop();
                if stack.is_empty() {
                    return Some(index);
                }
            } else if let Some(inner) = self.open_pair(fragment) {
                if !self.is_ignored(inner, index) {
                    stack.push(inner);
                }
            }
        }
        None
    }

    fn join(&self, start: usize, end: usize) -> String {
        self.fragments[start..=end].concat()
    }
}

/// Moves the buffer into `segments`; returns whether a segment was produced.
fn flush(segments: &mut Vec<String>, buffer: &mut String) -> bool {
    let segment = buffer.trim();
    let produced = !segment.is_empty();

    if produced {
        segments.push(segment.to_string());
    }
    buffer.clear();
    produced
}

/// Splits `text` on a separator without breaking open/close regions.
///
/// `options` is either a [`SplitOptions`] or a bare separator string.
/// Segments are trimmed and blank segments are dropped.
///
/// A close delimiter with no matching open does not fail the split: the
/// offending pair is removed from the delimiter table and the whole text is
/// split again without it.
///
/// # Examples
///
/// ```
/// use textsplit::split_text;
///
/// assert_eq!(
///     split_text("url(https://example.com/a.jpg)", ":"),
///     vec!["url(https://example.com/a.jpg)"]
/// );
///
/// // The stray `)` drops parentheses from the table.
/// assert_eq!(split_text("a), b", ","), vec!["a)", "b"]);
/// ```
pub fn split_text(text: &str, options: impl Into<SplitOptions>) -> Vec<String> {
    let options = options.into();
    let mut pairs = options.open_close_characters.clone();

    loop {
        let result = Scanner::with_pairs(text, &options, &pairs).scan();

        match result {
            Err(SplitError::UnbalancedClose {
                pair,
                close,
                position,
            }) => {
                log::trace!(
                    "split: unbalanced {:?} at fragment {}, retrying without it",
                    close,
                    position
                );
                pairs.remove(pair);
            }
            Ok(segments) => return segments,
            Err(err) => {
                log::debug!("split: giving up on {:?}: {}", text, err);
                return Vec::new();
            }
        }
    }
}

/// Splits on whitespace runs.
///
/// ```
/// use textsplit::split_space;
///
/// assert_eq!(split_space("'a,b' c 'd,e'"), vec!["'a,b'", "c", "'d,e'"]);
/// ```
pub fn split_space(text: &str) -> Vec<String> {
    split_text(text, "")
}

/// Splits on commas.
///
/// ```
/// use textsplit::split_comma;
///
/// assert_eq!(split_comma("'a,b',c,'d,e'"), vec!["'a,b'", "c", "'d,e'"]);
/// ```
pub fn split_comma(text: &str) -> Vec<String> {
    split_text(text, ",")
}
