use std::ops::Range;

use thiserror::Error;

use crate::network::LinkIndex;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("demand #{0:02} was resolved twice")]
    DoubleResolution(usize),
    #[error("demand #{1:02} reserved slices {2:?} on {0:?} already held by demand #{3:02}")]
    SliceConflict(LinkIndex, usize, Range<usize>, usize),
    #[error("demand #{1:02} released slices {2:?} on {0:?} it does not hold")]
    ReleaseMismatch(LinkIndex, usize, Range<usize>),
    #[error("demand #{1:02} addressed slices {2:?} beyond the spectrum of {0:?}")]
    SliceOutOfRange(LinkIndex, usize, Range<usize>),
}
