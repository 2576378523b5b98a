use std::ops::Range;

use crate::utils::error::Error;
use super::LinkIndex;


/// Occupancy of one link's spectrum, one slot per slice index. A slot holds
/// the id of the demand routed through it, or None when vacant.
#[derive(Clone, Debug, Default)]
pub struct SpectrumGrid {
    slots: Vec<Option<usize>>,
    watermark: Option<usize>,
}


impl SpectrumGrid {
    pub fn new(slices: usize) -> Self {
        SpectrumGrid { slots: vec![None; slices], watermark: None }
    }
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }
    pub fn owner(&self, slice: usize) -> Option<usize> {
        self.slots.get(slice).copied().flatten()
    }
    /// Highest slice index ever assigned and still held on this link.
    pub fn max_used(&self) -> Option<usize> {
        self.watermark
    }
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
    pub fn is_free(&self, start: usize, width: usize) -> bool {
        start + width <= self.slots.len()
            && self.slots[start..start + width].iter().all(Option::is_none)
    }
    pub fn assign(&mut self, link: LinkIndex, range: Range<usize>, demand: usize)
        -> Result<(), Error> {
        if range.end > self.slots.len() {
            return Err(Error::SliceOutOfRange(link, demand, range));
        }
        for slice in range.clone() {
            if let Some(owner) = self.slots[slice] {
                return Err(Error::SliceConflict(link, demand, range, owner));
            }
        }
        for slice in range.clone() {
            self.slots[slice] = Some(demand);
        }
        let top = range.end - 1;
        self.watermark = Some(self.watermark.map_or(top, |prev| prev.max(top)));
        Ok(())
    }
    pub fn clear(&mut self, link: LinkIndex, range: Range<usize>, demand: usize)
        -> Result<(), Error> {
        if range.end > self.slots.len() {
            return Err(Error::SliceOutOfRange(link, demand, range));
        }
        for slice in range.clone() {
            if self.slots[slice] != Some(demand) {
                return Err(Error::ReleaseMismatch(link, demand, range));
            }
        }
        for slice in range {
            self.slots[slice] = None;
        }
        self.watermark = self.slots.iter()
            .rposition(|slot| slot.is_some());
        Ok(())
    }
}
