use crate::network::Path;
use crate::utils::error::Error;


/// Where and how a routed demand sits on the network: the links it crosses
/// and the first slice of its block. The block width is the demand's load.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub path: Path,
    pub slice: usize,
}

/// Admission outcome of one demand. Transitions exactly once, away from
/// Pending; a second transition is an internal-consistency error.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Pending,
    Routed(Assignment),
    Blocked,
}

#[derive(Clone, Debug, Default)]
pub struct Solution {
    resolutions: Vec<Resolution>,
    routed: usize,
    blocked: usize,
    occupied: usize,
}


impl Assignment {
    pub fn new(path: Path, slice: usize) -> Self {
        Assignment { path, slice }
    }
}

impl Resolution {
    pub fn is_pending(&self) -> bool {
        matches!(self, Resolution::Pending)
    }
    pub fn is_routed(&self) -> bool {
        matches!(self, Resolution::Routed(_))
    }
    pub fn is_blocked(&self) -> bool {
        matches!(self, Resolution::Blocked)
    }
}

impl Solution {
    pub fn new() -> Self {
        Solution { ..Default::default() }
    }
    pub fn resize(&mut self, len: usize) {
        debug_assert!(len >= self.resolutions.len());
        self.resolutions.resize(len, Resolution::Pending);
    }
    pub fn len(&self) -> usize {
        self.resolutions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }
    pub fn resolution(&self, id: usize) -> &Resolution {
        debug_assert!(id < self.resolutions.len());
        &self.resolutions[id]
    }
    pub fn assignment(&self, id: usize) -> Option<&Assignment> {
        match self.resolution(id) {
            Resolution::Routed(assignment) => Some(assignment),
            _ => None,
        }
    }
    pub fn flag_routed(&mut self, id: usize, assignment: Assignment, load: usize)
        -> Result<(), Error> {
        if !self.resolutions[id].is_pending() {
            return Err(Error::DoubleResolution(id));
        }
        self.occupied += assignment.path.len() * load;
        self.resolutions[id] = Resolution::Routed(assignment);
        self.routed += 1;
        Ok(())
    }
    pub fn flag_blocked(&mut self, id: usize) -> Result<(), Error> {
        if !self.resolutions[id].is_pending() {
            return Err(Error::DoubleResolution(id));
        }
        self.resolutions[id] = Resolution::Blocked;
        self.blocked += 1;
        Ok(())
    }
    pub fn routed(&self) -> usize {
        self.routed
    }
    pub fn blocked(&self) -> usize {
        self.blocked
    }
    /// Slices held network-wide by routed demands (load times hops, summed).
    pub fn occupied(&self) -> usize {
        self.occupied
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_counts_resolutions() {
        let mut solution = Solution::new();
        solution.resize(3);
        assert!(solution.resolution(0).is_pending());
        solution.flag_routed(0, Assignment::new(vec![0.into(), 1.into()], 2), 3).unwrap();
        solution.flag_blocked(1).unwrap();
        assert_eq!(solution.routed(), 1);
        assert_eq!(solution.blocked(), 1);
        assert_eq!(solution.occupied(), 6);
        assert_eq!(solution.assignment(0).unwrap().slice, 2);
        assert_eq!(solution.assignment(1), None);
    }
    #[test]
    fn it_rejects_double_resolution() {
        let mut solution = Solution::new();
        solution.resize(1);
        solution.flag_blocked(0).unwrap();
        let err = solution.flag_routed(0, Assignment::new(vec![], 0), 1).unwrap_err();
        assert_eq!(err, Error::DoubleResolution(0));
    }
}
